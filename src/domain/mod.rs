//! Domain layer: sessions, routing rules, and shared UI state.

pub mod events;
pub mod routing;
pub mod session;
pub mod shell_state;
pub mod ui_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
