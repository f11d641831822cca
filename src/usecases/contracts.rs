use anyhow::Result;

use crate::domain::{
    events::AppEvent,
    routing::{Location, NavStack},
    session::Session,
    shell_state::ShellState,
    ui_state::UiStoreHandle,
};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

/// Seam to the navigation collaborator. `replace` swaps the visible screen
/// without growing back-history.
pub trait Router {
    fn location(&self) -> &Location;
    fn replace(&mut self, path: &str) -> Result<()>;
}

/// Seam to the auth collaborator. The session is owned over there; this
/// crate only reads it and asks for transitions.
pub trait AuthAdapter {
    #[cfg_attr(not(test), allow(dead_code))]
    fn session(&self) -> &Session;
    /// Finishes the cold-start credential check. Idempotent once resolved.
    fn resolve_initial(&mut self) -> Result<Session>;
    fn sign_in(&mut self) -> Result<Session>;
    fn sign_out(&mut self) -> Result<Session>;
}

impl Router for NavStack {
    fn location(&self) -> &Location {
        self.current()
    }

    fn replace(&mut self, path: &str) -> Result<()> {
        self.replace_current(path);
        Ok(())
    }
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn store(&self) -> &UiStoreHandle;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}
