use std::path::Path;

use crate::{
    auth::LocalAuthAdapter,
    infra::{self, config::FileConfigAdapter, contracts::ConfigAdapter, error::AppError},
    ui,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        shell::DefaultShellOrchestrator,
    },
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(config_path)?;
    infra::logging::init(&context.config.logging)?;

    Ok(context)
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter.load().map_err(AppError::Other)?;

    Ok(AppContext::new(config))
}

pub struct ComposedShell {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

/// Wires the shell the way the root layout composed the original app: the
/// store wraps everything, the gate observes the auth adapter underneath.
pub fn compose_shell(context: &AppContext) -> ComposedShell {
    let auth = LocalAuthAdapter::new(&context.config.auth);

    ComposedShell {
        event_source: Box::new(ui::CrosstermEventSource::default()),
        orchestrator: Box::new(DefaultShellOrchestrator::new(auth)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_context_with_default_config_when_file_is_missing() {
        let context = build_context(Some(Path::new("./missing-config.toml")))
            .expect("context should build from defaults");

        assert_eq!(context.config, crate::infra::config::AppConfig::default());
    }

    #[test]
    fn composed_shell_starts_with_a_bound_store() {
        let context = AppContext::new(crate::infra::config::AppConfig::default());

        let shell = compose_shell(&context);

        assert!(shell.orchestrator.store().is_bound());
        assert!(shell.orchestrator.state().is_running());
    }
}
