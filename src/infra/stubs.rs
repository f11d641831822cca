use anyhow::Result;

use crate::{domain::routing::Location, usecases::contracts::Router};

#[cfg(test)]
use crate::infra::{config::AppConfig, contracts::ConfigAdapter};

#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

#[cfg(test)]
impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

/// Router double for gate tests: records every replace; `pinned` keeps the
/// location frozen so idempotence can be probed with unchanged inputs.
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug, Clone)]
pub struct RecordingRouter {
    location: Location,
    follow_replace: bool,
    pub replaced: Vec<String>,
}

#[cfg_attr(not(test), allow(dead_code))]
impl RecordingRouter {
    pub fn at(path: &str) -> Self {
        Self {
            location: Location::parse(path),
            follow_replace: true,
            replaced: Vec::new(),
        }
    }

    pub fn pinned(path: &str) -> Self {
        Self {
            location: Location::parse(path),
            follow_replace: false,
            replaced: Vec::new(),
        }
    }
}

impl Router for RecordingRouter {
    fn location(&self) -> &Location {
        &self.location
    }

    fn replace(&mut self, path: &str) -> Result<()> {
        self.replaced.push(path.to_owned());
        if self.follow_replace {
            self.location = Location::parse(path);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter;
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn pinned_router_records_but_does_not_move() {
        let mut router = RecordingRouter::pinned("/groups");

        router.replace("/auth/login").expect("replace must succeed");

        assert_eq!(router.location().path(), "/groups");
        assert_eq!(router.replaced, vec!["/auth/login".to_owned()]);
    }

    #[test]
    fn following_router_moves_on_replace() {
        let mut router = RecordingRouter::at("/groups");

        router.replace("/auth/login").expect("replace must succeed");

        assert_eq!(router.location().path(), "/auth/login");
    }
}
