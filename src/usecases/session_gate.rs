//! Redirect guard keeping the visible screen consistent with the session.
//!
//! The decision itself is the pure `routing::decide`; this glue snapshots
//! the inputs, skips re-evaluation when nothing changed, and performs the
//! replace navigation through the router seam.

use anyhow::Result;

use crate::domain::{
    routing::{self, Location, NavTarget},
    session::Session,
};

use super::contracts::Router;

#[derive(Debug, Default)]
pub struct SessionGate {
    last_inputs: Option<(Session, Location)>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-evaluates the guard. Issues at most one replace navigation per
    /// input change; a second call with unchanged inputs is a no-op.
    pub fn evaluate(
        &mut self,
        session: &Session,
        router: &mut dyn Router,
    ) -> Result<Option<NavTarget>> {
        let location = router.location().clone();

        let unchanged = self
            .last_inputs
            .as_ref()
            .is_some_and(|(s, l)| s == session && l == &location);
        if unchanged {
            return Ok(None);
        }
        self.last_inputs = Some((session.clone(), location.clone()));

        let Some(target) = routing::decide(session, &location) else {
            return Ok(None);
        };

        tracing::info!(
            from = %location.path(),
            to = target.path(),
            authenticated = session.is_authenticated(),
            "session gate redirect"
        );
        router.replace(target.path())?;

        Ok(Some(target))
    }
}
