//! Auth collaborator: owns the session and its transitions.
//!
//! The shell only ever reads the session snapshot and asks for sign-in,
//! sign-out, or the cold-start resolution. This local adapter stands in for
//! a real identity backend; it keeps everything in memory and derives the
//! remembered identity from config.

use anyhow::Result;

use crate::{
    domain::session::{Session, UserId},
    infra::config::AuthConfig,
    usecases::contracts::AuthAdapter,
};

const GUEST_IDENTITY: &str = "guest";

#[derive(Debug)]
pub struct LocalAuthAdapter {
    session: Session,
    identity: UserId,
    remembered: bool,
}

impl LocalAuthAdapter {
    pub fn new(config: &AuthConfig) -> Self {
        let identity = config
            .remembered_user
            .clone()
            .map(UserId::new)
            .unwrap_or_else(|| UserId::new(GUEST_IDENTITY));

        Self {
            session: Session::resolving(),
            remembered: config.remembered_user.is_some(),
            identity,
        }
    }
}

impl AuthAdapter for LocalAuthAdapter {
    fn session(&self) -> &Session {
        &self.session
    }

    fn resolve_initial(&mut self) -> Result<Session> {
        if self.session.loading {
            self.session = if self.remembered {
                tracing::info!(user = self.identity.as_str(), "restored remembered session");
                Session::signed_in(self.identity.clone())
            } else {
                Session::signed_out()
            };
        }

        Ok(self.session.clone())
    }

    fn sign_in(&mut self) -> Result<Session> {
        self.session = Session::signed_in(self.identity.clone());
        tracing::info!(user = self.identity.as_str(), "signed in");
        Ok(self.session.clone())
    }

    fn sign_out(&mut self) -> Result<Session> {
        self.session = Session::signed_out();
        tracing::info!("signed out");
        Ok(self.session.clone())
    }
}

/// Returns the auth module name for smoke checks.
pub fn module_name() -> &'static str {
    "auth"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_adapter_resolves_to_signed_out() {
        let mut auth = LocalAuthAdapter::new(&AuthConfig::default());
        assert!(auth.session().loading);

        let session = auth.resolve_initial().expect("resolution must succeed");

        assert_eq!(session, Session::signed_out());
    }

    #[test]
    fn remembered_user_resolves_to_signed_in() {
        let config = AuthConfig {
            remembered_user: Some("aya".to_owned()),
        };
        let mut auth = LocalAuthAdapter::new(&config);

        let session = auth.resolve_initial().expect("resolution must succeed");

        assert_eq!(session.user.as_ref().map(UserId::as_str), Some("aya"));
        assert!(!session.loading);
    }

    #[test]
    fn resolve_initial_is_idempotent_after_first_resolution() {
        let mut auth = LocalAuthAdapter::new(&AuthConfig::default());
        auth.resolve_initial().expect("resolution must succeed");
        auth.sign_in().expect("sign-in must succeed");

        let session = auth.resolve_initial().expect("resolution must succeed");

        assert!(session.is_authenticated());
    }

    #[test]
    fn sign_in_then_out_round_trips_the_session() {
        let mut auth = LocalAuthAdapter::new(&AuthConfig::default());
        auth.resolve_initial().expect("resolution must succeed");

        let signed_in = auth.sign_in().expect("sign-in must succeed");
        assert!(signed_in.is_authenticated());

        let signed_out = auth.sign_out().expect("sign-out must succeed");
        assert_eq!(signed_out, Session::signed_out());
    }
}
