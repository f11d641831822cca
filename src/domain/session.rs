#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Snapshot of the authentication state owned by the auth collaborator.
///
/// `loading` is true while persisted credentials are still being checked;
/// no routing decision may be derived from a loading session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: Option<UserId>,
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::resolving()
    }
}

impl Session {
    /// Cold-start state: identity unknown until the auth adapter resolves it.
    pub fn resolving() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn signed_in(user: UserId) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && !self.loading
    }
}
