//! Screen locations, the session-gate decision rule, and the in-process
//! navigation stack.

use super::session::Session;

/// First path segment that marks the unauthenticated area of the app.
pub const AUTH_SEGMENT: &str = "auth";

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/auth/login";
pub const GROUPS_PATH: &str = "/groups";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenArea {
    Auth,
    Main,
}

/// Current screen as an ordered sequence of path segments.
///
/// Only the first segment matters for area classification; the rest is
/// carried verbatim so the view can name the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    segments: Vec<String>,
}

impl Location {
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    pub fn home() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn first_segment(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    pub fn area(&self) -> ScreenArea {
        if self.first_segment() == Some(AUTH_SEGMENT) {
            ScreenArea::Auth
        } else {
            ScreenArea::Main
        }
    }

    pub fn path(&self) -> String {
        if self.segments.is_empty() {
            HOME_PATH.to_owned()
        } else {
            format!("/{}", self.segments.join("/"))
        }
    }
}

/// Canonical redirect destinations the gate may pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Login,
    Home,
}

impl NavTarget {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Home => HOME_PATH,
        }
    }
}

/// Pure session-gate decision: which replace navigation, if any, keeps the
/// visible screen consistent with the session.
///
/// Suspends while the session is still loading so a premature redirect never
/// flashes the wrong screen.
pub fn decide(session: &Session, location: &Location) -> Option<NavTarget> {
    if session.loading {
        return None;
    }

    let in_auth_area = location.area() == ScreenArea::Auth;

    match (&session.user, in_auth_area) {
        (None, false) => Some(NavTarget::Login),
        (Some(_), true) => Some(NavTarget::Home),
        _ => None,
    }
}

/// In-process navigation history. The last entry is the visible screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStack {
    stack: Vec<Location>,
}

impl Default for NavStack {
    fn default() -> Self {
        Self {
            stack: vec![Location::home()],
        }
    }
}

impl NavStack {
    pub fn current(&self) -> &Location {
        self.stack
            .last()
            .unwrap_or_else(|| unreachable!("nav stack always holds at least the home entry"))
    }

    /// Regular navigation: grows back-history.
    pub fn push(&mut self, path: &str) {
        self.stack.push(Location::parse(path));
    }

    /// Replace navigation: swaps the visible screen, history depth unchanged.
    pub fn replace_current(&mut self, path: &str) {
        let location = Location::parse(path);
        match self.stack.last_mut() {
            Some(current) => *current = location,
            None => self.stack.push(location),
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::UserId;

    #[test]
    fn location_classifies_auth_area_by_first_segment_only() {
        assert_eq!(Location::parse("/auth/login").area(), ScreenArea::Auth);
        assert_eq!(Location::parse("/auth/register").area(), ScreenArea::Auth);
        assert_eq!(Location::parse("/").area(), ScreenArea::Main);
        assert_eq!(Location::parse("/groups/auth").area(), ScreenArea::Main);
    }

    #[test]
    fn location_path_round_trips_with_normalized_slashes() {
        assert_eq!(Location::parse("//auth//login/").path(), "/auth/login");
        assert_eq!(Location::parse("").path(), "/");
        assert_eq!(Location::home().path(), "/");
    }

    #[test]
    fn decide_redirects_signed_out_user_in_main_area_to_login() {
        let decision = decide(&Session::signed_out(), &Location::parse("/groups"));

        assert_eq!(decision, Some(NavTarget::Login));
    }

    #[test]
    fn decide_redirects_signed_in_user_in_auth_area_to_home() {
        let session = Session::signed_in(UserId::new("u-1"));
        let decision = decide(&session, &Location::parse("/auth/login"));

        assert_eq!(decision, Some(NavTarget::Home));
    }

    #[test]
    fn decide_suspends_while_session_is_loading() {
        let loading = Session::resolving();

        assert_eq!(decide(&loading, &Location::parse("/")), None);
        assert_eq!(decide(&loading, &Location::parse("/auth/login")), None);
    }

    #[test]
    fn decide_leaves_consistent_screens_alone() {
        let signed_in = Session::signed_in(UserId::new("u-1"));

        assert_eq!(
            decide(&Session::signed_out(), &Location::parse("/auth/login")),
            None
        );
        assert_eq!(decide(&signed_in, &Location::parse("/")), None);
        assert_eq!(decide(&signed_in, &Location::parse("/groups")), None);
    }

    #[test]
    fn nav_stack_starts_at_home() {
        let nav = NavStack::default();

        assert_eq!(nav.current().path(), "/");
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn push_grows_history_and_replace_does_not() {
        let mut nav = NavStack::default();

        nav.push(GROUPS_PATH);
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.current().path(), "/groups");

        nav.replace_current(LOGIN_PATH);
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.current().path(), "/auth/login");
    }

    #[test]
    fn replace_to_current_screen_keeps_stack_shape() {
        let mut nav = NavStack::default();
        nav.replace_current(HOME_PATH);

        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current().path(), "/");
    }
}
