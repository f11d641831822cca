use super::{routing::NavStack, session::Session};

/// How far past the top the content may overscroll, in rows. The parallax
/// header expands over this range.
pub const OVERSCROLL_LIMIT_ROWS: i32 = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    session: Session,
    nav: NavStack,
    scroll_y: i32,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            running: true,
            session: Session::resolving(),
            nav: NavStack::default(),
            scroll_y: 0,
        }
    }
}

impl ShellState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn set_session(&mut self, session: Session) {
        self.session = session;
    }

    pub fn nav(&self) -> &NavStack {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut NavStack {
        &mut self.nav
    }

    pub fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    pub fn scroll_down(&mut self) {
        self.scroll_y = self.scroll_y.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_y = self.scroll_y.saturating_sub(1).max(-OVERSCROLL_LIMIT_ROWS);
    }
}
