use anyhow::Result;

use crate::domain::{
    events::{AppEvent, KeyInput},
    routing::{GROUPS_PATH, HOME_PATH, LOGIN_PATH},
    shell_state::ShellState,
    ui_state::{AppMode, GroupInfo, UiStoreHandle},
};

use super::{
    contracts::{AuthAdapter, ShellOrchestrator},
    session_gate::SessionGate,
};

/// Demo group attached to the `g` shortcut until real group data lands.
fn demo_group() -> (String, GroupInfo) {
    (
        "g-ramen-crew".to_owned(),
        GroupInfo {
            name: "Ramen Crew".to_owned(),
            members: 3,
            color: "#e8590c".to_owned(),
            image: "ramen.png".to_owned(),
        },
    )
}

/// Owns the composed shell: state, bound store handle, session gate, and
/// the auth seam. The navigation stack lives inside the state and doubles
/// as the router the gate replaces through.
pub struct DefaultShellOrchestrator<A>
where
    A: AuthAdapter,
{
    state: ShellState,
    store: UiStoreHandle,
    gate: SessionGate,
    auth: A,
}

impl<A> DefaultShellOrchestrator<A>
where
    A: AuthAdapter,
{
    pub fn new(auth: A) -> Self {
        Self {
            state: ShellState::default(),
            store: UiStoreHandle::bound(),
            gate: SessionGate::new(),
            auth,
        }
    }

    fn evaluate_gate(&mut self) -> Result<()> {
        let session = self.state.session().clone();
        self.gate.evaluate(&session, self.state.nav_mut())?;
        Ok(())
    }

    fn handle_key(&mut self, key: KeyInput) -> Result<()> {
        // An open mode selector captures the next key.
        if self.store.mode_selector_visible() {
            self.handle_mode_selector_key(&key);
            return Ok(());
        }

        match key.key.as_str() {
            "i" => {
                if !self.state.session().is_authenticated() && !self.state.session().loading {
                    let session = self.auth.sign_in()?;
                    self.state.set_session(session);
                    self.evaluate_gate()?;
                }
            }
            "o" => {
                if self.state.session().is_authenticated() {
                    let session = self.auth.sign_out()?;
                    self.state.set_session(session);
                    self.evaluate_gate()?;
                }
            }
            "v" => {
                let visible = !self.store.voice_input_visible();
                self.store.set_voice_input_visible(visible);
            }
            "s" => {
                let visible = !self.store.restaurant_search_visible();
                self.store.set_restaurant_search_visible(visible);
            }
            "m" => self.store.set_mode_selector_visible(true),
            "g" => {
                if self.store.active_group_id().is_some() {
                    self.store.clear_active_group();
                } else {
                    let (group_id, info) = demo_group();
                    self.store.set_active_group_id(Some(group_id));
                    self.store.set_active_group_info(Some(info));
                }
            }
            "j" => self.state.scroll_down(),
            "k" => self.state.scroll_up(),
            "1" => self.navigate(HOME_PATH)?,
            "2" => self.navigate(GROUPS_PATH)?,
            "3" => self.navigate(LOGIN_PATH)?,
            _ => {}
        }

        Ok(())
    }

    fn handle_mode_selector_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "n" => self.store.set_app_mode(AppMode::Normal),
            "v" => self.store.set_app_mode(AppMode::Voice),
            "g" => self.store.set_app_mode(AppMode::Group),
            _ => {}
        }
        self.store.set_mode_selector_visible(false);
    }

    fn navigate(&mut self, path: &str) -> Result<()> {
        if self.state.nav().current().path() != path {
            self.state.nav_mut().push(path);
        }
        self.evaluate_gate()
    }
}

impl<A> ShellOrchestrator for DefaultShellOrchestrator<A>
where
    A: AuthAdapter,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn store(&self) -> &UiStoreHandle {
        &self.store
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {
                if self.state.session().loading {
                    let session = self.auth.resolve_initial()?;
                    self.state.set_session(session);
                    self.evaluate_gate()?;
                }
            }
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::SessionChanged(session) => {
                self.state.set_session(session);
                self.evaluate_gate()?;
            }
            AppEvent::InputKey(key) => self.handle_key(key)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        auth::LocalAuthAdapter,
        domain::session::{Session, UserId},
        infra::config::AuthConfig,
    };

    fn key(k: &str) -> AppEvent {
        AppEvent::InputKey(KeyInput::new(k, false))
    }

    fn fresh_orchestrator() -> DefaultShellOrchestrator<LocalAuthAdapter> {
        DefaultShellOrchestrator::new(LocalAuthAdapter::new(&AuthConfig::default()))
    }

    fn remembered_orchestrator() -> DefaultShellOrchestrator<LocalAuthAdapter> {
        let config = AuthConfig {
            remembered_user: Some("aya".to_owned()),
        };
        DefaultShellOrchestrator::new(LocalAuthAdapter::new(&config))
    }

    #[test]
    fn no_redirect_happens_before_the_first_tick_resolves_loading() {
        let orchestrator = fresh_orchestrator();

        assert!(orchestrator.state().session().loading);
        assert_eq!(orchestrator.state().nav().current().path(), "/");
    }

    #[test]
    fn first_tick_resolves_loading_and_bounces_guest_to_login() {
        let mut orchestrator = fresh_orchestrator();

        orchestrator.handle_event(AppEvent::Tick).expect("tick must be handled");

        assert!(!orchestrator.state().session().loading);
        assert_eq!(orchestrator.state().nav().current().path(), "/auth/login");
        assert_eq!(orchestrator.state().nav().depth(), 1);
    }

    #[test]
    fn first_tick_keeps_remembered_user_on_home() {
        let mut orchestrator = remembered_orchestrator();

        orchestrator.handle_event(AppEvent::Tick).expect("tick must be handled");

        assert!(orchestrator.state().session().is_authenticated());
        assert_eq!(orchestrator.state().nav().current().path(), "/");
    }

    #[test]
    fn sign_in_moves_guest_from_login_back_home() {
        let mut orchestrator = fresh_orchestrator();
        orchestrator.handle_event(AppEvent::Tick).expect("tick must be handled");
        assert_eq!(orchestrator.state().nav().current().path(), "/auth/login");

        orchestrator.handle_event(key("i")).expect("sign-in key must be handled");

        assert!(orchestrator.state().session().is_authenticated());
        assert_eq!(orchestrator.state().nav().current().path(), "/");
    }

    #[test]
    fn sign_out_bounces_back_to_login_without_growing_history() {
        let mut orchestrator = remembered_orchestrator();
        orchestrator.handle_event(AppEvent::Tick).expect("tick must be handled");
        let depth = orchestrator.state().nav().depth();

        orchestrator.handle_event(key("o")).expect("sign-out key must be handled");

        assert!(!orchestrator.state().session().is_authenticated());
        assert_eq!(orchestrator.state().nav().current().path(), "/auth/login");
        assert_eq!(orchestrator.state().nav().depth(), depth);
    }

    #[test]
    fn navigating_to_auth_area_while_signed_in_is_bounced_home() {
        let mut orchestrator = remembered_orchestrator();
        orchestrator.handle_event(AppEvent::Tick).expect("tick must be handled");

        orchestrator.handle_event(key("3")).expect("nav key must be handled");

        assert_eq!(orchestrator.state().nav().current().path(), "/");
    }

    #[test]
    fn session_changed_event_reroutes_like_a_local_transition() {
        let mut orchestrator = remembered_orchestrator();
        orchestrator.handle_event(AppEvent::Tick).expect("tick must be handled");

        orchestrator
            .handle_event(AppEvent::SessionChanged(Session::signed_out()))
            .expect("session event must be handled");

        assert_eq!(orchestrator.state().nav().current().path(), "/auth/login");

        orchestrator
            .handle_event(AppEvent::SessionChanged(Session::signed_in(UserId::new(
                "remote",
            ))))
            .expect("session event must be handled");

        assert_eq!(orchestrator.state().nav().current().path(), "/");
    }

    #[test]
    fn overlay_keys_toggle_store_flags() {
        let mut orchestrator = remembered_orchestrator();
        orchestrator.handle_event(AppEvent::Tick).expect("tick must be handled");

        orchestrator.handle_event(key("v")).expect("voice key must be handled");
        assert!(orchestrator.store().voice_input_visible());
        orchestrator.handle_event(key("v")).expect("voice key must be handled");
        assert!(!orchestrator.store().voice_input_visible());

        orchestrator.handle_event(key("s")).expect("search key must be handled");
        assert!(orchestrator.store().restaurant_search_visible());
    }

    #[test]
    fn mode_selector_captures_the_next_key_and_closes() {
        let mut orchestrator = remembered_orchestrator();
        orchestrator.handle_event(AppEvent::Tick).expect("tick must be handled");

        orchestrator.handle_event(key("m")).expect("selector key must be handled");
        assert!(orchestrator.store().mode_selector_visible());

        orchestrator.handle_event(key("v")).expect("mode key must be handled");

        assert!(!orchestrator.store().mode_selector_visible());
        assert_eq!(orchestrator.store().app_mode(), AppMode::Voice);
        // `v` was consumed by the selector, not the voice overlay toggle.
        assert!(!orchestrator.store().voice_input_visible());
    }

    #[test]
    fn group_key_sets_and_clears_id_and_info_together() {
        let mut orchestrator = remembered_orchestrator();
        orchestrator.handle_event(AppEvent::Tick).expect("tick must be handled");

        orchestrator.handle_event(key("g")).expect("group key must be handled");
        assert!(orchestrator.store().active_group_id().is_some());
        assert!(orchestrator.store().active_group_info().is_some());

        orchestrator.handle_event(key("g")).expect("group key must be handled");
        assert_eq!(orchestrator.store().active_group_id(), None);
        assert_eq!(orchestrator.store().active_group_info(), None);
    }

    #[test]
    fn quit_event_stops_the_shell() {
        let mut orchestrator = fresh_orchestrator();

        orchestrator
            .handle_event(AppEvent::QuitRequested)
            .expect("quit must be handled");

        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn scroll_keys_move_the_offset() {
        let mut orchestrator = remembered_orchestrator();
        orchestrator.handle_event(AppEvent::Tick).expect("tick must be handled");

        orchestrator.handle_event(key("j")).expect("scroll key must be handled");
        orchestrator.handle_event(key("j")).expect("scroll key must be handled");
        orchestrator.handle_event(key("k")).expect("scroll key must be handled");

        assert_eq!(orchestrator.state().scroll_y(), 1);
    }
}
