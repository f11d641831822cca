//! Shared ephemeral UI state: one reactive source of truth for cross-screen
//! flags, visible to every screen through a cloneable handle.
//!
//! Mutation goes through the store setters only; each setter replaces the
//! value and notifies subscribers which field changed. Nothing here is
//! persisted, every field resets to its default on restart.

use std::{cell::RefCell, collections::BTreeMap, fmt, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    Voice,
    Group,
}

impl AppMode {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Voice => "voice",
            Self::Group => "group",
        }
    }
}

/// Denormalized display info for the active group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupInfo {
    pub name: String,
    pub members: u32,
    pub color: String,
    pub image: String,
}

/// Which store field a setter touched, delivered to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiField {
    VoiceInputVisible,
    VoiceText,
    VoiceTags,
    VoiceTagDescriptions,
    RestaurantSearchVisible,
    ModeSelectorVisible,
    ActiveGroupId,
    ActiveGroupInfo,
    AppMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SharedUiState {
    voice_input_visible: bool,
    voice_text: String,
    voice_tags: Vec<String>,
    voice_tag_descriptions: BTreeMap<String, String>,
    restaurant_search_visible: bool,
    mode_selector_visible: bool,
    active_group_id: Option<String>,
    active_group_info: Option<GroupInfo>,
    app_mode: AppMode,
}

impl SharedUiState {
    pub fn voice_input_visible(&self) -> bool {
        self.voice_input_visible
    }

    pub fn voice_text(&self) -> &str {
        &self.voice_text
    }

    pub fn voice_tags(&self) -> &[String] {
        &self.voice_tags
    }

    pub fn voice_tag_descriptions(&self) -> &BTreeMap<String, String> {
        &self.voice_tag_descriptions
    }

    pub fn restaurant_search_visible(&self) -> bool {
        self.restaurant_search_visible
    }

    pub fn mode_selector_visible(&self) -> bool {
        self.mode_selector_visible
    }

    pub fn active_group_id(&self) -> Option<&str> {
        self.active_group_id.as_deref()
    }

    pub fn active_group_info(&self) -> Option<&GroupInfo> {
        self.active_group_info.as_ref()
    }

    pub fn app_mode(&self) -> AppMode {
        self.app_mode
    }
}

type Subscriber = Box<dyn FnMut(UiField)>;

/// The store itself: state plus a narrow publish-subscribe surface.
///
/// Subscribers live as long as the store (process lifetime) and must not
/// call back into the store from their callback.
#[derive(Default)]
pub struct UiStore {
    state: SharedUiState,
    subscribers: Vec<Subscriber>,
}

impl fmt::Debug for UiStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl UiStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SharedUiState {
        &self.state
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(UiField) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn notify(&mut self, field: UiField) {
        for subscriber in &mut self.subscribers {
            subscriber(field);
        }
    }

    pub fn set_voice_input_visible(&mut self, visible: bool) {
        self.state.voice_input_visible = visible;
        self.notify(UiField::VoiceInputVisible);
    }

    pub fn set_voice_text(&mut self, text: impl Into<String>) {
        self.state.voice_text = text.into();
        self.notify(UiField::VoiceText);
    }

    pub fn set_voice_tags(&mut self, tags: Vec<String>) {
        self.state.voice_tags = tags;
        self.notify(UiField::VoiceTags);
    }

    pub fn set_voice_tag_descriptions(&mut self, descriptions: BTreeMap<String, String>) {
        self.state.voice_tag_descriptions = descriptions;
        self.notify(UiField::VoiceTagDescriptions);
    }

    pub fn set_restaurant_search_visible(&mut self, visible: bool) {
        self.state.restaurant_search_visible = visible;
        self.notify(UiField::RestaurantSearchVisible);
    }

    pub fn set_mode_selector_visible(&mut self, visible: bool) {
        self.state.mode_selector_visible = visible;
        self.notify(UiField::ModeSelectorVisible);
    }

    pub fn set_active_group_id(&mut self, group_id: Option<String>) {
        self.state.active_group_id = group_id;
        self.notify(UiField::ActiveGroupId);
    }

    pub fn set_active_group_info(&mut self, info: Option<GroupInfo>) {
        self.state.active_group_info = info;
        self.notify(UiField::ActiveGroupInfo);
    }

    pub fn set_app_mode(&mut self, mode: AppMode) {
        self.state.app_mode = mode;
        self.notify(UiField::AppMode);
    }

    /// Resets id and display info together so no reader ever observes a
    /// dangling group description.
    pub fn clear_active_group(&mut self) {
        self.state.active_group_id = None;
        self.notify(UiField::ActiveGroupId);
        self.state.active_group_info = None;
        self.notify(UiField::ActiveGroupInfo);
    }
}

/// Cloneable handle the view tree reads and writes the store through.
///
/// A detached handle is the startup-ordering guard: reads return defaults
/// and writes are silently dropped, so an early access before the shell is
/// composed never fails.
#[derive(Debug, Clone, Default)]
pub struct UiStoreHandle {
    inner: Option<Rc<RefCell<UiStore>>>,
}

impl UiStoreHandle {
    pub fn bound() -> Self {
        Self {
            inner: Some(Rc::new(RefCell::new(UiStore::new()))),
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn detached() -> Self {
        Self { inner: None }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_bound(&self) -> bool {
        self.inner.is_some()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn subscribe(&self, subscriber: impl FnMut(UiField) + 'static) {
        if let Some(store) = &self.inner {
            store.borrow_mut().subscribe(subscriber);
        }
    }

    fn read<T>(&self, default: T, f: impl FnOnce(&SharedUiState) -> T) -> T {
        match &self.inner {
            Some(store) => f(store.borrow().state()),
            None => default,
        }
    }

    fn write(&self, f: impl FnOnce(&mut UiStore)) {
        if let Some(store) = &self.inner {
            f(&mut store.borrow_mut());
        }
    }

    pub fn voice_input_visible(&self) -> bool {
        self.read(false, SharedUiState::voice_input_visible)
    }

    pub fn voice_text(&self) -> String {
        self.read(String::new(), |state| state.voice_text().to_owned())
    }

    pub fn voice_tags(&self) -> Vec<String> {
        self.read(Vec::new(), |state| state.voice_tags().to_vec())
    }

    pub fn voice_tag_descriptions(&self) -> BTreeMap<String, String> {
        self.read(BTreeMap::new(), |state| {
            state.voice_tag_descriptions().clone()
        })
    }

    pub fn restaurant_search_visible(&self) -> bool {
        self.read(false, SharedUiState::restaurant_search_visible)
    }

    pub fn mode_selector_visible(&self) -> bool {
        self.read(false, SharedUiState::mode_selector_visible)
    }

    pub fn active_group_id(&self) -> Option<String> {
        self.read(None, |state| state.active_group_id().map(str::to_owned))
    }

    pub fn active_group_info(&self) -> Option<GroupInfo> {
        self.read(None, |state| state.active_group_info().cloned())
    }

    pub fn app_mode(&self) -> AppMode {
        self.read(AppMode::default(), SharedUiState::app_mode)
    }

    pub fn set_voice_input_visible(&self, visible: bool) {
        self.write(|store| store.set_voice_input_visible(visible));
    }

    pub fn set_voice_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.write(|store| store.set_voice_text(text));
    }

    pub fn set_voice_tags(&self, tags: Vec<String>) {
        self.write(|store| store.set_voice_tags(tags));
    }

    pub fn set_voice_tag_descriptions(&self, descriptions: BTreeMap<String, String>) {
        self.write(|store| store.set_voice_tag_descriptions(descriptions));
    }

    pub fn set_restaurant_search_visible(&self, visible: bool) {
        self.write(|store| store.set_restaurant_search_visible(visible));
    }

    pub fn set_mode_selector_visible(&self, visible: bool) {
        self.write(|store| store.set_mode_selector_visible(visible));
    }

    pub fn set_active_group_id(&self, group_id: Option<String>) {
        self.write(|store| store.set_active_group_id(group_id));
    }

    pub fn set_active_group_info(&self, info: Option<GroupInfo>) {
        self.write(|store| store.set_active_group_info(info));
    }

    pub fn set_app_mode(&self, mode: AppMode) {
        self.write(|store| store.set_app_mode(mode));
    }

    pub fn clear_active_group(&self) {
        self.write(UiStore::clear_active_group);
    }
}
