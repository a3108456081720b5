use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos::web_sys;

use crate::models::Theme;

#[cfg(feature = "hydrate")]
const PREFERENCE_KEY: &str = "docuthinker-theme";

/// Current theme, shared through context by the app shell
#[derive(Clone, Copy)]
pub struct ThemeState {
    theme: RwSignal<Theme>,
}

impl ThemeState {
    /// Create the state and provide it to the current owner's descendants
    pub fn provide(initial: Theme) -> Self {
        let state = Self {
            theme: RwSignal::new(initial),
        };
        provide_context(state);

        #[cfg(feature = "hydrate")]
        state.remember_preference();

        state
    }

    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
    }

    pub fn toggle(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
    }

    // Restores the stored preference once, then writes every change back
    #[cfg(feature = "hydrate")]
    fn remember_preference(self) {
        let theme = self.theme;
        Effect::new(move |restored: Option<bool>| {
            if restored.is_none() {
                if let Some(saved) = load_preference() {
                    theme.set(saved);
                }
            }
            save_preference(theme.get());
            true
        });
    }
}

pub fn use_theme() -> ThemeState {
    expect_context::<ThemeState>()
}

/// Theme the server rendered with, read from `<html data-theme>`
#[cfg(feature = "hydrate")]
pub fn document_theme() -> Option<Theme> {
    let root = web_sys::window()?.document()?.document_element()?;
    root.get_attribute("data-theme")
        .map(|selector| Theme::from_selector(&selector))
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(feature = "hydrate")]
fn load_preference() -> Option<Theme> {
    let stored = local_storage()?.get_item(PREFERENCE_KEY).ok()??;
    stored.parse().ok()
}

#[cfg(feature = "hydrate")]
fn save_preference(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(PREFERENCE_KEY, theme.as_str());
    }
}
