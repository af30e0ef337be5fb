//! Application-wide state handed down through a Yew context instead of
//! living in page globals.

use std::rc::Rc;

use log::debug;
use web_sys::window;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Anything other than a known value falls back to dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn logo_src(self) -> &'static str {
        match self {
            Theme::Dark => "/assets/logo-stratus-dark.png",
            Theme::Light => "/assets/logo-stratus-light.png",
        }
    }

    /// Picks between the dark and light variant of a class list.
    pub fn pick(self, dark: &'static str, light: &'static str) -> &'static str {
        match self {
            Theme::Dark => dark,
            Theme::Light => light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub theme: Theme,
    pub copilot_open: bool,
}

pub enum AppAction {
    ToggleTheme,
    OpenCopilot,
    CloseCopilot,
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AppAction::ToggleTheme => next.theme = self.theme.toggled(),
            AppAction::OpenCopilot => next.copilot_open = true,
            AppAction::CloseCopilot => next.copilot_open = false,
        }
        Rc::new(next)
    }
}

pub type AppContext = UseReducerHandle<AppState>;

pub fn load_theme() -> Theme {
    let stored = window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(config::THEME_STORAGE_KEY).ok())
        .flatten();
    Theme::from_stored(stored.as_deref())
}

/// Persists the theme and mirrors it onto `<html data-theme>`.
pub fn apply_theme(theme: Theme) {
    let Some(window) = window() else {
        return;
    };
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(config::THEME_STORAGE_KEY, theme.as_str());
    }
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    debug!("Theme set to {}", theme.as_str());
}

/// Current theme, dark when rendered outside the app shell.
#[hook]
pub fn use_theme() -> Theme {
    use_context::<AppContext>().map(|app| app.theme).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_stored_values_fall_back_to_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("sepia")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn reducer_handles_theme_and_copilot() {
        let state = Rc::new(AppState::default());
        let state = state.reduce(AppAction::ToggleTheme);
        assert_eq!(state.theme, Theme::Light);
        let state = state.reduce(AppAction::OpenCopilot);
        assert!(state.copilot_open);
        let state = state.reduce(AppAction::CloseCopilot);
        assert!(!state.copilot_open);
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn logo_follows_theme() {
        assert!(Theme::Light.logo_src().ends_with("light.png"));
        assert!(Theme::Dark.logo_src().ends_with("dark.png"));
    }
}
