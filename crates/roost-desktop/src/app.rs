//! Main application component

use std::path::Path;

use dioxus::prelude::*;
use roost_core::chat::ChatTab;
use roost_core::models::{PriorityConfig, Settings, User};
use roost_core::Error;

use crate::components::ProfilePhotoModal;
use crate::seed;
use crate::state::AppState;
use crate::theme::resolve_theme;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let settings = use_signal(load_settings);
    let theme = use_signal(|| resolve_theme(settings.peek().theme));
    let current_user = use_signal(|| {
        User::new("me", settings.peek().user_display_name.clone())
            .with_photo("https://i.pravatar.cc/300?u=roost-me")
    });
    let contact = use_signal(seed::contact);
    let messages = use_signal(|| seed::messages(&current_user.peek()));
    let notes = use_signal(seed::notes);
    let unread = use_signal(seed::unread);
    let typing_user = use_signal(|| None);
    let draft = use_signal(String::new);
    let reply_to = use_signal(|| None);
    let active_tab = use_signal(ChatTab::default);
    let selected_note = use_signal(|| None);
    let editing_note = use_signal(|| None);
    let priorities = use_signal(|| load_priorities(settings.peek().priority_config.as_deref()));
    let mut photo_open = use_signal(|| false);

    use_context_provider(|| AppState {
        current_user,
        contact,
        messages,
        draft,
        reply_to,
        typing_user,
        unread,
        active_tab,
        notes,
        selected_note,
        editing_note,
        priorities,
        photo_open,
        settings,
        theme,
    });

    let current_theme = theme();
    let theme_attr = current_theme.as_attr();
    let colors = current_theme.palette();
    let current_settings = settings();
    let user = current_user();

    rsx! {
        div {
            class: "app-container",
            "data-theme": "{theme_attr}",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: {current_settings.font_size}px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            Home {}

            ProfilePhotoModal {
                is_open: photo_open(),
                photo_url: user.photo(),
                alt: "{user.display_name}",
                on_close: move |()| photo_open.set(false),
            }
        }
    }
}

/// Settings from the environment, falling back to defaults on bad values
fn load_settings() -> Settings {
    match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Ignoring invalid settings: {}", e);
            Settings::default()
        }
    }
}

/// Priority table from the configured JSON file, or the built-in table
fn load_priorities(path: Option<&Path>) -> PriorityConfig {
    let Some(path) = path else {
        return PriorityConfig::default();
    };

    let loaded = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))
        .and_then(|json| PriorityConfig::from_json(&json));
    match loaded {
        Ok(config) => {
            tracing::info!("Loaded priority config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("Using default priorities: {}", e);
            PriorityConfig::default()
        }
    }
}
