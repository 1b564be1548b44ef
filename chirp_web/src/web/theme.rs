use super::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub(crate) fn as_attr(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub(crate) fn from_attr(v: &str) -> Option<Theme> {
        match v.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub(crate) fn toggle(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub(crate) fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }
}

/// Dark is the product default; a persisted preference wins.
pub(crate) fn initial_theme() -> Theme {
    storage::load_persisted_settings()
        .and_then(|s| Theme::from_attr(&s.theme))
        .unwrap_or(Theme::Dark)
}

pub(crate) fn apply_theme_to_document(theme: Theme) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(el) = doc.document_element() else {
        return;
    };
    let _ = el.set_attribute("data-theme", theme.as_attr());
}

pub(crate) fn persist_theme(theme: Theme) {
    let mut settings = storage::load_persisted_settings().unwrap_or_default();
    settings.theme = theme.as_attr().to_string();
    storage::save_persisted_settings(&settings);
}
