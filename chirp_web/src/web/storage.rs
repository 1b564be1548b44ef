use serde::{Deserialize, Serialize};

const LOCALSTORAGE_SETTINGS_KEY: &str = "chirp.ui_settings.v1";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(crate) fn local_storage_get_string(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub(crate) fn local_storage_set_string(key: &str, value: &str) {
    if let Some(s) = local_storage() {
        let _ = s.set_item(key, value);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PersistedSettings {
    #[serde(default = "default_theme")]
    pub(crate) theme: String,
    #[serde(default)]
    pub(crate) sidebar_collapsed: bool,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            sidebar_collapsed: false,
        }
    }
}

fn default_theme() -> String {
    "dark".to_string()
}

pub(crate) fn load_persisted_settings() -> Option<PersistedSettings> {
    let raw = local_storage_get_string(LOCALSTORAGE_SETTINGS_KEY)?;
    serde_json::from_str(&raw).ok()
}

pub(crate) fn save_persisted_settings(settings: &PersistedSettings) {
    if let Ok(raw) = serde_json::to_string(settings) {
        local_storage_set_string(LOCALSTORAGE_SETTINGS_KEY, &raw);
    }
}
