use serde::{Deserialize, Serialize};

pub const PROFILE_STORAGE_KEY: &str = "hw_profile";

/// Who the greeting sentence talks about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub age: u32,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Gemma Liang".to_string(),
            age: 18,
        }
    }
}

impl Profile {
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Persisted profile from localStorage, or the default.
    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(PROFILE_STORAGE_KEY) {
                    if let Some(profile) = Self::from_json(&raw) {
                        return profile;
                    }
                }
            }
        }
        Self::default()
    }
}
