use leptos::prelude::*;
use std::collections::HashMap;

use super::pages::DEFAULT_PAGE;

/// App-wide UI state: the open page, sidebar visibility and the applied
/// filters of every list, so switching pages does not lose them.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<&'static str>,
    pub left_open: RwSignal<bool>,
    pub form_states: RwSignal<HashMap<String, serde_json::Value>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_PAGE),
            left_open: RwSignal::new(true),
            form_states: RwSignal::new(HashMap::new()),
        }
    }

    pub fn get_form_state(&self, form_key: &str) -> Option<serde_json::Value> {
        self.form_states
            .with_untracked(|states| states.get(form_key).cloned())
    }

    pub fn set_form_state(&self, form_key: String, state: serde_json::Value) {
        self.form_states.update(|states| {
            states.insert(form_key, state);
        });
    }

    pub fn open_page(&self, code: &'static str) {
        log::debug!("open_page: {}", code);
        self.active.set(code);
    }

    pub fn is_active(&self, code: &str) -> bool {
        self.active.get() == code
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
