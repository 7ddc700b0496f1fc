//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::controller::AppController;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<AppController>,
    /// Current title filter text
    pub filter: RwSignal<String>,
    /// Auto-dismiss delay for notices
    pub notice_timeout_ms: u32,
}

impl AppContext {
    pub fn new(controller: AppController, notice_timeout_ms: u32) -> Self {
        Self {
            controller: StoredValue::new(controller),
            filter: RwSignal::new(String::new()),
            notice_timeout_ms,
        }
    }

    /// The item controller (cheap clone)
    pub fn controller(&self) -> AppController {
        self.controller.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
