//! Item Board Frontend App
//!
//! Main application component: add form, filterable sortable list, notices.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{CrudClient, HttpCrudClient};
use crate::components::{ItemList, NewItemForm, NoticeBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::AppController;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    tracing::info!("[APP] Using items API at {}", config.api_base_url);

    let client: Arc<dyn CrudClient> = Arc::new(HttpCrudClient::new(&config.api_base_url));
    let controller = AppController::with_signals(client, config.notice_limit);

    // Provide context to all children
    provide_context(AppContext::new(controller.clone(), config.notice_timeout_ms));

    // Load items on mount
    spawn_local(async move {
        controller.initialize().await;
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Item Board"</h1>

                <NewItemForm />

                <ItemList />
            </main>

            <NoticeBar />
        </div>
    }
}
