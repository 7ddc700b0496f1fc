use leptos::prelude::*;

/// Placeholder shown when there is nothing to list
#[component]
pub fn EmptyState(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>{text}</p>
        </div>
    }
}
