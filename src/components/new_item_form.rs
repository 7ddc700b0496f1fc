//! New Item Form Component
//!
//! Form for creating new items. The item shows up in the list only once the
//! server has confirmed it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::session::CreateForm;

/// Form for creating new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(CreateForm::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let controller = ctx.controller();
        spawn_local(async move {
            controller.submit_form(&form).await;
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <label class="field-label">"Title:"</label>
            <input
                type="text"
                required
                prop:value=move || form.with(|f| f.draft().title.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set_title(value));
                }
            />

            <label class="field-label">"Description:"</label>
            <textarea
                required
                prop:value=move || form.with(|f| f.draft().body.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set_body(value));
                }
            ></textarea>

            {move || form.with(|f| f.error().map(str::to_string)).map(|error| view! {
                <p class="form-error">{error}</p>
            })}

            <button type="submit" disabled=move || !form.with(|f| f.can_submit())>
                {move || if form.with(|f| f.is_submitting()) { "Adding..." } else { "Add Item" }}
            </button>
        </form>
    }
}
