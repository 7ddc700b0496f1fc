//! Item List Component
//!
//! Filter input plus the sortable grid of item cards.
//! Uses leptos-dragdrop; drops reorder the local list only.

use leptos::prelude::*;

use crate::components::{EmptyState, ItemCard};
use crate::context::use_app_context;
use crate::filter::filter_view;
use crate::models::ItemId;

use leptos_dragdrop::*;

/// Filterable, drag-sortable item list
#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_app_context();
    let controller = ctx.controller();
    let collection = controller.collection();
    let filter = ctx.filter;

    let filtered =
        Memo::new(move |_| collection.with(|c| filter.with(|p| filter_view(c.items(), p))));

    let dnd = create_sortable_signals::<ItemId>();

    // Drops are resolved against the list as currently shown
    bind_global_pointerup(dnd, move |intent: DropIntent<ItemId>| {
        let view = filtered.get_untracked();
        controller.complete_drag(&view, &intent.from, &intent.to);
    });

    let empty_text = move || {
        if filter.with(|f| !f.is_empty()) && filtered.with(|v| v.is_empty()) {
            Some("No items match your search.")
        } else if collection.with(|c| c.is_empty()) {
            Some("No items added yet.")
        } else {
            None
        }
    };

    view! {
        <div class="item-list">
            <Show when=move || collection.with(|c| !c.is_empty())>
                <input
                    type="text"
                    class="filter-input"
                    placeholder="Filter items by title"
                    prop:value=move || filter.get()
                    on:input=move |ev| filter.set(event_target_value(&ev))
                />
            </Show>

            {move || empty_text().map(|text| view! { <EmptyState text=text /> })}

            <div class="item-grid">
                <For
                    each=move || filtered.get()
                    // Edits re-key the card so it renders the committed fields
                    key=|item| (item.id.clone(), item.title.clone(), item.body.clone())
                    children=move |item| view! { <ItemCard item=item dnd=dnd /> }
                />
            </div>
        </div>
    }
}
