//! Item Card Component
//!
//! One item in the grid: drag handle, committed fields or the edit form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::{Item, ItemId};
use crate::session::EditSession;

use leptos_dragdrop::*;

/// Sortable wrapper around a single item
#[component]
pub fn ItemCard(item: Item, dnd: SortableSignals<ItemId>) -> impl IntoView {
    let session = RwSignal::new(EditSession::new());
    let is_open = Memo::new(move |_| session.with(|s| s.is_open()));

    let id = item.id.clone();
    let on_grab = make_on_pointerdown(dnd, id.clone());
    let on_enter = make_on_item_pointerenter(dnd, id.clone());
    let on_leave = make_on_item_pointerleave(dnd, id.clone());

    let card_class = move || {
        let mut c = String::from("item-card-wrapper");
        if dnd.is_dragging(&id) {
            c.push_str(" dragging");
        }
        if dnd.is_drop_target(&id) {
            c.push_str(" drop-target");
        }
        c
    };

    view! {
        <div class=card_class on:pointerenter=on_enter on:pointerleave=on_leave>
            <div class="grab-handle" title="Drag to reorder" on:pointerdown=on_grab>"⠿"</div>
            {move || {
                let item = item.clone();
                if is_open.get() {
                    view! { <ItemEditor item=item session=session /> }.into_any()
                } else {
                    view! { <ItemView item=item session=session dnd=dnd /> }.into_any()
                }
            }}
        </div>
    }
}

/// Committed fields with edit and delete actions
#[component]
fn ItemView(
    item: Item,
    session: RwSignal<EditSession>,
    dnd: SortableSignals<ItemId>,
) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id.clone();
    let committed = item.clone();

    let begin_edit = move |_| {
        // Ignore the click that ends a drag
        if dnd.drag_just_ended.get_untracked() {
            return;
        }
        session.update(|s| s.begin_edit(&committed));
    };

    let delete = move |_| {
        let controller = ctx.controller();
        let id = id.clone();
        spawn_local(async move {
            let _ = controller.delete(&id).await;
        });
    };

    view! {
        <div class="item-card">
            <div class="item-content">
                <h2 class="item-title">{item.title}</h2>
                <p class="item-body">{item.body}</p>
            </div>
            <div class="item-actions">
                <button on:click=begin_edit aria-label="Edit item">"Edit"</button>
                <button class="delete-btn" on:click=delete aria-label="Delete item">
                    "Delete"
                </button>
            </div>
        </div>
    }
}

/// Draft fields with save and cancel
#[component]
fn ItemEditor(item: Item, session: RwSignal<EditSession>) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id.clone();
    let committed = item;

    let save_disabled = move || !session.with(|s| s.can_save(&committed));
    let saving = move || session.with(|s| s.is_saving());

    let save = move |_| {
        let controller = ctx.controller();
        let id = id.clone();
        spawn_local(async move {
            controller.save_session(&id, &session).await;
        });
    };

    view! {
        <div class="item-card editing">
            <div class="item-fields">
                <input
                    type="text"
                    class="item-title-input"
                    placeholder="Title"
                    prop:value=move || session.with(|s| s.draft().title.clone())
                    prop:disabled=saving
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        session.update(|s| s.set_title(value));
                    }
                />
                <textarea
                    class="item-body-input"
                    placeholder="Description"
                    prop:value=move || session.with(|s| s.draft().body.clone())
                    prop:disabled=saving
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        session.update(|s| s.set_body(value));
                    }
                ></textarea>
            </div>

            {move || session.with(|s| s.error().map(str::to_string)).map(|error| view! {
                <p class="item-error">{error}</p>
            })}

            <div class="item-actions">
                <button on:click=save disabled=save_disabled aria-label="Save changes">
                    {move || if saving() { "Saving..." } else { "Save" }}
                </button>
                <button
                    on:click=move |_| session.update(|s| s.cancel())
                    disabled=saving
                    aria-label="Cancel editing"
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
