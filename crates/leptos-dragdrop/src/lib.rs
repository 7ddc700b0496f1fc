//! Leptos DragDrop Utilities
//!
//! Sortable lists for Leptos using pointer events.
//! Uses movement threshold to distinguish click from drag.
//!
//! The gesture itself lives in [`SortGesture`]; this module only binds it to
//! DOM events and exposes it through signals.

mod gesture;

pub use gesture::{DropIntent, GesturePhase, SortGesture, DRAG_THRESHOLD_PX};

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::PointerEvent;

/// How long `drag_just_ended` stays raised after a drop
const DRAG_END_GRACE_MS: i32 = 100;

/// DnD state signals for one sortable list keyed by `K`
pub struct SortableSignals<K: Send + Sync + 'static> {
    pub gesture: RwSignal<SortGesture<K>>,
    /// Raised briefly after a drag so click handlers can ignore the drop click
    pub drag_just_ended: RwSignal<bool>,
}

impl<K: Send + Sync + 'static> Clone for SortableSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Send + Sync + 'static> Copy for SortableSignals<K> {}

pub fn create_sortable_signals<K>() -> SortableSignals<K>
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    SortableSignals {
        gesture: RwSignal::new(SortGesture::new()),
        drag_just_ended: RwSignal::new(false),
    }
}

impl<K> SortableSignals<K>
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    /// Whether `id` is the item being dragged (tracked)
    pub fn is_dragging(&self, id: &K) -> bool {
        self.gesture.with(|g| g.dragging_id() == Some(id))
    }

    /// Whether `id` is the current drop target (tracked)
    pub fn is_drop_target(&self, id: &K) -> bool {
        self.gesture.with(|g| g.over_id() == Some(id))
    }

    /// Whether any drag is in progress (tracked)
    pub fn any_dragging(&self) -> bool {
        self.gesture.with(|g| g.is_dragging())
    }
}

/// End drag operation
pub fn end_drag<K>(dnd: &SortableSignals<K>)
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    dnd.gesture.update(|g| g.cancel());
    dnd.drag_just_ended.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended;
        let cb = Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            DRAG_END_GRACE_MS,
        );
        cb.forget();
    }
}

/// Create pointerdown handler for a grab handle
/// Records pending drag with start position
pub fn make_on_pointerdown<K>(
    dnd: SortableSignals<K>,
    item_id: K,
) -> impl Fn(PointerEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    move |ev: PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        // Keep text selection from starting under the handle
        ev.prevent_default();
        // Touch pointers are captured by the handle; release so other items get pointerenter
        if let Some(el) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            let _ = el.release_pointer_capture(ev.pointer_id());
        }
        let (x, y) = (ev.client_x(), ev.client_y());
        dnd.gesture.update(|g| g.pointer_down(item_id.clone(), x, y));
    }
}

/// Create pointerenter handler for items (become drop target)
pub fn make_on_item_pointerenter<K>(
    dnd: SortableSignals<K>,
    item_id: K,
) -> impl Fn(PointerEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: PointerEvent| {
        if dnd.gesture.with_untracked(|g| g.is_dragging()) {
            dnd.gesture.update(|g| g.pointer_enter(item_id.clone()));
        }
    }
}

/// Create pointerleave handler for items
pub fn make_on_item_pointerleave<K>(
    dnd: SortableSignals<K>,
    item_id: K,
) -> impl Fn(PointerEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: PointerEvent| {
        if dnd.gesture.with_untracked(|g| g.over_id() == Some(&item_id)) {
            dnd.gesture.update(|g| g.pointer_leave(&item_id));
        }
    }
}

/// Bind document pointermove and pointercancel handlers - starts drag if moved
/// enough, abandons it when the pointer is gone
pub fn bind_global_pointermove<K>(dnd: SortableSignals<K>)
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    let on_pointermove = Closure::<dyn FnMut(PointerEvent)>::new(move |ev: PointerEvent| {
        if dnd.gesture.with_untracked(|g| g.is_idle()) {
            return;
        }
        // No button held: the release happened somewhere we never heard about
        if ev.buttons() == 0 {
            lose_pointer(&dnd);
            return;
        }
        // Only a pending gesture can change on movement; skip notifying otherwise
        let started = dnd
            .gesture
            .try_update_untracked(|g| g.pointer_move(ev.client_x(), ev.client_y()))
            .unwrap_or(false);
        if started {
            tracing::debug!("[DND] drag started");
            dnd.gesture.notify();
        }
    });

    let on_pointercancel = Closure::<dyn FnMut(PointerEvent)>::new(move |_ev: PointerEvent| {
        lose_pointer(&dnd);
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            listen(&doc, "pointermove", &on_pointermove);
            listen(&doc, "pointercancel", &on_pointercancel);
        }
    }
    on_pointermove.forget();
    on_pointercancel.forget();
}

fn listen(doc: &web_sys::Document, event: &str, handler: &Closure<dyn FnMut(PointerEvent)>) {
    let _ = doc.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
}

/// Drop the gesture after a pointer vanished mid-gesture
fn lose_pointer<K>(dnd: &SortableSignals<K>)
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    let was_dragging = dnd.gesture.try_update(|g| g.pointer_lost()).unwrap_or(false);
    if was_dragging {
        tracing::debug!("[DND] pointer lost, drag abandoned");
        end_drag(dnd);
    }
}

/// Bind document pointerup handler for drop detection
///
/// `on_drop` runs once per completed drag released over another item.
/// Also binds the global pointermove handler.
pub fn bind_global_pointerup<K, F>(dnd: SortableSignals<K>, on_drop: F)
where
    K: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(DropIntent<K>) + 'static,
{
    let on_pointerup = Closure::<dyn FnMut(PointerEvent)>::new(move |_ev: PointerEvent| {
        let was_dragging = dnd.gesture.with_untracked(|g| g.is_dragging());
        let intent = dnd.gesture.try_update(|g| g.pointer_up()).flatten();

        if was_dragging {
            end_drag(&dnd);
        }
        // Not dragging - click event will fire naturally on the element
        if let Some(intent) = intent {
            on_drop(intent);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            listen(&doc, "pointerup", &on_pointerup);
        }
    }
    on_pointerup.forget();

    bind_global_pointermove(dnd);
}
