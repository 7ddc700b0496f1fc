//! Item Collection Controller
//!
//! Sole writer of the canonical sequence. Create, update and delete are
//! applied only after the server confirms them; reorder is local.
//!
//! Every async operation writes by id once its response arrives, never by an
//! index captured before the await, so unrelated changes made meanwhile
//! (filtering, dragging, other saves) are preserved.

use std::sync::Arc;

use leptos::prelude::*;
use tracing::{debug, error, info, warn};

use crate::cell::StateCell;
use crate::commands::{ApiError, ApiResult, CrudClient};
use crate::models::{Item, ItemDraft, ItemId};
use crate::notify::Notices;
use crate::session::{CreateForm, EditSession};
use crate::store::ItemCollection;

pub const CREATE_FAILED: &str = "Failed to add item. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to save changes. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete item. Please try again.";

const CREATED: &str = "Item added successfully.";
const UPDATED: &str = "Item updated successfully.";
const DELETED: &str = "Item deleted successfully.";

/// Canonical indices of a drop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReorderIntent {
    pub from: usize,
    pub to: usize,
}

/// Translate a drop of `from` onto `to`, made in the filtered `view`, into
/// canonical indices. `None` when either id has vanished from the view or the
/// sequence, or when nothing would move.
pub fn resolve_drop(
    view: &[Item],
    canonical: &ItemCollection,
    from: &ItemId,
    to: &ItemId,
) -> Option<ReorderIntent> {
    let view_from = view.iter().position(|i| &i.id == from)?;
    let view_to = view.iter().position(|i| &i.id == to)?;
    debug!("[DND] view drop {} -> {}", view_from, view_to);

    let from = canonical.position_of(from)?;
    let to = canonical.position_of(to)?;
    (from != to).then_some(ReorderIntent { from, to })
}

fn validate(draft: &ItemDraft) -> ApiResult<()> {
    if draft.title.trim().is_empty() {
        return Err(ApiError::validation("title is required"));
    }
    Ok(())
}

/// Inline text for a failed create or update
fn inline_message(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Validation(_) => "Title cannot be empty.".to_string(),
        ApiError::NotFound(_) => "This item no longer exists.".to_string(),
        ApiError::Network(_) => fallback.to_string(),
    }
}

pub struct ItemController<S, N> {
    client: Arc<dyn CrudClient>,
    items: S,
    notices: N,
}

impl<S: Clone, N: Clone> Clone for ItemController<S, N> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            items: self.items.clone(),
            notices: self.notices.clone(),
        }
    }
}

/// The controller as wired into the app
pub type AppController = ItemController<RwSignal<ItemCollection>, RwSignal<Notices>>;

impl AppController {
    pub fn with_signals(client: Arc<dyn CrudClient>, notice_limit: usize) -> Self {
        Self::new(
            client,
            RwSignal::new(ItemCollection::new()),
            RwSignal::new(Notices::new(notice_limit)),
        )
    }

    /// Read-only view of the canonical sequence
    pub fn collection(&self) -> ReadSignal<ItemCollection> {
        self.items.read_only()
    }

    pub fn notices(&self) -> ReadSignal<Notices> {
        self.notices.read_only()
    }
}

impl<S, N> ItemController<S, N>
where
    S: StateCell<ItemCollection>,
    N: StateCell<Notices>,
{
    pub fn new(client: Arc<dyn CrudClient>, items: S, notices: N) -> Self {
        Self { client, items, notices }
    }

    /// Load everything from the server, replacing the sequence.
    ///
    /// A failure is only logged: the list stays empty, which looks the same
    /// as a server with no items.
    pub async fn initialize(&self) {
        match self.client.fetch_items().await {
            Ok(items) => {
                let loaded = self.items.apply(|c| {
                    c.initialize(items);
                    c.len()
                });
                info!("[CTRL] Loaded {} items", loaded.unwrap_or(0));
            }
            Err(err) => error!("[CTRL] Error fetching items: {}", err),
        }
    }

    /// Create on the server, then append the confirmed item
    pub async fn create(&self, draft: &ItemDraft) -> ApiResult<Item> {
        let result = self.send_create(draft).await;
        match &result {
            Ok(item) => {
                info!("[CTRL] Created item {}", item.id);
                self.items.apply(|c| c.add(item.clone()));
                self.notify_success(CREATED);
            }
            Err(err) => self.notify_failure(CREATE_FAILED, err),
        }
        result
    }

    async fn send_create(&self, draft: &ItemDraft) -> ApiResult<Item> {
        validate(draft)?;
        self.client.create_item(draft).await
    }

    /// Update on the server, then replace the entry with the server's copy
    pub async fn update(&self, id: &ItemId, draft: &ItemDraft) -> ApiResult<Item> {
        let result = self.send_update(id, draft).await;
        match &result {
            Ok(item) => {
                let replaced = self
                    .items
                    .apply(|c| c.replace_by_id(id, item.clone()))
                    .unwrap_or(false);
                if replaced {
                    info!("[CTRL] Updated item {}", id);
                    self.notify_success(UPDATED);
                } else {
                    // Removed locally while the request was in flight
                    debug!("[CTRL] Update for item {} arrived after it left the list", id);
                }
            }
            Err(err) => self.notify_failure(UPDATE_FAILED, err),
        }
        result
    }

    async fn send_update(&self, id: &ItemId, draft: &ItemDraft) -> ApiResult<Item> {
        validate(draft)?;
        self.client.update_item(id, draft).await
    }

    /// Delete on the server, then remove the entry
    pub async fn delete(&self, id: &ItemId) -> ApiResult<()> {
        let result = self.client.delete_item(id).await;
        match &result {
            Ok(()) => {
                info!("[CTRL] Deleted item {}", id);
                self.items.apply(|c| c.remove_by_id(id));
                self.notify_success(DELETED);
            }
            Err(err) => self.notify_failure(DELETE_FAILED, err),
        }
        result
    }

    /// Apply a finished drag immediately. Never sent to the server.
    pub fn complete_drag(
        &self,
        view: &[Item],
        from: &ItemId,
        to: &ItemId,
    ) -> Option<ReorderIntent> {
        let intent = self.items.peek(|c| resolve_drop(view, c, from, to)).flatten();
        match intent {
            Some(ReorderIntent { from, to }) => {
                debug!("[DND] reorder {} -> {}", from, to);
                self.items.apply(|c| c.reorder(from, to));
            }
            None => debug!("[DND] drop of {} on {} ignored", from, to),
        }
        intent
    }

    /// Commit an edit session for `id`.
    ///
    /// Returns `None` when nothing was sent (save disabled, session busy, or
    /// the item is gone). The session may be disposed while the request is in
    /// flight; its result is then dropped.
    pub async fn save_session<E>(&self, id: &ItemId, session: &E) -> Option<ApiResult<Item>>
    where
        E: StateCell<EditSession>,
    {
        let Some(committed) = self.items.peek(|c| c.get(id).cloned()).flatten() else {
            warn!("[CTRL] Save for unknown item {}", id);
            return None;
        };
        let draft = session.apply(|s| s.begin_save(&committed)).flatten()?;

        let result = self.update(id, &draft).await;
        let outcome = match &result {
            Ok(_) => Ok(()),
            Err(err) => Err(inline_message(err, UPDATE_FAILED)),
        };
        if session.apply(|s| s.finish_save(outcome)).is_none() {
            debug!("[CTRL] Edit session for item {} closed before save finished", id);
        }
        Some(result)
    }

    /// Submit the "add item" form
    pub async fn submit_form<F>(&self, form: &F) -> Option<ApiResult<Item>>
    where
        F: StateCell<CreateForm>,
    {
        let draft = form.apply(|f| f.begin_submit()).flatten()?;

        let result = self.create(&draft).await;
        let outcome = match &result {
            Ok(_) => Ok(()),
            Err(err) => Err(inline_message(err, CREATE_FAILED)),
        };
        form.apply(|f| f.finish_submit(outcome));
        Some(result)
    }

    pub fn dismiss_notice(&self, id: u64) {
        self.notices.apply(|n| n.dismiss(id));
    }

    fn notify_success(&self, title: &str) {
        self.notices.apply(|n| n.success(title));
    }

    fn notify_failure(&self, title: &str, err: &ApiError) {
        warn!("[CTRL] {} ({})", title, err);
        self.notices.apply(|n| n.error(title, err.to_string()));
    }
}
