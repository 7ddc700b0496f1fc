//! Items API Client
//!
//! The remote CRUD operations the controller consumes, organized by concern.

mod error;
mod item;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::models::{Item, ItemDraft, ItemId};

pub use error::{ApiError, ApiResult};
pub use item::HttpCrudClient;

/// Remote persistence for items.
///
/// Futures are not `Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait CrudClient: Send + Sync {
    /// Create an item; the server assigns its id
    async fn create_item(&self, draft: &ItemDraft) -> ApiResult<Item>;

    /// Replace title and body of an existing item
    async fn update_item(&self, id: &ItemId, draft: &ItemDraft) -> ApiResult<Item>;

    async fn delete_item(&self, id: &ItemId) -> ApiResult<()>;

    /// All items in server order
    async fn fetch_items(&self) -> ApiResult<Vec<Item>>;
}
