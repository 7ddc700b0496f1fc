//! UI Components
//!
//! Reusable Leptos components.

mod empty_state;
mod item_card;
mod item_list;
mod new_item_form;
mod notice_bar;

pub use empty_state::EmptyState;
pub use item_card::ItemCard;
pub use item_list::ItemList;
pub use new_item_form::NewItemForm;
pub use notice_bar::NoticeBar;
