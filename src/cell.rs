//! State Cells
//!
//! Where async reconciliation writes its results. A cell whose owner is gone
//! (component unmounted, signal disposed) reports `None` and the write is
//! dropped, so late responses never fail.

use leptos::prelude::*;

pub trait StateCell<T> {
    /// Mutate the value; `None` if the cell no longer exists
    fn apply<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    /// Read the value without subscribing; `None` if the cell no longer exists
    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn apply<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

#[cfg(test)]
pub use test_cells::*;
