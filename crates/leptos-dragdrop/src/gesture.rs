//! Sort Gesture State Machine
//!
//! Framework-free core of the sortable list: turns discrete pointer events
//! into at most one drop intent per gesture.

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Where the gesture currently is
#[derive(Clone, Debug, PartialEq)]
pub enum GesturePhase<K> {
    /// No pointer is held on a grab handle
    Idle,
    /// Pointer is down on a handle but has not moved past the threshold yet
    Pending { id: K, start_x: i32, start_y: i32 },
    /// Drag recognized; `over` is the item currently under the pointer
    Dragging { id: K, over: Option<K> },
}

/// A completed drag: `from` was dropped onto `to`
#[derive(Clone, Debug, PartialEq)]
pub struct DropIntent<K> {
    pub from: K,
    pub to: K,
}

/// Pointer-driven reorder gesture for a list keyed by `K`
#[derive(Clone, Debug, PartialEq)]
pub struct SortGesture<K> {
    phase: GesturePhase<K>,
    threshold: i32,
}

impl<K> Default for SortGesture<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> SortGesture<K> {
    pub fn new() -> Self {
        Self::with_threshold(DRAG_THRESHOLD_PX)
    }

    pub fn with_threshold(threshold: i32) -> Self {
        Self {
            phase: GesturePhase::Idle,
            threshold,
        }
    }

    pub fn phase(&self) -> &GesturePhase<K> {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, GesturePhase::Idle)
    }

    /// Abandon the gesture without emitting anything
    pub fn cancel(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    /// The pointer went away without a release we could see (pointercancel,
    /// or released outside the document). Returns true if a drag was active.
    pub fn pointer_lost(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.phase = GesturePhase::Idle;
        was_dragging
    }
}

impl<K: Clone + PartialEq> SortGesture<K> {
    /// Id of the item being dragged, once the drag is recognized
    pub fn dragging_id(&self) -> Option<&K> {
        match &self.phase {
            GesturePhase::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Id of the current drop target, if any
    pub fn over_id(&self) -> Option<&K> {
        match &self.phase {
            GesturePhase::Dragging { over, .. } => over.as_ref(),
            _ => None,
        }
    }

    /// Pointer pressed on the grab handle of `id`
    pub fn pointer_down(&mut self, id: K, x: i32, y: i32) {
        self.phase = GesturePhase::Pending {
            id,
            start_x: x,
            start_y: y,
        };
    }

    /// Pointer moved anywhere; returns true when this move starts the drag
    pub fn pointer_move(&mut self, x: i32, y: i32) -> bool {
        let GesturePhase::Pending { id, start_x, start_y } = &self.phase else {
            return false;
        };
        let dx = (x - start_x).abs();
        let dy = (y - start_y).abs();
        if dx > self.threshold || dy > self.threshold {
            self.phase = GesturePhase::Dragging {
                id: id.clone(),
                over: None,
            };
            return true;
        }
        false
    }

    /// Pointer entered the element of `id`
    pub fn pointer_enter(&mut self, target: K) {
        if let GesturePhase::Dragging { id, over } = &mut self.phase {
            // Don't allow dropping on self
            *over = if *id != target { Some(target) } else { None };
        }
    }

    /// Pointer left the element of `id`
    pub fn pointer_leave(&mut self, target: &K) {
        if let GesturePhase::Dragging { over, .. } = &mut self.phase {
            if over.as_ref() == Some(target) {
                *over = None;
            }
        }
    }

    /// Pointer released. Always returns to `Idle`; yields an intent only for a
    /// recognized drag released over a different item.
    pub fn pointer_up(&mut self) -> Option<DropIntent<K>> {
        match std::mem::replace(&mut self.phase, GesturePhase::Idle) {
            GesturePhase::Dragging { id, over: Some(over) } if id != over => Some(DropIntent {
                from: id,
                to: over,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_without_movement_emits_nothing() {
        let mut g = SortGesture::new();
        g.pointer_down(1u32, 10, 10);
        assert!(!g.pointer_move(12, 14));
        g.pointer_enter(2);
        assert_eq!(g.pointer_up(), None);
        assert_eq!(g.phase(), &GesturePhase::Idle);
    }

    #[test]
    fn test_drag_starts_past_threshold() {
        let mut g = SortGesture::new();
        g.pointer_down(1u32, 0, 0);
        assert!(!g.pointer_move(5, 5));
        assert!(g.pointer_move(0, 6));
        assert!(g.is_dragging());
        assert_eq!(g.dragging_id(), Some(&1));
        // Further movement does not restart
        assert!(!g.pointer_move(50, 50));
    }

    #[test]
    fn test_drop_on_other_item() {
        let mut g = SortGesture::new();
        g.pointer_down(1u32, 0, 0);
        g.pointer_move(-10, 0);
        g.pointer_enter(2);
        assert_eq!(g.over_id(), Some(&2));
        assert_eq!(g.pointer_up(), Some(DropIntent { from: 1, to: 2 }));
        assert!(!g.is_dragging());
    }

    #[test]
    fn test_drop_on_self_is_ignored() {
        let mut g = SortGesture::new();
        g.pointer_down(1u32, 0, 0);
        g.pointer_move(20, 0);
        g.pointer_enter(1);
        assert_eq!(g.over_id(), None);
        assert_eq!(g.pointer_up(), None);
    }

    #[test]
    fn test_leave_clears_target() {
        let mut g = SortGesture::new();
        g.pointer_down("a".to_string(), 0, 0);
        g.pointer_move(20, 0);
        g.pointer_enter("b".to_string());
        g.pointer_leave(&"c".to_string());
        assert_eq!(g.over_id().map(String::as_str), Some("b"));
        g.pointer_leave(&"b".to_string());
        assert_eq!(g.pointer_up(), None);
    }

    #[test]
    fn test_enter_before_drag_recognized_is_ignored() {
        let mut g = SortGesture::new();
        g.pointer_down(1u32, 0, 0);
        g.pointer_enter(2);
        g.pointer_move(30, 0);
        assert_eq!(g.over_id(), None);
    }

    #[test]
    fn test_lost_pointer_ends_drag_without_drop() {
        let mut g = SortGesture::new();
        g.pointer_down(1u32, 0, 0);
        g.pointer_move(20, 0);
        assert!(g.pointer_lost());
        assert!(g.is_idle());

        // A later plain click over another item must not drop the stale drag
        g.pointer_enter(2);
        assert_eq!(g.over_id(), None);
        assert_eq!(g.pointer_up(), None);

        g.pointer_down(1, 0, 0);
        assert!(!g.pointer_lost());
    }

    #[test]
    fn test_custom_threshold_and_cancel() {
        let mut g = SortGesture::with_threshold(0);
        g.pointer_down(7u32, 0, 0);
        assert!(g.pointer_move(1, 0));
        g.cancel();
        assert_eq!(g.phase(), &GesturePhase::Idle);
    }
}
