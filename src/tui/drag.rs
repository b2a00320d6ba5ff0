//! Drag-gesture state machine for reordering cards with the mouse. One
//! gesture at a time; the controller only tracks marks and emits a single
//! reorder request on a valid drop — it never touches the collection itself.

/// An emitted reorder request: `(dragged_id, target_id)`.
pub type ReorderRequest = (String, String);

#[derive(Debug)]
struct Gesture {
    source: String,
    over: Option<String>,
}

/// Per-widget drag controller. Held by the app and queried at draw time for
/// the dragging and drop-candidate marks.
#[derive(Debug, Default)]
pub struct DragController {
    gesture: Option<Gesture>,
}

impl DragController {
    /// Press on a card: enter Dragging, record the source. Ignored while a
    /// gesture is already active.
    pub fn start(&mut self, id: &str) {
        if self.gesture.is_none() {
            log::debug!("drag start: {id}");
            self.gesture = Some(Gesture {
                source: id.to_string(),
                over: None,
            });
        }
    }

    /// Pointer moved: mark the card under it as the drop candidate, or clear
    /// the mark when the pointer left all cards. The source card is never its
    /// own candidate.
    pub fn over(&mut self, id: Option<&str>) {
        if let Some(gesture) = &mut self.gesture {
            gesture.over = id
                .filter(|candidate| *candidate != gesture.source)
                .map(str::to_string);
        }
    }

    /// Release over `target`: clears all marks and emits a reorder request
    /// when the target exists and differs from the source. Release outside
    /// any card abandons the gesture.
    pub fn drop(&mut self, target: Option<&str>) -> Option<ReorderRequest> {
        let gesture = self.gesture.take()?;
        match target {
            Some(t) if t != gesture.source => {
                log::debug!("drop: {} onto {}", gesture.source, t);
                Some((gesture.source, t.to_string()))
            }
            _ => {
                log::debug!("drag abandoned: {}", gesture.source);
                None
            }
        }
    }

    /// Abandon the gesture (Esc). Clears all marks, emits nothing.
    pub fn cancel(&mut self) {
        if let Some(gesture) = self.gesture.take() {
            log::debug!("drag cancelled: {}", gesture.source);
        }
    }

    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// The card carrying the dragging mark, if any.
    pub fn dragging(&self) -> Option<&str> {
        self.gesture.as_ref().map(|g| g.source.as_str())
    }

    /// The card carrying the drop-candidate mark, if any.
    pub fn drop_candidate(&self) -> Option<&str> {
        self.gesture.as_ref().and_then(|g| g.over.as_deref())
    }
}
