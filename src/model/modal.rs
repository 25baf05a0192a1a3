//! Modal stack for managing overlays
//!
//! Open/closed dialog state lives in an explicit enum stack instead of
//! boolean flags or a global dismissal listener. Only the top modal
//! receives input; popping it closes the overlay with nothing left behind.

/// A modal overlay displayed on top of the main screen
///
/// Dialog-local state (scroll position, pending selection) lives in the
/// dialog components; the stack only tracks which overlays are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Keyboard shortcut reference
    Help,
    /// Flattened field view of one record
    RecordDetail,
    /// Date range picker for the report screen
    RangePicker,
}

/// A stack of modal overlays
///
/// Rendered bottom to top; input routes to the top entry only.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<Modal> {
        self.stack.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        stack.push(Modal::RangePicker);

        assert_eq!(stack.top(), Some(Modal::RangePicker));
        assert_eq!(stack.pop(), Some(Modal::RangePicker));
        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert!(stack.top().is_none());
        assert!(stack.is_empty());
    }
}
