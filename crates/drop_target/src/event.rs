use crate::{DropPayload, Transferable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropAction {
    Copy,
    Move,
    CopyOrMove,
}

/// A single drop delivered by the GUI toolkit.
pub trait DropEvent {
    fn accept_drop(&mut self, action: DropAction);
    fn transferable(&self) -> &dyn Transferable;
}

/// The embedding control's own drop handling.
///
/// Runs after classification on every drop, whatever the outcome.
pub trait DropListener {
    fn dropped(&mut self, payload: &DropPayload);
}

impl<F> DropListener for F
where
    F: FnMut(&DropPayload),
{
    fn dropped(&mut self, payload: &DropPayload) {
        self(payload)
    }
}

/// A drop event wrapping any [`Transferable`], recording how it was accepted.
#[derive(Debug)]
pub struct PendingDrop<T> {
    transferable: T,
    accepted: Option<DropAction>,
}

impl<T: Transferable> PendingDrop<T> {
    pub fn new(transferable: T) -> Self {
        Self {
            transferable,
            accepted: None,
        }
    }

    pub fn accepted(&self) -> Option<DropAction> {
        self.accepted
    }
}

impl<T: Transferable> DropEvent for PendingDrop<T> {
    fn accept_drop(&mut self, action: DropAction) {
        self.accepted = Some(action);
    }

    fn transferable(&self) -> &dyn Transferable {
        &self.transferable
    }
}
