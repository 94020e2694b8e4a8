//! Drop target adapter: classifies drag-and-drop payloads for an embedding control.
mod event;
mod target;
mod transfer;

pub use event::{DropAction, DropEvent, DropListener, PendingDrop};
pub use target::{DropPayload, DropTarget, DropType};
pub use transfer::{Flavor, MemoryTransferable, TransferData, TransferError, Transferable};
