use std::io;
use std::path::{self, PathBuf};

use pulse_logging::pulse_debug;
use serde::Serialize;

use crate::{DropAction, DropEvent, DropListener, Flavor, TransferData, TransferError, Transferable};

/// Classification of the last drop.
///
/// The numeric codes match what older hosts read as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DropType {
    #[default]
    Error = 0,
    Text = 1,
    File = 2,
}

impl DropType {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// What a drop carried, normalized to strings.
///
/// `File` holds one absolute path per dropped entry, `Text` holds exactly
/// one string and `Error` holds nothing. `flavors` lists what the drop
/// offered, whatever the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DropPayload {
    pub kind: DropType,
    pub data: Vec<String>,
    pub flavors: Vec<Flavor>,
}

impl DropPayload {
    fn files(data: Vec<String>) -> Self {
        Self {
            kind: DropType::File,
            data,
            flavors: Vec::new(),
        }
    }

    fn text(text: String) -> Self {
        Self {
            kind: DropType::Text,
            data: vec![text],
            flavors: Vec::new(),
        }
    }
}

/// Drop handler for a GUI control.
///
/// Each drop replaces the previous payload; the control reads it back
/// through [`DropTarget::drop_type`] and [`DropTarget::transfer_data`]
/// from its listener or right after the event.
#[derive(Default)]
pub struct DropTarget {
    payload: DropPayload,
    listener: Option<Box<dyn DropListener>>,
}

impl DropTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listener(listener: impl DropListener + 'static) -> Self {
        Self {
            payload: DropPayload::default(),
            listener: Some(Box::new(listener)),
        }
    }

    /// Accepts and classifies one drop, then runs the control's listener.
    ///
    /// Never fails: anything that cannot be read becomes [`DropType::Error`].
    pub fn handle_drop(&mut self, event: &mut dyn DropEvent) {
        event.accept_drop(DropAction::CopyOrMove);
        let offered = event.transferable().flavors();

        let mut payload = match classify(event.transferable()) {
            Ok(Some(payload)) => {
                pulse_debug!(
                    "Drop classified as {:?} with {} item(s)",
                    payload.kind,
                    payload.data.len()
                );
                payload
            }
            Ok(None) => {
                pulse_debug!("Drop offered no supported flavor: {:?}", offered);
                DropPayload::default()
            }
            Err(err) => {
                pulse_debug!("Drop extraction failed: {}", err);
                DropPayload::default()
            }
        };
        payload.flavors = offered;
        self.payload = payload;

        if let Some(listener) = self.listener.as_mut() {
            listener.dropped(&self.payload);
        }
    }

    pub fn drop_type(&self) -> DropType {
        self.payload.kind
    }

    pub fn transfer_data(&self) -> &[String] {
        &self.payload.data
    }

    pub fn payload(&self) -> &DropPayload {
        &self.payload
    }

    /// Flavors the last drop offered, including ones that were not understood.
    pub fn offered_flavors(&self) -> &[Flavor] {
        &self.payload.flavors
    }
}

/// File lists win over text when both are offered.
fn classify(transferable: &dyn Transferable) -> Result<Option<DropPayload>, TransferError> {
    if transferable.is_flavor_supported(&Flavor::FileList) {
        return match transferable.transfer_data(&Flavor::FileList)? {
            TransferData::FileList(paths) => Ok(Some(DropPayload::files(absolute_paths(&paths)?))),
            TransferData::Text(_) => Err(TransferError::UnsupportedFlavor(Flavor::FileList)),
        };
    }

    if transferable.is_flavor_supported(&Flavor::PlainText) {
        return match transferable.transfer_data(&Flavor::PlainText)? {
            TransferData::Text(text) => Ok(Some(DropPayload::text(text))),
            TransferData::FileList(_) => Err(TransferError::UnsupportedFlavor(Flavor::PlainText)),
        };
    }

    Ok(None)
}

fn absolute_paths(paths: &[PathBuf]) -> io::Result<Vec<String>> {
    paths
        .iter()
        .map(|p| path::absolute(p).map(|abs| abs.to_string_lossy().into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_integer_protocol() {
        assert_eq!(DropType::Error.code(), 0);
        assert_eq!(DropType::Text.code(), 1);
        assert_eq!(DropType::File.code(), 2);
    }

    #[test]
    fn relative_paths_are_made_absolute() {
        let paths = absolute_paths(&[PathBuf::from("scan.nii")]).unwrap();
        assert_eq!(paths.len(), 1);
        assert!(PathBuf::from(&paths[0]).is_absolute());
        assert!(paths[0].ends_with("scan.nii"));
    }

    #[test]
    fn empty_path_cannot_be_made_absolute() {
        assert!(absolute_paths(&[PathBuf::new()]).is_err());
    }
}
