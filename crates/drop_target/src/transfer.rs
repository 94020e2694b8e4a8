use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// A content representation a drag-and-drop payload may offer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Flavor {
    FileList,
    PlainText,
    /// Anything else, named by its MIME type or toolkit identifier.
    Other(String),
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flavor::FileList => write!(f, "file list"),
            Flavor::PlainText => write!(f, "plain text"),
            Flavor::Other(name) => write!(f, "{name}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferData {
    FileList(Vec<PathBuf>),
    Text(String),
}

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("unsupported flavor: {0}")]
    UnsupportedFlavor(Flavor),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Payload of a drop event, as handed over by the GUI toolkit.
pub trait Transferable {
    fn flavors(&self) -> Vec<Flavor>;

    fn is_flavor_supported(&self, flavor: &Flavor) -> bool {
        self.flavors().contains(flavor)
    }

    fn transfer_data(&self, flavor: &Flavor) -> Result<TransferData, TransferError>;
}

/// In-memory payload for hosts that hand over plain values.
#[derive(Debug, Default)]
pub struct MemoryTransferable {
    files: Option<Vec<PathBuf>>,
    text: Option<String>,
    other: Vec<Flavor>,
    failure: Option<io::ErrorKind>,
}

impl MemoryTransferable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Advertises a flavor that carries no data this crate understands.
    pub fn with_flavor(mut self, name: impl Into<String>) -> Self {
        self.other.push(Flavor::Other(name.into()));
        self
    }

    /// Makes every data request fail with an I/O error of `kind`.
    pub fn failing_with(mut self, kind: io::ErrorKind) -> Self {
        self.failure = Some(kind);
        self
    }
}

impl Transferable for MemoryTransferable {
    fn flavors(&self) -> Vec<Flavor> {
        let mut flavors = Vec::with_capacity(2 + self.other.len());
        if self.files.is_some() {
            flavors.push(Flavor::FileList);
        }
        if self.text.is_some() {
            flavors.push(Flavor::PlainText);
        }
        flavors.extend(self.other.iter().cloned());
        flavors
    }

    fn transfer_data(&self, flavor: &Flavor) -> Result<TransferData, TransferError> {
        if let Some(kind) = self.failure {
            return Err(io::Error::from(kind).into());
        }
        match (flavor, &self.files, &self.text) {
            (Flavor::FileList, Some(files), _) => Ok(TransferData::FileList(files.clone())),
            (Flavor::PlainText, _, Some(text)) => Ok(TransferData::Text(text.clone())),
            _ => Err(TransferError::UnsupportedFlavor(flavor.clone())),
        }
    }
}
