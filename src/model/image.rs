//! Registered image descriptors

use serde::Serialize;

/// Unique identifier for a registered image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ImageKey(pub u64);

impl std::fmt::Display for ImageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One image available to the viewer.
///
/// The payload belongs to whoever registered the image; the registry only
/// looks at the key.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDescriptor<T> {
    pub key: ImageKey,
    pub payload: T,
}

impl<T> ImageDescriptor<T> {
    pub fn new(key: ImageKey, payload: T) -> Self {
        Self { key, payload }
    }
}

/// Payload used by the command-line replay tool
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSource {
    /// Image URL or path
    pub src: String,
    /// Alternative text
    pub alt: Option<String>,
}

impl ImageSource {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
        }
    }
}
