//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{ImageDescriptor, ImageKey};

/// Registry messages, sent by the image wrappers as they mount and unmount
#[derive(Debug, Clone)]
pub enum RegistryMsg<T> {
    /// Insert a descriptor, or replace the one with the same key in place
    Update(ImageDescriptor<T>),
    /// Drop the descriptor with this key (no-op if absent)
    Remove(ImageKey),
}

/// Viewer messages (visibility and navigation)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerMsg {
    /// Open the viewer on the image with this key (trigger tap)
    Show(ImageKey),
    /// Open the viewer at a position, or the default start index (imperative)
    ShowIndex(Option<usize>),
    /// Close the viewer (backdrop tap, close button, imperative)
    Close,
    /// Navigate to a position (swipe, arrow keys on the presentation surface)
    ChangeIndex(usize),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg<T> {
    Registry(RegistryMsg<T>),
    Viewer(ViewerMsg),
}

impl<T> Msg<T> {
    /// Short name for logging without requiring `T: Debug`
    pub fn name(&self) -> String {
        match self {
            Msg::Registry(RegistryMsg::Update(d)) => format!("Registry::Update({})", d.key),
            Msg::Registry(RegistryMsg::Remove(key)) => format!("Registry::Remove({})", key),
            Msg::Viewer(m) => format!("Viewer::{:?}", m),
        }
    }
}

impl<T> From<RegistryMsg<T>> for Msg<T> {
    fn from(msg: RegistryMsg<T>) -> Self {
        Msg::Registry(msg)
    }
}

impl<T> From<ViewerMsg> for Msg<T> {
    fn from(msg: ViewerMsg) -> Self {
        Msg::Viewer(msg)
    }
}
