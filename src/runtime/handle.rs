//! Imperative viewer handle
//!
//! Addresses images by position, not by key: `show(Some(2))` opens the third
//! registered image.

use crate::messages::ViewerMsg;

use super::coordinator::Coordinator;

/// Borrowed show/close handle over a [`Coordinator`]
pub struct ViewerHandle<'a, T> {
    coordinator: &'a mut Coordinator<T>,
}

impl<'a, T: Clone> ViewerHandle<'a, T> {
    pub(crate) fn new(coordinator: &'a mut Coordinator<T>) -> Self {
        Self { coordinator }
    }

    /// Open at `index`, or at the configured default start index
    pub fn show(&mut self, index: Option<usize>) {
        self.coordinator.dispatch(ViewerMsg::ShowIndex(index));
    }

    pub fn close(&mut self) {
        self.coordinator.dispatch(ViewerMsg::Close);
    }
}
