//! Viewer model - the complete state of the lightbox
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod image;
pub mod viewer;

pub use image::{ImageDescriptor, ImageKey, ImageSource};
pub use viewer::{ControlMode, ViewerModel, ViewerState};

/// What the presentation surface renders
///
/// `visible` is already resolved against the control mode.
#[derive(Debug)]
pub struct PresentationProps<'a, T> {
    pub images: &'a [ImageDescriptor<T>],
    pub visible: bool,
    pub index: usize,
}

impl<T> ViewerModel<T> {
    pub fn presentation(&self) -> PresentationProps<'_, T> {
        PresentationProps {
            images: &self.state.images,
            visible: self.effective_visible(),
            index: self.state.index,
        }
    }
}
