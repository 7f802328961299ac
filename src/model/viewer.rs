//! Viewer state and control mode

use tracing::trace;

use super::image::{ImageDescriptor, ImageKey};

/// Whether visibility is owned by the viewer or by an outside caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    /// The viewer shows and hides itself
    Uncontrolled,
    /// The caller supplies `visible`; the viewer only reports requests
    Controlled,
}

impl ControlMode {
    /// Derive the mode from the externally supplied visibility, if any
    pub fn from_external(visible: Option<bool>) -> Self {
        match visible {
            Some(_) => ControlMode::Controlled,
            None => ControlMode::Uncontrolled,
        }
    }

    pub fn is_controlled(self) -> bool {
        self == ControlMode::Controlled
    }
}

/// Images, active index and the viewer's own visibility flag.
///
/// In controlled mode `visible` is the internal flag only; what gets
/// presented is the caller's value (see [`ViewerModel::effective_visible`]).
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState<T> {
    pub images: Vec<ImageDescriptor<T>>,
    pub visible: bool,
    pub index: usize,
}

impl<T> Default for ViewerState<T> {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            visible: false,
            index: 0,
        }
    }
}

impl<T> ViewerState<T> {
    /// Position of the image with `key` in navigation order
    pub fn position_of(&self, key: ImageKey) -> Option<usize> {
        self.images.iter().position(|image| image.key == key)
    }

    /// Descriptor at the active index, if the index is in range
    pub fn current(&self) -> Option<&ImageDescriptor<T>> {
        self.images.get(self.index)
    }

    pub fn keys(&self) -> Vec<ImageKey> {
        self.images.iter().map(|image| image.key).collect()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Pull `index` back inside the registry after images went away
    pub fn clamp_index(&mut self) {
        self.index = self.index.min(self.images.len().saturating_sub(1));
    }
}

/// Caller keys at or above this do not move the key counter.
///
/// Minting starts below it, so reaching `u64::MAX` takes 2^63 calls.
pub const OBSERVED_KEY_LIMIT: u64 = u64::MAX / 2;

/// Everything the update functions operate on
#[derive(Debug, Clone)]
pub struct ViewerModel<T> {
    pub state: ViewerState<T>,
    /// Visibility supplied by a controlling owner; `None` when uncontrolled
    pub controlled_visible: Option<bool>,
    /// Target of an index-less imperative show
    pub default_index: usize,
    /// Last key handed out or observed
    last_key: u64,
}

impl<T> Default for ViewerModel<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T> ViewerModel<T> {
    pub fn new(default_index: usize) -> Self {
        Self {
            state: ViewerState::default(),
            controlled_visible: None,
            default_index,
            last_key: 0,
        }
    }

    /// Re-derived on every call; never cached
    pub fn control_mode(&self) -> ControlMode {
        ControlMode::from_external(self.controlled_visible)
    }

    /// Visibility the presentation surface should render
    pub fn effective_visible(&self) -> bool {
        self.controlled_visible.unwrap_or(self.state.visible)
    }

    /// Mint a key strictly greater than every key minted or tracked so far
    pub fn next_key(&mut self) -> ImageKey {
        loop {
            self.last_key = self.last_key.saturating_add(1);
            let key = ImageKey(self.last_key);
            // Untracked caller keys live above the limit
            if self.last_key < OBSERVED_KEY_LIMIT
                || self.last_key == u64::MAX
                || self.state.position_of(key).is_none()
            {
                return key;
            }
        }
    }

    /// Keep caller-chosen keys from colliding with minted ones
    pub fn observe_key(&mut self, key: ImageKey) {
        if key.0 < OBSERVED_KEY_LIMIT {
            self.last_key = self.last_key.max(key.0);
        } else {
            trace!(target: "registry", %key, "caller key above counter range");
        }
    }
}
