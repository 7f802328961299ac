//! Viewer coordinator
//!
//! Owns the viewer model, applies messages through [`crate::update::update`]
//! and runs the resulting commands against the registered listeners. Every
//! mutation path (wrappers, presentation surface, imperative handle) ends up
//! in [`Coordinator::dispatch`].

use tracing::trace;

use crate::commands::Cmd;
use crate::config::ViewerConfig;
use crate::image::ScaleLimits;
use crate::messages::{Msg, RegistryMsg, ViewerMsg};
use crate::model::{
    ControlMode, ImageDescriptor, ImageKey, PresentationProps, ViewerModel, ViewerState,
};
use crate::update::update;

use super::handle::ViewerHandle;

/// Called with the new index and the state before navigation
pub type IndexChangeHandler<T> = Box<dyn FnMut(usize, &ViewerState<T>)>;
/// Called with the requested visibility, resolved index and a state snapshot
pub type VisibleChangeHandler<T> = Box<dyn FnMut(bool, usize, &ViewerState<T>)>;
/// Called with the current state whenever it changed
pub type StateChangeHandler<T> = Box<dyn FnMut(&ViewerState<T>)>;

/// Image registry and visibility state for one viewer
pub struct Coordinator<T> {
    model: ViewerModel<T>,
    limits: ScaleLimits,
    on_index_change: Option<IndexChangeHandler<T>>,
    on_visible_change: Option<VisibleChangeHandler<T>>,
    on_state_change: Option<StateChangeHandler<T>>,
}

impl<T: Clone> Default for Coordinator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Coordinator<T> {
    /// Uncontrolled coordinator with default scale limits and start index 0
    pub fn new() -> Self {
        Self {
            model: ViewerModel::default(),
            limits: ScaleLimits::default(),
            on_index_change: None,
            on_visible_change: None,
            on_state_change: None,
        }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        let mut coordinator = Self::new();
        coordinator.model.default_index = config.default_start_index;
        coordinator.limits = config.scale_limits();
        coordinator
    }

    /// Set the index-changed listener (builder pattern)
    pub fn on_index_change(mut self, handler: impl FnMut(usize, &ViewerState<T>) + 'static) -> Self {
        self.on_index_change = Some(Box::new(handler));
        self
    }

    /// Set the visibility-changed listener (builder pattern)
    pub fn on_visible_change(
        mut self,
        handler: impl FnMut(bool, usize, &ViewerState<T>) + 'static,
    ) -> Self {
        self.on_visible_change = Some(Box::new(handler));
        self
    }

    /// Set the state-changed listener used by the presentation surface (builder pattern)
    pub fn on_state_change(mut self, handler: impl FnMut(&ViewerState<T>) + 'static) -> Self {
        self.on_state_change = Some(Box::new(handler));
        self
    }

    /// Supply (or withdraw with `None`) the caller-owned visibility.
    ///
    /// While a value is supplied the coordinator is controlled and never
    /// writes its own visible flag.
    pub fn set_controlled_visible(&mut self, visible: Option<bool>) {
        self.model.controlled_visible = visible;
    }

    pub fn set_default_index(&mut self, index: usize) {
        self.model.default_index = index;
    }

    pub fn set_scale_limits(&mut self, limits: ScaleLimits) {
        self.limits = limits;
    }

    /// Apply a message and run its side effects.
    ///
    /// Listeners run only after the whole update has been applied.
    /// Returns whether the presentation surface needs to re-render.
    pub fn dispatch(&mut self, msg: impl Into<Msg<T>>) -> bool {
        let Some(cmd) = update(&mut self.model, msg.into()) else {
            return false;
        };
        let needs_render = cmd.needs_render();
        self.run(cmd);
        needs_render
    }

    fn run(&mut self, cmd: Cmd<T>) {
        for cmd in cmd.into_vec() {
            match cmd {
                Cmd::None | Cmd::Batch(_) => {}
                Cmd::StateChanged => {
                    if let Some(handler) = self.on_state_change.as_mut() {
                        handler(&self.model.state);
                    }
                }
                Cmd::IndexChanged { index, prior } => {
                    trace!(target: "viewer", index, "notify index change");
                    if let Some(handler) = self.on_index_change.as_mut() {
                        handler(index, &prior);
                    }
                }
                Cmd::VisibleChanged {
                    visible,
                    index,
                    state,
                } => {
                    trace!(target: "viewer", visible, index, "notify visible change");
                    if let Some(handler) = self.on_visible_change.as_mut() {
                        handler(visible, index, &state);
                    }
                }
            }
        }
    }

    // === Registry ===

    /// Fresh key, strictly greater than any key handed out or registered so far
    pub fn next_id(&mut self) -> ImageKey {
        self.model.next_key()
    }

    /// Register a payload under a freshly minted key
    pub fn register(&mut self, payload: T) -> ImageKey {
        let key = self.next_id();
        self.update(ImageDescriptor::new(key, payload));
        key
    }

    /// Insert a descriptor, or replace the one with the same key in place
    pub fn update(&mut self, descriptor: ImageDescriptor<T>) {
        self.dispatch(RegistryMsg::Update(descriptor));
    }

    /// Drop the descriptor with `key`; absent keys are ignored
    pub fn remove(&mut self, key: ImageKey) {
        self.dispatch(RegistryMsg::Remove(key));
    }

    // === Viewer ===

    /// Open on the image registered under `key`.
    ///
    /// An unknown key leaves the index untouched but is otherwise handled
    /// like a normal show.
    pub fn show(&mut self, key: ImageKey) {
        self.dispatch(ViewerMsg::Show(key));
    }

    pub fn close(&mut self) {
        self.dispatch(ViewerMsg::Close);
    }

    /// Navigate to `index` without bounds checking
    pub fn change_index(&mut self, index: usize) {
        self.dispatch(ViewerMsg::ChangeIndex(index));
    }

    /// Imperative show/close for callers outside the registration flow
    pub fn handle(&mut self) -> ViewerHandle<'_, T> {
        ViewerHandle::new(self)
    }

    // === Presentation surface callbacks ===

    /// The user navigated on the presentation surface
    pub fn index_changed(&mut self, index: usize) {
        self.change_index(index);
    }

    /// The user dismissed the presentation surface
    pub fn close_requested(&mut self) {
        self.close();
    }
}

impl<T> Coordinator<T> {
    pub fn state(&self) -> &ViewerState<T> {
        &self.model.state
    }

    pub fn images(&self) -> &[ImageDescriptor<T>] {
        &self.model.state.images
    }

    pub fn index(&self) -> usize {
        self.model.state.index
    }

    /// Visibility as presented: the controlled value when supplied
    pub fn is_visible(&self) -> bool {
        self.model.effective_visible()
    }

    pub fn control_mode(&self) -> ControlMode {
        self.model.control_mode()
    }

    pub fn default_index(&self) -> usize {
        self.model.default_index
    }

    pub fn presentation(&self) -> PresentationProps<'_, T> {
        self.model.presentation()
    }

    pub fn scale_limits(&self) -> ScaleLimits {
        self.limits
    }

    /// Bound a live gesture scale with this viewer's limits
    pub fn normalize_scale(&self, scale: f64, hard_upper_bound: f64) -> f64 {
        self.limits.normalize(scale, hard_upper_bound)
    }
}
