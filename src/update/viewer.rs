//! Viewer update handlers
//!
//! Processes ViewerMsg messages to update visibility and the active index.
//! Visibility is only written in uncontrolled mode; every request is still
//! reported so a controlling owner sees each transition.

use tracing::{debug, warn};

use crate::commands::Cmd;
use crate::messages::ViewerMsg;
use crate::model::{ControlMode, ViewerModel};

pub fn update_viewer<T: Clone>(model: &mut ViewerModel<T>, msg: ViewerMsg) -> Option<Cmd<T>> {
    let mode = model.control_mode();

    match msg {
        ViewerMsg::Show(key) => {
            let target = model.state.position_of(key);
            if target.is_none() {
                // Index stays where it was; the show request is still honoured
                warn!(target: "viewer", %key, "show: key not registered, keeping index");
            }
            Some(show(model, mode, target))
        }

        ViewerMsg::ShowIndex(index) => {
            let target = index.unwrap_or(model.default_index);
            Some(show(model, mode, Some(target)))
        }

        ViewerMsg::Close => {
            let snapshot = model.state.clone();
            let changed = match mode {
                ControlMode::Uncontrolled => std::mem::replace(&mut model.state.visible, false),
                ControlMode::Controlled => false,
            };
            debug!(target: "viewer", ?mode, index = model.state.index, "close");

            Some(
                Cmd::VisibleChanged {
                    visible: false,
                    index: model.state.index,
                    state: snapshot,
                }
                .with_state_change(changed),
            )
        }

        ViewerMsg::ChangeIndex(index) => {
            // Bounds are the presentation surface's job; store as given
            let prior = model.state.clone();
            let changed = prior.index != index;
            model.state.index = index;
            debug!(target: "viewer", from = prior.index, to = index, "change index");

            Some(Cmd::IndexChanged { index, prior }.with_state_change(changed))
        }
    }
}

/// Shared path for keyed and imperative show.
///
/// The reported snapshot carries the new index but the visibility from
/// before this call.
fn show<T: Clone>(model: &mut ViewerModel<T>, mode: ControlMode, target: Option<usize>) -> Cmd<T> {
    let mut changed = false;
    if let Some(index) = target {
        changed |= model.state.index != index;
        model.state.index = index;
    }
    let snapshot = model.state.clone();

    if mode == ControlMode::Uncontrolled {
        changed |= !std::mem::replace(&mut model.state.visible, true);
    }
    debug!(target: "viewer", ?mode, index = model.state.index, "show");

    Cmd::VisibleChanged {
        visible: true,
        index: model.state.index,
        state: snapshot,
    }
    .with_state_change(changed)
}
