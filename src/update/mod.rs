//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod registry;
mod viewer;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::ViewerModel;

#[cfg(debug_assertions)]
use crate::tracing::ViewerSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, enabled, span, Level};

pub use registry::update_registry;
pub use viewer::update_viewer;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update<T: Clone>(model: &mut ViewerModel<T>, msg: Msg<T>) -> Option<Cmd<T>> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner<T: Clone>(model: &mut ViewerModel<T>, msg: Msg<T>) -> Option<Cmd<T>> {
    match msg {
        Msg::Registry(m) => registry::update_registry(model, m),
        Msg::Viewer(m) => viewer::update_viewer(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after viewer state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced<T: Clone>(model: &mut ViewerModel<T>, msg: Msg<T>) -> Option<Cmd<T>> {
    let msg_name = msg.name();
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    // Snapshots copy every key; skip them unless the diff will be logged
    let before = enabled!(target: "state", Level::DEBUG)
        .then(|| ViewerSnapshot::from_model(model));
    debug!(target: "message", msg = %msg_name, mode = ?model.control_mode(), "processing");

    let result = update_inner(model, msg);

    if let Some(before) = before {
        let after = ViewerSnapshot::from_model(model);
        if let Some(diff) = before.diff(&after) {
            debug!(target: "state", %diff, "state changed");
        }
    }

    result
}
