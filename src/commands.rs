//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! For the viewer these are listener notifications; the coordinator runs
//! them only once the update has been fully applied.

use crate::model::ViewerState;

/// Side effects produced by an update
#[derive(Debug, Clone, Default)]
pub enum Cmd<T> {
    /// No command - do nothing
    #[default]
    None,
    /// The viewer state changed and the presentation surface should re-render
    StateChanged,
    /// Report navigation to `index`, with the state as it was before
    IndexChanged { index: usize, prior: ViewerState<T> },
    /// Report a show/close request with the resolved index and a state snapshot
    VisibleChanged {
        visible: bool,
        index: usize,
        state: ViewerState<T>,
    },
    /// Execute multiple commands, in order
    Batch(Vec<Cmd<T>>),
}

impl<T> Cmd<T> {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd<T>>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Append `StateChanged` when `changed` is set
    pub fn with_state_change(self, changed: bool) -> Self {
        if changed {
            Cmd::Batch(vec![self, Cmd::StateChanged])
        } else {
            self
        }
    }

    /// Check if this command requires a re-render
    pub fn needs_render(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::StateChanged => true,
            // Notifications alone don't change what is on screen
            Cmd::IndexChanged { .. } | Cmd::VisibleChanged { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_render()),
        }
    }

    /// Flatten nested batches into a single ordered list
    pub fn into_vec(self) -> Vec<Cmd<T>> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_render() {
        assert!(!Cmd::<()>::None.needs_render());
        assert!(Cmd::<()>::StateChanged.needs_render());
        let notify = Cmd::<()>::VisibleChanged {
            visible: true,
            index: 0,
            state: ViewerState::default(),
        };
        assert!(!notify.needs_render());
        assert!(notify.with_state_change(true).needs_render());
    }

    #[test]
    fn test_into_vec_flattens_in_order() {
        let cmd = Cmd::<()>::batch(vec![
            Cmd::batch(vec![Cmd::StateChanged, Cmd::None]),
            Cmd::IndexChanged {
                index: 2,
                prior: ViewerState::default(),
            },
        ]);
        let flat = cmd.into_vec();
        assert_eq!(flat.len(), 2);
        assert!(matches!(flat[0], Cmd::StateChanged));
        assert!(matches!(flat[1], Cmd::IndexChanged { index: 2, .. }));
    }
}
