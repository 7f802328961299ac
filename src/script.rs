//! Scripted replay of viewer operations
//!
//! A script is a YAML list of operations applied to a fresh coordinator.
//! Each step produces a [`StepReport`] with the notifications it fired and
//! the resulting state, which the `lightbox` binary prints as JSON.
//!
//! ```yaml
//! controlled_visible: null
//! steps:
//!   - op: register
//!     src: a.jpg
//!   - op: show
//!     key: 1
//!   - op: zoom
//!     scale: 7.5
//! ```

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::ViewerConfig;
use crate::image::{clamp_pan, pan_edge};
use crate::model::{ImageDescriptor, ImageKey, ImageSource};
use crate::runtime::Coordinator;

/// Root structure of a script file
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    /// Initial controlled visibility; absent means uncontrolled
    #[serde(default)]
    pub controlled_visible: Option<bool>,
    pub steps: Vec<Step>,
}

/// A single operation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Register an image, minting a key unless one is given
    Register {
        #[serde(default)]
        key: Option<u64>,
        src: String,
        #[serde(default)]
        alt: Option<String>,
    },
    Remove {
        key: u64,
    },
    /// Keyed show (trigger tap)
    Show {
        key: u64,
    },
    /// Imperative show by position
    Open {
        #[serde(default)]
        index: Option<usize>,
    },
    Close,
    ChangeIndex {
        index: usize,
    },
    /// Change the controlled visibility between steps
    SetControlled {
        #[serde(default)]
        visible: Option<bool>,
    },
    /// Normalize a live gesture scale
    Zoom {
        scale: f64,
        #[serde(default)]
        hard_upper_bound: f64,
    },
    /// Clamp a pan offset along one axis
    Pan {
        offset: f64,
        viewport: f64,
        content: f64,
        #[serde(default)]
        overshoot: f64,
    },
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Register { .. } => "register",
            Step::Remove { .. } => "remove",
            Step::Show { .. } => "show",
            Step::Open { .. } => "open",
            Step::Close => "close",
            Step::ChangeIndex { .. } => "change_index",
            Step::SetControlled { .. } => "set_controlled",
            Step::Zoom { .. } => "zoom",
            Step::Pan { .. } => "pan",
        }
    }
}

/// A listener call observed during a step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notification {
    IndexChange { index: usize, prior_index: usize },
    VisibleChange {
        visible: bool,
        index: usize,
        snapshot_visible: bool,
    },
    StateChange { count: usize },
}

/// Outcome of one step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub op: &'static str,
    pub notifications: Vec<Notification>,
    pub visible: bool,
    pub controlled: bool,
    pub index: usize,
    pub keys: Vec<ImageKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Errors from loading a script
#[derive(Debug)]
pub enum ScriptError {
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptError::IoError(e) => write!(f, "IO error: {}", e),
            ScriptError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Load a script from a YAML file
pub fn load_script_file(path: &Path) -> Result<Script, ScriptError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ScriptError::IoError(e.to_string()))?;
    parse_script(&content)
}

/// Parse a script from a YAML string
pub fn parse_script(yaml: &str) -> Result<Script, ScriptError> {
    serde_yaml::from_str(yaml).map_err(|e| ScriptError::ParseError(e.to_string()))
}

/// Run every step against a fresh coordinator built from `config`
pub fn run_script(script: &Script, config: &ViewerConfig) -> Vec<StepReport> {
    let log: Rc<RefCell<Vec<Notification>>> = Rc::default();

    let index_log = Rc::clone(&log);
    let visible_log = Rc::clone(&log);
    let state_log = Rc::clone(&log);
    let mut coordinator = Coordinator::<ImageSource>::from_config(config)
        .on_index_change(move |index, prior| {
            index_log.borrow_mut().push(Notification::IndexChange {
                index,
                prior_index: prior.index,
            });
        })
        .on_visible_change(move |visible, index, snapshot| {
            visible_log.borrow_mut().push(Notification::VisibleChange {
                visible,
                index,
                snapshot_visible: snapshot.visible,
            });
        })
        .on_state_change(move |state| {
            state_log
                .borrow_mut()
                .push(Notification::StateChange { count: state.len() });
        });
    coordinator.set_controlled_visible(script.controlled_visible);

    script
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let value = apply_step(&mut coordinator, step);
            let notifications = std::mem::take(&mut *log.borrow_mut());
            tracing::debug!(
                target: "script",
                step = i,
                op = step.name(),
                notifications = notifications.len(),
                "applied"
            );
            StepReport {
                step: i,
                op: step.name(),
                notifications,
                visible: coordinator.is_visible(),
                controlled: coordinator.control_mode().is_controlled(),
                index: coordinator.index(),
                keys: coordinator.state().keys(),
                value,
            }
        })
        .collect()
}

fn apply_step(coordinator: &mut Coordinator<ImageSource>, step: &Step) -> Option<f64> {
    match step {
        Step::Register { key, src, alt } => {
            let payload = ImageSource {
                src: src.clone(),
                alt: alt.clone(),
            };
            match key {
                Some(key) => coordinator.update(ImageDescriptor::new(ImageKey(*key), payload)),
                None => {
                    coordinator.register(payload);
                }
            }
            None
        }
        Step::Remove { key } => {
            coordinator.remove(ImageKey(*key));
            None
        }
        Step::Show { key } => {
            coordinator.show(ImageKey(*key));
            None
        }
        Step::Open { index } => {
            coordinator.handle().show(*index);
            None
        }
        Step::Close => {
            coordinator.handle().close();
            None
        }
        Step::ChangeIndex { index } => {
            coordinator.index_changed(*index);
            None
        }
        Step::SetControlled { visible } => {
            coordinator.set_controlled_visible(*visible);
            None
        }
        Step::Zoom {
            scale,
            hard_upper_bound,
        } => Some(coordinator.normalize_scale(*scale, *hard_upper_bound)),
        Step::Pan {
            offset,
            viewport,
            content,
            overshoot,
        } => Some(clamp_pan(*offset, pan_edge(*viewport, *content), *overshoot)),
    }
}
