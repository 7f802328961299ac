//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use lightbox::model::{ImageDescriptor, ImageKey, ImageSource, ViewerState};
use lightbox::Coordinator;

/// A listener call recorded by [`recording_coordinator`]
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    IndexChange {
        index: usize,
        prior: ViewerState<ImageSource>,
    },
    VisibleChange {
        visible: bool,
        index: usize,
        state: ViewerState<ImageSource>,
    },
    StateChange {
        keys: Vec<ImageKey>,
        visible: bool,
        index: usize,
    },
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

/// Descriptor with a source derived from the key
pub fn descr(key: u64) -> ImageDescriptor<ImageSource> {
    ImageDescriptor::new(ImageKey(key), ImageSource::new(format!("{}.jpg", key)))
}

/// Coordinator whose listeners append every call to the returned log
pub fn recording_coordinator() -> (Coordinator<ImageSource>, EventLog) {
    let log: EventLog = Rc::default();

    let index_log = Rc::clone(&log);
    let visible_log = Rc::clone(&log);
    let state_log = Rc::clone(&log);
    let coordinator = Coordinator::new()
        .on_index_change(move |index, prior| {
            index_log.borrow_mut().push(Event::IndexChange {
                index,
                prior: prior.clone(),
            });
        })
        .on_visible_change(move |visible, index, state| {
            visible_log.borrow_mut().push(Event::VisibleChange {
                visible,
                index,
                state: state.clone(),
            });
        })
        .on_state_change(move |state| {
            state_log.borrow_mut().push(Event::StateChange {
                keys: state.keys(),
                visible: state.visible,
                index: state.index,
            });
        });

    (coordinator, log)
}

/// Recording coordinator with images keyed `keys`, in order; log cleared
pub fn coordinator_with(keys: &[u64]) -> (Coordinator<ImageSource>, EventLog) {
    let (mut coordinator, log) = recording_coordinator();
    for &key in keys {
        coordinator.update(descr(key));
    }
    log.borrow_mut().clear();
    (coordinator, log)
}

/// Drain the log
pub fn take(log: &EventLog) -> Vec<Event> {
    std::mem::take(&mut *log.borrow_mut())
}

/// Only the visibility notifications, as (visible, index)
pub fn visible_changes(events: &[Event]) -> Vec<(bool, usize)> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::VisibleChange { visible, index, .. } => Some((*visible, *index)),
            _ => None,
        })
        .collect()
}

pub fn keys(coordinator: &Coordinator<ImageSource>) -> Vec<u64> {
    coordinator.images().iter().map(|d| d.key.0).collect()
}
