//! Runtime: applies updates and delivers notifications

mod coordinator;
mod handle;

pub use coordinator::{
    Coordinator, IndexChangeHandler, StateChangeHandler, VisibleChangeHandler,
};
pub use handle::ViewerHandle;
