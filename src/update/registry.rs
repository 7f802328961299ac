//! Registry update handlers
//!
//! Processes RegistryMsg messages from mounting and unmounting image wrappers.

use tracing::{debug, trace};

use crate::commands::Cmd;
use crate::messages::RegistryMsg;
use crate::model::ViewerModel;

pub fn update_registry<T>(model: &mut ViewerModel<T>, msg: RegistryMsg<T>) -> Option<Cmd<T>> {
    match msg {
        RegistryMsg::Update(descriptor) => {
            model.observe_key(descriptor.key);
            let key = descriptor.key;

            match model.state.position_of(key) {
                Some(position) => {
                    trace!(target: "registry", %key, position, "replace in place");
                    model.state.images[position] = descriptor;
                }
                None => {
                    model.state.images.push(descriptor);
                    debug!(
                        target: "registry",
                        %key,
                        count = model.state.images.len(),
                        "registered"
                    );
                }
            }
            Some(Cmd::StateChanged)
        }

        RegistryMsg::Remove(key) => {
            let before = model.state.images.len();
            model.state.images.retain(|image| image.key != key);
            if model.state.images.len() == before {
                trace!(target: "registry", %key, "remove: not registered");
            } else {
                debug!(
                    target: "registry",
                    %key,
                    count = model.state.images.len(),
                    "removed"
                );
            }

            model.state.clamp_index();
            debug_assert!(
                model.state.is_empty() || model.state.index < model.state.len(),
                "index {} out of range after removing {}",
                model.state.index,
                key
            );
            Some(Cmd::StateChanged)
        }
    }
}
