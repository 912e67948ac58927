//! Message handling for the appointment form
//!
//! [`update`] is the only place `AppState` changes. Key presses are routed
//! by `keys` into the field, picker and submit handlers in `form`; anything
//! that needs I/O comes back to the caller as an [`UpdateAction`].

pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;
use medsched_core::AppointmentRequest;

pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Side effects the caller runs once `update` returns
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Hand a validated appointment to the sink
    DeliverAppointment { request: AppointmentRequest },
}

/// What `update` asks for next: another message, an action, or nothing
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Fed straight back into `update`
    pub message: Option<Message>,
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
