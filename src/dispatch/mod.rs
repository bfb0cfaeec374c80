//! Contact message dispatch
//!
//! `SubmissionDispatcher` validates a form snapshot and hands the payload to
//! a `NotificationTransport`. The production transport is the EmailJS REST
//! client.

mod client;
mod dispatcher;
mod error;
mod payload;
mod traits;

pub use client::EmailJsClient;
pub use dispatcher::SubmissionDispatcher;
pub use error::{DispatchError, DispatchResult, TransportError};
pub use payload::ContactPayload;
pub use traits::NotificationTransport;

#[cfg(test)]
pub use traits::MockNotificationTransport;
