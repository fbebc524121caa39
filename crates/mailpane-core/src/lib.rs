//! # mailpane-core
//!
//! Presentation state for the Mailpane email client.
//!
//! This crate provides:
//! - The application state snapshot ([`AppState`]) and the email read model
//! - A pure state-transition function plus the owning [`Store`] with its
//!   in-order dispatch queue
//! - The selection/loading sequencing rules layered over the store
//!   ([`controller`])
//! - Cancellation handles for in-flight fetches ([`CancelToken`])
//!
//! The store performs no I/O. Network fetches live in the surrounding
//! application; their completions re-enter through [`Store::dispatch`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod action;
pub mod controller;
pub mod email;
mod error;
pub mod fetch;
pub mod state;
pub mod store;

pub use action::Action;
pub use email::{Email, EmailId, EmailPatch};
pub use error::{Error, Result};
pub use fetch::CancelToken;
pub use state::AppState;
pub use store::{Store, transition};
