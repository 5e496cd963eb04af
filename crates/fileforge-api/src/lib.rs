//! HTTP front-end for the fileforge conversion service.
//!
//! Exposed as a library so integration tests can build the full router
//! in-process; the `fileforge-api` binary is a thin wrapper around
//! [`setup::initialize_app`] and [`setup::server::start_server`].

pub mod error;
pub mod handlers;
pub mod multipart;
pub mod response;
pub mod setup;
pub mod state;
pub mod telemetry;
