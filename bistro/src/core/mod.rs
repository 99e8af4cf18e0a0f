//! Core infrastructure: configuration and the session error type

pub mod config;
pub mod error;

pub use config::{Config, DEFAULT_MAX_ORDER_LINES};
pub use error::{FlowError, FlowResult};
