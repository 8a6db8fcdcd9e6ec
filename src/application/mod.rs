mod application;
pub mod data;
mod logging;
mod runtime_config;

pub use application::{Application, ApplicationError};
pub use logging::diagnostics_subscriber;
pub use runtime_config::RuntimeConfig;
