pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod session;

pub use config::{GenerationConfig, Settings};
pub use error::{Error, Result};
pub use session::{Phase, Session};
