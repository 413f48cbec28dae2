pub mod archive;
pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod sentiment;
pub mod server;
pub mod sink;
pub mod transform;

pub use error::{Error, Result};
