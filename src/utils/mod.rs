mod config;
mod error;
mod pacer;

pub use config::Config;
pub(crate) use error::is_probability;
pub use error::{Error, Result};
pub use pacer::Pacer;
