pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod process;
pub mod stages;

pub use config::Config;
pub use error::EtlError;
