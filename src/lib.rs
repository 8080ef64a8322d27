pub mod cli;
pub mod config;
pub mod date;
pub mod host;
pub mod output;
pub mod vars;

pub use config::Config;
pub use date::{BuildDate, DateError};
pub use host::HostFacts;
pub use vars::BuildVars;
