pub mod config;
pub mod record;
pub mod spec;

pub use config::*;
pub use record::*;
pub use spec::*;
