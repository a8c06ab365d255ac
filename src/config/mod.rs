pub mod context;
pub mod programs;

pub use context::{Backend, ContextConfig, LogLevel, Profile};
pub use programs::{ConfigError, Manifest, ProgramEntry};
