pub mod config;
pub mod driver;
pub mod error;
pub mod manifest;
pub mod shader;
pub mod stage;

// Re-export commonly used types
pub use config::{ConfigError, ContextConfig, Manifest, ProgramEntry};
pub use driver::gl::GlDriver;
pub use driver::{ProgramHandle, ShaderDriver, ShaderHandle};
pub use error::{Result, ShaderError};
pub use manifest::{build_manifest, ProgramReport};
pub use shader::{
    compile_shader, create_program, initialize_program, initialize_program_with_geometry,
    link_program, load_program, load_program_with_geometry, load_shader,
};
pub use stage::ShaderKind;
