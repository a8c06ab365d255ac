//! The driver-facing seam: every shader and program entry point this crate
//! calls goes through [`ShaderDriver`].
//!
//! All methods assume a graphics context is current on the calling thread.

pub mod gl;
#[cfg(not(target_arch = "wasm32"))]
pub mod glow;
#[cfg(test)]
pub(crate) mod mock;

use std::ffi::CStr;
use std::fmt;
use std::num::NonZeroU32;

use crate::error::Result;
use crate::stage::ShaderKind;

/// Driver-issued shader object name. Zero is never a valid shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(NonZeroU32);

/// Driver-issued program object name. Zero is never a valid program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(NonZeroU32);

impl ShaderHandle {
    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self)
    }

    pub fn id(self) -> u32 {
        self.0.get()
    }
}

impl ProgramHandle {
    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self)
    }

    pub fn id(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for ShaderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shader #{}", self.0)
    }
}

impl fmt::Display for ProgramHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "program #{}", self.0)
    }
}

pub trait ShaderDriver {
    fn create_shader(&self, kind: ShaderKind) -> Result<ShaderHandle>;
    fn shader_source(&self, shader: ShaderHandle, source: &CStr);
    fn compile_shader(&self, shader: ShaderHandle);
    fn shader_compile_status(&self, shader: ShaderHandle) -> bool;
    fn shader_info_log(&self, shader: ShaderHandle) -> String;
    fn delete_shader(&self, shader: ShaderHandle);

    fn create_program(&self) -> Result<ProgramHandle>;
    fn attach_shader(&self, program: ProgramHandle, shader: ShaderHandle);
    fn link_program(&self, program: ProgramHandle);
    fn program_link_status(&self, program: ProgramHandle) -> bool;
    fn program_info_log(&self, program: ProgramHandle) -> String;
    fn delete_program(&self, program: ProgramHandle);
}

/// Turns a raw info-log buffer into text, dropping the terminating NUL and
/// any padding the driver left behind.
pub(crate) fn trim_info_log(mut buffer: Vec<u8>) -> String {
    if let Some(end) = buffer.iter().position(|&b| b == 0) {
        buffer.truncate(end);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}
