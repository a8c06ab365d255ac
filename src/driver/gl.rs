use ::gl::types::*;
use std::ffi::{c_void, CStr};
use std::ptr;

use super::{trim_info_log, ProgramHandle, ShaderDriver, ShaderHandle};
use crate::error::{Result, ShaderError};
use crate::stage::ShaderKind;

/// Driver backed by the process-wide `gl` function pointers.
pub struct GlDriver {
    _private: (),
}

impl GlDriver {
    /// Loads the GL function pointers through `loader` and returns a driver
    /// that calls them.
    ///
    /// # Safety
    ///
    /// The context the pointers were resolved from must be current on the
    /// calling thread whenever the returned driver is used.
    pub unsafe fn load_with<F>(loader: F) -> Self
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        ::gl::load_with(loader);
        Self { _private: () }
    }

    fn read_info_log(len: GLint, fetch: impl FnOnce(GLsizei, *mut GLsizei, *mut GLchar)) -> String {
        if len <= 0 {
            return String::new();
        }

        let mut buffer = vec![0u8; len as usize];
        let mut written: GLsizei = 0;
        fetch(len, &mut written as *mut GLsizei, buffer.as_mut_ptr() as *mut GLchar);
        buffer.truncate(written.clamp(0, len) as usize);
        trim_info_log(buffer)
    }
}

impl ShaderDriver for GlDriver {
    fn create_shader(&self, kind: ShaderKind) -> Result<ShaderHandle> {
        let shader = unsafe { ::gl::CreateShader(kind.gl_enum()) };
        ShaderHandle::new(shader).ok_or_else(|| {
            ShaderError::ObjectCreation(format!("glCreateShader returned 0 for {} shader", kind))
        })
    }

    fn shader_source(&self, shader: ShaderHandle, source: &CStr) {
        unsafe {
            ::gl::ShaderSource(shader.id(), 1, &source.as_ptr(), ptr::null());
        }
    }

    fn compile_shader(&self, shader: ShaderHandle) {
        unsafe {
            ::gl::CompileShader(shader.id());
        }
    }

    fn shader_compile_status(&self, shader: ShaderHandle) -> bool {
        let mut success = GLint::from(::gl::FALSE);
        unsafe {
            ::gl::GetShaderiv(shader.id(), ::gl::COMPILE_STATUS, &mut success);
        }
        success != GLint::from(::gl::FALSE)
    }

    fn shader_info_log(&self, shader: ShaderHandle) -> String {
        let mut len = 0;
        unsafe {
            ::gl::GetShaderiv(shader.id(), ::gl::INFO_LOG_LENGTH, &mut len);
        }

        Self::read_info_log(len, |max, written, buffer| unsafe {
            ::gl::GetShaderInfoLog(shader.id(), max, written, buffer);
        })
    }

    fn delete_shader(&self, shader: ShaderHandle) {
        unsafe {
            ::gl::DeleteShader(shader.id());
        }
    }

    fn create_program(&self) -> Result<ProgramHandle> {
        let program = unsafe { ::gl::CreateProgram() };
        ProgramHandle::new(program)
            .ok_or_else(|| ShaderError::ObjectCreation("glCreateProgram returned 0".to_string()))
    }

    fn attach_shader(&self, program: ProgramHandle, shader: ShaderHandle) {
        unsafe {
            ::gl::AttachShader(program.id(), shader.id());
        }
    }

    fn link_program(&self, program: ProgramHandle) {
        unsafe {
            ::gl::LinkProgram(program.id());
        }
    }

    fn program_link_status(&self, program: ProgramHandle) -> bool {
        let mut success = GLint::from(::gl::FALSE);
        unsafe {
            ::gl::GetProgramiv(program.id(), ::gl::LINK_STATUS, &mut success);
        }
        success != GLint::from(::gl::FALSE)
    }

    fn program_info_log(&self, program: ProgramHandle) -> String {
        let mut len = 0;
        unsafe {
            ::gl::GetProgramiv(program.id(), ::gl::INFO_LOG_LENGTH, &mut len);
        }

        Self::read_info_log(len, |max, written, buffer| unsafe {
            ::gl::GetProgramInfoLog(program.id(), max, written, buffer);
        })
    }

    fn delete_program(&self, program: ProgramHandle) {
        unsafe {
            ::gl::DeleteProgram(program.id());
        }
    }
}
