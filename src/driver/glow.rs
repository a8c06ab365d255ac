use ::glow::{HasContext, NativeProgram, NativeShader};
use std::ffi::CStr;

use super::{ProgramHandle, ShaderDriver, ShaderHandle};
use crate::error::{Result, ShaderError};
use crate::stage::ShaderKind;

fn native_shader(shader: ShaderHandle) -> NativeShader {
    NativeShader(shader.0)
}

fn native_program(program: ProgramHandle) -> NativeProgram {
    NativeProgram(program.0)
}

// A `glow::Context` is only constructed through its unsafe loader, which
// already requires the context to be current while it is used.
impl ShaderDriver for ::glow::Context {
    fn create_shader(&self, kind: ShaderKind) -> Result<ShaderHandle> {
        let shader = unsafe { HasContext::create_shader(self, kind.gl_enum()) }
            .map_err(ShaderError::ObjectCreation)?;
        Ok(ShaderHandle(shader.0))
    }

    fn shader_source(&self, shader: ShaderHandle, source: &CStr) {
        unsafe {
            HasContext::shader_source(self, native_shader(shader), &source.to_string_lossy());
        }
    }

    fn compile_shader(&self, shader: ShaderHandle) {
        unsafe { HasContext::compile_shader(self, native_shader(shader)) }
    }

    fn shader_compile_status(&self, shader: ShaderHandle) -> bool {
        unsafe { self.get_shader_compile_status(native_shader(shader)) }
    }

    fn shader_info_log(&self, shader: ShaderHandle) -> String {
        let log = unsafe { self.get_shader_info_log(native_shader(shader)) };
        log.trim_end_matches('\0').to_string()
    }

    fn delete_shader(&self, shader: ShaderHandle) {
        unsafe { HasContext::delete_shader(self, native_shader(shader)) }
    }

    fn create_program(&self) -> Result<ProgramHandle> {
        let program =
            unsafe { HasContext::create_program(self) }.map_err(ShaderError::ObjectCreation)?;
        Ok(ProgramHandle(program.0))
    }

    fn attach_shader(&self, program: ProgramHandle, shader: ShaderHandle) {
        unsafe { HasContext::attach_shader(self, native_program(program), native_shader(shader)) }
    }

    fn link_program(&self, program: ProgramHandle) {
        unsafe { HasContext::link_program(self, native_program(program)) }
    }

    fn program_link_status(&self, program: ProgramHandle) -> bool {
        unsafe { self.get_program_link_status(native_program(program)) }
    }

    fn program_info_log(&self, program: ProgramHandle) -> String {
        let log = unsafe { self.get_program_info_log(native_program(program)) };
        log.trim_end_matches('\0').to_string()
    }

    fn delete_program(&self, program: ProgramHandle) {
        unsafe { HasContext::delete_program(self, native_program(program)) }
    }
}
