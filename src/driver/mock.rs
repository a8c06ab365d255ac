use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::CStr;

use super::{ProgramHandle, ShaderDriver, ShaderHandle};
use crate::error::{Result, ShaderError};
use crate::stage::ShaderKind;

/// Source containing this marker fails to compile.
pub const BROKEN_MARKER: &str = "@broken";
/// A fragment shader reading this input links against no vertex shader output.
pub const UNMATCHED_VARYING: &str = "in vec3 v_unmatched;";

#[derive(Debug, Clone)]
pub struct MockShader {
    pub kind: ShaderKind,
    pub source: String,
    pub compiled: bool,
    pub deleted: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MockProgram {
    pub attached: Vec<ShaderHandle>,
    pub linked: bool,
    pub deleted: bool,
}

#[derive(Debug, Default)]
struct MockState {
    next_id: u32,
    shaders: HashMap<ShaderHandle, MockShader>,
    programs: HashMap<ProgramHandle, MockProgram>,
    refuse_objects: bool,
}

impl MockState {
    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory stand-in for a GL context that records every call.
#[derive(Debug, Default)]
pub struct MockDriver {
    state: RefCell<MockState>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every create call fails as if the context were lost.
    pub fn refusing_objects() -> Self {
        let driver = Self::default();
        driver.state.borrow_mut().refuse_objects = true;
        driver
    }

    pub fn shader(&self, handle: ShaderHandle) -> MockShader {
        self.state.borrow().shaders[&handle].clone()
    }

    pub fn program(&self, handle: ProgramHandle) -> MockProgram {
        self.state.borrow().programs[&handle].clone()
    }

    pub fn shader_count(&self) -> usize {
        self.state.borrow().shaders.len()
    }

    pub fn live_shaders(&self) -> Vec<ShaderHandle> {
        let state = self.state.borrow();
        let mut live: Vec<_> = state
            .shaders
            .iter()
            .filter(|(_, shader)| !shader.deleted)
            .map(|(handle, _)| *handle)
            .collect();
        live.sort_by_key(|handle| handle.id());
        live
    }
}

impl ShaderDriver for MockDriver {
    fn create_shader(&self, kind: ShaderKind) -> Result<ShaderHandle> {
        let mut state = self.state.borrow_mut();
        if state.refuse_objects {
            return Err(ShaderError::ObjectCreation("context lost".to_string()));
        }

        let id = state.next_id();
        let handle = ShaderHandle::new(id).expect("mock ids start at 1");
        state.shaders.insert(
            handle,
            MockShader {
                kind,
                source: String::new(),
                compiled: false,
                deleted: false,
            },
        );
        Ok(handle)
    }

    fn shader_source(&self, shader: ShaderHandle, source: &CStr) {
        let mut state = self.state.borrow_mut();
        if let Some(entry) = state.shaders.get_mut(&shader) {
            entry.source = source.to_string_lossy().into_owned();
        }
    }

    fn compile_shader(&self, shader: ShaderHandle) {
        let mut state = self.state.borrow_mut();
        if let Some(entry) = state.shaders.get_mut(&shader) {
            entry.compiled =
                entry.source.trim_start().starts_with("#version") && !entry.source.contains(BROKEN_MARKER);
        }
    }

    fn shader_compile_status(&self, shader: ShaderHandle) -> bool {
        self.state
            .borrow()
            .shaders
            .get(&shader)
            .map_or(false, |entry| entry.compiled)
    }

    fn shader_info_log(&self, shader: ShaderHandle) -> String {
        let state = self.state.borrow();
        match state.shaders.get(&shader) {
            Some(entry) if entry.compiled => String::new(),
            Some(entry) if !entry.source.trim_start().starts_with("#version") => {
                "0:1(1): error: no #version directive\n".to_string()
            }
            Some(_) => "0:2(5): error: syntax error, unexpected '@'\n".to_string(),
            None => String::new(),
        }
    }

    fn delete_shader(&self, shader: ShaderHandle) {
        if let Some(entry) = self.state.borrow_mut().shaders.get_mut(&shader) {
            entry.deleted = true;
        }
    }

    fn create_program(&self) -> Result<ProgramHandle> {
        let mut state = self.state.borrow_mut();
        if state.refuse_objects {
            return Err(ShaderError::ObjectCreation("context lost".to_string()));
        }

        let id = state.next_id();
        let handle = ProgramHandle::new(id).expect("mock ids start at 1");
        state.programs.insert(handle, MockProgram::default());
        Ok(handle)
    }

    fn attach_shader(&self, program: ProgramHandle, shader: ShaderHandle) {
        if let Some(entry) = self.state.borrow_mut().programs.get_mut(&program) {
            entry.attached.push(shader);
        }
    }

    fn link_program(&self, program: ProgramHandle) {
        let mut state = self.state.borrow_mut();
        let attached = match state.programs.get(&program) {
            Some(entry) => entry.attached.clone(),
            None => return,
        };

        let shaders: Vec<&MockShader> = attached.iter().filter_map(|h| state.shaders.get(h)).collect();
        let all_compiled = shaders.iter().all(|s| s.compiled);
        let has_vertex = shaders.iter().any(|s| s.kind == ShaderKind::Vertex);
        let has_fragment = shaders.iter().any(|s| s.kind == ShaderKind::Fragment);
        let unmatched = shaders
            .iter()
            .any(|s| s.kind == ShaderKind::Fragment && s.source.contains(UNMATCHED_VARYING));
        let linked = all_compiled && has_vertex && has_fragment && !unmatched;

        if let Some(entry) = state.programs.get_mut(&program) {
            entry.linked = linked;
        }
    }

    fn program_link_status(&self, program: ProgramHandle) -> bool {
        self.state
            .borrow()
            .programs
            .get(&program)
            .map_or(false, |entry| entry.linked)
    }

    fn program_info_log(&self, program: ProgramHandle) -> String {
        match self.state.borrow().programs.get(&program) {
            Some(entry) if !entry.linked => {
                "error: fragment shader input `v_unmatched` has no matching vertex output\n".to_string()
            }
            _ => String::new(),
        }
    }

    fn delete_program(&self, program: ProgramHandle) {
        if let Some(entry) = self.state.borrow_mut().programs.get_mut(&program) {
            entry.deleted = true;
        }
    }
}
