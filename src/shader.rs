// shader.rs - compile and link GLSL programs through a ShaderDriver

use log::{debug, warn};
use std::ffi::CString;
use std::fs;
use std::path::Path;

use crate::driver::{ProgramHandle, ShaderDriver, ShaderHandle};
use crate::error::{Result, ShaderError};
use crate::stage::ShaderKind;

/// Compiles `source` as a shader of the given kind.
///
/// On failure the error carries the source text and the driver's compile log.
/// The failed shader object is left to the driver.
pub fn compile_shader<D: ShaderDriver>(
    driver: &D,
    source: &str,
    kind: ShaderKind,
) -> Result<ShaderHandle> {
    let c_source = CString::new(source.as_bytes())?;

    let shader = driver.create_shader(kind)?;
    driver.shader_source(shader, &c_source);
    driver.compile_shader(shader);

    if !driver.shader_compile_status(shader) {
        let log = driver.shader_info_log(shader);
        warn!("Compiling {} shader failed: {}", kind, log.trim_end());
        return Err(ShaderError::Compilation {
            kind,
            code: source.to_string(),
            log,
        });
    }

    debug!("Compiled {} shader into {}", kind, shader);
    Ok(shader)
}

/// Reads `path` as text and compiles it. Read failures are returned unchanged.
pub fn load_shader<D: ShaderDriver>(
    driver: &D,
    path: impl AsRef<Path>,
    kind: ShaderKind,
) -> Result<ShaderHandle> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)?;
    debug!("Read {} shader source from {}", kind, path.display());
    compile_shader(driver, &source, kind)
}

/// Links a vertex and a fragment shader into a program.
///
/// Both shaders are deleted once the link succeeds. On failure they are left
/// untouched and the error carries the driver's link log.
pub fn create_program<D: ShaderDriver>(
    driver: &D,
    vertex: ShaderHandle,
    fragment: ShaderHandle,
) -> Result<ProgramHandle> {
    link_program(driver, &[vertex, fragment])
}

/// Links any set of compiled shaders into a program, deleting them on success.
pub fn link_program<D: ShaderDriver>(driver: &D, shaders: &[ShaderHandle]) -> Result<ProgramHandle> {
    let program = driver.create_program()?;

    for &shader in shaders {
        driver.attach_shader(program, shader);
    }
    driver.link_program(program);

    if !driver.program_link_status(program) {
        let log = driver.program_info_log(program);
        warn!("Linking {} failed: {}", program, log.trim_end());
        return Err(ShaderError::Linking(log));
    }

    for &shader in shaders {
        driver.delete_shader(shader);
    }

    debug!("Linked {} from {} shader(s)", program, shaders.len());
    Ok(program)
}

/// Loads a vertex and a fragment shader file and links them.
pub fn load_program<D: ShaderDriver>(
    driver: &D,
    vertex_path: impl AsRef<Path>,
    fragment_path: impl AsRef<Path>,
) -> Result<ProgramHandle> {
    let vertex = load_shader(driver, vertex_path, ShaderKind::Vertex)?;
    let fragment = load_shader(driver, fragment_path, ShaderKind::Fragment)?;
    create_program(driver, vertex, fragment)
}

pub fn load_program_with_geometry<D: ShaderDriver>(
    driver: &D,
    vertex_path: impl AsRef<Path>,
    geometry_path: impl AsRef<Path>,
    fragment_path: impl AsRef<Path>,
) -> Result<ProgramHandle> {
    let vertex = load_shader(driver, vertex_path, ShaderKind::Vertex)?;
    let geometry = load_shader(driver, geometry_path, ShaderKind::Geometry)?;
    let fragment = load_shader(driver, fragment_path, ShaderKind::Fragment)?;
    link_program(driver, &[vertex, geometry, fragment])
}

/// Compiles vertex and fragment source strings and links them.
pub fn initialize_program<D: ShaderDriver>(
    driver: &D,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<ProgramHandle> {
    let vertex = compile_shader(driver, vertex_source, ShaderKind::Vertex)?;
    let fragment = compile_shader(driver, fragment_source, ShaderKind::Fragment)?;
    create_program(driver, vertex, fragment)
}

pub fn initialize_program_with_geometry<D: ShaderDriver>(
    driver: &D,
    vertex_source: &str,
    geometry_source: &str,
    fragment_source: &str,
) -> Result<ProgramHandle> {
    let vertex = compile_shader(driver, vertex_source, ShaderKind::Vertex)?;
    let geometry = compile_shader(driver, geometry_source, ShaderKind::Geometry)?;
    let fragment = compile_shader(driver, fragment_source, ShaderKind::Fragment)?;
    link_program(driver, &[vertex, geometry, fragment])
}
