use gl::types::GLenum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage a shader object is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShaderKind {
    Vertex,
    Fragment,
    Geometry,
}

impl ShaderKind {
    pub fn gl_enum(self) -> GLenum {
        match self {
            ShaderKind::Vertex => gl::VERTEX_SHADER,
            ShaderKind::Fragment => gl::FRAGMENT_SHADER,
            ShaderKind::Geometry => gl::GEOMETRY_SHADER,
        }
    }

    pub fn from_gl_enum(value: GLenum) -> Option<Self> {
        match value {
            gl::VERTEX_SHADER => Some(ShaderKind::Vertex),
            gl::FRAGMENT_SHADER => Some(ShaderKind::Fragment),
            gl::GEOMETRY_SHADER => Some(ShaderKind::Geometry),
            _ => None,
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShaderKind::Vertex => "vertex",
            ShaderKind::Fragment => "fragment",
            ShaderKind::Geometry => "geometry",
        };
        f.write_str(name)
    }
}
