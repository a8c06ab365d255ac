use std::ffi::NulError;
use thiserror::Error;

use crate::stage::ShaderKind;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("Failed to compile {kind} shader {code:?}: {log}")]
    Compilation {
        kind: ShaderKind,
        code: String,
        log: String,
    },
    #[error("Failed to link program: {0}")]
    Linking(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Null byte error: {0}")]
    Nul(#[from] NulError),
    #[error("Driver could not create object: {0}")]
    ObjectCreation(String),
}

impl ShaderError {
    /// Driver-provided info log, if this failure came from a compile or link step.
    pub fn info_log(&self) -> Option<&str> {
        match self {
            ShaderError::Compilation { log, .. } | ShaderError::Linking(log) => Some(log),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShaderError>;
