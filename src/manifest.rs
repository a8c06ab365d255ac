use log::{error, info};

use crate::config::{Manifest, ProgramEntry};
use crate::driver::{ProgramHandle, ShaderDriver};
use crate::error::Result;
use crate::shader::{load_program, load_program_with_geometry};

/// Outcome of building one manifest entry.
#[derive(Debug)]
pub struct ProgramReport {
    pub name: String,
    pub result: Result<ProgramHandle>,
}

impl ProgramReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

pub fn build_program<D: ShaderDriver>(driver: &D, entry: &ProgramEntry) -> Result<ProgramHandle> {
    match &entry.geometry {
        Some(geometry) => {
            load_program_with_geometry(driver, &entry.vertex, geometry, &entry.fragment)
        }
        None => load_program(driver, &entry.vertex, &entry.fragment),
    }
}

/// Builds every program in the manifest, in order. A failed entry does not
/// stop the ones after it.
pub fn build_manifest<D: ShaderDriver>(driver: &D, manifest: &Manifest) -> Vec<ProgramReport> {
    manifest
        .programs
        .iter()
        .map(|entry| {
            let result = build_program(driver, entry);
            match &result {
                Ok(program) => info!("{}: linked {}", entry.name, program),
                Err(e) => error!("{}: {}", entry.name, e),
            }
            ProgramReport {
                name: entry.name.clone(),
                result,
            }
        })
        .collect()
}
