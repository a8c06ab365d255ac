use anyhow::{anyhow, bail, Context, Result};
use glutin::{
    config::ConfigTemplateBuilder,
    context::{ContextApi, ContextAttributesBuilder, GlProfile, Version},
    display::{GetGlDisplay, GlDisplay},
    prelude::*,
};
use glutin_winit::{DisplayBuilder, GlWindow};
use log::info;
use raw_window_handle::HasRawWindowHandle;
use simple_logger::SimpleLogger;
use std::{ffi::CString, path::PathBuf, ptr};
use winit::{dpi::LogicalSize, event_loop::EventLoopBuilder, window::WindowBuilder};

use glshader::{
    build_manifest,
    config::{Backend, Profile},
    GlDriver, Manifest, ProgramReport,
};

const DEFAULT_MANIFEST: &str = "shaders.toml";

fn summarize(reports: &[ProgramReport]) -> usize {
    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    info!(
        "{} of {} program(s) linked",
        reports.len() - failed,
        reports.len()
    );
    failed
}

fn main() -> Result<()> {
    let manifest_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST));
    let manifest = Manifest::from_file(&manifest_path)?;

    SimpleLogger::new()
        .with_level(manifest.context.log_level.into())
        .init()?;
    info!(
        "Checking {} program(s) from {}",
        manifest.programs.len(),
        manifest_path.display()
    );

    let event_loop = EventLoopBuilder::new().build()?;
    // Never shown; only its GL context is used.
    let window_builder = WindowBuilder::new()
        .with_title("glshader-check")
        .with_visible(false)
        .with_inner_size(LogicalSize::new(64, 64));

    let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
    let (window, gl_config) = display_builder
        .build(&event_loop, ConfigTemplateBuilder::new(), |configs| {
            configs
                .reduce(|accum, config| {
                    if config.num_samples() < accum.num_samples() {
                        config
                    } else {
                        accum
                    }
                })
                .expect("glutin offers at least one config")
        })
        .map_err(|e| anyhow!("Failed to create GL display: {e}"))?;
    let window = window.ok_or_else(|| anyhow!("Display builder did not create a window"))?;

    let context = &manifest.context;
    let profile = match context.profile {
        Profile::Core => GlProfile::Core,
        Profile::Compatibility => GlProfile::Compatibility,
    };
    let context_attributes = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(
            context.major,
            context.minor,
        ))))
        .with_profile(profile)
        .build(Some(window.raw_window_handle()));

    let gl_display = gl_config.display();
    let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
        .with_context(|| {
            format!(
                "Failed to create OpenGL {}.{} context",
                context.major, context.minor
            )
        })?;

    let attrs = window.build_surface_attributes(<_>::default());
    let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &attrs) }
        .context("Failed to create GL surface")?;
    let _gl_context = not_current
        .make_current(&gl_surface)
        .context("Failed to make context current")?;

    let load = |symbol: &str| match CString::new(symbol) {
        Ok(symbol) => gl_display.get_proc_address(symbol.as_c_str()),
        Err(_) => ptr::null(),
    };

    let failed = match context.backend {
        Backend::Gl => {
            let driver = unsafe { GlDriver::load_with(load) };
            summarize(&build_manifest(&driver, &manifest))
        }
        Backend::Glow => {
            let driver = unsafe { glow::Context::from_loader_function(load) };
            summarize(&build_manifest(&driver, &manifest))
        }
    };

    if failed > 0 {
        bail!("{} program(s) failed to build", failed);
    }
    Ok(())
}
