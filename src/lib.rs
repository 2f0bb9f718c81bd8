pub mod adapter;
pub mod args;
pub mod diagram;
pub mod geo_2d;
pub mod io;
mod crate_errors;
mod example;

use std::path::Path;

use log::{debug, info};

use diagram::RenderBackend;

pub use crate_errors::{
    TridiagError,
    TridiagResult,
    err_str,
};
pub use example::example_config;

/// Where the diagram geometry comes from.
pub enum Source {
    /// Explicit diagram input.
    Diagram(diagram::DiagramInput),
    /// Solver result, with the rule deriving the third angle.
    Result(adapter::TriangulationResult, adapter::ClosureRule),
}

/// Target struct.
/// Contains the loaded input, the backend and the output destination of one render.
pub struct Target {
    pub source: Source,
    pub backend: diagram::BackendChoice,
    pub output_path: Option<String>,
}

/// Build the backend and check the output path against its extension.
fn build_output(output_args: &args::OutputArgs) -> TridiagResult<(diagram::BackendChoice, Option<String>)> {
    let backend = diagram::BackendChoice::from_name(&output_args.backend)?;
    if let Some(output_path) = &output_args.output_path {
        let extension = Path::new(output_path).extension().and_then(|ext| ext.to_str());
        if extension != Some(backend.get_output_extension()) {
            args::err_str(&format!(
                "Output file \"{}\" does not match the {} backend (expected .{})",
                output_path, backend.get_backend_name(), backend.get_output_extension()
            ))?;
        }
    }
    Ok((backend, output_args.output_path.clone()))
}

/// [Stage 1.]
/// Load the input file named by a rendering command and pick the backend.
/// Returns a `TridiagResult` with the `Target` or an `Err`.
pub fn build_target(command: &args::Command) -> TridiagResult<Target> {
    match command {
        args::Command::Draw(draw_args) => {
            let (backend, output_path) = build_output(&draw_args.output_args)?;
            info!("Loading diagram input: {}...", draw_args.input_path);
            let mut input: diagram::DiagramInput = io::read_cfg_file(&draw_args.input_path)?;
            input.debug |= draw_args.output_args.debug;
            Ok(Target{source: Source::Diagram(input), backend, output_path})
        },
        args::Command::FromResult(result_args) => {
            let (backend, output_path) = build_output(&result_args.output_args)?;
            info!("Loading triangulation result: {}...", result_args.input_path);
            let result: adapter::TriangulationResult = io::read_cfg_file(&result_args.input_path)?;
            Ok(Target{source: Source::Result(result, result_args.closure), backend, output_path})
        },
        args::Command::Example(_) => err_str("The example command does not render"),
    }
}

/// [Stage 2.]
/// Render the target and write the image.
/// Returns a `TridiagResult` with `()` or an `Err`.
pub fn run_process(target: Target) -> TridiagResult<()> {
    let scene = match &target.source {
        Source::Diagram(input) => diagram::render(input)?,
        Source::Result(result, closure) => adapter::render_from_result(result, *closure)?,
    };
    debug!("Scene has {} primitives", scene.primitives.len());

    let image = diagram::emit(&scene, &target.backend)?;
    match &target.output_path {
        Some(output_path) => info!("Saving diagram to {}...", output_path),
        None => info!("Writing diagram to stdout..."),
    }
    io::write_output(target.output_path.as_deref(), &image)?;
    Ok(())
}

/// Run one invocation of the tridiag binary.
pub fn run_cli(cli: args::TridiagCli) -> TridiagResult<()> {
    match &cli.command {
        args::Command::Example(example_args) => {
            let text = example_config(example_args)?;
            io::write_output(None, text.as_bytes())?;
            Ok(())
        },
        command => run_process(build_target(command)?),
    }
}
