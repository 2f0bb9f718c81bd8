mod proc_errors;

use clap::{
    Args,
    Parser,
    Subcommand,
    ValueEnum,
};
use strum::{Display, EnumIter};

use crate::adapter::ClosureRule;

pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Triangulation diagram renderer.
#[derive(Debug, Parser)]
#[command(version)]
pub struct TridiagCli {
    #[clap(subcommand)]
    pub command: Command,
}
impl TridiagCli {
    /// Check if the debug flag was passed to a rendering subcommand.
    pub fn wants_debug(&self) -> bool {
        match &self.command {
            Command::Draw(args) => args.output_args.debug,
            Command::FromResult(args) => args.output_args.debug,
            Command::Example(_) => false,
        }
    }
}

/// Parser for the subcommands of the tridiag binary using clap.
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(name = "draw")]
    /// Render a diagram from an explicit diagram input file.
    Draw(DrawArgs),

    #[command(name = "result")]
    /// Render a diagram from a triangulation result file.
    FromResult(ResultArgs),

    #[command(name = "example")]
    /// Print an example input file.
    Example(ExampleArgs),
}

/// Output arguments, shared by the rendering commands. Compiled with clap.
#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(short, long = "output")]
    /// Path of the image to write (extension must match the backend). Stdout if omitted.
    pub output_path: Option<String>,

    #[arg(short, long, default_value = "svg")]
    /// Output backend (svg, scene_json).
    pub backend: String,

    #[arg(long)]
    /// Log the computed arc geometry and plot window.
    pub debug: bool,
}

/// Compiled arguments for the draw command. Compiled with clap.
#[derive(Debug, Args)]
pub struct DrawArgs {
    /// Diagram input file (.json, .toml, .yaml, .yml).
    pub input_path: String,

    #[command(flatten)]
    pub output_args: OutputArgs,
}

/// Compiled arguments for the result command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ResultArgs {
    /// Triangulation result file (.json, .toml, .yaml, .yml).
    pub input_path: String,

    #[arg(long, value_enum, default_value_t = ClosureRule::NegatedSum)]
    /// Rule deriving the third angle from the two measured ones.
    pub closure: ClosureRule,

    #[command(flatten)]
    pub output_args: OutputArgs,
}

/// Which input file to print an example of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "kebab_case")]
pub enum ExampleKind {
    /// Diagram input, for `tridiag draw`.
    Draw,
    /// Triangulation result, for `tridiag result`.
    #[value(name = "result")]
    TriangulationResult,
}

/// File format of printed examples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumIter)]
#[clap(rename_all = "kebab_case")]
#[strum(serialize_all = "kebab_case")]
pub enum Format {
    Yaml,
    Json,
    Toml,
}

/// Compiled arguments for the example command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    #[arg(value_enum)]
    pub kind: ExampleKind,

    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    pub format: Format,
}

/// Parse the command line arguments for the tridiag binary.
pub fn parse_cli_args() -> TridiagCli {
    TridiagCli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_defaults() {
        let cli = TridiagCli::try_parse_from(["tridiag", "draw", "in.yaml"]).unwrap();
        match cli.command {
            Command::Draw(args) => {
                assert_eq!(args.input_path, "in.yaml");
                assert_eq!(args.output_args.backend, "svg");
                assert!(args.output_args.output_path.is_none());
                assert!(!args.output_args.debug);
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn result_with_closure_and_debug() {
        let cli = TridiagCli::try_parse_from([
            "tridiag", "result", "res.json", "--closure", "full_turn", "-o", "out.svg", "--debug",
        ]).unwrap();
        assert!(cli.wants_debug());
        match cli.command {
            Command::FromResult(args) => {
                assert_eq!(args.closure, ClosureRule::FullTurn);
                assert_eq!(args.output_args.output_path.as_deref(), Some("out.svg"));
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn example_format_defaults_to_yaml() {
        let cli = TridiagCli::try_parse_from(["tridiag", "example", "result"]).unwrap();
        match cli.command {
            Command::Example(args) => {
                assert_eq!(args.kind, ExampleKind::TriangulationResult);
                assert_eq!(args.format, Format::Yaml);
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn unknown_closure_is_rejected() {
        assert!(TridiagCli::try_parse_from(["tridiag", "result", "r.json", "--closure", "sideways"]).is_err());
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        TridiagCli::command().debug_assert();
    }
}
