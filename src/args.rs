mod proc_errors;

use clap::{
    Args,
    Parser,
    Subcommand,
};

use crate::shapes::ShapeKind;
pub use crate::io::Format;

// Re-export errors
pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Planar shape measurement and comparison tool
#[derive(Debug, Parser)]
#[command(name = "planar")]
pub struct PlanarCli {
    #[arg(short, long, global = true)]
    /// Print debug logs (RUST_LOG takes precedence)
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: RunCommand,
}

/// Parser for the subcommands of the planar binary using clap.
#[derive(Debug, Subcommand)]
pub enum RunCommand {
    #[command(name = "report")]
    /// Measure every shape in a scene, after its transforms
    Report(SceneArgs),

    #[command(name = "compare")]
    /// Check equality, congruence and similarity for every pair of shapes in a scene
    Compare(SceneArgs),

    #[command(name = "example")]
    /// Print an example scene file for a shape kind
    Example(ExampleArgs),
}

/// Arguments for the commands that run on a scene file.
#[derive(Debug, Args)]
pub struct SceneArgs {
    /// Path to the scene file (.yaml/.yml, .json or .toml)
    pub scene_path: String,

    #[arg(short, long = "output")]
    /// Optional path to also save the results to (must be .json)
    pub output_path: Option<String>,
}
impl SceneArgs {
    /// Check the paths before any work is done.
    pub fn validate(&self) -> ProcResult<()> {
        if let Some(output_path) = self.output_path.as_ref() {
            if !output_path.ends_with(".json") {
                err_str(&format!("Output path must end with .json, got {}", output_path))?;
            }
        }
        Ok(())
    }
}

/// Arguments for the example command.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    #[arg(value_enum)]
    /// Shape kind to show (lists the available kinds if left out)
    pub kind: Option<ShapeKind>,

    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Format of the printed scene
    pub format: Format,
}

/// Parse the command line arguments for the planar binary.
pub fn parse_cli_args() -> PlanarCli {
    PlanarCli::parse()
}
