pub mod geo_2d;
pub mod shapes;
pub mod scene;
pub mod args;
pub mod io;
mod example;
mod crate_errors;

pub use crate_errors::{
    PlanarError,
    PlanarResult,
};

/// Run the command parsed from the command line.
/// Results go to stdout, and to a json file when an output path is given.
/// Returns a `PlanarResult` with `()` or an `Err`.
pub fn run(cli_args: args::PlanarCli) -> PlanarResult<()> {
    match cli_args.command {
        args::RunCommand::Report(scene_args) => {
            scene_args.validate()?;
            let built = scene::load_and_build(&scene_args.scene_path)?;
            let reports = scene::report_shapes(&built);
            for report in reports.iter() {
                println!("{}", report);
                println!();
            }
            if let Some(output_path) = scene_args.output_path.as_ref() {
                scene::save_json(&reports, output_path)?;
            }
        },
        args::RunCommand::Compare(scene_args) => {
            scene_args.validate()?;
            let built = scene::load_and_build(&scene_args.scene_path)?;
            if built.shapes.len() < 2 {
                log::warn!("Scene has a single shape, nothing to compare");
            }
            let pairs = scene::compare_shapes(&built);
            for pair in pairs.iter() {
                println!("{}", pair);
            }
            if let Some(output_path) = scene_args.output_path.as_ref() {
                scene::save_json(&pairs, output_path)?;
            }
        },
        args::RunCommand::Example(example_args) => {
            example::display_example(example_args)?;
        },
    }
    Ok(())
}
