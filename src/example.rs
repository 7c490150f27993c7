use strum::IntoEnumIterator;

use crate::args::{ExampleArgs, Format, ProcResult};
use crate::scene::Scene;
use crate::shapes::ShapeKind;

/// Render the example scene for a kind in the requested format.
pub fn example_scene(kind: ShapeKind, format: Format) -> ProcResult<String> {
    Ok(crate::io::render(format, &Scene::example(kind))?)
}

/// Display an example scene file for a shape kind,
/// or list the available kinds if none is given.
pub fn display_example(example_args: ExampleArgs) -> ProcResult<()> {
    match example_args.kind {
        Some(kind) => {
            println!("{}", example_scene(kind, example_args.format)?);
        },
        None => {
            println!("Available shape kinds:");
            for kind in ShapeKind::iter() {
                println!("    {} ({})", kind, kind.family());
            }
        },
    }
    Ok(())
}
