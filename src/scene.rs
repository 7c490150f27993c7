/*!
 * This is the scene module.
 * A scene is a config file of named shapes, the transforms to apply to each, and probe points.
 * Loading builds every shape and runs its transforms in order; the results can then be
 * measured one by one (`report_shapes`) or compared pairwise (`compare_shapes`).
 *
 */

mod proc_errors;
mod cfg;
mod report;

use itertools::Itertools;
use serde::Serialize;
use std::collections::HashSet;

use crate::geo_2d::Point;
use crate::shapes::ShapeChoice;

// Re-export errors
pub use proc_errors::{
    SceneError,
    ProcResult,
    err_str,
};
// Re-export cfg handling
pub use cfg::{
    Scene,
    ShapeEntry,
    ShapeCfg,
    TransformCfg,
};
// Re-export results
pub use report::{
    ShapeReport,
    Geometry,
    ProbeResult,
    PairReport,
};

/// A shape built from the scene, with its transforms applied.
#[derive(Debug, Clone)]
pub struct NamedShape {
    pub name: String,
    pub shape: ShapeChoice,
}

/// Scene after building.
#[derive(Debug, Clone)]
pub struct BuiltScene {
    pub shapes: Vec<NamedShape>,
    pub probes: Vec<Point>,
}

/// Load a scene file (json, toml or yaml).
pub fn load_scene(scene_path: &str) -> ProcResult<Scene> {
    log::info!("Loading scene file: {}", scene_path);
    Ok(crate::io::read_cfg_file(scene_path)?)
}

/// Build every shape in the scene and apply its transforms.
/// Names must be unique, and the scene must hold at least one shape.
pub fn build_scene(scene: &Scene) -> ProcResult<BuiltScene> {
    if scene.shapes.is_empty() {
        err_str("Scene has no shapes")?;
    }

    let mut seen = HashSet::new();
    if let Some(duplicate) = scene.shapes.iter().find(|entry| !seen.insert(entry.name.as_str())) {
        err_str(&format!("Shape name \"{}\" is used more than once", duplicate.name))?;
    }

    let mut shapes = Vec::with_capacity(scene.shapes.len());
    for entry in scene.shapes.iter() {
        log::info!("Building {} \"{}\" with {} transform(s)", entry.shape.kind(), entry.name, entry.transforms.len());
        let shape_err = |error| SceneError::ShapeError(entry.name.clone(), error);

        let mut shape = entry.shape.build().map_err(shape_err)?;
        for transform in entry.transforms.iter() {
            transform.apply(&mut shape).map_err(shape_err)?;
        }
        shapes.push(NamedShape{name: entry.name.clone(), shape});
    }

    Ok(BuiltScene{shapes, probes: scene.probes.clone()})
}

/// Load and build a scene file in one step.
pub fn load_and_build(scene_path: &str) -> ProcResult<BuiltScene> {
    build_scene(&load_scene(scene_path)?)
}

/// Measure every shape in the scene, in scene order.
pub fn report_shapes(scene: &BuiltScene) -> Vec<ShapeReport> {
    scene.shapes.iter()
        .map(|named| ShapeReport::new(&named.name, &named.shape, &scene.probes))
        .collect()
}

/// Compare every unordered pair of shapes, in scene order.
pub fn compare_shapes(scene: &BuiltScene) -> Vec<PairReport> {
    log::info!("Comparing {} shape(s)", scene.shapes.len());
    scene.shapes.iter()
        .tuple_combinations::<(_, _)>()
        .map(|(first, second)| PairReport::new(&first.name, &first.shape, &second.name, &second.shape))
        .collect()
}

/// Save results as pretty JSON.
pub fn save_json<T: Serialize + ?Sized>(results: &T, output_path: &str) -> ProcResult<()> {
    log::info!("Saving results to {}", output_path);
    Ok(crate::io::write_json(output_path, results)?)
}
