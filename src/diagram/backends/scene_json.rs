use serde::Serialize;

use crate::diagram::{self, backends, LegendEntry, Scene};

/// Scene dump backend.
/// Writes the primitives, window and deduplicated legend as pretty JSON,
/// which is easier to check by script than the SVG.
#[derive(Debug)]
pub struct Backend;
impl Backend {
    pub fn new() -> Self {
        Backend
    }
}

/// The scene plus its computed legend.
#[derive(Serialize)]
struct SceneDocument<'a> {
    #[serde(flatten)]
    scene: &'a Scene,
    legend: Vec<LegendEntry>,
}

impl backends::RenderBackend for Backend {
    fn get_backend_name(&self) -> String {
        "Scene JSON".to_string()
    }

    fn get_output_extension(&self) -> &'static str {
        "json"
    }

    fn emit(&self, scene: &Scene) -> diagram::ProcResult<Vec<u8>> {
        let document = SceneDocument{scene, legend: scene.legend()};
        let mut bytes = serde_json::to_vec_pretty(&document)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}
