/*!
 * This is the output backends module.
 * Adding new backends should be done here.
 *
 * New backends need:
 * - A struct implementing `RenderBackend`
 * - An enum variant containing that struct in `BackendChoice`
 * - A constructor name and function in `BACKEND_CONSTRUCTION`
 *
 */

use enum_dispatch::enum_dispatch;

use crate::diagram::{self, Scene};

//
// ------------------------------------------------------------
// Code that requires modification to add a new backend
//      |
//      V
//

// Source files for the backends
mod svg;
mod scene_json;

/// Output backends enum.
/// To add a new backend:
/// include it here,
/// add handling for its constructor in `BACKEND_CONSTRUCTION`,
/// and implement the `RenderBackend` trait for it.
#[derive(Debug)]
#[enum_dispatch(RenderBackend)]
pub enum BackendChoice {
    /// Standalone SVG image.
    Svg(svg::Backend),
    /// Scene primitives dumped as JSON, for inspection.
    SceneJson(scene_json::Backend),
}

/// Backend construction array -- Written out in one place for easy modification.
const BACKEND_CONSTRUCTION: &[BackendConstructor] = &[
    BackendConstructor{
        name: "svg",
        constructor: || BackendChoice::Svg(svg::Backend::new()),
    },
    BackendConstructor{
        name: "scene_json",
        constructor: || BackendChoice::SceneJson(scene_json::Backend::new()),
    },
];

//
// ------------------------------------------------------------
// Traits and structs that don't need modification,
// but are references for adding a new backend
//      |
//      V
//

/// Output backend trait.
/// This trait must be implemented for all backends.
#[enum_dispatch] // enum dispatch allows us to use the enum as a kind of trait object
pub trait RenderBackend {
    /// Get the name of the backend.
    fn get_backend_name(&self) -> String;

    /// Get the file extension of the emitted output.
    fn get_output_extension(&self) -> &'static str;

    /// Turn a finished scene into output bytes.
    fn emit(&self, scene: &Scene) -> diagram::ProcResult<Vec<u8>>;
}

/// Backend constructor, keyed by the name used on the command line.
struct BackendConstructor {
    name: &'static str,
    constructor: fn() -> BackendChoice,
}

//
// ------------------------------------------------------------
// Functions with no modification or reference needed
//      |
//      V
//

impl BackendChoice {
    /// Construct a backend from its name.
    pub fn from_name(name: &str) -> diagram::ProcResult<Self> {
        for constructor in BACKEND_CONSTRUCTION {
            if constructor.name == name {
                return Ok((constructor.constructor)());
            }
        }

        let mut error_str = format!("Output backend not found: {name}\n");
        error_str.push_str("Available backends:\n");
        for name in backend_names() {
            error_str.push_str(&format!("    {}\n", name));
        }
        diagram::err_str(&error_str)
    }
}
impl Default for BackendChoice {
    fn default() -> Self {
        BackendChoice::Svg(svg::Backend::new())
    }
}

/// Names accepted by `BackendChoice::from_name`.
pub fn backend_names() -> Vec<&'static str> {
    BACKEND_CONSTRUCTION.iter().map(|constructor| constructor.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_backend_constructs() {
        for name in backend_names() {
            assert!(BackendChoice::from_name(name).is_ok(), "{}", name);
        }
    }

    #[test]
    fn unknown_backend_lists_the_options() {
        match BackendChoice::from_name("png") {
            Err(diagram::DiagramError::StringOnly(message)) => {
                assert!(message.contains("png"));
                assert!(message.contains("svg"));
                assert!(message.contains("scene_json"));
            },
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn extensions() {
        assert_eq!(BackendChoice::default().get_output_extension(), "svg");
        assert_eq!(BackendChoice::from_name("scene_json").unwrap().get_output_extension(), "json");
    }
}
