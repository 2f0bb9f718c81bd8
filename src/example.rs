use serde::Serialize;

use crate::{
    adapter::TriangulationResult,
    args,
    diagram::DiagramInput,
};

/// Serialize a value in the requested example format.
fn to_format<T: Serialize>(value: &T, format: args::Format) -> args::ProcResult<String> {
    let text = match format {
        args::Format::Yaml => serde_yaml::to_string(value)?,
        args::Format::Json => serde_json::to_string_pretty(value)? + "\n",
        args::Format::Toml => toml::to_string_pretty(value)?,
    };
    Ok(text)
}

/// Build an example input file for a subcommand.
/// Returns a `ProcResult` with the file text or an `Err`.
pub fn example_config(example_args: &args::ExampleArgs) -> args::ProcResult<String> {
    match example_args.kind {
        args::ExampleKind::Draw => to_format(&DiagramInput::example(), example_args.format),
        args::ExampleKind::TriangulationResult => to_format(&TriangulationResult::example(), example_args.format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn example(kind: args::ExampleKind, format: args::Format) -> String {
        example_config(&args::ExampleArgs{kind, format}).unwrap()
    }

    #[test]
    fn draw_examples_parse_back() {
        for format in args::Format::iter() {
            let text = example(args::ExampleKind::Draw, format);
            let input: DiagramInput = match format {
                args::Format::Yaml => serde_yaml::from_str(&text).unwrap(),
                args::Format::Json => serde_json::from_str(&text).unwrap(),
                args::Format::Toml => toml::from_str(&text).unwrap(),
            };
            assert_eq!(input.angle23, 135.0, "{}", format);
            assert!(input.show_circles);
        }
    }

    #[test]
    fn result_examples_parse_back() {
        for format in args::Format::iter() {
            let text = example(args::ExampleKind::TriangulationResult, format);
            let result: TriangulationResult = match format {
                args::Format::Yaml => serde_yaml::from_str(&text).unwrap(),
                args::Format::Json => serde_json::from_str(&text).unwrap(),
                args::Format::Toml => toml::from_str(&text).unwrap(),
            };
            assert_eq!(result.angles_between_points_with_simulated_error, [90.0, 135.0], "{}", format);
            assert_eq!(result.centers_with_radii.len(), 1);
        }
    }

    #[test]
    fn yaml_result_example_uses_result_field_names() {
        let text = example(args::ExampleKind::TriangulationResult, args::Format::Yaml);
        assert!(text.contains("angles_between_points_with_simulated_error:"));
        assert!(text.contains("centers_with_radii:"));
    }
}
