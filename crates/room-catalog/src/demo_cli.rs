//! CLI support for the `room-catalog-demo` binary.
//!
//! Parsing and rendering live here so they can be exercised in tests without
//! spawning a process; the binary only wires up logging and writes output.

use clap::{Parser, ValueEnum};

use crate::error::CatalogError;
use crate::scenario::{Report, Scenario, run_all, run_scenario};

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A header per scenario followed by its lines.
    #[default]
    Text,
    /// A pretty-printed JSON array of reports.
    Json,
}

/// Command-line options for the demo.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "room-catalog-demo",
    about = "Runs room catalogue demonstrations and prints their results"
)]
pub struct Options {
    /// Run a single scenario instead of all of them.
    #[arg(long, value_enum)]
    pub scenario: Option<Scenario>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Runs the selected scenarios and renders their reports.
///
/// # Errors
///
/// Returns [`CatalogError`] when a scenario fails or JSON rendering fails.
///
/// # Example
///
/// ```
/// use clap::Parser;
/// use room_catalog::demo_cli::{Options, run};
///
/// let options = Options::parse_from(["room-catalog-demo", "--scenario", "pet-friendly"]);
/// let output = run(&options).expect("demo runs");
///
/// assert_eq!(output, "== pet-friendly ==\nOxford\nVictoria\n");
/// ```
pub fn run(options: &Options) -> Result<String, CatalogError> {
    let reports = match options.scenario {
        Some(scenario) => vec![run_scenario(scenario)?],
        None => run_all()?,
    };
    match options.format {
        OutputFormat::Text => Ok(render_text(&reports)),
        OutputFormat::Json => render_json(&reports),
    }
}

/// Renders reports as header-delimited plain text.
#[must_use]
pub fn render_text(reports: &[Report]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str("== ");
        out.push_str(report.scenario.label());
        out.push_str(" ==\n");
        for line in &report.lines {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// Renders reports as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`CatalogError::Serialization`] if the serializer fails.
pub fn render_json(reports: &[Report]) -> Result<String, CatalogError> {
    serde_json::to_string_pretty(reports).map_err(|err| CatalogError::Serialization {
        message: err.to_string(),
    })
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn defaults_run_everything_as_text() {
        let options = Options::try_parse_from(["room-catalog-demo"]).expect("parse");
        assert_eq!(options.scenario, None);
        assert_eq!(options.format, OutputFormat::Text);

        let output = run(&options).expect("demo runs");
        for scenario in Scenario::ALL {
            assert!(output.contains(&format!("== {} ==", scenario.label())));
        }
    }

    #[rstest]
    #[case("pet-friendly", Scenario::PetFriendly)]
    #[case("deduplication", Scenario::Deduplication)]
    #[case("rate-totals", Scenario::RateTotals)]
    #[case("removal", Scenario::Removal)]
    #[case("ordered", Scenario::Ordered)]
    #[case("read-only", Scenario::ReadOnly)]
    fn parses_scenario_names(#[case] name: &str, #[case] expected: Scenario) {
        let options =
            Options::try_parse_from(["room-catalog-demo", "--scenario", name]).expect("parse");
        assert_eq!(options.scenario, Some(expected));
    }

    #[test]
    fn rejects_unknown_scenario() {
        let result = Options::try_parse_from(["room-catalog-demo", "--scenario", "spa"]);
        assert!(result.is_err());
    }

    #[test]
    fn json_output_lists_reports() {
        let options = Options::try_parse_from([
            "room-catalog-demo",
            "--scenario",
            "rate-totals",
            "--format",
            "json",
        ])
        .expect("parse");

        let output = run(&options).expect("demo runs");
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");

        assert_eq!(parsed[0]["scenario"], "rate-totals");
        assert_eq!(parsed[0]["lines"][0], "pet-friendly total: 450.00");
    }
}
