//! The `run` subcommand.

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use patternbook::harness::{Catalogue, Demo, Family, Transcript};
use serde::Serialize;

/// How transcripts are printed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A header per demo followed by its lines
    #[default]
    Text,
    /// One JSON array of `{ name, family, lines }` objects
    Json,
}

/// Arguments for the run subcommand
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Demo names to run, in order
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub names: Vec<String>,

    /// Run every demo in the catalogue
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    name: &'a str,
    family: Family,
    lines: Transcript,
}

fn select<'a>(catalogue: &'a Catalogue, args: &RunArgs) -> Result<Vec<&'a Demo>> {
    if args.all {
        return Ok(catalogue.iter().collect());
    }
    args.names
        .iter()
        .map(|name| {
            catalogue
                .get(name)
                .with_context(|| format!("Failed to select demo `{name}`"))
        })
        .collect()
}

fn render_text(reports: &[Report<'_>]) -> String {
    reports
        .iter()
        .map(|report| format!("== {} ({}) ==\n{}", report.name, report.family, report.lines))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn run(catalogue: &Catalogue, args: &RunArgs) -> Result<()> {
    let demos = select(catalogue, args)?;
    if demos.is_empty() {
        bail!("No demos selected");
    }

    let reports: Vec<Report<'_>> = demos
        .into_iter()
        .map(|demo| Report {
            name: demo.name(),
            family: demo.family(),
            lines: demo.run(),
        })
        .collect();

    let rendered = match args.format {
        OutputFormat::Text => render_text(&reports),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&reports).context("Failed to serialize transcripts")?
        }
    };
    println!("{rendered}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn report(name: &'static str, lines: &[&str]) -> Report<'static> {
        Report {
            name,
            family: Family::Behavioral,
            lines: lines.iter().copied().collect(),
        }
    }

    #[rstest]
    fn text_separates_demos_with_headers() {
        let rendered = render_text(&[report("a", &["1", "2"]), report("b", &["3"])]);
        assert_eq!(
            rendered,
            "== a (behavioral) ==\n1\n2\n\n== b (behavioral) ==\n3"
        );
    }

    #[rstest]
    fn json_uses_plain_line_arrays() {
        let json = serde_json::to_value([report("a", &["1"])]).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "name": "a", "family": "behavioral", "lines": ["1"] }])
        );
    }

    #[rstest]
    fn unknown_names_are_errors() {
        let args = RunArgs {
            names: vec!["nope".to_string()],
            all: false,
            format: OutputFormat::Text,
        };
        let error = select(&Catalogue::builtin(), &args).unwrap_err();
        assert!(format!("{error:#}").contains("no demo named `nope`"));
    }

    #[rstest]
    fn all_selects_the_whole_catalogue() {
        let catalogue = Catalogue::builtin();
        let args = RunArgs {
            names: Vec::new(),
            all: true,
            format: OutputFormat::Json,
        };
        assert_eq!(select(&catalogue, &args).unwrap().len(), catalogue.len());
    }
}
