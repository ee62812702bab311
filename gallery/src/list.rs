//! The `list` subcommand.

use anyhow::Result;
use clap::Args;
use patternbook::harness::{Catalogue, Demo, Family};

/// Arguments for the list subcommand
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list one family (behavioral|creational|structural|functional)
    #[arg(long, short = 'f')]
    pub family: Option<Family>,
}

fn format_entry(demo: &Demo) -> String {
    let marker = if demo.expected().is_some() { ' ' } else { '~' };
    format!(
        "{marker} {:<24} {:<11} {}",
        demo.name(),
        demo.family(),
        demo.summary()
    )
}

pub fn run(catalogue: &Catalogue, args: &ListArgs) -> Result<()> {
    let demos: Vec<&Demo> = match args.family {
        Some(family) => catalogue.by_family(family).collect(),
        None => catalogue.iter().collect(),
    };

    for demo in &demos {
        println!("{}", format_entry(demo));
    }
    tracing::info!(listed = demos.len(), "listed demos");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use patternbook::harness::Transcript;
    use rstest::rstest;

    fn silent(_: &mut Transcript) {}

    #[rstest]
    fn nondeterministic_demos_are_marked() {
        let demo = Demo::new("clock", Family::Creational, "Prints the time", silent);
        assert!(format_entry(&demo).starts_with("~ clock"));
    }

    #[rstest]
    fn verified_demos_are_unmarked() {
        let demo = Demo::new("noop", Family::Functional, "Nothing", silent).expecting(&[]);
        let entry = format_entry(&demo);

        assert!(entry.starts_with("  noop"));
        assert!(entry.ends_with("functional  Nothing"));
    }
}
