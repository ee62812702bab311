//! The `verify` subcommand.

use anyhow::{Result, bail};
use clap::Args;
use patternbook::harness::{Catalogue, Demo, HarnessResult};

/// Arguments for the verify subcommand
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Demo names to verify (default: all)
    pub names: Vec<String>,
}

/// Outcome of checking one demo.
#[derive(Debug)]
enum Outcome {
    Passed,
    Unchecked,
    Failed(String),
}

fn check(demo: &Demo) -> Outcome {
    match demo.verify() {
        Ok(_) if demo.expected().is_none() => Outcome::Unchecked,
        Ok(_) => Outcome::Passed,
        Err(error) => Outcome::Failed(error.to_string()),
    }
}

pub fn run(catalogue: &Catalogue, args: &VerifyArgs) -> Result<()> {
    let demos: Vec<&Demo> = if args.names.is_empty() {
        catalogue.iter().collect()
    } else {
        args.names
            .iter()
            .map(|name| catalogue.get(name))
            .collect::<HarnessResult<_>>()?
    };

    let mut failures = 0_usize;
    for demo in &demos {
        match check(demo) {
            Outcome::Passed => println!("ok      {}", demo.name()),
            Outcome::Unchecked => {
                println!("ran     {} (output depends on the clock)", demo.name());
            }
            Outcome::Failed(reason) => {
                failures += 1;
                tracing::warn!(demo = demo.name(), %reason, "transcript diverged");
                println!("FAILED  {reason}");
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} demos diverged", demos.len());
    }
    tracing::info!(verified = demos.len(), "all transcripts match");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use patternbook::harness::{Family, Transcript};
    use rstest::rstest;

    fn wrong(out: &mut Transcript) {
        out.line("actual");
    }

    #[rstest]
    fn mismatch_is_a_failure() {
        let demo = Demo::new("wrong", Family::Behavioral, "", wrong).expecting(&["expected"]);
        assert!(matches!(check(&demo), Outcome::Failed(reason) if reason.contains("line 1")));
    }

    #[rstest]
    fn demo_without_expectation_is_unchecked() {
        let demo = Demo::new("wrong", Family::Behavioral, "", wrong);
        assert!(matches!(check(&demo), Outcome::Unchecked));
    }

    #[rstest]
    fn builtin_catalogue_verifies() {
        let args = VerifyArgs { names: Vec::new() };
        assert!(run(&Catalogue::builtin(), &args).is_ok());
    }

    #[rstest]
    fn unknown_name_is_an_error() {
        let args = VerifyArgs {
            names: vec!["missing".to_string()],
        };
        assert!(run(&Catalogue::builtin(), &args).is_err());
    }
}
