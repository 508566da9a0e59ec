//! Montyhall CLI: run a batch of trials and print the aggregate results.

use anyhow::{bail, Result};
use montyhall::{ConsoleNarrator, Reporter, RunConfig, Runner, SilentReporter, ThreadRngSelector};
use std::env;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: montyhall [OPTIONS]

Options:
  -q, --quiet       Suppress per-step narration and door diagrams
      --rounds N    Number of trials to run (default: 10000)
      --json        Print the final report as JSON instead of text
  -h, --help        Show this help";

#[derive(Debug)]
struct CliArgs {
    quiet: bool,
    rounds: usize,
    json: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Option<CliArgs>> {
    let mut parsed = CliArgs {
        quiet: false,
        rounds: RunConfig::default().rounds,
        json: false,
    };
    let mut args = args;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-q" | "--quiet" => parsed.quiet = true,
            "--json" => parsed.json = true,
            "--rounds" => {
                let Some(value) = args.next() else {
                    bail!("--rounds requires a value\n\n{USAGE}");
                };
                parsed.rounds = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("invalid round count '{value}'\n\n{USAGE}"))?;
            }
            "-h" | "--help" => return Ok(None),
            other => bail!("unknown argument '{other}'\n\n{USAGE}"),
        }
    }
    Ok(Some(parsed))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let Some(args) = parse_args(env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };

    let runner = Runner::new(RunConfig {
        rounds: args.rounds,
    });
    let mut selector = ThreadRngSelector::new();
    let mut reporter: Box<dyn Reporter> = if args.quiet {
        Box::new(SilentReporter)
    } else {
        Box::new(ConsoleNarrator::new())
    };

    let report = runner.run(&mut selector, reporter.as_mut())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args<'a>(list: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
        list.iter().map(|s| s.to_string())
    }

    #[test]
    fn defaults_match_the_original_wiring() {
        let parsed = parse_args(args(&[])).unwrap().unwrap();
        assert!(!parsed.quiet);
        assert!(!parsed.json);
        assert_eq!(parsed.rounds, 10_000);
    }

    #[test]
    fn flags_are_recognized() {
        let parsed = parse_args(args(&["-q", "--rounds", "250", "--json"]))
            .unwrap()
            .unwrap();
        assert!(parsed.quiet);
        assert!(parsed.json);
        assert_eq!(parsed.rounds, 250);
    }

    #[test]
    fn help_short_circuits() {
        assert!(parse_args(args(&["--help"])).unwrap().is_none());
    }

    #[test]
    fn unknown_arguments_fail_with_usage() {
        let err = parse_args(args(&["--frobnicate"])).unwrap_err();
        assert!(err.to_string().contains("unknown argument"));
        assert!(err.to_string().contains("Usage:"));
    }

    #[test]
    fn round_count_must_be_numeric() {
        assert!(parse_args(args(&["--rounds", "many"])).is_err());
        assert!(parse_args(args(&["--rounds"])).is_err());
    }
}
