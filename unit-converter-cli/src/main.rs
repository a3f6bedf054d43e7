use anyhow::{Context, Result};
use clap::{ErrorKind, Parser};
use clap_verbosity_flag::Verbosity;
use itertools::Itertools;
use log::debug;
use std::io;
use std::process;
use unit_converter::interpreter::unit::{units_of, write_catalog, Dimension};
use unit_converter::interpreter::{evaluate, render};

const PROGRAM: &str = env!("CARGO_BIN_NAME");
const EXPECTED_EXPRESSION: &str = "expected exactly one conversion expression";

/// Converts a value between two units of the same dimension
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The conversion to perform, e.g. "convert 1.3 kg to lb"
    expression: Option<String>,

    /// Print every supported unit, grouped by dimension
    #[clap(long)]
    list_units: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() {
    let arguments = match Arguments::try_parse() {
        Ok(arguments) => arguments,
        Err(error) => fail(argument_error(error)),
    };

    env_logger::Builder::new()
        .filter_level(arguments.verbose.log_level_filter())
        .init();

    if let Err(error) = run(&arguments) {
        fail(error);
    }
}

fn run(arguments: &Arguments) -> Result<()> {
    if arguments.list_units {
        return write_catalog(io::stdout()).context("could not print the unit catalog");
    }

    let expression = arguments
        .expression
        .as_deref()
        .context(EXPECTED_EXPRESSION)?;
    debug!("Evaluating '{}'", expression);
    let conversion = evaluate(expression)?;
    println!("{}", render(&conversion)?);
    Ok(())
}

/// Help and version requests exit here; any other rejection means the argument count was wrong.
fn argument_error(error: clap::Error) -> anyhow::Error {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error.exit(),
        _ => anyhow::Error::msg(EXPECTED_EXPRESSION),
    }
}

fn fail(error: anyhow::Error) -> ! {
    eprint!("{}", report(&error));
    process::exit(1)
}

fn report(error: &anyhow::Error) -> String {
    format!("Error: {:#}\n\n{}", error, usage())
}

fn usage() -> String {
    let mut lines = vec![
        "=== UNIT CONVERTER ===".to_string(),
        String::new(),
        format!(
            "Usage: {} \"convert <value> <source_unit> to <target_unit>\"",
            PROGRAM
        ),
        String::new(),
    ];
    lines.extend(Dimension::ALL.iter().map(|dimension| {
        format!(
            "{}: {}",
            dimension.to_string().to_uppercase(),
            units_of(*dimension).iter().join(", ")
        )
    }));
    lines.push(String::new());
    lines.push("Examples:".to_string());
    lines.extend(
        ["convert 1.3 kg to lb", "convert 100 m to ft", "convert 25 C to F"]
            .iter()
            .map(|example| format!("  {} \"{}\"", PROGRAM, example)),
    );

    lines.iter().map(|line| format!("{}\n", line)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_expression_is_accepted() {
        let arguments = Arguments::try_parse_from([PROGRAM, "convert 1.3 kg to lb"]).unwrap();

        assert_eq!(arguments.expression.as_deref(), Some("convert 1.3 kg to lb"));
        assert!(!arguments.list_units);
    }

    #[test]
    fn extra_arguments_are_rejected() {
        Arguments::try_parse_from([PROGRAM, "convert", "1.3", "kg", "to", "lb"]).unwrap_err();
    }

    #[test]
    fn missing_expression_fails_to_run() {
        let arguments = Arguments::try_parse_from([PROGRAM]).unwrap();

        run(&arguments).unwrap_err();
    }

    #[test]
    fn conversion_failure_fails_to_run() {
        let arguments = Arguments::try_parse_from([PROGRAM, "convert 5 kg to m"]).unwrap();

        let error = run(&arguments).unwrap_err();

        assert_eq!(
            error.to_string(),
            "cannot convert kg to m: incompatible dimensions"
        );
    }

    #[test]
    fn parse_failure_is_reported_once() {
        let arguments = Arguments::try_parse_from([PROGRAM, "convert 5 xyz to kg"]).unwrap();

        let report = report(&run(&arguments).unwrap_err());

        assert_eq!(
            report.lines().next(),
            Some(
                "Error: could not parse the conversion request: \
                 expected a source unit, found unknown word 'xyz' at position 2"
            )
        );
    }

    #[test]
    fn wrong_argument_count_is_reported_in_one_line() {
        let error = Arguments::try_parse_from([PROGRAM, "convert 1 kg to lb", "extra"]).unwrap_err();

        let report = report(&argument_error(error));

        assert!(report.starts_with(
            "Error: expected exactly one conversion expression\n\n=== UNIT CONVERTER ==="
        ));
        assert!(!report.contains("USAGE"));
    }

    #[test]
    fn usage_lists_every_dimension() {
        let usage = usage();

        assert!(usage.contains("WEIGHT: kg, g, mg, t, ton, lb, oz, st, ct"));
        assert!(usage.contains("TEMPERATURE: °C, C, °F, F, K"));
        assert!(usage.contains("PRESSURE: Pa, kPa, MPa, bar, mbar, psi, atm, mmHg, inHg"));
        assert!(usage.contains("convert <value> <source_unit> to <target_unit>"));
    }
}
