//! Command-line front end for `jsoneq-core`.
//!
//! Compares ACTUAL against EXPECTED (or STDIN when EXPECTED is omitted) and
//! prints the rendered failure message when the documents differ. Exit codes:
//! `0` when they match, `1` on a difference, `2` on any error.

use std::borrow::Cow;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{ArgAction, Parser};
use jsoneq_core::{
    compare, render_documents, CompareOptions, ComparisonMode, InputRole, JsonInput, Node,
    RenderConfig, DEFAULT_MAX_DEPTH,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "JSONEQ_LOG";
const EXIT_MATCH: i32 = 0;
const EXIT_DIFFERENCE: i32 = 1;
const EXIT_ERROR: i32 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "jsoneq",
    version,
    about = "Compare JSON documents structurally.",
    long_about = "Compare JSON documents structurally.\n\n\
                  Prints the first difference between ACTUAL and EXPECTED.\n\
                  When EXPECTED is omitted the second document is read from STDIN.\n\
                  An empty input stands for an absent document.",
    override_usage = "jsoneq [OPTION]... ACTUAL [EXPECTED]"
)]
struct Cli {
    /// Only require EXPECTED to be contained in ACTUAL.
    #[arg(long = "subtree", action = ArgAction::SetTrue)]
    subtree: bool,

    /// Read both documents as YAML (also accepts unquoted-key JSON).
    #[arg(long = "yaml", action = ArgAction::SetTrue)]
    yaml: bool,

    /// Reason appended to the failure message.
    #[arg(long = "because", value_name = "REASON")]
    because: Option<String>,

    /// Deepest nesting level compared before giving up.
    #[arg(long = "max-depth", value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Emit diagnostics as JSON lines on STDERR.
    #[arg(long = "log-json", action = ArgAction::SetTrue)]
    log_json: bool,

    /// Positional inputs (ACTUAL \[EXPECTED]).
    #[arg(required = true, num_args = 1..=2, value_name = "FILE")]
    inputs: Vec<OsString>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);
    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            let _ = writeln!(io::stderr(), "{err:#}");
            std::process::exit(EXIT_ERROR);
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr);
    let _ = if json { builder.json().try_init() } else { builder.try_init() };
}

fn run(cli: &Cli) -> Result<i32> {
    let (actual_source, expected_source) = sources(&cli.inputs)?;
    let actual_text = read_input(&actual_source)?;
    let expected_text = read_input(&expected_source)?;
    let actual = parse_document(&actual_text, cli.yaml, InputRole::Actual)?;
    let expected = parse_document(&expected_text, cli.yaml, InputRole::Expected)?;

    let options = build_options(cli)?;
    let outcome = compare(actual.as_ref(), expected.as_ref(), &options).context("comparison aborted")?;
    let Some(diff) = outcome else {
        debug!(mode = %options.mode(), "documents match");
        return Ok(EXIT_MATCH);
    };

    let mut config = RenderConfig::default();
    if let Some(reason) = &cli.because {
        config = config.with_reason(reason.as_str());
    }
    let message = render_documents(&diff, actual.as_ref(), expected.as_ref(), options.mode(), &config);
    print!("{message}");
    io::stdout().flush().ok();
    Ok(EXIT_DIFFERENCE)
}

#[derive(Debug, PartialEq, Eq)]
enum InputSource {
    File(PathBuf),
    Stdin,
}

fn sources(inputs: &[OsString]) -> Result<(InputSource, InputSource)> {
    match inputs {
        [actual] => Ok((InputSource::File(path_from(actual)?), InputSource::Stdin)),
        [actual, expected] => {
            Ok((InputSource::File(path_from(actual)?), InputSource::File(path_from(expected)?)))
        }
        _ => Err(anyhow!("expected one or two input files, got {}", inputs.len())),
    }
}

fn path_from(input: &OsString) -> Result<PathBuf> {
    let path = PathBuf::from(input);
    if path.as_os_str().is_empty() {
        bail!("expected file path; got empty string");
    }
    Ok(path)
}

fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::File(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).context("failed to read STDIN")?;
            Ok(buffer)
        }
    }
}

fn parse_document(text: &str, yaml: bool, role: InputRole) -> Result<Option<Node>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let input = if yaml { JsonInput::Yaml(text) } else { JsonInput::Json(text) };
    let node = input.resolve(role)?;
    Ok(node.map(Cow::into_owned))
}

fn build_options(cli: &Cli) -> Result<CompareOptions> {
    let mode = if cli.subtree { ComparisonMode::Subtree } else { ComparisonMode::Equivalence };
    let options = CompareOptions::default()
        .with_mode(mode)
        .with_max_depth(cli.max_depth)
        .context("invalid --max-depth")?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse_args(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).expect("arguments parse")
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn single_input_reads_expected_from_stdin() {
        let cli = parse_args(&["jsoneq", "actual.json"]);
        let (actual, expected) = sources(&cli.inputs).unwrap();
        assert_eq!(actual, InputSource::File(PathBuf::from("actual.json")));
        assert_eq!(expected, InputSource::Stdin);
    }

    #[test]
    fn three_inputs_are_rejected() {
        assert!(Cli::try_parse_from(["jsoneq", "a", "b", "c"]).is_err());
    }

    #[test]
    fn subtree_flag_selects_mode() {
        let cli = parse_args(&["jsoneq", "--subtree", "--max-depth", "8", "a", "b"]);
        let options = build_options(&cli).unwrap();
        assert_eq!(options.mode(), ComparisonMode::Subtree);
        assert_eq!(options.max_depth(), 8);
    }

    #[test]
    fn zero_depth_is_an_error() {
        let cli = parse_args(&["jsoneq", "--max-depth", "0", "a"]);
        assert!(build_options(&cli).is_err());
    }

    #[test]
    fn blank_text_is_an_absent_document() {
        assert_eq!(parse_document("  \n", false, InputRole::Actual).unwrap(), None);
    }

    #[test]
    fn parse_failure_names_the_role() {
        let err = parse_document("{ invalid JSON }", false, InputRole::Expected).unwrap_err();
        assert!(err.to_string().starts_with("Unable to parse expected JSON string: { invalid JSON }"));
    }

    #[test]
    fn yaml_flag_accepts_relaxed_documents() {
        let node = parse_document("{ id: 2 }", true, InputRole::Actual).unwrap().unwrap();
        assert_eq!(node, Node::from_json_str("{\"id\":2}").unwrap());
    }
}
