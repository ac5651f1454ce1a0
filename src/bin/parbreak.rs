use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use parbreak::render::{to_latex, to_listing};
use parbreak::{tokenize, BreakEngineBuilder, BreakPolicy};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("parbreak: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&options) {
        eprintln!("parbreak: {err:#}");
        std::process::exit(1);
    }
}

fn run(options: &Options) -> Result<()> {
    let text = fs::read_to_string(&options.input)
        .with_context(|| format!("failed to read {}", options.input.display()))?;
    let words = tokenize(&text, options.policy);

    let engine = BreakEngineBuilder::new()
        .with_target_width(options.width)
        .with_tolerance(options.tolerance)
        .build()
        .context("invalid line-breaking parameters")?;
    let solution = engine
        .search(&words)
        .with_context(|| format!("failed to break {}", options.input.display()))?;

    eprintln!(
        "parbreak: {} words, {} lines, score {:.2}",
        words.len(),
        solution.line_count(),
        solution.score
    );

    match options.format {
        OutputFormat::Latex => {
            let output = options
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from("output.tex"));
            fs::write(&output, to_latex(&words, &solution))
                .with_context(|| format!("failed to write {}", output.display()))?;
            eprintln!("parbreak: wrote {}", output.display());
        }
        OutputFormat::Breaks => {
            let listing = to_listing(&words, &solution);
            match &options.output {
                Some(path) => fs::write(path, listing)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{listing}"),
            }
        }
    }
    Ok(())
}

struct Options {
    input: PathBuf,
    width: f64,
    tolerance: f64,
    policy: BreakPolicy,
    format: OutputFormat,
    output: Option<PathBuf>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut input = None;
        let mut width = 80.0f64;
        let mut tolerance = 2.0f64;
        let mut policy = BreakPolicy::Newline;
        let mut format = OutputFormat::Latex;
        let mut output = None;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => {
                    (flag.to_string(), Some(value.to_string()))
                }
                _ => (arg.clone(), None),
            };
            let mut value = |name: &str| -> Result<String, String> {
                match inline.clone() {
                    Some(v) => Ok(v),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {name}")),
                }
            };

            match flag.as_str() {
                "--help" | "-h" => {
                    Options::print_help();
                    std::process::exit(0);
                }
                "--width" => {
                    width = value("--width")?
                        .parse::<f64>()
                        .map_err(|_| "width must be a number".to_string())?;
                }
                "--tolerance" => {
                    tolerance = value("--tolerance")?
                        .parse::<f64>()
                        .map_err(|_| "tolerance must be a number".to_string())?;
                }
                "--breaks" => {
                    policy = match value("--breaks")?.as_str() {
                        "newline" => BreakPolicy::Newline,
                        "blank" => BreakPolicy::BlankLine,
                        other => return Err(format!("unknown break policy '{other}'")),
                    };
                }
                "--format" => {
                    format = OutputFormat::from_str(&value("--format")?)?;
                }
                "--output" | "-o" => {
                    output = Some(PathBuf::from(value("--output")?));
                }
                other if other.starts_with('-') => {
                    return Err(format!("unrecognized argument '{other}'"));
                }
                _ => {
                    if input.replace(PathBuf::from(&arg)).is_some() {
                        return Err("only one input file may be given".to_string());
                    }
                }
            }
        }

        Ok(Self {
            input: input.ok_or_else(|| "missing input file".to_string())?,
            width,
            tolerance,
            policy,
            format,
            output,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: parbreak [options] <input.txt>

Options:
  --width <N>                 Target line width in characters (default: 80)
  --tolerance <T>             Maximum stretch ratio per line (default: 2)
  --breaks <newline|blank>    Which newlines force a line break (default: newline)
  --format <latex|breaks>     Output a LaTeX document or a line listing (default: latex)
  -o, --output <PATH>         Output file (default: output.tex for latex, stdout for breaks)
  -h, --help                  Print this help message

Examples:
  parbreak explanation.txt
  parbreak --width 60 --tolerance 3 --format breaks notes.txt
"
        );
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum OutputFormat {
    Latex,
    Breaks,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "latex" => Ok(Self::Latex),
            "breaks" => Ok(Self::Breaks),
            other => Err(format!("unknown format '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, String> {
        Options::parse(args.iter().copied())
    }

    #[test]
    fn defaults_follow_reference_driver() {
        let opts = parse(&["text.txt"]).unwrap();
        assert_eq!(opts.input, PathBuf::from("text.txt"));
        assert_eq!(opts.width, 80.0);
        assert_eq!(opts.tolerance, 2.0);
        assert_eq!(opts.policy, BreakPolicy::Newline);
        assert_eq!(opts.format, OutputFormat::Latex);
        assert!(opts.output.is_none());
    }

    #[test]
    fn accepts_separate_and_inline_values() {
        let opts = parse(&[
            "--width",
            "60",
            "--tolerance=3.5",
            "--breaks=blank",
            "--format",
            "breaks",
            "-o",
            "out.txt",
            "in.txt",
        ])
        .unwrap();
        assert_eq!(opts.width, 60.0);
        assert_eq!(opts.tolerance, 3.5);
        assert_eq!(opts.policy, BreakPolicy::BlankLine);
        assert_eq!(opts.format, OutputFormat::Breaks);
        assert_eq!(opts.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn reports_bad_arguments() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["--width"]).is_err());
        assert!(parse(&["--width", "wide", "a.txt"]).is_err());
        assert!(parse(&["--format", "pdf", "a.txt"]).is_err());
        assert!(parse(&["--bogus", "a.txt"]).is_err());
        assert!(parse(&["a.txt", "b.txt"]).is_err());
    }
}
