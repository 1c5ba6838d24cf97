#![forbid(unsafe_code)]

//! Command-line argument parsing for the Prism demo.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `PRISM_DEMO_*` prefix.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Prism Demo - color picker model from the command line

USAGE:
    prism-demo [OPTIONS]

OPTIONS:
    --color=COLOR        Starting color, any CSS syntax (default: #3366cc)
    --space=ID           Color space to edit in (default: oklch)
    --format=NAME        Output format; defaults to the space's first format
    --precision=N        Significant digits, 0 for unrounded (default: 5)
    --steps=N            Samples per slider gradient (default: 10)
    --in-gamut           Map the color into gamut before printing
    --lines              Print contrast boundary line summaries
    --spaces             List the selectable color spaces and exit
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    PRISM_DEMO_COLOR        Override --color
    PRISM_DEMO_SPACE        Override --space
    PRISM_DEMO_FORMAT       Override --format
    PRISM_DEMO_PRECISION    Override --precision
    PRISM_DEMO_STEPS        Override --steps
    PRISM_DEMO_IN_GAMUT     Set to 1 to enable --in-gamut
    RUST_LOG                Log filter (default: warn)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Starting color string.
    pub color: String,
    /// Space to edit in.
    pub space: String,
    /// Output format, if chosen.
    pub format: Option<String>,
    /// Significant digits.
    pub precision: usize,
    /// Samples per gradient.
    pub steps: usize,
    /// Gamut-map before printing.
    pub in_gamut: bool,
    /// Print boundary lines.
    pub lines: bool,
    /// Only list spaces.
    pub list_spaces: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            color: "#3366cc".into(),
            space: "oklch".into(),
            format: None,
            precision: 5,
            steps: 10,
            in_gamut: false,
            lines: false,
            list_spaces: false,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Ok(val) = env::var("PRISM_DEMO_COLOR") {
            opts.color = val;
        }
        if let Ok(val) = env::var("PRISM_DEMO_SPACE") {
            opts.space = val;
        }
        if let Ok(val) = env::var("PRISM_DEMO_FORMAT") {
            opts.format = Some(val);
        }
        if let Ok(val) = env::var("PRISM_DEMO_PRECISION")
            && let Ok(n) = val.parse()
        {
            opts.precision = n;
        }
        if let Ok(val) = env::var("PRISM_DEMO_STEPS")
            && let Ok(n) = val.parse()
        {
            opts.steps = n;
        }
        if let Ok(val) = env::var("PRISM_DEMO_IN_GAMUT") {
            opts.in_gamut = val == "1" || val.eq_ignore_ascii_case("true");
        }

        // Parse command-line args (override env vars)
        let args: Vec<String> = env::args().skip(1).collect();
        match opts.apply_args(&args) {
            Ok(Action::Run) => opts,
            Ok(Action::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Action::Version) => {
                println!("prism-demo {VERSION}");
                process::exit(0);
            }
            Err(msg) => {
                eprintln!("{msg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Apply `--flag` / `--flag=value` arguments on top of the current options.
    pub fn apply_args(&mut self, args: &[String]) -> Result<Action, String> {
        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Action::Help),
                "--version" | "-V" => return Ok(Action::Version),
                "--in-gamut" => self.in_gamut = true,
                "--lines" => self.lines = true,
                "--spaces" => self.list_spaces = true,
                other => {
                    if let Some(val) = other.strip_prefix("--color=") {
                        self.color = val.to_string();
                    } else if let Some(val) = other.strip_prefix("--space=") {
                        self.space = val.to_string();
                    } else if let Some(val) = other.strip_prefix("--format=") {
                        self.format = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--precision=") {
                        self.precision = val
                            .parse()
                            .map_err(|_| format!("Invalid --precision value: {val}"))?;
                    } else if let Some(val) = other.strip_prefix("--steps=") {
                        self.steps = val
                            .parse()
                            .map_err(|_| format!("Invalid --steps value: {val}"))?;
                    } else {
                        return Err(format!("Unknown argument: {other}"));
                    }
                }
            }
        }
        Ok(Action::Run)
    }
}

/// What the binary should do after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Print the report.
    Run,
    /// Print help and exit.
    Help,
    /// Print the version and exit.
    Version,
}
