//! Command-line configuration.
//!
//! Arguments are parsed by hand: the surface is three subcommands and a
//! couple of verbosity flags. Environment variables are read once, up front,
//! and take precedence over the flags.

/// Holds an `EnvFilter` directive, e.g. `sift_eval=trace`.
pub const LOG_ENV: &str = "SIFT_LOG";

/// Set to `1` to use hierarchical span output.
pub const LOG_TREE_ENV: &str = "SIFT_LOG_TREE";

/// Default log verbosity, raised by `-v` and `--trace`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    #[default]
    Quiet,
    Verbose,
    Trace,
}

impl Verbosity {
    fn directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Verbose => "debug",
            Verbosity::Trace => "trace",
        }
    }
}

/// Logging configuration for a `siftc` run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub verbosity: Verbosity,
    /// Explicit filter directive from the environment; overrides `verbosity`.
    pub log_filter: Option<String>,
    /// Hierarchical (`tracing-tree`) output instead of flat lines.
    pub tree: bool,
}

impl CliConfig {
    /// Configuration seeded from `SIFT_LOG` and `SIFT_LOG_TREE`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        CliConfig {
            verbosity: Verbosity::default(),
            log_filter: var(LOG_ENV).filter(|s| !s.trim().is_empty()),
            tree: var(LOG_TREE_ENV).is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true")),
        }
    }

    /// The filter directive to install.
    pub fn filter_directive(&self) -> &str {
        self.log_filter
            .as_deref()
            .unwrap_or_else(|| self.verbosity.directive())
    }
}

/// A parsed subcommand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// List the demonstrations.
    List,
    /// Run the named demonstrations; all of them when empty.
    Run(Vec<String>),
    /// Print usage.
    Help,
}

/// Malformed command line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("`{command}` takes no arguments, got `{arg}`")]
    UnexpectedArgument { command: &'static str, arg: String },
}

/// Parse `args` (without the program name), applying flags to `config`.
///
/// Flags may appear anywhere on the line.
pub fn parse_args(args: &[String], config: &mut CliConfig) -> Result<Command, UsageError> {
    let mut positional = Vec::new();
    for arg in args {
        match arg.as_str() {
            "-v" | "--verbose" => config.verbosity = config.verbosity.max(Verbosity::Verbose),
            "--trace" => config.verbosity = Verbosity::Trace,
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with('-') => return Err(UsageError::UnknownOption(flag.to_string())),
            _ => positional.push(arg.clone()),
        }
    }

    let mut positional = positional.into_iter();
    let Some(command) = positional.next() else {
        return Ok(Command::Help);
    };
    match command.as_str() {
        "run" => Ok(Command::Run(positional.collect())),
        "list" => match positional.next() {
            Some(arg) => Err(UsageError::UnexpectedArgument {
                command: "list",
                arg,
            }),
            None => Ok(Command::List),
        },
        "help" => Ok(Command::Help),
        _ => Err(UsageError::UnknownCommand(command)),
    }
}
