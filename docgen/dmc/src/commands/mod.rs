//! Command handlers for the docmodel CLI.
//!
//! Every command shares one pipeline: parse options, load the input files
//! into one model, run the processor, then render. Rendering functions
//! return strings so they can be tested without capturing stdout.

use std::path::PathBuf;

use dm_load::{load_paths, LoadError};
use dm_model::{Model, TypeIdx};
use dm_resolve::{ProcessReport, Processor, ProcessorConfig, UnplacedDescendant};
use thiserror::Error;

mod hierarchy;
mod members;
mod report;

pub use hierarchy::render_hierarchy;
pub use members::render_members;
pub use report::{render_report, AssemblyRow, MemberRow, ModelReport, ProblemRow, TypeRow};

/// Anything that makes a command exit with status 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for {option} (expected {expected})")]
    InvalidValue {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("no input files")]
    NoInput,

    #[error("type '{0}' is not in the loaded model")]
    UnknownType(String),

    #[error("cannot serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Options shared by all commands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandOptions {
    /// Input descriptions, loaded in order.
    pub files: Vec<PathBuf>,

    /// Restrict output to one type (`--type=<id>`).
    pub type_id: Option<String>,

    /// Pretty-print JSON output (`--pretty`).
    pub pretty: bool,

    pub config: ProcessorConfig,
}

/// Parse the arguments that follow the command name.
pub fn parse_options(args: &[String]) -> Result<CommandOptions, CliError> {
    let mut options = CommandOptions::default();

    for arg in args {
        if let Some(id) = arg.strip_prefix("--type=") {
            options.type_id = Some(id.to_string());
        } else if let Some(value) = arg.strip_prefix("--unplaced=") {
            options.config.unplaced =
                UnplacedDescendant::parse(value).ok_or_else(|| CliError::InvalidValue {
                    option: "--unplaced",
                    value: value.to_string(),
                    expected: "skip or root",
                })?;
        } else if arg == "--no-implementers" {
            options.config.link_implementers = false;
        } else if arg == "--pretty" {
            options.pretty = true;
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.clone()));
        } else {
            options.files.push(PathBuf::from(arg));
        }
    }

    if options.files.is_empty() {
        return Err(CliError::NoInput);
    }
    Ok(options)
}

/// A processed model and the report of its processing run.
#[derive(Debug)]
pub struct Session {
    pub model: Model,
    pub report: ProcessReport,
}

impl Session {
    /// Load every input file and process the resulting model.
    #[tracing::instrument(level = "debug", skip_all, fields(files = options.files.len()))]
    pub fn open(options: &CommandOptions) -> Result<Self, CliError> {
        let (mut model, registry) = load_paths(&options.files)?;
        let report = Processor::new(&mut model, &registry)
            .with_config(options.config)
            .run();
        Ok(Session { model, report })
    }

    /// Types selected by `--type`, or every type in load order.
    pub fn selected_types(&self, type_id: Option<&str>) -> Result<Vec<TypeIdx>, CliError> {
        match type_id {
            Some(id) => self
                .model
                .type_by_id(id)
                .map(|ty| vec![ty])
                .ok_or_else(|| CliError::UnknownType(id.to_string())),
            None => Ok(self.model.type_handles().collect()),
        }
    }

    /// Print collected problems to stderr.
    pub fn print_problems(&self) {
        for problem in &self.report.problems {
            eprintln!("{problem}");
        }
    }
}
