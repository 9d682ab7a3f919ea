//! CLI command implementations
//!
//! Positional tokens are classified first; a directory source becomes a
//! batch command, anything else a single image command.

pub mod command_traits;
pub mod cli;
pub mod arg_tokens;
pub mod split_command;
pub mod batch_command;
#[cfg(test)]
mod tests;

pub use command_traits::{Command, CommandFactory};
pub use cli::cli;
pub use arg_tokens::{parse_tokens, ParsedTokens};
pub use split_command::SplitCommand;
pub use batch_command::BatchCommand;

use std::path::PathBuf;

use clap::ArgMatches;
use log::{debug, warn};

use crate::api::Splyt;
use crate::split::{OutputLayout, SplitError, SplitOptions, SplitResult};

/// What the arguments ask for, before a command is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub source: PathBuf,
    pub destination: Option<PathBuf>,
    pub options: SplitOptions,
    /// Source is a directory
    pub batch: bool,
}

/// Factory for creating command instances based on CLI arguments
pub struct SplytCommandFactory<'a> {
    splyt: &'a Splyt,
}

impl<'a> SplytCommandFactory<'a> {
    pub fn new(splyt: &'a Splyt) -> Self {
        SplytCommandFactory { splyt }
    }

    /// Options for this run from the parsed tokens and flags
    fn options(&self, tokens: &ParsedTokens, args: &ArgMatches) -> SplitOptions {
        let mut options = SplitOptions::from_config(self.splyt.config())
            .with_metadata_switches(args.get_flag("no-copy-metadata"), args.get_flag("no-metadata"));
        options.grid = tokens.grid;
        options.aspect = tokens.aspect;
        if args.get_flag("flat") {
            options.layout = OutputLayout::Flat;
        }
        options
    }

    /// Classify the arguments into an [`Invocation`]
    ///
    /// Fails with `Usage` when no source was given and with `CannotOpen`
    /// when it does not exist.
    pub fn resolve(&self, args: &ArgMatches) -> SplitResult<Invocation> {
        let raw: Vec<String> = args
            .get_many::<String>("args")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        let tokens = parse_tokens(&raw, self.splyt.config())?;
        for warning in &tokens.warnings {
            warn!("{}", warning);
        }

        let source = tokens
            .source
            .clone()
            .ok_or_else(|| SplitError::Usage("Image file or directory must be specified".to_string()))?;
        let options = self.options(&tokens, args);
        debug!("Options: {:?}", options);

        let batch = self.splyt.is_directory(&source);
        if !batch && !source.exists() {
            return Err(SplitError::CannotOpen {
                path: source,
                reason: "no such file or directory".to_string(),
            });
        }

        Ok(Invocation {
            source,
            destination: tokens.destination,
            options,
            batch,
        })
    }
}

impl<'a> CommandFactory<'a> for SplytCommandFactory<'a> {
    fn create_command(&self, args: &ArgMatches) -> SplitResult<Box<dyn Command + 'a>> {
        let invocation = self.resolve(args)?;
        if invocation.batch {
            Ok(Box::new(BatchCommand::new(
                self.splyt,
                invocation.source,
                invocation.destination,
                invocation.options,
            )))
        } else {
            Ok(Box::new(SplitCommand::new(
                self.splyt,
                invocation.source,
                invocation.destination,
                invocation.options,
            )))
        }
    }
}

