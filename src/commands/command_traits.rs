//! Command pattern interfaces

use crate::split::SplitResult;

/// An executable CLI operation
pub trait Command {
    /// Execute the command
    fn execute(&self) -> SplitResult<()>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create the command the parsed arguments ask for
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A command that implements the Command trait, or a usage error
    fn create_command(&self, args: &clap::ArgMatches) -> SplitResult<Box<dyn Command + 'a>>;
}
