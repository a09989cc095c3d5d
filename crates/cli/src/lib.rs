pub mod cli;
pub mod comments;
pub mod discovery;
pub mod document;
pub mod error;
pub mod exclude;
pub mod pattern;
pub mod reporter;
pub mod resolver;
pub mod settings;
pub mod validator;
pub mod walker;

pub use cli::{Cli, Command, OutputFormat};
pub use document::ConfigDocument;
pub use error::{Error, ExitCode, Result};
pub use exclude::ExcludeMatcher;
pub use reporter::{CollectingReporter, Reporter, StderrReporter, TracingReporter};
pub use resolver::ConfigResolver;
pub use settings::Settings;
pub use validator::{Finding, LintEngine, Validator};
pub use walker::{FileWalker, WalkStats, WalkerConfig};

#[cfg(test)]
pub mod test_utils;
