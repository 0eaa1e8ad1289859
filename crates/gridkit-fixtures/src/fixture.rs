use std::fmt;

use gridkit_core::{GridError, Sheet};
use thiserror::Error;

/// Type alias for boxed fixtures
pub type FixtureBox = Box<dyn SpreadsheetFixture>;

/// A named, reusable test setup applied to a sheet before assertions run.
///
/// Implementations must be deterministic: applying the same fixture to the
/// same sheet state always produces the same result.
pub trait SpreadsheetFixture: fmt::Debug + Send + Sync {
    /// Apply this fixture's setup to the given sheet
    fn load_fixture(&self, sheet: &mut Sheet) -> Result<(), FixtureError>;
}

/// Errors raised while dispatching or applying fixtures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    #[error("Unknown fixture: {0}")]
    UnknownFixture(String),

    #[error(transparent)]
    Grid(#[from] GridError),
}
