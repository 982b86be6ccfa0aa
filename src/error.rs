//! Usage errors caught after argument parsing.

use thiserror::Error;

/// Flag combinations rejected before any computation or file open.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("-o cannot be used with --partial")]
    PartialToFile,
}
