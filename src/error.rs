//! Failure taxonomy of a regression hunt
//!
//! Every variant is fatal to the run. None is retried: each one means a
//! precondition is broken (dirty tree, short history, flaky test).

use thiserror::Error;

use crate::git::{GitError, TraceError};
use crate::oracle::OracleError;

/// Errors that end a regression hunt
#[derive(Error, Debug)]
pub enum HuntError {
    #[error("repository command failed: {0}")]
    Repository(#[from] GitError),

    #[error("test oracle failed to run: {0}")]
    Oracle(#[from] OracleError),

    #[error("search exhausted at offset {last_offset} (ceiling {ceiling}): {reason}")]
    SearchExhausted {
        ceiling: u32,
        last_offset: u32,
        reason: String,
    },

    #[error("tests already pass at the tip {tip}")]
    TipPasses { tip: String },

    #[error("bisection inconclusive: {detail}")]
    BisectionInconclusive { detail: String },

    #[error(transparent)]
    Trace(#[from] TraceError),
}

/// Coarse classification used for reporting and exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RepositoryCommand,
    SearchExhausted,
    BisectionInconclusive,
    CulpritNotIdentified,
    MetadataParse,
    TipPasses,
}

impl ErrorKind {
    /// Process exit code for this kind (0 is reserved for success)
    pub fn exit_code(self) -> u8 {
        match self {
            Self::RepositoryCommand => 2,
            Self::SearchExhausted => 3,
            Self::BisectionInconclusive => 4,
            Self::CulpritNotIdentified => 5,
            Self::MetadataParse => 6,
            Self::TipPasses => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::RepositoryCommand => "repository command failure",
            Self::SearchExhausted => "search exhausted",
            Self::BisectionInconclusive => "bisection inconclusive",
            Self::CulpritNotIdentified => "culprit not identified",
            Self::MetadataParse => "metadata parse error",
            Self::TipPasses => "tip passes",
        }
    }
}

impl HuntError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Repository(_) | Self::Oracle(_) => ErrorKind::RepositoryCommand,
            Self::SearchExhausted { .. } => ErrorKind::SearchExhausted,
            Self::TipPasses { .. } => ErrorKind::TipPasses,
            Self::BisectionInconclusive { .. } => ErrorKind::BisectionInconclusive,
            Self::Trace(TraceError::CulpritNotIdentified) => ErrorKind::CulpritNotIdentified,
            Self::Trace(TraceError::MalformedMetadata { .. }) => ErrorKind::MetadataParse,
        }
    }
}
