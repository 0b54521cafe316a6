//! Revision reference model

use std::fmt;

/// Separator between a symbolic name and its backward offset (`master~8`)
const OFFSET_SEPARATOR: char = '~';

/// A point in history, either absolute or relative to a symbolic name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RevisionRef {
    /// Content hash or any name git resolves directly
    Absolute(String),

    /// `base` walked `offset` first-parents back
    Relative { base: String, offset: u32 },
}

impl RevisionRef {
    /// The tip of a branch (offset zero)
    pub fn tip(branch: impl Into<String>) -> Self {
        Self::Relative {
            base: branch.into(),
            offset: 0,
        }
    }

    /// `offset` revisions behind `base`
    pub fn behind(base: impl Into<String>, offset: u32) -> Self {
        Self::Relative {
            base: base.into(),
            offset,
        }
    }

    /// Backward offset from the base, if relative
    pub fn offset(&self) -> Option<u32> {
        match self {
            Self::Absolute(_) => None,
            Self::Relative { offset, .. } => Some(*offset),
        }
    }

    /// Parse a user-supplied reference
    ///
    /// `name~N` becomes relative; anything else (including `name~` or a
    /// non-numeric suffix) is kept absolute and left for git to resolve.
    pub fn parse(input: &str) -> Self {
        if let Some((base, offset)) = input.rsplit_once(OFFSET_SEPARATOR)
            && !base.is_empty()
            && let Ok(offset) = offset.parse::<u32>()
        {
            return Self::behind(base, offset);
        }
        Self::Absolute(input.to_string())
    }
}

impl fmt::Display for RevisionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(id) => f.write_str(id),
            Self::Relative { base, offset: 0 } => f.write_str(base),
            Self::Relative { base, offset } => write!(f, "{base}{OFFSET_SEPARATOR}{offset}"),
        }
    }
}
