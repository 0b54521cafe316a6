//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and output markers.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// git subcommands
pub mod commands {
    pub const CHECKOUT: &str = "checkout";
    pub const BISECT: &str = "bisect";
    pub const LOG: &str = "log";
    pub const REV_PARSE: &str = "rev-parse";

    /// `git bisect` subcommands
    pub mod bisect {
        pub const START: &str = "start";
        pub const RUN: &str = "run";
        pub const LOG: &str = "log";
        pub const RESET: &str = "reset";
    }
}

/// git command flags
pub mod flags {
    /// Run as if git was started in the given path (global flag)
    pub const REPO_PATH: &str = "-C";
    /// Set a configuration value for one invocation (global flag)
    pub const CONFIG: &str = "-c";
    /// Disable color output for parsing
    pub const NO_COLOR: &str = "color.ui=never";
    /// Suppress progress and detached-HEAD advice
    pub const QUIET: &str = "--quiet";
    /// Limit `git log` to one commit
    pub const SINGLE: &str = "-1";
    /// Custom log format prefix (no trailing newline terminator)
    pub const PRETTY_FORMAT: &str = "--pretty=format:";
    /// Make `rev-parse` fail unless its argument names an object
    pub const VERIFY: &str = "--verify";
    /// Peel a revision to a commit (`master~5^{commit}`)
    pub const PEEL_COMMIT: &str = "^{commit}";
}

/// Environment pinned for every git invocation
pub mod env {
    /// Untranslated messages, so stderr patterns match in every locale
    pub const MESSAGE_LOCALE: &[(&str, &str)] = &[("LC_ALL", "C"), ("LANGUAGE", "C")];
}

/// Markers in bisect output
pub mod markers {
    /// Line prefix in `git bisect log` naming the culprit
    ///
    /// Example: `# first bad commit: [deadbeef...] fix bug`
    pub const FIRST_BAD_COMMIT: &str = "# first bad commit";

    /// Phrase `git bisect run` prints once it converged
    pub const CONVERGED: &str = "first bad commit";
}

/// Error detection patterns in git stderr
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";

    /// Patterns indicating a revision that does not resolve
    ///
    /// Backstop only: checkout verifies the revision through `rev-parse`'s
    /// exit status first.
    pub const UNKNOWN_REVISION: &[&str] = &[
        "did not match any file(s) known to git",
        "unknown revision",
        "invalid reference",
        "bad revision",
    ];
}
