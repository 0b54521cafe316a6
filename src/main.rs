//! culprit - regression hunter for git
//!
//! Binary entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use culprit::config::{DEFAULT_BRANCH, DEFAULT_STEP_CEILING, DEFAULT_TEST_COMMAND, HuntConfig};
use culprit::git::GitExecutor;
use culprit::hunt::Hunt;
use culprit::oracle::TestCommand;
use culprit::report::StatusWriter;

/// Find the commit that broke a test suite
#[derive(clap::Parser, Debug)]
#[command(name = "culprit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Repository root
    #[arg(long, env = "CULPRIT_REPO", default_value = ".")]
    repo: PathBuf,

    /// Canonical branch; its tip is the failing revision
    #[arg(long, env = "CULPRIT_BRANCH", default_value = DEFAULT_BRANCH)]
    branch: String,

    /// Test-name pattern passed to the test command
    #[arg(long = "test", env = "CULPRIT_TEST")]
    test_pattern: String,

    /// Project name used in the notification (default: repository directory name)
    #[arg(long, env = "CULPRIT_PROJECT")]
    project: Option<String>,

    /// Largest backward offset the baseline search may try
    #[arg(long, env = "CULPRIT_MAX_STEP", default_value_t = DEFAULT_STEP_CEILING)]
    max_step: u32,

    /// Known-good revision; skips the baseline search
    #[arg(long)]
    good: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CULPRIT_LOG", default_value = "warn")]
    log_level: String,

    /// Test command; `{test}` in an argument is replaced by the pattern,
    /// otherwise the pattern is appended
    #[arg(last = true)]
    command: Vec<String>,
}

impl Cli {
    fn into_config(self) -> color_eyre::Result<HuntConfig> {
        let mut config = HuntConfig::new(self.repo, self.test_pattern);
        config.branch = self.branch;
        config.step_ceiling = self.max_step;
        config.known_good = self.good;
        if let Some(project) = self.project {
            config.project = project;
        }
        config.test_command = if self.command.is_empty() {
            vec![DEFAULT_TEST_COMMAND.to_string()]
        } else {
            self.command
        };

        let cwd = std::env::current_dir().wrap_err("cannot read current directory")?;
        config.resolve_test_program(&cwd);
        config.validate()?;
        Ok(config)
    }
}

fn log_filter(level: &str) -> color_eyre::Result<EnvFilter> {
    EnvFilter::try_new(level).wrap_err_with(|| format!("invalid log level filter {level:?}"))
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(log_filter(&cli.log_level)?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = cli.into_config()?;
    let oracle = TestCommand::new(config.test_command.clone(), config.test_pattern.clone())?;
    let repo = GitExecutor::with_repo_path(config.repo_path.clone());

    match Hunt::new(repo, oracle, config)
        .with_status(StatusWriter::stdout())
        .run()
    {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            tracing::error!(%err, "regression hunt failed");
            Ok(ExitCode::from(err.kind().exit_code()))
        }
    }
}
