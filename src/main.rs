use autotag::core::AutotagError;
use autotag::di::ServiceContainer;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "autotag")]
#[command(about = "Tag and commit automation for GitHub repositories")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List version tags for the current repository
    ListTags {
        /// Fetch every page instead of only the first 100 tags
        #[arg(short, long)]
        all: bool,
    },
    /// List the commits between two refs (base excluded, head included)
    Compare {
        /// Base ref (the older commit)
        base: String,
        /// Head ref (the newer commit)
        head: String,
    },
    /// Create a tag pointing at a commit
    CreateTag {
        /// Tag name (without the refs/tags/ prefix)
        tag: String,
        /// Target commit SHA (defaults to GITHUB_SHA)
        #[arg(short, long)]
        sha: Option<String>,
        /// Create an annotated tag object instead of a lightweight tag
        #[arg(short, long)]
        annotated: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // One credential exchange per run; every command reuses the handle.
    let container = match ServiceContainer::new().await {
        Ok(container) => container,
        Err(e) => return report_failure(&e),
    };

    let result = match cli.command {
        Commands::ListTags { all } => cli::list_tags::run(&container, all).await,
        Commands::Compare { base, head } => cli::compare::run(&container, &base, &head).await,
        Commands::CreateTag {
            tag,
            sha,
            annotated,
        } => cli::create_tag::run(&container, &tag, annotated, sha).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e),
    }
}

/// Print the error with remediation hints and pick the exit code.
///
/// An existing tag exits with 3 so workflow steps can tell "tag already
/// exists" apart from genuine failures.
fn report_failure(error: &AutotagError) -> ExitCode {
    eprintln!("\n{}", autotag::format_error_with_help(error));

    match error {
        AutotagError::Conflict(_) => ExitCode::from(3),
        _ => ExitCode::FAILURE,
    }
}
