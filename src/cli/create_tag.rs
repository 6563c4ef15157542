use autotag::core::{AutotagError, AutotagResult};
use autotag::di::ServiceContainer;
use std::env;

/// Create a tag pointing at a commit.
///
/// The target SHA defaults to `GITHUB_SHA`, the commit the hosting
/// automation runtime is executing against.
pub async fn run(
    container: &ServiceContainer,
    tag: &str,
    annotated: bool,
    sha: Option<String>,
) -> AutotagResult<()> {
    let sha = match sha {
        Some(sha) => sha,
        None => env::var("GITHUB_SHA").unwrap_or_default(),
    };
    if sha.is_empty() {
        return Err(AutotagError::Config(
            "No target commit: pass --sha or set GITHUB_SHA".to_string(),
        ));
    }

    container.github().create_tag(tag, annotated, &sha).await?;

    println!("✓ Created tag {} -> {}", tag, sha);
    Ok(())
}
