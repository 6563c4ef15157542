use autotag::core::AutotagResult;
use autotag::di::ServiceContainer;

/// Print the commits in the range `base...head` as JSON on stdout.
pub async fn run(container: &ServiceContainer, base: &str, head: &str) -> AutotagResult<()> {
    let commits = container.github().compare_commits(base, head).await?;
    tracing::debug!(count = commits.len(), "Fetched commit range");

    println!("{}", serde_json::to_string_pretty(&commits)?);
    Ok(())
}
