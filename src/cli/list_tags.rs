use autotag::core::AutotagResult;
use autotag::di::ServiceContainer;

/// List the repository's version tags as JSON on stdout.
pub async fn run(container: &ServiceContainer, all: bool) -> AutotagResult<()> {
    let tags = container.github().list_tags(all).await?;
    tracing::debug!(count = tags.len(), "Fetched tags");

    println!("{}", serde_json::to_string_pretty(&tags)?);
    Ok(())
}
