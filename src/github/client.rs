//! GitHub API client implementation

use crate::config::Config;
use crate::core::{AutotagError, AutotagResult};
use crate::di::traits::GitHubProvider;
use crate::github::types::{ApiErrorBody, Commit, Comparison, Tag, TagObject};
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient, Response, StatusCode};
use serde_json::json;
use std::time::Duration;

/// Tags requested per page. A page shorter than this marks the end of the
/// sequence.
const TAGS_PER_PAGE: usize = 100;

/// GitHub API client, bound to one repository and one installation token.
pub struct GitHubClient {
    http_client: HttpClient,
    api_url: String,
    owner: String,
    repo: String,
}

impl GitHubClient {
    /// Create a new GitHub client authenticated with `token`.
    pub fn new(config: &Config, token: &str) -> AutotagResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static("autotag"));
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| AutotagError::Auth(format!("Invalid installation token: {}", e)))?,
        );

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http_client,
            api_url: config.api_url.clone(),
            owner: config.owner.clone(),
            repo: config.repo.clone(),
        })
    }

    /// List tags for the configured repository.
    ///
    /// Pages of 100 are fetched sequentially, one awaited before the next
    /// is requested, and concatenated in fetch order. A page shorter than
    /// 100 items ends the sequence; when `fetch_all` is false only the
    /// first page is returned regardless of size. Any error aborts the
    /// whole listing with no partial result.
    pub async fn list_tags(&self, fetch_all: bool) -> AutotagResult<Vec<Tag>> {
        let mut tags: Vec<Tag> = Vec::new();
        let mut page: u32 = 1;

        loop {
            let url = format!(
                "{}/repos/{}/{}/tags?per_page={}&page={}",
                self.api_url, self.owner, self.repo, TAGS_PER_PAGE, page
            );
            tracing::debug!(page, "Fetching tag page");

            let page_tags: Vec<Tag> = self.api_get(&url).await?;
            let last_page = page_tags.len() < TAGS_PER_PAGE;
            tags.extend(page_tags);

            if last_page || !fetch_all {
                break;
            }
            page += 1;
        }

        Ok(tags)
    }

    /// Compare `base_ref...head_ref` and return the commits in the range.
    ///
    /// The base is treated as the ancestor (excluded) and the head as the
    /// descendant (included), per the API's own comparison semantics.
    pub async fn compare_commits(&self, base_ref: &str, head_ref: &str) -> AutotagResult<Vec<Commit>> {
        tracing::debug!(base = %base_ref, head = %head_ref, "Comparing commits");

        let url = format!(
            "{}/repos/{}/{}/compare/{}...{}",
            self.api_url,
            self.owner,
            self.repo,
            urlencoding::encode(base_ref),
            urlencoding::encode(head_ref)
        );

        let comparison: Comparison = self.api_get(&url).await?;
        Ok(comparison.commits)
    }

    /// Create `refs/tags/<new_tag>` pointing at `commit_sha`.
    ///
    /// With `annotated` set, an annotated tag object is created first (its
    /// message equals the tag name) and the reference targets that object
    /// instead of the commit. If the reference creation then fails, the
    /// tag object is left orphaned; no cleanup is attempted.
    pub async fn create_tag(
        &self,
        new_tag: &str,
        annotated: bool,
        commit_sha: &str,
    ) -> AutotagResult<()> {
        let mut target_sha = commit_sha.to_string();

        if annotated {
            tracing::debug!(tag = %new_tag, "Creating annotated tag object");
            let url = format!("{}/repos/{}/{}/git/tags", self.api_url, self.owner, self.repo);
            let tag_object: TagObject = self
                .api_post(
                    &url,
                    &json!({
                        "tag": new_tag,
                        "message": new_tag,
                        "object": commit_sha,
                        "type": "commit",
                    }),
                )
                .await?;
            target_sha = tag_object.sha;
        }

        tracing::debug!(tag = %new_tag, sha = %target_sha, "Pushing tag reference");
        let url = format!("{}/repos/{}/{}/git/refs", self.api_url, self.owner, self.repo);
        let _: serde_json::Value = self
            .api_post(
                &url,
                &json!({
                    "ref": format!("refs/tags/{}", new_tag),
                    "sha": target_sha,
                }),
            )
            .await?;

        Ok(())
    }

    /// Make an API GET request and parse the JSON response.
    async fn api_get<T: serde::de::DeserializeOwned>(&self, url: &str) -> AutotagResult<T> {
        let response = self.http_client.get(url).send().await?;
        Self::parse_response(response).await
    }

    /// Make an API POST request with a JSON body and parse the response.
    async fn api_post<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> AutotagResult<T> {
        let response = self.http_client.post(url).json(body).send().await?;
        Self::parse_response(response).await
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(response: Response) -> AutotagResult<T> {
        if !response.status().is_success() {
            return Err(Self::classify_error(response).await);
        }
        Ok(response.json().await?)
    }

    /// Map a non-success response onto the error taxonomy.
    async fn classify_error(response: Response) -> AutotagError {
        let status = response.status();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AutotagError::Auth(message),
            StatusCode::NOT_FOUND => AutotagError::NotFound(message),
            StatusCode::CONFLICT => AutotagError::Conflict(message),
            // The refs endpoint reports an existing tag as 422.
            StatusCode::UNPROCESSABLE_ENTITY if message.contains("already exists") => {
                AutotagError::Conflict(message)
            }
            _ => AutotagError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl GitHubProvider for GitHubClient {
    async fn list_tags(&self, fetch_all: bool) -> AutotagResult<Vec<Tag>> {
        Self::list_tags(self, fetch_all).await
    }

    async fn compare_commits(&self, base_ref: &str, head_ref: &str) -> AutotagResult<Vec<Commit>> {
        Self::compare_commits(self, base_ref, head_ref).await
    }

    async fn create_tag(
        &self,
        new_tag: &str,
        annotated: bool,
        commit_sha: &str,
    ) -> AutotagResult<()> {
        Self::create_tag(self, new_tag, annotated, commit_sha).await
    }
}
