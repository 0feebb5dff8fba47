use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::{Client, Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{Deployer, DeployerError};
use crate::domain::{AccountInfo, DeployTarget, DeploymentResult, SiteFile};

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";

// A freshly created repository needs a moment before its git data responds.
const REPO_INIT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct GithubConfig {
    pub api_base_url: String,
    pub publish_branch: String,
    pub timeout: Duration,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            publish_branch: "gh-pages".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Publishes a site through the GitHub REST API: make sure the repository
/// and the publishing branch exist, upload each file with the contents API,
/// then switch on Pages. Every step tolerates already-done state, so
/// deploying the same target twice updates it instead of failing.
pub struct GithubPagesDeployer {
    client: Client,
    config: GithubConfig,
}

#[derive(Deserialize)]
struct UserResponse {
    login: String,
    name: Option<String>,
    public_repos: u64,
}

#[derive(Deserialize)]
struct RepoResponse {
    default_branch: String,
}

#[derive(Deserialize)]
struct GitRefResponse {
    object: GitRefObject,
}

#[derive(Deserialize)]
struct GitRefObject {
    sha: String,
}

#[derive(Deserialize)]
struct ContentsResponse {
    sha: String,
}

#[derive(Serialize)]
struct CreateRepoRequest {
    name: String,
    description: String,
    auto_init: bool,
    private: bool,
}

#[derive(Serialize)]
struct CreateRefRequest {
    #[serde(rename = "ref")]
    git_ref: String,
    sha: String,
}

#[derive(Serialize)]
struct PutContentsRequest {
    message: String,
    content: String,
    branch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<String>,
}

#[derive(Serialize)]
struct CreatePagesRequest {
    source: PagesSource,
}

#[derive(Serialize)]
struct PagesSource {
    branch: String,
    path: &'static str,
}

impl GithubPagesDeployer {
    pub fn new(config: GithubConfig) -> Result<Self, reqwest::Error> {
        // GitHub rejects requests without a User-Agent.
        let client = Client::builder()
            .user_agent(concat!("deckhand/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    fn request(&self, method: Method, path: &str, token: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.api_base_url.trim_end_matches('/'), path);
        self.client
            .request(method, url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Accept", ACCEPT_GITHUB_JSON)
    }

    async fn fetch_account(&self, token: &str) -> Result<AccountInfo, DeployerError> {
        let response = self
            .request(Method::GET, "/user", token)
            .send()
            .await
            .map_err(|e| DeployerError::CredentialValidation(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DeployerError::CredentialValidation(format!(
                "GitHub rejected the token (HTTP {})",
                response.status()
            )));
        }

        let user: UserResponse = response
            .json()
            .await
            .map_err(|e| DeployerError::CredentialValidation(e.to_string()))?;

        Ok(AccountInfo {
            login: user.login,
            name: user.name,
            public_repos: user.public_repos,
        })
    }

    async fn ensure_repository(&self, target: &DeployTarget) -> Result<RepoResponse, DeployerError> {
        let path = format!("/repos/{}/{}", target.username, target.repository);
        let response = self
            .request(Method::GET, &path, &target.token)
            .send()
            .await
            .map_err(|e| DeployerError::EnsureRepository(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(repository = %target.repository, "Repository already exists");
            return response
                .json()
                .await
                .map_err(|e| DeployerError::EnsureRepository(e.to_string()));
        }
        if status != StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            return Err(DeployerError::EnsureRepository(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        self.create_repository(target).await
    }

    async fn create_repository(&self, target: &DeployTarget) -> Result<RepoResponse, DeployerError> {
        tracing::info!(repository = %target.repository, "Creating repository");
        let body = CreateRepoRequest {
            name: target.repository.clone(),
            description: "Presentation slides published with deckhand".to_string(),
            auto_init: true,
            private: false,
        };
        let response = self
            .request(Method::POST, "/user/repos", &target.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| DeployerError::EnsureRepository(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DeployerError::EnsureRepository(format!(
                "create returned HTTP {}: {}",
                status, body
            )));
        }

        let repo: RepoResponse = response
            .json()
            .await
            .map_err(|e| DeployerError::EnsureRepository(e.to_string()))?;

        tokio::time::sleep(REPO_INIT_DELAY).await;
        Ok(repo)
    }

    async fn ensure_branch(
        &self,
        target: &DeployTarget,
        default_branch: &str,
    ) -> Result<(), DeployerError> {
        let path = format!(
            "/repos/{}/{}/branches/{}",
            target.username, target.repository, self.config.publish_branch
        );
        let response = self
            .request(Method::GET, &path, &target.token)
            .send()
            .await
            .map_err(|e| DeployerError::EnsureBranch(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(branch = %self.config.publish_branch, "Publishing branch already exists");
            return Ok(());
        }
        if status != StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            return Err(DeployerError::EnsureBranch(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let head_path = format!(
            "/repos/{}/{}/git/ref/heads/{}",
            target.username, target.repository, default_branch
        );
        let head_response = self
            .request(Method::GET, &head_path, &target.token)
            .send()
            .await
            .map_err(|e| DeployerError::EnsureBranch(e.to_string()))?;

        if !head_response.status().is_success() {
            return Err(DeployerError::EnsureBranch(format!(
                "default branch lookup returned HTTP {}",
                head_response.status()
            )));
        }

        let head: GitRefResponse = head_response
            .json()
            .await
            .map_err(|e| DeployerError::EnsureBranch(e.to_string()))?;

        let refs_path = format!("/repos/{}/{}/git/refs", target.username, target.repository);
        let body = CreateRefRequest {
            git_ref: format!("refs/heads/{}", self.config.publish_branch),
            sha: head.object.sha,
        };
        let create_response = self
            .request(Method::POST, &refs_path, &target.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| DeployerError::EnsureBranch(e.to_string()))?;

        if !create_response.status().is_success() {
            let status = create_response.status();
            let body = create_response.text().await.unwrap_or_default();
            return Err(DeployerError::EnsureBranch(format!(
                "branch create returned HTTP {}: {}",
                status, body
            )));
        }

        tracing::info!(branch = %self.config.publish_branch, "Created publishing branch");
        Ok(())
    }

    async fn fetch_content_sha(
        &self,
        target: &DeployTarget,
        file_path: &str,
    ) -> Result<Option<String>, DeployerError> {
        let path = format!(
            "/repos/{}/{}/contents/{}?ref={}",
            target.username, target.repository, file_path, self.config.publish_branch
        );
        let response = self
            .request(Method::GET, &path, &target.token)
            .send()
            .await
            .map_err(|e| DeployerError::UploadFile {
                path: file_path.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(DeployerError::UploadFile {
                path: file_path.to_string(),
                reason: format!("sha lookup returned HTTP {}", status),
            });
        }

        let contents: ContentsResponse =
            response.json().await.map_err(|e| DeployerError::UploadFile {
                path: file_path.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Some(contents.sha))
    }

    async fn put_content(
        &self,
        target: &DeployTarget,
        file: &SiteFile,
        sha: Option<String>,
    ) -> Result<reqwest::Response, DeployerError> {
        let path = format!(
            "/repos/{}/{}/contents/{}",
            target.username, target.repository, file.path
        );
        let body = PutContentsRequest {
            message: format!("Publish {}", file.path),
            content: BASE64.encode(file.content.as_bytes()),
            branch: self.config.publish_branch.clone(),
            sha,
        };
        self.request(Method::PUT, &path, &target.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| DeployerError::UploadFile {
                path: file.path.clone(),
                reason: e.to_string(),
            })
    }

    async fn upload_file(&self, target: &DeployTarget, file: &SiteFile) -> Result<(), DeployerError> {
        let sha = self.fetch_content_sha(target, &file.path).await?;
        let response = self.put_content(target, file, sha).await?;
        let status = response.status();

        if status == StatusCode::CONFLICT || status == StatusCode::UNPROCESSABLE_ENTITY {
            // The SHA went stale between lookup and write. Refetch once.
            tracing::debug!(path = %file.path, "Upload hit a stale SHA, retrying");
            let sha = self.fetch_content_sha(target, &file.path).await?;
            let retry = self.put_content(target, file, sha).await?;
            if !retry.status().is_success() {
                return Err(DeployerError::UploadFile {
                    path: file.path.clone(),
                    reason: format!("HTTP {} after retry", retry.status()),
                });
            }
            return Ok(());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeployerError::UploadFile {
                path: file.path.clone(),
                reason: format!("HTTP {}: {}", status, body),
            });
        }
        Ok(())
    }

    async fn enable_pages(&self, target: &DeployTarget) -> Result<(), DeployerError> {
        let path = format!("/repos/{}/{}/pages", target.username, target.repository);
        let body = CreatePagesRequest {
            source: PagesSource {
                branch: self.config.publish_branch.clone(),
                path: "/",
            },
        };
        let response = self
            .request(Method::POST, &path, &target.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| DeployerError::EnablePages(e.to_string()))?;

        let status = response.status();
        // 409 and 422 both mean Pages is already configured for this repo.
        if status.is_success()
            || status == StatusCode::CONFLICT
            || status == StatusCode::UNPROCESSABLE_ENTITY
        {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(DeployerError::EnablePages(format!(
            "HTTP {}: {}",
            status, body
        )))
    }
}

#[async_trait]
impl Deployer for GithubPagesDeployer {
    async fn validate_credentials(
        &self,
        username: &str,
        token: &str,
    ) -> Result<AccountInfo, DeployerError> {
        let account = self.fetch_account(token).await?;
        if !account.login.eq_ignore_ascii_case(username) {
            return Err(DeployerError::CredentialMismatch {
                claimed: username.to_string(),
                actual: account.login,
            });
        }
        Ok(account)
    }

    async fn deploy(
        &self,
        target: &DeployTarget,
        files: &[SiteFile],
    ) -> Result<DeploymentResult, DeployerError> {
        self.validate_credentials(&target.username, &target.token)
            .await?;
        let repo = self.ensure_repository(target).await?;
        self.ensure_branch(target, &repo.default_branch).await?;

        for file in files {
            self.upload_file(target, file).await?;
            tracing::debug!(path = %file.path, "Uploaded site file");
        }

        self.enable_pages(target).await?;

        let result = DeploymentResult {
            url: format!(
                "https://{}.github.io/{}",
                target.username, target.repository
            ),
            repository: format!("{}/{}", target.username, target.repository),
            branch: self.config.publish_branch.clone(),
        };
        tracing::info!(url = %result.url, "Site deployed");
        Ok(result)
    }
}
