/// Where a finished site gets published. The token is a GitHub personal
/// access token with `repo` scope for `username/repository`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeployTarget {
    pub username: String,
    pub token: String,
    pub repository: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteFile {
    pub path: String,
    pub content: String,
}

impl SiteFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentResult {
    pub url: String,
    pub repository: String,
    pub branch: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountInfo {
    pub login: String,
    pub name: Option<String>,
    pub public_repos: u64,
}
