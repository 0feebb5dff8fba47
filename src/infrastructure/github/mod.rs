mod pages_deployer;

pub use pages_deployer::{GithubConfig, GithubPagesDeployer};
