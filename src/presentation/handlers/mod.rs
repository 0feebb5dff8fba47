mod github_validate;
mod health;
mod job_status;
mod submit;
mod themes;

pub use github_validate::github_validate_handler;
pub use health::health_handler;
pub use job_status::job_status_handler;
pub use submit::submit_handler;
pub use themes::themes_handler;
