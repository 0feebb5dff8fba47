pub mod github;
pub mod llm;
pub mod observability;
pub mod persistence;
