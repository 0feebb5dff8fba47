//! Turns a topic into a published reveal.js slide deck: LLM-backed Markdown
//! generation, static HTML rendering, and optional GitHub Pages deployment,
//! tracked through asynchronously polled jobs.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
