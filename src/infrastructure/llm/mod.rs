mod anthropic;
mod google;
mod live_generator;
mod openai;

pub use live_generator::{GeneratorConfig, LiveSlideGenerator};
