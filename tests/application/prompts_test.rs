use deckhand::application::services::prompts::{self, PromptConfig};

fn config() -> PromptConfig {
    PromptConfig {
        topic: "Zero-copy parsing".to_string(),
        audience: "backend engineers".to_string(),
        slide_count: 7,
        tone: "professional".to_string(),
        topic_type: "technical".to_string(),
        include_code: false,
        custom_system_prompt: None,
    }
}

#[test]
fn given_default_config_then_system_prompt_pins_the_markdown_contract() {
    let prompt = prompts::system_prompt(&config());

    assert!(prompt.contains("raw Markdown only"));
    assert!(prompt.contains("`---`"));
    assert!(prompt.contains("Note:"));
}

#[test]
fn given_custom_system_prompt_then_format_rules_are_appended() {
    let mut config = config();
    config.custom_system_prompt = Some("You are a pirate. Present accordingly.".to_string());

    let prompt = prompts::system_prompt(&config);

    assert!(prompt.starts_with("You are a pirate."));
    assert!(prompt.contains("Formatting requirements"));
    assert!(prompt.contains("`---`"));
}

#[test]
fn given_config_then_user_prompt_names_topic_count_audience_and_tone() {
    let prompt = prompts::user_prompt(&config());

    assert!(prompt.contains("\"Zero-copy parsing\""));
    assert!(prompt.contains("exactly 7 slides"));
    assert!(prompt.contains("Audience: backend engineers"));
    assert!(prompt.contains("Tone: professional"));
}

#[test]
fn given_known_tone_then_guidelines_are_included() {
    let prompt = prompts::user_prompt(&config());

    assert!(prompt.contains("polished and direct"));
}

#[test]
fn given_unknown_tone_then_no_guidelines_are_added() {
    let mut config = config();
    config.tone = "sardonic".to_string();

    let prompt = prompts::user_prompt(&config);

    assert!(prompt.contains("Tone: sardonic"));
    assert!(!prompt.contains("polished and direct"));
}

#[test]
fn given_technical_topic_type_then_deep_dive_guidance_is_included() {
    let prompt = prompts::user_prompt(&config());

    assert!(prompt.contains("technical deep dive"));
}

#[test]
fn given_include_code_then_code_instruction_is_added() {
    let mut config = config();
    config.include_code = true;

    let prompt = prompts::user_prompt(&config);

    assert!(prompt.contains("fenced blocks"));
}

#[test]
fn given_no_include_code_then_code_instruction_is_absent() {
    let prompt = prompts::user_prompt(&config());

    assert!(!prompt.contains("fenced blocks"));
}
