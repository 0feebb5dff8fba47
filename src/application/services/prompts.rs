/// Prompt assembly for slide generation. The system prompt pins down the
/// Markdown contract the renderer depends on (slide separators, speaker
/// notes), so a caller-supplied system prompt gets the format rules appended
/// rather than trusted to restate them.
#[derive(Debug, Clone)]
pub struct PromptConfig {
    pub topic: String,
    pub audience: String,
    pub slide_count: usize,
    pub tone: String,
    pub topic_type: String,
    pub include_code: bool,
    pub custom_system_prompt: Option<String>,
}

const SYSTEM_PROMPT: &str = "\
You are an expert presentation designer. You write slide decks as clean \
Markdown for reveal.js.

Rules:
- Respond with raw Markdown only. No code fences around the deck, no \
preamble, no commentary.
- Separate slides with a line containing exactly `---`.
- The first slide is a title slide: a `#` heading plus a one-line subtitle.
- One idea per slide. At most six bullet points per slide, each a short \
phrase, with key terms in **bold**.
- End every slide with speaker notes: a line `Note:` followed by two or \
three spoken-style sentences.
- Prefer concrete examples and numbers over generalities.";

const FORMAT_REQUIREMENTS: &str = "\
Formatting requirements (these override anything above):
- Respond with raw Markdown only, no code fences around the deck.
- Separate slides with a line containing exactly `---`.
- End every slide with a `Note:` line followed by speaker notes.";

pub fn system_prompt(config: &PromptConfig) -> String {
    match &config.custom_system_prompt {
        Some(custom) => format!("{}\n\n{}", custom.trim(), FORMAT_REQUIREMENTS),
        None => SYSTEM_PROMPT.to_string(),
    }
}

pub fn user_prompt(config: &PromptConfig) -> String {
    let mut prompt = format!(
        "Create a presentation about \"{}\" with exactly {} slides.\n\nAudience: {}\nTone: {}\n",
        config.topic, config.slide_count, config.audience, config.tone
    );
    if let Some(guidelines) = tone_guidelines(&config.tone) {
        prompt.push_str(guidelines);
        prompt.push('\n');
    }
    if let Some(guidance) = topic_guidance(&config.topic_type) {
        prompt.push_str(guidance);
        prompt.push('\n');
    }
    if config.include_code {
        prompt.push_str(
            "Include short, runnable code examples in fenced blocks with a language tag where they help.\n",
        );
    }
    prompt
}

fn tone_guidelines(tone: &str) -> Option<&'static str> {
    match tone {
        "professional" => Some(
            "Keep the language polished and direct. Back claims with facts; avoid slang and filler.",
        ),
        "casual" => Some(
            "Write like you talk. Contractions are fine, humor in the speaker notes is welcome.",
        ),
        "academic" => Some(
            "Use precise terminology, cite the kind of evidence an expert would expect, and keep a measured register.",
        ),
        "energetic" => Some(
            "Short punchy lines, strong verbs, momentum from slide to slide. Make the audience lean in.",
        ),
        _ => None,
    }
}

fn topic_guidance(topic_type: &str) -> Option<&'static str> {
    match topic_type {
        "technical" => Some(
            "Treat this as a technical deep dive: architecture, trade-offs, and failure modes matter more than marketing.",
        ),
        "business" => Some(
            "Frame everything around outcomes: market, costs, risks, and the decision you want the room to make.",
        ),
        "educational" => Some(
            "Build concepts in order, define terms on first use, and close each section by reinforcing what was just learned.",
        ),
        "creative" => Some(
            "Lean on storytelling: imagery, contrast, and a narrative arc from opening hook to closing beat.",
        ),
        _ => None,
    }
}
