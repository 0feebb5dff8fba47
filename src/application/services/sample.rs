use crate::domain::SlideDeck;

/// Builds a deterministic deck without touching any provider. Output honors
/// the same Markdown contract as generated decks: `---` separators between
/// slides and a `Note:` block on every slide.
pub fn generate_deck(topic: &str, slide_count: usize) -> SlideDeck {
    let slides = build_slides(topic, slide_count.max(1));
    let markdown = slides.join("\n\n---\n\n");
    SlideDeck::from_markdown(markdown, topic, "sample", "sample")
}

fn build_slides(topic: &str, count: usize) -> Vec<String> {
    let mut slides = Vec::with_capacity(count);
    slides.push(title_slide(topic));
    if count == 1 {
        return slides;
    }
    if count >= 3 {
        slides.push(agenda_slide(topic));
    }
    for point in 1..=count.saturating_sub(3) {
        slides.push(body_slide(topic, point));
    }
    slides.push(closing_slide(topic));
    slides
}

fn title_slide(topic: &str) -> String {
    format!(
        "# {topic}\n\n## A Guided Overview\n\nNote:\nWelcome everyone and introduce the topic: {topic}. Set expectations for what the next few minutes cover."
    )
}

fn agenda_slide(topic: &str) -> String {
    format!(
        "## Agenda\n\n- Where **{topic}** came from\n- How it works today\n- What to take away\n\nNote:\nWalk through the agenda briefly so the audience knows the shape of the talk."
    )
}

fn body_slide(topic: &str, point: usize) -> String {
    format!(
        "## Key Point {point}\n\n- **{topic}** insight number {point}\n- A supporting detail worth saying out loud\n- A concrete example that anchors it\n\nNote:\nExpand on key point {point} with a short story or example from practice."
    )
}

fn closing_slide(topic: &str) -> String {
    format!(
        "## Takeaways\n\n- {topic}: the essentials in one line\n- Questions worth exploring next\n- Thank you!\n\nNote:\nSummarize the core message and open the floor for questions."
    )
}
