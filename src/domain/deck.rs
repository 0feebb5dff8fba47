/// A generated Markdown slide deck plus the bookkeeping clients show in
/// download UIs. Slides are separated by a `---` line of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideDeck {
    pub markdown: String,
    pub filename: String,
    pub metadata: DeckMetadata,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeckMetadata {
    pub slide_count: usize,
    pub character_count: usize,
    pub provider: String,
    pub model: String,
}

impl SlideDeck {
    pub fn from_markdown(markdown: String, topic: &str, provider: &str, model: &str) -> Self {
        let metadata = DeckMetadata {
            slide_count: split_slides(&markdown).len(),
            character_count: markdown.chars().count(),
            provider: provider.to_string(),
            model: model.to_string(),
        };
        Self {
            markdown,
            filename: deck_filename(topic),
            metadata,
        }
    }
}

/// Splits a deck into slides on `\n---\n` separators. A leading separator
/// and blank fragments are dropped, so N slides means N-1 separators.
pub fn split_slides(markdown: &str) -> Vec<&str> {
    let body = markdown.trim();
    let body = body.strip_prefix("---\n").unwrap_or(body);
    body.split("\n---\n")
        .map(str::trim)
        .filter(|slide| !slide.is_empty())
        .collect()
}

pub fn deck_filename(topic: &str) -> String {
    let stem = slug::slugify(topic);
    if stem.is_empty() {
        "presentation.md".to_string()
    } else {
        format!("{}.md", stem)
    }
}
