use crate::domain::{split_slides, RenderOptions};

const REVEAL_VERSION: &str = "5.0.4";
const REVEAL_CDN: &str = "https://cdn.jsdelivr.net/npm/reveal.js";

/// Renders a Markdown deck into a single self-contained reveal.js page.
/// Each slide becomes its own `<section data-markdown>` so the browser-side
/// Markdown plugin handles the formatting; assets load from the CDN.
pub fn render_html(markdown: &str, options: &RenderOptions) -> String {
    let sections = split_slides(markdown)
        .iter()
        .map(|slide| slide_section(slide))
        .collect::<Vec<_>>()
        .join("\n");

    // reveal.js takes a format string like 'c/t' or the literal false here.
    let slide_number = if options.slide_number { "'c/t'" } else { "false" };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Presentation</title>
<link rel="stylesheet" href="{cdn}@{version}/dist/reveal.css">
<link rel="stylesheet" href="{cdn}@{version}/dist/theme/{theme}.css">
<link rel="stylesheet" href="{cdn}@{version}/plugin/highlight/{highlight}.css">
</head>
<body>
<div class="reveal">
<div class="slides">
{sections}
</div>
</div>
<script src="{cdn}@{version}/dist/reveal.js"></script>
<script src="{cdn}@{version}/plugin/markdown/markdown.js"></script>
<script src="{cdn}@{version}/plugin/highlight/highlight.js"></script>
<script src="{cdn}@{version}/plugin/notes/notes.js"></script>
<script>
Reveal.initialize({{
  controls: {controls},
  progress: {progress},
  slideNumber: {slide_number},
  hash: {hash},
  center: {center},
  transition: '{transition}',
  plugins: [RevealMarkdown, RevealHighlight, RevealNotes]
}});
</script>
</body>
</html>
"#,
        cdn = REVEAL_CDN,
        version = REVEAL_VERSION,
        theme = options.theme.as_str(),
        highlight = options.highlight_theme.as_str(),
        sections = sections,
        controls = options.controls,
        progress = options.progress,
        slide_number = slide_number,
        hash = options.hash,
        center = options.center,
        transition = options.transition.as_str(),
    )
}

fn slide_section(slide: &str) -> String {
    format!("<section data-markdown>\n<textarea data-template>\n{slide}\n</textarea>\n</section>")
}
