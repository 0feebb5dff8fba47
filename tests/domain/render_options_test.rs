use std::str::FromStr;

use deckhand::domain::{HighlightTheme, Provider, RenderOptions, Theme, Transition};

#[test]
fn given_default_options_then_reveal_defaults_apply() {
    let options = RenderOptions::default();

    assert_eq!(options.theme, Theme::Black);
    assert_eq!(options.transition, Transition::Slide);
    assert_eq!(options.highlight_theme, HighlightTheme::Monokai);
    assert!(options.controls);
    assert!(options.progress);
    assert!(!options.slide_number);
    assert!(options.hash);
    assert!(options.center);
}

#[test]
fn given_every_theme_then_name_round_trips() {
    for theme in Theme::ALL {
        assert_eq!(Theme::from_str(theme.as_str()), Ok(theme));
        assert!(!theme.description().is_empty());
        assert_eq!(theme.display_name().to_lowercase(), theme.as_str());
    }
}

#[test]
fn given_unknown_theme_then_error_lists_valid_names() {
    let error = Theme::from_str("neon").unwrap_err();

    assert!(error.contains("Invalid theme: neon"));
    assert!(error.contains("black"));
    assert!(error.contains("moon"));
}

#[test]
fn given_every_transition_then_name_round_trips() {
    for transition in Transition::ALL {
        assert_eq!(Transition::from_str(transition.as_str()), Ok(transition));
    }
}

#[test]
fn given_unknown_transition_then_error_lists_valid_names() {
    let error = Transition::from_str("spin").unwrap_err();

    assert!(error.contains("Invalid transition: spin"));
    assert!(error.contains("slide"));
}

#[test]
fn given_every_highlight_theme_then_name_round_trips() {
    for theme in HighlightTheme::ALL {
        assert_eq!(HighlightTheme::from_str(theme.as_str()), Ok(theme));
    }
}

#[test]
fn given_hyphenated_highlight_theme_then_it_parses() {
    assert_eq!(
        HighlightTheme::from_str("github-dark"),
        Ok(HighlightTheme::GithubDark)
    );
    assert_eq!(
        HighlightTheme::from_str("atom-one-light"),
        Ok(HighlightTheme::AtomOneLight)
    );
}

#[test]
fn given_preset_lists_then_counts_match_the_catalog() {
    assert_eq!(Theme::ALL.len(), 11);
    assert_eq!(Transition::ALL.len(), 6);
    assert_eq!(HighlightTheme::ALL.len(), 8);
}

#[test]
fn given_provider_names_then_parse_round_trips() {
    for provider in [Provider::OpenAi, Provider::Anthropic, Provider::Google] {
        assert_eq!(Provider::from_str(provider.as_str()), Ok(provider));
    }
}

#[test]
fn given_unknown_provider_then_error_lists_valid_names() {
    let error = Provider::from_str("azure").unwrap_err();

    assert!(error.contains("Invalid provider: azure"));
    assert!(error.contains("openai"));
}
