use std::fmt;
use std::str::FromStr;

/// Knobs forwarded into the reveal.js initialization block. Defaults match
/// what reveal.js itself ships, except `slide_number` which stays off.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub theme: Theme,
    pub transition: Transition,
    pub highlight_theme: HighlightTheme,
    pub controls: bool,
    pub progress: bool,
    pub slide_number: bool,
    pub hash: bool,
    pub center: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            transition: Transition::default(),
            highlight_theme: HighlightTheme::default(),
            controls: true,
            progress: true,
            slide_number: false,
            hash: true,
            center: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Black,
    White,
    League,
    Beige,
    Sky,
    Night,
    Serif,
    Simple,
    Solarized,
    Blood,
    Moon,
}

impl Theme {
    pub const ALL: [Theme; 11] = [
        Theme::Black,
        Theme::White,
        Theme::League,
        Theme::Beige,
        Theme::Sky,
        Theme::Night,
        Theme::Serif,
        Theme::Simple,
        Theme::Solarized,
        Theme::Blood,
        Theme::Moon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Black => "black",
            Theme::White => "white",
            Theme::League => "league",
            Theme::Beige => "beige",
            Theme::Sky => "sky",
            Theme::Night => "night",
            Theme::Serif => "serif",
            Theme::Simple => "simple",
            Theme::Solarized => "solarized",
            Theme::Blood => "blood",
            Theme::Moon => "moon",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Black => "Black",
            Theme::White => "White",
            Theme::League => "League",
            Theme::Beige => "Beige",
            Theme::Sky => "Sky",
            Theme::Night => "Night",
            Theme::Serif => "Serif",
            Theme::Simple => "Simple",
            Theme::Solarized => "Solarized",
            Theme::Blood => "Blood",
            Theme::Moon => "Moon",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Theme::Black => "Black background, white text - Classic and professional",
            Theme::White => "White background, black text - Clean and minimal",
            Theme::League => "Gray background, white text - Modern and sleek",
            Theme::Beige => "Beige background, dark text - Warm and inviting",
            Theme::Sky => "Blue gradient background - Fresh and energetic",
            Theme::Night => "Dark background, thick white text - Bold and dramatic",
            Theme::Serif => "Cappuccino background, gray text - Traditional and elegant",
            Theme::Simple => "White background, black text - Minimalist design",
            Theme::Solarized => "Cream-colored background - Easy on the eyes",
            Theme::Blood => "Dark background, red accents - Striking and memorable",
            Theme::Moon => "Dark blue background - Professional night theme",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid theme: {}. Valid themes: {}",
                    s,
                    Theme::ALL.map(|t| t.as_str()).join(", ")
                )
            })
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Transition {
    None,
    Fade,
    #[default]
    Slide,
    Convex,
    Concave,
    Zoom,
}

impl Transition {
    pub const ALL: [Transition; 6] = [
        Transition::None,
        Transition::Fade,
        Transition::Slide,
        Transition::Convex,
        Transition::Concave,
        Transition::Zoom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Transition::None => "none",
            Transition::Fade => "fade",
            Transition::Slide => "slide",
            Transition::Convex => "convex",
            Transition::Concave => "concave",
            Transition::Zoom => "zoom",
        }
    }
}

impl FromStr for Transition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Transition::ALL
            .into_iter()
            .find(|transition| transition.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid transition: {}. Valid transitions: {}",
                    s,
                    Transition::ALL.map(|t| t.as_str()).join(", ")
                )
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HighlightTheme {
    #[default]
    Monokai,
    Zenburn,
    Vs,
    Github,
    GithubDark,
    AtomOneDark,
    AtomOneLight,
    Dracula,
}

impl HighlightTheme {
    pub const ALL: [HighlightTheme; 8] = [
        HighlightTheme::Monokai,
        HighlightTheme::Zenburn,
        HighlightTheme::Vs,
        HighlightTheme::Github,
        HighlightTheme::GithubDark,
        HighlightTheme::AtomOneDark,
        HighlightTheme::AtomOneLight,
        HighlightTheme::Dracula,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HighlightTheme::Monokai => "monokai",
            HighlightTheme::Zenburn => "zenburn",
            HighlightTheme::Vs => "vs",
            HighlightTheme::Github => "github",
            HighlightTheme::GithubDark => "github-dark",
            HighlightTheme::AtomOneDark => "atom-one-dark",
            HighlightTheme::AtomOneLight => "atom-one-light",
            HighlightTheme::Dracula => "dracula",
        }
    }
}

impl FromStr for HighlightTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HighlightTheme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid highlight theme: {}. Valid highlight themes: {}",
                    s,
                    HighlightTheme::ALL.map(|t| t.as_str()).join(", ")
                )
            })
    }
}
