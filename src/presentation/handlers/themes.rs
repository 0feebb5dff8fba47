use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::{HighlightTheme, Theme, Transition};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeCatalogResponse {
    pub themes: Vec<ThemeEntry>,
    pub transitions: Vec<&'static str>,
    pub highlight_themes: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct ThemeEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub async fn themes_handler() -> impl IntoResponse {
    let response = ThemeCatalogResponse {
        themes: Theme::ALL
            .iter()
            .map(|theme| ThemeEntry {
                id: theme.as_str(),
                name: theme.display_name(),
                description: theme.description(),
            })
            .collect(),
        transitions: Transition::ALL.iter().map(|t| t.as_str()).collect(),
        highlight_themes: HighlightTheme::ALL.iter().map(|t| t.as_str()).collect(),
    };
    (StatusCode::OK, Json(response))
}
