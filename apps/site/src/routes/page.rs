use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Profile;
use crate::state::AppState;
use crate::view::{current_year, DisplayMode, SitePage};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub mode: Option<String>,
}

/// GET /?mode=light|dark
pub async fn handle_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let mode = match query.mode.as_deref() {
        Some(raw) => raw
            .parse::<DisplayMode>()
            .map_err(|e| AppError::Validation(e.to_string()))?,
        None => DisplayMode::default(),
    };

    // Pages start light; a dark request is one toggle away.
    let mut page = SitePage::new(state.profile.clone());
    if page.mode() != mode {
        page.toggle();
    }
    let year = current_year();

    // Rendering is CPU-bound string building; keep it off the async workers.
    let html = tokio::task::spawn_blocking(move || page.render(year))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("page render task failed: {e}")))?;

    Ok(Html(html))
}

/// GET /profile
pub async fn handle_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(Profile::clone(&state.profile))
}
