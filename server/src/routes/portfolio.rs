//! Portfolio and carousel routes.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use folio_engine::{Portfolio, Project};

use crate::error::{AppError, Result};
use crate::handlers::{
    handle_command, handle_view, CarouselView, CommandRequest, CommandResponse, ViewQuery,
};
use crate::AppState;

/// Create portfolio routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/portfolio", get(portfolio_handler))
        .route("/api/projects/{id}", get(project_handler))
        .route("/api/carousel", get(view_handler).post(command_handler))
}

/// GET /api/portfolio - Full portfolio content.
async fn portfolio_handler(State(state): State<AppState>) -> Json<Portfolio> {
    Json(state.portfolio.as_ref().clone())
}

/// GET /api/projects/{id} - A single project.
async fn project_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Project>> {
    state
        .portfolio
        .project(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))
}

/// GET /api/carousel - Frame centered on `?current=`.
async fn view_handler(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<CarouselView>> {
    let view = handle_view(&state.portfolio, &state.config.carousel, query)?;
    Ok(Json(view))
}

/// POST /api/carousel - Apply one command.
async fn command_handler(
    State(state): State<AppState>,
    Json(request): Json<CommandRequest>,
) -> Result<Json<CommandResponse>> {
    let response = handle_command(&state.portfolio, &state.config.carousel, request)?;
    Ok(Json(response))
}
