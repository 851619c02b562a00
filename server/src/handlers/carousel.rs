//! Carousel handler - stateless reducer steps over the portfolio projects.
//!
//! The client owns the current index. Each request carries it, the server
//! rebuilds a carousel around it, applies at most one command, and returns
//! the resulting frame.

use crate::error::Result;
use folio_engine::{
    CarouselConfig, Command, Portfolio, PositionDescriptor, Project, Showcase, Transition,
};
use serde::{Deserialize, Serialize};

/// Query parameters for a carousel view.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewQuery {
    /// Centered index; the configured start index when absent
    pub current: Option<usize>,
}

/// Request body for a carousel step.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRequest {
    /// Centered index before the command
    pub current_index: Option<usize>,
    /// Command to apply
    pub command: Command,
}

/// A project with its placement in the current frame.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedProject {
    pub index: usize,
    pub project: Project,
    pub position: PositionDescriptor,
    /// CSS `transform` value for the position
    pub transform: String,
}

/// Everything needed to render the carousel.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselView {
    pub current_index: usize,
    pub total_items: usize,
    pub items: Vec<PlacedProject>,
    /// One entry per indicator dot, `true` for the centered project
    pub indicators: Vec<bool>,
}

/// Response for a carousel step.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    pub transition: Transition,
    pub view: CarouselView,
}

fn showcase<'a>(
    portfolio: &'a Portfolio,
    config: &CarouselConfig,
    current: Option<usize>,
) -> Result<Showcase<&'a Project>> {
    let config = CarouselConfig {
        initial_index: current.or(config.initial_index),
        ..config.clone()
    };
    Ok(portfolio.showcase(config)?)
}

fn view(showcase: &Showcase<&Project>) -> CarouselView {
    let items = showcase
        .frame()
        .map(|placed| PlacedProject {
            index: placed.index,
            project: (*placed.item).clone(),
            position: placed.position,
            transform: placed.position.css_transform(),
        })
        .collect();

    CarouselView {
        current_index: showcase.carousel().current_index(),
        total_items: showcase.len(),
        items,
        indicators: showcase.carousel().indicators().collect(),
    }
}

/// Build the view centered on `query.current`.
pub fn handle_view(
    portfolio: &Portfolio,
    config: &CarouselConfig,
    query: ViewQuery,
) -> Result<CarouselView> {
    let showcase = showcase(portfolio, config, query.current)?;
    Ok(view(&showcase))
}

/// Apply one command and return the transition with the new view.
pub fn handle_command(
    portfolio: &Portfolio,
    config: &CarouselConfig,
    request: CommandRequest,
) -> Result<CommandResponse> {
    let mut showcase = showcase(portfolio, config, request.current_index)?;
    let transition = showcase.controller_mut().apply(request.command)?;

    tracing::debug!(
        from = transition.from,
        to = transition.to,
        "Carousel command applied"
    );

    Ok(CommandResponse {
        transition,
        view: view(&showcase),
    })
}
