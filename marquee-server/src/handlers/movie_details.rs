use std::{convert::Infallible, time::Duration};

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::sse::{Event, KeepAlive, Sse},
};
use futures::{Stream, StreamExt};
use marquee_core::AggregatorEvent;
use marquee_model::{DetailViewModel, MovieId};
use serde_json::json;
use tracing::error;

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

/// `GET /api/movies/{id}`: one-shot aggregation.
pub async fn movie_details_handler(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> AppResult<Json<DetailViewModel>> {
    let Path(id) = path?;
    let model = state.aggregator().aggregate(MovieId(id)).await?;
    Ok(Json(model))
}

/// `GET /api/movies/{id}/events`: one page view as server-sent events.
///
/// Emits `details` or `error`, then `trailer_ready` once the settle delay has
/// passed. Closing the connection drops the stream, which cancels the view.
pub async fn movie_events_handler(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> AppResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let Path(id) = path?;
    let stream = state
        .aggregator()
        .events(MovieId(id))
        .map(|event| Ok(to_sse_event(event)));

    Ok(Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keepalive"),
    ))
}

fn to_sse_event(event: AggregatorEvent) -> Event {
    let encoded = match event {
        AggregatorEvent::Loaded(model) => {
            Event::default().event("details").json_data(&*model)
        }
        AggregatorEvent::Failed(err) => {
            let err = AppError::from(err);
            Event::default().event("error").json_data(err.body())
        }
        AggregatorEvent::TrailerReady {
            movie_id,
            embed_url,
        } => Event::default().event("trailer_ready").json_data(json!({
            "movie_id": movie_id,
            "embed_url": embed_url,
        })),
    };

    encoded.unwrap_or_else(|err| {
        error!(error = %err, "failed to encode detail event");
        let fallback = AppError::internal("failed to encode event");
        Event::default()
            .event("error")
            .data(fallback.body().to_string())
    })
}
