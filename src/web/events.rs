//! Server-sent `tariff` events for the live page

use super::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::response::sse::{Event, KeepAlive, Sse};
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::IntervalStream;

/// Event name carrying a serialized `DaySchedule`
pub const TARIFF_EVENT: &str = "tariff";

#[cfg_attr(feature = "openapi", utoipa::path(get, path = "/api/events", responses(
    (status = 200, description = "Stream of `tariff` events carrying the day schedule", content_type = "text/event-stream")
)))]
pub async fn events(State(state): State<AppState>) -> impl IntoResponse {
    let period = Duration::from_secs(state.display.refresh_interval_secs.max(1));
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // first tick fires immediately
    let stream = IntervalStream::new(interval).map(move |_| {
        Event::default()
            .event(TARIFF_EVENT)
            .json_data(state.day_schedule_now())
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
