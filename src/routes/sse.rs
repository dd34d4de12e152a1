use crate::state::CorduroyState;
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::Stream;
use std::convert::Infallible;
use tokio_stream::{StreamExt, wrappers::BroadcastStream};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SseEvent {
    StudentsLoaded,
}

impl SseEvent {
    /// What htmx listens for, as in `hx-trigger="sse:students_loaded"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::StudentsLoaded => "students_loaded",
        }
    }
}

pub async fn sse_feed(
    State(state): State<CorduroyState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(state.subscribe_to_sse_feed())
        .filter_map(Result::ok) //lagged receivers just skip ahead
        .map(|event| Ok::<_, Infallible>(Event::default().event(event.name()).data("")));

    Sse::new(stream).keep_alive(KeepAlive::default())
}
