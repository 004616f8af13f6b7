use crate::{
    dto::{StatusResponse, StatusUpdateRequest},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use ferrous_gslb_domain::RecordId;
use tracing::instrument;

#[instrument(skip(state), name = "api_get_status")]
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        unhealthy: state.health.unhealthy_ids(),
    })
}

#[instrument(skip(state), name = "api_mark_unhealthy")]
pub async fn mark_unhealthy(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> StatusCode {
    state.health.mark_unhealthy(id);
    StatusCode::NO_CONTENT
}

#[instrument(skip(state), name = "api_mark_healthy")]
pub async fn mark_healthy(State(state): State<AppState>, Path(id): Path<RecordId>) -> StatusCode {
    state.health.mark_healthy(id);
    StatusCode::NO_CONTENT
}

#[instrument(skip_all, name = "api_replace_status")]
pub async fn replace_status(
    State(state): State<AppState>,
    Json(request): Json<StatusUpdateRequest>,
) -> StatusCode {
    state.health.replace(request.unhealthy);
    StatusCode::NO_CONTENT
}
