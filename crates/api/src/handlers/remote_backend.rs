use crate::{dto::RemoteBackendResponse, state::AppState};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    Json,
};
use ferrous_gslb_domain::LookupQuery;
use tracing::{debug, error, instrument};

/// Remote-backend entry point.
///
/// Only `/<prefix>/lookup/<qname>/<qtype>` is served; every other path under
/// the prefix gets `{"result":false}`.
#[instrument(skip_all, name = "api_remote_backend", fields(path = %uri.path()))]
pub async fn remote_backend(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> (StatusCode, Json<RemoteBackendResponse>) {
    let Some(query) = parse_lookup_path(uri.path()) else {
        debug!("Not a lookup request");
        return (StatusCode::OK, Json(RemoteBackendResponse::rejected()));
    };

    let client_address = headers
        .get(&state.client_address_header)
        .and_then(|value| value.to_str().ok());

    match state.lookup.execute(&query, client_address).await {
        Ok(records) => (StatusCode::OK, Json(RemoteBackendResponse::records(records))),
        Err(e) => {
            error!(error = %e, "Lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RemoteBackendResponse::rejected()),
            )
        }
    }
}

/// Recognizes a lookup path: exactly four segments, the second being `lookup`.
pub fn parse_lookup_path(path: &str) -> Option<LookupQuery> {
    let segments: Vec<&str> = path.strip_prefix('/').unwrap_or(path).split('/').collect();

    match segments.as_slice() {
        [_, "lookup", qname, qtype] => Some(LookupQuery::new(*qname, *qtype)),
        _ => None,
    }
}
