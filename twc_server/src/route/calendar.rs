use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use twc_core::{
    error::Error,
    feed,
    waste_client::{WasteApiClient, NO_HOUSE_LETTER},
};

#[derive(Debug, Clone, Deserialize)]
pub struct QueryParams {
    #[serde(rename = "postCode")]
    post_code: String,
    #[serde(rename = "houseNumber")]
    house_number: String,
    #[serde(rename = "houseLetter")]
    house_letter: Option<String>,
}

/// Handle calendar requests.
///
/// The `postCode` and `houseNumber` must be given in the query string; the
/// `houseLetter` may be omitted for addresses without one.
pub async fn handler(
    State(client): State<Arc<WasteApiClient>>,
    Query(query_params): Query<QueryParams>,
) -> Result<Response, (StatusCode, String)> {
    let house_letter = query_params
        .house_letter
        .as_deref()
        .unwrap_or(NO_HOUSE_LETTER);
    let document = feed::get(
        &client,
        &query_params.post_code,
        &query_params.house_number,
        house_letter,
    )
    .await
    .map_err(|err| {
        let status = status_for(&err);
        if status.is_server_error() {
            tracing::error!(%err, "calendar request failed");
        }
        (status, err.to_string())
    })?;
    let response = ([(CONTENT_TYPE, "text/calendar")], document).into_response();
    Ok(response)
}

/// Map feed errors onto response statuses.
///
/// Parameter and address-cardinality problems are the caller's fault;
/// remote-contract and transport failures surface as a bad gateway, and a
/// label-table gap is a configuration defect of this service.
fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::MissingParameter(_) | Error::AmbiguousAddress(_) => StatusCode::BAD_REQUEST,
        Error::AddressNotFound => StatusCode::NOT_FOUND,
        Error::Transport(_) | Error::InvalidEnvelope(_) | Error::InvalidPayload { .. } => {
            StatusCode::BAD_GATEWAY
        }
        Error::UnknownCategory(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
