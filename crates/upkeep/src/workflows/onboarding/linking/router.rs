use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::ExternalUserId;
use super::repository::{LinkRepository, ProfileRepository};
use super::service::{InviteAcceptanceError, InviteAcceptanceService};
use crate::workflows::onboarding::invite::parse_invite_url;

/// Router builder exposing HTTP endpoints for invite preview and acceptance.
pub fn invite_router<P, L>(service: Arc<InviteAcceptanceService<P, L>>) -> Router
where
    P: ProfileRepository + 'static,
    L: LinkRepository + 'static,
{
    Router::new()
        .route("/api/v1/invites/preview", post(preview_handler))
        .route("/api/v1/invites/accept", post(accept_handler::<P, L>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct PreviewInviteRequest {
    pub(crate) invite_url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AcceptInviteRequest {
    pub(crate) invite_url: String,
    pub(crate) external_user_id: String,
}

/// Resolve an invite link without accepting it, so the app can show what the
/// caller is about to join.
pub(crate) async fn preview_handler(
    axum::Json(request): axum::Json<PreviewInviteRequest>,
) -> Response {
    match parse_invite_url(&request.invite_url) {
        Ok(reference) => {
            let payload = json!({ "property_id": reference.0 });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn accept_handler<P, L>(
    State(service): State<Arc<InviteAcceptanceService<P, L>>>,
    axum::Json(request): axum::Json<AcceptInviteRequest>,
) -> Response
where
    P: ProfileRepository + 'static,
    L: LinkRepository + 'static,
{
    let reference = match parse_invite_url(&request.invite_url) {
        Ok(reference) => reference,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    let caller = ExternalUserId(request.external_user_id);
    match service.accept(&caller, &reference) {
        Ok(receipt) => (StatusCode::OK, axum::Json(receipt)).into_response(),
        Err(error @ InviteAcceptanceError::ProfileUnavailable(_)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
