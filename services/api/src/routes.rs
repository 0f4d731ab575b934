use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use upkeep::workflows::onboarding::linking::{
    invite_router, InviteAcceptanceService, LinkRepository, ProfileRepository,
};
use upkeep::workflows::onboarding::{
    generate_from_counts, generate_from_profile, PropertyArea, PropertyProfile, PropertyType,
    RoomCount,
};

#[derive(Debug, Deserialize)]
pub(crate) struct AreaPlanRequest {
    #[serde(default)]
    pub(crate) bedrooms: u32,
    #[serde(default)]
    pub(crate) bathrooms: f64,
    pub(crate) property_type: PropertyType,
    #[serde(default)]
    pub(crate) custom_rooms: Option<Vec<RoomCount>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AreaPlanResponse {
    pub(crate) mode: AreaPlanMode,
    pub(crate) area_count: usize,
    pub(crate) areas: Vec<PropertyArea>,
}

/// Which generator entry point produced the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum AreaPlanMode {
    Profile,
    Custom,
}

pub(crate) fn with_onboarding_routes<P, L>(
    service: Arc<InviteAcceptanceService<P, L>>,
) -> axum::Router
where
    P: ProfileRepository + 'static,
    L: LinkRepository + 'static,
{
    invite_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/onboarding/areas",
            axum::routing::post(area_plan_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn area_plan_endpoint(
    Json(payload): Json<AreaPlanRequest>,
) -> Json<AreaPlanResponse> {
    let AreaPlanRequest {
        bedrooms,
        bathrooms,
        property_type,
        custom_rooms,
    } = payload;

    let profile = PropertyProfile {
        bedrooms,
        bathrooms,
        property_type,
    };

    let (areas, mode) = match custom_rooms {
        Some(rooms) => (
            generate_from_counts(Some(&profile), &rooms),
            AreaPlanMode::Custom,
        ),
        None => (generate_from_profile(&profile), AreaPlanMode::Profile),
    };

    Json(AreaPlanResponse {
        mode,
        area_count: areas.len(),
        areas,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;

    #[tokio::test]
    async fn area_plan_endpoint_expands_profiles() {
        let request = AreaPlanRequest {
            bedrooms: 2,
            bathrooms: 1.5,
            property_type: PropertyType::Apartment,
            custom_rooms: None,
        };

        let Json(body) = area_plan_endpoint(Json(request)).await;

        assert_eq!(body.mode, AreaPlanMode::Profile);
        assert_eq!(body.area_count, 9);
        assert_eq!(body.areas[0].name, "Kitchen");
        assert_eq!(body.areas[1].name, "Living Room");
    }

    #[tokio::test]
    async fn area_plan_endpoint_honors_custom_rooms() {
        let request = AreaPlanRequest {
            bedrooms: 1,
            bathrooms: 1.0,
            property_type: PropertyType::House,
            custom_rooms: Some(vec![RoomCount {
                room_type: "garage".to_string(),
                count: 1,
            }]),
        };

        let Json(body) = area_plan_endpoint(Json(request)).await;

        assert_eq!(body.mode, AreaPlanMode::Custom);
        assert!(body.areas.iter().all(|area| area.name != "Kitchen"));
        assert_eq!(body.area_count, 3);
    }
}
