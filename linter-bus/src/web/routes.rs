//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::warn;

use crate::agency::AgencyMetadata;
use crate::domain::{RawRoute, RawStop, RouteId, RuleError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/agency", get(agency))
        .route("/routes/short-name", post(route_short_name))
        .route("/routes/:route/id", get(route_id))
        .route("/routes/:route/long-name", get(route_long_name))
        .route("/stops/id", post(stop_id))
        .route("/labels/headsign", post(clean_headsign))
        .route("/labels/stop-name", post(clean_stop_name))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Agency metadata and pipeline flags.
async fn agency(State(state): State<AppState>) -> Json<AgencyMetadata> {
    Json(state.rules.metadata().clone())
}

/// Resolve the route ID for a short name.
async fn route_id(
    State(state): State<AppState>,
    Path(route_short_name): Path<String>,
) -> Result<Json<RouteIdResponse>, AppError> {
    let route_id = state
        .rules
        .route_id_from_short_name(&route_short_name)
        .ok_or_else(|| AppError::NotFound {
            message: format!("No route ID for short name: {route_short_name}"),
        })?;

    Ok(Json(RouteIdResponse {
        route_short_name,
        route_id,
    }))
}

/// Resolve the published short name of a route.
async fn route_short_name(
    State(state): State<AppState>,
    Json(route): Json<RawRoute>,
) -> Result<Json<ShortNameResponse>, AppError> {
    let short_name = state.rules.route_short_name(&route)?;
    Ok(Json(ShortNameResponse { short_name }))
}

/// Decide the long name kept when routes with this ID are merged.
async fn route_long_name(
    State(state): State<AppState>,
    Path(route_id): Path<u64>,
) -> Json<LongNameResponse> {
    let route_id = RouteId::new(route_id);
    let merge = state.rules.merge_route_long_name(route_id);
    Json(LongNameResponse::from_merge(route_id, merge))
}

/// Resolve the canonical stop ID.
async fn stop_id(
    State(state): State<AppState>,
    Json(stop): Json<RawStop>,
) -> Result<Json<StopIdResponse>, AppError> {
    let stop_id = state.rules.stop_id(&stop)?;
    Ok(Json(StopIdResponse { stop_id }))
}

async fn clean_headsign(
    State(state): State<AppState>,
    Json(req): Json<LabelRequest>,
) -> Json<LabelResponse> {
    Json(LabelResponse {
        text: state.rules.clean_trip_headsign(&req.text),
    })
}

async fn clean_stop_name(
    State(state): State<AppState>,
    Json(req): Json<LabelRequest>,
) -> Json<LabelResponse> {
    Json(LabelResponse {
        text: state.rules.clean_stop_name(&req.text),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<RuleError> for AppError {
    fn from(e: RuleError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(status = %status, error = %message, "Rule request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::LInterRules;

    fn state() -> AppState {
        AppState::new(LInterRules::default())
    }

    #[test]
    fn router_builds() {
        let _router = create_router(state());
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn agency_metadata() {
        let Json(meta) = agency(State(state())).await;
        assert_eq!(meta.name, "L'Inter (TaCL)");
        assert_eq!(meta.color.as_str(), "E76525");
    }

    #[tokio::test]
    async fn route_id_known_and_unknown() {
        let Json(resp) = route_id(State(state()), Path("ZCS".to_string()))
            .await
            .unwrap();
        assert_eq!(resp.route_id, RouteId::new(1003));
        assert_eq!(resp.route_short_name, "ZCS");

        let err = route_id(State(state()), Path("XYZ".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn short_name_and_error_mapping() {
        let Json(resp) = route_short_name(State(state()), Json(RawRoute::new("ZNS", "ZNS")))
            .await
            .unwrap();
        assert_eq!(resp.short_name, "ZN");

        let err = route_short_name(State(state()), Json(RawRoute::new("XYZ", "XYZ")))
            .await
            .unwrap_err();
        let AppError::BadRequest { message } = err else {
            panic!("expected BadRequest");
        };
        assert!(message.contains("unexpected route ID"));
    }

    #[tokio::test]
    async fn long_name_decision() {
        let Json(resp) = route_long_name(State(state()), Path(1014)).await;
        assert_eq!(resp.long_name.as_deref(), Some("Inter Nord"));
        assert!(resp.overrides_default);

        let Json(resp) = route_long_name(State(state()), Path(99)).await;
        assert_eq!(resp.long_name, None);
        assert!(!resp.overrides_default);
    }

    #[tokio::test]
    async fn stop_ids() {
        let Json(resp) = stop_id(State(state()), Json(RawStop::new("ab34", "S-ANM")))
            .await
            .unwrap();
        assert_eq!(resp.stop_id.get(), 1_190_034);

        let err = stop_id(State(state()), Json(RawStop::new("ab5", "xyz")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn labels() {
        let Json(resp) = clean_headsign(
            State(state()),
            Json(LabelRequest {
                text: "Direction TERMINUS MIRABEL".to_string(),
            }),
        )
        .await;
        assert_eq!(resp.text, "Terminus Mirabel");

        let Json(resp) = clean_stop_name(
            State(state()),
            Json(LabelRequest {
                text: "BOULEVARD DU CURÉ-LABELLE".to_string(),
            }),
        )
        .await;
        assert_eq!(resp.text, "Boul du Curé-Labelle");
    }

    #[test]
    fn error_status_codes() {
        let resp = AppError::BadRequest {
            message: "bad".into(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = AppError::NotFound {
            message: "missing".into(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
