//! Axum REST handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use brandpulse_campaigns::presenter::{self, StatusBadge};
use brandpulse_campaigns::store::filter_variants;
use brandpulse_campaigns::types::{Campaign, CreateCampaignRequest, RolloutMode};
use brandpulse_campaigns::{CampaignStore, ClientStore, RolloutSimulator};
use brandpulse_content::{GenerativeBackend, TrendCatalog};
use brandpulse_core::types::{ClientProfile, GeneratedContent, GeneratedImage, GeneratedVideo, SocialPlatform, Trend};
use brandpulse_core::BrandPulseError;

use crate::models::*;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<ClientStore>,
    pub campaigns: Arc<CampaignStore>,
    pub simulator: Arc<RolloutSimulator>,
    pub backend: Arc<GenerativeBackend>,
    pub trends: Arc<TrendCatalog>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<T, ApiError>;

fn error_response(err: BrandPulseError) -> ApiError {
    let (status, code) = match &err {
        BrandPulseError::CampaignNotFound(_) | BrandPulseError::ClientNotFound(_) => {
            (StatusCode::NOT_FOUND, "not_found")
        }
        BrandPulseError::TestAlreadyRunning(_) => (StatusCode::CONFLICT, "test_already_running"),
        BrandPulseError::TestNotRunning(_) => (StatusCode::CONFLICT, "test_not_running"),
        BrandPulseError::EmptyVariants => (StatusCode::UNPROCESSABLE_ENTITY, "empty_variants"),
        BrandPulseError::Backend(_) => (StatusCode::BAD_GATEWAY, "backend_error"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    };
    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
        }),
    )
}

// ─── Health ────────────────────────────────────────────────────────────────

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        active_tests: state.simulator.active_tests(),
    })
}

// ─── Clients ───────────────────────────────────────────────────────────────

pub async fn list_clients(State(state): State<AppState>) -> Json<Vec<ClientProfile>> {
    Json(state.clients.list())
}

pub async fn create_client(
    State(state): State<AppState>,
    Json(req): Json<CreateClientRequest>,
) -> (StatusCode, Json<ClientProfile>) {
    let profile = state
        .clients
        .create(req.name, req.industry, req.voice, req.avatar_url);
    metrics::counter!("api.clients_created").increment(1);
    (StatusCode::CREATED, Json(profile))
}

pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ClientProfile>> {
    state
        .clients
        .get(id)
        .map(Json)
        .ok_or_else(|| error_response(BrandPulseError::ClientNotFound(id)))
}

pub async fn list_client_campaigns(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Vec<Campaign>>> {
    if state.clients.get(id).is_none() {
        return Err(error_response(BrandPulseError::ClientNotFound(id)));
    }
    Ok(Json(state.campaigns.list_by_client(id)))
}

// ─── Campaigns ─────────────────────────────────────────────────────────────

/// Handles the creation form. A `dynamic` rollout mode starts the
/// headline test as part of this submission; its first state transition
/// is visible in the returned snapshot.
pub async fn create_campaign(
    State(state): State<AppState>,
    Json(req): Json<CreateCampaignRequest>,
) -> ApiResult<(StatusCode, Json<Campaign>)> {
    if state.clients.get(req.client_id).is_none() {
        return Err(error_response(BrandPulseError::ClientNotFound(req.client_id)));
    }
    if req.rollout_mode == RolloutMode::Dynamic
        && filter_variants(&req.headline_variants).is_empty()
    {
        return Err(error_response(BrandPulseError::EmptyVariants));
    }

    let variants = req.headline_variants.clone();
    let rollout_mode = req.rollout_mode;
    let campaign = state.campaigns.create_campaign(req);
    metrics::counter!("api.campaigns_created").increment(1);

    if rollout_mode == RolloutMode::Dynamic {
        state
            .simulator
            .start_test(campaign.id, &variants)
            .map_err(error_response)?;
    }

    let snapshot = state
        .campaigns
        .get(campaign.id)
        .ok_or_else(|| error_response(BrandPulseError::CampaignNotFound(campaign.id)))?;
    Ok((StatusCode::CREATED, Json(snapshot)))
}

pub async fn get_campaign(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Campaign>> {
    state
        .campaigns
        .get(id)
        .map(Json)
        .ok_or_else(|| error_response(BrandPulseError::CampaignNotFound(id)))
}

pub async fn campaign_badge(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<StatusBadge>> {
    state
        .campaigns
        .get(id)
        .map(|campaign| Json(presenter::badge(&campaign)))
        .ok_or_else(|| error_response(BrandPulseError::CampaignNotFound(id)))
}

pub async fn cancel_campaign_test(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Campaign>> {
    state.simulator.cancel_test(id).map_err(error_response)?;
    state
        .campaigns
        .get(id)
        .map(Json)
        .ok_or_else(|| error_response(BrandPulseError::CampaignNotFound(id)))
}

// ─── Content generation ────────────────────────────────────────────────────

pub async fn generate_text(
    State(state): State<AppState>,
    Json(req): Json<GenerateTextRequest>,
) -> ApiResult<Json<Vec<GeneratedContent>>> {
    let client = state
        .clients
        .get(req.client_id)
        .ok_or_else(|| error_response(BrandPulseError::ClientNotFound(req.client_id)))?;

    let platforms = if req.platforms.is_empty() {
        SocialPlatform::ALL.to_vec()
    } else {
        req.platforms
    };
    let posts = state
        .backend
        .generate_text(
            &req.topic,
            &client.voice,
            &platforms,
            &req.language,
            req.image_prompt_seed.as_deref(),
        )
        .await;
    Ok(Json(posts))
}

pub async fn generate_image(
    State(state): State<AppState>,
    Json(req): Json<GenerateImageRequest>,
) -> ApiResult<Json<GeneratedImage>> {
    let image = state
        .backend
        .generate_image(&req.prompt, req.size)
        .await
        .map_err(error_response)?;
    image.map(Json).ok_or_else(|| {
        error_response(BrandPulseError::Backend(
            "backend returned no image".to_string(),
        ))
    })
}

pub async fn generate_video(
    State(state): State<AppState>,
    Json(req): Json<GenerateVideoRequest>,
) -> ApiResult<Json<GeneratedVideo>> {
    let video = state
        .backend
        .generate_video(&req.image, &req.prompt, req.aspect_ratio)
        .await
        .map_err(error_response)?;
    video.map(Json).ok_or_else(|| {
        error_response(BrandPulseError::Backend(
            "backend returned no video".to_string(),
        ))
    })
}

// ─── Trends ────────────────────────────────────────────────────────────────

pub async fn list_trends(State(state): State<AppState>) -> Json<Vec<Trend>> {
    Json(state.trends.list())
}

pub async fn discover_trends(
    State(state): State<AppState>,
    Json(req): Json<DiscoverTrendsRequest>,
) -> ApiResult<Json<Vec<Trend>>> {
    let client = state
        .clients
        .get(req.client_id)
        .ok_or_else(|| error_response(BrandPulseError::ClientNotFound(req.client_id)))?;

    let found = state
        .backend
        .find_trends(&client.industry, &client.voice)
        .await;
    for trend in &found {
        state.trends.upsert(trend.clone());
    }
    Ok(Json(found))
}

pub async fn analyze_trend(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeTrendRequest>,
) -> ApiResult<Json<AnalyzeTrendResponse>> {
    let client = state
        .clients
        .get(req.client_id)
        .ok_or_else(|| error_response(BrandPulseError::ClientNotFound(req.client_id)))?;
    let trend = state.trends.get(&req.trend_id).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "not_found".to_string(),
                message: format!("Trend {} not found", req.trend_id),
            }),
        )
    })?;

    let analysis = state
        .backend
        .analyze_trend(&trend, &client.voice, &client.industry)
        .await;
    Ok(Json(AnalyzeTrendResponse { analysis }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandpulse_campaigns::types::CampaignStatus;
    use brandpulse_core::config::{ContentConfig, RolloutConfig};
    use chrono::NaiveDate;

    fn make_state() -> AppState {
        let clients = Arc::new(ClientStore::new());
        let campaigns = Arc::new(CampaignStore::new());
        let simulator = Arc::new(RolloutSimulator::new(
            Arc::clone(&campaigns),
            RolloutConfig {
                tick_interval_ms: 10,
                ..RolloutConfig::default()
            },
        ));
        let backend = Arc::new(GenerativeBackend::new(ContentConfig {
            api_key: "test-key".to_string(),
            ..ContentConfig::default()
        }));
        let trends = Arc::new(TrendCatalog::new());
        trends.seed_demo_trends();
        AppState {
            clients,
            campaigns,
            simulator,
            backend,
            trends,
        }
    }

    fn form(client_id: Uuid, mode: RolloutMode, variants: Vec<&str>) -> CreateCampaignRequest {
        CreateCampaignRequest {
            client_id,
            name: "Summer Launch".to_string(),
            platform: SocialPlatform::LinkedIn,
            status: CampaignStatus::Draft,
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            rollout_mode: mode,
            headline_variants: variants.into_iter().map(str::to_string).collect(),
        }
    }

    #[tokio::test]
    async fn test_dynamic_submission_starts_the_test() {
        let state = make_state();
        let client = state.clients.create(
            "TechNova Solutions".to_string(),
            "SaaS".to_string(),
            "Professional".to_string(),
            "https://example.com/a.png".to_string(),
        );

        let (status, Json(campaign)) = create_campaign(
            State(state.clone()),
            Json(form(client.id, RolloutMode::Dynamic, vec!["Hook A", "Hook B"])),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(campaign.status, CampaignStatus::Testing);
        assert!(state.simulator.is_running(campaign.id));

        let Json(badge) = campaign_badge(State(state.clone()), Path(campaign.id))
            .await
            .unwrap();
        assert_eq!(
            badge.caption.as_deref(),
            Some("Testing 2 variants on TikTok")
        );
    }

    #[tokio::test]
    async fn test_standard_submission_skips_the_simulator() {
        let state = make_state();
        let client = state.clients.create(
            "GreenLeaf Organics".to_string(),
            "Wellness".to_string(),
            "Warm".to_string(),
            "https://example.com/b.png".to_string(),
        );

        let (_, Json(campaign)) = create_campaign(
            State(state.clone()),
            Json(form(client.id, RolloutMode::Standard, vec![])),
        )
        .await
        .unwrap();

        assert_eq!(campaign.status, CampaignStatus::Draft);
        assert_eq!(campaign.platform, SocialPlatform::LinkedIn);
        assert!(!state.simulator.is_running(campaign.id));
    }

    #[tokio::test]
    async fn test_dynamic_submission_without_variants_is_rejected() {
        let state = make_state();
        let client = state.clients.create(
            "UrbanStyle Gear".to_string(),
            "Fashion".to_string(),
            "Edgy".to_string(),
            "https://example.com/c.png".to_string(),
        );

        let err = create_campaign(
            State(state.clone()),
            Json(form(client.id, RolloutMode::Dynamic, vec!["", "  "])),
        )
        .await
        .unwrap_err();

        assert_eq!(err.0, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(state.campaigns.len(), 0);
    }

    #[tokio::test]
    async fn test_unknown_ids_map_to_not_found() {
        let state = make_state();

        let err = create_campaign(
            State(state.clone()),
            Json(form(Uuid::new_v4(), RolloutMode::Standard, vec![])),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);

        let err = get_campaign(State(state.clone()), Path(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cancel_without_live_test_conflicts() {
        let state = make_state();
        let err = cancel_campaign_test(State(state.clone()), Path(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_trend_analysis_roundtrip() {
        let state = make_state();
        let client = state.clients.create(
            "TechNova Solutions".to_string(),
            "SaaS".to_string(),
            "Professional".to_string(),
            "https://example.com/a.png".to_string(),
        );

        let Json(response) = analyze_trend(
            State(state.clone()),
            Json(AnalyzeTrendRequest {
                trend_id: "t1".to_string(),
                client_id: client.id,
            }),
        )
        .await
        .unwrap();
        assert!(response.analysis.contains("Sustainable AI"));
    }
}
