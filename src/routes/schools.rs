use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::rank_by_distance;
use crate::models::{AddSchoolRequest, AddSchoolResponse, HealthResponse, ListSchoolsQuery, MessageResponse};
use crate::routes::errors::ApiError;
use crate::services::SchoolStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SchoolStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn SchoolStore>) -> Self {
        Self { store }
    }
}

/// Configure all school routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/addSchool", web::post().to(add_school))
        .route("/listSchools", web::get().to(list_schools));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let healthy = state.store.health_check().await.unwrap_or(false);

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Add school endpoint
///
/// POST /addSchool
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "address": "string",
///   "latitude": 40.0,
///   "longitude": "-73.0"
/// }
/// ```
async fn add_school(
    state: web::Data<AppState>,
    req: web::Json<AddSchoolRequest>,
) -> Result<HttpResponse, ApiError> {
    let school = req.into_inner().into_new_school().map_err(|e| {
        tracing::info!("Rejected add_school request: {}", e);
        e
    })?;

    let id = state.store.insert(&school).await.map_err(|e| {
        tracing::error!("Failed to insert school {:?}: {}", school.name, e);
        e
    })?;

    tracing::info!("Added school {} ({})", id, school.name);

    Ok(HttpResponse::Created().json(AddSchoolResponse {
        message: "School added successfully".to_string(),
        id,
    }))
}

/// List schools endpoint
///
/// GET /listSchools?latitude={lat}&longitude={lon}
///
/// Returns every stored school with a `distance` field (km) from the given
/// point, nearest first. Responds 404 with a message when nothing is stored.
async fn list_schools(
    state: web::Data<AppState>,
    query: web::Query<ListSchoolsQuery>,
) -> Result<HttpResponse, ApiError> {
    let origin = query.origin().map_err(|e| {
        tracing::info!("Rejected list_schools request: {}", e);
        e
    })?;

    let schools = state.store.list_all().await.map_err(|e| {
        tracing::error!("Failed to list schools: {}", e);
        e
    })?;

    if schools.is_empty() {
        return Ok(HttpResponse::NotFound().json(MessageResponse {
            message: "No schools found.".to_string(),
        }));
    }

    let ranked = rank_by_distance(schools, &origin);

    tracing::debug!(
        "Returning {} schools ranked from ({}, {})",
        ranked.len(),
        origin.latitude,
        origin.longitude
    );

    Ok(HttpResponse::Ok().json(ranked))
}
