// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use skyport_api::{
    ApiError,
    handlers::{
        airport_kind, create_aircraft, create_private_airport, create_public_airport,
        create_user, delete_aircraft, delete_airport, get_aircraft, get_airport,
        get_private_airport, get_public_airport, list_aircraft, list_airports,
        list_private_airports, list_public_airports, login, set_aircraft_active,
        update_aircraft, update_private_airport, update_public_airport,
    },
    request_response::{
        AirportKindResponse, CreateAircraftRequest, CreateAircraftResponse,
        CreateAirportResponse, CreatePrivateAirportRequest, CreatePublicAirportRequest,
        CreateUserRequest, CreateUserResponse, DeleteAircraftResponse, DeleteAirportResponse,
        ListAircraftResponse, ListAirportsResponse, ListPrivateAirportsResponse,
        ListPublicAirportsResponse, LoginRequest, LoginResponse, SetAircraftActiveRequest,
        SetAircraftActiveResponse, UpdateAircraftRequest, UpdateAircraftResponse,
        UpdateAirportResponse,
        UpdatePrivateAirportRequest, UpdatePublicAirportRequest,
    },
};
use skyport_domain::{Aircraft, Airport, PrivateAirport, PublicAirport};
use skyport_persistence::{Persistence, PersistenceError};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Skyport Server - HTTP server for the airport registry
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The persistence adapter is wrapped in a Mutex to allow safe concurrent
/// access.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// Query parameters for listing aircraft.
#[derive(Debug, Deserialize)]
struct ListAircraftQuery {
    /// Restrict the listing to one airport.
    airport_id: Option<i64>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::AuthenticationFailed { .. } => Self {
                status: StatusCode::UNAUTHORIZED,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Handler for POST `/login`.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(username = %req.username, "Handling login request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = login(&mut persistence, &req)?;
    Ok(Json(response))
}

/// Handler for POST `/users`.
async fn handle_create_user(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>, HttpError> {
    info!(username = %req.username, "Handling create_user request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateUserResponse = create_user(&mut persistence, &req)?;
    Ok(Json(response))
}

/// Handler for GET `/airports`.
///
/// Lists the base records of all airports, both kinds.
async fn handle_list_airports(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListAirportsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListAirportsResponse = list_airports(&mut persistence)?;
    Ok(Json(response))
}

/// Handler for GET `/airports/{airport_id}`.
async fn handle_get_airport(
    AxumState(app_state): AxumState<AppState>,
    Path(airport_id): Path<i64>,
) -> Result<Json<Airport>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let airport: Airport = get_airport(&mut persistence, airport_id)?;
    Ok(Json(airport))
}

/// Handler for GET `/airports/{airport_id}/kind`.
///
/// Reports whether an airport is public or private.
async fn handle_airport_kind(
    AxumState(app_state): AxumState<AppState>,
    Path(airport_id): Path<i64>,
) -> Result<Json<AirportKindResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: AirportKindResponse = airport_kind(&mut persistence, airport_id)?;
    Ok(Json(response))
}

/// Handler for DELETE `/airports/{airport_id}`.
///
/// Deletes the airport's aircraft, its extension row, then the base row.
async fn handle_delete_airport(
    AxumState(app_state): AxumState<AppState>,
    Path(airport_id): Path<i64>,
) -> Result<Json<DeleteAirportResponse>, HttpError> {
    info!(airport_id, "Handling delete_airport request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteAirportResponse = delete_airport(&mut persistence, airport_id)?;
    Ok(Json(response))
}

/// Handler for POST `/airports/public`.
async fn handle_create_public_airport(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreatePublicAirportRequest>,
) -> Result<Json<CreateAirportResponse>, HttpError> {
    info!(name = %req.name, "Handling create_public_airport request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateAirportResponse = create_public_airport(&mut persistence, &req)?;
    Ok(Json(response))
}

/// Handler for GET `/airports/public`.
async fn handle_list_public_airports(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListPublicAirportsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListPublicAirportsResponse = list_public_airports(&mut persistence)?;
    Ok(Json(response))
}

/// Handler for GET `/airports/public/{airport_id}`.
async fn handle_get_public_airport(
    AxumState(app_state): AxumState<AppState>,
    Path(airport_id): Path<i64>,
) -> Result<Json<PublicAirport>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let airport: PublicAirport = get_public_airport(&mut persistence, airport_id)?;
    Ok(Json(airport))
}

/// Handler for PUT `/airports/public/{airport_id}`.
async fn handle_update_public_airport(
    AxumState(app_state): AxumState<AppState>,
    Path(airport_id): Path<i64>,
    Json(req): Json<UpdatePublicAirportRequest>,
) -> Result<Json<UpdateAirportResponse>, HttpError> {
    info!(airport_id, "Handling update_public_airport request");

    let mut persistence = app_state.persistence.lock().await;
    let response: UpdateAirportResponse =
        update_public_airport(&mut persistence, airport_id, &req)?;
    Ok(Json(response))
}

/// Handler for POST `/airports/private`.
async fn handle_create_private_airport(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreatePrivateAirportRequest>,
) -> Result<Json<CreateAirportResponse>, HttpError> {
    info!(name = %req.name, "Handling create_private_airport request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateAirportResponse = create_private_airport(&mut persistence, &req)?;
    Ok(Json(response))
}

/// Handler for GET `/airports/private`.
async fn handle_list_private_airports(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListPrivateAirportsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListPrivateAirportsResponse = list_private_airports(&mut persistence)?;
    Ok(Json(response))
}

/// Handler for GET `/airports/private/{airport_id}`.
async fn handle_get_private_airport(
    AxumState(app_state): AxumState<AppState>,
    Path(airport_id): Path<i64>,
) -> Result<Json<PrivateAirport>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let airport: PrivateAirport = get_private_airport(&mut persistence, airport_id)?;
    Ok(Json(airport))
}

/// Handler for PUT `/airports/private/{airport_id}`.
async fn handle_update_private_airport(
    AxumState(app_state): AxumState<AppState>,
    Path(airport_id): Path<i64>,
    Json(req): Json<UpdatePrivateAirportRequest>,
) -> Result<Json<UpdateAirportResponse>, HttpError> {
    info!(airport_id, "Handling update_private_airport request");

    let mut persistence = app_state.persistence.lock().await;
    let response: UpdateAirportResponse =
        update_private_airport(&mut persistence, airport_id, &req)?;
    Ok(Json(response))
}

/// Handler for POST `/aircraft`.
async fn handle_create_aircraft(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateAircraftRequest>,
) -> Result<Json<CreateAircraftResponse>, HttpError> {
    info!(model = %req.model, airport_id = req.airport_id, "Handling create_aircraft request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateAircraftResponse = create_aircraft(&mut persistence, &req)?;
    Ok(Json(response))
}

/// Handler for GET `/aircraft`.
///
/// Lists all aircraft, or only those at one airport when `airport_id` is
/// given.
async fn handle_list_aircraft(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListAircraftQuery>,
) -> Result<Json<ListAircraftResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListAircraftResponse = list_aircraft(&mut persistence, query.airport_id)?;
    Ok(Json(response))
}

/// Handler for GET `/aircraft/{aircraft_id}`.
async fn handle_get_aircraft(
    AxumState(app_state): AxumState<AppState>,
    Path(aircraft_id): Path<i64>,
) -> Result<Json<Aircraft>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let aircraft: Aircraft = get_aircraft(&mut persistence, aircraft_id)?;
    Ok(Json(aircraft))
}

/// Handler for PUT `/aircraft/{aircraft_id}`.
async fn handle_update_aircraft(
    AxumState(app_state): AxumState<AppState>,
    Path(aircraft_id): Path<i64>,
    Json(req): Json<UpdateAircraftRequest>,
) -> Result<Json<UpdateAircraftResponse>, HttpError> {
    info!(aircraft_id, "Handling update_aircraft request");

    let mut persistence = app_state.persistence.lock().await;
    let response = update_aircraft(&mut persistence, aircraft_id, &req)?;
    Ok(Json(response))
}

/// Handler for PUT `/aircraft/{aircraft_id}/active`.
///
/// Flips the active flag without touching any other field.
async fn handle_set_aircraft_active(
    AxumState(app_state): AxumState<AppState>,
    Path(aircraft_id): Path<i64>,
    Json(req): Json<SetAircraftActiveRequest>,
) -> Result<Json<SetAircraftActiveResponse>, HttpError> {
    info!(aircraft_id, is_active = req.is_active, "Handling set_aircraft_active request");

    let mut persistence = app_state.persistence.lock().await;
    let response: SetAircraftActiveResponse =
        set_aircraft_active(&mut persistence, aircraft_id, &req)?;
    Ok(Json(response))
}

/// Handler for DELETE `/aircraft/{aircraft_id}`.
async fn handle_delete_aircraft(
    AxumState(app_state): AxumState<AppState>,
    Path(aircraft_id): Path<i64>,
) -> Result<Json<DeleteAircraftResponse>, HttpError> {
    info!(aircraft_id, "Handling delete_aircraft request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteAircraftResponse = delete_aircraft(&mut persistence, aircraft_id)?;
    Ok(Json(response))
}

/// Builds the application router with all routes.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(handle_login))
        .route("/users", post(handle_create_user))
        .route("/airports", get(handle_list_airports))
        .route("/airports/public", post(handle_create_public_airport))
        .route("/airports/public", get(handle_list_public_airports))
        .route("/airports/public/{airport_id}", get(handle_get_public_airport))
        .route("/airports/public/{airport_id}", put(handle_update_public_airport))
        .route("/airports/private", post(handle_create_private_airport))
        .route("/airports/private", get(handle_list_private_airports))
        .route("/airports/private/{airport_id}", get(handle_get_private_airport))
        .route("/airports/private/{airport_id}", put(handle_update_private_airport))
        .route("/airports/{airport_id}", get(handle_get_airport))
        .route("/airports/{airport_id}", delete(handle_delete_airport))
        .route("/airports/{airport_id}/kind", get(handle_airport_kind))
        .route("/aircraft", post(handle_create_aircraft))
        .route("/aircraft", get(handle_list_aircraft))
        .route("/aircraft/{aircraft_id}", get(handle_get_aircraft))
        .route("/aircraft/{aircraft_id}", put(handle_update_aircraft))
        .route("/aircraft/{aircraft_id}", delete(handle_delete_aircraft))
        .route("/aircraft/{aircraft_id}/active", put(handle_set_aircraft_active))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Skyport Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
