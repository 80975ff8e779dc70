use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use database::DbRepository;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod dto;
pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access. Holds the
/// repository (and through it the connection pool); there is no other
/// cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub db_repo: DbRepository,
}

/// Builds the application router over the given state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Hotel room-management API. See /api." }))
        .route("/api/health", get(|| async { "OK" }))
        // --- Room types ---
        .route(
            "/api/room-types",
            get(handlers::list_room_types).post(handlers::create_room_type),
        )
        // --- Room inventory ---
        .route(
            "/api/rooms",
            get(handlers::list_rooms).post(handlers::create_room),
        )
        .route("/api/rooms/stats/summary", get(handlers::room_stats_summary))
        // --- Guest stays ---
        .route(
            "/api/guests",
            get(handlers::list_guests).post(handlers::create_guest),
        )
        .route("/api/guests/:guest_id/checkout", post(handlers::checkout_guest))
        // --- Business queries and statistics ---
        .route(
            "/api/business/search/free-rooms",
            get(handlers::search_free_rooms),
        )
        .route("/api/business/search/guests", get(handlers::search_guests))
        .route(
            "/api/business/statistics/occupancy-rate",
            get(handlers::occupancy_rate),
        )
        .route(
            "/api/business/statistics/annual-revenue",
            get(handlers::annual_revenue),
        )
        .route(
            "/api/business/cost-detail/:guest_id",
            get(handlers::cost_detail),
        )
        .route(
            "/api/business/guests/expired-stays",
            get(handlers::expired_stays),
        )
        .with_state(state)
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = configuration::load_config()?;
    let db_pool = database::connect(&settings.database).await?;
    database::run_migrations(&db_pool).await?;
    let db_repo = DbRepository::new(db_pool);

    let app_state = Arc::new(AppState { db_repo });
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    let app = app(app_state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024 * 50));

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
