use crate::config::{PetConfig, StoreBackend};
use crate::handlers;
use crate::models::{Cat, Dog};
use crate::services::{LastRecord, MemoryRepository, MongoDb, Repository};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    security_headers::security_headers_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub cats: Arc<dyn Repository<Cat>>,
    pub dogs: Arc<dyn Repository<Dog>>,
    pub last_cat: LastRecord<Cat>,
    pub last_dog: LastRecord<Dog>,
}

impl AppState {
    /// State with both "last record" handles at their placeholders.
    pub fn new(cats: Arc<dyn Repository<Cat>>, dogs: Arc<dyn Repository<Dog>>) -> Self {
        Self {
            cats,
            dogs,
            last_cat: LastRecord::new(Cat::placeholder()),
            last_dog: LastRecord::new(Dog::placeholder()),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryRepository::<Cat>::new()),
            Arc::new(MemoryRepository::<Dog>::new()),
        )
    }
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/cats", post(handlers::create_cat))
        .route("/cats/search", get(handlers::search_cat))
        .route("/cats/last/name", get(handlers::get_last_cat_name))
        .route("/cats/last/beds", post(handlers::increment_last_cat_beds))
        .route("/dogs", post(handlers::create_dog))
        .route("/dogs/last/name", get(handlers::get_last_dog_name))
        .route("/dogs/birthday", post(handlers::increment_dog_age));

    Router::new()
        .route("/", get(handlers::index))
        .route("/cats", get(handlers::list_cats))
        .route("/dogs", get(handlers::list_dogs))
        .route("/about", get(handlers::about))
        .route("/contact", get(handlers::contact))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .nest("/api", api)
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<axum::body::Body>))
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
    db: Option<MongoDb>,
}

impl Application {
    pub async fn build(config: PetConfig) -> Result<Self, AppError> {
        let (state, db) = match config.store.backend {
            StoreBackend::Mongo => {
                let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
                    .await
                    .map_err(|e| {
                        tracing::error!("Failed to connect to MongoDB: {}", e);
                        e
                    })?;

                let cats = db.repository::<Cat>();
                let dogs = db.repository::<Dog>();
                cats.initialize_indexes().await?;
                dogs.initialize_indexes().await?;

                (AppState::new(Arc::new(cats), Arc::new(dogs)), Some(db))
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store; records are lost on restart");
                (AppState::in_memory(), None)
            }
        };

        // Port 0 binds a random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            state,
            db,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn db(&self) -> Option<&MongoDb> {
        self.db.as_ref()
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let app = build_router(self.state);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
