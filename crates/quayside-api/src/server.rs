//! HTTP API server.

use crate::api::create_router;
use crate::error::{ApiError, Result};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use quayside_core::ImageSelector;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::Service;
use tower_http::trace::TraceLayer;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub listen: SocketAddr,
}

/// HTTP API server.
pub struct ApiServer {
    config: ServerConfig,
    selector: Arc<ImageSelector>,
}

impl ApiServer {
    /// Creates a new API server.
    #[must_use]
    pub const fn new(config: ServerConfig, selector: Arc<ImageSelector>) -> Self {
        Self { config, selector }
    }

    /// Returns the configured listen address.
    #[must_use]
    pub const fn listen_addr(&self) -> SocketAddr {
        self.config.listen
    }

    /// Runs the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound or accepting fails.
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(self.config.listen)
            .await
            .map_err(|e| ApiError::Server(e.to_string()))?;

        tracing::info!("API server listening on {}", self.config.listen);

        let app = create_router(Arc::clone(&self.selector)).layer(TraceLayer::new_for_http());

        loop {
            let (stream, _) = listener
                .accept()
                .await
                .map_err(|e| ApiError::Server(e.to_string()))?;

            let tower_service = app.clone();
            tokio::spawn(async move {
                let hyper_service =
                    hyper::service::service_fn(move |request: hyper::Request<Incoming>| {
                        tower_service.clone().call(request)
                    });

                if let Err(err) = http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), hyper_service)
                    .await
                {
                    let err_str = err.to_string().to_lowercase();
                    if !err_str.contains("connection reset") && !err_str.contains("broken pipe") {
                        tracing::error!("Error serving connection: {}", err);
                    }
                }
            });
        }
    }
}
