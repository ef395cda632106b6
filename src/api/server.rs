//! HTTP server start-up.

use tokio::net::TcpListener;
use tracing::info;

use crate::config::ConfigLoader;
use crate::error::PayslipResult;

use super::handlers::create_router;
use super::state::AppState;

/// Binds to the configured address and serves the API until the process exits.
pub async fn serve(config: ConfigLoader) -> PayslipResult<()> {
    let listener = TcpListener::bind(config.bind_address()).await?;
    info!(address = %listener.local_addr()?, "Payslip API listening");

    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}
