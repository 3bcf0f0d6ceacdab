use actix_web::{web, HttpServer};
use tracing::info;

use tr_api::{bootstrap, create_app, telemetry};
use tr_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tr_infra::load_dotenv();
    let config = AppConfig::from_env();
    telemetry::init(&config.logging);

    info!(
        environment = %config.environment,
        "Starting ToolRent API server"
    );

    let state = web::Data::new(bootstrap::build_state(&config).await?);
    let environment = config.environment;
    let database = state.database.clone();

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone(), environment));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.bind(&bind_address)?.run().await?;

    if let Some(pool) = database {
        pool.close().await;
    }
    info!("Server stopped");
    Ok(())
}
