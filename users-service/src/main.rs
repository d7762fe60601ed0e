use users_service::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    init_tracing(&config)?;

    tracing::info!(
        "Starting {} on port {}",
        config.service.name,
        config.service.port
    );
    tracing::info!("  POST /graphql - Execute GraphQL documents");
    tracing::info!("  GET  /graphql - GraphiQL playground");
    tracing::info!("  GET  /health  - Health check");
    tracing::info!("  GET  /ready   - Readiness check");

    let state = AppState::new(config.clone());
    let app = router(state);

    Server::new(config).serve(app).await?;

    shutdown_tracing();

    Ok(())
}
