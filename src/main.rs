use anyhow::Result;
use dotenv::dotenv;
use std::sync::Arc;

use nutriscan::config::Config;
use nutriscan::services::{GeminiClient, ModelClient, NutritionService};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables (RUST_LOG may come from .env)
    dotenv().ok();

    // Initialize logger
    env_logger::init();

    log::info!("🚀 Starting NutriScan AI...");

    let config = Config::from_env()?;

    let model: Option<Arc<dyn ModelClient>> = match &config.api_key {
        Some(api_key) => {
            let client = GeminiClient::new(
                api_key.clone(),
                config.model.clone(),
                config.api_base.clone(),
                config.timeout,
            )?;
            log::info!("✅ Gemini client initialized with model: {}", config.model);
            Some(Arc::new(client))
        }
        None => {
            log::error!(
                "❌ Gemini API Key not found. Set GEMINI_API_KEY (or API_KEY); requests will be answered with a configuration error."
            );
            None
        }
    };

    let service = Arc::new(NutritionService::new(model));
    log::info!("✅ Nutrition service initialized (configured: {})", service.is_configured());

    #[cfg(feature = "http-server")]
    {
        let app = nutriscan::server::create_router(service.clone(), config.static_dir.as_deref());
        let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
        log::info!("🌐 HTTP server listening on {}", config.bind_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                log::error!("❌ HTTP server stopped: {}", e);
            }
        });
    }

    log::info!("🎉 NutriScan AI is ready!");

    tokio::signal::ctrl_c().await?;

    log::info!("🛑 Shutting down...");

    Ok(())
}
