mod config;
mod error;
mod handlers;
mod models;
mod presenter;
mod services;
#[cfg(all(test, feature = "web-ui"))]
mod test_support;
#[cfg(feature = "web-ui")]
mod web; // Single page UI + JSON API

use anyhow::Result;
use dotenv::dotenv;
use std::sync::Arc;

use config::AppConfig;
use handlers::{ImageResolver, RecipeFlow, RecipeGenerator};
use services::{GroqService, PixabayClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Load environment variables
    dotenv().ok();

    log::info!("🚀 Starting Recipe Finder...");

    let config = AppConfig::from_env()?;

    let chat = Arc::new(GroqService::from_config(&config)?);
    log::info!("✅ Chat service initialized with model: {}", config.model_id);

    let images = if config.image_lookup_enabled {
        if config.image_api_key.is_none() {
            log::warn!("⚠️ PIXABAY_API_KEY not set, image lookups will likely fail");
        }
        Some(ImageResolver::new(PixabayClient::from_config(&config)))
    } else {
        None
    };

    let flow = Arc::new(RecipeFlow::new(RecipeGenerator::new(chat), images));

    #[cfg(feature = "web-ui")]
    {
        let app = web::server::create_router(flow.clone(), &config.static_dir);
        let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

        log::info!("🌐 Web UI listening on http://{}", config.bind_addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                tokio::signal::ctrl_c().await.ok();
                log::info!("🛑 Shutting down...");
            })
            .await?;
    }

    #[cfg(not(feature = "web-ui"))]
    run_terminal(flow).await?;

    Ok(())
}

/// Reads one dish name per line from stdin and prints the recipe.
#[cfg(not(feature = "web-ui"))]
async fn run_terminal(flow: Arc<RecipeFlow>) -> Result<()> {
    use tokio::io::{AsyncBufReadExt, BufReader};

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("What do you want to cook? (Ctrl+D to quit)");

    while let Some(line) = lines.next_line().await? {
        match flow.find_recipe(&line).await {
            Ok(view) => println!("\n{}\n", presenter::render_text(&view)),
            Err(e) => eprintln!("❌ {}", e),
        }
        println!("What do you want to cook?");
    }

    Ok(())
}
