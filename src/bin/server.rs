use modelslab::logger::{self, LoggerConfig};
use modelslab::{ModelsLabClient, ServerConfig};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();
    logger::init_with_config(LoggerConfig::from_env())?;
    if !dotenv_loaded {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let config = ServerConfig::from_env();
    let client = ModelsLabClient::new(config.modelslab.clone())?;

    modelslab::server::run(config, client).await?;
    Ok(())
}
