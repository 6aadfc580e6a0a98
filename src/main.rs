use modelslab::logger::{self, LoggerConfig};
use modelslab::{GenerationRequest, ModelsLabClient, ModelsLabConfig};

const EXAMPLE_PROMPT: &str = "realistic";
const EXAMPLE_IMAGE: &str = "https://i.postimg.cc/tTNy1Gb8/person.png";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    logger::init_with_config(LoggerConfig::from_env())?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let config = ModelsLabConfig::from_env();
    logger::log_config_info(&config);

    let client = match ModelsLabClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("❌ Failed to initialize ModelsLab client: {}", e);
            return Err(e.into());
        }
    };

    let request = GenerationRequest::new(EXAMPLE_PROMPT, EXAMPLE_IMAGE).with_fallback_seed();

    let result = {
        let _timer = logger::timer("img2img generation");
        client.generate(request).await
    };

    match result {
        Ok(result) => {
            println!("Generated image URL: {}", result.image_url);
            Ok(())
        }
        Err(e) => {
            log::error!("❌ Image generation failed: {:?}", e);
            Err(e.into())
        }
    }
}
