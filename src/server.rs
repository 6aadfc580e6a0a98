//! HTTP proxy so browser frontends can call the img2img API without holding
//! the API key.

use crate::{
    client::ModelsLabClient,
    config::ServerConfig,
    error::{ModelsLabError, Result},
    models::GenerationRequest,
};
use actix_web::{http::Method, middleware::DefaultHeaders, web, App, HttpResponse, HttpServer};
use serde::Deserialize;
use serde_json::json;

pub const DEFAULT_PROMPT: &str = "enhance this drawing, make it beautiful and artistic";
pub const DEFAULT_STRENGTH: f64 = 0.98;
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Deserialize)]
pub struct GenerateBody {
    #[serde(rename = "imageBase64", default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub strength: Option<f64>,
    #[serde(default)]
    pub model_id: Option<String>,
}

impl GenerateBody {
    fn into_request(self, image: String) -> GenerationRequest {
        let prompt = self
            .prompt
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

        // 0 means "unset" for browser clients, same as a missing field.
        let strength = self
            .strength
            .filter(|s| *s != 0.0 && !s.is_nan())
            .unwrap_or(DEFAULT_STRENGTH);

        let mut request = GenerationRequest::new(prompt, image)
            .with_strength(strength)
            .with_base64_output(true);
        if let Some(model_id) = self.model_id {
            request = request.with_model(model_id);
        }
        request
    }
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "Server is running!" }))
}

async fn generate(client: web::Data<ModelsLabClient>, body: web::Json<GenerateBody>) -> HttpResponse {
    let mut body = body.into_inner();
    let image = match body.image_base64.take().filter(|img| !img.is_empty()) {
        Some(image) => image,
        None => {
            return HttpResponse::BadRequest()
                .json(json!({ "success": false, "error": "No image provided" }))
        }
    };

    log::info!("🎨 Sending image to ModelsLab...");
    match generate_output(&client, body.into_request(image)).await {
        Ok(output) => {
            log::info!("✅ Generation finished");
            HttpResponse::Ok().json(json!({ "success": true, "output": output }))
        }
        Err(e) => {
            log::error!("❌ ModelsLab error: {}", e);
            HttpResponse::InternalServerError()
                .json(json!({ "success": false, "error": error_text(&e) }))
        }
    }
}

/// Frontends show the backend's own message; other failures use `Display`.
fn error_text(e: &ModelsLabError) -> String {
    match e {
        ModelsLabError::ApiError(msg) | ModelsLabError::FetchError(msg) if !msg.is_empty() => {
            msg.clone()
        }
        ModelsLabError::ApiError(_) => "Unknown API response".to_string(),
        ModelsLabError::FetchError(_) => "Failed to fetch result".to_string(),
        other => other.to_string(),
    }
}

async fn generate_output(client: &ModelsLabClient, request: GenerationRequest) -> Result<String> {
    let result = client.generate(request).await?;
    client.resolve_output(&result.image_url).await
}

async fn preflight() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().limit(MAX_BODY_BYTES))
        .route("/", web::get().to(health))
        .service(
            web::resource("/api/generate")
                .route(web::post().to(generate))
                .route(web::method(Method::OPTIONS).to(preflight)),
        );
}

fn cors_headers(origin: &str) -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", origin.to_string()))
        .add(("Access-Control-Allow-Credentials", "true"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
        .add(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
}

pub async fn run(config: ServerConfig, client: ModelsLabClient) -> std::io::Result<()> {
    let client = web::Data::new(client);

    log::info!("✅ Server running on port {}", config.port);
    log::info!("✅ Forwarding to {}", client.endpoint());
    log::info!("✅ Frontend origin: {}", config.frontend_url);

    let frontend_url = config.frontend_url.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors_headers(&frontend_url))
            .app_data(client.clone())
            .configure(configure)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
