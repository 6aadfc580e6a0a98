use crate::{
    client::{Delay, HttpTransport, ReqwestTransport, TokioDelay},
    config::{ModelsLabConfig, API_KEY_VAR},
    error::{ModelsLabError, Result},
    models::{GenerationRequest, GenerationResult, ModelsLabResponse},
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

/// Wire body for the realtime img2img endpoint. Everything that is not on
/// `GenerationRequest` is pinned to the values the backend expects.
#[derive(Debug, Serialize)]
struct Img2ImgPayload<'a> {
    key: &'a str,
    model_id: &'a str,
    prompt: &'a str,
    init_image: &'a str,
    width: u32,
    height: u32,
    samples: u32,
    num_inference_steps: u32,
    guidance_scale: f64,
    strength: f64,
    safety_checker: bool,
    base64: &'static str,
    enhance_prompt: bool,
    instant_response: bool,
    n_samples: u32,
    opacity: f64,
    outdir: &'static str,
    padding_down: u32,
    padding_right: u32,
    scale_down: u32,
    temp: bool,
    watermark: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    negative_prompt: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scheduler: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook: Option<&'a str>,
}

impl<'a> Img2ImgPayload<'a> {
    fn new(api_key: &'a str, request: &'a GenerationRequest) -> Self {
        Self {
            key: api_key,
            model_id: &request.model_id,
            prompt: &request.prompt,
            init_image: &request.init_image,
            width: 512,
            height: 512,
            samples: request.samples,
            num_inference_steps: request.num_inference_steps,
            guidance_scale: request.guidance_scale,
            strength: request.strength,
            safety_checker: false,
            base64: if request.base64 { "yes" } else { "no" },
            enhance_prompt: false,
            instant_response: false,
            n_samples: 1,
            opacity: 0.7,
            outdir: "out",
            padding_down: 10,
            padding_right: 10,
            scale_down: 6,
            temp: false,
            watermark: "no",
            negative_prompt: request.negative_prompt.as_deref(),
            scheduler: request.scheduler.as_deref(),
            seed: request.seed,
            webhook: request.webhook.as_deref(),
        }
    }
}

#[derive(Clone)]
pub struct ModelsLabClient {
    api_key: String,
    endpoint: String,
    transport: Arc<dyn HttpTransport>,
    delay: Arc<dyn Delay>,
}

impl ModelsLabClient {
    pub fn new(config: ModelsLabConfig) -> Result<Self> {
        let endpoint = config.endpoint().to_string();
        let api_key = config.api_key.ok_or_else(|| {
            ModelsLabError::ConfigError(format!("{} is not set", API_KEY_VAR))
        })?;

        Ok(Self {
            api_key,
            endpoint,
            transport: Arc::new(ReqwestTransport::new()),
            delay: Arc::new(TokioDelay),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ModelsLabConfig::from_env())
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_delay(mut self, delay: Arc<dyn Delay>) -> Self {
        self.delay = delay;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_payload(&self, request: &GenerationRequest) -> Result<Value> {
        serde_json::to_value(Img2ImgPayload::new(&self.api_key, request))
            .map_err(|e| ModelsLabError::SerializationError(e.to_string()))
    }

    /// Submit one img2img job and return the first output image.
    ///
    /// A `processing` reply suspends the caller for the reported ETA and then
    /// polls `fetch_result` exactly once.
    pub async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult> {
        let payload = self.build_payload(&request)?;

        log::info!("Submitting img2img request with model: {}", request.model_id);
        log::debug!("img2img request payload: {}", redact_key(&payload));

        let body = self.transport.post_json(&self.endpoint, &payload).await?;
        let response = parse_response(&body)?;

        if response.is_success() {
            return first_image(&response);
        }

        if response.is_processing() {
            let fetch_url = response.fetch_url().ok_or_else(|| {
                ModelsLabError::MalformedResponse("processing response has no fetch_result".into())
            })?;
            let eta = response.eta_seconds();

            log::info!("Image processing. ETA: {} seconds", eta);
            log::info!("Fetch URL: {}", fetch_url);

            self.delay.sleep(Duration::from_secs(eta)).await;
            return self.fetch_queued_image(fetch_url).await;
        }

        let message = response.message();
        log::warn!(
            "img2img request rejected (status: '{}'): {}",
            response.status(),
            message
        );
        Err(ModelsLabError::ApiError(message))
    }

    /// Single poll of a queued job. A second `processing` counts as failure.
    async fn fetch_queued_image(&self, fetch_url: &str) -> Result<GenerationResult> {
        let payload = json!({ "key": self.api_key });
        let body = self.transport.post_json(fetch_url, &payload).await?;
        let response = parse_response(&body)?;

        if response.is_success() {
            first_image(&response)
        } else {
            let message = response.message();
            log::warn!(
                "Queued image fetch failed (status: '{}'): {}",
                response.status(),
                message
            );
            Err(ModelsLabError::FetchError(message))
        }
    }

    /// Outputs requested with `base64` point at a `.base64` text file; fetch
    /// its contents. Other URLs are returned as-is.
    pub async fn resolve_output(&self, url: &str) -> Result<String> {
        if !url.ends_with(".base64") {
            return Ok(url.to_string());
        }

        log::info!("Fetching base64 content from: {}", url);
        let data = self.transport.get_text(url).await?;
        log::debug!("Got base64 data, length: {}", data.len());
        Ok(data.trim().to_string())
    }
}

fn parse_response(body: &str) -> Result<ModelsLabResponse> {
    serde_json::from_str(body).map_err(|e| {
        ModelsLabError::MalformedResponse(format!("response is not a JSON object: {}", e))
    })
}

fn first_image(response: &ModelsLabResponse) -> Result<GenerationResult> {
    let image_url = response.first_output().ok_or_else(|| {
        ModelsLabError::MalformedResponse("success response has no output".into())
    })?;

    Ok(GenerationResult {
        image_url: image_url.to_string(),
        id: response.id(),
    })
}

fn redact_key(payload: &Value) -> Value {
    let mut redacted = payload.clone();
    if let Some(obj) = redacted.as_object_mut() {
        obj.insert("key".to_string(), json!("***"));
    }
    redacted
}
