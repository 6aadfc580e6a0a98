use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL_ID: &str = "realistic-vision-51";
pub const DEFAULT_SCHEDULER: &str = "UniPCMultistepScheduler";
pub const FALLBACK_SEED: u64 = 3555263009;

/// Parameters for one image-to-image transformation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default = "default_model_id")]
    pub model_id: String,
    pub prompt: String,
    #[serde(default)]
    pub negative_prompt: Option<String>,
    /// Source image, either a URL or base64 image data.
    pub init_image: String,
    #[serde(default = "default_samples")]
    pub samples: u32,
    #[serde(default = "default_num_inference_steps")]
    pub num_inference_steps: u32,
    #[serde(default = "default_guidance_scale")]
    pub guidance_scale: f64,
    #[serde(default = "default_strength")]
    pub strength: f64,
    #[serde(default = "default_scheduler")]
    pub scheduler: Option<String>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub webhook: Option<String>,
    /// Ask the backend for base64 output files instead of image files.
    #[serde(default)]
    pub base64: bool,
}

fn default_model_id() -> String {
    DEFAULT_MODEL_ID.to_string()
}

fn default_samples() -> u32 {
    1
}

fn default_num_inference_steps() -> u32 {
    30
}

fn default_guidance_scale() -> f64 {
    1.0
}

fn default_strength() -> f64 {
    0.90
}

fn default_scheduler() -> Option<String> {
    Some(DEFAULT_SCHEDULER.to_string())
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, init_image: impl Into<String>) -> Self {
        Self {
            model_id: default_model_id(),
            prompt: prompt.into(),
            negative_prompt: None,
            init_image: init_image.into(),
            samples: default_samples(),
            num_inference_steps: default_num_inference_steps(),
            guidance_scale: default_guidance_scale(),
            strength: default_strength(),
            scheduler: default_scheduler(),
            seed: None,
            webhook: None,
            base64: false,
        }
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        self.negative_prompt = Some(negative_prompt.into());
        self
    }

    pub fn with_samples(mut self, samples: u32) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_inference_steps(mut self, steps: u32) -> Self {
        self.num_inference_steps = steps;
        self
    }

    pub fn with_guidance_scale(mut self, guidance_scale: f64) -> Self {
        self.guidance_scale = guidance_scale;
        self
    }

    /// Clamped into `[0, 1]`.
    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength.clamp(0.0, 1.0);
        self
    }

    pub fn with_scheduler(mut self, scheduler: impl Into<String>) -> Self {
        self.scheduler = Some(scheduler.into());
        self
    }

    pub fn without_scheduler(mut self) -> Self {
        self.scheduler = None;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pins the seed to `FALLBACK_SEED` for reproducible runs.
    pub fn with_fallback_seed(self) -> Self {
        self.with_seed(FALLBACK_SEED)
    }

    pub fn with_webhook(mut self, webhook: impl Into<String>) -> Self {
        self.webhook = Some(webhook.into());
        self
    }

    pub fn with_base64_output(mut self, enabled: bool) -> Self {
        self.base64 = enabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub image_url: String,
    /// Backend job id, when reported.
    pub id: Option<String>,
}
