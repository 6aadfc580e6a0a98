use serde::Deserialize;
use serde_json::Value;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_PROCESSING: &str = "processing";

/// Body shape shared by the img2img and fetch endpoints. Every field is
/// optional; which ones are required depends on `status`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelsLabResponse {
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub output: Option<Value>,
    #[serde(default)]
    pub fetch_result: Option<Value>,
    #[serde(default)]
    pub eta: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
}

impl ModelsLabResponse {
    /// `status` as text. Non-string values are rendered as JSON, so they
    /// never match a known status.
    pub fn status(&self) -> String {
        value_text(self.status.as_ref())
    }

    pub fn is_success(&self) -> bool {
        self.status() == STATUS_SUCCESS
    }

    pub fn is_processing(&self) -> bool {
        self.status() == STATUS_PROCESSING
    }

    /// First output entry. The backend sends a list, but a bare string is
    /// accepted too.
    pub fn first_output(&self) -> Option<&str> {
        let first = match self.output.as_ref()? {
            Value::Array(items) => items.first()?.as_str(),
            Value::String(url) => Some(url.as_str()),
            _ => None,
        };
        first.filter(|url| !url.is_empty())
    }

    /// Poll URL of a queued job, when it is a non-empty string.
    pub fn fetch_url(&self) -> Option<&str> {
        self.fetch_result
            .as_ref()?
            .as_str()
            .filter(|url| !url.is_empty())
    }

    /// Whole seconds; fractions are truncated, anything unreadable is 0.
    pub fn eta_seconds(&self) -> u64 {
        match &self.eta {
            Some(Value::Number(n)) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f.trunc() as u64))
                .unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse::<f64>().map_or(0, |f| {
                if f > 0.0 {
                    f.trunc() as u64
                } else {
                    0
                }
            }),
            _ => 0,
        }
    }

    /// `message` as text, empty when absent. Validation failures come back
    /// as an object of field errors and are rendered as JSON.
    pub fn message(&self) -> String {
        value_text(self.message.as_ref())
    }

    pub fn id(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }
}

fn value_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
