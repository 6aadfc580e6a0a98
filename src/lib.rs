//! Client for the ModelsLab realtime image-to-image API.
//!
//! ```no_run
//! use modelslab::{GenerationRequest, ModelsLabClient};
//!
//! # async fn run() -> modelslab::Result<()> {
//! let client = ModelsLabClient::from_env()?;
//! let request = GenerationRequest::new("realistic", "https://i.postimg.cc/tTNy1Gb8/person.png");
//! let result = client.generate(request).await?;
//! println!("{}", result.image_url);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
#[cfg(feature = "server")]
pub mod server;

pub use client::{Delay, HttpTransport, ModelsLabClient, ReqwestTransport, TokioDelay};
pub use config::{ModelsLabConfig, ServerConfig};
pub use error::{ModelsLabError, Result};
pub use models::{GenerationRequest, GenerationResult};
