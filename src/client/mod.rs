pub mod delay;
pub mod image_client;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use delay::{Delay, TokioDelay};
pub use image_client::ModelsLabClient;
pub use transport::{HttpTransport, ReqwestTransport};
