pub mod image;
pub mod response;

pub use image::*;
pub use response::*;
