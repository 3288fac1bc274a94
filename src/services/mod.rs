//! Clients for the external generative services (word explanations and
//! avatar images).

mod error;
mod image_gen;
mod word_info;

pub use error::ServiceError;
pub use image_gen::ImageGenClient;
pub use word_info::{WordInfo, WordInfoClient};
