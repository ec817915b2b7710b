mod client;

pub use client::{ImageAnalysisClient, ServiceError, TextReader};
