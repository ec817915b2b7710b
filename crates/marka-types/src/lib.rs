pub mod types;

pub use types::{PolygonPoint, ReadResult, RecognitionResult, RecognizedLine, TextBlock};
