use serde::{Deserialize, Serialize};

/// One corner of a bounding polygon, in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonPoint {
    pub x: f32,
    pub y: f32,
}

/// A single recognized line of text with its 4-corner bounding quadrilateral.
///
/// Corners follow the service's winding order: top-left, top-right,
/// bottom-right, bottom-left.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedLine {
    pub text: String,
    #[serde(rename = "boundingPolygon")]
    pub bounding_polygon: Vec<PolygonPoint>,
}

/// A grouping of recognized lines (roughly a paragraph).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub lines: Vec<RecognizedLine>,
}

/// The "read" section of an analysis reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadResult {
    #[serde(default)]
    pub blocks: Vec<TextBlock>,
}

/// Full result of one analyze call.
///
/// A missing `readResult` section and an empty block list are distinct
/// service states; both mean "no text detected" and neither is an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognitionResult {
    #[serde(rename = "readResult")]
    pub read_result: Option<ReadResult>,
}

impl RecognitionResult {
    /// Blocks of the read section, or an empty slice when the section is absent.
    pub fn blocks(&self) -> &[TextBlock] {
        self.read_result
            .as_ref()
            .map(|read| read.blocks.as_slice())
            .unwrap_or_default()
    }

    pub fn has_text(&self) -> bool {
        !self.blocks().is_empty()
    }

    /// All lines in encounter order: block order, then line order within block.
    pub fn lines(&self) -> impl Iterator<Item = &RecognizedLine> {
        self.blocks().iter().flat_map(|block| block.lines.iter())
    }
}
