use std::fs;
use std::path::{Path, PathBuf};

use marka_types::RecognitionResult;

mod draw;

pub use draw::{STROKE_COLOR, draw_polygon_outline};

#[derive(Debug, thiserror::Error)]
pub enum AnnotateError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Overlay the recognition result's bounding polygons on the source image
/// and persist the annotated copy as `text_<stem>.jpg` under `output_dir`.
///
/// Returns `Ok(None)` without touching the filesystem when the result holds
/// no text. Each recognized line is printed to stdout in encounter order.
/// An existing file at the output path is overwritten.
pub fn annotate(
    image_path: &Path,
    result: &RecognitionResult,
    output_dir: &Path,
) -> Result<Option<PathBuf>, AnnotateError> {
    if !result.has_text() {
        tracing::debug!(image = %image_path.display(), "no text detected, skipping");
        return Ok(None);
    }

    let mut canvas = image::open(image_path)?.to_rgb8();

    println!("Text detected:");
    for line in result.lines() {
        println!("  {}", line.text);

        if line.bounding_polygon.len() == 4 {
            draw_polygon_outline(&mut canvas, &line.bounding_polygon);
        } else {
            tracing::warn!(
                text = %line.text,
                points = line.bounding_polygon.len(),
                "skipping line with malformed bounding polygon"
            );
        }
    }

    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join(output_file_name(image_path));
    canvas.save(&output_path)?;

    println!("\n  Results saved in {}", output_path.display());

    Ok(Some(output_path))
}

/// `Lincoln.png` becomes `text_Lincoln.jpg`; the output is always JPEG
/// regardless of the source extension.
fn output_file_name(source: &Path) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    format!("text_{stem}.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use marka_types::{PolygonPoint, ReadResult, RecognizedLine, TextBlock};

    fn result_with_one_line() -> RecognitionResult {
        RecognitionResult {
            read_result: Some(ReadResult {
                blocks: vec![TextBlock {
                    lines: vec![RecognizedLine {
                        text: "Hello".into(),
                        bounding_polygon: [(10.0, 10.0), (50.0, 10.0), (50.0, 30.0), (10.0, 30.0)]
                            .into_iter()
                            .map(|(x, y)| PolygonPoint { x, y })
                            .collect(),
                    }],
                }],
            }),
        }
    }

    fn write_source_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(100, 60, Rgb([255, 255, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn output_name_is_derived_from_the_stem() {
        assert_eq!(output_file_name(Path::new("images/Lincoln.png")), "text_Lincoln.jpg");
        assert_eq!(output_file_name(Path::new("a.jpeg")), "text_a.jpg");
    }

    #[test]
    fn no_text_produces_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source_image(dir.path(), "empty.png");
        let output_dir = dir.path().join("out");

        let saved = annotate(&source, &RecognitionResult::default(), &output_dir).unwrap();

        assert!(saved.is_none());
        assert!(!output_dir.exists());
    }

    #[test]
    fn one_block_produces_one_jpeg_under_the_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source_image(dir.path(), "sample.png");
        let output_dir = dir.path().join("out");

        let saved = annotate(&source, &result_with_one_line(), &output_dir)
            .unwrap()
            .unwrap();

        assert_eq!(saved, output_dir.join("text_sample.jpg"));
        assert!(saved.exists());

        let annotated = image::open(&saved).unwrap().to_rgb8();
        assert_eq!(annotated.dimensions(), (100, 60));
    }

    #[test]
    fn rerunning_overwrites_with_identical_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source_image(dir.path(), "sample.jpg");
        let output_dir = dir.path().join("out");
        let result = result_with_one_line();

        let first = annotate(&source, &result, &output_dir).unwrap().unwrap();
        let first_bytes = fs::read(&first).unwrap();

        let second = annotate(&source, &result, &output_dir).unwrap().unwrap();
        let second_bytes = fs::read(&second).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_bytes, second_bytes);
    }

    #[test]
    fn unreadable_source_is_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("missing.png");

        let err = annotate(&bogus, &result_with_one_line(), dir.path()).unwrap_err();
        assert!(matches!(err, AnnotateError::Image(_)));
    }
}
