use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use marka_annotate::annotate;
use marka_config::batch::BatchConfig;
use marka_vision::TextReader;

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub annotated: usize,
    pub failed: usize,
}

/// Run OCR over every eligible image in the source folder, strictly in
/// sequence: read bytes, analyze, annotate.
///
/// A per-image failure is logged and counted unless `fail_fast` is set, in
/// which case it aborts the remaining batch.
pub async fn run_batch(reader: &dyn TextReader, batch: &BatchConfig) -> Result<BatchSummary> {
    let images = list_images(&batch.source_dir)?;

    if images.is_empty() {
        tracing::info!(dir = %batch.source_dir.display(), "no eligible images found");
    }

    let mut summary = BatchSummary::default();

    for path in images {
        println!("\nPerforming OCR on {}\n", path.display());
        summary.processed += 1;

        match process_image(reader, &path, &batch.output_dir).await {
            Ok(Some(_)) => summary.annotated += 1,
            Ok(None) => {}
            Err(err) if batch.fail_fast => {
                return Err(err.context(format!("failed on {}", path.display())));
            }
            Err(err) => {
                summary.failed += 1;
                tracing::error!(image = %path.display(), "skipping image: {err:#}");
            }
        }
    }

    Ok(summary)
}

async fn process_image(
    reader: &dyn TextReader,
    path: &Path,
    output_dir: &Path,
) -> Result<Option<PathBuf>> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    let result = reader
        .analyze(&bytes)
        .await
        .context("text analysis request failed")?;

    let saved = annotate(path, &result, output_dir)
        .with_context(|| format!("failed to annotate {}", path.display()))?;

    Ok(saved)
}

/// Non-recursive listing of the source folder, keeping jpg/jpeg/png files
/// (case-insensitive) and sorting for a deterministic processing order.
fn list_images(source_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(source_dir)
        .with_context(|| format!("failed to list {}", source_dir.display()))?;

    let mut images = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && has_image_extension(&path) {
            images.push(path);
        }
    }

    images.sort();
    Ok(images)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|ok| ext.eq_ignore_ascii_case(ok)))
}
