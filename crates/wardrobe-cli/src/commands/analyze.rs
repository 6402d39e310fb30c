//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::fs;
use std::path::{Path, PathBuf};
use wardrobe_domain::{ImageMime, ImagePayload, InputSource};
use wardrobe_stylist::{validate_uploads, Stylist, StylistError, UploadLimits, UploadedFile};

/// Execute the analyze command.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    stylist: &Stylist,
    limits: &UploadLimits,
    formatter: &Formatter,
) -> Result<()> {
    let text = args.text.as_deref().map(str::trim).filter(|t| !t.is_empty());
    let source = InputSource::from_inputs(!args.images.is_empty(), text.is_some()).ok_or_else(
        || CliError::InvalidInput("Provide --text, at least one --image, or both".to_string()),
    )?;

    let images = load_images(&args.images, limits)?;
    let analysis = stylist.analyze_closet(text, &images).await?;

    println!("{}", formatter.format_analysis(&analysis, source)?);
    Ok(())
}

/// Read image files and check them against the upload limits.
///
/// The media type comes from the file extension.
pub fn load_images(paths: &[PathBuf], limits: &UploadLimits) -> Result<Vec<ImagePayload>> {
    let files = paths
        .iter()
        .map(|path| read_upload(path))
        .collect::<Result<Vec<_>>>()?;
    Ok(validate_uploads(files, limits).map_err(StylistError::from)?)
}

fn read_upload(path: &Path) -> Result<UploadedFile> {
    let data = fs::read(path)
        .map_err(|e| CliError::InvalidInput(format!("Cannot read {}: {}", path.display(), e)))?;
    let content_type = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(ImageMime::from_extension)
        .map(|mime| mime.as_str().to_string());
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    Ok(UploadedFile {
        filename,
        content_type,
        data,
    })
}
