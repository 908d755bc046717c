//! Input manager for resume files

use crate::error::{CareerCompassError, Result};
use crate::input::file_detector::{supported_extensions, FileType};
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

/// Routes resume files to the right extractor and caches results per path.
///
/// Extraction is tolerant of bad content: once a path has been validated, a
/// file the extractor cannot decode yields an empty string rather than an
/// error, and downstream analysis treats empty text as "no signal". Caller
/// mistakes (missing file, unsupported extension) are still reported as
/// errors before extraction starts.
pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(CareerCompassError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;
        if !file_type.is_supported() {
            return Err(CareerCompassError::UnsupportedFormat(format!(
                "Unsupported file type for: {} (supported: {})",
                path.display(),
                supported_extensions().join(", ")
            )));
        }

        let text = match self.run_extractor(file_type, path).await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "Extraction failed for {}, continuing with empty text: {}",
                    path.display(),
                    e
                );
                String::new()
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    async fn run_extractor(&self, file_type: FileType, path: &Path) -> Result<String> {
        match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await
            }
            FileType::Unknown => Err(CareerCompassError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path.extension().and_then(|ext| ext.to_str()).ok_or_else(|| {
            CareerCompassError::InvalidInput(format!("File has no extension: {}", path.display()))
        })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
