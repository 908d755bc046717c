//! Text extraction from resume files

use crate::error::{CareerCompassError, Result};
use pulldown_cmark::{html, Parser};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(CareerCompassError::Io)?;
        self.extract_from_bytes(&bytes)
    }
}

impl PdfExtractor {
    /// Extract text from an in-memory PDF document. Page breaks come out of
    /// the decoder as form feeds and are normalized to single spaces so the
    /// result reads as one continuous text.
    pub fn extract_from_bytes(&self, bytes: &[u8]) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            CareerCompassError::PdfExtraction(format!("Failed to extract text from PDF: {}", e))
        })?;
        Ok(text.replace('\u{c}', " "))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read(path).await.map_err(CareerCompassError::Io)?;
        String::from_utf8(content).map_err(|e| {
            CareerCompassError::TextProcessing(format!("File is not valid UTF-8: {}", e))
        })
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path).await.map_err(CareerCompassError::Io)?;

        let parser = Parser::new(&markdown);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(self.html_to_text(&html_output))
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> String {
        let text = html
            .replace("<br>", "\n")
            .replace("<br/>", "\n")
            .replace("</p>", "\n\n")
            .replace("</li>", "\n")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let re = regex::Regex::new(r"<[^>]*>").unwrap();
        let clean_text = re.replace_all(&text, "");

        let lines: Vec<String> = clean_text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_strips_tags() {
        let extractor = MarkdownExtractor;
        let html = "<h1>Jane Doe</h1><p>Senior <b>engineer</b> &amp; mentor</p>";
        let text = extractor.html_to_text(html);
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Senior engineer & mentor"));
        assert!(!text.contains('<'));
    }

    #[test]
    fn test_pdf_bytes_rejects_garbage() {
        let extractor = PdfExtractor;
        let result = extractor.extract_from_bytes(b"not a pdf document");
        assert!(result.is_err());
    }
}
