//! Book corpus ingestion.
//!
//! Walks a directory of UTF-8 `.txt` books and produces word-window chunks
//! tagged with the book title (file stem) and chapter (subdirectory, when
//! present). The window policy here is deliberately simple; callers with
//! their own segmentation feed `DocumentChunk` records in directly.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::DocumentChunk;

#[derive(Debug, Clone)]
pub struct ChunkingConfig {
    pub words_per_chunk: usize,
    pub overlap_words: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self { words_per_chunk: 300, overlap_words: 50 }
    }
}

#[derive(Default)]
pub struct BookProcessor {
    chunking: ChunkingConfig,
}

impl BookProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chunking(chunking: ChunkingConfig) -> Self {
        Self { chunking }
    }

    pub fn process_directory(&self, books_dir: &Path) -> Result<Vec<DocumentChunk>> {
        let files = list_txt_files(books_dir);
        if files.is_empty() {
            tracing::warn!("no .txt books found under {}", books_dir.display());
            return Ok(vec![]);
        }
        let mut all_chunks = Vec::new();
        for (file_index, path) in files.iter().enumerate() {
            tracing::info!("processing book {}/{}: {}", file_index + 1, files.len(), path.display());
            let raw = read_file_content(path)?;
            let book = book_title(path);
            let chapter = chapter_from_path(path, books_dir);
            let cleaned = clean_text(&raw);
            all_chunks.extend(self.chunk_book(&cleaned, &book, chapter.as_deref()));
        }
        tracing::info!("processed {} books into {} chunks", files.len(), all_chunks.len());
        Ok(all_chunks)
    }

    fn chunk_book(&self, text: &str, book: &str, chapter: Option<&str>) -> Vec<DocumentChunk> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return vec![];
        }
        let window = self.chunking.words_per_chunk.max(1);
        let overlap = self.chunking.overlap_words.min(window - 1);
        let mut chunks = Vec::new();
        let mut start = 0;
        while start < words.len() {
            let end = (start + window).min(words.len());
            chunks.push(DocumentChunk {
                text: words[start..end].join(" "),
                book: book.to_string(),
                chapter: chapter.map(str::to_string),
                madhhab: None,
                author: None,
            });
            if end >= words.len() {
                break;
            }
            start = end - overlap;
        }
        chunks
    }
}

fn read_file_content(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(_) => Ok(String::from_utf8_lossy(&fs::read(path)?).to_string()),
    }
}

fn book_title(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default()
}

fn chapter_from_path(path: &Path, books_dir: &Path) -> Option<String> {
    let relative = path.strip_prefix(books_dir).unwrap_or(path);
    let parent = relative.parent()?;
    let chapter = parent.to_string_lossy();
    if chapter.is_empty() {
        None
    } else {
        Some(chapter.to_string())
    }
}

/// Drops page-number lines and very short header/footer noise.
pub fn clean_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| line.chars().count() > 5 && !line.chars().all(|c| c.is_ascii_digit()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn list_txt_files(root: &Path) -> Vec<PathBuf> {
    let mut txt_files = Vec::new();
    for entry in walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("txt") {
            txt_files.push(path.to_path_buf());
        }
    }
    txt_files.sort();
    txt_files
}
