use std::fs;

use tempfile::TempDir;

use fiqhrag_core::config::AppConfig;
use fiqhrag_core::ingest::{BookProcessor, ChunkingConfig};

#[test]
fn process_directory_single_small_book() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::write(dir.join("almuwatta.txt"), "نص قصير من كتاب الفقه للاختبار هنا").unwrap();

    let processor = BookProcessor::new();
    let chunks = processor.process_directory(dir).expect("process");

    assert_eq!(chunks.len(), 1, "one small book becomes one chunk");
    assert_eq!(chunks[0].book, "almuwatta");
    assert_eq!(chunks[0].chapter, None);
}

#[test]
fn chapter_comes_from_subdirectory() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::create_dir_all(dir.join("zakat")).unwrap();
    fs::write(dir.join("zakat").join("book.txt"), "محتوى باب الزكاة في هذا الكتاب").unwrap();

    let chunks = BookProcessor::new().process_directory(dir).expect("process");

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].chapter.as_deref(), Some("zakat"));
}

#[test]
fn long_book_chunks_overlap() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    let words: Vec<String> = (0..25).map(|i| format!("كلمة{i}")).collect();
    fs::write(dir.join("long.txt"), words.join(" ")).unwrap();

    let processor = BookProcessor::with_chunking(ChunkingConfig { words_per_chunk: 10, overlap_words: 2 });
    let chunks = processor.process_directory(dir).expect("process");

    assert!(chunks.len() > 1, "book longer than one window splits");
    let first: Vec<&str> = chunks[0].text.split_whitespace().collect();
    let second: Vec<&str> = chunks[1].text.split_whitespace().collect();
    assert_eq!(&first[first.len() - 2..], &second[..2], "windows share the overlap");
}

#[test]
fn page_number_lines_are_dropped() {
    let cleaned = fiqhrag_core::ingest::clean_text("الفقه هو العلم بالأحكام الشرعية\n42\nص\nومصادره الكتاب والسنة والإجماع");
    assert!(!cleaned.contains("42"));
    assert!(cleaned.contains("الفقه هو العلم بالأحكام الشرعية"));
}

#[test]
fn config_from_file_with_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[embeddings]
model_name = "aubmindlab/bert-base-arabertv2"

[storage]
index_path = "data/index.bin"
metadata_path = "data/metadata.json"
"#,
    )
    .unwrap();

    let config = AppConfig::from_file(&path).expect("load config");
    assert_eq!(config.embeddings.device, "cpu");
    assert_eq!(config.retrieval.top_k, 3);
    assert!((config.retrieval.score_threshold - 0.5).abs() < f32::EPSILON);
    assert!(!config.storage.create_if_missing);
}

#[test]
fn missing_required_section_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[retrieval]\ntop_k = 5\n").unwrap();

    assert!(AppConfig::from_file(&path).is_err());
}
