//! Builds the vector index from a directory of UTF-8 .txt books.
//!
//! Usage: fiqhrag-build-index <books_dir>

use std::env;
use std::path::Path;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use fiqhrag_core::config::AppConfig;
use fiqhrag_core::ingest::BookProcessor;
use fiqhrag_embed::build_embedder;
use fiqhrag_index::{FlatIndex, MetadataStore};
use fiqhrag_query::QueryProcessor;
use fiqhrag_retrieval::Retriever;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <books_dir>", args[0]);
        std::process::exit(1);
    }
    let books_dir = Path::new(&args[1]);

    let config = AppConfig::load()?;
    let embedder = build_embedder(&config.embeddings)?;

    let chunks = BookProcessor::new().process_directory(books_dir)?;
    if chunks.is_empty() {
        println!("nothing to index under {}", books_dir.display());
        return Ok(());
    }

    // The same normalization runs here and at query time.
    let processor = QueryProcessor::new();
    let pb = ProgressBar::new(chunks.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} chunks ({percent}%)")?
            .progress_chars("#>-"),
    );
    let mut vectors = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        vectors.push(embedder.embed(&processor.process(&chunk.text, false))?);
        pb.inc(1);
    }
    pb.finish_with_message("embedding complete");

    let index = FlatIndex::new(embedder.dim())?;
    let retriever = Retriever::from_parts(
        embedder,
        index,
        MetadataStore::new(),
        config.retrieval.clone(),
        &config.storage,
    )?;
    let count = chunks.len();
    retriever.add_documents(vectors, chunks)?;
    println!(
        "indexed {} chunks into {}",
        count,
        config.storage.index_path().display()
    );
    Ok(())
}
