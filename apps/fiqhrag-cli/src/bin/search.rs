//! One-shot retrieval against the persisted index.
//!
//! Usage: fiqhrag-search <query> [--limit N]
//!        fiqhrag-search --by <field> <value>

use std::env;
use std::str::FromStr;

use anyhow::{bail, Result};

use fiqhrag_core::config::AppConfig;
use fiqhrag_embed::build_embedder;
use fiqhrag_index::MetadataField;
use fiqhrag_retrieval::Retriever;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <query> [--limit N]", args[0]);
        eprintln!("       {} --by <field> <value>   (field: book|chapter|madhhab|author)", args[0]);
        std::process::exit(1);
    }

    let config = AppConfig::load()?;
    let embedder = build_embedder(&config.embeddings)?;
    let retriever = Retriever::open(&config.storage, config.retrieval.clone(), embedder)?;

    if args[1] == "--by" {
        if args.len() < 4 {
            bail!("--by requires a field and a value");
        }
        let field = MetadataField::from_str(&args[2])?;
        let hits = retriever.search_by_metadata(field, &args[3]);
        println!("{} matching records", hits.len());
        for (i, chunk) in hits.iter().enumerate() {
            println!("\n{}. [{}] {}", i + 1, chunk.book, chunk.text);
        }
        return Ok(());
    }

    let query = &args[1];
    let mut limit = None;
    let mut i = 2;
    while i < args.len() {
        if args[i] == "--limit" {
            let Some(value) = args.get(i + 1) else {
                bail!("--limit requires a number");
            };
            limit = Some(value.parse::<usize>()?);
            i += 1;
        }
        i += 1;
    }

    let result = retriever.retrieve_with_threshold(query, limit)?;
    println!(
        "{} results for \"{}\" (confidence {:.2})",
        result.documents.len(),
        query,
        result.confidence
    );
    for (i, doc) in result.documents.iter().enumerate() {
        println!("\n{}. score={:.4}  [{}]", i + 1, doc.similarity_score, doc.chunk.book);
        println!("   {}", doc.chunk.text);
    }
    Ok(())
}
