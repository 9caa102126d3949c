//! Interactive Arabic Q&A demo over the local fiqh corpus.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use fiqhrag_core::config::AppConfig;
use fiqhrag_embed::build_embedder;
use fiqhrag_retrieval::{RagChain, Retriever};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::load()?;
    let embedder = build_embedder(&config.embeddings)?;
    let retriever = Retriever::open(&config.storage, config.retrieval.clone(), embedder)?;
    let chain = RagChain::new(retriever);

    println!("=== Arabic Fiqh RAG Demo ===");
    println!("الرجاء إدخال أسئلتك باللغة العربية (\"quit\" للخروج)");
    println!("{}", "=".repeat(40));

    let stdin = io::stdin();
    loop {
        print!("\nسؤالك: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if matches!(query, "quit" | "exit" | "خروج") {
            break;
        }

        match chain.generate_answer(query, None) {
            Ok(answer) => {
                println!("\nالإجابة:");
                println!("{}", answer.context);
                println!("\nدرجة الثقة: {:.0}%", answer.confidence * 100.0);
                println!("عدد المصادر: {}", answer.retrieval_count);
            }
            Err(e) => eprintln!("خطأ: {e}"),
        }
    }
    Ok(())
}
