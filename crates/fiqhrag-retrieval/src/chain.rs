//! Context assembly and cited answer orchestration.

use fiqhrag_core::types::{Answer, RetrievedDocument, SourceAttribution};
use fiqhrag_core::{Error, Result};

use crate::retriever::Retriever;

/// Canned terminal reply when retrieval surfaces nothing usable.
const INSUFFICIENT_INFORMATION: &str =
    "آسف، لم أتمكن من العثور على معلومات كافية للإجابة على سؤالك.";

pub struct RagChain {
    retriever: Retriever,
}

impl RagChain {
    pub fn new(retriever: Retriever) -> Self {
        Self { retriever }
    }

    pub fn retriever(&self) -> &Retriever {
        &self.retriever
    }

    /// Renders ranked documents as numbered, source-attributed blocks:
    /// `"{n}. {text}\n[{book} - {chapter} ({madhhab})]"`, blank-line joined.
    pub fn format_context(documents: &[RetrievedDocument]) -> String {
        let mut parts = Vec::with_capacity(documents.len());
        for (idx, doc) in documents.iter().enumerate() {
            let chunk = &doc.chunk;
            let mut source = format!("[{}", chunk.book);
            if let Some(chapter) = &chunk.chapter {
                source.push_str(" - ");
                source.push_str(chapter);
            }
            if let Some(madhhab) = &chunk.madhhab {
                source.push_str(" (");
                source.push_str(madhhab);
                source.push(')');
            }
            source.push(']');
            parts.push(format!("{}. {}\n{}", idx + 1, chunk.text, source));
        }
        parts.join("\n\n")
    }

    /// Retrieves, filters, and assembles a cited answer context.
    ///
    /// An empty filtered set and a per-query embedding failure both yield the
    /// fixed fallback payload; caller errors (`InvalidTopK`, dimension
    /// mismatches) still propagate.
    pub fn generate_answer(&self, query: &str, top_k: Option<usize>) -> Result<Answer> {
        let result = match self.retriever.retrieve_with_threshold(query, top_k) {
            Ok(result) => result,
            Err(Error::Embedding(reason)) => {
                tracing::warn!(%reason, "query embedding failed, returning fallback");
                return Ok(Self::fallback(query));
            }
            Err(e) => return Err(e),
        };
        if result.documents.is_empty() {
            return Ok(Self::fallback(query));
        }

        let context = Self::format_context(&result.documents);
        let sources: Vec<SourceAttribution> = result
            .documents
            .iter()
            .map(|doc| SourceAttribution {
                text: doc.chunk.text.clone(),
                book: doc.chunk.book.clone(),
                chapter: doc.chunk.chapter.clone(),
                madhhab: doc.chunk.madhhab.clone(),
                relevance: doc.similarity_score,
            })
            .collect();
        let retrieval_count = sources.len();
        Ok(Answer {
            query: query.to_string(),
            context,
            sources,
            confidence: result.confidence,
            retrieval_count,
        })
    }

    fn fallback(query: &str) -> Answer {
        Answer {
            query: query.to_string(),
            context: INSUFFICIENT_INFORMATION.to_string(),
            sources: Vec::new(),
            confidence: 0.0,
            retrieval_count: 0,
        }
    }
}

/// Appends a numbered Arabic citation list to an answer body.
pub fn append_citations(answer: &str, sources: &[SourceAttribution]) -> String {
    if sources.is_empty() {
        return answer.to_string();
    }
    let mut out = String::from(answer);
    out.push_str("\n\nالمصادر:\n");
    for (idx, source) in sources.iter().enumerate() {
        let mut line = format!("[{}] {}", idx + 1, source.book);
        if let Some(chapter) = &source.chapter {
            line.push_str(" - ");
            line.push_str(chapter);
        }
        if let Some(madhhab) = &source.madhhab {
            line.push_str(" (");
            line.push_str(madhhab);
            line.push(')');
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}
