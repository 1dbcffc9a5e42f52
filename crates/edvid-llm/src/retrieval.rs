//! Context retrieval seam.
//!
//! Retrieval internals (embedding store, reranking) live behind this
//! interface; the pipeline only needs "query + corpus -> context string".

use async_trait::async_trait;

use crate::error::LlmResult;

/// Produces the context string handed to the content generator.
#[async_trait]
pub trait ContextRetriever: Send + Sync {
    /// Given a free-text query and the uploaded document texts, return the
    /// context most relevant to the query.
    async fn retrieve(&self, query: &str, documents: &[String]) -> LlmResult<String>;
}

/// Trivial retriever: concatenates every document, ignoring the query.
#[derive(Debug, Default, Clone)]
pub struct ConcatRetriever;

#[async_trait]
impl ContextRetriever for ConcatRetriever {
    async fn retrieve(&self, _query: &str, documents: &[String]) -> LlmResult<String> {
        Ok(documents.join("\n\n"))
    }
}
