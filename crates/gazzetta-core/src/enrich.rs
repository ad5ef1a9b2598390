//! Asynchronous content enrichment from external generation services.
//!
//! A generation pass hands out an [`EnrichmentRequest`] naming the block ids
//! it wants filled. Whenever the service resolves, the resulting patches go
//! through the document's single patch-if-present path, so blocks deleted
//! between request and resolution are silent no-ops rather than errors.

use crate::block::BlockId;
use crate::document::NewspaperDocument;
use crate::storage::BoxFuture;
use thiserror::Error;

/// Errors from external generation services.
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("text generation failed: {0}")]
    Text(String),
    #[error("image generation failed: {0}")]
    Image(String),
}

/// What kind of copy the text service should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    Article,
    Headline,
    Quiz,
    Trivia,
}

/// External text-generation service. May fail; the document stays in its
/// last-good state when it does.
pub trait TextGenerator {
    fn generate(
        &self,
        topic: &str,
        mode: GenerationMode,
        language: &str,
    ) -> BoxFuture<'_, Result<String, EnrichError>>;
}

/// External image-generation service. Resolves to an image URL or data URI.
pub trait ImageGenerator {
    fn generate(&self, prompt: &str) -> BoxFuture<'_, Result<String, EnrichError>>;
}

/// A pending request to fill specific blocks with generated text.
#[derive(Debug, Clone)]
pub struct EnrichmentRequest {
    /// Blocks the resolved text should be spliced into.
    pub targets: Vec<BlockId>,
    pub topic: String,
    pub mode: GenerationMode,
    pub language: String,
}

impl EnrichmentRequest {
    pub fn new(
        targets: Vec<BlockId>,
        topic: impl Into<String>,
        mode: GenerationMode,
        language: impl Into<String>,
    ) -> Self {
        Self {
            targets,
            topic: topic.into(),
            mode,
            language: language.into(),
        }
    }
}

/// A resolved patch for one block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockPatch {
    pub block_id: BlockId,
    pub content: String,
}

/// Resolve a request against the text service, producing one patch per
/// target block.
pub fn run_enrichment<'a>(
    generator: &'a dyn TextGenerator,
    request: &'a EnrichmentRequest,
) -> BoxFuture<'a, Result<Vec<BlockPatch>, EnrichError>> {
    Box::pin(async move {
        let text = generator
            .generate(&request.topic, request.mode, &request.language)
            .await?;
        Ok(request
            .targets
            .iter()
            .map(|&block_id| BlockPatch {
                block_id,
                content: text.clone(),
            })
            .collect())
    })
}

/// Apply resolved patches to the document. Ids that no longer exist are
/// skipped. Returns how many patches landed.
pub fn apply_patches(doc: &mut NewspaperDocument, patches: &[BlockPatch]) -> usize {
    let mut applied = 0;
    for patch in patches {
        if doc.patch_block(patch.block_id, |block| {
            block.content = patch.content.clone();
        }) {
            applied += 1;
        } else {
            log::debug!("enrichment target {} no longer exists, skipping", patch.block_id);
        }
    }
    applied
}
