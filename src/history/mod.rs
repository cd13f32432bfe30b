mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use log::info;
use thiserror::Error;

use crate::cli::Args;
use crate::models::chat::{ Conversation, Sender };

/// Failure surfaced by a transcript backend. The in-memory store never
/// produces one, but the trait leaves room for stores that can.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("Transcript backend failure: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TranscriptStore: Send + Sync {
    async fn add_message(
        &self,
        conversation_id: &str,
        sender: Sender,
        content: &str
    ) -> Result<(), TranscriptError>;

    /// Returns at most the last `limit` messages of the conversation, in
    /// append order. Unknown ids come back as an empty transcript.
    async fn get_conversation(
        &self,
        conversation_id: &str,
        limit: usize
    ) -> Result<Conversation, TranscriptError>;
}

pub fn create_transcript_store(
    args: &Args
) -> Result<Arc<dyn TranscriptStore>, Box<dyn std::error::Error + Send + Sync>> {
    match args.transcript_type.to_lowercase().as_str() {
        "memory" => Ok(Arc::new(memory::MemoryTranscriptStore::new())),
        _ =>
            Err(
                Box::new(
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!("Unsupported transcript store type: {}", args.transcript_type)
                    )
                )
            ),
    }
}

pub fn initialize_transcript_store(
    args: &Args
) -> Result<Arc<dyn TranscriptStore>, Box<dyn std::error::Error + Send + Sync>> {
    info!("Chat transcripts will be stored in: {}", args.transcript_type);
    create_transcript_store(args)
}
