use async_trait::async_trait;
use widget_core::{ChatReply, ChatRequest, ProposalRequest};

use crate::error::Result;

/// Backend operations the conversation driver depends on. The seam exists
/// so driver tests can script replies without a network.
#[async_trait]
pub trait ProposalBackend: Send + Sync {
    /// One `/chat` exchange: current stage + details + input in, the
    /// server's next stage, updated details and optional message/directive
    /// out.
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply>;

    /// Kick off proposal generation. The response body is unused beyond
    /// success or failure.
    async fn generate_proposal(&self, request: &ProposalRequest) -> Result<()>;

    /// Multipart upload of a resume to the server-chosen path, with the
    /// email the file-upload directive carried.
    async fn upload_resume(
        &self,
        upload_to: &str,
        email: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<()>;
}
