use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use widget_core::{ChatReply, ChatRequest, ProposalRequest, WidgetConfig};

use crate::backend_trait::ProposalBackend;
use crate::error::{ClientError, Result};

/// HTTP implementation of [`ProposalBackend`] against the proposal
/// backend's REST surface.
///
/// Every failure is terminal for that single exchange: no retry, no
/// backoff. The widget re-enables its input and the user retries by
/// sending another message.
#[derive(Debug, Clone)]
pub struct HttpProposalBackend {
    http: Client,
    api_base: String,
}

impl HttpProposalBackend {
    pub fn new(config: &WidgetConfig) -> Self {
        let http = Client::builder()
            .default_headers(Self::default_headers())
            .build()
            .expect("proposal backend client");

        Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    fn default_headers() -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("accept", "application/json".parse().unwrap());
        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn ensure_success(endpoint: &str, status: StatusCode) -> Result<()> {
        if status.is_success() {
            Ok(())
        } else {
            error!("{} returned {}", endpoint, status);
            Err(ClientError::UnexpectedStatus {
                endpoint: endpoint.to_string(),
                status,
            })
        }
    }
}

#[async_trait]
impl ProposalBackend for HttpProposalBackend {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply> {
        debug!(
            "POST /chat stage={} input_len={}",
            request.stage,
            request.user_input.len()
        );
        let response = self.http.post(self.url("/chat")).json(request).send().await?;
        Self::ensure_success("/chat", response.status())?;

        let body = response.text().await?;
        let reply: ChatReply = serde_json::from_str(&body)?;
        info!("/chat -> next_stage={}", reply.next_stage);
        Ok(reply)
    }

    async fn generate_proposal(&self, request: &ProposalRequest) -> Result<()> {
        info!(
            "POST /generate-proposal category={:?}",
            request.category.as_deref()
        );
        let response = self
            .http
            .post(self.url("/generate-proposal"))
            .json(request)
            .send()
            .await?;
        Self::ensure_success("/generate-proposal", response.status())
    }

    async fn upload_resume(
        &self,
        upload_to: &str,
        email: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<()> {
        info!("POST {} file={} ({} bytes)", upload_to, file_name, bytes.len());
        let file = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new()
            .part("resume", file)
            .text("email", email.to_string());

        let response = self
            .http
            .post(self.url(upload_to))
            .multipart(form)
            .send()
            .await?;
        Self::ensure_success(upload_to, response.status())
    }
}
