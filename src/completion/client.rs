use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::campaign::Message;
use crate::error::Error;

use super::{ApiErrorBody, CompletionApi, PromptRequest, PromptResponse};

/// Reqwest-backed adapter for a chat-completions endpoint speaking the
/// `{model, messages}` / `{choices}` wire format with bearer auth.
#[derive(Clone, Debug)]
pub struct CompletionClient {
    http: Client,
    base_url: String,
    token: String,
    model: String,
}

impl CompletionClient {
    pub fn new(
        base_url: String,
        token: String,
        model: String,
        timeout: Option<Duration>,
    ) -> Result<CompletionClient, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(Error::CompletionRequestFailed)?;

        Ok(CompletionClient {
            http,
            base_url,
            token,
            model,
        })
    }
}

#[async_trait]
impl CompletionApi for CompletionClient {
    #[tracing::instrument(skip(self, transcript), fields(messages = transcript.len()))]
    async fn submit_transcript(&self, transcript: &[Message]) -> Result<String, Error> {
        let request = PromptRequest {
            model: &self.model,
            messages: transcript,
        };

        let response = self
            .http
            .post(&self.base_url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await
            .map_err(Error::CompletionRequestFailed)?;

        let status = response.status();
        if status.is_success() {
            let response: PromptResponse = response
                .json()
                .await
                .map_err(Error::CompletionResponseMalformed)?;

            return response.into_first_content();
        }

        match response.json::<ApiErrorBody>().await {
            Ok(body) => Err(Error::CompletionApiRejected {
                status: status.as_u16(),
                code: body.code,
                message: body.message,
            }),
            Err(_) => Err(Error::CompletionUnexpectedStatus {
                status: status.as_u16(),
            }),
        }
    }
}
