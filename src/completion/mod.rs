use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::campaign::Message;
use crate::error::Error;

pub mod client;
pub use client::CompletionClient;

/// External large-language-model service returning a generated reply given a
/// transcript. Single attempt per call; failures propagate to the caller.
#[async_trait]
pub trait CompletionApi: Send + Sync {
    async fn submit_transcript(&self, transcript: &[Message]) -> Result<String, Error>;
}

#[derive(Clone, Debug, Serialize)]
pub struct PromptRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
}

#[derive(Clone, Debug, Deserialize)]
pub struct PromptResponse {
    pub choices: Vec<Choice>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Choice {
    pub message: Message,
}

impl PromptResponse {
    pub fn into_first_content(self) -> Result<String, Error> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(Error::CompletionResponseMissingContent)
    }
}

/// Structured error body the completion API returns on recognized failures.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

pub mod test {
    use async_trait::async_trait;

    use crate::campaign::Message;
    use crate::error::Error;

    use super::CompletionApi;

    pub struct MockCompletionApi {
        pub on_submit_transcript:
            Box<dyn Fn(&[Message]) -> Result<String, Error> + Send + Sync>,
    }

    impl MockCompletionApi {
        pub fn new() -> MockCompletionApi {
            MockCompletionApi {
                on_submit_transcript: Box::new(|_| {
                    panic!("submit_transcript was not expected")
                }),
            }
        }
    }

    #[async_trait]
    impl CompletionApi for MockCompletionApi {
        async fn submit_transcript(&self, transcript: &[Message]) -> Result<String, Error> {
            (self.on_submit_transcript)(transcript)
        }
    }
}
