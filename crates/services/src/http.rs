use std::env;

use async_trait::async_trait;
use reqwest::Client;

use quiz_core::model::CategoryKey;

use crate::backend::QuizBackend;
use crate::error::BackendError;
use crate::wire::{AnswerPayload, AnswerRequest, QuestionPayload};

/// Where the quiz server lives.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub base_url: String,
}

impl ServerConfig {
    /// Read the server address from `QUIZ_SERVER_URL`, falling back to the
    /// development default.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("QUIZ_SERVER_URL").unwrap_or_else(|_| "http://127.0.0.1:5001".into());
        Self { base_url }
    }

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn quiz_url(&self, category: &CategoryKey, tail: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if tail.is_empty() {
            format!("{base}/quiz/{category}")
        } else {
            format!("{base}/quiz/{category}/{tail}")
        }
    }
}

/// `QuizBackend` over HTTP, speaking the quiz server's JSON routes.
#[derive(Clone)]
pub struct HttpQuizClient {
    client: Client,
    config: ServerConfig,
}

impl HttpQuizClient {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ServerConfig::from_env())
    }
}

#[async_trait]
impl QuizBackend for HttpQuizClient {
    async fn fetch_question(
        &self,
        category: &CategoryKey,
    ) -> Result<QuestionPayload, BackendError> {
        let url = self.config.quiz_url(category, "get_question");
        tracing::debug!(%url, "fetching question");
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(BackendError::HttpStatus(response.status()));
        }
        Ok(response.json().await?)
    }

    async fn submit_answer(
        &self,
        category: &CategoryKey,
        selected: &str,
    ) -> Result<AnswerPayload, BackendError> {
        let url = self.config.quiz_url(category, "answer");
        tracing::debug!(%url, selected, "submitting answer");
        let response = self
            .client
            .post(url)
            .json(&AnswerRequest {
                selected: selected.to_string(),
            })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(BackendError::HttpStatus(response.status()));
        }
        Ok(response.json().await?)
    }

    async fn reset(&self, category: &CategoryKey) -> Result<(), BackendError> {
        // The restart affordance is a page navigation on the server
        // (`/quiz/{category}?reset=1`); the body is HTML and is discarded.
        let url = self.config.quiz_url(category, "");
        tracing::debug!(%url, "resetting session");
        let response = self
            .client
            .get(url)
            .query(&[("reset", "1")])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(BackendError::HttpStatus(response.status()));
        }
        Ok(())
    }
}
