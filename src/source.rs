/// Fetching questions from the spreadsheet-backed endpoint

use crate::question::Question;
use crate::storage::SelectedCategories;
use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// Why a single category produced no questions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Anything that can produce the questions for one category
#[allow(async_fn_in_trait)]
pub trait QuestionSource {
    async fn fetch_category(&self, category: &str) -> Result<Vec<Question>, FetchError>;
}

/// Build `<endpoint>?category=<category>` with the category percent-encoded
pub fn request_url(endpoint: &Url, category: &str) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut().append_pair("category", category);
    url
}

/// Parse a response body, accepting only a JSON array of questions
pub fn parse_questions(body: &str) -> Result<Vec<Question>, FetchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(FetchError::Malformed("expected a JSON array".to_string()));
    };

    items
        .into_iter()
        .map(serde_json::from_value::<Question>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| FetchError::Malformed(e.to_string()))
}

/// Fetch every category one after another, skipping the ones that fail
///
/// Requests are issued sequentially in selection order. Failures are
/// logged and contribute no questions.
pub async fn fetch_all<S: QuestionSource>(
    source: &S,
    categories: &SelectedCategories,
) -> Vec<Question> {
    let mut questions = Vec::new();

    for category in categories.iter() {
        match source.fetch_category(category).await {
            Ok(fetched) => {
                log::debug!("Fetched {} questions for {}", fetched.len(), category);
                questions.extend(fetched);
            }
            Err(e) => {
                log::warn!("Skipping category {}: {}", category, e);
            }
        }
    }

    questions
}

/// HTTP GET against the configured endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct HttpQuestionSource {
    endpoint: Url,
}

impl HttpQuestionSource {
    pub fn new(endpoint: Url) -> Self {
        HttpQuestionSource { endpoint }
    }
}

impl QuestionSource for HttpQuestionSource {
    async fn fetch_category(&self, category: &str) -> Result<Vec<Question>, FetchError> {
        let url = request_url(&self.endpoint, category);

        let response = Request::get(url.as_str())
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_questions(&body)
    }
}
