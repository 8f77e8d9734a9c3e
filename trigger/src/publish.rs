use reqwest::{Client, StatusCode};
use shared::endpoint::QueueEndpoint;
use shared::task_eval::TaskEvalRequest;
use std::error::Error;
use std::fmt::{Display, Formatter};
use tracing::debug;

#[derive(Debug)]
pub enum PublishError {
    /// config.yaml was present but unusable
    Config(String),
    /// the queue could not be reached at all
    Transport(reqwest::Error),
    /// the queue answered but did not accept the message
    Rejected(StatusCode),
}

impl Display for PublishError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PublishError::Config(reason) => write!(f, "config error - {}", reason),
            PublishError::Transport(e) => write!(f, "queue unreachable - {}", e),
            PublishError::Rejected(status) => write!(f, "queue rejected message - {}", status),
        }
    }
}

impl Error for PublishError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PublishError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PublishError {
    fn from(e: reqwest::Error) -> Self {
        PublishError::Transport(e)
    }
}

/// Hands the request to the queue and reports whether it was accepted.
/// One attempt, no retry - the caller decides what a failure means.
pub async fn publish_task_eval(
    client: &Client,
    queue_url: &str,
    request: &TaskEvalRequest,
) -> Result<(), PublishError> {
    let response = client
        .post(QueueEndpoint::PublishTaskEval.to_uri(queue_url))
        .json(request)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(PublishError::Rejected(response.status()));
    }

    debug!("Queue accepted task eval with status {}", response.status());
    Ok(())
}
