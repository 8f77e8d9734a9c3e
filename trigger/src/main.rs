use crate::publish::PublishError;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use shared::endpoint::TRIGGER_HOST_HEADER_KEY;
use shared::task_eval::TaskEvalRequest;
use std::process::Command;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod publish;

/// One-shot trigger: publish a single task-eval message, confirm on stdout,
/// exit. A failed publish propagates out of main - no retry, no backoff.
#[tokio::main]
async fn main() -> Result<(), PublishError> {
    let log_level = EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let config = config::read_config().map_err(PublishError::Config)?;
    let request = TaskEvalRequest::new(config.task_id);

    info!(
        "Publishing eval of task '{}' to '{}'",
        request.task_id, config.queue_url
    );

    let client = build_http_client();
    publish::publish_task_eval(&client, &config.queue_url, &request).await?;

    println!("Queued eval of task {}", request.task_id);
    Ok(())
}

fn build_http_client() -> Client {
    let hostname = Command::new("hostname")
        .output()
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .ok();

    let mut headers = HeaderMap::new();
    if let Some(ref h) = hostname {
        if let Ok(value) = HeaderValue::from_str(h) {
            headers.insert(TRIGGER_HOST_HEADER_KEY, value);
        }
    }

    Client::builder()
        .default_headers(headers)
        .build()
        .expect("Failed to build HTTP client")
}
