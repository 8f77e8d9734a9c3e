use gloo_net::http::Request;
use shared::endpoint::QueueEndpoint;

use crate::types::QueuedEval;

pub async fn fetch_evals() -> Result<Vec<QueuedEval>, String> {
    Request::get(QueueEndpoint::ApiEvals.to_str())
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}
