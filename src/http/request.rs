use futures_util::StreamExt;
use reqwest::{Client, Method, Response, Url};

use crate::error::RequestError;
use crate::workload::Operation;

use super::PayloadBuffer;

/// Issues one request and drains its response.
///
/// # Errors
///
/// Returns an error on transport failure, on a non-2xx status, or when the
/// body cannot be read.
pub async fn send_request(
    client: &Client,
    operation: Operation,
    url: &Url,
    payload: &PayloadBuffer,
) -> Result<(), RequestError> {
    let method = match operation {
        Operation::Get => Method::GET,
        Operation::Put => Method::PUT,
        Operation::Post => Method::POST,
    };
    let mut request = client.request(method, url.clone());
    if operation.sends_payload() {
        request = request.body(payload.body());
    }

    let response = request
        .send()
        .await
        .map_err(|err| RequestError::Transport { source: err })?;
    let status = response.status();
    drain_response_body(response)
        .await
        .map_err(|err| RequestError::Body { source: err })?;

    if !status.is_success() {
        return Err(RequestError::UnexpectedStatus {
            status: status.as_u16(),
        });
    }
    Ok(())
}

// Reading to the end lets the connection go back to the pool.
async fn drain_response_body(response: Response) -> Result<(), reqwest::Error> {
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        chunk?;
    }
    Ok(())
}
