//! HTTP API Client
//!
//! Functions for communicating with the LabStock REST API. Generic over the
//! record kind: every collection exposes the same GET/POST/PUT/DELETE shape.
//!
//! No retries, no auth, no caching. Any transport or status failure is
//! surfaced to the caller as a free-text `Err`; status codes are not
//! interpreted beyond ok/not-ok.

use gloo_net::http::{Request, Response};

use crate::config;
use crate::state::records::{Record, SdsLookup};

/// Error body the backend returns on non-2xx responses.
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

fn collection_url<R: Record>() -> String {
    format!("{}/{}", config::api_base(), R::COLLECTION)
}

fn record_url<R: Record>(id: i64) -> String {
    format!("{}/{}/{}", config::api_base(), R::COLLECTION, id)
}

/// Extract the server's error message from a failed response.
async fn error_message(response: Response) -> String {
    let status = response.status();
    response
        .json::<ApiError>()
        .await
        .map(|e| e.error)
        .unwrap_or_else(|_| format!("Server returned status {}", status))
}

/// Fetch an entire collection.
pub async fn fetch_all<R: Record>() -> Result<Vec<R>, String> {
    let response = Request::get(&collection_url::<R>())
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a record. The response carries the canonical record, id included.
pub async fn create<R: Record>(payload: &serde_json::Value) -> Result<R, String> {
    let response = Request::post(&collection_url::<R>())
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Update a record in place. The payload carries all non-id fields; the
/// response is the server's version of the updated record.
pub async fn update<R: Record>(id: i64, payload: &serde_json::Value) -> Result<R, String> {
    let response = Request::put(&record_url::<R>(id))
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a record. The server responds with an empty body.
pub async fn delete<R: Record>(id: i64) -> Result<(), String> {
    let response = Request::delete(&record_url::<R>(id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

/// Fetch the bundled safety-data-sheet lookup document.
///
/// Served from the app's own origin; fetched once at Chemicals-page mount.
pub async fn fetch_sds_lookup() -> Result<SdsLookup, String> {
    let response = Request::get(config::SDS_LOOKUP_PATH)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Server returned status {} for {}",
            response.status(),
            config::SDS_LOOKUP_PATH
        ));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::records::{Chemical, Equipment};

    #[test]
    fn collection_url_joins_base_and_path() {
        let url = collection_url::<Chemical>();
        assert!(url.starts_with(config::api_base()));
        assert!(url.ends_with("/chemicals"));
    }

    #[test]
    fn record_url_appends_id() {
        assert!(record_url::<Equipment>(42).ends_with("/equipment/42"));
    }
}
