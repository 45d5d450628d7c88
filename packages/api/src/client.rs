//! Typed REST client for the collection endpoints.

use serde::Deserialize;
use store::{ApiConfig, Resource};
use tracing::debug;

use crate::error::FetchError;
use crate::transport::{HttpRequest, HttpResponse, Transport};

/// Error body the backend sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for `GET`/`POST`/`DELETE` on a [`Resource`]'s collection endpoint.
#[derive(Clone, Debug)]
pub struct RestClient<T: Transport> {
    transport: T,
    api: ApiConfig,
}

impl<T: Transport> RestClient<T> {
    pub fn new(transport: T, api: ApiConfig) -> Self {
        Self { transport, api }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET` the whole collection. A `null` body counts as an empty collection.
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, FetchError> {
        let path = self.api.collection_path(R::KIND).to_string();
        let response = self.transport.send(HttpRequest::get(path)).await?;
        let response = ensure_success(response)?;
        let records: Option<Vec<R>> =
            serde_json::from_str(&response.body).map_err(|e| FetchError::Parse(e.to_string()))?;
        let records = records.unwrap_or_default();
        debug!("fetched {} {}", records.len(), R::KIND);
        Ok(records)
    }

    /// `POST` a draft as JSON. The response body is not inspected beyond its status.
    pub async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<(), FetchError> {
        let body = serde_json::to_string(draft).map_err(|e| FetchError::Encode(e.to_string()))?;
        let path = self.api.collection_path(R::KIND).to_string();
        let response = self
            .transport
            .send(HttpRequest::post_json(path, body))
            .await?;
        ensure_success(response)?;
        debug!("created {}", R::KIND.singular());
        Ok(())
    }

    /// `DELETE` a record by id. The status is returned unchecked; only a
    /// request that could not complete is an error.
    pub async fn delete<R: Resource>(&self, id: i64) -> Result<HttpResponse, FetchError> {
        let path = self.api.item_path(R::KIND, id);
        let response = self.transport.send(HttpRequest::delete(path)).await?;
        debug!("deleted {} {id}: HTTP {}", R::KIND.singular(), response.status);
        Ok(response)
    }
}

/// Turn a non-2xx response into [`FetchError::Http`], keeping the backend's
/// `{"error": "..."}` message when there is one.
pub fn ensure_success(response: HttpResponse) -> Result<HttpResponse, FetchError> {
    if response.is_success() {
        return Ok(response);
    }
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .map(|b| b.error);
    Err(FetchError::Http {
        status: response.status,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{MemoryTransport, Method};
    use store::{CustomerRecord, CustomerStatus, NewCustomer, NewProperty, PropertyRecord};

    fn client() -> RestClient<MemoryTransport> {
        RestClient::new(MemoryTransport::new(), ApiConfig::default())
    }

    #[tokio::test]
    async fn test_list_properties() {
        let client = client();
        client.transport().respond(
            200,
            r#"[{"id":1,"title":"Unit A","description":"","address":"Jl. Test","price":150000,"created_at":"2024-03-01T10:20:30Z"}]"#,
        );

        let properties = client.list::<PropertyRecord>().await.unwrap();
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].title, "Unit A");
        assert_eq!(
            client.transport().request_lines(),
            vec!["GET /api/v1/properties"]
        );
    }

    #[tokio::test]
    async fn test_list_null_is_empty() {
        let client = client();
        client.transport().respond(200, "null");
        assert!(client.list::<CustomerRecord>().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_errors() {
        let client = client();
        client
            .transport()
            .respond(500, r#"{"error":"db down"}"#)
            .respond(200, "<html>")
            .fail("connection refused");

        assert_eq!(
            client.list::<CustomerRecord>().await,
            Err(FetchError::Http {
                status: 500,
                message: Some("db down".to_string())
            })
        );
        assert!(matches!(
            client.list::<CustomerRecord>().await,
            Err(FetchError::Parse(_))
        ));
        assert_eq!(
            client.list::<CustomerRecord>().await,
            Err(FetchError::Network("connection refused".to_string()))
        );
    }

    #[tokio::test]
    async fn test_create_posts_json() {
        let client = client();
        client.transport().respond(201, "{}");

        let draft = NewProperty {
            title: "Unit A".to_string(),
            address: "Jl. Test".to_string(),
            description: "Two bedrooms".to_string(),
            price: 150000.0,
        };
        client.create::<PropertyRecord>(&draft).await.unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, "/api/v1/properties");
        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["price"], serde_json::json!(150000.0));
        assert!(body["price"].is_number());
    }

    #[tokio::test]
    async fn test_create_non_success_is_http_error() {
        let client = client();
        client.transport().respond(400, "bad");

        let draft = NewCustomer {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: String::new(),
            status: CustomerStatus::Active,
        };
        assert_eq!(
            client.create::<CustomerRecord>(&draft).await,
            Err(FetchError::Http {
                status: 400,
                message: None
            })
        );
    }

    #[tokio::test]
    async fn test_delete_returns_status_unchecked() {
        let client = client();
        client.transport().respond(500, r#"{"error":"nope"}"#);

        let response = client.delete::<CustomerRecord>(42).await.unwrap();
        assert_eq!(response.status, 500);
        assert_eq!(
            client.transport().request_lines(),
            vec!["DELETE /api/v1/customers/42"]
        );
    }
}
