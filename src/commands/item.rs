//! Item Commands
//!
//! REST bindings for the `/items` resource.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, CrudClient};
use crate::models::{Item, ItemDraft, ItemId};

/// `CrudClient` over HTTP/JSON
#[derive(Clone)]
pub struct HttpCrudClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpCrudClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    fn item_url(&self, id: &ItemId) -> String {
        let id = id.to_string();
        format!("{}/items/{}", self.base_url, utf8_percent_encode(&id, NON_ALPHANUMERIC))
    }
}

/// Turn a non-success status into the matching `ApiError`
async fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status.as_u16(), detail.trim()))
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let response = check(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::network(format!("invalid response body: {}", e)))
}

#[async_trait(?Send)]
impl CrudClient for HttpCrudClient {
    async fn create_item(&self, draft: &ItemDraft) -> ApiResult<Item> {
        let response = self.http.post(self.collection_url()).json(draft).send().await?;
        decode(response).await
    }

    async fn update_item(&self, id: &ItemId, draft: &ItemDraft) -> ApiResult<Item> {
        let response = self.http.put(self.item_url(id)).json(draft).send().await?;
        decode(response).await
    }

    async fn delete_item(&self, id: &ItemId) -> ApiResult<()> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        check(response).await?;
        Ok(())
    }

    async fn fetch_items(&self) -> ApiResult<Vec<Item>> {
        let response = self.http.get(self.collection_url()).send().await?;
        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = HttpCrudClient::new("http://localhost:3001/");
        assert_eq!(client.collection_url(), "http://localhost:3001/items");
        assert_eq!(client.item_url(&ItemId::Num(7)), "http://localhost:3001/items/7");
    }

    #[test]
    fn test_text_ids_are_path_encoded() {
        let client = HttpCrudClient::new("http://localhost:3001");
        assert_eq!(
            client.item_url(&ItemId::Text("a/b c".into())),
            "http://localhost:3001/items/a%2Fb%20c"
        );
    }
}
