//! REST Backend Client
//!
//! Bindings to the POS backend, organized by domain. Every request carries
//! the session cookie; non-success statuses become `ApiError`.

mod auth;
mod category;
mod menu;
mod report;
mod transaction;

use std::cell::OnceCell;

use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use pos_core::{ApiError, DomainResult, PosConfig};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Characters escaped when an id is placed in a URL path
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

thread_local! {
    static CLIENT: OnceCell<RestClient> = const { OnceCell::new() };
}

/// Configure the shared client; later calls are ignored
pub fn init(config: &PosConfig) {
    CLIENT.with(|cell| {
        let _ = cell.set(RestClient::new(&config.api_base_url));
    });
}

/// Shared client (falls back to the default base URL if `init` never ran)
pub fn client() -> RestClient {
    CLIENT.with(|cell| {
        cell.get_or_init(|| RestClient::new(&PosConfig::default().api_base_url))
            .clone()
    })
}

#[derive(Clone, Debug)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        let builder = self.http.request(method, url);
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> DomainResult<T> {
        read_json(send(self.request(Method::GET, path)).await?).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> DomainResult<T> {
        read_json(send(self.request(Method::POST, path).json(body)).await?).await
    }

    async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> DomainResult<()> {
        send(self.request(Method::PUT, path).json(body)).await.map(drop)
    }

    async fn delete(&self, path: &str) -> DomainResult<()> {
        send(self.request(Method::DELETE, path)).await.map(drop)
    }
}

/// `/collection/<escaped id>`
fn item_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, utf8_percent_encode(id, PATH_SEGMENT))
}

async fn send(builder: RequestBuilder) -> DomainResult<Response> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status.as_u16(), &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> DomainResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_path_escapes_id() {
        assert_eq!(item_path("/menus", "abc-1"), "/menus/abc-1");
        assert_eq!(item_path("/menus", "a/b c?"), "/menus/a%2Fb%20c%3F");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = RestClient::new("http://localhost:3009/api/");
        assert_eq!(client.base_url, "http://localhost:3009/api");
    }
}
