//! Remote quote source
//!
//! Talks to a JSONPlaceholder-style collection endpoint: `GET
//! {url}?_limit=N` lists posts, `POST {url}` creates one. Post titles
//! map to quote text; the body carries the category.

use crate::domain::Quote;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Category assigned to fetched posts that carry no body.
const FALLBACK_CATEGORY: &str = "From Server";

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// A remote collection of quote-like records.
#[async_trait]
pub trait RemoteSource {
    /// Fetch the remote snapshot.
    async fn fetch_quotes(&self) -> Result<Vec<Quote>>;

    /// Push a locally added quote, best effort. Returns whether the
    /// server accepted it; failure never rolls back local state.
    async fn post_quote(&self, quote: &Quote) -> Result<bool>;
}

#[derive(Debug, Deserialize)]
struct RemotePost {
    title: String,
    #[serde(default)]
    body: String,
}

impl RemotePost {
    fn into_quote(self) -> Quote {
        let category = if self.body.trim().is_empty() {
            FALLBACK_CATEGORY.to_string()
        } else {
            self.body
        };
        Quote {
            text: self.title,
            category,
        }
    }
}

#[derive(Debug, Serialize)]
struct NewRemotePost<'a> {
    title: &'a str,
    body: &'a str,
    #[serde(rename = "userId")]
    user_id: u32,
}

/// HTTP implementation of [`RemoteSource`]
pub struct HttpRemoteSource {
    client: reqwest::Client,
    server_url: String,
    fetch_limit: u32,
}

impl HttpRemoteSource {
    pub fn new(server_url: String, fetch_limit: u32) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(concat!("quoth/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(HttpRemoteSource {
            client,
            server_url,
            fetch_limit,
        })
    }
}

#[async_trait]
impl RemoteSource for HttpRemoteSource {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>> {
        let posts: Vec<RemotePost> = self
            .client
            .get(&self.server_url)
            .query(&[("_limit", self.fetch_limit.to_string())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(posts.into_iter().map(RemotePost::into_quote).collect())
    }

    async fn post_quote(&self, quote: &Quote) -> Result<bool> {
        let payload = NewRemotePost {
            title: &quote.text,
            body: &quote.category,
            user_id: 1,
        };

        let response = self
            .client
            .post(&self.server_url)
            .json(&payload)
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}
