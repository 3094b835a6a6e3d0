extern crate reqwest;
extern crate serde;
extern crate serde_json;

use super::{build_client, join_url, retry::async_retry};
use crate::{
    config::api::ATTEMPTS,
    error::{invalid_argument, network_error, Error, Kind, Result},
    throttle::Throttle,
    types::{Contest, Envelope, Status, Submission},
};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Typed access to the judge's JSON API, paced by its own fixed-interval throttle.
pub struct ApiClient {
    client: Client,
    base: String,
    lang: String,
    throttle: Throttle,
}
impl ApiClient {
    pub fn new(base: &str, lang: &str, interval: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(Self {
            client: build_client(headers)?,
            base: base.to_string(),
            lang: lang.to_string(),
            throttle: Throttle::new(interval, false),
        })
    }
    pub fn throttle(&self) -> &Throttle {
        &self.throttle
    }

    /// One page of a user's submissions, newest first. `from` is 1-based.
    pub async fn user_status(&self, handle: &str, from: u32, count: u32) -> Result<Vec<Submission>> {
        if handle.trim().is_empty() {
            return Err(invalid_argument("handle is empty"));
        }
        if from == 0 {
            return Err(invalid_argument("from must be at least 1"));
        }
        if count == 0 {
            return Err(invalid_argument("count must be at least 1"));
        }
        self.call(
            "user.status",
            &[
                ("handle", handle.to_string()),
                ("from", from.to_string()),
                ("count", count.to_string()),
            ],
        )
        .await
    }
    pub async fn contest_list(&self, gym: bool) -> Result<Vec<Contest>> {
        self.call("contest.list", &[("gym", gym.to_string())]).await
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, query: &[(&str, String)]) -> Result<T> {
        let url = join_url(&self.base, method);
        let response = async_retry(&self.throttle, ATTEMPTS, &url, || {
            self.client
                .get(&url)
                .query(query)
                .query(&[("lang", self.lang.as_str())])
                .send()
        })
        .await
        .map_err(network_error)?;
        let status = response.status();
        let text = response.text().await.map_err(network_error)?;
        let envelope: Envelope<T> = match serde_json::from_str(&text) {
            Ok(v) => v,
            Err(e) if status.is_success() => return Err(Error::with_kind(Kind::Decode(e))),
            Err(_) => return Err(Error::with_description(Kind::Status(status), url)),
        };
        if !status.is_success() {
            return Err(Error::with_description(
                Kind::Status(status),
                envelope.comment.unwrap_or(url),
            ));
        }
        match envelope.status {
            Status::Ok => envelope
                .result
                .ok_or_else(|| Error::with_description(Kind::Api, "response has no result")),
            Status::Failed => Err(Error::with_description(
                Kind::Api,
                envelope.comment.unwrap_or_default(),
            )),
        }
    }
}
