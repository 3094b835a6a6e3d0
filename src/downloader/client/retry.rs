extern crate reqwest;

use crate::{
    error::{network_error, Error, Kind, Result},
    throttle::Throttle,
};
use reqwest::Response;
use std::future::Future;

/// Sends through `throttle` until a success status or `attempts` tries.
///
/// Every attempt takes its own pacing slot. The last outcome is returned as
/// is, failed or not.
pub(super) async fn async_retry<F, U>(
    throttle: &Throttle,
    attempts: u32,
    url: &str,
    fun: F,
) -> reqwest::Result<Response>
where
    F: Fn() -> U,
    U: Future<Output = reqwest::Result<Response>>,
{
    let mut ret = throttle.run(&fun).await;
    for i in 1..attempts {
        match &ret {
            Ok(v) if v.status().is_success() => break,
            Ok(v) => log::info!(
                "Failed to get {}. Response: {}. Retry #{}",
                url,
                v.status(),
                i
            ),
            Err(e) => log::info!("Failed to get {}: {}. Retry #{}", url, e, i),
        }
        ret = throttle.run(&fun).await;
    }
    ret
}

pub(super) fn success_or(ret: reqwest::Result<Response>, url: &str) -> Result<Response> {
    let response = ret.map_err(network_error)?;
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(Error::with_description(
            Kind::Status(response.status()),
            url.to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn throttle() -> Throttle {
        Throttle::new(Duration::from_millis(1), false)
    }

    #[tokio::test]
    async fn gives_up_after_all_attempts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/flaky"))
            .respond_with(ResponseTemplate::new(503))
            .expect(5)
            .mount(&server)
            .await;
        let client = reqwest::Client::new();
        let url = format!("{}/flaky", server.uri());
        let throttle = throttle();
        let ret = async_retry(&throttle, 5, &url, || client.get(&url).send()).await;
        assert_eq!(ret.as_ref().unwrap().status(), 503);
        assert_eq!(throttle.calls().await, 5);
        let err = success_or(ret, &url).unwrap_err();
        assert!(err.is_remote_unavailable());
    }

    #[tokio::test]
    async fn stops_at_first_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;
        let client = reqwest::Client::new();
        let url = format!("{}/page", server.uri());
        let throttle = throttle();
        let ret = async_retry(&throttle, 10, &url, || client.get(&url).send()).await;
        let body = success_or(ret, &url).unwrap().text().await.unwrap();
        assert_eq!(body, "ok");
        assert_eq!(throttle.calls().await, 3);
    }

    #[tokio::test]
    async fn transport_errors_are_retried() {
        let client = reqwest::Client::new();
        let url = "http://127.0.0.1:1/unreachable";
        let throttle = throttle();
        let ret = async_retry(&throttle, 3, url, || client.get(url).send()).await;
        assert!(ret.is_err());
        assert_eq!(throttle.calls().await, 3);
        assert!(success_or(ret, url).unwrap_err().is_remote_unavailable());
    }
}
