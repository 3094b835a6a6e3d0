extern crate reqwest;

pub mod api;
pub mod page;
mod retry;

pub use api::ApiClient;
pub use page::{Source, SourceFetcher};

use crate::{
    config::session::FIREFOX_UA,
    error::{network_error, Result},
};
use reqwest::{header::HeaderMap, Client};

fn build_client(headers: HeaderMap) -> Result<Client> {
    Client::builder()
        .user_agent(FIREFOX_UA)
        .default_headers(headers)
        .build()
        .map_err(network_error)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
