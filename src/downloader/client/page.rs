extern crate reqwest;

use super::{
    build_client, join_url,
    retry::{async_retry, success_or},
};
use crate::{
    config::page::ATTEMPTS,
    error::{invalid_argument, network_error, Result},
    html::RegexSet,
    language,
    storage::{exists, write_atomic},
    throttle::Throttle,
    types::Submission,
};
use reqwest::{
    header::{HeaderMap, HeaderValue, COOKIE},
    Client,
};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

#[derive(Debug, PartialEq)]
pub enum Source {
    Exists(PathBuf),
    Created(PathBuf),
    /// The page had no source element, e.g. the code is hidden or removed.
    Unavailable,
}

/// Scrapes submission source code from the rendered submission page.
pub struct SourceFetcher {
    client: Client,
    site: String,
    throttle: Arc<Throttle>,
    regex: RegexSet,
}

pub fn file_name(submission: &Submission) -> String {
    format!(
        "{}.{}",
        submission.id,
        language::extension(&submission.programming_language)
    )
}

impl SourceFetcher {
    pub fn new(site: &str, cookie: Option<&str>, throttle: Arc<Throttle>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(c) = cookie {
            let mut value = HeaderValue::from_str(c)
                .map_err(|_| invalid_argument("cookie is not a valid header value"))?;
            value.set_sensitive(true);
            headers.insert(COOKIE, value);
        }
        Ok(Self {
            client: build_client(headers)?,
            site: site.to_string(),
            throttle,
            regex: RegexSet::new(),
        })
    }

    pub fn page_url(&self, submission: &Submission, gym: bool) -> Result<String> {
        let contest = submission
            .contest_id
            .ok_or_else(|| invalid_argument("submission has no contest"))?;
        Ok(join_url(
            &self.site,
            &format!(
                "{}/{}/submission/{}",
                if gym { "gym" } else { "contest" },
                contest,
                submission.id
            ),
        ))
    }

    /// Source code of `submission`, or `None` if the page does not show it.
    pub async fn source_text(&self, submission: &Submission, gym: bool) -> Result<Option<String>> {
        let url = self.page_url(submission, gym)?;
        log::trace!("Download {}", url);
        let ret = async_retry(&self.throttle, ATTEMPTS, &url, || self.client.get(&url).send()).await;
        let page = success_or(ret, &url)?
            .text()
            .await
            .map_err(network_error)?;
        log::trace!("Extract source text for {}", submission.id);
        let text = self.regex.source_text(&page);
        if text.is_none() {
            log::warn!("Source text html element not found in {}", url);
        }
        Ok(text)
    }

    /// Stores the source of `submission` in `folder` unless a file for it
    /// is already there, in which case nothing is fetched.
    pub async fn save(&self, submission: &Submission, gym: bool, folder: &Path) -> Result<Source> {
        let path = folder.join(file_name(submission));
        if exists(&path).await {
            log::debug!("{} already exists", path.display());
            return Ok(Source::Exists(path));
        }
        match self.source_text(submission, gym).await? {
            Some(text) => {
                write_atomic(&path, text.into_bytes()).await?;
                log::debug!("{} created", path.display());
                Ok(Source::Created(path))
            }
            None => Ok(Source::Unavailable),
        }
    }
}
