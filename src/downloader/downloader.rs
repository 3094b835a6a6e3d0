extern crate futures;
extern crate tokio;

use crate::{
    client::{ApiClient, Source, SourceFetcher},
    config::page::VARIABLE_TIMEOUT,
    error::{invalid_argument, Error, Result},
    options::Options,
    statement::StatementDownloader,
    storage::{create_dir, normalize_file_name},
    submissions,
    throttle::Throttle,
    types::Submission,
};
use futures::{pin_mut, TryStreamExt};
use std::{collections::HashSet, path::PathBuf, sync::Arc};
use tokio::sync::OnceCell;

#[derive(Debug)]
pub enum Outcome {
    Created(PathBuf),
    Exists(PathBuf),
    SourceUnavailable,
    /// Gym submission while no session cookie is configured.
    AuthorizationRequired,
    Failed(Error),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub created: usize,
    pub existing: usize,
    pub unavailable: usize,
    pub skipped: usize,
    pub failed: usize,
}
impl Summary {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Created(_) => self.created += 1,
            Outcome::Exists(_) => self.existing += 1,
            Outcome::SourceUnavailable => self.unavailable += 1,
            Outcome::AuthorizationRequired => self.skipped += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }
    pub fn total(&self) -> usize {
        self.created + self.existing + self.unavailable + self.skipped + self.failed
    }
}

/// Walks a user's accepted submissions and stores each one's source (and
/// the problem statement) under `{folder}/{handle}/{gym|contests}/{contest}/{problem}`.
pub struct Downloader {
    options: Options,
    api: ApiClient,
    sources: SourceFetcher,
    statements: StatementDownloader,
    gyms: OnceCell<HashSet<u32>>,
}

impl Downloader {
    pub fn new(options: Options) -> Result<Self> {
        options.validate()?;
        let page_throttle = Arc::new(Throttle::new(
            options.pacing.page_interval(),
            VARIABLE_TIMEOUT,
        ));
        Ok(Self {
            api: ApiClient::new(
                &options.endpoints.api,
                &options.lang,
                options.pacing.api_interval(),
            )?,
            sources: SourceFetcher::new(
                &options.endpoints.site,
                options.cookie.as_deref(),
                page_throttle.clone(),
            )?,
            statements: StatementDownloader::new(
                &options.wget,
                &options.endpoints.site,
                &options.lang,
                page_throttle,
            ),
            gyms: OnceCell::new(),
            options,
        })
    }
    pub fn options(&self) -> &Options {
        &self.options
    }

    async fn gyms(&self) -> Result<&HashSet<u32>> {
        self.gyms
            .get_or_try_init(|| async {
                log::trace!("Load gyms list");
                let ids = self
                    .api
                    .contest_list(true)
                    .await?
                    .into_iter()
                    .map(|c| c.id)
                    .collect::<HashSet<u32>>();
                Ok::<_, Error>(ids)
            })
            .await
    }
    pub async fn is_gym(&self, contest: u32) -> Result<bool> {
        Ok(self.gyms().await?.contains(&contest))
    }

    pub fn problem_folder(&self, submission: &Submission, contest: u32, gym: bool) -> PathBuf {
        self.options
            .folder
            .join(normalize_file_name(&self.options.handle))
            .join(if gym { "gym" } else { "contests" })
            .join(contest.to_string())
            .join(normalize_file_name(&submission.problem.to_string()))
    }

    /// Handles one submission. Only failures that make the rest of the run
    /// pointless are returned as `Err`.
    pub async fn process(&self, submission: &Submission) -> Result<Outcome> {
        let contest = submission
            .contest_id
            .ok_or_else(|| invalid_argument("submission has no contest"))?;
        let gym = self.is_gym(contest).await?;
        if gym && self.options.cookie.is_none() {
            log::warn!(
                "Cannot process submission {} for gym {}: specify cookie for authorized requests support",
                submission.id,
                contest
            );
            return Ok(Outcome::AuthorizationRequired);
        }

        let folder = self.problem_folder(submission, contest, gym);
        if let Err(e) = create_dir(&folder).await {
            log::error!("Folder for submission {} not created: {}", submission.id, e);
            return Ok(Outcome::Failed(e));
        }
        if !gym && self.options.statements {
            if let Err(e) = self
                .statements
                .download(contest, &submission.problem, &folder)
                .await
            {
                log::error!("Statement of {} {} not saved: {}", contest, submission.problem, e);
            }
        }
        Ok(match self.sources.save(submission, gym, &folder).await {
            Ok(Source::Created(p)) => Outcome::Created(p),
            Ok(Source::Exists(p)) => Outcome::Exists(p),
            Ok(Source::Unavailable) => Outcome::SourceUnavailable,
            Err(e) => {
                log::error!("Source of submission {} not saved: {}", submission.id, e);
                Outcome::Failed(e)
            }
        })
    }

    /// Processes every accepted submission in listing order, passing each
    /// result to `report`.
    pub async fn run<R>(&self, mut report: R) -> Result<Summary>
    where
        R: FnMut(&Submission, &Outcome),
    {
        log::trace!("Download data to {}", self.options.folder.display());
        let mut summary = Summary::default();
        let stream = submissions::accepted(&self.api, &self.options.handle);
        pin_mut!(stream);
        while let Some(submission) = stream.try_next().await? {
            let outcome = self.process(&submission).await?;
            summary.record(&outcome);
            report(&submission, &outcome);
        }
        log::info!("Done. Check {}", self.options.folder.display());
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Problem;

    fn submission(name: &str) -> Submission {
        Submission {
            id: 1,
            contest_id: Some(1500),
            problem: Problem {
                contest_id: Some(1500),
                index: "C".to_string(),
                name: name.to_string(),
            },
            programming_language: "GNU C++17".to_string(),
            verdict: Some("OK".to_string()),
        }
    }

    #[tokio::test]
    async fn lays_out_problem_folders() {
        let d = Downloader::new(Options::new("a/b", "/root")).unwrap();
        assert_eq!(
            d.problem_folder(&submission("Yes or No?"), 1500, false),
            PathBuf::from("/root/a_b/contests/1500/C. Yes or No_")
        );
        assert_eq!(
            d.problem_folder(&submission("Sum"), 100001, true),
            PathBuf::from("/root/a_b/gym/100001/C. Sum")
        );
    }

    #[test]
    fn empty_handle_is_rejected() {
        assert!(Downloader::new(Options::new("", "/root"))
            .err()
            .unwrap()
            .is_invalid_argument());
    }

    #[test]
    fn summary_counts_outcomes() {
        let mut s = Summary::default();
        s.record(&Outcome::Created(PathBuf::from("a")));
        s.record(&Outcome::Exists(PathBuf::from("b")));
        s.record(&Outcome::AuthorizationRequired);
        s.record(&Outcome::SourceUnavailable);
        s.record(&Outcome::Exists(PathBuf::from("c")));
        assert_eq!(
            s,
            Summary {
                created: 1,
                existing: 2,
                unavailable: 1,
                skipped: 1,
                failed: 0
            }
        );
        assert_eq!(s.total(), 5);
    }
}
