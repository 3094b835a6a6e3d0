extern crate regex;
extern crate tokio;

use crate::{
    config::{
        session::FIREFOX_UA,
        statement::{CONTENT_DIR, FILE_NAME},
    },
    error::{io_error, tool_error, Result},
    html::RegexSet,
    storage::{exists, write_atomic},
    throttle::Throttle,
    types::Problem,
};
use regex::Regex;
use std::{
    path::{Path, PathBuf},
    process::Stdio,
    sync::Arc,
};
use tokio::process::Command;

#[derive(Debug, PartialEq)]
pub enum Statement {
    Exists,
    Created,
}

/// Saves problem statements as standalone pages by running an external
/// page archiver (wget) in the problem folder.
pub struct StatementDownloader {
    wget: PathBuf,
    site: String,
    lang: String,
    throttle: Arc<Throttle>,
    regex: RegexSet,
}

/// Points references to downloaded resources into the content folder.
fn fix_references(page: &str, names: &[String]) -> Result<String> {
    let mut ret = page.to_string();
    for name in names {
        let pattern = Regex::new(&format!(r#"(["'(=])({})"#, regex::escape(name)))
            .map_err(|e| tool_error(format!("cannot match references to {}: {}", name, e)))?;
        ret = pattern
            .replace_all(&ret, format!("${{1}}{}/${{2}}", CONTENT_DIR).as_str())
            .into_owned();
    }
    Ok(ret)
}

async fn file_names(dir: &Path) -> Result<Vec<String>> {
    let mut ret = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await.map_err(io_error(dir))?;
    while let Some(entry) = entries.next_entry().await.map_err(io_error(dir))? {
        if let Ok(name) = entry.file_name().into_string() {
            ret.push(name);
        }
    }
    ret.sort();
    Ok(ret)
}

impl StatementDownloader {
    pub fn new(wget: &Path, site: &str, lang: &str, throttle: Arc<Throttle>) -> Self {
        Self {
            wget: wget.to_path_buf(),
            site: site.to_string(),
            lang: lang.to_string(),
            throttle,
            regex: RegexSet::new(),
        }
    }

    async fn archive(&self, url: &str, folder: &Path) -> Result<()> {
        let output = Command::new(&self.wget)
            .args(["-q", "-p", "-k", "-H", "--restrict-file-names=windows", "-E", "-nv"])
            .args(["-e", "robots=off", "-nd", "-P", CONTENT_DIR, "-U", FIREFOX_UA, url])
            .current_dir(folder)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| tool_error(format!("cannot start {}: {}", self.wget.display(), e)))?;
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            log::error!(
                "{} {} executed with error ({}): {}",
                self.wget.display(),
                url,
                output.status,
                stderr.trim()
            );
            return Err(tool_error(format!("{} failed for {}", self.wget.display(), url)));
        }
        log::trace!("{} {} executed successfully", self.wget.display(), url);
        Ok(())
    }

    /// Downloads the statement of `problem` from contest `contest` into
    /// `folder`, doing nothing if it is already there.
    pub async fn download(&self, contest: u32, problem: &Problem, folder: &Path) -> Result<Statement> {
        let target = folder.join(FILE_NAME);
        if exists(&target).await {
            log::trace!("{} exists", target.display());
            return Ok(Statement::Exists);
        }
        let url = format!(
            "{}/contest/{}/problem/{}?lang={}",
            self.site.trim_end_matches('/'),
            contest,
            problem.index,
            self.lang
        );
        self.throttle.run(|| self.archive(&url, folder)).await?;

        let content = folder.join(CONTENT_DIR);
        let names = file_names(&content).await?;
        let page_name = match names
            .iter()
            .find(|x| x.starts_with(problem.index.as_str()) && x.ends_with(".html"))
        {
            Some(v) => v.clone(),
            None => {
                log::error!("Downloaded statement html not found in {}", content.display());
                if let Err(e) = tokio::fs::remove_dir_all(&content).await {
                    log::warn!("Cannot remove {}: {}", content.display(), e);
                }
                return Err(tool_error("downloaded statement html not found"));
            }
        };
        let page_path = content.join(&page_name);
        let page = tokio::fs::read_to_string(&page_path)
            .await
            .map_err(io_error(&page_path))?;
        let page = self.regex.trim_statement(&page).unwrap_or_else(|| {
            log::warn!("Cannot trim statement html of {}", problem);
            page
        });
        let resources: Vec<String> = names.into_iter().filter(|x| *x != page_name).collect();
        write_atomic(&target, fix_references(&page, &resources)?.into_bytes()).await?;
        tokio::fs::remove_file(&page_path)
            .await
            .map_err(io_error(&page_path))?;
        Ok(Statement::Created)
    }
}
