extern crate regex;
extern crate serde;
extern crate serde_yaml;

use crate::{
    config::{api, page, session::LANG},
    error::{invalid_argument, Result},
};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::{env, io::Read, path::PathBuf, time::Duration};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Endpoints {
    pub api: String,
    pub site: String,
}
impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api: api::BASE_URL.to_string(),
            site: page::BASE_URL.to_string(),
        }
    }
}
impl Endpoints {
    /// Both endpoints on one host, as a test server serves them.
    pub fn on(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            api: format!("{}/api", base),
            site: base.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct Pacing {
    pub api_interval_ms: u64,
    pub page_interval_ms: u64,
}
impl Default for Pacing {
    fn default() -> Self {
        Self {
            api_interval_ms: api::INTERVAL.as_millis() as u64,
            page_interval_ms: page::INTERVAL.as_millis() as u64,
        }
    }
}
impl Pacing {
    pub fn api_interval(&self) -> Duration {
        Duration::from_millis(self.api_interval_ms)
    }
    pub fn page_interval(&self) -> Duration {
        Duration::from_millis(self.page_interval_ms)
    }
}

fn default_folder() -> PathBuf {
    PathBuf::from("~/Downloads/CodeforcesDownloader")
}
fn default_wget() -> PathBuf {
    PathBuf::from("wget")
}
fn default_lang() -> String {
    LANG.to_string()
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Options {
    pub handle: String,
    #[serde(default = "default_folder")]
    pub folder: PathBuf,
    #[serde(default)]
    pub cookie: Option<String>,
    #[serde(default = "default_wget")]
    pub wget: PathBuf,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_true")]
    pub statements: bool,
    #[serde(default)]
    pub endpoints: Endpoints,
    #[serde(default)]
    pub pacing: Pacing,
}

impl Options {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(handle: S, folder: P) -> Self {
        Self {
            handle: handle.into(),
            folder: folder.into(),
            cookie: None,
            wget: default_wget(),
            lang: default_lang(),
            statements: true,
            endpoints: Endpoints::default(),
            pacing: Pacing::default(),
        }
    }
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        serde_yaml::from_reader(rdr)
            .map_err(|e| invalid_argument(format!("cannot read options: {}", e)))
    }
    pub fn validate(&self) -> Result<()> {
        if self.handle.trim().is_empty() {
            return Err(invalid_argument("handle is empty"));
        }
        if self.cookie.as_deref().map_or(false, |c| c.trim().is_empty()) {
            return Err(invalid_argument("cookie is empty"));
        }
        Ok(())
    }
}

/// Expands `%VAR%`, `${VAR}`, `$VAR` and a leading `~`. Unset variables are
/// kept verbatim.
pub fn expand_env(text: &str) -> String {
    let pattern = Regex::new(
        r"%([A-Za-z_][A-Za-z0-9_]*)%|\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)",
    )
    .unwrap();
    let home = env::var("HOME").or_else(|_| env::var("USERPROFILE"));
    let text = match (text.strip_prefix('~'), home) {
        (Some(rest), Ok(h)) if rest.is_empty() || rest.starts_with(['/', '\\']) => {
            format!("{}{}", h, rest)
        }
        _ => text.to_string(),
    };
    pattern
        .replace_all(&text, |caps: &Captures| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map_or("", |m| m.as_str());
            env::var(name).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}
