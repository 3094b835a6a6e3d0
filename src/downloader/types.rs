extern crate serde;

use serde::Deserialize;
use std::fmt;

pub const ACCEPTED: &str = "OK";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub contest_id: Option<u32>,
    pub index: String,
    pub name: String,
}
impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.index, self.name)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: u64,
    pub contest_id: Option<u32>,
    pub problem: Problem,
    pub programming_language: String,
    #[serde(default)]
    pub verdict: Option<String>,
}
impl Submission {
    /// Accepted and attached to a contest.
    pub fn is_eligible(&self) -> bool {
        self.verdict.as_deref() == Some(ACCEPTED) && self.contest_id.is_some()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    pub id: u32,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "FAILED")]
    Failed,
}
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: Status,
    pub comment: Option<String>,
    pub result: Option<T>,
}
