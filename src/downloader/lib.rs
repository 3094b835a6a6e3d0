pub mod client;
pub(crate) mod config;
pub mod downloader;
pub mod error;
pub(crate) mod html;
pub mod language;
pub mod options;
pub(crate) mod random;
pub mod statement;
pub mod storage;
pub mod submissions;
pub mod throttle;
pub mod types;

pub use downloader::{Downloader, Outcome, Summary};
pub use options::Options;
