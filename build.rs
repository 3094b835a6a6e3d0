use chrono::{DateTime, Local};
use std::{env, fmt::Write, fs, path::Path, process::Command};
include!("./src/downloader/config.rs");

/// Trimmed stdout of a command, empty if it cannot run (e.g. outside a git checkout).
fn capture(cmd: &str, args: &[&str]) -> String {
    Command::new(cmd)
        .args(args)
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

struct Build {
    profile: String,
    git_ref: String,
    short_hash: String,
    hash: String,
    date: DateTime<Local>,
}
impl Build {
    fn collect() -> Self {
        let branch = capture("git", &["symbolic-ref", "--short", "-q", "HEAD"]);
        let git_ref = if branch.is_empty() {
            capture("git", &["describe", "--tags", "--exact-match", "HEAD"])
        } else {
            branch
        };
        Self {
            profile: env::var("PROFILE").unwrap(),
            git_ref,
            short_hash: capture("git", &["log", "-1", "--pretty=format:%h"]),
            hash: capture("git", &["log", "-1", "--pretty=format:%H"]),
            date: Local::now(),
        }
    }

    fn short(&self) -> String {
        format!(
            "(git@{} {} {}) {}",
            self.short_hash,
            self.git_ref,
            self.date.format("%Y-%m-%d"),
            self.profile
        )
    }

    fn long(&self) -> Result<String, std::fmt::Error> {
        let rustc = env::var("RUSTC").unwrap();
        let mut ret = String::new();
        writeln!(ret, "{}", self.profile)?;
        writeln!(ret, "commit: {} git@{}", self.git_ref, self.hash)?;
        writeln!(
            ret,
            "rustc: {} {}",
            capture(&rustc, &["--version"]),
            env::var("TARGET").unwrap()
        )?;
        writeln!(ret, "date: {}", self.date.to_rfc3339())?;
        writeln!(ret, "locale: {}", session::LANG)?;
        writeln!(
            ret,
            "api: every {}s, {} attempts, {} submissions per page",
            api::INTERVAL.as_secs_f32(),
            api::ATTEMPTS,
            api::PAGE_SIZE
        )?;
        writeln!(
            ret,
            "pages: every {}s, {} attempts, variable timeout {}",
            page::INTERVAL.as_secs_f32(),
            page::ATTEMPTS,
            page::VARIABLE_TIMEOUT
        )?;
        write!(
            ret,
            "cooldown: x{} every {}th, x{} every {}th, jitter +-{}%",
            throttle::COOLDOWN_SHORT,
            throttle::COOLDOWN_SHORT,
            throttle::COOLDOWN_LONG,
            throttle::COOLDOWN_LONG,
            throttle::JITTER * 100.0
        )?;
        Ok(ret)
    }
}

fn main() {
    println!("cargo:rerun-if-changed=src/downloader/config.rs");
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_dir = Path::new(&out_dir);
    let build = Build::collect();
    fs::write(out_dir.join("version"), build.short()).expect("Failed to write version");
    fs::write(
        out_dir.join("long_version"),
        build.long().expect("Failed to format long version"),
    )
    .expect("Failed to write long version");
}
