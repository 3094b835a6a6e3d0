extern crate termcolor;

use cf_solutions::{types::Submission, Outcome, Summary};
use termcolor::StandardStream;

pub fn write_outcome(stdout: &mut StandardStream, submission: &Submission, outcome: &Outcome) {
    match outcome {
        Outcome::Created(p) => write_ok!(stdout, "Created", "{}", p.display()),
        Outcome::Exists(p) => write_info!(stdout, "Exists", "{}", p.display()),
        Outcome::SourceUnavailable => write_warn!(
            stdout,
            "Hidden",
            "Source of submission {} is not shown",
            submission.id
        ),
        Outcome::AuthorizationRequired => write_warn!(
            stdout,
            "Skip",
            "Submission {} is in gym {}: specify a cookie to download it",
            submission.id,
            submission.contest_id.unwrap_or_default()
        ),
        Outcome::Failed(e) => write_error!(stdout, "Fail", "Submission {}: {}", submission.id, e),
    }
}

pub fn write_summary(stdout: &mut StandardStream, summary: &Summary) {
    write_ok!(
        stdout,
        "Done",
        "{} accepted: {} created, {} existing, {} hidden, {} skipped, {} failed",
        summary.total(),
        summary.created,
        summary.existing,
        summary.unavailable,
        summary.skipped,
        summary.failed
    );
}
