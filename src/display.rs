use crate::commands::pulls::PullRequestSummary;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

pub fn write_json<W, T>(out: &mut W, data: &T) -> crate::error::Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *out, data)?;
    writeln!(out)?;
    Ok(())
}

pub fn pull_request_line(pr: &PullRequestSummary) -> String {
    format!("Open Pull Request #{} by {} - {}", pr.number, pr.author, pr.title)
}

pub fn warn(msg: &str) {
    eprintln!("{} {msg}", "warning:".yellow().bold());
}

pub fn error(msg: &str) {
    eprintln!("{} {msg}", "error:".red().bold());
}
