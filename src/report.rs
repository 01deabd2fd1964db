//! Slack report rendering.
//!
//! The text uses Slack mrkdwn: `*bold*`, `<url|label>` links and
//! `<!subteam^ID>` group mentions.

use std::fmt;

use crate::{aggregate::RunSummary, job::JobStatus};

/// Builds links to a build's page on Prow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLinks {
    prow_url: String,
    bucket: String,
}

impl BuildLinks {
    pub fn new(prow_url: impl Into<String>, bucket: impl Into<String>) -> Self {
        let prow_url: String = prow_url.into();
        Self {
            prow_url: prow_url.trim_end_matches('/').to_string(),
            bucket: bucket.into(),
        }
    }

    pub fn build_url(&self, job_name: &str, build: &str) -> String {
        format!("{}/{}/logs/{job_name}/{build}", self.prow_url, self.bucket)
    }
}

/// Weekly run report of one job group.
pub struct Report<'a> {
    pub group_name: &'a str,
    pub mention_id: &'a str,
    pub summary: &'a RunSummary,
    /// Jobs in job list order.
    pub statuses: &'a [JobStatus],
    pub links: &'a BuildLinks,
}

impl Report<'_> {
    fn write_link(&self, f: &mut fmt::Formatter<'_>, status: &JobStatus) -> fmt::Result {
        writeln!(
            f,
            "- <{}|{}>",
            self.links.build_url(status.name(), &status.latest_build),
            status.name()
        )
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;
        write!(
            f,
            "Hello <!subteam^{}> :wave:, here is the weekly run report for {}:\n\n",
            self.mention_id, self.group_name
        )?;

        writeln!(f, "*Total:* {}", summary.total())?;
        writeln!(f, "*Successful:* {}", summary.succeeded)?;
        writeln!(f, "*Failed:* {}", summary.failed)?;
        writeln!(f, "*Inactive:* {}", summary.inactive)?;
        match summary.passing_percentage() {
            Some(percentage) => writeln!(f, "*Passing Percentage:* approximately {percentage}%")?,
            None => writeln!(f, "*Passing Percentage:* N/A")?,
        }
        if summary.running > 0 {
            writeln!(f, "*Jobs Still Running:* {}", summary.running)?;
        }

        write!(f, "\n\n*FAILED JOBS*\n")?;
        for status in self.statuses.iter().filter(|status| status.is_failing()) {
            self.write_link(f, status)?;
        }
        write!(f, "\n\n")?;

        writeln!(f, "*INACTIVE JOBS*")?;
        for status in self.statuses.iter().filter(|status| !status.is_active()) {
            writeln!(f, "- {}", status.name())?;
        }
        writeln!(f)?;

        if summary.running > 0 {
            write!(f, "\n*JOBS RUNNING*\n")?;
            for status in self.statuses.iter().filter(|status| status.is_running()) {
                self.write_link(f, status)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render the report text of a run.
pub fn format_report(
    group_name: &str,
    mention_id: &str,
    summary: &RunSummary,
    statuses: &[JobStatus],
    links: &BuildLinks,
) -> String {
    Report {
        group_name,
        mention_id,
        summary,
        statuses,
        links,
    }
    .to_string()
}
