use crate::utils::error::Result;
use chrono::{DateTime, FixedOffset, NaiveDate};
use regex::Regex;

/// Long-lived integration branch that is never collected, local or
/// remote-qualified. Fixed by design, like the base branch.
pub const MAINTENANCE_BRANCH: &str = "develop";

/// A branch selected for deletion. Hash and date are resolved once at
/// enumeration time and not re-checked before the delete runs.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub name: String,
    pub commit_hash: String,
    pub commit_date: DateTime<FixedOffset>,
}

/// Strips surrounding whitespace and the `* ` marker git places on the
/// currently checked-out branch.
pub fn normalize_branch_line(line: &str) -> String {
    let trimmed = line.trim();
    trimmed.strip_prefix("* ").unwrap_or(trimmed).trim().to_string()
}

/// Strips the remote qualifier from a remote-tracking name. A name that is
/// exactly the qualifier collapses to an empty string; a name without the
/// qualifier passes through unchanged.
pub fn strip_remote_prefix(name: &str, remote: &str) -> String {
    let prefix = format!("{}/", remote);
    name.strip_prefix(&prefix).unwrap_or(name).to_string()
}

/// Protected-name predicate. Patterns are matched case-sensitively against
/// the full name as listed, before any remote qualifier is stripped.
pub struct NameFilter {
    protected: Vec<Regex>,
}

impl NameFilter {
    pub fn new() -> Result<Self> {
        let patterns = [
            r"release/".to_string(),
            r"^origin/master$".to_string(),
            r"master$".to_string(),
            format!(r"^(origin/)?{}$", MAINTENANCE_BRANCH),
        ];

        let mut protected = Vec::with_capacity(patterns.len());
        for pattern in &patterns {
            protected.push(Regex::new(pattern)?);
        }

        Ok(Self { protected })
    }

    pub fn is_protected(&self, full_name: &str) -> bool {
        self.protected.iter().any(|re| re.is_match(full_name))
    }
}

/// Keeps candidates whose last commit is at least `age_days` whole calendar
/// days old relative to `today`, ordered oldest first. The boundary is
/// inclusive: a commit exactly `age_days` old stays in.
pub fn select_stale(
    mut candidates: Vec<Candidate>,
    age_days: i64,
    today: NaiveDate,
) -> Vec<Candidate> {
    candidates.retain(|c| (today - c.commit_date.date_naive()).num_days() >= age_days);
    candidates.sort_by_key(|c| c.commit_date);
    candidates
}
