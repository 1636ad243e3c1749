use super::repository::{execute_git_command, execute_git_command_with_status, GitRepository};
use crate::utils::error::{Result, SweepError};
use chrono::{DateTime, FixedOffset};

/// Which refs a listing covers: local heads or remote-tracking refs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchScope {
    Local,
    Remote,
}

/// Merge-state filter evaluated by git against the base branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeFilter {
    Merged,
    NotMerged,
}

impl MergeFilter {
    fn as_arg(self) -> &'static str {
        match self {
            MergeFilter::Merged => "--merged",
            MergeFilter::NotMerged => "--no-merged",
        }
    }
}

pub struct BranchManager<'a> {
    repo: &'a GitRepository,
}

impl<'a> BranchManager<'a> {
    pub fn new(repo: &'a GitRepository) -> Self {
        Self { repo }
    }

    pub fn fetch_prune(&self, remote: &str) -> Result<()> {
        execute_git_command_with_status(self.repo, &["fetch", remote, "--prune"])
    }

    /// Lists branch names satisfying the merge filter against `base`, one
    /// raw output line per branch (markers and remote qualifiers intact).
    pub fn list_branches(
        &self,
        scope: BranchScope,
        filter: MergeFilter,
        base: &str,
    ) -> Result<Vec<String>> {
        let output = match scope {
            BranchScope::Local => {
                execute_git_command(self.repo, &["branch", filter.as_arg(), base])?
            }
            BranchScope::Remote => {
                execute_git_command(self.repo, &["branch", "-r", filter.as_arg(), base])?
            }
        };

        Ok(output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.to_string())
            .collect())
    }

    /// Resolves the commit a ref points to: full hash plus committer
    /// timestamp. Two git invocations per ref, which is fine for the
    /// branch counts this tool sees.
    pub fn resolve_commit(&self, reference: &str) -> Result<(String, DateTime<FixedOffset>)> {
        let hash = execute_git_command(self.repo, &["rev-parse", reference])?;
        let raw_date = execute_git_command(self.repo, &["show", "-s", "--format=%cI", reference])?;

        let commit_date = DateTime::parse_from_rfc3339(raw_date.trim())
            .map_err(|e| SweepError::date_parse(raw_date.trim(), e.to_string()))?;

        Ok((hash, commit_date))
    }

    pub fn delete_local(&self, name: &str, force: bool) -> Result<()> {
        let args = if force {
            ["branch", "-D", name]
        } else {
            ["branch", "-d", name]
        };

        execute_git_command_with_status(self.repo, &args)
    }

    pub fn delete_remote(&self, remote: &str, name: &str) -> Result<()> {
        execute_git_command_with_status(self.repo, &["push", remote, "--delete", name])
    }

    pub fn prune_remote(&self, remote: &str) -> Result<()> {
        execute_git_command_with_status(self.repo, &["remote", "prune", remote])
    }
}
