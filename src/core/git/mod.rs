use crate::utils::error::Result;
use chrono::{DateTime, FixedOffset};
use std::path::Path;

pub mod branch;
pub mod repository;

pub use branch::{BranchManager, BranchScope, MergeFilter};
pub use repository::GitRepository;

/// Remote every fetch, delete-push and prune goes through. Fixed by design.
pub const REMOTE_NAME: &str = "origin";

/// Branch merge state is evaluated against. Fixed by design.
pub const BASE_BRANCH: &str = "master";

/// The narrow repository client the cleanup pipeline depends on. Anything
/// that can answer these six operations can drive a run.
pub trait GitOperations {
    fn fetch_prune(&self, remote: &str) -> Result<()>;
    fn list_branches(
        &self,
        scope: BranchScope,
        filter: MergeFilter,
        base: &str,
    ) -> Result<Vec<String>>;
    fn resolve_commit(&self, reference: &str) -> Result<(String, DateTime<FixedOffset>)>;
    fn delete_local_branch(&self, name: &str, force: bool) -> Result<()>;
    fn delete_remote_branch(&self, remote: &str, name: &str) -> Result<()>;
    fn prune_remote(&self, remote: &str) -> Result<()>;
}

impl GitOperations for GitRepository {
    fn fetch_prune(&self, remote: &str) -> Result<()> {
        let manager = BranchManager::new(self);
        manager.fetch_prune(remote)
    }

    fn list_branches(
        &self,
        scope: BranchScope,
        filter: MergeFilter,
        base: &str,
    ) -> Result<Vec<String>> {
        let manager = BranchManager::new(self);
        manager.list_branches(scope, filter, base)
    }

    fn resolve_commit(&self, reference: &str) -> Result<(String, DateTime<FixedOffset>)> {
        let manager = BranchManager::new(self);
        manager.resolve_commit(reference)
    }

    fn delete_local_branch(&self, name: &str, force: bool) -> Result<()> {
        let manager = BranchManager::new(self);
        manager.delete_local(name, force)
    }

    fn delete_remote_branch(&self, remote: &str, name: &str) -> Result<()> {
        let manager = BranchManager::new(self);
        manager.delete_remote(remote, name)
    }

    fn prune_remote(&self, remote: &str) -> Result<()> {
        let manager = BranchManager::new(self);
        manager.prune_remote(remote)
    }
}

pub struct GitService {
    repo: GitRepository,
}

impl GitService {
    pub fn discover() -> Result<Self> {
        let repo = GitRepository::discover()?;
        repo.validate()?;
        Ok(Self { repo })
    }

    pub fn discover_from(path: &Path) -> Result<Self> {
        let repo = GitRepository::discover_from(path)?;
        repo.validate()?;
        Ok(Self { repo })
    }

    pub fn repository(&self) -> &GitRepository {
        &self.repo
    }

    pub fn branch_manager(&self) -> BranchManager<'_> {
        BranchManager::new(&self.repo)
    }
}

impl GitOperations for GitService {
    fn fetch_prune(&self, remote: &str) -> Result<()> {
        self.repo.fetch_prune(remote)
    }

    fn list_branches(
        &self,
        scope: BranchScope,
        filter: MergeFilter,
        base: &str,
    ) -> Result<Vec<String>> {
        self.repo.list_branches(scope, filter, base)
    }

    fn resolve_commit(&self, reference: &str) -> Result<(String, DateTime<FixedOffset>)> {
        self.repo.resolve_commit(reference)
    }

    fn delete_local_branch(&self, name: &str, force: bool) -> Result<()> {
        self.repo.delete_local_branch(name, force)
    }

    fn delete_remote_branch(&self, remote: &str, name: &str) -> Result<()> {
        self.repo.delete_remote_branch(remote, name)
    }

    fn prune_remote(&self, remote: &str) -> Result<()> {
        self.repo.prune_remote(remote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::process::Command;
    use tempfile::TempDir;

    fn setup_test_repo() -> (TempDir, GitService) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo_path = temp_dir.path();

        Command::new("git")
            .current_dir(repo_path)
            .args(["init"])
            .status()
            .expect("Failed to init git repo");

        Command::new("git")
            .current_dir(repo_path)
            .args(["config", "user.name", "Test User"])
            .status()
            .expect("Failed to set git user name");

        Command::new("git")
            .current_dir(repo_path)
            .args(["config", "user.email", "test@example.com"])
            .status()
            .expect("Failed to set git user email");

        fs::write(repo_path.join("README.md"), "# Test Repository")
            .expect("Failed to write README");

        Command::new("git")
            .current_dir(repo_path)
            .args(["add", "README.md"])
            .status()
            .expect("Failed to add README");

        Command::new("git")
            .current_dir(repo_path)
            .args(["commit", "-m", "Initial commit"])
            .status()
            .expect("Failed to commit README");

        Command::new("git")
            .current_dir(repo_path)
            .args(["branch", "-M", "master"])
            .status()
            .expect("Failed to rename default branch");

        let service = GitService::discover_from(repo_path).expect("Failed to discover repo");
        (temp_dir, service)
    }

    #[test]
    fn test_git_service_discovery() {
        let (temp_dir, service) = setup_test_repo();

        let repo = service.repository();
        assert_eq!(repo.root, temp_dir.path().canonicalize().unwrap());
        assert_eq!(repo.get_current_branch().unwrap(), "master");
    }

    #[test]
    fn test_git_operations_trait() {
        let (_temp_dir, service) = setup_test_repo();

        Command::new("git")
            .current_dir(&service.repository().root)
            .args(["branch", "trait-branch"])
            .status()
            .expect("Failed to create branch");

        let lines = service
            .list_branches(BranchScope::Local, MergeFilter::Merged, BASE_BRANCH)
            .expect("Failed to list branches via trait");
        assert!(lines.iter().any(|l| l.contains("trait-branch")));

        let (hash, _date) = service
            .resolve_commit("trait-branch")
            .expect("Failed to resolve via trait");
        assert_eq!(hash.len(), 40);

        service
            .delete_local_branch("trait-branch", false)
            .expect("Failed to delete via trait");

        let lines = service
            .list_branches(BranchScope::Local, MergeFilter::Merged, BASE_BRANCH)
            .expect("Failed to list branches via trait");
        assert!(!lines.iter().any(|l| l.contains("trait-branch")));
    }
}
