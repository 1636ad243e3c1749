use crate::cli::parser::Cli;
use crate::core::candidates::{
    normalize_branch_line, select_stale, strip_remote_prefix, Candidate, NameFilter,
};
use crate::core::git::{
    BranchScope, GitOperations, GitService, MergeFilter, BASE_BRANCH, REMOTE_NAME,
};
use crate::utils::Result;
use chrono::Local;
use std::io::{BufRead, Write};

pub fn execute(args: Cli) -> Result<()> {
    let service = GitService::discover()?;
    run(&service, &args)
}

/// The whole pipeline against a repository client. Everything up to and
/// including metadata resolution is fail-fast; once deletion starts,
/// per-branch failures are reported and swallowed, because git is known to
/// complain about deletions that actually went through.
pub fn run(git: &impl GitOperations, args: &Cli) -> Result<()> {
    let scope = if args.remote {
        BranchScope::Remote
    } else {
        BranchScope::Local
    };
    let filter = if args.delete_unmerged {
        MergeFilter::NotMerged
    } else {
        MergeFilter::Merged
    };

    git.fetch_prune(REMOTE_NAME)?;

    let candidates = enumerate_candidates(git, scope, filter)?;
    let candidates = select_stale(candidates, args.age, Local::now().date_naive());

    if candidates.is_empty() {
        return Ok(());
    }

    print_candidates(&candidates);

    if !args.force {
        acknowledge(&mut std::io::stdin().lock())?;
    }

    delete_candidates(git, scope, args.delete_unmerged, &candidates);

    if let Err(e) = git.prune_remote(REMOTE_NAME) {
        eprintln!("sweep: {}", e);
    }

    Ok(())
}

fn enumerate_candidates(
    git: &impl GitOperations,
    scope: BranchScope,
    filter: MergeFilter,
) -> Result<Vec<Candidate>> {
    let name_filter = NameFilter::new()?;
    let mut candidates = Vec::new();

    for line in git.list_branches(scope, filter, BASE_BRANCH)? {
        let full_name = normalize_branch_line(&line);
        if full_name.is_empty() || name_filter.is_protected(&full_name) {
            continue;
        }

        let name = match scope {
            BranchScope::Remote => strip_remote_prefix(&full_name, REMOTE_NAME),
            BranchScope::Local => full_name.clone(),
        };
        if name.is_empty() {
            continue;
        }

        let (commit_hash, commit_date) = git.resolve_commit(&full_name)?;
        candidates.push(Candidate {
            name,
            commit_hash,
            commit_date,
        });
    }

    Ok(candidates)
}

fn print_candidates(candidates: &[Candidate]) {
    println!("{:<40} {:<12} {}", "BRANCH", "COMMIT", "LAST COMMIT");
    for candidate in candidates {
        println!(
            "{:<40} {:<12} {}",
            candidate.name,
            short_hash(&candidate.commit_hash),
            candidate.commit_date.format("%Y-%m-%d")
        );
    }
}

fn short_hash(hash: &str) -> &str {
    &hash[..hash.len().min(10)]
}

/// Blocks until one line of input arrives. Any input proceeds, including an
/// empty one; the only way out is an interrupt.
fn acknowledge(input: &mut impl BufRead) -> Result<()> {
    print!("Press Enter to delete these branches (interrupt to abort): ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(())
}

fn delete_candidates(
    git: &impl GitOperations,
    scope: BranchScope,
    force_delete: bool,
    candidates: &[Candidate],
) {
    for candidate in candidates {
        let result = match scope {
            BranchScope::Remote => git.delete_remote_branch(REMOTE_NAME, &candidate.name),
            BranchScope::Local => git.delete_local_branch(&candidate.name, force_delete),
        };

        if let Err(e) = result {
            eprintln!("sweep: {}", e);
        }
    }
}
