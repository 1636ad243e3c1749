use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Delete stale branches from a git repository")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Delete without asking for confirmation
    #[arg(long, short = 'f', help = "Skip the confirmation prompt")]
    pub force: bool,

    /// Minimum age of a branch's last commit, in days
    #[arg(long, default_value_t = 14)]
    pub age: i64,

    /// Select branches not merged into master and force-delete them
    #[arg(long, help = "Target unmerged branches and delete them forcibly")]
    pub delete_unmerged: bool,

    /// Operate on branches of the remote instead of local ones
    #[arg(long, help = "Delete branches on the remote instead of locally")]
    pub remote: bool,
}

impl Cli {
    pub fn validate(&self) -> crate::utils::Result<()> {
        if self.age < 0 {
            return Err(crate::utils::SweepError::invalid_args(
                "Age threshold cannot be negative",
            ));
        }

        Ok(())
    }
}
