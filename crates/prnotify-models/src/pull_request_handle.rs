use crate::RepositoryPath;

/// Pull request reference: repository and number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestHandle {
    repository: RepositoryPath,
    number: u64,
}

impl std::fmt::Display for PullRequestHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} (#{})", self.repository, self.number))
    }
}

impl PullRequestHandle {
    /// Creates a new handle.
    pub fn new(repository: RepositoryPath, number: u64) -> Self {
        Self { repository, number }
    }

    /// Get pull request number.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Get repository owner.
    pub fn owner(&self) -> &str {
        self.repository.owner()
    }

    /// Get repository name.
    pub fn name(&self) -> &str {
        self.repository.name()
    }
}

impl From<(&str, &str, u64)> for PullRequestHandle {
    fn from((owner, name, number): (&str, &str, u64)) -> Self {
        Self {
            repository: (owner, name).into(),
            number,
        }
    }
}
