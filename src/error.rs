/// Errors that can occur while configuring or running a clustering.
///
/// Any error means no clustering was performed; nothing partial is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ClusteringError {
    /// K outside `[1, N]`, an empty or malformed dataset, or a bad loop setting.
    InvalidConfiguration(String),
    /// Two vectors of different lengths were compared.
    DimensionMismatch { left: usize, right: usize },
}

impl ClusteringError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}

impl std::fmt::Display for ClusteringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration(s) => write!(f, "invalid configuration: {}", s),
            Self::DimensionMismatch { left, right } => {
                write!(f, "dimension mismatch: {} vs {}", left, right)
            }
        }
    }
}

impl std::error::Error for ClusteringError {}

/// Result type alias for clustering operations.
pub type Result<T> = std::result::Result<T, ClusteringError>;

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn messages_name_the_problem() {
        let err = ClusteringError::invalid("k = 0");
        assert_eq!(err.to_string(), "invalid configuration: k = 0");
        let err = ClusteringError::DimensionMismatch { left: 3, right: 4 };
        assert_eq!(err.to_string(), "dimension mismatch: 3 vs 4");
    }
}
