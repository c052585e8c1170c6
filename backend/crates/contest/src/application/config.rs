//! Application Configuration

/// Contest application configuration
#[derive(Debug, Clone)]
pub struct ContestConfig {
    /// Credits debited from the creator when publishing a contest
    pub creation_cost: i64,
    /// Rows returned by the popular-contests surface
    pub popular_limit: i64,
    /// Rows returned by the best-creators ranking
    pub best_creator_limit: i64,
    /// Rows returned by the winners leaderboard
    pub leaderboard_limit: i64,
}

impl Default for ContestConfig {
    fn default() -> Self {
        Self {
            creation_cost: 50,
            popular_limit: 6,
            best_creator_limit: 5,
            leaderboard_limit: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_creation_cost() {
        assert_eq!(ContestConfig::default().creation_cost, 50);
    }
}
