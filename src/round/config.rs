//! Round configuration

/// Tunable parameters for a round
///
/// The attempt budget scales with target length: a 6-letter word at the
/// default factor of 1.5 allows `ceil(6 × 1.5) = 9` guesses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Attempts granted per target letter, applied as `ceil(length × factor)`
    pub tries_per_letter: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tries_per_letter: 1.5,
        }
    }
}

impl GameConfig {
    /// Compute the attempt budget for a target of the given length
    ///
    /// Always at least 1, even for degenerate factors.
    #[must_use]
    pub fn budget_for(&self, target_len: usize) -> usize {
        let budget = (target_len as f64 * self.tries_per_letter).ceil() as usize;
        budget.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_default_factor() {
        let config = GameConfig::default();
        assert_eq!(config.budget_for(4), 6);
        assert_eq!(config.budget_for(5), 8); // ceil(7.5)
        assert_eq!(config.budget_for(6), 9);
        assert_eq!(config.budget_for(7), 11); // ceil(10.5)
    }

    #[test]
    fn budget_custom_factor() {
        let config = GameConfig {
            tries_per_letter: 2.0,
        };
        assert_eq!(config.budget_for(5), 10);
    }

    #[test]
    fn budget_never_below_one() {
        let config = GameConfig {
            tries_per_letter: 0.1,
        };
        assert_eq!(config.budget_for(1), 1);
        assert_eq!(config.budget_for(5), 1);
    }
}
