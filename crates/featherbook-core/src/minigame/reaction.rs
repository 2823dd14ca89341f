use serde::{Deserialize, Serialize};

/// Reaction tier for a finished game, bucketed by completion time.
///
/// The display copy for each tier belongs to the presentation layer; the
/// engine only exposes the tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    /// Under a minute.
    Amazed,
    /// Under two minutes.
    Fast,
    /// Finished, however long it took.
    Complete,
}

impl From<u64> for Reaction {
    fn from(elapsed_secs: u64) -> Self {
        if elapsed_secs < 60 {
            Reaction::Amazed
        } else if elapsed_secs < 120 {
            Reaction::Fast
        } else {
            Reaction::Complete
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers() {
        assert_eq!(Reaction::from(45), Reaction::Amazed);
        assert_eq!(Reaction::from(90), Reaction::Fast);
        assert_eq!(Reaction::from(150), Reaction::Complete);
    }

    #[test]
    fn boundaries_fall_into_the_slower_tier() {
        assert_eq!(Reaction::from(59), Reaction::Amazed);
        assert_eq!(Reaction::from(60), Reaction::Fast);
        assert_eq!(Reaction::from(119), Reaction::Fast);
        assert_eq!(Reaction::from(120), Reaction::Complete);
    }
}
