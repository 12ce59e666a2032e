/// Feedback tier for a timing difference.
///
/// Classification only; each frontend supplies its own message and styling
/// for a tier. The leaderboard stores the raw difference, never the tier.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tier {
    Perfect,
    Excellent,
    Great,
    Good,
    Okay,
    Missed,
}

impl Tier {
    /// Ascending thresholds, first match wins, inclusive upper bounds
    pub fn classify(difference: f64) -> Tier {
        if difference <= 0.05 {
            Tier::Perfect
        } else if difference <= 0.10 {
            Tier::Excellent
        } else if difference <= 0.20 {
            Tier::Great
        } else if difference <= 0.30 {
            Tier::Good
        } else if difference <= 0.50 {
            Tier::Okay
        } else {
            Tier::Missed
        }
    }

    /// Wire token used by the web API
    pub fn token(self) -> &'static str {
        match self {
            Tier::Perfect => "perfect",
            Tier::Excellent => "excellent",
            Tier::Great => "great",
            Tier::Good => "good",
            Tier::Okay => "okay",
            Tier::Missed => "missed",
        }
    }
}

/// Outcome of a stopped round
#[derive(Clone, Copy, Debug)]
pub struct RoundResult {
    pub target: f64,
    pub elapsed: f64,
    pub difference: f64,
    pub tier: Tier,
}

/// Combine elapsed and target into a scored result
pub fn score(elapsed: f64, target: f64) -> RoundResult {
    let difference = (elapsed - target).abs();
    RoundResult {
        target,
        elapsed,
        difference,
        tier: Tier::classify(difference),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difference_is_absolute() {
        assert!((score(5.2, 5.0).difference - 0.2).abs() < 1e-9);
        assert!((score(4.8, 5.0).difference - 0.2).abs() < 1e-9);
        assert_eq!(score(5.0, 5.0).difference, 0.0);
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(Tier::classify(0.0), Tier::Perfect);
        assert_eq!(Tier::classify(0.05), Tier::Perfect);
        assert_eq!(Tier::classify(0.0500001), Tier::Excellent);
        assert_eq!(Tier::classify(0.10), Tier::Excellent);
        assert_eq!(Tier::classify(0.20), Tier::Great);
        assert_eq!(Tier::classify(0.25), Tier::Good);
        assert_eq!(Tier::classify(0.30), Tier::Good);
        assert_eq!(Tier::classify(0.5), Tier::Okay);
        assert_eq!(Tier::classify(0.50001), Tier::Missed);
        assert_eq!(Tier::classify(10.0), Tier::Missed);
    }

    #[test]
    fn scored_result_carries_its_inputs() {
        let result = score(5.35, 5.0);
        assert_eq!(result.target, 5.0);
        assert_eq!(result.elapsed, 5.35);
        assert_eq!(result.tier, Tier::Okay);
    }
}
