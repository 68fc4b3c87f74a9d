//! Staged presentation of a draw.
//!
//! The reveal only reads a finished [`DrawResult`]: it decides in which order
//! and at which pace the winners are announced, never who wins.

use std::time::Duration;

use crate::config::DrawResult;

/// Delays between the steps of a reveal.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct RevealTiming {
    /// Before the first tier is announced.
    pub before_first: Duration,
    /// After each winner.
    pub between_winners: Duration,
    /// After the last winner of a tier.
    pub between_tiers: Duration,
}

impl RevealTiming {
    pub const DEFAULT_TIMING: RevealTiming = RevealTiming {
        before_first: Duration::from_millis(500),
        between_winners: Duration::from_millis(200),
        between_tiers: Duration::from_millis(1000),
    };

    pub fn instant() -> RevealTiming {
        RevealTiming {
            before_first: Duration::ZERO,
            between_winners: Duration::ZERO,
            between_tiers: Duration::ZERO,
        }
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        RevealTiming::DEFAULT_TIMING
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum RevealEvent<'a> {
    /// The draw is about to be revealed.
    Start,
    TierStart { tier: &'a str, count: usize },
    /// `position` starts at 1.
    Winner {
        tier: &'a str,
        position: usize,
        name: &'a str,
    },
    TierEnd { tier: &'a str },
    Finished,
}

/// One step of the reveal, followed by a pause of `delay`.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RevealStep<'a> {
    pub event: RevealEvent<'a>,
    pub delay: Duration,
}

/// Builds the sequence of announcements for a result, in tier order.
pub fn reveal_plan<'a>(result: &'a DrawResult, timing: &RevealTiming) -> Vec<RevealStep<'a>> {
    let mut steps: Vec<RevealStep<'a>> = vec![RevealStep {
        event: RevealEvent::Start,
        delay: timing.before_first,
    }];
    for (tier, winners) in result.iter() {
        steps.push(RevealStep {
            event: RevealEvent::TierStart {
                tier,
                count: winners.len(),
            },
            delay: Duration::ZERO,
        });
        for (idx, name) in winners.iter().enumerate() {
            steps.push(RevealStep {
                event: RevealEvent::Winner {
                    tier,
                    position: idx + 1,
                    name: name.as_str(),
                },
                delay: timing.between_winners,
            });
        }
        steps.push(RevealStep {
            event: RevealEvent::TierEnd { tier },
            delay: timing.between_tiers,
        });
    }
    steps.push(RevealStep {
        event: RevealEvent::Finished,
        delay: Duration::ZERO,
    });
    steps
}

/// The total time taken by a plan.
pub fn plan_duration(steps: &[RevealStep]) -> Duration {
    steps.iter().map(|s| s.delay).sum()
}
