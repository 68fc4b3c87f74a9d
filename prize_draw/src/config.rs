// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// A named prize bucket that receives a fixed number of winners.
///
/// The order of the tiers in a draw is significant: it is both the
/// allocation order and the order in which the winners are revealed.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Tier {
    pub name: String,
    pub count: usize,
}

impl Tier {
    pub fn new(name: &str, count: usize) -> Tier {
        Tier {
            name: name.to_string(),
            count,
        }
    }
}

/// The number of winners required by the tiers. Saturates at `usize::MAX`
/// instead of overflowing, which no participant list can satisfy.
pub fn total_count(tiers: &[Tier]) -> usize {
    tiers
        .iter()
        .try_fold(0usize, |acc, t| acc.checked_add(t.count))
        .unwrap_or(usize::MAX)
}

// ******** Output data structures *********

/// The outcome of one draw: for each tier (in the order of the draw), the
/// names of the winners in the order they were allocated.
///
/// A result is never modified after the draw that produced it.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct DrawResult {
    pub(crate) allocations: Vec<(String, Vec<String>)>,
}

impl DrawResult {
    /// The winners of the given tier, if this tier was part of the draw.
    pub fn get(&self, tier_name: &str) -> Option<&[String]> {
        self.allocations
            .iter()
            .find(|(name, _)| name == tier_name)
            .map(|(_, winners)| winners.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.allocations
            .iter()
            .map(|(name, winners)| (name.as_str(), winners.as_slice()))
    }

    pub fn tier_names(&self) -> Vec<&str> {
        self.allocations.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Number of tiers.
    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    pub fn total_winners(&self) -> usize {
        self.allocations.iter().map(|(_, w)| w.len()).sum()
    }
}

/// Errors that prevent a draw from being configured or run.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum DrawErrors {
    /// More winners were requested than there are participants.
    CapacityExceeded { requested: usize, available: usize },
    NoParticipants,
    EmptyTierName,
    InvalidTierCount { name: String },
    DuplicateTierName(String),
    /// A single tier asks for more winners than there are participants.
    TierCountExceedsParticipants {
        name: String,
        count: usize,
        available: usize,
    },
}

impl Error for DrawErrors {}

impl Display for DrawErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawErrors::CapacityExceeded {
                requested,
                available,
            } => write!(
                f,
                "the prizes require {} winners but there are only {} participants",
                requested, available
            ),
            DrawErrors::NoParticipants => write!(f, "no participants"),
            DrawErrors::EmptyTierName => write!(f, "a prize name cannot be empty"),
            DrawErrors::InvalidTierCount { name } => {
                write!(f, "prize {:?}: the number of winners must be at least 1", name)
            }
            DrawErrors::DuplicateTierName(name) => {
                write!(f, "prize {:?} is already defined", name)
            }
            DrawErrors::TierCountExceedsParticipants {
                name,
                count,
                available,
            } => write!(
                f,
                "prize {:?}: {} winners requested but there are only {} participants",
                name, count, available
            ),
        }
    }
}
