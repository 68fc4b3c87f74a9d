pub use crate::config::*;
use crate::random::RandomSource;

use log::debug;

/// A builder for configuring a draw.
///
/// It carries the checks performed while the participants and prizes are
/// entered, so that mistakes are reported one prize at a time.
///
/// ```
/// use prize_draw::builder::Builder;
/// use prize_draw::random::RngSource;
/// # use prize_draw::DrawErrors;
///
/// let mut builder = Builder::new()
///     .participants(&["Anna".to_string(), " Bob ".to_string(), "".to_string()])?;
///
/// builder.add_tier("Grand prize", 1)?;
/// builder.add_tier("Consolation", 1)?;
///
/// let result = builder.draw(&mut RngSource::seeded(3))?;
/// assert_eq!(result.total_winners(), 2);
/// # Ok::<(), DrawErrors>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    pub(crate) _participants: Option<Vec<String>>,
    pub(crate) _tiers: Vec<Tier>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder {
            _participants: None,
            _tiers: Vec::new(),
        }
    }

    /// Sets the participants. Names are trimmed and blank names are dropped.
    pub fn participants(self, names: &[String]) -> Result<Builder, DrawErrors> {
        let cleaned: Vec<String> = names
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();
        if cleaned.is_empty() {
            return Err(DrawErrors::NoParticipants);
        }
        debug!(
            "participants: kept {} out of {} names",
            cleaned.len(),
            names.len()
        );
        Ok(Builder {
            _participants: Some(cleaned),
            _tiers: self._tiers,
        })
    }

    /// Adds a prize at the end of the list.
    pub fn add_tier(&mut self, name: &str, count: usize) -> Result<(), DrawErrors> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DrawErrors::EmptyTierName);
        }
        if count == 0 {
            return Err(DrawErrors::InvalidTierCount {
                name: name.to_string(),
            });
        }
        if let Some(ps) = self._participants.as_deref() {
            if count > ps.len() {
                return Err(DrawErrors::TierCountExceedsParticipants {
                    name: name.to_string(),
                    count,
                    available: ps.len(),
                });
            }
        }
        if self._tiers.iter().any(|t| t.name == name) {
            return Err(DrawErrors::DuplicateTierName(name.to_string()));
        }
        self._tiers.push(Tier::new(name, count));
        Ok(())
    }

    /// Removes the prize at the given position, if any.
    pub fn remove_tier(&mut self, index: usize) -> Option<Tier> {
        if index < self._tiers.len() {
            Some(self._tiers.remove(index))
        } else {
            None
        }
    }

    pub fn tiers(&self) -> &[Tier] {
        &self._tiers
    }

    pub fn participant_names(&self) -> &[String] {
        self._participants.as_deref().unwrap_or(&[])
    }

    /// Saturates at `usize::MAX`.
    pub fn total_winners(&self) -> usize {
        total_count(&self._tiers)
    }

    /// True when there is at least one prize and enough participants for all of them.
    pub fn can_draw(&self) -> bool {
        !self._tiers.is_empty() && self.total_winners() <= self.participant_names().len()
    }

    pub fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<DrawResult, DrawErrors> {
        crate::allocate(self.participant_names(), &self._tiers, rng)
    }
}
