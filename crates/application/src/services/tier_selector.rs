use ferrous_gslb_domain::{Candidate, HealthSnapshot};
use std::collections::BTreeMap;

/// Which eligibility class produced the winning tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// Records not reported unhealthy, regardless of their fallback flag.
    Live,
    /// Records flagged as fallback, served only when nothing is live.
    Fallback,
}

/// The highest-weight bucket of one eligibility class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    pub eligibility: Eligibility,
    pub weight: u32,
    pub records: Vec<Candidate>,
}

impl Tier {
    /// Affinity is a property of the tier, read from its first member.
    pub fn persistence(&self) -> u32 {
        self.records.first().map_or(0, |c| c.persistence)
    }
}

/// Picks the winning tier of one query-type group.
///
/// Any live record, whatever its weight, outranks every fallback record.
/// Returns `None` when the group has neither live nor fallback records.
pub fn select_tier(candidates: &[Candidate], health: &HealthSnapshot) -> Option<Tier> {
    let mut live_by_weight: BTreeMap<u32, Vec<&Candidate>> = BTreeMap::new();
    let mut fallback_by_weight: BTreeMap<u32, Vec<&Candidate>> = BTreeMap::new();

    for candidate in candidates {
        if candidate.fallback {
            fallback_by_weight
                .entry(candidate.weight)
                .or_default()
                .push(candidate);
        }
        if !health.is_unhealthy(candidate.id) {
            live_by_weight
                .entry(candidate.weight)
                .or_default()
                .push(candidate);
        }
    }

    let (eligibility, (weight, bucket)) = match live_by_weight.pop_last() {
        Some(top) => (Eligibility::Live, top),
        None => (Eligibility::Fallback, fallback_by_weight.pop_last()?),
    };

    Some(Tier {
        eligibility,
        weight,
        records: bucket.into_iter().cloned().collect(),
    })
}
