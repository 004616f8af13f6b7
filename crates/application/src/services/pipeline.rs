use super::{classify, pick, project, select_tier};
use ferrous_gslb_domain::{GslbRecord, HealthSnapshot, PublicRecord};
use tracing::debug;

/// Runs one lookup's candidates through classification, tier selection,
/// affinity narrowing and projection.
///
/// Every query-type group is judged against the same `health` snapshot.
/// Groups with no eligible record contribute nothing.
pub fn lookup(
    candidates: Vec<GslbRecord>,
    health: &HealthSnapshot,
    client_address: Option<&str>,
) -> Vec<PublicRecord> {
    let groups = classify(candidates);
    let mut selected = Vec::new();

    for (qtype, group) in groups {
        let Some(tier) = select_tier(&group, health) else {
            debug!(qtype = %qtype, "No eligible records");
            continue;
        };

        debug!(
            qtype = %qtype,
            eligibility = ?tier.eligibility,
            weight = tier.weight,
            size = tier.records.len(),
            "Tier selected"
        );

        if tier.persistence() != 0 {
            selected.extend(pick(tier.records, client_address));
        } else {
            selected.extend(tier.records);
        }
    }

    project(selected)
}
