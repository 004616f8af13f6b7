use ferrous_gslb_domain::{Candidate, DomainError, GslbRecord, QtypeGroups, RecordData, RecordId};
use tracing::error;

/// Groups records by query type and splits the embedded priority off MX and
/// SRV content.
///
/// Records whose priority is missing or not an integer are logged and
/// dropped; the rest of the batch is unaffected. Negative priorities are kept.
pub fn classify(records: Vec<GslbRecord>) -> QtypeGroups<Candidate> {
    let mut groups = QtypeGroups::new();

    for mut record in records {
        let data = if record.qtype.carries_priority() {
            match split_priority(record.id, &record.content) {
                Ok((priority, content)) => RecordData::Prioritized { priority, content },
                Err(e) => {
                    error!(record_id = record.id, qtype = %record.qtype, error = %e, "Dropping record");
                    continue;
                }
            }
        } else {
            RecordData::Plain {
                content: std::mem::take(&mut record.content),
            }
        };

        let qtype = record.qtype;
        groups.push(qtype, Candidate::new(record, data));
    }

    groups
}

/// `"10 mail.example.com"` -> `(10, "mail.example.com")`.
///
/// Any run of whitespace separates tokens; the remainder is rejoined with
/// single spaces.
fn split_priority(id: RecordId, content: &str) -> Result<(i64, String), DomainError> {
    let mut tokens = content.split_whitespace();

    let first = tokens.next().ok_or(DomainError::MissingPriority(id))?;
    let priority = first
        .parse::<i64>()
        .map_err(|_| DomainError::InvalidPriority {
            id,
            token: first.to_string(),
        })?;

    Ok((priority, tokens.collect::<Vec<_>>().join(" ")))
}
