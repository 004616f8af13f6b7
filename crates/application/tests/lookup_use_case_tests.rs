use ferrous_gslb_application::use_cases::LookupUseCase;
use ferrous_gslb_domain::{DomainError, LookupQuery, PublicRecord, RecordType};
use std::sync::Arc;

mod helpers;
use helpers::{a_record, MockHealthMonitor, MockRecordStore, RecordBuilder};

fn query() -> LookupQuery {
    LookupQuery::new("www.example.com", "ANY")
}

fn contents(answer: &[PublicRecord]) -> Vec<&str> {
    answer.iter().map(PublicRecord::content).collect()
}

async fn build_use_case(
    records: Vec<ferrous_gslb_domain::GslbRecord>,
    unhealthy: Vec<i64>,
) -> (LookupUseCase, Arc<MockRecordStore>, Arc<MockHealthMonitor>) {
    let store = Arc::new(MockRecordStore::with_records(records).await);
    let monitor = Arc::new(MockHealthMonitor::new(unhealthy));
    (
        LookupUseCase::new(store.clone(), monitor.clone()),
        store,
        monitor,
    )
}

// ============================================================================
// Tier selection through the use case
// ============================================================================

#[tokio::test]
async fn test_lower_weight_healthy_record_wins_over_unhealthy_top() {
    // Arrange - id 1 is unhealthy, id 2 is healthy and fallback-flagged
    let (use_case, _, _) = build_use_case(
        vec![a_record(1, 10).build(), a_record(2, 5).fallback().build()],
        vec![1],
    )
    .await;

    // Act
    let answer = use_case.execute(&query(), None).await.unwrap();

    // Assert - id 2 is live since it is not unhealthy
    assert_eq!(contents(&answer), vec!["192.0.2.2"]);
}

#[tokio::test]
async fn test_fallback_served_when_everything_is_unhealthy() {
    let (use_case, _, _) = build_use_case(
        vec![a_record(1, 10).build(), a_record(2, 5).fallback().build()],
        vec![1, 2],
    )
    .await;

    let answer = use_case.execute(&query(), None).await.unwrap();

    assert_eq!(contents(&answer), vec!["192.0.2.2"]);
}

#[tokio::test]
async fn test_no_eligible_record_is_an_empty_answer() {
    let (use_case, _, _) = build_use_case(
        vec![a_record(1, 10).build(), a_record(2, 5).build()],
        vec![1, 2],
    )
    .await;

    let answer = use_case.execute(&query(), None).await.unwrap();

    assert!(answer.is_empty());
}

#[tokio::test]
async fn test_whole_top_tier_is_returned_without_persistence() {
    let (use_case, _, _) = build_use_case(
        vec![
            a_record(1, 10).build(),
            a_record(2, 20).build(),
            a_record(3, 20).build(),
            a_record(4, 20).fallback().build(),
        ],
        vec![4],
    )
    .await;

    let answer = use_case.execute(&query(), None).await.unwrap();

    assert_eq!(contents(&answer), vec!["192.0.2.2", "192.0.2.3"]);
}

#[tokio::test]
async fn test_unhealthy_fallback_never_beats_live_record() {
    let (use_case, _, _) = build_use_case(
        vec![a_record(1, 100).fallback().build(), a_record(2, 1).build()],
        vec![1],
    )
    .await;

    let answer = use_case.execute(&query(), None).await.unwrap();

    assert_eq!(contents(&answer), vec!["192.0.2.2"]);
}

// ============================================================================
// Persistence
// ============================================================================

fn sticky_tier() -> Vec<ferrous_gslb_domain::GslbRecord> {
    (1..=4)
        .map(|id| a_record(id, 10).persistence(8).build())
        .collect()
}

#[tokio::test]
async fn test_clients_in_same_block_get_same_record() {
    let (use_case, _, _) = build_use_case(sticky_tier(), vec![]).await;

    let first = use_case.execute(&query(), Some("10.0.1.5")).await.unwrap();
    let second = use_case.execute(&query(), Some("10.0.1.250")).await.unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(first, second);
    assert_eq!(contents(&first), vec!["192.0.2.2"]);
}

#[tokio::test]
async fn test_persistence_is_repeatable() {
    let (use_case, _, _) = build_use_case(sticky_tier(), vec![]).await;

    let expected = use_case.execute(&query(), Some("2001:db8::42")).await.unwrap();
    for _ in 0..10 {
        let again = use_case.execute(&query(), Some("2001:db8::42")).await.unwrap();
        assert_eq!(again, expected);
    }
}

#[tokio::test]
async fn test_missing_client_address_still_answers() {
    let (use_case, _, _) = build_use_case(sticky_tier(), vec![]).await;

    let answer = use_case.execute(&query(), None).await.unwrap();
    let garbage = use_case.execute(&query(), Some("nope")).await.unwrap();

    assert_eq!(contents(&answer), vec!["192.0.2.1"]);
    assert_eq!(answer, garbage);
}

#[tokio::test]
async fn test_persistence_applies_to_live_tier_only_members() {
    // Arrange - unhealthy member drops out, the sticky pick runs over the rest
    let (use_case, _, _) = build_use_case(sticky_tier(), vec![2]).await;

    // Act - 0x0A0001 % 3 == 2 -> third remaining member (id 4)
    let answer = use_case.execute(&query(), Some("10.0.1.5")).await.unwrap();

    // Assert
    assert_eq!(contents(&answer), vec!["192.0.2.4"]);
}

// ============================================================================
// Classification and projection
// ============================================================================

#[tokio::test]
async fn test_groups_are_answered_in_first_seen_order() {
    let (use_case, _, _) = build_use_case(
        vec![
            RecordBuilder::new(1, RecordType::MX, "10 mail.example.com").build(),
            a_record(2, 0).build(),
            RecordBuilder::new(3, RecordType::MX, "notanumber").build(),
            RecordBuilder::new(4, RecordType::MX, "10 backup.example.com").build(),
            RecordBuilder::new(5, RecordType::TXT, "v=spf1 -all").build(),
        ],
        vec![],
    )
    .await;

    let answer = use_case.execute(&query(), None).await.unwrap();

    let types: Vec<_> = answer.iter().map(PublicRecord::qtype).collect();
    assert_eq!(
        types,
        vec![RecordType::MX, RecordType::MX, RecordType::A, RecordType::TXT]
    );
    assert_eq!(
        answer[0],
        PublicRecord::Prioritized {
            qname: Arc::from("www.example.com"),
            qtype: RecordType::MX,
            content: "mail.example.com".to_string(),
            ttl: 60,
            priority: 10,
        }
    );
    assert_eq!(contents(&answer)[1], "backup.example.com");
}

#[tokio::test]
async fn test_malformed_record_does_not_fail_lookup() {
    let (use_case, _, _) = build_use_case(
        vec![RecordBuilder::new(1, RecordType::SRV, "").build()],
        vec![],
    )
    .await;

    let answer = use_case.execute(&query(), None).await.unwrap();

    assert!(answer.is_empty());
}

// ============================================================================
// Collaborators
// ============================================================================

#[tokio::test]
async fn test_one_snapshot_per_request() {
    let (use_case, store, monitor) = build_use_case(
        vec![
            a_record(1, 10).build(),
            RecordBuilder::new(2, RecordType::AAAA, "2001:db8::2").build(),
            RecordBuilder::new(3, RecordType::MX, "5 mx.example.com").build(),
        ],
        vec![],
    )
    .await;

    use_case.execute(&query(), None).await.unwrap();

    assert_eq!(monitor.snapshot_count(), 1);
    assert_eq!(store.queries().await, vec![query()]);
}

#[tokio::test]
async fn test_store_failure_is_propagated() {
    let (use_case, store, _) = build_use_case(vec![a_record(1, 10).build()], vec![]).await;
    store.set_should_fail(true).await;

    let result = use_case.execute(&query(), None).await;

    assert!(matches!(result, Err(DomainError::DatabaseError(_))));
}
