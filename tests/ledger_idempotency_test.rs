mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::json;

use guestfolio_core::errors::{Error, ValidationError};
use guestfolio_core::ledger::{
    LedgerRepository, LedgerRepositoryTrait, LedgerService, LedgerServiceTrait, LedgerStatus,
    ProcessOutcome,
};

fn build_service(ctx: &common::TestContext) -> LedgerService {
    let repository = Arc::new(LedgerRepository::new(ctx.pool.clone(), ctx.writer.clone()));
    LedgerService::new(repository)
}

#[tokio::test]
async fn test_duplicate_delivery_runs_handler_once() {
    let ctx = common::setup_test_db("ledger-duplicate");
    let service = build_service(&ctx);

    let calls = Arc::new(AtomicUsize::new(0));

    let calls_first = calls.clone();
    let first = service
        .process_with_idempotency(
            "stripe",
            "evt_1001",
            "invoice.paid",
            json!({"amount": 1200, "currency": "usd"}),
            move |event| async move {
                assert_eq!(event.provider, "stripe");
                assert_eq!(event.external_event_id, "evt_1001");
                calls_first.fetch_add(1, Ordering::SeqCst);
                Ok::<i32, Error>(42)
            },
        )
        .await
        .unwrap();
    assert!(matches!(first, ProcessOutcome::Processed(42)));

    let calls_second = calls.clone();
    let second = service
        .process_with_idempotency(
            "stripe",
            "evt_1001",
            "invoice.paid",
            json!({"amount": 1200, "currency": "usd"}),
            move |_event| async move {
                calls_second.fetch_add(1, Ordering::SeqCst);
                Ok::<i32, Error>(42)
            },
        )
        .await
        .unwrap();

    match second {
        ProcessOutcome::Duplicate { status, .. } => assert_eq!(status, LedgerStatus::Processed),
        ProcessOutcome::Processed(_) => panic!("duplicate delivery must not re-run the handler"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let entry = service.find_entry("stripe", "evt_1001").unwrap().unwrap();
    assert!(entry.is_processed());
    assert!(entry.processed_at.is_some());
    assert!(entry.duration_ms.is_some());
    assert_eq!(entry.retry_count, 0);

    let by_id = service.get_entry(&entry.id).unwrap().unwrap();
    assert_eq!(by_id.event_type, "invoice.paid");
}

#[tokio::test]
async fn test_same_event_id_across_providers_is_not_a_duplicate() {
    let ctx = common::setup_test_db("ledger-providers");
    let service = build_service(&ctx);

    let first = service
        .process_with_idempotency("stripe", "evt_7", "invoice.paid", json!({}), |_event| async {
            Ok::<(), Error>(())
        })
        .await
        .unwrap();
    assert!(!first.is_duplicate());

    let second = service
        .process_with_idempotency("paypal", "evt_7", "invoice.paid", json!({}), |_event| async {
            Ok::<(), Error>(())
        })
        .await
        .unwrap();
    assert!(!second.is_duplicate());

    let repository = LedgerRepository::new(ctx.pool.clone(), ctx.writer.clone());
    assert_eq!(repository.list_by_provider("stripe").unwrap().len(), 1);
    assert_eq!(repository.list_by_provider("paypal").unwrap().len(), 1);
}

#[tokio::test]
async fn test_handler_failure_is_recorded_and_reraised() {
    let ctx = common::setup_test_db("ledger-failure");
    let service = build_service(&ctx);

    let result = service
        .process_with_idempotency(
            "razorpay",
            "pay_552",
            "payment.captured",
            json!({"amount": 9900}),
            |_event| async {
                Err::<(), Error>(Error::Validation(ValidationError::InvalidInput(
                    "downstream unavailable".to_string(),
                )))
            },
        )
        .await;
    assert!(result.is_err());

    let entry = service.find_entry("razorpay", "pay_552").unwrap().unwrap();
    assert_eq!(entry.status(), LedgerStatus::Failed);
    assert!(entry
        .error
        .as_deref()
        .unwrap()
        .contains("downstream unavailable"));
    assert!(entry.processed_at.is_none());
    assert_eq!(entry.retry_count, 0);

    let failed = service.list_failed().unwrap();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].id, entry.id);
}

#[tokio::test]
async fn test_failed_event_reenters_processing_on_redelivery() {
    let ctx = common::setup_test_db("ledger-retry");
    let service = build_service(&ctx);

    let attempts = Arc::new(AtomicUsize::new(0));

    let attempts_first = attempts.clone();
    let _ = service
        .process_with_idempotency("stripe", "evt_9000", "charge.refunded", json!({}), move |_event| async move {
            attempts_first.fetch_add(1, Ordering::SeqCst);
            Err::<(), Error>(Error::Validation(ValidationError::InvalidInput(
                "transient".to_string(),
            )))
        })
        .await;

    let entry = service.find_entry("stripe", "evt_9000").unwrap().unwrap();
    assert_eq!(entry.status(), LedgerStatus::Failed);

    // The caller's retry policy bumps the counter before redelivering.
    let retry_count = service.increment_retry(&entry.id).await.unwrap();
    assert_eq!(retry_count, 1);

    let attempts_second = attempts.clone();
    let outcome = service
        .process_with_idempotency("stripe", "evt_9000", "charge.refunded", json!({}), move |_event| async move {
            attempts_second.fetch_add(1, Ordering::SeqCst);
            Ok::<(), Error>(())
        })
        .await
        .unwrap();
    assert!(matches!(outcome, ProcessOutcome::Processed(())));
    assert_eq!(attempts.load(Ordering::SeqCst), 2);

    // Same row all along: identity and retry counter survive the attempts.
    let entry = service.find_entry("stripe", "evt_9000").unwrap().unwrap();
    assert!(entry.is_processed());
    assert_eq!(entry.retry_count, 1);
    assert!(entry.error.is_none());
}
