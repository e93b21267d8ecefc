//! Tests for ledger domain models.

use super::*;
use serde_json::json;

mod ledger_status_tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            LedgerStatus::Pending,
            LedgerStatus::Processed,
            LedgerStatus::Failed,
        ] {
            assert_eq!(LedgerStatus::from_str(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert_eq!(LedgerStatus::from_str("RETRYING"), None);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&LedgerStatus::Processed).unwrap(),
            "\"PROCESSED\""
        );
        assert_eq!(
            serde_json::to_string(&LedgerStatus::Failed).unwrap(),
            "\"FAILED\""
        );
    }
}

mod new_ledger_entry_tests {
    use super::*;

    #[test]
    fn test_new_entry_defaults() {
        let entry = NewLedgerEntry::new(
            "stripe",
            "evt_000123",
            "invoice.paid",
            &json!({"amount": 4200}),
        )
        .unwrap();

        assert!(entry.id.starts_with("wbl-"));
        assert_eq!(entry.provider, "stripe");
        assert_eq!(entry.external_event_id, "evt_000123");
        assert_eq!(entry.event_type, "invoice.paid");
        assert_eq!(entry.status, "PENDING");
        assert_eq!(entry.retry_count, 0);

        let payload: serde_json::Value = serde_json::from_str(&entry.payload).unwrap();
        assert_eq!(payload["amount"], 4200);
    }
}

mod process_outcome_tests {
    use super::*;

    #[test]
    fn test_is_duplicate() {
        let processed: ProcessOutcome<u32> = ProcessOutcome::Processed(7);
        assert!(!processed.is_duplicate());

        let duplicate: ProcessOutcome<u32> = ProcessOutcome::Duplicate {
            ledger_id: "wbl-abc".to_string(),
            status: LedgerStatus::Processed,
        };
        assert!(duplicate.is_duplicate());
    }
}
