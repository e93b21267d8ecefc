//! Tests for the derivation computations and sync domain models.

use chrono::{NaiveDate, NaiveTime};
use std::str::FromStr;

use super::derive;
use super::{SyncEntity, SyncError, SyncResult};
use crate::accommodations::AccommodationStay;
use crate::errors::Error;
use crate::guests::Guest;
use crate::schedule::SourceModule;
use crate::transport::{LegType, TransportLeg};

fn test_guest() -> Guest {
    Guest {
        id: "guest-aaaaaaaaaaaa".to_string(),
        client_id: "client-bbbbbbbbbbbb".to_string(),
        first_name: "Asha".to_string(),
        last_name: "Rao".to_string(),
        email: None,
        phone: None,
        accommodation_required: 1,
        transport_required: 1,
        arrival_at: None,
        departure_at: None,
        check_in_date: None,
        check_out_date: None,
        room_preference: None,
        pickup_date: None,
        pickup_time: None,
        pickup_from: None,
        drop_to: None,
        transport_type: None,
        arrival_mode: None,
        created_at: "2026-01-05T08:00:00+00:00".to_string(),
        updated_at: "2026-01-05T08:00:00+00:00".to_string(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod stay_window_tests {
    use super::*;

    #[test]
    fn test_explicit_dates_win() {
        let mut guest = test_guest();
        guest.check_in_date = Some("2026-03-10".to_string());
        guest.check_out_date = Some("2026-03-17".to_string());
        guest.arrival_at = Some("2026-03-14T10:00:00Z".to_string());

        let window = derive::stay_window(&guest, date(2026, 3, 15));
        assert_eq!(window.check_in, date(2026, 3, 10));
        assert_eq!(window.check_out, date(2026, 3, 17));
    }

    #[test]
    fn test_arrival_timestamp_yields_check_in_date() {
        let mut guest = test_guest();
        guest.arrival_at = Some("2026-03-14T10:00:00Z".to_string());

        let window = derive::stay_window(&guest, date(2026, 3, 15));
        assert_eq!(window.check_in, date(2026, 3, 14));
        // No departure information: check-out falls back to the reference.
        assert_eq!(window.check_out, date(2026, 3, 16));
    }

    #[test]
    fn test_reference_date_fallback() {
        let guest = test_guest();

        let window = derive::stay_window(&guest, date(2026, 6, 20));
        assert_eq!(window.check_in, date(2026, 6, 19));
        assert_eq!(window.check_out, date(2026, 6, 21));
    }

    #[test]
    fn test_unparseable_explicit_date_falls_through() {
        let mut guest = test_guest();
        guest.check_in_date = Some("14/03/2026".to_string());
        guest.arrival_at = Some("2026-03-14T10:00:00Z".to_string());

        let window = derive::stay_window(&guest, date(2026, 3, 15));
        assert_eq!(window.check_in, date(2026, 3, 14));
    }
}

mod pickup_schedule_tests {
    use super::*;

    #[test]
    fn test_explicit_fields_win() {
        let mut guest = test_guest();
        guest.pickup_date = Some("2026-03-13".to_string());
        guest.pickup_time = Some("18:30".to_string());
        guest.arrival_at = Some("2026-03-14T10:00:00Z".to_string());

        let pickup = derive::pickup_schedule(&guest).unwrap();
        assert_eq!(pickup.date, date(2026, 3, 13));
        assert_eq!(pickup.time, NaiveTime::from_hms_opt(18, 30, 0));
    }

    #[test]
    fn test_arrival_timestamp_fallback() {
        let mut guest = test_guest();
        guest.arrival_at = Some("2026-03-14T10:00:00Z".to_string());

        let pickup = derive::pickup_schedule(&guest).unwrap();
        assert_eq!(pickup.date, date(2026, 3, 14));
        assert_eq!(pickup.time, NaiveTime::from_hms_opt(10, 0, 0));
    }

    #[test]
    fn test_no_usable_date() {
        let guest = test_guest();
        assert!(derive::pickup_schedule(&guest).is_none());
    }
}

mod vehicle_descriptor_tests {
    use super::*;

    #[test]
    fn test_both_parts_present() {
        let mut guest = test_guest();
        guest.transport_type = Some("Sedan".to_string());
        guest.arrival_mode = Some("Flight AI-202".to_string());

        assert_eq!(
            derive::vehicle_descriptor(&guest).as_deref(),
            Some("Sedan (Flight AI-202)")
        );
    }

    #[test]
    fn test_missing_part_yields_none() {
        let mut guest = test_guest();
        guest.transport_type = Some("Sedan".to_string());
        assert_eq!(derive::vehicle_descriptor(&guest), None);
    }
}

mod schedule_entry_tests {
    use super::*;

    fn test_stay() -> AccommodationStay {
        AccommodationStay {
            id: "stay-cccccccccccc".to_string(),
            client_id: "client-bbbbbbbbbbbb".to_string(),
            guest_id: "guest-aaaaaaaaaaaa".to_string(),
            hotel_name: Some("The Laurel".to_string()),
            check_in: Some("2026-03-14".to_string()),
            check_out: Some("2026-03-16".to_string()),
            room_type: None,
            created_at: "2026-01-05T08:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_check_in_entry_composition() {
        let stay = test_stay();
        let entry = derive::check_in_entry(&stay, "Asha Rao", date(2026, 3, 14)).unwrap();

        assert_eq!(entry.title, "Check-in: Asha Rao");
        assert_eq!(entry.description.as_deref(), Some("Accommodation at The Laurel"));
        assert_eq!(entry.start_time, "2026-03-14T14:00:00");
        assert_eq!(entry.source_module, SourceModule::Accommodation.as_str());
        assert_eq!(entry.source_id, stay.id);

        let metadata: serde_json::Value = serde_json::from_str(entry.metadata.as_deref().unwrap()).unwrap();
        assert_eq!(metadata["guestId"], "guest-aaaaaaaaaaaa");
        assert_eq!(metadata["direction"], "check-in");
    }

    #[test]
    fn test_pickup_entry_uses_default_hour() {
        let leg = TransportLeg {
            id: "leg-dddddddddddd".to_string(),
            client_id: "client-bbbbbbbbbbbb".to_string(),
            guest_id: "guest-aaaaaaaaaaaa".to_string(),
            leg_type: LegType::Arrival.as_str().to_string(),
            pickup_date: Some("2026-03-14".to_string()),
            pickup_time: None,
            pickup_from: None,
            drop_to: None,
            vehicle_info: Some("Sedan (Flight AI-202)".to_string()),
            created_at: "2026-01-05T08:00:00+00:00".to_string(),
        };

        let entry = derive::pickup_entry(&leg, "Asha Rao", date(2026, 3, 14)).unwrap();
        assert_eq!(entry.title, "Pickup: Asha Rao");
        assert_eq!(entry.start_time, "2026-03-14T09:00:00");
        assert_eq!(entry.description.as_deref(), Some("Vehicle: Sedan (Flight AI-202)"));
        assert_eq!(entry.source_module, SourceModule::Transport.as_str());

        let metadata: serde_json::Value = serde_json::from_str(entry.metadata.as_deref().unwrap()).unwrap();
        assert_eq!(metadata["direction"], "pickup");
    }

    #[test]
    fn test_departure_leg_labelled_drop_off() {
        let leg = TransportLeg {
            id: "leg-eeeeeeeeeeee".to_string(),
            client_id: "client-bbbbbbbbbbbb".to_string(),
            guest_id: "guest-aaaaaaaaaaaa".to_string(),
            leg_type: LegType::Departure.as_str().to_string(),
            pickup_date: Some("2026-03-16".to_string()),
            pickup_time: Some("07:15".to_string()),
            pickup_from: None,
            drop_to: None,
            vehicle_info: None,
            created_at: "2026-01-05T08:00:00+00:00".to_string(),
        };

        let entry = derive::pickup_entry(&leg, "Asha Rao", date(2026, 3, 16)).unwrap();
        assert_eq!(entry.title, "Drop-off: Asha Rao");
        assert_eq!(entry.start_time, "2026-03-16T07:15:00");

        let metadata: serde_json::Value = serde_json::from_str(entry.metadata.as_deref().unwrap()).unwrap();
        assert_eq!(metadata["direction"], "drop-off");
    }
}

mod sync_model_tests {
    use super::*;

    #[test]
    fn test_entity_parsing() {
        assert_eq!(SyncEntity::from_str("guests").unwrap(), SyncEntity::Guests);
        assert_eq!(
            SyncEntity::from_str("accommodations").unwrap(),
            SyncEntity::Accommodations
        );
        assert_eq!(
            SyncEntity::from_str("transport").unwrap(),
            SyncEntity::Transport
        );
        assert!(matches!(
            SyncEntity::from_str("vendors"),
            Err(Error::Sync(SyncError::UnknownEntity(_)))
        ));
    }

    #[test]
    fn test_result_aggregation() {
        let mut result = SyncResult::new();
        assert!(result.success);

        result.record_subject(crate::sync::CreatedCounts {
            accommodation: 2,
            transport: 1,
            schedule: 3,
        });
        assert_eq!(result.synced, 1);
        assert_eq!(result.created.total(), 6);

        result.record_failure(
            "client-missing",
            &Error::Sync(SyncError::SubjectNotFound("client-missing".to_string())),
        );
        assert!(!result.success);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("client-missing: "));
        // A failed subject does not count as synced.
        assert_eq!(result.synced, 1);
    }

    #[test]
    fn test_result_serialization_shape() {
        let result = SyncResult::new();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("success").is_some());
        assert!(json.get("synced").is_some());
        assert!(json["created"].get("accommodation").is_some());
        assert!(json.get("errors").is_some());
    }
}
