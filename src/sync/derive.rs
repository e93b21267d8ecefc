//! Pure derivation computations shared by the cascade rules.
//!
//! Date/time resolution follows a fixed priority: an explicit guest field
//! wins over the guest's arrival/departure timestamp, which wins over the
//! client's event date shifted by one day. Unparseable explicit values fall
//! through to the next priority rather than failing the subject.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::accommodations::AccommodationStay;
use crate::constants::{DEFAULT_CHECK_IN_HOUR, DEFAULT_PICKUP_HOUR, STAY_WINDOW_FALLBACK_DAYS};
use crate::errors::Result;
use crate::guests::Guest;
use crate::schedule::{NewScheduleEntry, ScheduleMetadata, SourceModule};
use crate::transport::{LegType, TransportLeg};
use crate::utils::{short_id, DATE_FORMAT, TIME_FORMAT};

const START_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Resolved check-in/check-out dates for a guest's stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayWindow {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// Resolved pickup slot for a guest's transport leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupSchedule {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
}

pub fn stay_window(guest: &Guest, reference_date: NaiveDate) -> StayWindow {
    let check_in = parse_date(guest.check_in_date.as_deref())
        .or_else(|| timestamp_date(guest.arrival_at.as_deref()))
        .unwrap_or_else(|| reference_date - Duration::days(STAY_WINDOW_FALLBACK_DAYS));

    let check_out = parse_date(guest.check_out_date.as_deref())
        .or_else(|| timestamp_date(guest.departure_at.as_deref()))
        .unwrap_or_else(|| reference_date + Duration::days(STAY_WINDOW_FALLBACK_DAYS));

    StayWindow {
        check_in,
        check_out,
    }
}

/// `None` when neither an explicit pickup date nor an arrival timestamp
/// yields a usable date; such guests get a leg without a scheduled slot.
pub fn pickup_schedule(guest: &Guest) -> Option<PickupSchedule> {
    let arrival = parse_timestamp(guest.arrival_at.as_deref());

    let date = parse_date(guest.pickup_date.as_deref())
        .or_else(|| arrival.map(|ts| ts.date_naive()))?;

    let time = parse_time(guest.pickup_time.as_deref()).or_else(|| arrival.map(|ts| ts.time()));

    Some(PickupSchedule { date, time })
}

/// Human-readable vehicle descriptor, only when both parts are known.
pub fn vehicle_descriptor(guest: &Guest) -> Option<String> {
    match (
        guest.transport_type.as_deref(),
        guest.arrival_mode.as_deref(),
    ) {
        (Some(transport_type), Some(arrival_mode)) => {
            Some(format!("{} ({})", transport_type, arrival_mode))
        }
        _ => None,
    }
}

/// Schedule entry for a stay's check-in.
pub fn check_in_entry(
    stay: &AccommodationStay,
    guest_name: &str,
    check_in: NaiveDate,
) -> Result<NewScheduleEntry> {
    let start = check_in.and_time(hour(DEFAULT_CHECK_IN_HOUR));
    let metadata = ScheduleMetadata {
        guest_id: stay.guest_id.clone(),
        direction: "check-in".to_string(),
    };

    Ok(NewScheduleEntry {
        id: short_id("sched"),
        client_id: stay.client_id.clone(),
        title: format!("Check-in: {}", guest_name),
        description: stay
            .hotel_name
            .as_ref()
            .map(|hotel| format!("Accommodation at {}", hotel)),
        start_time: start.format(START_TIME_FORMAT).to_string(),
        source_module: SourceModule::Accommodation.as_str().to_string(),
        source_id: stay.id.clone(),
        metadata: Some(serde_json::to_string(&metadata)?),
        created_at: Utc::now().to_rfc3339(),
    })
}

/// Schedule entry for a leg's pickup (or drop-off, for departure legs).
pub fn pickup_entry(
    leg: &TransportLeg,
    guest_name: &str,
    pickup_date: NaiveDate,
) -> Result<NewScheduleEntry> {
    let time = parse_time(leg.pickup_time.as_deref()).unwrap_or_else(|| hour(DEFAULT_PICKUP_HOUR));
    let direction = leg.leg_type().direction_label();
    let title = match leg.leg_type() {
        LegType::Arrival => format!("Pickup: {}", guest_name),
        LegType::Departure => format!("Drop-off: {}", guest_name),
    };
    let metadata = ScheduleMetadata {
        guest_id: leg.guest_id.clone(),
        direction: direction.to_string(),
    };

    Ok(NewScheduleEntry {
        id: short_id("sched"),
        client_id: leg.client_id.clone(),
        title,
        description: leg
            .vehicle_info
            .as_ref()
            .map(|vehicle| format!("Vehicle: {}", vehicle)),
        start_time: pickup_date.and_time(time).format(START_TIME_FORMAT).to_string(),
        source_module: SourceModule::Transport.as_str().to_string(),
        source_id: leg.id.clone(),
        metadata: Some(serde_json::to_string(&metadata)?),
        created_at: Utc::now().to_rfc3339(),
    })
}

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|v| NaiveDate::parse_from_str(v, DATE_FORMAT).ok())
}

fn parse_time(value: Option<&str>) -> Option<NaiveTime> {
    value.and_then(|v| NaiveTime::parse_from_str(v, TIME_FORMAT).ok())
}

fn parse_timestamp(value: Option<&str>) -> Option<DateTime<chrono::FixedOffset>> {
    value.and_then(|v| DateTime::parse_from_rfc3339(v).ok())
}

fn timestamp_date(value: Option<&str>) -> Option<NaiveDate> {
    parse_timestamp(value).map(|ts| ts.date_naive())
}

fn hour(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap_or(NaiveTime::MIN)
}
