//! Guestfolio Core - idempotent event processing and cascade record sync.
//!
//! The two mechanisms that keep derived records consistent live here: the
//! webhook idempotency ledger (an event is acted on at most once despite
//! redelivery) and the cascade sync engine (accommodation stays, transport
//! legs and schedule entries derived from guest records without ever
//! duplicating them on re-run).

pub mod db;

pub mod accommodations;
pub mod clients;
pub mod guests;
pub mod ledger;
pub mod schedule;
pub mod sync;
pub mod transport;

pub mod constants;
pub mod errors;
pub mod schema;
pub mod utils;

pub use errors::Error;
pub use errors::Result;
