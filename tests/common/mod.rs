#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use guestfolio_core::clients::NewClient;
use guestfolio_core::db::{self, DbPool, WriteHandle};
use guestfolio_core::guests::NewGuest;

pub struct TestContext {
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
}

/// Creates a fresh migrated database under `tests/output/` and spawns the
/// writer actor. Must run inside a tokio runtime.
pub fn setup_test_db(test_id: &str) -> TestContext {
    let unique = Uuid::new_v4().to_string().replace('-', "");
    let dir = format!("./tests/output/{}-{}", test_id, &unique[..8]);

    let db_path = db::init(&dir).expect("Failed to initialize test database");
    let pool = db::create_pool(&db_path).expect("Failed to create test database pool");
    db::run_migrations(&pool).expect("Failed to run test migrations");
    let writer = db::spawn_writer((*pool).clone());

    TestContext { pool, writer }
}

pub fn new_client(name: &str, event_date: &str) -> NewClient {
    let now = Utc::now().to_rfc3339();
    NewClient {
        id: None,
        name: name.to_string(),
        event_date: event_date.to_string(),
        venue: None,
        created_at: now.clone(),
        updated_at: now,
    }
}

pub fn new_guest(client_id: &str, first_name: &str, last_name: &str) -> NewGuest {
    let now = Utc::now().to_rfc3339();
    NewGuest {
        id: None,
        client_id: client_id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: None,
        phone: None,
        accommodation_required: 0,
        transport_required: 0,
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
        created_at: now.clone(),
        updated_at: now,
    }
}
