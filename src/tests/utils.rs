use crate::db::connection::{init_db, Database};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Five rentals owned by two users.
///
/// Portland (1) and Salem (5) lie within 100 miles of downtown Portland;
/// Seattle (2), San Diego (3) and Boise (4) do not.
pub const SEED_SQL: &str = r#"
INSERT INTO users (id, first_name, last_name) VALUES
    (1, 'Ada', 'Lovelace'),
    (2, 'Grace', 'Hopper');

INSERT INTO rentals (
    id, user_id, name, type, description, sleeps, price_per_day,
    home_city, home_state, home_zip, home_country,
    vehicle_make, vehicle_model, vehicle_year, vehicle_length,
    created, updated, lat, lng, primary_image_url
) VALUES
    (1, 1, 'Portland Westy', 'camper-van', 'Pop-top camper', 4, 120,
     'Portland', 'OR', '97201', 'US', 'Volkswagen', 'Vanagon', 1987, 15.0,
     '2023-01-10 09:00:00', '2023-02-01 10:30:00', 45.52, -122.68, 'https://img.example/1.jpg'),
    (2, 2, 'Seattle Airstream', 'trailer', 'Classic aluminium trailer', 6, 200,
     'Seattle', 'WA', '98101', 'US', 'Airstream', 'Flying Cloud', 2018, 23.0,
     '2023-01-11 09:00:00', '2023-01-11 09:00:00', 47.61, -122.33, 'https://img.example/2.jpg'),
    (3, 1, 'San Diego Class C', 'class-c', 'Family motorhome', 8, 350,
     'San Diego', 'CA', '92101', 'US', 'Ford', 'Majestic', 2015, 31.0,
     '2023-01-12 09:00:00', '2023-01-12 09:00:00', 32.72, -117.16, 'https://img.example/3.jpg'),
    (4, 2, 'Boise Sprinter', 'camper-van', 'High-roof van', 2, 175,
     'Boise', 'ID', '83702', 'US', 'Mercedes-Benz', 'Sprinter', 2020, 19.5,
     '2023-01-13 09:00:00', '2023-01-13 09:00:00', 43.62, -116.20, 'https://img.example/4.jpg'),
    (5, 1, 'Salem Teardrop', 'trailer', 'Tiny teardrop', 2, 60,
     'Salem', 'OR', '97301', 'US', 'Hiker', 'Mid-Range', 2019, 10.0,
     '2023-01-14 09:00:00', '2023-01-14 09:00:00', 44.94, -123.03, 'https://img.example/5.jpg');
"#;

/// Unique SQLite file under the system temp dir.
pub fn temp_db_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!(
        "rentals_{prefix}_{}_{nanos}.sqlite",
        std::process::id()
    ))
}

/// Fresh database with the production schema and no rows.
pub fn init_test_db(prefix: &str) -> Database {
    let db = Database::new(temp_db_path(prefix));
    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db
}

/// Fresh database loaded with [`SEED_SQL`].
pub fn seeded_db(prefix: &str) -> Database {
    let db = init_test_db(prefix);
    db.with_conn(|conn| conn.execute_batch(SEED_SQL))
        .expect("Failed to seed rentals");
    db
}
