use std::collections::BTreeMap;

use daytrip_core::{CourseRecord, Operator, OperatorBuilder, PricingMode};
use tempfile::TempDir;

/// Helper function to create a test operator
pub async fn create_test_operator() -> (TempDir, Operator) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let operator = OperatorBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create operator");
    (temp_dir, operator)
}

/// A small catalog: one region with two stops (one of them a hotel) and a
/// standalone extra.
pub fn sample_catalog() -> Vec<CourseRecord> {
    let mut vehicle_prices = BTreeMap::new();
    vehicle_prices.insert("minivan".to_string(), 120.0);
    vehicle_prices.insert("9seater".to_string(), 160.0);

    vec![
        CourseRecord {
            id: 1,
            parent_id: None,
            name: "East Coast".to_string(),
            category: "region".to_string(),
            pricing_mode: PricingMode::PerVehicle,
            vehicle_prices: BTreeMap::new(),
            price_adult: 0.0,
            price_child: 0.0,
            price_infant: 0.0,
            duration_minutes: 0,
            lat: None,
            lon: None,
        },
        CourseRecord {
            id: 2,
            parent_id: Some(1),
            name: "Sunrise Peak".to_string(),
            category: "sight".to_string(),
            pricing_mode: PricingMode::PerVehicle,
            vehicle_prices,
            price_adult: 0.0,
            price_child: 0.0,
            price_infant: 0.0,
            duration_minutes: 90,
            lat: Some(33.458),
            lon: Some(126.942),
        },
        CourseRecord {
            id: 3,
            parent_id: Some(1),
            name: "Seaside Hotel".to_string(),
            category: "accommodation".to_string(),
            pricing_mode: PricingMode::PerPerson,
            vehicle_prices: BTreeMap::new(),
            price_adult: 80.0,
            price_child: 40.0,
            price_infant: 0.0,
            duration_minutes: 0,
            lat: Some(33.450),
            lon: Some(126.918),
        },
        CourseRecord {
            id: 4,
            parent_id: None,
            name: "Folk Village".to_string(),
            category: "sight".to_string(),
            pricing_mode: PricingMode::PerPerson,
            vehicle_prices: BTreeMap::new(),
            price_adult: 15.0,
            price_child: 8.0,
            price_infant: 0.0,
            duration_minutes: 60,
            lat: None,
            lon: None,
        },
    ]
}
