//! Dataset de flota y reservas
//!
//! El mismo shape sirve para los fixtures demo y para snapshots JSON
//! exportados desde la API externa.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::models::booking::Booking;
use crate::models::vehicle::Vehicle;
use crate::utils::validation::{validate_license_plate, validate_non_negative, validate_positive};

/// Flota y reservas cargadas en memoria
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalDataset {
    pub vehicles: Vec<Vehicle>,
    pub bookings: Vec<Booking>,
}

/// Carga un snapshot JSON del dataset
pub fn load_dataset(path: &Path) -> anyhow::Result<RentalDataset> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("No se pudo leer el dataset en {}", path.display()))?;
    let dataset: RentalDataset = serde_json::from_str(&raw)
        .with_context(|| format!("JSON inválido en {}", path.display()))?;
    Ok(dataset)
}

/// Chequeo de integridad del dataset
///
/// Devuelve warnings en lugar de fallar: un dataset imperfecto sigue siendo
/// utilizable (todas las operaciones del núcleo son totales), pero el
/// binario de informe los muestra para que el operador los corrija.
pub fn validate_dataset(dataset: &RentalDataset) -> Vec<String> {
    let mut warnings = Vec::new();

    let mut vehicle_ids = HashSet::new();
    for vehicle in &dataset.vehicles {
        if !vehicle_ids.insert(vehicle.id) {
            warnings.push(format!("Vehículo {} duplicado", vehicle.id));
        }
        if validate_non_negative(vehicle.daily_rate).is_err() {
            warnings.push(format!(
                "Vehículo {}: tarifa diaria negativa ({})",
                vehicle.id, vehicle.daily_rate
            ));
        }
        if validate_positive(vehicle.service_threshold_km).is_err() {
            warnings.push(format!(
                "Vehículo {}: umbral de servicio no positivo ({} km)",
                vehicle.id, vehicle.service_threshold_km
            ));
        }
        if validate_non_negative(vehicle.current_odometer_km).is_err() {
            warnings.push(format!(
                "Vehículo {}: odómetro negativo ({} km)",
                vehicle.id, vehicle.current_odometer_km
            ));
        }
        if validate_license_plate(&vehicle.license_plate).is_err() {
            warnings.push(format!(
                "Vehículo {}: matrícula inválida ('{}')",
                vehicle.id, vehicle.license_plate
            ));
        }
        if vehicle.km_since_service() < 0 {
            warnings.push(format!(
                "Vehículo {}: último servicio por encima del odómetro actual",
                vehicle.id
            ));
        }
    }

    let mut booking_ids = HashSet::new();
    for booking in &dataset.bookings {
        if !booking_ids.insert(booking.id) {
            warnings.push(format!("Reserva {} duplicada", booking.id));
        }
        if booking.end_date <= booking.start_date {
            warnings.push(format!(
                "Reserva {}: rango de fechas invertido o vacío",
                booking.id
            ));
        }
        if validate_non_negative(booking.total_cost).is_err() {
            warnings.push(format!(
                "Reserva {}: costo total negativo ({})",
                booking.id, booking.total_cost
            ));
        }
        if !vehicle_ids.contains(&booking.vehicle_id) {
            warnings.push(format!(
                "Reserva {}: vehículo {} inexistente",
                booking.id, booking.vehicle_id
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::fixtures::demo_dataset;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_demo_dataset_is_clean() {
        let dataset = demo_dataset();
        let warnings = validate_dataset(&dataset);
        assert!(warnings.is_empty(), "warnings inesperados: {:?}", warnings);
    }

    #[test]
    fn test_detects_dangling_vehicle_and_inverted_range() {
        let mut dataset = demo_dataset();
        let booking = &mut dataset.bookings[0];
        booking.vehicle_id = 999;
        booking.end_date = booking.start_date;

        let warnings = validate_dataset(&dataset);
        assert!(warnings.iter().any(|w| w.contains("vehículo 999")));
        assert!(warnings.iter().any(|w| w.contains("invertido")));
    }

    #[test]
    fn test_detects_negative_rate_and_bad_plate() {
        let mut dataset = demo_dataset();
        let vehicle = &mut dataset.vehicles[0];
        vehicle.daily_rate = rust_decimal::Decimal::from(-5);
        vehicle.license_plate = "X".to_string();

        let warnings = validate_dataset(&dataset);
        assert!(warnings.iter().any(|w| w.contains("tarifa diaria negativa")));
        assert!(warnings.iter().any(|w| w.contains("matrícula inválida")));
    }

    #[test]
    fn test_detects_duplicate_ids() {
        let mut dataset = demo_dataset();
        let duplicate = dataset.vehicles[0].clone();
        dataset.vehicles.push(duplicate);

        let warnings = validate_dataset(&dataset);
        assert!(warnings.iter().any(|w| w.contains("duplicado")));
    }

    #[test]
    fn test_dataset_round_trips_through_json() {
        let dataset = demo_dataset();
        let json = serde_json::to_string_pretty(&dataset).unwrap();
        let parsed: RentalDataset = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.vehicles.len(), dataset.vehicles.len());
        assert_eq!(parsed.bookings.len(), dataset.bookings.len());
        assert_eq!(parsed.vehicles[0].id, dataset.vehicles[0].id);
        assert_eq!(
            parsed.bookings[0].start_date,
            dataset.bookings[0].start_date
        );
    }

    #[test]
    fn test_load_dataset_missing_file_fails_with_path() {
        let err = load_dataset(Path::new("/nonexistent/dataset.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dataset.json"));
    }

    #[test]
    fn test_statuses_parse_from_kebab_case_snapshot() {
        // Shape mínimo de un snapshot exportado por la API externa
        let raw = r#"{
            "vehicles": [{
                "id": 1, "make": "Kia", "model": "Rio", "year": 2021,
                "license_plate": "XY-111-ZW", "category": "economy",
                "transmission": "manual", "fuel_type": "petrol", "seats": 5,
                "daily_rate": "35.00", "current_odometer_km": 1000,
                "last_service_odometer_km": 0, "service_threshold_km": 10000,
                "status": "due-for-service", "image_url": null,
                "created_at": "2024-01-10T00:00:00Z"
            }],
            "bookings": []
        }"#;

        let dataset: RentalDataset = serde_json::from_str(raw).unwrap();
        assert_eq!(
            dataset.vehicles[0].status,
            crate::models::vehicle::VehicleStatus::DueForService
        );
        assert_eq!(
            dataset.vehicles[0].created_at,
            Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap()
        );
    }
}
