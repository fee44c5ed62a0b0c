//! Servicio de mantenimiento de flota
//!
//! Evalúa el umbral de servicio por odómetro y resuelve la duplicación
//! entre el estado almacenado y la propiedad derivada "due for service":
//! la derivación se recalcula en cada lectura y siempre gana; el campo
//! `status` del vehículo es solo un cache que se refresca al mutar.

use tracing::{info, warn};

use crate::models::vehicle::{RecordServiceRequest, Vehicle, VehicleStatus};
use crate::utils::errors::AppResult;
use validator::Validate;

/// El vehículo superó su umbral de servicio
///
/// `true` sii `km_since_service >= service_threshold_km`. Una diferencia
/// negativa (odómetro reiniciado) nunca dispara el umbral; no se recorta.
pub fn is_due_for_service(vehicle: &Vehicle) -> bool {
    vehicle.km_since_service() >= vehicle.service_threshold_km
}

/// Filtra los vehículos con servicio vencido, conservando el orden
pub fn filter_due_for_service(vehicles: &[Vehicle]) -> Vec<Vehicle> {
    vehicles
        .iter()
        .filter(|vehicle| is_due_for_service(vehicle))
        .cloned()
        .collect()
}

/// Kilómetros restantes hasta el próximo servicio (negativo si ya venció)
pub fn km_until_service(vehicle: &Vehicle) -> i64 {
    vehicle.service_threshold_km - vehicle.km_since_service()
}

/// Estado efectivo del vehículo: la única fuente de verdad para lecturas
///
/// La derivación por odómetro manda: si el umbral está vencido el estado
/// efectivo es `DueForService` sin importar el cache; si el cache dice
/// `DueForService` pero el odómetro ya no lo respalda, el vehículo vuelve
/// a `Available`.
pub fn effective_status(vehicle: &Vehicle) -> VehicleStatus {
    if is_due_for_service(vehicle) {
        return VehicleStatus::DueForService;
    }

    match vehicle.status {
        VehicleStatus::DueForService => VehicleStatus::Available,
        ref other => other.clone(),
    }
}

/// Refresca el cache de estado tras una mutación (odómetro o servicio)
pub fn refresh_service_status(vehicle: &Vehicle) -> Vehicle {
    let mut refreshed = vehicle.clone();
    refreshed.status = effective_status(vehicle);
    refreshed
}

/// Registra un servicio de mantenimiento completado
///
/// Mueve la marca de último servicio a la lectura indicada y refresca el
/// cache de estado. Devuelve una copia; el llamador persiste el cambio.
pub fn record_service(vehicle: &Vehicle, request: &RecordServiceRequest) -> AppResult<Vehicle> {
    request.validate()?;

    if request.service_odometer_km > vehicle.current_odometer_km {
        warn!(
            "⚠️ Servicio registrado por encima del odómetro actual para {} ({} > {})",
            vehicle.display_name(),
            request.service_odometer_km,
            vehicle.current_odometer_km
        );
    }

    let mut serviced = vehicle.clone();
    serviced.last_service_odometer_km = request.service_odometer_km;
    let serviced = refresh_service_status(&serviced);

    info!(
        "🔧 Servicio registrado para {} en {} km",
        serviced.display_name(),
        request.service_odometer_km
    );

    Ok(serviced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::{FuelType, Transmission, VehicleCategory};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn vehicle(current_km: i64, last_service_km: i64, threshold_km: i64) -> Vehicle {
        Vehicle {
            id: 104,
            make: "Renault".to_string(),
            model: "Kangoo".to_string(),
            year: 2020,
            license_plate: "KL-789-MN".to_string(),
            category: VehicleCategory::Van,
            transmission: Transmission::Manual,
            fuel_type: FuelType::Diesel,
            seats: 3,
            daily_rate: Decimal::new(6200, 2),
            current_odometer_km: current_km,
            last_service_odometer_km: last_service_km,
            service_threshold_km: threshold_km,
            status: VehicleStatus::Available,
            image_url: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_not_due_below_threshold() {
        let v = vehicle(32_100, 30_000, 5_000);
        assert!(!is_due_for_service(&v));
        assert_eq!(km_until_service(&v), 2_900);
    }

    #[test]
    fn test_due_above_threshold() {
        let v = vehicle(35_200, 30_000, 5_000);
        assert!(is_due_for_service(&v));
        assert_eq!(km_until_service(&v), -200);
    }

    #[test]
    fn test_due_exactly_at_threshold() {
        let v = vehicle(35_000, 30_000, 5_000);
        assert!(is_due_for_service(&v));
        assert_eq!(km_until_service(&v), 0);
    }

    #[test]
    fn test_negative_distance_is_not_due() {
        // Odómetro reiniciado por debajo del último servicio
        let v = vehicle(500, 30_000, 5_000);
        assert!(!is_due_for_service(&v));
    }

    #[test]
    fn test_filter_preserves_order() {
        let vehicles = vec![
            vehicle(35_200, 30_000, 5_000), // vencido
            vehicle(32_100, 30_000, 5_000), // al día
            vehicle(99_000, 90_000, 7_000), // vencido
        ];

        let due = filter_due_for_service(&vehicles);
        let kms: Vec<i64> = due.iter().map(|v| v.current_odometer_km).collect();
        assert_eq!(kms, vec![35_200, 99_000]);
    }

    #[test]
    fn test_effective_status_derivation_wins() {
        let mut v = vehicle(35_200, 30_000, 5_000);
        v.status = VehicleStatus::Available;
        assert_eq!(effective_status(&v), VehicleStatus::DueForService);

        v.status = VehicleStatus::Booked;
        assert_eq!(effective_status(&v), VehicleStatus::DueForService);
    }

    #[test]
    fn test_effective_status_discards_stale_cache() {
        let mut v = vehicle(32_100, 30_000, 5_000);
        v.status = VehicleStatus::DueForService;
        assert_eq!(effective_status(&v), VehicleStatus::Available);
    }

    #[test]
    fn test_effective_status_keeps_stored_when_consistent() {
        let mut v = vehicle(32_100, 30_000, 5_000);
        v.status = VehicleStatus::UnderMaintenance;
        assert_eq!(effective_status(&v), VehicleStatus::UnderMaintenance);
    }

    #[test]
    fn test_record_service_resets_threshold() {
        let mut v = vehicle(35_200, 30_000, 5_000);
        v.status = VehicleStatus::DueForService;

        let request = RecordServiceRequest {
            service_odometer_km: 35_200,
        };
        let serviced = record_service(&v, &request).unwrap();

        assert_eq!(serviced.last_service_odometer_km, 35_200);
        assert!(!is_due_for_service(&serviced));
        assert_eq!(serviced.status, VehicleStatus::Available);
    }

    #[test]
    fn test_record_service_rejects_negative_reading() {
        let v = vehicle(35_200, 30_000, 5_000);
        let request = RecordServiceRequest {
            service_odometer_km: -1,
        };
        assert!(record_service(&v, &request).is_err());
    }
}
