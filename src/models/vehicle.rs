//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle de la flota de alquiler y sus
//! variantes para operaciones de gestión (requests y filtros).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Categoría comercial del vehículo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleCategory {
    Economy,
    Compact,
    Suv,
    Van,
    Luxury,
}

/// Tipo de transmisión
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum Transmission {
    Manual,
    Automatic,
}

/// Tipo de combustible
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum FuelType {
    Petrol,
    Diesel,
    Hybrid,
    Electric,
}

/// Estado del vehículo en el ciclo de vida de la flota
///
/// `DueForService` es una propiedad derivada del odómetro; el valor
/// almacenado aquí es solo un cache. La fuente de verdad se recalcula en
/// cada lectura (ver `services::maintenance_service::effective_status`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleStatus {
    Available,
    Booked,
    InUse,
    UnderMaintenance,
    DueForService,
}

/// Vehicle principal de la flota
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub category: VehicleCategory,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub seats: i32,
    pub daily_rate: Decimal,
    pub current_odometer_km: i64,
    pub last_service_odometer_km: i64,
    pub service_threshold_km: i64,
    pub status: VehicleStatus,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    /// Kilómetros recorridos desde el último servicio
    ///
    /// Puede ser negativo si el odómetro fue reiniciado por debajo de la
    /// última lectura de servicio; ese caso se conserva sin recortar.
    pub fn km_since_service(&self) -> i64 {
        self.current_odometer_km - self.last_service_odometer_km
    }

    /// Nombre legible para reportes y logs, ej. "2022 Toyota Corolla"
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

/// Request para registrar un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1990, max = 2030))]
    pub year: i32,

    #[validate(length(min = 5, max = 20))]
    pub license_plate: String,

    pub category: VehicleCategory,
    pub transmission: Transmission,
    pub fuel_type: FuelType,

    #[validate(range(min = 1, max = 9))]
    pub seats: i32,

    pub daily_rate: Decimal,

    #[validate(range(min = 0))]
    pub current_odometer_km: i64,

    #[validate(range(min = 1))]
    pub service_threshold_km: i64,

    pub image_url: Option<String>,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1990, max = 2030))]
    pub year: Option<i32>,

    #[validate(length(min = 5, max = 20))]
    pub license_plate: Option<String>,

    pub category: Option<VehicleCategory>,
    pub transmission: Option<Transmission>,
    pub fuel_type: Option<FuelType>,

    #[validate(range(min = 1, max = 9))]
    pub seats: Option<i32>,

    pub daily_rate: Option<Decimal>,

    pub status: Option<VehicleStatus>,

    pub image_url: Option<String>,
}

/// Request para registrar una nueva lectura de odómetro
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOdometerRequest {
    #[validate(range(min = 0))]
    pub current_odometer_km: i64,
}

/// Request para registrar un servicio de mantenimiento completado
#[derive(Debug, Deserialize, Validate)]
pub struct RecordServiceRequest {
    #[validate(range(min = 0))]
    pub service_odometer_km: i64,
}

/// Filtros para búsqueda de vehículos (se aplican en memoria)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleFilters {
    pub status: Option<VehicleStatus>,
    pub category: Option<VehicleCategory>,
    pub transmission: Option<Transmission>,
    pub fuel_type: Option<FuelType>,
    pub min_seats: Option<i32>,
    pub max_daily_rate: Option<Decimal>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle() -> Vehicle {
        Vehicle {
            id: 101,
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2022,
            license_plate: "AB-123-CD".to_string(),
            category: VehicleCategory::Compact,
            transmission: Transmission::Automatic,
            fuel_type: FuelType::Petrol,
            seats: 5,
            daily_rate: Decimal::new(4550, 2),
            current_odometer_km: 32_100,
            last_service_odometer_km: 30_000,
            service_threshold_km: 5_000,
            status: VehicleStatus::Available,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_km_since_service() {
        let v = vehicle();
        assert_eq!(v.km_since_service(), 2_100);
    }

    #[test]
    fn test_km_since_service_negative_after_reset() {
        let mut v = vehicle();
        v.current_odometer_km = 500;
        assert_eq!(v.km_since_service(), -29_500);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(vehicle().display_name(), "2022 Toyota Corolla");
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&VehicleStatus::DueForService).unwrap();
        assert_eq!(json, "\"due-for-service\"");

        let parsed: VehicleStatus = serde_json::from_str("\"under-maintenance\"").unwrap();
        assert_eq!(parsed, VehicleStatus::UnderMaintenance);
    }
}
