//! Servicio de gestión de flota
//!
//! Filtrado y ordenamiento en memoria del catálogo de vehículos para el
//! panel administrativo, más las operaciones de alta, actualización y
//! registro de odómetro en modo demo. Ninguna operación muta sus
//! argumentos; siempre se devuelve una copia y el llamador persiste.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};
use validator::Validate;

use crate::models::vehicle::{
    CreateVehicleRequest, UpdateOdometerRequest, UpdateVehicleRequest, Vehicle, VehicleFilters,
    VehicleStatus,
};
use crate::services::maintenance_service::{effective_status, refresh_service_status};
use crate::utils::errors::{validation_error, AppError, AppResult};

/// Criterios de ordenamiento del catálogo
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VehicleSort {
    DailyRateAsc,
    DailyRateDesc,
    YearDesc,
    MakeAz,
}

fn matches_filters(vehicle: &Vehicle, filters: &VehicleFilters) -> bool {
    // El filtro de estado compara contra el estado efectivo (derivado),
    // nunca contra el cache almacenado
    if let Some(ref status) = filters.status {
        if effective_status(vehicle) != *status {
            return false;
        }
    }

    if let Some(ref category) = filters.category {
        if vehicle.category != *category {
            return false;
        }
    }

    if let Some(ref transmission) = filters.transmission {
        if vehicle.transmission != *transmission {
            return false;
        }
    }

    if let Some(ref fuel_type) = filters.fuel_type {
        if vehicle.fuel_type != *fuel_type {
            return false;
        }
    }

    if let Some(min_seats) = filters.min_seats {
        if vehicle.seats < min_seats {
            return false;
        }
    }

    if let Some(max_rate) = filters.max_daily_rate {
        if vehicle.daily_rate > max_rate {
            return false;
        }
    }

    if let Some(year_from) = filters.year_from {
        if vehicle.year < year_from {
            return false;
        }
    }

    if let Some(year_to) = filters.year_to {
        if vehicle.year > year_to {
            return false;
        }
    }

    if let Some(ref search) = filters.search {
        let needle = search.trim().to_lowercase();
        if !needle.is_empty() {
            let haystack = format!(
                "{} {} {}",
                vehicle.make.to_lowercase(),
                vehicle.model.to_lowercase(),
                vehicle.license_plate.to_lowercase()
            );
            if !haystack.contains(&needle) {
                return false;
            }
        }
    }

    true
}

/// Aplica los filtros del catálogo, conservando el orden de entrada
pub fn apply_vehicle_filters(vehicles: &[Vehicle], filters: &VehicleFilters) -> Vec<Vehicle> {
    vehicles
        .iter()
        .filter(|vehicle| matches_filters(vehicle, filters))
        .cloned()
        .collect()
}

/// Ordena el catálogo según el criterio indicado (orden estable)
pub fn sort_vehicles(vehicles: &mut Vec<Vehicle>, sort: VehicleSort) {
    match sort {
        VehicleSort::DailyRateAsc => vehicles.sort_by(|a, b| a.daily_rate.cmp(&b.daily_rate)),
        VehicleSort::DailyRateDesc => vehicles.sort_by(|a, b| b.daily_rate.cmp(&a.daily_rate)),
        VehicleSort::YearDesc => vehicles.sort_by(|a, b| b.year.cmp(&a.year)),
        VehicleSort::MakeAz => {
            vehicles.sort_by(|a, b| a.make.to_lowercase().cmp(&b.make.to_lowercase()))
        }
    }
}

/// Registra un nuevo vehículo en modo demo
///
/// El vehículo nace con la marca de último servicio en el odómetro actual
/// y estado `Available` (refrescado por la derivación). La matrícula debe
/// ser única dentro de la flota existente.
pub fn create_vehicle(
    request: &CreateVehicleRequest,
    existing: &[Vehicle],
    now: DateTime<Utc>,
) -> AppResult<Vehicle> {
    request.validate()?;

    // validator 0.16 no alcanza a los campos Decimal; chequeo programático
    if request.daily_rate < Decimal::ZERO {
        return Err(validation_error("daily_rate", "must be non-negative"));
    }

    let plate = request.license_plate.trim().to_uppercase();
    if existing
        .iter()
        .any(|vehicle| vehicle.license_plate.trim().to_uppercase() == plate)
    {
        return Err(AppError::Conflict(format!(
            "License plate '{}' is already registered",
            request.license_plate
        )));
    }

    let next_id = existing.iter().map(|v| v.id).max().unwrap_or(100) + 1;

    let vehicle = Vehicle {
        id: next_id,
        make: request.make.clone(),
        model: request.model.clone(),
        year: request.year,
        license_plate: request.license_plate.clone(),
        category: request.category.clone(),
        transmission: request.transmission.clone(),
        fuel_type: request.fuel_type.clone(),
        seats: request.seats,
        daily_rate: request.daily_rate,
        current_odometer_km: request.current_odometer_km,
        last_service_odometer_km: request.current_odometer_km,
        service_threshold_km: request.service_threshold_km,
        status: VehicleStatus::Available,
        image_url: request.image_url.clone(),
        created_at: now,
    };
    let vehicle = refresh_service_status(&vehicle);

    info!(
        "🚗 Vehículo {} registrado: {} ({})",
        vehicle.id,
        vehicle.display_name(),
        vehicle.license_plate
    );

    Ok(vehicle)
}

/// Aplica una actualización parcial sobre un vehículo
///
/// Solo los campos presentes en el request cambian; al final se refresca
/// el cache de estado por si la tarifa o el estado almacenado quedaron
/// inconsistentes con la derivación por odómetro.
pub fn apply_vehicle_update(
    vehicle: &Vehicle,
    request: &UpdateVehicleRequest,
) -> AppResult<Vehicle> {
    request.validate()?;

    if let Some(rate) = request.daily_rate {
        if rate < Decimal::ZERO {
            return Err(validation_error("daily_rate", "must be non-negative"));
        }
    }

    let mut updated = vehicle.clone();

    if let Some(ref make) = request.make {
        updated.make = make.clone();
    }
    if let Some(ref model) = request.model {
        updated.model = model.clone();
    }
    if let Some(year) = request.year {
        updated.year = year;
    }
    if let Some(ref plate) = request.license_plate {
        updated.license_plate = plate.clone();
    }
    if let Some(ref category) = request.category {
        updated.category = category.clone();
    }
    if let Some(ref transmission) = request.transmission {
        updated.transmission = transmission.clone();
    }
    if let Some(ref fuel_type) = request.fuel_type {
        updated.fuel_type = fuel_type.clone();
    }
    if let Some(seats) = request.seats {
        updated.seats = seats;
    }
    if let Some(rate) = request.daily_rate {
        updated.daily_rate = rate;
    }
    if let Some(ref status) = request.status {
        updated.status = status.clone();
    }
    if let Some(ref image_url) = request.image_url {
        updated.image_url = Some(image_url.clone());
    }

    Ok(refresh_service_status(&updated))
}

/// Registra una nueva lectura de odómetro
///
/// Una lectura en retroceso se aplica tal cual, con un warning; nunca se
/// recorta (ver el comportamiento del evaluador de servicio ante
/// diferencias negativas).
pub fn register_odometer(
    vehicle: &Vehicle,
    request: &UpdateOdometerRequest,
) -> AppResult<Vehicle> {
    request.validate()?;

    if request.current_odometer_km < vehicle.current_odometer_km {
        warn!(
            "⚠️ Lectura de odómetro en retroceso para {} ({} km < {} km)",
            vehicle.display_name(),
            request.current_odometer_km,
            vehicle.current_odometer_km
        );
    }

    let mut updated = vehicle.clone();
    updated.current_odometer_km = request.current_odometer_km;
    Ok(refresh_service_status(&updated))
}
