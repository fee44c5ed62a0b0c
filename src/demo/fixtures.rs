//! Fixtures del modo demo
//!
//! Flota y reservas con las que el dashboard arranca cuando la API externa
//! no está disponible. Las reservas cubren todos los estados del ciclo de
//! vida para que el listado administrativo tenga material.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::demo::dataset::RentalDataset;
use crate::models::booking::{Booking, BookingStatus, PaymentStatus};
use crate::models::vehicle::{FuelType, Transmission, Vehicle, VehicleCategory, VehicleStatus};

fn dt(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn vehicle(
    id: i64,
    make: &str,
    model: &str,
    year: i32,
    plate: &str,
    category: VehicleCategory,
    transmission: Transmission,
    fuel_type: FuelType,
    seats: i32,
    daily_rate: Decimal,
    current_km: i64,
    last_service_km: i64,
    threshold_km: i64,
    status: VehicleStatus,
) -> Vehicle {
    Vehicle {
        id,
        make: make.to_string(),
        model: model.to_string(),
        year,
        license_plate: plate.to_string(),
        category,
        transmission,
        fuel_type,
        seats,
        daily_rate,
        current_odometer_km: current_km,
        last_service_odometer_km: last_service_km,
        service_threshold_km: threshold_km,
        status,
        image_url: None,
        created_at: dt(2024, 1, 10, 0),
    }
}

fn booking(
    id: i64,
    vehicle_id: i64,
    renter_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    status: BookingStatus,
    payment_status: PaymentStatus,
    total_cost: Decimal,
    promo_code: Option<&str>,
) -> Booking {
    Booking {
        id,
        vehicle_id,
        renter_id,
        start_date: start,
        end_date: end,
        status,
        payment_status,
        total_cost,
        promo_code: promo_code.map(str::to_string),
        pickup_odometer_km: None,
        return_odometer_km: None,
        pickup_fuel_percent: None,
        return_fuel_percent: None,
        pickup_photos: None,
        return_photos: None,
        created_at: dt(2024, 8, 1, 0),
    }
}

/// Flota demo de seis vehículos
pub fn demo_vehicles() -> Vec<Vehicle> {
    vec![
        // 2.100 km desde el servicio, umbral 5.000: al día
        vehicle(
            101,
            "Toyota",
            "Corolla",
            2022,
            "AB-123-CD",
            VehicleCategory::Compact,
            Transmission::Automatic,
            FuelType::Petrol,
            5,
            Decimal::new(4550, 2),
            32_100,
            30_000,
            5_000,
            VehicleStatus::Available,
        ),
        vehicle(
            102,
            "Dacia",
            "Sandero",
            2021,
            "EF-234-GH",
            VehicleCategory::Economy,
            Transmission::Manual,
            FuelType::Petrol,
            5,
            Decimal::new(3200, 2),
            48_500,
            45_200,
            8_000,
            VehicleStatus::Booked,
        ),
        vehicle(
            103,
            "BMW",
            "320i",
            2023,
            "FG-456-HJ",
            VehicleCategory::Luxury,
            Transmission::Automatic,
            FuelType::Petrol,
            5,
            Decimal::from(89),
            21_500,
            20_000,
            8_000,
            VehicleStatus::Booked,
        ),
        // 5.200 km desde el servicio, umbral 5.000: vencido
        vehicle(
            104,
            "Renault",
            "Kangoo",
            2020,
            "KL-789-MN",
            VehicleCategory::Van,
            Transmission::Manual,
            FuelType::Diesel,
            3,
            Decimal::new(6200, 2),
            35_200,
            30_000,
            5_000,
            VehicleStatus::DueForService,
        ),
        vehicle(
            105,
            "Hyundai",
            "Tucson",
            2023,
            "PQ-012-RS",
            VehicleCategory::Suv,
            Transmission::Automatic,
            FuelType::Hybrid,
            5,
            Decimal::new(7800, 2),
            12_300,
            10_000,
            10_000,
            VehicleStatus::InUse,
        ),
        vehicle(
            106,
            "Tesla",
            "Model 3",
            2024,
            "TU-345-VW",
            VehicleCategory::Luxury,
            Transmission::Automatic,
            FuelType::Electric,
            5,
            Decimal::new(11000, 2),
            8_900,
            0,
            20_000,
            VehicleStatus::UnderMaintenance,
        ),
    ]
}

/// Reservas demo cubriendo todos los estados del ciclo de vida
pub fn demo_bookings() -> Vec<Booking> {
    vec![
        booking(
            2001,
            101,
            501,
            dt(2024, 7, 2, 10),
            dt(2024, 7, 5, 10),
            BookingStatus::Completed,
            PaymentStatus::Paid,
            Decimal::new(13650, 2),
            None,
        ),
        booking(
            2002,
            102,
            502,
            dt(2024, 8, 18, 9),
            dt(2024, 8, 24, 9),
            BookingStatus::InProgress,
            PaymentStatus::Paid,
            Decimal::from(192),
            None,
        ),
        // La reserva activa del vehículo 103 que bloquea su ventana
        booking(
            2003,
            103,
            503,
            dt(2024, 8, 19, 8),
            dt(2024, 8, 21, 18),
            BookingStatus::Confirmed,
            PaymentStatus::Paid,
            Decimal::from(267),
            None,
        ),
        booking(
            2004,
            105,
            504,
            dt(2024, 8, 20, 9),
            dt(2024, 8, 23, 9),
            BookingStatus::InProgress,
            PaymentStatus::InvoiceSent,
            Decimal::from(234),
            None,
        ),
        booking(
            2005,
            101,
            505,
            dt(2024, 8, 26, 10),
            dt(2024, 8, 28, 10),
            BookingStatus::PaymentPending,
            PaymentStatus::Pending,
            Decimal::new(8190, 2),
            Some("WELCOME10"),
        ),
        booking(
            2006,
            103,
            506,
            dt(2024, 8, 25, 9),
            dt(2024, 8, 27, 9),
            BookingStatus::InvoiceSent,
            PaymentStatus::InvoiceSent,
            Decimal::from(178),
            None,
        ),
        booking(
            2007,
            106,
            507,
            dt(2024, 9, 2, 10),
            dt(2024, 9, 6, 10),
            BookingStatus::Pending,
            PaymentStatus::Pending,
            Decimal::from(440),
            None,
        ),
        // Cancelada: cubre el rango del 101 pero no bloquea disponibilidad
        booking(
            2008,
            101,
            508,
            dt(2024, 8, 19, 9),
            dt(2024, 8, 22, 9),
            BookingStatus::Cancelled,
            PaymentStatus::Pending,
            Decimal::new(13650, 2),
            None,
        ),
    ]
}

/// Dataset demo completo
pub fn demo_dataset() -> RentalDataset {
    RentalDataset {
        vehicles: demo_vehicles(),
        bookings: demo_bookings(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::availability_service::is_vehicle_available;
    use crate::services::maintenance_service::filter_due_for_service;

    #[test]
    fn test_fixtures_cover_every_booking_status() {
        let bookings = demo_bookings();
        let statuses = [
            BookingStatus::Pending,
            BookingStatus::PaymentPending,
            BookingStatus::InvoiceSent,
            BookingStatus::Confirmed,
            BookingStatus::InProgress,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ];

        for status in statuses {
            assert!(
                bookings.iter().any(|b| b.status == status),
                "falta una reserva en estado {:?}",
                status
            );
        }
    }

    #[test]
    fn test_vehicle_103_window_is_blocked() {
        let dataset = demo_dataset();
        assert!(!is_vehicle_available(
            103,
            dt(2024, 8, 20, 9),
            dt(2024, 8, 22, 17),
            &dataset.bookings,
            None
        ));
    }

    #[test]
    fn test_cancelled_coverage_leaves_101_available() {
        let dataset = demo_dataset();
        // Solo la cancelada 2008 cubre este rango del 101
        assert!(is_vehicle_available(
            101,
            dt(2024, 8, 20, 9),
            dt(2024, 8, 21, 9),
            &dataset.bookings,
            None
        ));
    }

    #[test]
    fn test_only_the_kangoo_is_due_for_service() {
        let due = filter_due_for_service(&demo_vehicles());
        let ids: Vec<i64> = due.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![104]);
    }
}
