//! Servicio de agregación para el dashboard
//!
//! Calcula el resumen que alimenta las tarjetas del panel como un fold puro
//! sobre las colecciones en memoria. Los conteos de flota usan el estado
//! efectivo (derivado); las reservas canceladas nunca suman ingresos.

use rust_decimal::Decimal;

use crate::models::booking::{Booking, BookingStatus, PaymentStatus};
use crate::models::dashboard::FleetSummary;
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::services::maintenance_service::effective_status;

/// Arma el resumen agregado de flota, reservas e ingresos
pub fn fleet_summary(vehicles: &[Vehicle], bookings: &[Booking]) -> FleetSummary {
    let mut available = 0;
    let mut booked = 0;
    let mut in_use = 0;
    let mut under_maintenance = 0;
    let mut due_for_service = 0;

    for vehicle in vehicles {
        match effective_status(vehicle) {
            VehicleStatus::Available => available += 1,
            VehicleStatus::Booked => booked += 1,
            VehicleStatus::InUse => in_use += 1,
            VehicleStatus::UnderMaintenance => under_maintenance += 1,
            VehicleStatus::DueForService => due_for_service += 1,
        }
    }

    let mut active = 0;
    let mut pending = 0;
    let mut completed = 0;
    let mut cancelled = 0;
    let mut paid_revenue = Decimal::ZERO;
    let mut outstanding_revenue = Decimal::ZERO;

    for booking in bookings {
        match booking.status {
            BookingStatus::Pending => pending += 1,
            BookingStatus::Completed => completed += 1,
            BookingStatus::Cancelled => cancelled += 1,
            _ => {}
        }
        if booking.is_active() {
            active += 1;
        }

        if booking.status != BookingStatus::Cancelled {
            if booking.payment_status == PaymentStatus::Paid {
                paid_revenue += booking.total_cost;
            } else {
                outstanding_revenue += booking.total_cost;
            }
        }
    }

    let utilization_pct = if vehicles.is_empty() {
        0.0
    } else {
        (booked + in_use) as f64 / vehicles.len() as f64 * 100.0
    };

    FleetSummary {
        total_vehicles: vehicles.len(),
        available_vehicles: available,
        booked_vehicles: booked,
        in_use_vehicles: in_use,
        under_maintenance_vehicles: under_maintenance,
        due_for_service_vehicles: due_for_service,
        total_bookings: bookings.len(),
        active_bookings: active,
        pending_bookings: pending,
        completed_bookings: completed,
        cancelled_bookings: cancelled,
        paid_revenue,
        outstanding_revenue,
        utilization_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::{FuelType, Transmission, VehicleCategory};
    use chrono::{DateTime, TimeZone, Utc};

    fn dt(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn vehicle(id: i64, status: VehicleStatus) -> Vehicle {
        Vehicle {
            id,
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2022,
            license_plate: format!("ZZ-{:03}-ZZ", id),
            category: VehicleCategory::Compact,
            transmission: Transmission::Manual,
            fuel_type: FuelType::Petrol,
            seats: 5,
            daily_rate: Decimal::from(45),
            current_odometer_km: 20_000,
            last_service_odometer_km: 18_000,
            service_threshold_km: 10_000,
            status,
            image_url: None,
            created_at: dt(2024, 1, 10),
        }
    }

    fn booking(
        id: i64,
        status: BookingStatus,
        payment_status: PaymentStatus,
        total_cost: i64,
    ) -> Booking {
        Booking {
            id,
            vehicle_id: 101,
            renter_id: 501,
            start_date: dt(2024, 8, 19),
            end_date: dt(2024, 8, 21),
            status,
            payment_status,
            total_cost: Decimal::from(total_cost),
            promo_code: None,
            pickup_odometer_km: None,
            return_odometer_km: None,
            pickup_fuel_percent: None,
            return_fuel_percent: None,
            pickup_photos: None,
            return_photos: None,
            created_at: dt(2024, 8, 1),
        }
    }

    #[test]
    fn test_summary_counts_and_revenue() {
        let vehicles = vec![
            vehicle(101, VehicleStatus::Available),
            vehicle(102, VehicleStatus::Booked),
            vehicle(103, VehicleStatus::InUse),
            vehicle(104, VehicleStatus::UnderMaintenance),
        ];
        let bookings = vec![
            booking(2001, BookingStatus::Completed, PaymentStatus::Paid, 267),
            booking(2002, BookingStatus::Confirmed, PaymentStatus::InvoiceSent, 178),
            booking(2003, BookingStatus::Pending, PaymentStatus::Pending, 90),
            booking(2004, BookingStatus::Cancelled, PaymentStatus::Pending, 500),
        ];

        let summary = fleet_summary(&vehicles, &bookings);

        assert_eq!(summary.total_vehicles, 4);
        assert_eq!(summary.available_vehicles, 1);
        assert_eq!(summary.booked_vehicles, 1);
        assert_eq!(summary.in_use_vehicles, 1);
        assert_eq!(summary.under_maintenance_vehicles, 1);
        assert_eq!(summary.due_for_service_vehicles, 0);

        assert_eq!(summary.total_bookings, 4);
        assert_eq!(summary.active_bookings, 2);
        assert_eq!(summary.pending_bookings, 1);
        assert_eq!(summary.completed_bookings, 1);
        assert_eq!(summary.cancelled_bookings, 1);

        // La cancelada de 500 no suma en ningún lado
        assert_eq!(summary.paid_revenue, Decimal::from(267));
        assert_eq!(summary.outstanding_revenue, Decimal::from(268));

        assert!((summary.utilization_pct - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_uses_effective_status_for_due_count() {
        // Cache dice Available, el odómetro dice vencido
        let mut overdue = vehicle(105, VehicleStatus::Available);
        overdue.current_odometer_km = 40_000;
        overdue.last_service_odometer_km = 25_000;

        let summary = fleet_summary(&[overdue], &[]);
        assert_eq!(summary.due_for_service_vehicles, 1);
        assert_eq!(summary.available_vehicles, 0);
    }

    #[test]
    fn test_summary_over_empty_collections() {
        let summary = fleet_summary(&[], &[]);
        assert_eq!(summary.total_vehicles, 0);
        assert_eq!(summary.total_bookings, 0);
        assert_eq!(summary.paid_revenue, Decimal::ZERO);
        assert_eq!(summary.utilization_pct, 0.0);
    }
}
