//! Modelo de Booking
//!
//! Este módulo contiene el struct Booking de reservas de alquiler y sus
//! variantes para el flujo de creación y el listado administrativo.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Estado de la reserva en su ciclo de vida
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Pending,
    PaymentPending,
    InvoiceSent,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Una reserva activa participa en el cálculo de disponibilidad;
    /// las canceladas y completadas quedan fuera.
    pub fn is_active(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled | BookingStatus::Completed)
    }

    /// Estados finales: no admiten más transiciones administrativas
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Cancelled | BookingStatus::Completed)
    }
}

/// Estado del pago asociado a la reserva
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    Pending,
    InvoiceSent,
    Paid,
    Overdue,
}

/// Booking principal
///
/// Los campos de odómetro/combustible/fotos se capturan en la entrega y la
/// devolución del vehículo; permanecen vacíos hasta ese momento.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub vehicle_id: i64,
    pub renter_id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub total_cost: Decimal,
    pub promo_code: Option<String>,
    pub pickup_odometer_km: Option<i64>,
    pub return_odometer_km: Option<i64>,
    pub pickup_fuel_percent: Option<i32>,
    pub return_fuel_percent: Option<i32>,
    pub pickup_photos: Option<Vec<String>>,
    pub return_photos: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Atajo sobre `BookingStatus::is_active`
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// Request para solicitar una nueva reserva
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookingRequest {
    #[validate(range(min = 1))]
    pub vehicle_id: i64,

    #[validate(range(min = 1))]
    pub renter_id: i64,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    #[validate(length(min = 3, max = 30))]
    pub promo_code: Option<String>,
}

/// Request para registrar la entrega del vehículo al cliente
#[derive(Debug, Deserialize, Validate)]
pub struct PickupCaptureRequest {
    #[validate(range(min = 0))]
    pub odometer_km: i64,

    #[validate(range(min = 0, max = 100))]
    pub fuel_percent: i32,

    pub photos: Option<Vec<String>>,
}

/// Request para registrar la devolución del vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct ReturnCaptureRequest {
    #[validate(range(min = 0))]
    pub odometer_km: i64,

    #[validate(range(min = 0, max = 100))]
    pub fuel_percent: i32,

    pub photos: Option<Vec<String>>,
}

/// Filtros para el listado administrativo de reservas (en memoria)
///
/// `from`/`to` seleccionan reservas cuyo rango de fechas intersecta la
/// ventana indicada, con el mismo criterio de bordes inclusivos que usa el
/// chequeo de disponibilidad.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingFilters {
    pub vehicle_id: Option<i64>,
    pub renter_id: Option<i64>,
    pub status: Option<BookingStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_statuses() {
        assert!(BookingStatus::Pending.is_active());
        assert!(BookingStatus::PaymentPending.is_active());
        assert!(BookingStatus::InvoiceSent.is_active());
        assert!(BookingStatus::Confirmed.is_active());
        assert!(BookingStatus::InProgress.is_active());
        assert!(!BookingStatus::Completed.is_active());
        assert!(!BookingStatus::Cancelled.is_active());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(BookingStatus::Completed.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
        assert!(!BookingStatus::InProgress.is_terminal());
    }

    #[test]
    fn test_payment_status_serializes_kebab_case() {
        let json = serde_json::to_string(&BookingStatus::PaymentPending).unwrap();
        assert_eq!(json, "\"payment-pending\"");

        let parsed: PaymentStatus = serde_json::from_str("\"invoice-sent\"").unwrap();
        assert_eq!(parsed, PaymentStatus::InvoiceSent);
    }
}
