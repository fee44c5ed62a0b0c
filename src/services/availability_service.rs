//! Servicio de disponibilidad de vehículos
//!
//! Decide si un vehículo está libre para un rango de fechas dado el listado
//! de reservas existentes, y enumera las reservas en conflicto para que el
//! panel administrativo pueda explicar un rechazo.
//!
//! Solo las reservas activas (ni canceladas ni completadas) participan del
//! cálculo. El test de solapamiento es de bordes inclusivos: una reserva que
//! termina en el mismo instante en que otra comienza cuenta como conflicto.
//!
//! Este servicio solo aconseja aceptar/rechazar al momento de decidir; no
//! ofrece ninguna garantía transaccional. Dos decisiones concurrentes sobre
//! el mismo vehículo deben resolverse en la capa de almacenamiento externa.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::booking::Booking;

/// La reserva participa del cálculo para este vehículo
fn is_candidate(booking: &Booking, vehicle_id: i64, exclude_booking_id: Option<i64>) -> bool {
    booking.vehicle_id == vehicle_id
        && booking.is_active()
        && exclude_booking_id != Some(booking.id)
}

/// Test de solapamiento con bordes inclusivos
fn overlaps(booking: &Booking, requested_start: DateTime<Utc>, requested_end: DateTime<Utc>) -> bool {
    requested_start <= booking.end_date && requested_end >= booking.start_date
}

/// Determina si el vehículo está libre para el rango solicitado
///
/// El llamador garantiza `requested_start < requested_end`; este chequeo no
/// valida el orden (eso es responsabilidad de `validate_booking_dates`).
/// `exclude_booking_id` permite re-evaluar una reserva existente al editarla
/// sin que choque consigo misma.
pub fn is_vehicle_available(
    vehicle_id: i64,
    requested_start: DateTime<Utc>,
    requested_end: DateTime<Utc>,
    bookings: &[Booking],
    exclude_booking_id: Option<i64>,
) -> bool {
    !bookings.iter().any(|booking| {
        is_candidate(booking, vehicle_id, exclude_booking_id)
            && overlaps(booking, requested_start, requested_end)
    })
}

/// Enumera las reservas que chocan con el rango solicitado
///
/// Devuelve las reservas en el orden en que aparecen en `bookings`, sin
/// ordenamiento adicional. Es consistente con `is_vehicle_available`: la
/// lista es no vacía exactamente cuando aquel devuelve `false`.
pub fn booking_conflicts(
    vehicle_id: i64,
    requested_start: DateTime<Utc>,
    requested_end: DateTime<Utc>,
    bookings: &[Booking],
    exclude_booking_id: Option<i64>,
) -> Vec<Booking> {
    let conflicts: Vec<Booking> = bookings
        .iter()
        .filter(|booking| {
            is_candidate(booking, vehicle_id, exclude_booking_id)
                && overlaps(booking, requested_start, requested_end)
        })
        .cloned()
        .collect();

    if !conflicts.is_empty() {
        debug!(
            "🔍 Vehículo {}: {} conflicto(s) para el rango solicitado",
            vehicle_id,
            conflicts.len()
        );
    }

    conflicts
}
