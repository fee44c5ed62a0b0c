//! Servicio de flujo de reservas
//!
//! Reúne las piezas que el flujo de creación de reservas necesita: validación
//! del payload, validación de fechas, enumeración de conflictos y cotización.
//! También cubre el filtrado en memoria del listado administrativo.
//!
//! Este servicio no persiste nada: `create_booking` devuelve la reserva
//! armada y el llamador es dueño de agregarla a su colección. La garantía
//! contra dobles reservas concurrentes es responsabilidad de la capa de
//! almacenamiento externa.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use validator::Validate;

use crate::models::booking::{
    Booking, BookingFilters, BookingStatus, CreateBookingRequest, PaymentStatus,
    PickupCaptureRequest, ReturnCaptureRequest,
};
use crate::models::vehicle::Vehicle;
use crate::services::availability_service::booking_conflicts;
use crate::services::pricing_service::{quote, RentalQuote};
use crate::utils::errors::{bad_request_error, booking_conflict_error, not_found_error, AppResult};
use crate::utils::validation::{validate_booking_dates, DateValidation};

/// Resultado de evaluar una solicitud de reserva
///
/// Las fechas inválidas y los conflictos son datos para mostrar en el
/// formulario, no errores; los errores quedan para payload mal formado o
/// vehículo inexistente.
#[derive(Debug, Clone, Serialize)]
pub struct BookingAssessment {
    pub acceptable: bool,
    pub dates: DateValidation,
    pub conflicts: Vec<Booking>,
    pub quote: Option<RentalQuote>,
}

fn find_vehicle<'a>(vehicles: &'a [Vehicle], vehicle_id: i64) -> AppResult<&'a Vehicle> {
    vehicles
        .iter()
        .find(|vehicle| vehicle.id == vehicle_id)
        .ok_or_else(|| not_found_error("Vehicle", vehicle_id))
}

/// Evalúa una solicitud de reserva sin crearla
///
/// La decisión que el flujo de alta necesita antes de aceptar: si las fechas
/// no pasan las reglas la evaluación se rechaza sin mirar conflictos; si hay
/// conflictos se devuelven para que el panel explique el rechazo; si todo
/// está libre se adjunta la cotización.
pub fn assess_booking(
    request: &CreateBookingRequest,
    vehicles: &[Vehicle],
    bookings: &[Booking],
    now: DateTime<Utc>,
) -> AppResult<BookingAssessment> {
    request.validate()?;
    let vehicle = find_vehicle(vehicles, request.vehicle_id)?;

    let dates = validate_booking_dates(request.start_date, request.end_date, now);
    if !dates.valid {
        return Ok(BookingAssessment {
            acceptable: false,
            dates,
            conflicts: Vec::new(),
            quote: None,
        });
    }

    let conflicts = booking_conflicts(
        vehicle.id,
        request.start_date,
        request.end_date,
        bookings,
        None,
    );

    if conflicts.is_empty() {
        let quote = quote(
            vehicle,
            request.start_date,
            request.end_date,
            request.promo_code.as_deref(),
        );
        Ok(BookingAssessment {
            acceptable: true,
            dates,
            conflicts,
            quote: Some(quote),
        })
    } else {
        Ok(BookingAssessment {
            acceptable: false,
            dates,
            conflicts,
            quote: None,
        })
    }
}

/// Crea una reserva en modo demo
///
/// Evalúa la solicitud y, si es aceptable, arma la reserva con el siguiente
/// id secuencial, estado `pending` y el costo de la cotización. Devuelve una
/// copia; el llamador persiste el cambio.
pub fn create_booking(
    request: &CreateBookingRequest,
    vehicles: &[Vehicle],
    bookings: &[Booking],
    now: DateTime<Utc>,
) -> AppResult<Booking> {
    let assessment = assess_booking(request, vehicles, bookings, now)?;

    if !assessment.dates.valid {
        let reason = assessment
            .dates
            .reason
            .as_deref()
            .unwrap_or("invalid booking dates");
        return Err(bad_request_error(reason));
    }

    if !assessment.conflicts.is_empty() {
        return Err(booking_conflict_error(
            request.vehicle_id,
            assessment.conflicts.len(),
        ));
    }

    // acceptable garantiza la cotización
    let quote = assessment
        .quote
        .ok_or_else(|| bad_request_error("quote unavailable for an acceptable booking"))?;

    let next_id = bookings.iter().map(|b| b.id).max().unwrap_or(2000) + 1;

    let booking = Booking {
        id: next_id,
        vehicle_id: request.vehicle_id,
        renter_id: request.renter_id,
        start_date: request.start_date,
        end_date: request.end_date,
        status: BookingStatus::Pending,
        payment_status: PaymentStatus::Pending,
        total_cost: quote.total_cost,
        promo_code: request.promo_code.clone(),
        pickup_odometer_km: None,
        return_odometer_km: None,
        pickup_fuel_percent: None,
        return_fuel_percent: None,
        pickup_photos: None,
        return_photos: None,
        created_at: now,
    };

    info!(
        "📅 Reserva {} creada: vehículo {}, {} día(s), total {}",
        booking.id, booking.vehicle_id, quote.days, booking.total_cost
    );

    Ok(booking)
}

/// Registra la entrega del vehículo al cliente
///
/// Captura odómetro, combustible y fotos al momento de la entrega y pasa
/// la reserva a `InProgress`. Devuelve una copia; el llamador persiste.
pub fn record_pickup(booking: &Booking, request: &PickupCaptureRequest) -> AppResult<Booking> {
    request.validate()?;

    if booking.status.is_terminal() {
        return Err(bad_request_error(
            "cannot record a pickup on a completed or cancelled booking",
        ));
    }

    let mut updated = booking.clone();
    updated.pickup_odometer_km = Some(request.odometer_km);
    updated.pickup_fuel_percent = Some(request.fuel_percent);
    updated.pickup_photos = request.photos.clone();
    updated.status = BookingStatus::InProgress;

    info!(
        "🔑 Entrega registrada para la reserva {} ({} km, {}% de combustible)",
        updated.id, request.odometer_km, request.fuel_percent
    );

    Ok(updated)
}

/// Registra la devolución del vehículo
///
/// Captura los datos de cierre y pasa la reserva a `Completed`. Una lectura
/// de odómetro por debajo de la entrega se aplica tal cual, con un warning.
pub fn record_return(booking: &Booking, request: &ReturnCaptureRequest) -> AppResult<Booking> {
    request.validate()?;

    if booking.status.is_terminal() {
        return Err(bad_request_error(
            "cannot record a return on a completed or cancelled booking",
        ));
    }

    if let Some(pickup_km) = booking.pickup_odometer_km {
        if request.odometer_km < pickup_km {
            warn!(
                "⚠️ Odómetro de devolución por debajo de la entrega en la reserva {} ({} km < {} km)",
                booking.id, request.odometer_km, pickup_km
            );
        }
    }

    let mut updated = booking.clone();
    updated.return_odometer_km = Some(request.odometer_km);
    updated.return_fuel_percent = Some(request.fuel_percent);
    updated.return_photos = request.photos.clone();
    updated.status = BookingStatus::Completed;

    info!(
        "🏁 Devolución registrada para la reserva {} ({} km, {}% de combustible)",
        updated.id, request.odometer_km, request.fuel_percent
    );

    Ok(updated)
}

/// Filtra el listado administrativo de reservas, conservando el orden
///
/// La ventana `from`/`to` selecciona reservas cuyo rango intersecta la
/// ventana con el mismo criterio de bordes inclusivos que la disponibilidad.
pub fn filter_bookings(bookings: &[Booking], filters: &BookingFilters) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|booking| {
            filters
                .vehicle_id
                .map_or(true, |id| booking.vehicle_id == id)
                && filters.renter_id.map_or(true, |id| booking.renter_id == id)
                && filters
                    .status
                    .as_ref()
                    .map_or(true, |status| booking.status == *status)
                && filters
                    .payment_status
                    .as_ref()
                    .map_or(true, |status| booking.payment_status == *status)
                && filters.from.map_or(true, |from| booking.end_date >= from)
                && filters.to.map_or(true, |to| booking.start_date <= to)
        })
        .cloned()
        .collect()
}

/// Reservas activas de un vehículo, en el orden de entrada
pub fn active_bookings_for_vehicle(bookings: &[Booking], vehicle_id: i64) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|booking| booking.vehicle_id == vehicle_id && booking.is_active())
        .cloned()
        .collect()
}
