//! Servicio de duración y precio de alquiler
//!
//! Calcula la duración en días completos, aplica el descuento promocional
//! y arma el desglose de precio que muestra el formulario de reserva.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::promo::discount_for;
use crate::models::vehicle::Vehicle;

const MS_PER_DAY: i64 = 86_400_000;

/// Duración del alquiler en días completos: `ceil(|end − start| / 1 día)`
///
/// Usa la diferencia absoluta, por lo que es simétrica en sus argumentos:
/// un rango invertido devuelve una duración positiva en lugar de un error.
/// Ese comportamiento es intencional y queda documentado aquí; el orden de
/// las fechas se valida aparte con `validate_booking_dates`.
pub fn rental_duration_days(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let elapsed_ms = (end - start).num_milliseconds().abs();
    (elapsed_ms + MS_PER_DAY - 1) / MS_PER_DAY
}

/// Precio total del alquiler: `tarifa diaria × días × (1 − descuento)`
///
/// Redondea a 2 decimales con la regla de mitad hacia arriba. Con tarifa
/// no negativa el resultado es siempre ≥ 0; un código promocional
/// desconocido simplemente no descuenta.
pub fn total_cost(
    vehicle: &Vehicle,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    promo_code: Option<&str>,
) -> Decimal {
    let days = rental_duration_days(start, end);
    let discount = discount_for(promo_code);
    let gross = vehicle.daily_rate * Decimal::from(days) * (Decimal::ONE - discount);

    gross.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Desglose de precio para una reserva
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalQuote {
    pub vehicle_id: i64,
    pub days: i64,
    pub daily_rate: Decimal,
    pub discount_rate: Decimal,
    pub base_cost: Decimal,
    pub total_cost: Decimal,
}

/// Arma el desglose de precio del rango solicitado
///
/// `total_cost` del desglose coincide exactamente con la función
/// `total_cost` para los mismos argumentos.
pub fn quote(
    vehicle: &Vehicle,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    promo_code: Option<&str>,
) -> RentalQuote {
    let days = rental_duration_days(start, end);
    let discount = discount_for(promo_code);
    let base = vehicle.daily_rate * Decimal::from(days);

    RentalQuote {
        vehicle_id: vehicle.id,
        days,
        daily_rate: vehicle.daily_rate,
        discount_rate: discount,
        base_cost: base.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        total_cost: (base * (Decimal::ONE - discount))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
    }
}
