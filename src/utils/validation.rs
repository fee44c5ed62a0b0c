//! Utilidades de validación
//!
//! Este módulo contiene funciones helper de validación programática y la
//! validación de rangos de fechas de reserva. La hora "actual" siempre se
//! recibe como parámetro explícito; este módulo nunca lee el reloj.

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::services::pricing_service::rental_duration_days;

/// Resultado estructurado de la validación de fechas de reserva
///
/// Las fechas inválidas se reportan como dato, no como error: el flujo de
/// reserva muestra `reason` en el formulario en lugar de fallar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateValidation {
    pub valid: bool,
    pub reason: Option<String>,
}

impl DateValidation {
    fn ok() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    fn fail(reason: &str) -> Self {
        Self {
            valid: false,
            reason: Some(reason.to_string()),
        }
    }
}

/// Validar el rango de fechas de una solicitud de reserva
///
/// Las reglas se evalúan en orden fijo y gana la primera que falla:
/// inicio en el pasado, fin en el pasado, fin no posterior al inicio,
/// fin a más de un año calendario de `now`, duración menor a un día.
pub fn validate_booking_dates(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> DateValidation {
    if start < now {
        return DateValidation::fail("start date cannot be in the past");
    }

    if end < now {
        return DateValidation::fail("end date cannot be in the past");
    }

    if end <= start {
        return DateValidation::fail("end date must be after start date");
    }

    if let Some(horizon) = now.checked_add_months(Months::new(12)) {
        if end > horizon {
            return DateValidation::fail("booking cannot extend more than one year ahead");
        }
    }

    if rental_duration_days(start, end) < 1 {
        return DateValidation::fail("booking must be at least one day long");
    }

    DateValidation::ok()
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + serde::Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<
    T: PartialOrd + std::fmt::Display + num_traits::Zero + serde::Serialize,
>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de matrícula de vehículo
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    // Formato básico: XX-123-XX o similar
    let clean_plate = value.replace([' ', '-', '_'], "");
    if clean_plate.len() < 5 || clean_plate.len() > 10 {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
