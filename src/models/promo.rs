//! Tabla de códigos promocionales
//!
//! Mapa estático de código (insensible a mayúsculas) a fracción de
//! descuento en [0, 1). Un código desconocido resuelve a descuento cero,
//! nunca a un error.

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use std::collections::HashMap;

lazy_static! {
    static ref PROMO_DISCOUNTS: HashMap<&'static str, Decimal> = {
        let mut m = HashMap::new();
        m.insert("WELCOME10", Decimal::new(10, 2));
        m.insert("SUMMER20", Decimal::new(20, 2));
        m.insert("LOYALTY15", Decimal::new(15, 2));
        m.insert("WEEKEND5", Decimal::new(5, 2));
        m
    };
}

/// Fracción de descuento para un código promocional
///
/// La búsqueda ignora mayúsculas/minúsculas y espacios alrededor del
/// código; `None` o un código desconocido devuelven `Decimal::ZERO`.
pub fn discount_for(promo_code: Option<&str>) -> Decimal {
    match promo_code {
        Some(code) => {
            let normalized = code.trim().to_uppercase();
            PROMO_DISCOUNTS
                .get(normalized.as_str())
                .copied()
                .unwrap_or(Decimal::ZERO)
        }
        None => Decimal::ZERO,
    }
}

/// Códigos promocionales vigentes, ordenados alfabéticamente
pub fn known_codes() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = PROMO_DISCOUNTS.keys().copied().collect();
    codes.sort_unstable();
    codes
}
