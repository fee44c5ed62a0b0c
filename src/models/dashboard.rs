//! Modelos del dashboard
//!
//! Este módulo contiene el resumen agregado que alimenta las tarjetas
//! del panel administrativo: conteos de flota, reservas e ingresos.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Resumen para dashboard
///
/// Se calcula como un agregado puro sobre las colecciones en memoria;
/// los conteos de vehículos usan el estado efectivo (derivado), no el
/// cache almacenado.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetSummary {
    // Resumen de flota
    pub total_vehicles: usize,
    pub available_vehicles: usize,
    pub booked_vehicles: usize,
    pub in_use_vehicles: usize,
    pub under_maintenance_vehicles: usize,
    pub due_for_service_vehicles: usize,

    // Resumen de reservas
    pub total_bookings: usize,
    pub active_bookings: usize,
    pub pending_bookings: usize,
    pub completed_bookings: usize,
    pub cancelled_bookings: usize,

    // Métricas financieras
    pub paid_revenue: Decimal,
    pub outstanding_revenue: Decimal,

    // Métricas de uso
    pub utilization_pct: f64,
}
