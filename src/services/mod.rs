//! Servicios del núcleo de alquiler
//!
//! Este módulo contiene la lógica de negocio del sistema: disponibilidad
//! y conflictos de reservas, precios, mantenimiento por odómetro, flujo de
//! reservas, gestión de flota y agregación para el dashboard.
//!
//! Todos los servicios operan sobre colecciones en memoria provistas por el
//! llamador y nunca mutan sus argumentos; mismo input, mismo output.

pub mod availability_service;
pub mod booking_service;
pub mod dashboard_service;
pub mod fleet_service;
pub mod maintenance_service;
pub mod pricing_service;

pub use availability_service::*;
pub use booking_service::*;
pub use dashboard_service::*;
pub use fleet_service::*;
pub use maintenance_service::*;
pub use pricing_service::*;
