//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y validación
//! compartidas por los servicios del núcleo.

pub mod errors;
pub mod validation;
