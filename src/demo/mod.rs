//! Dataset demo de la aplicación
//!
//! Este módulo contiene el dataset en memoria con el que el dashboard opera
//! cuando no hay API disponible, más la carga de snapshots JSON exportados
//! y el chequeo de integridad que usa el binario de informe.

pub mod dataset;
pub mod fixtures;

pub use dataset::*;
pub use fixtures::*;
