//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de variables de entorno del
//! binario de informe.

pub mod environment;

pub use environment::*;
