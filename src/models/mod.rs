//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos del dominio de alquiler:
//! flota, reservas, códigos promocionales y resumen del dashboard.

pub mod booking;
pub mod dashboard;
pub mod promo;
pub mod vehicle;
