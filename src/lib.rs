//! rental_fleet — núcleo de flota y reservas para alquiler de autos
//!
//! Funciones puras sobre colecciones en memoria provistas por el llamador:
//! disponibilidad y conflictos de reservas, duración y precio, validación
//! de fechas, evaluación de servicio por odómetro, filtrado de catálogo y
//! agregación para el dashboard.
//!
//! El núcleo no persiste nada ni lee el reloj: "ahora" entra siempre como
//! parámetro. Solo aconseja aceptar/rechazar al momento de decidir; la
//! garantía contra dobles reservas concurrentes (p. ej. una restricción de
//! solapamiento del lado del servidor) es responsabilidad de la capa de
//! almacenamiento externa.

pub mod config;
pub mod demo;
pub mod models;
pub mod services;
pub mod utils;
