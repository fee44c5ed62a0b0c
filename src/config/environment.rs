//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno para el binario de
//! informe. Todas las variables tienen default: el binario corre sin
//! entorno alguno, sobre el dataset demo.

use std::env;
use std::path::PathBuf;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    /// Snapshot JSON exportado; si falta se usa el dataset demo
    pub dataset_path: Option<PathBuf>,
    /// Largo en días de la ventana de disponibilidad del informe
    pub probe_window_days: i64,
    /// Código promocional para la cotización de muestra
    pub promo_code: Option<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            dataset_path: env::var("RENTAL_DATASET").ok().map(PathBuf::from),
            probe_window_days: env::var("PROBE_WINDOW_DAYS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .filter(|days| *days > 0)
                .unwrap_or(3),
            promo_code: env::var("PROMO_CODE").ok(),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
