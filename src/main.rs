use anyhow::Result;
use chrono::{Duration, Utc};
use dotenvy::dotenv;
use tracing::{info, warn};

use rental_fleet::config::environment::EnvironmentConfig;
use rental_fleet::demo::{demo_dataset, load_dataset, validate_dataset};
use rental_fleet::services::availability_service::is_vehicle_available;
use rental_fleet::services::dashboard_service::fleet_summary;
use rental_fleet::services::maintenance_service::{filter_due_for_service, km_until_service};
use rental_fleet::services::pricing_service::quote;

fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Rental Fleet - Informe de flota y reservas");
    info!("=============================================");

    let config = EnvironmentConfig::default();
    info!("🌍 Entorno: {}", config.environment);

    // Dataset: snapshot configurado o fixtures demo
    let dataset = match config.dataset_path {
        Some(ref path) => {
            info!("📂 Cargando snapshot desde {}", path.display());
            load_dataset(path)?
        }
        None => {
            info!("📦 Sin RENTAL_DATASET configurado: usando dataset demo");
            demo_dataset()
        }
    };

    // Integridad del dataset
    let warnings = validate_dataset(&dataset);
    if warnings.is_empty() {
        info!("✅ Dataset íntegro: {} vehículo(s), {} reserva(s)",
            dataset.vehicles.len(),
            dataset.bookings.len()
        );
    } else {
        for warning in &warnings {
            warn!("⚠️ {}", warning);
        }
    }

    // Resumen de flota
    let summary = fleet_summary(&dataset.vehicles, &dataset.bookings);
    info!("📊 Resumen de flota:");
    info!(
        "   Vehículos: {} total | {} disponibles | {} reservados | {} en uso",
        summary.total_vehicles,
        summary.available_vehicles,
        summary.booked_vehicles,
        summary.in_use_vehicles
    );
    info!(
        "   Mantenimiento: {} en taller | {} con servicio vencido",
        summary.under_maintenance_vehicles, summary.due_for_service_vehicles
    );
    info!(
        "   Reservas: {} total | {} activas | {} pendientes | {} completadas | {} canceladas",
        summary.total_bookings,
        summary.active_bookings,
        summary.pending_bookings,
        summary.completed_bookings,
        summary.cancelled_bookings
    );
    info!(
        "   Ingresos: {} cobrados | {} por cobrar | utilización {:.1}%",
        summary.paid_revenue, summary.outstanding_revenue, summary.utilization_pct
    );

    // Alertas de mantenimiento
    let due = filter_due_for_service(&dataset.vehicles);
    if due.is_empty() {
        info!("🔧 Sin vehículos con servicio vencido");
    } else {
        info!("🔧 Vehículos con servicio vencido:");
        for vehicle in &due {
            info!(
                "   {} ({}) — {} km pasado el umbral",
                vehicle.display_name(),
                vehicle.license_plate,
                -km_until_service(vehicle)
            );
        }
    }

    // Disponibilidad para una ventana de prueba anclada al reloj: el único
    // lugar donde se lee la hora actual
    let now = Utc::now();
    let probe_start = now + Duration::days(1);
    let probe_end = probe_start + Duration::days(config.probe_window_days);
    info!(
        "🔍 Disponibilidad entre {} y {}:",
        probe_start.format("%Y-%m-%d %H:%M"),
        probe_end.format("%Y-%m-%d %H:%M")
    );
    for vehicle in &dataset.vehicles {
        let available = is_vehicle_available(
            vehicle.id,
            probe_start,
            probe_end,
            &dataset.bookings,
            None,
        );
        let marker = if available { "✅" } else { "⛔" };
        info!("   {} {} ({})", marker, vehicle.display_name(), vehicle.license_plate);
    }

    // Cotización de muestra sobre el primer vehículo de la flota
    if let Some(vehicle) = dataset.vehicles.first() {
        let sample = quote(
            vehicle,
            probe_start,
            probe_end,
            config.promo_code.as_deref(),
        );
        info!(
            "💰 Cotización de muestra para {}: {} día(s) × {} = {} (descuento {}%) → total {}",
            vehicle.display_name(),
            sample.days,
            sample.daily_rate,
            sample.base_cost,
            sample.discount_rate * rust_decimal::Decimal::from(100),
            sample.total_cost
        );
    }

    Ok(())
}
