use anyhow::Result;
use egui::ViewportBuilder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use healthguard_client::config::ClientConfig;
use healthguard_client::ui::HealthGuardApp;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "healthguard=debug,healthguard_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting HealthGuard client...");

    let config = ClientConfig::load()?;

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("HealthGuard"),
        ..Default::default()
    };

    eframe::run_native(
        "HealthGuard",
        options,
        Box::new(
            move |cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
                let app = HealthGuardApp::new(cc, config)?;
                Ok(Box::new(app))
            },
        ),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run eframe: {}", e))?;

    Ok(())
}
