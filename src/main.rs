mod app;
mod config;
mod input;
mod model;
mod state;
mod style;
mod view;

use app::FolioNav;
use config::Config;
use eframe::egui;
use model::SectionCatalog;
use state::NavigationState;
use style::Theme;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio_nav=info")),
        )
        .init();

    if let Err(e) = Config::create_default() {
        error!(error = %e, "could not write default config");
    }
    let config = Config::load();

    let sections = config.catalog().unwrap_or_else(|e| {
        error!(error = %e, "invalid section list, using built-in sections");
        SectionCatalog::portfolio()
    });
    let settings = config.navigation_settings();
    info!(
        sections = sections.len(),
        initial = %settings.initial_section,
        cool_down_ms = settings.cool_down.as_millis() as u64,
        "starting folio-nav"
    );

    let navigation = NavigationState::new(sections, settings);
    let app = FolioNav::new(navigation, Theme::from_config(&config.theme.mode));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 560.0])
            .with_title("Portfolio"),
        ..Default::default()
    };

    eframe::run_native(
        "folio-nav",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
