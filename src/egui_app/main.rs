/**
 * egui Native Desktop App - Main Entry Point
 *
 * This is the main entry point for the library desktop client. It wires
 * the eframe window to the application state and renders the current view
 * each frame.
 */
use bibliodesk::egui_app::theme::styles;
use bibliodesk::egui_app::{AppState, views};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Bibliodesk client starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 680.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Bibliodesk - Library",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(DeskApp::default()))
        }),
    )
}

/// Main application state
struct DeskApp {
    state: AppState,
}

impl Default for DeskApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for DeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        views::render_toasts(ctx, &self.state);

        // Worker results arrive between frames; keep painting so they are
        // picked up promptly.
        ctx.request_repaint();
    }
}
