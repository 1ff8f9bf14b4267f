mod app;
mod state;

use skiff_engine::device::GpuInit;
use skiff_engine::logging::{init_logging, LoggingConfig};
use skiff_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

use app::ShipPong;

const WINDOW_TITLE: &str = "SHIP PONG";
const WINDOW_WIDTH: f64 = 640.0 * 2.0;
const WINDOW_HEIGHT: f64 = 480.0 * 2.0;

fn main() {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: WINDOW_TITLE.to_string(),
        initial_size: LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        resizable: false,
    };

    if let Err(err) = Runtime::run(config, GpuInit::unconverted_color(), ShipPong::new()) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
