mod app;
mod state;

use skiff_engine::device::GpuInit;
use skiff_engine::logging::{init_logging, LoggingConfig};
use skiff_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

use app::PenguinDemo;

fn main() {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "PENGUIN & PUFFLE".to_string(),
        initial_size: LogicalSize::new(1280.0, 960.0),
        resizable: false,
    };

    if let Err(err) = Runtime::run(config, GpuInit::unconverted_color(), PenguinDemo::new()) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
