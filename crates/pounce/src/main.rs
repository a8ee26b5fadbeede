use pounce::app::PounceApp;
use pounce_engine::logging::{init_logging, LoggingConfig};

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = PounceApp::default().run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
