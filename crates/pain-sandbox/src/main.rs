mod layers;

use std::process::ExitCode;

use pain_engine::logging::LoggingConfig;
use pain_engine::{AppConfig, Application};

use layers::{DebugOverlay, WorldLayer};

fn main() -> ExitCode {
    pain_engine::launch(LoggingConfig::default(), || {
        let config = AppConfig::new("Pain Sandbox").size(1280, 720);
        let mut app = Application::new(config)?;

        app.push_layer(WorldLayer::new("assets/sandbox.png"));
        app.push_overlay(DebugOverlay::default());

        Ok(app)
    })
}
