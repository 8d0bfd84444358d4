//! Process entry point.

use std::process::ExitCode;

use crate::core::Application;
use crate::error::{self, InitError};
use crate::logging::{init_logging, LoggingConfig};
use crate::window::Backend;

/// Initializes logging, builds the application with `factory`, runs it to
/// completion and tears it down.
///
/// A factory error is fatal: it is logged with its causes and the loop never
/// starts.
pub fn launch<B, F>(logging: LoggingConfig, factory: F) -> ExitCode
where
    B: Backend,
    F: FnOnce() -> Result<Application<B>, InitError>,
{
    init_logging(logging);
    log::trace!("launching application");

    match run_application(factory) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("fatal: {}", error::report(&err));
            ExitCode::FAILURE
        }
    }
}

/// Builds, runs and drops one application without touching logging.
pub fn run_application<B, F>(factory: F) -> Result<(), InitError>
where
    B: Backend,
    F: FnOnce() -> Result<Application<B>, InitError>,
{
    let mut app = factory()?;
    app.run();
    drop(app);

    log::trace!("application released");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AppConfig;
    use crate::event::Event;
    use crate::testing::{RecordingLayer, Recorder, ScriptedBackend};

    #[test]
    fn factory_failure_skips_run() {
        let result = run_application::<ScriptedBackend, _>(|| {
            Err(InitError::InvalidConfig("height must be non-zero".into()))
        });
        assert!(matches!(result, Err(InitError::InvalidConfig(_))));
    }

    #[test]
    fn runs_and_releases_the_application() {
        let log = Recorder::default();
        let result = run_application(|| {
            let backend_log = log.clone();
            let mut app = Application::with_backend(AppConfig::new("entry").max_fps(None), move |_| {
                Ok(ScriptedBackend::new(&backend_log, vec![vec![Event::Quit]]))
            })?;
            app.push_layer(RecordingLayer::new("A", &log));
            Ok(app)
        });

        assert!(result.is_ok());
        assert_eq!(
            log.take(),
            ["A.attach", "poll", "A.event", "A.update", "present", "A.detach", "backend.drop"]
        );
    }
}
