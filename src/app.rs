//! Interactive entry point - the terminal form

use medsched_app::{AppointmentSink, JsonLinesSink, MemorySink};
use medsched_core::prelude::*;

use crate::startup::{self, StartupOptions};

/// Run the terminal form until the user quits or schedules an appointment
///
/// Without `--output` the scheduled appointment is printed to stdout as a
/// JSON line once the terminal has been restored.
pub async fn run(options: &StartupOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    medsched_core::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("medsched starting");
    info!("Config dir: {}", options.config_dir.display());
    info!("═══════════════════════════════════════════════════════");

    let mut state = startup::build_state(options)?;
    state.exit_after_submit = true;

    let state = match &options.output {
        Some(path) => {
            let sink = JsonLinesSink::append_file(path).await?;
            medsched_tui::run(state, sink).await?
        }
        None => {
            let state = medsched_tui::run(state, MemorySink::new()).await?;
            let mut stdout = JsonLinesSink::stdout();
            for request in &state.submitted {
                stdout.deliver(request).await?;
            }
            state
        }
    };

    info!(
        "medsched exiting after {} appointment(s)",
        state.submitted.len()
    );
    Ok(())
}
