//! Interactive terminal front end for the Smart EHR portal demo.
//!
//! Owns the application state and runs the event loop: read one line, let
//! the dispatcher mutate state, then reprint the full surface from scratch.

mod input;

use std::io::{self, BufRead, Write};

use smart_ehr_core::{views, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::input::Outcome;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("smart_ehr_core=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut state = AppState::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        // Full-surface rebuild on every pass; there is no partial update.
        stdout.write_all(views::render(&state).as_bytes())?;
        stdout.write_all(b"\n> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break; // stdin closed
        };

        match input::dispatch(&mut state, line?.trim()) {
            Outcome::Continue => {}
            Outcome::Alert(message) => {
                stdout.write_all(format!("\n  !! {}\n\n", message).as_bytes())?;
            }
            Outcome::Quit => break,
        }
    }

    Ok(())
}
