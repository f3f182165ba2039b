//! The main menu loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::Rng;

use testx_core::{QuizError, SettingsStore};

use crate::commands;
use crate::config::TestxConfig;
use crate::console::Console;

/// Show the main menu until the user exits or the input closes.
///
/// Errors from a quiz run are printed and the menu is shown again.
pub fn execute<I, O, R>(
    console: &mut Console<I, O>,
    config: &TestxConfig,
    store: &mut SettingsStore,
    mut rng: R,
) -> Result<()>
where
    I: BufRead,
    O: Write,
    R: Rng,
{
    loop {
        let out = console.out();
        writeln!(out, "\nMENU:")?;
        writeln!(out, "1. Start quiz")?;
        writeln!(out, "2. Quiz settings")?;
        writeln!(out, "3. Exit")?;

        let Some(choice) = console.prompt("Choose an action: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                if let Err(e) = commands::quiz::execute(console, config, store.settings(), &mut rng)
                {
                    if matches!(e.downcast_ref::<QuizError>(), Some(QuizError::InputClosed)) {
                        return Ok(());
                    }
                    tracing::error!("quiz run failed: {e:#}");
                    writeln!(console.out(), "An error occurred: {e:#}")?;
                }
            }
            "2" => commands::settings::execute(console, store)?,
            "3" => {
                writeln!(console.out(), "Exiting.")?;
                return Ok(());
            }
            _ => writeln!(console.out(), "Invalid choice. Please try again.")?,
        }
    }
}
