//! The settings menu.

use std::io::{BufRead, Write};

use anyhow::Result;
use comfy_table::{Cell, Table};

use testx_core::{Settings, SettingsStore};

use crate::console::Console;

pub fn execute<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    store: &mut SettingsStore,
) -> Result<()> {
    loop {
        let out = console.out();
        writeln!(out, "\nQUIZ SETTINGS:")?;
        writeln!(out, "1. Shuffle questions")?;
        writeln!(out, "2. Shuffle answers")?;
        writeln!(out, "3. Show current settings")?;
        writeln!(out, "4. Back to main menu")?;

        let Some(choice) = console.prompt("Choose an action: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let enabled = store.toggle_shuffle_questions();
                writeln!(console.out(), "Question shuffling {}.", on_off(enabled))?;
            }
            "2" => {
                let enabled = store.toggle_shuffle_answers();
                writeln!(console.out(), "Answer shuffling {}.", on_off(enabled))?;
            }
            "3" => writeln!(console.out(), "\n{}", settings_table(store.settings()))?,
            "4" => return Ok(()),
            _ => writeln!(console.out(), "Invalid choice.")?,
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}

fn settings_table(settings: Settings) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec![
        Cell::new("Shuffle questions"),
        Cell::new(on_off(settings.shuffle_questions)),
    ]);
    table.add_row(vec![
        Cell::new("Shuffle answers"),
        Cell::new(on_off(settings.shuffle_answers)),
    ]);
    table
}
