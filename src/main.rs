//! Date widget preview host
//!
//! Opens the configured widget state, applies the clicks named on the
//! command line (`toggle`, `minimize`, `date=<label>`, `day=<label>`,
//! `color=<hex>`), renders once and prints the resulting tree.

use anyhow::{Context, Result};
use log::info;

use date_widget::config::Config;
use date_widget::state::Slot;
use date_widget::{Action, DateWidget, LocalClock};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    info!("Starting date widget preview v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load_or_default()?;
    info!("Configuration loaded successfully");

    let actions = std::env::args()
        .skip(1)
        .map(|arg| {
            arg.parse::<Action>()
                .with_context(|| format!("invalid click {:?}", arg))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut widget = DateWidget::new(config.storage.open(), LocalClock);
    let stored = widget.preference_store().stored_slots();
    info!(
        "Restored {} of {} preference slots: {:?}",
        stored.len(),
        Slot::ALL.len(),
        stored.iter().map(|slot| slot.key()).collect::<Vec<_>>()
    );
    for action in actions {
        widget.click(action);
    }

    let tree = widget.render();
    print!("{}", tree);

    if config.preview.show_click_targets {
        println!();
        for (i, action) in tree.click_targets().iter().enumerate() {
            println!("{:>2}. {:?}", i + 1, action);
        }
    }

    info!("Preview finished: {}", widget.label());
    Ok(())
}
