//! Demo launcher.
//!
//! The first CLI argument plays the role of a URL path: it selects which
//! demo runs, the root path redirects to the default demo, and an unknown
//! path fails loudly. The full menu is logged with the active entry marked.

mod demos;
mod geometry;
mod menu;

use anyhow::Result;

fn main() -> Result<()> {
    trigon_engine::logging::init_logging("info");

    let arg = std::env::args().nth(1);
    let slug = menu::resolve(arg.as_deref());

    for line in menu::render(&slug).lines() {
        log::info!("{line}");
    }

    demos::run(&slug)?;
    log::info!("demo '/{slug}' ran successfully");
    Ok(())
}
