//! Demo registry and dispatch.

mod attributes;
mod binding;
mod check;
mod triangle;

use anyhow::{Result, bail};
use wgpu::PrimitiveTopology;

use crate::menu;

/// Runs the demo registered under `slug`.
///
/// Unknown slugs fail the way a missing module would: an error that
/// propagates to the caller, no fallback.
pub fn run(slug: &str) -> Result<()> {
    match slug {
        "01" => check::run(),
        "02" | "02triangle-list" => triangle::run(slug, PrimitiveTopology::TriangleList),
        "02point-list" => triangle::run(slug, PrimitiveTopology::PointList),
        "02line-list" => triangle::run(slug, PrimitiveTopology::LineList),
        "02line-strip" => triangle::run(slug, PrimitiveTopology::LineStrip),
        "02triangle-strip" => triangle::run(slug, PrimitiveTopology::TriangleStrip),
        "03" => binding::run(slug),
        "03attributes-01" => attributes::run(slug, attributes::Layout::SplitAttributes),
        "03attributes-02" => attributes::run(slug, attributes::Layout::SplitBuffers),
        _ => bail!(
            "no demo module for path '/{slug}' (known paths: {})",
            known_paths()
        ),
    }
}

fn known_paths() -> String {
    let paths: Vec<String> = menu::MENU.iter().map(|(s, _)| format!("/{s}")).collect();
    paths.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_slug_fails_like_a_missing_module() {
        let err = run("zz-missing").unwrap_err();
        assert!(err.to_string().contains("no demo module"));
    }

    #[test]
    fn error_lists_every_known_path() {
        let listing = known_paths();
        for (slug, _) in menu::MENU {
            assert!(listing.contains(&format!("/{slug}")));
        }
    }
}
