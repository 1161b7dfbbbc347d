//! Path resolution and menu rendering.

use std::fmt::Write;

/// Demo the root path redirects to.
pub const DEFAULT_DEMO: &str = "01";

/// All demos as (slug, label) pairs, in presentation order.
pub const MENU: &[(&str, &str)] = &[
    ("01", "01 check GPU support"),
    ("02", "02 draw a triangle"),
    ("02point-list", "02 point-list topology"),
    ("02line-list", "02 line-list topology"),
    ("02line-strip", "02 line-strip topology"),
    ("02triangle-list", "02 triangle-list topology"),
    ("02triangle-strip", "02 triangle-strip topology"),
    ("03", "03 dynamic resource binding"),
    ("03attributes-01", "03 split vertex attributes"),
    ("03attributes-02", "03 split vertex buffers"),
];

/// Resolves a CLI path argument to a demo slug.
///
/// An absent argument or a bare root path redirects to [`DEFAULT_DEMO`];
/// otherwise the leading `/` is stripped and the rest passes through
/// unchecked (dispatch rejects unknown slugs).
pub fn resolve(arg: Option<&str>) -> String {
    let slug = match arg {
        None => "",
        Some(path) => path.strip_prefix('/').unwrap_or(path),
    };

    if slug.is_empty() {
        DEFAULT_DEMO.to_string()
    } else {
        slug.to_string()
    }
}

/// Renders the menu, marking the entry whose slug equals `current`.
pub fn render(current: &str) -> String {
    let mut out = String::new();
    for (slug, label) in MENU {
        let marker = if *slug == current { '>' } else { ' ' };
        let _ = writeln!(out, "{marker} {label}  (/{slug})");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_argument_resolves_to_default() {
        assert_eq!(resolve(None), DEFAULT_DEMO);
    }

    #[test]
    fn root_path_resolves_to_default() {
        assert_eq!(resolve(Some("/")), DEFAULT_DEMO);
        assert_eq!(resolve(Some("")), DEFAULT_DEMO);
    }

    #[test]
    fn leading_slash_is_optional() {
        assert_eq!(resolve(Some("/02line-list")), "02line-list");
        assert_eq!(resolve(Some("02line-list")), "02line-list");
    }

    #[test]
    fn every_known_slug_marks_exactly_one_entry() {
        for (slug, _) in MENU {
            let rendered = render(slug);
            let marked = rendered.lines().filter(|l| l.starts_with('>')).count();
            assert_eq!(marked, 1, "slug {slug} marked {marked} entries");
        }
    }

    #[test]
    fn unknown_slug_marks_nothing() {
        let rendered = render("zz-missing");
        assert!(rendered.lines().all(|l| !l.starts_with('>')));
    }

    #[test]
    fn menu_lists_every_demo_once() {
        let mut slugs: Vec<&str> = MENU.iter().map(|(s, _)| *s).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), MENU.len());
    }
}
