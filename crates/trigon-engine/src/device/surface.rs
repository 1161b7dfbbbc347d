//! Surface format and alpha-mode selection.
//!
//! Helpers operate on plain slices (as reported by
//! `Surface::get_capabilities`) so they stay testable without a live surface.

/// Picks a surface format, preferring sRGB variants when requested.
///
/// The capability list is ordered by preference on the wgpu side, so the
/// first entry is the fallback. This stands in for the browser's
/// `getPreferredFormat`, which wgpu has no direct equivalent of.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if formats.is_empty() {
        return None;
    }

    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        for f in preferred {
            if formats.contains(&f) {
                return Some(f);
            }
        }
    }

    Some(formats[0])
}

/// Picks an alpha mode, honoring the request when the surface supports it.
pub(crate) fn choose_alpha_mode(
    modes: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| modes.contains(m))
        .or_else(|| modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode, TextureFormat};

    #[test]
    fn format_prefers_srgb() {
        let formats = [
            TextureFormat::Bgra8Unorm,
            TextureFormat::Bgra8UnormSrgb,
            TextureFormat::Rgba8UnormSrgb,
        ];
        assert_eq!(
            choose_surface_format(&formats, true),
            Some(TextureFormat::Bgra8UnormSrgb)
        );
    }

    #[test]
    fn format_falls_back_to_first_supported() {
        let formats = [TextureFormat::Rgba16Float, TextureFormat::Bgra8Unorm];
        assert_eq!(
            choose_surface_format(&formats, true),
            Some(TextureFormat::Rgba16Float)
        );
    }

    #[test]
    fn format_without_srgb_preference_takes_first() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Bgra8UnormSrgb];
        assert_eq!(
            choose_surface_format(&formats, false),
            Some(TextureFormat::Bgra8Unorm)
        );
    }

    #[test]
    fn format_empty_is_none() {
        assert_eq!(choose_surface_format(&[], true), None);
    }

    #[test]
    fn alpha_honors_supported_request() {
        let modes = [CompositeAlphaMode::Auto, CompositeAlphaMode::Opaque];
        assert_eq!(
            choose_alpha_mode(&modes, Some(CompositeAlphaMode::Opaque)),
            CompositeAlphaMode::Opaque
        );
    }

    #[test]
    fn alpha_unsupported_request_falls_back() {
        let modes = [CompositeAlphaMode::PreMultiplied];
        assert_eq!(
            choose_alpha_mode(&modes, Some(CompositeAlphaMode::Opaque)),
            CompositeAlphaMode::PreMultiplied
        );
    }

    #[test]
    fn alpha_empty_list_is_auto() {
        assert_eq!(
            choose_alpha_mode(&[], Some(CompositeAlphaMode::Opaque)),
            CompositeAlphaMode::Auto
        );
    }
}
