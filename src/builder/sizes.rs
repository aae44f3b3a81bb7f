//! The fixed iconset size table.

/// One required rendition: a square pixel dimension and its file name
/// inside the iconset directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenditionSpec {
    /// Square pixel dimension.
    pub size: u32,
    /// File name inside the iconset directory.
    pub name: &'static str,
}

/// The ten renditions a macOS iconset must contain.
///
/// Order and names are fixed by the iconset convention: each `@2x` entry is
/// double the pixel dimension of its base name, and `iconutil` matches
/// renditions by file name alone.
pub const ICONSET_RENDITIONS: &[RenditionSpec] = &[
    RenditionSpec { size: 16, name: "icon_16x16.png" },
    RenditionSpec { size: 32, name: "icon_16x16@2x.png" },
    RenditionSpec { size: 32, name: "icon_32x32.png" },
    RenditionSpec { size: 64, name: "icon_32x32@2x.png" },
    RenditionSpec { size: 128, name: "icon_128x128.png" },
    RenditionSpec { size: 256, name: "icon_128x128@2x.png" },
    RenditionSpec { size: 256, name: "icon_256x256.png" },
    RenditionSpec { size: 512, name: "icon_256x256@2x.png" },
    RenditionSpec { size: 512, name: "icon_512x512.png" },
    RenditionSpec { size: 1024, name: "icon_512x512@2x.png" },
];

/// Largest pixel dimension in a size table.
///
/// The thumbnail fallback renders the SVG once at this size so every
/// rendition can be downscaled from it.
pub fn max_dimension(specs: &[RenditionSpec]) -> u32 {
    specs.iter().map(|s| s.size).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_ten_uniquely_named_renditions() {
        assert_eq!(ICONSET_RENDITIONS.len(), 10);
        let names: HashSet<_> = ICONSET_RENDITIONS.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn retina_entries_double_their_base() {
        for spec in ICONSET_RENDITIONS {
            if let Some(base) = spec.name.strip_suffix("@2x.png") {
                let base_name = format!("{base}.png");
                let base_spec = ICONSET_RENDITIONS
                    .iter()
                    .find(|s| s.name == base_name)
                    .expect("every @2x entry has a base entry");
                assert_eq!(spec.size, base_spec.size * 2, "{}", spec.name);
            }
        }
    }

    #[test]
    fn largest_dimension_is_1024() {
        assert_eq!(max_dimension(ICONSET_RENDITIONS), 1024);
    }

    #[test]
    fn table_is_ordered_by_base_size() {
        let sizes: Vec<u32> = ICONSET_RENDITIONS.iter().map(|s| s.size).collect();
        assert_eq!(sizes, [16, 32, 32, 64, 128, 256, 256, 512, 512, 1024]);
    }
}
