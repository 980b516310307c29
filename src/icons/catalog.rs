//! Asset-catalog tables and PNG output.
//!
//! Every entry is a fixed `(file_name, pixel_size)` pair writing into a
//! fixed directory. Write and encode failures propagate and terminate the
//! run; there is no per-file recovery.

use std::path::Path;

use anyhow::Result;

use super::render_icon;

pub const IOS_DIR: &str = "ios/Driftwell/Assets.xcassets/AppIcon.appiconset";
pub const WATCHOS_DIR: &str = "watchos/Driftwell Watch App/Assets.xcassets/AppIcon.appiconset";
pub const LAUNCH_DIR: &str = "ios/Driftwell/Assets.xcassets/LaunchIcon.imageset";
pub const DOCS_DIR: &str = "docs";

/// iOS app icon set.
pub const IOS_ICONS: [(&str, u32); 15] = [
    ("icon-20x20.png", 20),
    ("icon-20x20@2x.png", 40),
    ("icon-20x20@3x.png", 60),
    ("icon-29x29.png", 29),
    ("icon-29x29@2x.png", 58),
    ("icon-29x29@3x.png", 87),
    ("icon-40x40.png", 40),
    ("icon-40x40@2x.png", 80),
    ("icon-40x40@3x.png", 120),
    ("icon-60x60@2x.png", 120),
    ("icon-60x60@3x.png", 180),
    ("icon-76x76.png", 76),
    ("icon-76x76@2x.png", 152),
    ("icon-83.5x83.5@2x.png", 167),
    ("icon-1024x1024.png", 1024),
];

/// watchOS app icon set.
pub const WATCHOS_ICONS: [(&str, u32); 17] = [
    ("watch-24x24@2x.png", 48),
    ("watch-27.5x27.5@2x.png", 55),
    ("watch-29x29@2x.png", 58),
    ("watch-29x29@3x.png", 87),
    ("watch-33x33@2x.png", 66),
    ("watch-40x40@2x.png", 80),
    ("watch-44x44@2x.png", 88),
    ("watch-46x46@2x.png", 92),
    ("watch-50x50@2x.png", 100),
    ("watch-51x51@2x.png", 102),
    ("watch-54x54@2x.png", 108),
    ("watch-86x86@2x.png", 172),
    ("watch-98x98@2x.png", 196),
    ("watch-108x108@2x.png", 216),
    ("watch-117x117@2x.png", 234),
    ("watch-129x129@2x.png", 258),
    ("watch-1024x1024.png", 1024),
];

/// Launch-screen image set.
pub const LAUNCH_ICONS: [(&str, u32); 3] = [
    ("LaunchIcon.png", 200),
    ("LaunchIcon@2x.png", 400),
    ("LaunchIcon@3x.png", 600),
];

/// Standalone renders for documentation and store listings.
pub const DOC_ICONS: [(&str, u32); 2] = [
    ("driftwell-icon-preview.png", 512),
    ("driftwell-icon-1024.png", 1024),
];

/// Render and write every icon set under `root`.
pub fn generate_all(root: &Path) -> Result<()> {
    write_set(root, IOS_DIR, &IOS_ICONS)?;
    write_set(root, WATCHOS_DIR, &WATCHOS_ICONS)?;
    write_set(root, LAUNCH_DIR, &LAUNCH_ICONS)?;
    write_set(root, DOCS_DIR, &DOC_ICONS)?;
    tracing::info!("icon generation complete");
    Ok(())
}

fn write_set(root: &Path, dir: &str, icons: &[(&str, u32)]) -> Result<()> {
    let dir = root.join(dir);
    std::fs::create_dir_all(&dir)?;
    for (name, size) in icons {
        let icon = render_icon(*size);
        let path = dir.join(name);
        icon.save(&path)?;
        tracing::info!(path = %path.display(), size, "wrote icon");
    }
    Ok(())
}
