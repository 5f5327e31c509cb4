//! Icon identifiers used by the navigation bar.
//!
//! Artwork is plain 24x24 stroke SVG path data so every platform renders the
//! same glyphs without an icon font.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    Shield,
    Menu,
    X,
    Layers,
    Sparkles,
    Activity,
    MoreHorizontal,
    CheckCircle,
}

impl IconId {
    /// `d` attributes of the `<path>` elements making up the glyph.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconId::Shield => &["M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"],
            IconId::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            IconId::X => &["M18 6 6 18", "m6 6 12 12"],
            IconId::Layers => &[
                "m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z",
                "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65",
                "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65",
            ],
            IconId::Sparkles => &[
                "M9.94 15.5A2 2 0 0 0 8.5 14.06l-6.14-1.58a.5.5 0 0 1 0-.96L8.5 9.94A2 2 0 0 0 9.94 8.5l1.58-6.14a.5.5 0 0 1 .96 0L14.06 8.5A2 2 0 0 0 15.5 9.94l6.14 1.58a.5.5 0 0 1 0 .96L15.5 14.06a2 2 0 0 0-1.44 1.44l-1.58 6.14a.5.5 0 0 1-.96 0z",
                "M20 3v4",
                "M22 5h-4",
                "M4 17v2",
                "M5 18H3",
            ],
            IconId::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
            // Zero-length segments drawn with round caps render as dots.
            IconId::MoreHorizontal => &["M12 12h.01", "M19 12h.01", "M5 12h.01"],
            IconId::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
        }
    }

    /// Kebab-case name, used for the `data-icon` attribute and CSS hooks.
    pub fn name(self) -> &'static str {
        match self {
            IconId::Shield => "shield",
            IconId::Menu => "menu",
            IconId::X => "x",
            IconId::Layers => "layers",
            IconId::Sparkles => "sparkles",
            IconId::Activity => "activity",
            IconId::MoreHorizontal => "more-horizontal",
            IconId::CheckCircle => "check-circle",
        }
    }
}
