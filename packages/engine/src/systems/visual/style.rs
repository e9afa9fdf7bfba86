use serde::Serialize;

/// Fixed fill style per entity role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Ball,
    Ground,
}

impl Style {
    /// Fill color as 0xAABBGGRR (RGBA bytes in little-endian memory order).
    pub const fn fill_color(self) -> u32 {
        match self {
            Style::Ball => 0xFF00FF00,   // green
            Style::Ground => 0xFFA4A0A0, // gray
        }
    }
}
