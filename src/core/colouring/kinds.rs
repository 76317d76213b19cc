use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteKind {
    #[default]
    Nebula,
    Plasma,
    Inferno,
    Arctic,
}

impl PaletteKind {
    pub const ALL: &'static [Self] = &[Self::Nebula, Self::Plasma, Self::Inferno, Self::Arctic];

    /// Unknown indices select the last palette.
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        match index {
            0 => Self::Nebula,
            1 => Self::Plasma,
            2 => Self::Inferno,
            _ => Self::Arctic,
        }
    }

    #[must_use]
    pub const fn index(self) -> u32 {
        match self {
            Self::Nebula => 0,
            Self::Plasma => 1,
            Self::Inferno => 2,
            Self::Arctic => 3,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Nebula => "Nebula",
            Self::Plasma => "Plasma",
            Self::Inferno => "Inferno",
            Self::Arctic => "Arctic",
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::PaletteKind;

    #[test]
    fn index_round_trips_for_known_palettes() {
        for &kind in PaletteKind::ALL {
            assert_eq!(PaletteKind::from_index(kind.index()), kind);
        }
    }

    #[test]
    fn unknown_index_falls_back_to_last_palette() {
        assert_eq!(PaletteKind::from_index(4), PaletteKind::Arctic);
        assert_eq!(PaletteKind::from_index(u32::MAX), PaletteKind::Arctic);
    }
}
