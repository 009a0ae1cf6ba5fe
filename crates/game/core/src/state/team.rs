/// One of the two sides of a match.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Team {
    Powerlifters,
    Crossfitters,
}

impl Team {
    /// Returns the opposing team.
    pub const fn opponent(self) -> Self {
        match self {
            Self::Powerlifters => Self::Crossfitters,
            Self::Crossfitters => Self::Powerlifters,
        }
    }
}
