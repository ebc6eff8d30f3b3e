//! Bad-day (business-day adjustment) conventions.

/// How to adjust a date that falls on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BadDayConvention {
    /// Keep the original date.
    Unadjusted,
    /// Roll forward to the first business day.
    Following,
    /// Roll forward unless that crosses into the next month, in which case
    /// roll backward. The CDS payment standard.
    #[default]
    ModifiedFollowing,
    /// Roll backward to the first business day.
    Preceding,
    /// Roll backward unless that crosses into the previous month, in which
    /// case roll forward.
    ModifiedPreceding,
}

impl std::fmt::Display for BadDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BadDayConvention::Unadjusted => "Unadjusted",
            BadDayConvention::Following => "Following",
            BadDayConvention::ModifiedFollowing => "Modified Following",
            BadDayConvention::Preceding => "Preceding",
            BadDayConvention::ModifiedPreceding => "Modified Preceding",
        };
        f.write_str(s)
    }
}
