//! Payment frequency of a premium leg.

/// How often coupons are paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaymentFrequency {
    /// Once per year.
    Annual,
    /// Twice per year.
    SemiAnnual,
    /// Four times per year. The CDS standard.
    #[default]
    Quarterly,
    /// Twelve times per year.
    Monthly,
}

impl PaymentFrequency {
    /// Length of one period in months.
    pub fn months(&self) -> i32 {
        match self {
            PaymentFrequency::Annual => 12,
            PaymentFrequency::SemiAnnual => 6,
            PaymentFrequency::Quarterly => 3,
            PaymentFrequency::Monthly => 1,
        }
    }

    /// Number of periods per year.
    pub fn periods_per_year(&self) -> u32 {
        (12 / self.months()) as u32
    }
}

impl std::fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentFrequency::Annual => "Annual",
            PaymentFrequency::SemiAnnual => "Semi-Annual",
            PaymentFrequency::Quarterly => "Quarterly",
            PaymentFrequency::Monthly => "Monthly",
        };
        f.write_str(s)
    }
}
