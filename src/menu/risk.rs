/// Colour band for a card's risk estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskBand {
    Highest,
    High,
    Medium,
    Low,
}

impl RiskBand {
    /// Bands are checked from the top; exact boundary values fall to the lower band.
    /// Missing or NaN risk is `Low`.
    pub fn from_risk(risk: Option<f64>) -> Self {
        match risk {
            Some(r) if r > 0.75 => RiskBand::Highest,
            Some(r) if r > 0.5 => RiskBand::High,
            Some(r) if r > 0.25 => RiskBand::Medium,
            _ => RiskBand::Low,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RiskBand::Highest => "red",
            RiskBand::High => "orange",
            RiskBand::Medium => "green",
            RiskBand::Low => "blue",
        }
    }
}
