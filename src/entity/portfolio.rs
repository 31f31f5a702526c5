/// One slice of the portfolio breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// Share of the portfolio total, in percent. Zero for every entry when
    /// the total itself is zero.
    pub percent: f64,
    /// Position within the relevant-token sequence, modulo the palette size.
    pub color_index: usize,
}

/// Aggregate read model derived from the watchlist on every read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioTotals {
    pub total_value: f64,
    pub allocations: Vec<Allocation>,
}

impl PortfolioTotals {
    pub fn has_data(&self) -> bool {
        !self.allocations.is_empty() && self.total_value > 0.0
    }

    pub fn format_total(&self) -> String {
        format!("${:.2}", self.total_value)
    }
}
