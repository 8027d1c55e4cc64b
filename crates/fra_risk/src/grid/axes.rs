//! Grid axes and cell enumeration.

/// One point of the Cartesian product, tagged with its row-major index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    /// Position in row-major order; also the seed stream of the cell
    pub index: usize,
    /// Initial rate S₀
    pub initial_rate: f64,
    /// Annualised volatility σ
    pub volatility: f64,
    /// Simulated horizon T in years
    pub maturity: f64,
}

/// Ordered axes of a sensitivity sweep.
///
/// Cells are enumerated row-major over (rate, volatility, maturity) with
/// maturity varying fastest.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityGrid {
    /// Initial rates to sweep.
    pub initial_rates: Vec<f64>,
    /// Volatilities to sweep.
    pub volatilities: Vec<f64>,
    /// Maturities (simulated horizons) to sweep.
    pub maturities: Vec<f64>,
}

impl SensitivityGrid {
    /// Creates a grid from its three axes.
    pub fn new(initial_rates: Vec<f64>, volatilities: Vec<f64>, maturities: Vec<f64>) -> Self {
        Self {
            initial_rates,
            volatilities,
            maturities,
        }
    }

    /// Number of cells, `|rates| × |vols| × |maturities|`.
    pub fn len(&self) -> usize {
        self.initial_rates.len() * self.volatilities.len() * self.maturities.len()
    }

    /// True when any axis is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates cells in row-major order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fra_risk::SensitivityGrid;
    ///
    /// let grid = SensitivityGrid::new(vec![1.0, 2.0], vec![0.1], vec![0.5, 1.0]);
    /// let maturities: Vec<f64> = grid.cells().map(|c| c.maturity).collect();
    /// assert_eq!(maturities, vec![0.5, 1.0, 0.5, 1.0]);
    /// ```
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.initial_rates
            .iter()
            .flat_map(move |&initial_rate| {
                self.volatilities.iter().flat_map(move |&volatility| {
                    self.maturities
                        .iter()
                        .map(move |&maturity| (initial_rate, volatility, maturity))
                })
            })
            .enumerate()
            .map(|(index, (initial_rate, volatility, maturity))| GridCell {
                index,
                initial_rate,
                volatility,
                maturity,
            })
    }
}
