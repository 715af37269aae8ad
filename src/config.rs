//! Construction-time settings of the interpreter

use anyhow::bail;

/// Tape and cell shape, plus an optional step budget.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Config {
    /// Width of a cell in bits, 1 to 32
    pub cell_bits: u32,
    /// Number of zeroed cells the tape starts with
    pub initial_cells: usize,
    /// Number of cells added whenever the pointer crosses an end of the tape
    pub growth_chunk: usize,
    /// Maximum number of dispatched tokens, `None` for unbounded runs
    pub step_limit: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cell_bits: 8,
            initial_cells: 10,
            growth_chunk: 5,
            step_limit: None,
        }
    }
}

impl Config {
    pub fn with_cell_bits(mut self, cell_bits: u32) -> Self {
        self.cell_bits = cell_bits;
        self
    }

    pub fn with_initial_cells(mut self, initial_cells: usize) -> Self {
        self.initial_cells = initial_cells;
        self
    }

    pub fn with_growth_chunk(mut self, growth_chunk: usize) -> Self {
        self.growth_chunk = growth_chunk;
        self
    }

    pub fn with_step_limit(mut self, step_limit: Option<u64>) -> Self {
        self.step_limit = step_limit;
        self
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(1..=32).contains(&self.cell_bits) {
            bail!("cell width must be between 1 and 32 bits, got {}", self.cell_bits);
        }
        if self.initial_cells == 0 {
            bail!("tape must start with at least one cell");
        }
        if self.growth_chunk == 0 {
            bail!("tape growth chunk must be at least one cell");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cell_bits, 8);
        assert_eq!(config.initial_cells, 10);
        assert_eq!(config.growth_chunk, 5);
        assert_eq!(config.step_limit, None);
    }

    #[test]
    fn invalid() {
        assert!(Config::default().with_cell_bits(0).validate().is_err());
        assert!(Config::default().with_cell_bits(33).validate().is_err());
        assert!(Config::default().with_initial_cells(0).validate().is_err());
        assert!(Config::default().with_growth_chunk(0).validate().is_err());
    }
}
