//! Fixed-width memory cell

/// Wrap-around unsigned integer of `bits` width (1 to 32).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Cell {
    value: u32,
    bits: u32,
}

impl Cell {
    /// `bits` comes from a validated [`Config`](crate::config::Config).
    pub(crate) fn new(bits: u32) -> Self {
        debug_assert!((1..=32).contains(&bits));
        Cell { value: 0, bits }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Largest value the cell can hold.
    pub fn max(&self) -> u32 {
        ((1u64 << self.bits) - 1) as u32
    }

    pub fn increment(&mut self) {
        self.value = if self.value == self.max() {
            0
        } else {
            self.value + 1
        };
    }

    pub fn decrement(&mut self) {
        self.value = if self.value == 0 {
            self.max()
        } else {
            self.value - 1
        };
    }

    /// Set the value modulo 2^bits. Negative values count down from the top.
    pub fn fill(&mut self, value: i64) {
        let modulus = 1i64 << self.bits;
        self.value = value.rem_euclid(modulus) as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn increment_wraps() {
        let mut cell = Cell::new(8);
        cell.fill(255);
        cell.increment();
        assert_eq!(cell.value(), 0);
    }

    #[test]
    fn decrement_wraps() {
        let mut cell = Cell::new(8);
        cell.decrement();
        assert_eq!(cell.value(), 255);
    }

    #[test]
    fn fill() {
        let mut cell = Cell::new(8);
        cell.fill(300);
        assert_eq!(cell.value(), 44);
        cell.fill(-1);
        assert_eq!(cell.value(), 255);
        cell.fill(-256);
        assert_eq!(cell.value(), 0);
    }

    #[test]
    fn widths() {
        let mut narrow = Cell::new(1);
        narrow.increment();
        narrow.increment();
        assert_eq!(narrow.value(), 0);

        let mut wide = Cell::new(32);
        wide.decrement();
        assert_eq!(wide.value(), u32::MAX);
        wide.increment();
        assert_eq!(wide.value(), 0);
    }

    proptest! {
        #[test]
        fn value_is_net_increments(ops in proptest::collection::vec(any::<bool>(), 0..600)) {
            let mut cell = Cell::new(8);
            let mut net: i64 = 0;
            for inc in &ops {
                if *inc {
                    cell.increment();
                    net += 1;
                } else {
                    cell.decrement();
                    net -= 1;
                }
            }
            prop_assert_eq!(cell.value() as i64, net.rem_euclid(256));
            prop_assert!(cell.value() <= cell.max());
        }

        #[test]
        fn full_cycle(bits in 1u32..=12, start in any::<i64>()) {
            let mut cell = Cell::new(bits);
            cell.fill(start);
            let before = cell.value();
            for _ in 0..(1u64 << bits) {
                cell.increment();
            }
            prop_assert_eq!(cell.value(), before);
        }
    }
}
