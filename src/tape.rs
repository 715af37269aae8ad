//! Growable memory tape

use crate::cell::Cell;

/// Cells plus the pointer. The tape grows by `chunk` cells whenever the pointer
/// would cross either end, so the pointer is always inside the tape.
#[derive(Debug, Clone)]
pub struct Tape {
    cells: Vec<Cell>,
    ptr: usize,
    chunk: usize,
    bits: u32,
}

impl Tape {
    /// Arguments come from a validated [`Config`](crate::config::Config).
    pub(crate) fn new(size: usize, chunk: usize, bits: u32) -> Self {
        debug_assert!(size > 0 && chunk > 0);
        Tape {
            cells: vec![Cell::new(bits); size],
            ptr: 0,
            chunk,
            bits,
        }
    }

    pub fn current(&self) -> &Cell {
        &self.cells[self.ptr]
    }

    pub fn current_mut(&mut self) -> &mut Cell {
        &mut self.cells[self.ptr]
    }

    pub fn move_right(&mut self) {
        if self.ptr + 1 >= self.cells.len() {
            let len = self.cells.len() + self.chunk;
            self.cells.resize(len, Cell::new(self.bits));
        }
        self.ptr += 1;
    }

    pub fn move_left(&mut self) {
        if self.ptr == 0 {
            let fresh = vec![Cell::new(self.bits); self.chunk];
            self.cells.splice(0..0, fresh);
            self.ptr = self.chunk - 1;
        } else {
            self.ptr -= 1;
        }
    }

    pub fn ptr(&self) -> usize {
        self.ptr
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Raw cell values from left to right.
    pub fn values(&self) -> Vec<u32> {
        self.cells.iter().map(Cell::value).collect()
    }
}
