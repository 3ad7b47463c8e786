//! Precomputed classification table over every 6-cell window configuration.
//!
//! One flat array of 4^6 = 4096 entries indexed by the base-4 encoding of the
//! window, built once on first use and never mutated afterwards. Reads need
//! no synchronization.

use std::sync::OnceLock;

use super::patterns::{classify, Pattern, Slot, TABLE_SIZE, WINDOW};

/// Immutable lookup table mapping window codes to classifications.
pub struct PatternTable {
    entries: Vec<Pattern>,
}

impl PatternTable {
    /// Exhaustively classify all window configurations.
    fn build() -> Self {
        let mut entries = Vec::with_capacity(TABLE_SIZE);
        for code in 0..TABLE_SIZE {
            let mut cells = [Slot::Empty; WINDOW];
            let mut rest = code;
            for cell in &mut cells {
                *cell = Slot::from_code(rest);
                rest /= 4;
            }
            entries.push(classify(&cells));
        }
        Self { entries }
    }

    /// Classification of the window with the given base-4 code.
    #[inline]
    pub fn get(&self, code: usize) -> Pattern {
        self.entries[code]
    }
}

/// Base-4 code of a window; the first cell is the lowest digit.
#[inline]
pub fn encode(cells: &[Slot; WINDOW]) -> usize {
    let mut code = 0;
    let mut mul = 1;
    for &cell in cells {
        code += cell as usize * mul;
        mul *= 4;
    }
    code
}

/// Shared process-wide table, built on the first call.
pub fn pattern_table() -> &'static PatternTable {
    static TABLE: OnceLock<PatternTable> = OnceLock::new();
    TABLE.get_or_init(PatternTable::build)
}
