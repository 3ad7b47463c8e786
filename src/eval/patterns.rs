//! Pattern classification and scoring weights for 6-cell line windows.
//!
//! A window cell is one of four states; out-of-bounds is distinct from empty
//! because an edge-blocked line is not the same threat as one blocked by
//! empty space.

/// Window length in cells.
pub const WINDOW: usize = 6;

/// Number of distinct window configurations (4^6).
pub const TABLE_SIZE: usize = 4096;

/// Cell of a line window, relative to the player being scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Empty = 0,
    /// Stone of the scored player.
    Own = 1,
    /// Stone of the other player.
    Rival = 2,
    /// Past the board edge.
    Edge = 3,
}

impl Slot {
    /// Decode a base-4 digit.
    #[inline]
    pub(crate) fn from_code(code: usize) -> Slot {
        match code & 3 {
            0 => Slot::Empty,
            1 => Slot::Own,
            2 => Slot::Rival,
            _ => Slot::Edge,
        }
    }
}

/// Classification of a window: the strongest `Own` run it contains, tagged
/// with the openness of its flanks and whose threat it is.
///
/// One tagged type carries run length, openness and perspective; magnitude
/// and whose-threat are separate fields instead of named constants per
/// player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    /// Contiguous run length (5+ is a win).
    pub len: u8,
    /// Flank before the run is in-window and empty.
    pub left_open: bool,
    /// Flank after the run is in-window and empty.
    pub right_open: bool,
    /// `true` scores for the mover, `false` mirrors the magnitude with
    /// opposite sign (the opponent's identical threat).
    pub for_mover: bool,
}

impl Pattern {
    /// No run at all; weight zero.
    pub const NONE: Pattern = Pattern {
        len: 0,
        left_open: false,
        right_open: false,
        for_mover: true,
    };

    #[inline]
    fn open_ends(self) -> u8 {
        u8::from(self.left_open) + u8::from(self.right_open)
    }

    /// Unsigned severity of this pattern.
    #[inline]
    pub fn magnitude(self) -> i32 {
        if self.len >= 5 {
            return PatternScore::WIN;
        }
        match (self.len, self.open_ends()) {
            (4, 2) => PatternScore::OPEN_FOUR,
            (4, 1) => PatternScore::HALF_FOUR,
            (3, 2) => PatternScore::OPEN_THREE,
            (3, 1) => PatternScore::HALF_THREE,
            (2, 2) => PatternScore::OPEN_TWO,
            (2, 1) => PatternScore::HALF_TWO,
            (1, 2) => PatternScore::OPEN_ONE,
            _ => 0,
        }
    }

    /// Signed contribution: positive for the mover's threats, negative for
    /// the opponent's (equal magnitude, opposite sign).
    #[inline]
    pub fn weight(self) -> i32 {
        if self.for_mover {
            self.magnitude()
        } else {
            -self.magnitude()
        }
    }
}

/// Classify a window by its strongest run of `Own` cells.
///
/// A flank is open only when the adjacent cell exists inside the window and
/// is empty; `Rival`, `Edge`, and the window boundary all count as blocked.
/// When a window holds several runs, the most severe classification wins.
pub fn classify(cells: &[Slot; WINDOW]) -> Pattern {
    let mut best = Pattern::NONE;
    let mut i = 0;
    while i < WINDOW {
        if cells[i] != Slot::Own {
            i += 1;
            continue;
        }
        let start = i;
        while i < WINDOW && cells[i] == Slot::Own {
            i += 1;
        }
        #[allow(clippy::cast_possible_truncation)]
        let run = Pattern {
            len: (i - start) as u8,
            left_open: start > 0 && cells[start - 1] == Slot::Empty,
            right_open: i < WINDOW && cells[i] == Slot::Empty,
            for_mover: true,
        };
        if run.weight() > best.weight() {
            best = run;
        }
    }
    best
}

/// Pattern scores for evaluation.
/// Every category is well below the next-more-severe one, so severity is a
/// total order: WIN >> OPEN_FOUR > HALF_FOUR > OPEN_THREE > HALF_THREE >
/// OPEN_TWO > HALF_TWO > OPEN_ONE > 0.
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - the game is decided
    pub const WIN: i32 = 1_000_000;
    /// Open four: _OOOO_ (unstoppable)
    pub const OPEN_FOUR: i32 = 100_000;
    /// Half-open four: XOOOO_ or _OOOOX (one way to extend)
    pub const HALF_FOUR: i32 = 50_000;
    /// Open three: _OOO_ (becomes open four if not blocked)
    pub const OPEN_THREE: i32 = 10_000;
    /// Half-open three: XOOO_ or _OOOX
    pub const HALF_THREE: i32 = 1_500;
    /// Open two: _OO_ (potential to grow)
    pub const OPEN_TWO: i32 = 1_000;
    /// Half-open two: XOO_ or _OOX
    pub const HALF_TWO: i32 = 200;
    /// Lone stone with both neighbors free
    pub const OPEN_ONE: i32 = 20;
}
