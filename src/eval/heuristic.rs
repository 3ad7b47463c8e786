//! Heuristic evaluation: sliding 6-cell windows over the four board axes.
//!
//! Every window is looked up in the precomputed classification table twice,
//! once per player, and the weighted contributions are accumulated into one
//! signed score. The evaluation is exactly antisymmetric under color swap,
//! which is what lets the search negate it across plies.

use crate::board::{Board, Stone, DIRECTIONS};

use super::patterns::{Slot, WINDOW};
use super::table::pattern_table;

/// Saturating evaluation for a finished game. Dominates any weighted window
/// sum a realistic board can accumulate.
pub const TERMINAL_SCORE: i32 = i32::MAX / 2;

/// Evaluate from the perspective of the player to move.
///
/// This is the evaluator the search engine consumes: swapping perspective
/// between plies is a pure negation.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    evaluate_for(board, board.current_player())
}

/// Evaluate from a fixed color's viewpoint: positive favors `perspective`.
///
/// A board with a winner short-circuits to `±TERMINAL_SCORE`, overriding the
/// weighted sum. Otherwise each axis slides a 6-cell window over every
/// anchor, padding past the edge with [`Slot::Edge`], and accumulates
/// `weight(own) - weight(rival)` from the lookup table. Anchors start
/// `WINDOW - 1` cells before the board along each scan direction, so every
/// cell sits in exactly [`WINDOW`] windows per axis; the value is invariant
/// under board reflection, and evaluating the same board with colors swapped
/// returns exactly the negated value.
#[must_use]
pub fn evaluate_for(board: &Board, perspective: Stone) -> i32 {
    if let Some(winner) = board.winner() {
        return if winner == perspective {
            TERMINAL_SCORE
        } else {
            -TERMINAL_SCORE
        };
    }

    let table = pattern_table();
    let span = (WINDOW - 1) as i32;
    let rows = i32::from(board.rows());
    let cols = i32::from(board.cols());
    let mut score = 0i32;
    for &(dr, dc) in &DIRECTIONS {
        // Windows holding no board cell at all classify as no run and add
        // nothing; over-extending the anchor range is harmless.
        let row_start = if dr == 0 { 0 } else { -span };
        let (col_start, col_end) = match dc {
            1 => (-span, cols),
            -1 => (0, cols + span),
            _ => (0, cols),
        };
        for row in row_start..rows {
            for col in col_start..col_end {
                let (own_code, rival_code) = encode_window(board, row, col, dr, dc, perspective);
                let own = table.get(own_code);
                let mut rival = table.get(rival_code);
                rival.for_mover = false;
                score += own.weight() + rival.weight();
            }
        }
    }
    score
}

/// Encode the window anchored at `(row, col)` along `(dr, dc)` as two base-4
/// codes, one per perspective. The rival code is the same window with `Own`
/// and `Rival` swapped, so both lookups cost a single scan.
fn encode_window(
    board: &Board,
    row: i32,
    col: i32,
    dr: i32,
    dc: i32,
    own: Stone,
) -> (usize, usize) {
    let mut own_code = 0;
    let mut rival_code = 0;
    let mut mul = 1;
    let (mut r, mut c) = (row, col);
    for _ in 0..WINDOW {
        let (o, x) = match board.at(r, c) {
            None => (Slot::Edge, Slot::Edge),
            Some(Stone::Empty) => (Slot::Empty, Slot::Empty),
            Some(s) if s == own => (Slot::Own, Slot::Rival),
            Some(_) => (Slot::Rival, Slot::Own),
        };
        own_code += o as usize * mul;
        rival_code += x as usize * mul;
        mul *= 4;
        r += dr;
        c += dc;
    }
    (own_code, rival_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::patterns::PatternScore;

    /// Board built by interleaving legal moves: the offensive player takes
    /// the `offense` list, the other player the `defense` list.
    fn board_with(
        rows: u16,
        cols: u16,
        offensive: Stone,
        offense: &[(u16, u16)],
        defense: &[(u16, u16)],
    ) -> Board {
        assert!(offense.len() >= defense.len() && offense.len() - defense.len() <= 1);
        let mut board = Board::new(rows, cols, offensive).unwrap();
        for (i, &(r, c)) in offense.iter().enumerate() {
            board.play(r, c).unwrap();
            if let Some(&(r, c)) = defense.get(i) {
                board.play(r, c).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_empty_board_is_level() {
        let board = Board::new(15, 15, Stone::Black).unwrap();
        assert_eq!(evaluate_for(&board, Stone::Black), 0);
        assert_eq!(evaluate_for(&board, Stone::White), 0);
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn test_single_stone_favors_owner() {
        let mut board = Board::new(15, 15, Stone::Black).unwrap();
        board.play(7, 7).unwrap();

        assert!(evaluate_for(&board, Stone::Black) > 0);
        assert!(evaluate_for(&board, Stone::White) < 0);
    }

    #[test]
    fn test_color_swap_negates_exactly() {
        let board = board_with(
            15,
            15,
            Stone::Black,
            &[(7, 7), (7, 8), (8, 9)],
            &[(5, 5), (6, 5)],
        );
        // Same coordinates with every color identity swapped, including the
        // offensive player, so the position is an exact mirror.
        let swapped = board_with(
            15,
            15,
            Stone::White,
            &[(7, 7), (7, 8), (8, 9)],
            &[(5, 5), (6, 5)],
        );

        assert_eq!(
            evaluate_for(&board, Stone::Black),
            -evaluate_for(&swapped, Stone::Black)
        );
        assert_eq!(
            evaluate_for(&board, Stone::White),
            -evaluate_for(&swapped, Stone::White)
        );
        // Side-to-move views of mirrored positions agree.
        assert_eq!(evaluate(&board), evaluate(&swapped));
    }

    #[test]
    fn test_lone_stone_scores_match_under_rotation() {
        // 180-degree rotation pairs on a 5x5 board must score identically.
        for &((r1, c1), (r2, c2)) in &[
            ((0u16, 1u16), (4u16, 3u16)),
            ((1, 0), (3, 4)),
            ((0, 0), (4, 4)),
            ((1, 2), (3, 2)),
        ] {
            let a = board_with(5, 5, Stone::Black, &[(r1, c1)], &[]);
            let b = board_with(5, 5, Stone::Black, &[(r2, c2)], &[]);
            assert_eq!(
                evaluate_for(&a, Stone::Black),
                evaluate_for(&b, Stone::Black),
                "({r1}, {c1}) and ({r2}, {c2}) are mirror images"
            );
        }
    }

    #[test]
    fn test_mirrored_positions_evaluate_equally() {
        // Every coordinate rotated 180 degrees, colors unchanged.
        let board = board_with(5, 5, Stone::Black, &[(0, 1), (1, 2)], &[(3, 3)]);
        let mirrored = board_with(5, 5, Stone::Black, &[(4, 3), (3, 2)], &[(1, 1)]);
        assert_eq!(
            evaluate_for(&board, Stone::Black),
            evaluate_for(&mirrored, Stone::Black)
        );
        assert_eq!(evaluate(&board), evaluate(&mirrored));
    }

    #[test]
    fn test_perspectives_are_antisymmetric() {
        let board = board_with(15, 15, Stone::Black, &[(7, 7), (7, 8)], &[(9, 9)]);
        assert_eq!(
            evaluate_for(&board, Stone::Black),
            -evaluate_for(&board, Stone::White)
        );
    }

    #[test]
    fn test_winner_short_circuits() {
        let board = board_with(
            15,
            15,
            Stone::Black,
            &[(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)],
            &[(0, 0), (0, 1), (0, 2), (0, 3)],
        );
        assert_eq!(board.winner(), Some(Stone::Black));
        assert_eq!(evaluate_for(&board, Stone::Black), TERMINAL_SCORE);
        assert_eq!(evaluate_for(&board, Stone::White), -TERMINAL_SCORE);
    }

    #[test]
    fn test_open_three_outscores_half_open_three() {
        // _OOO_ in the middle vs OOO against the left edge.
        let open = board_with(
            15,
            15,
            Stone::Black,
            &[(7, 5), (7, 6), (7, 7)],
            &[(0, 14), (1, 14)],
        );
        let edged = board_with(
            15,
            15,
            Stone::Black,
            &[(7, 0), (7, 1), (7, 2)],
            &[(0, 14), (1, 14)],
        );

        assert!(
            evaluate_for(&open, Stone::Black) > evaluate_for(&edged, Stone::Black),
            "edge-blocked run must score below the open run"
        );
    }

    #[test]
    fn test_longer_run_outscores_shorter() {
        let three = board_with(
            15,
            15,
            Stone::Black,
            &[(7, 5), (7, 6), (7, 7)],
            &[(0, 0), (0, 2)],
        );
        let two = board_with(15, 15, Stone::Black, &[(7, 5), (7, 6)], &[(0, 0)]);

        assert!(evaluate_for(&three, Stone::Black) > evaluate_for(&two, Stone::Black));
    }

    #[test]
    fn test_center_outranks_corner_for_single_stone() {
        let center = board_with(5, 5, Stone::Black, &[(2, 2)], &[]);
        let center_score = evaluate_for(&center, Stone::Black);
        for &(r, c) in &[(0u16, 0u16), (0, 4), (4, 0), (4, 4)] {
            let corner = board_with(5, 5, Stone::Black, &[(r, c)], &[]);
            assert!(
                center_score > evaluate_for(&corner, Stone::Black),
                "center must outrank corner ({r}, {c})"
            );
        }
    }

    #[test]
    fn test_weights_respect_severity_in_accumulation() {
        // An open four must outweigh a handful of scattered twos.
        let four = board_with(
            15,
            15,
            Stone::Black,
            &[(7, 4), (7, 5), (7, 6), (7, 7)],
            &[(0, 0), (0, 2), (0, 4)],
        );
        let twos = board_with(
            15,
            15,
            Stone::Black,
            &[(2, 2), (2, 3), (5, 2), (5, 3), (11, 2), (11, 3)],
            &[(0, 0), (0, 2), (0, 4), (0, 6), (0, 8)],
        );
        assert!(evaluate_for(&four, Stone::Black) > evaluate_for(&twos, Stone::Black));
    }

    #[test]
    fn test_sanity_magnitude_scale() {
        // A lone open three sits in the open-three band, well under a four.
        let board = board_with(
            15,
            15,
            Stone::Black,
            &[(7, 5), (7, 6), (7, 7)],
            &[(0, 0), (0, 2)],
        );
        let score = evaluate_for(&board, Stone::Black);
        assert!(score >= PatternScore::OPEN_THREE);
        assert!(score < PatternScore::OPEN_FOUR * 4);
    }
}
