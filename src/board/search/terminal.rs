//! Closed-form tactical verdicts: immediate wins and forced losses.

use crate::board::{Action, GameState};

use super::resolve::resolve;

/// What the evaluator found at a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerdictKind {
    /// The side to move completes a window this ply
    Win,
    /// The opponent has two distinct winning cells; one cannot be blocked
    ForcedLoss,
    /// No tactical signal; the action is a positional default
    Quiet,
}

/// Score and recommended action for a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub kind: VerdictKind,
    /// Nonzero only for `Win` and `ForcedLoss`
    pub score: i32,
    pub action: Option<Action>,
}

/// Evaluate `state` for the side to move.
///
/// 1. A window holding `win_size - 1` own stones and one empty cell wins
///    immediately: score `sign * empties`.
/// 2. Two distinct opponent completion cells mean a forced loss: score
///    `-sign * (empties - 1)`, recommending the first blocking cell found.
/// 3. Otherwise score 0 with the first empty corner (top-left, top-right,
///    bottom-left, bottom-right), else the first empty cell in row-major
///    order, else no action.
#[must_use]
pub fn evaluate(state: &GameState) -> Verdict {
    let player = state.current_player();
    let opponent = player.opponent();
    let sign = player.sign();
    let empties = state.board().empty_count() as i32;
    let needed = state.win_size().saturating_sub(1);
    let corr = state.corr();

    let win = corr
        .windows()
        .filter(|w| w.counts.empty == 1 && w.counts.of(player) == needed)
        .find_map(|w| resolve(state, w.row, w.col, w.orientation));
    if let Some(action) = win {
        return Verdict {
            kind: VerdictKind::Win,
            score: sign * empties,
            action: Some(action),
        };
    }

    let mut blocks: Vec<Action> = Vec::with_capacity(2);
    for w in corr.windows() {
        if w.counts.empty != 1 || w.counts.of(opponent) != needed {
            continue;
        }
        let Some(cell) = resolve(state, w.row, w.col, w.orientation) else {
            continue;
        };
        if !blocks.contains(&cell) {
            blocks.push(cell);
        }
        if blocks.len() > 1 {
            return Verdict {
                kind: VerdictKind::ForcedLoss,
                score: -sign * (empties - 1),
                action: Some(blocks[0]),
            };
        }
    }

    Verdict {
        kind: VerdictKind::Quiet,
        score: 0,
        action: fallback_action(state),
    }
}

/// First empty corner, else the first empty cell in row-major order.
fn fallback_action(state: &GameState) -> Option<Action> {
    let n = state.board_size();
    if n == 0 {
        return None;
    }
    let board = state.board();
    let last = n - 1;
    [Action(0, 0), Action(0, last), Action(last, 0), Action(last, last)]
        .into_iter()
        .find(|a| board.is_empty(a.row(), a.col()))
        .or_else(|| board.empty_cells().next())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_prefers_top_left_corner() {
        let verdict = evaluate(&GameState::new(5, 4));
        assert_eq!(verdict.kind, VerdictKind::Quiet);
        assert_eq!(verdict.score, 0);
        assert_eq!(verdict.action, Some(Action(0, 0)));
    }

    #[test]
    fn corner_order_then_row_major() {
        let state: GameState = "win=3\nX...\n....\n....\n....".parse().unwrap();
        assert_eq!(evaluate(&state).action, Some(Action(0, 3)));

        let state: GameState = "win=3\nX..O\n....\n....\nO..X".parse().unwrap();
        let verdict = evaluate(&state);
        assert_eq!(verdict.kind, VerdictKind::Quiet);
        assert_eq!(verdict.action, Some(Action(0, 1)));
    }

    #[test]
    fn immediate_win_scores_empties_for_mover() {
        let state: GameState = "win=3\nXX.\nOO.\n...".parse().unwrap();
        let verdict = evaluate(&state);
        assert_eq!(verdict.kind, VerdictKind::Win);
        assert_eq!(verdict.score, 5);
        assert_eq!(verdict.action, Some(Action(0, 2)));
    }

    #[test]
    fn immediate_win_for_min_is_negative() {
        let state: GameState = "win=3\nXX.\nOO.\nX..".parse().unwrap();
        let verdict = evaluate(&state);
        assert_eq!(verdict.kind, VerdictKind::Win);
        assert_eq!(verdict.score, -4);
        assert_eq!(verdict.action, Some(Action(1, 2)));
    }

    #[test]
    fn double_threat_is_forced_loss() {
        let state: GameState = "win=3\nOO...\n...X.\nO....\n.....\nX...X".parse().unwrap();
        let verdict = evaluate(&state);
        assert_eq!(verdict.kind, VerdictKind::ForcedLoss);
        assert_eq!(verdict.score, -18);
        assert_eq!(verdict.action, Some(Action(0, 2)));
    }

    #[test]
    fn single_threat_falls_through() {
        let state: GameState = "win=3\nOO...\n.....\n.....\n...X.\nX....".parse().unwrap();
        let verdict = evaluate(&state);
        assert_eq!(verdict.kind, VerdictKind::Quiet);
        assert_eq!(verdict.score, 0);
        assert_eq!(verdict.action, Some(Action(0, 4)));
    }

    #[test]
    fn full_board_has_no_action() {
        let state: GameState = "win=3\nXOX\nXOO\nOXX".parse().unwrap();
        let verdict = evaluate(&state);
        assert_eq!(verdict.score, 0);
        assert_eq!(verdict.action, None);
    }
}
