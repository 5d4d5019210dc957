//! Property tests for the session transition rules.
//!
//! Invariants covered:
//! - Field and piece masks keep one row per board row and never set bits past the columns.
//! - A move or descent never leaves a non-overlapping piece overlapping the field.
//! - Fusing without a line clear adds exactly the piece's cells to the field.
//! - No full row survives a fusion, and settled rows stay packed against the floor.
//! - Nothing changes after game over.
use proptest::prelude::*;

use bitris::core::GameSession;
use bitris::types::{Dimensions, GameAction};

const ACTIONS: [GameAction; 4] = [
    GameAction::MoveLeft,
    GameAction::MoveRight,
    GameAction::SoftDrop,
    GameAction::RotateCw,
];

fn assert_masks_well_formed(session: &GameSession) {
    let dims = session.dimensions();
    let full = dims.full_row();
    let rows = dims.rows() as usize;

    assert_eq!(session.field().rows().len(), rows);
    assert_eq!(session.active().occupancy().rows().len(), rows);
    for &r in session.field().rows() {
        assert_eq!(r & !full, 0);
        assert_ne!(r, full);
    }
    for &r in session.active().occupancy().rows() {
        assert_eq!(r & !full, 0);
    }
}

fn assert_field_packed(session: &GameSession) {
    let rows = session.field().rows();
    let first = rows.iter().position(|&r| r != 0).unwrap_or(rows.len());
    assert!(rows[first..].iter().all(|&r| r != 0), "gap in settled rows: {rows:?}");
}

fn dims_strategy() -> impl Strategy<Value = Dimensions> {
    (4u8..=24, 4u8..=24).prop_map(|(c, r)| Dimensions::new(c, r).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_rollouts_keep_invariants(
        dims in dims_strategy(),
        seed in any::<u32>(),
        script in prop::collection::vec(0usize..ACTIONS.len(), 1..400),
    ) {
        let mut session = GameSession::new(dims, seed);
        assert_masks_well_formed(&session);

        for idx in script {
            let action = ACTIONS[idx];
            let was_over = session.game_over();
            let before = session.render_state();
            let overlapped = session.field().collides(session.active().occupancy());
            let piece_cells = session.active().occupancy().cell_count();

            let changed = session.handle_input(action);
            let event = session.take_last_event();

            if was_over {
                prop_assert!(!changed);
                prop_assert_eq!(session.render_state(), before);
                continue;
            }

            assert_masks_well_formed(&session);
            assert_field_packed(&session);

            match event {
                Some(e) => {
                    prop_assert_eq!(action, GameAction::SoftDrop);
                    if e.lines_cleared == 0 && !overlapped {
                        let settled: u32 = before.field.iter().map(|r| r.count_ones()).sum();
                        prop_assert_eq!(
                            session.field().occupied_cells(),
                            settled + piece_cells
                        );
                    }
                }
                None => {
                    if action != GameAction::RotateCw && !overlapped {
                        prop_assert!(!session.field().collides(session.active().occupancy()));
                    }
                    prop_assert_eq!(session.field().rows(), before.field.as_slice());
                }
            }
        }
    }

    #[test]
    fn rejected_moves_change_nothing(
        dims in dims_strategy(),
        seed in any::<u32>(),
        lefts in 0usize..30,
    ) {
        let mut session = GameSession::new(dims, seed);
        for _ in 0..lefts {
            session.handle_input(GameAction::MoveLeft);
        }
        let before = session.render_state();
        if !session.handle_input(GameAction::MoveLeft) {
            prop_assert_eq!(session.render_state(), before);
        }
    }
}
