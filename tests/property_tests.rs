//! Algebraic laws of the toggle system, checked with proptest.
//!
//! Toggling is linear over GF(2): every mask is self-inverse and any
//! two masks commute, so only the multiset of clicks (reduced mod 2)
//! determines the final pattern.

use proptest::prelude::*;

use lights_out::{mask_for, GameRng, GridPos, Lights, Session};

fn any_tile() -> impl Strategy<Value = GridPos> {
    (0u8..9).prop_map(GridPos::new)
}

fn any_board() -> impl Strategy<Value = Lights> {
    (0u16..512).prop_map(Lights::from_bits)
}

proptest! {
    /// Every click flips its own tile.
    #[test]
    fn mask_includes_own_tile(pos in any_tile()) {
        prop_assert!(mask_for(pos).includes(pos));
    }

    /// Applying the same mask twice is the identity.
    #[test]
    fn toggle_is_self_inverse(board in any_board(), pos in any_tile()) {
        let mask = mask_for(pos).flips();
        prop_assert_eq!(board.toggled(mask).toggled(mask), board);
    }

    /// Any two masks commute.
    #[test]
    fn toggles_commute(board in any_board(), a in any_tile(), b in any_tile()) {
        let (ma, mb) = (mask_for(a).flips(), mask_for(b).flips());
        prop_assert_eq!(board.toggled(ma).toggled(mb), board.toggled(mb).toggled(ma));
    }

    /// The final pattern is invariant under any permutation of the
    /// click sequence. Sorting is a canonical permutation; pairwise
    /// commutativity lifts the result to all others.
    #[test]
    fn click_order_is_irrelevant(
        board in any_board(),
        clicks in prop::collection::vec(any_tile(), 0..12),
    ) {
        let applied = clicks
            .iter()
            .fold(board, |acc, &p| acc.toggled(mask_for(p).flips()));

        let mut sorted = clicks.clone();
        sorted.sort();
        let applied_sorted = sorted
            .iter()
            .fold(board, |acc, &p| acc.toggled(mask_for(p).flips()));

        prop_assert_eq!(applied, applied_sorted);
    }

    /// Solved means exactly "all bits zero".
    #[test]
    fn solved_iff_dark(bits in 0u16..512) {
        let board = Lights::from_bits(bits);
        prop_assert_eq!(board.is_dark(), bits == 0);
    }

    /// Engine-level double click restores the lights whenever the
    /// guard admits both clicks.
    #[test]
    fn session_double_click_restores_lights(pos in any_tile(), seed in any::<u64>()) {
        let game = Session::new().new_game(&mut GameRng::new(seed));

        let once = game.click(pos);
        prop_assume!(!once.is_solved());

        let twice = once.click(pos);
        prop_assert_eq!(twice.lights(), game.lights());
    }

    /// New games are always startable and never pre-solved.
    #[test]
    fn new_game_never_solved(seed in any::<u64>()) {
        let game = Session::new().new_game(&mut GameRng::new(seed));
        prop_assert!(game.instructions_seen());
        prop_assert!(!game.is_solved());
        prop_assert!((1..512).contains(&game.lights().bits()));
    }

    /// Clicks never escape the 9-bit board.
    #[test]
    fn toggle_preserves_board_range(board in any_board(), pos in any_tile()) {
        let next = board.toggled(mask_for(pos).flips());
        prop_assert!(next.bits() < 512);
    }
}
