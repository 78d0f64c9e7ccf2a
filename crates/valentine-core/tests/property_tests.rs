//! Property-based tests for the show controller
//!
//! Uses proptest to verify the unlock gate, GIF distribution and the
//! at-most-one-active invariants under arbitrary input.

use std::time::Duration;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use valentine_core::assets::distribute_gifs;
use valentine_core::unlock::WRONG_ANSWER_HINT;
use valentine_core::{AssumeAvailable, ScreenId, Show, ShowConfig, UnlockGate, Verdict};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Operations a user (or timer) can perform on a running show
#[derive(Debug, Clone)]
enum ShowOp {
    Wait(u64),
    Show(u8),
    Submit(String),
    GifFailed(u8, usize),
}

fn show_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<ShowOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => (0..3000u64).prop_map(ShowOp::Wait),
            2 => (1..=5u8).prop_map(ShowOp::Show),
            1 => prop::string::string_regex(" ?[0-9]? ?")
                .expect("valid regex")
                .prop_map(ShowOp::Submit),
            1 => (1..=5u8, 0..4usize).prop_map(|(s, i)| ShowOp::GifFailed(s, i)),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Anything that does not trim to the answer is rejected
    #[test]
    fn non_answers_are_rejected(input in ".{0,20}") {
        let mut gate = UnlockGate::new("3");
        let verdict = gate.submit(&input).unwrap();
        if input.trim() == "3" {
            prop_assert_eq!(verdict, Verdict::Correct);
        } else if input.trim().is_empty() {
            prop_assert_eq!(verdict, Verdict::Empty);
        } else {
            prop_assert_eq!(verdict, Verdict::Incorrect);
            prop_assert_eq!(&gate.hint().unwrap().message, WRONG_ANSWER_HINT);
        }
    }

    /// The answer is accepted under any surrounding whitespace
    #[test]
    fn padded_answer_is_accepted(left in "[ \t\n]{0,5}", right in "[ \t\n]{0,5}") {
        let gate = UnlockGate::new("3");
        prop_assert_eq!(gate.check(&format!("{left}3{right}")), Verdict::Correct);
    }

    /// GIF at index i always lands on screen i % 5 + 1, in order
    #[test]
    fn gif_distribution_is_round_robin(count in 0..60usize) {
        let gifs: Vec<String> = (0..count).map(|i| i.to_string()).collect();
        let buckets = distribute_gifs(&gifs);
        prop_assert_eq!(buckets.values().map(Vec::len).sum::<usize>(), count);
        for (screen, paths) in &buckets {
            let indices: Vec<usize> = paths.iter().map(|p| p.parse().unwrap()).collect();
            let expected: Vec<usize> = (0..count)
                .filter(|i| ScreenId::for_index(*i) == *screen)
                .collect();
            prop_assert_eq!(indices, expected);
        }
    }

    /// At most one screen and at most one GIF per screen are ever active
    #[test]
    fn at_most_one_active(ops in show_ops_strategy(40)) {
        let mut rng = StdRng::seed_from_u64(5);
        let mut show = Show::boot(ShowConfig::default(), &AssumeAvailable, &mut rng);
        let mut now = Duration::ZERO;

        for op in ops {
            match op {
                ShowOp::Wait(delta) => {
                    now += Duration::from_millis(delta);
                    show.advance_to(now);
                }
                ShowOp::Show(n) => show.show_screen(ScreenId::new(n).unwrap()),
                ShowOp::Submit(text) => {
                    show.submit_answer(&text);
                }
                ShowOp::GifFailed(n, index) => {
                    show.report_gif_failed(ScreenId::new(n).unwrap(), index);
                }
            }

            prop_assert!(show.deck().active_count() <= 1);
            prop_assert!(show.animator().live_screens().len() <= 1);
            for screen in ScreenId::all() {
                prop_assert!(show.animator().active_count(screen) <= 1);
            }
        }

        // Once the fade timers settle, exactly one screen is active.
        now += Duration::from_millis(5000);
        show.advance_to(now);
        prop_assert_eq!(show.deck().active_count(), 1);
    }
}
