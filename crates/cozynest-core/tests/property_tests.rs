//! Property-based tests for the breathing timer state machine.

use cozynest_core::{BreathingPhase, BreathingTimer, CIRCLE_MAX, CIRCLE_MIN};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Action {
    Tick,
    Start,
    Pause,
    Toggle,
    Reset,
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        5 => Just(Action::Tick),
        1 => Just(Action::Start),
        1 => Just(Action::Pause),
        1 => Just(Action::Toggle),
        1 => Just(Action::Reset),
    ]
}

proptest! {
    /// The countdown never leaves `[1, duration]` and cycles only increment
    /// on the Exhale -> Inhale wrap, whatever the user does.
    #[test]
    fn invariants_hold_under_arbitrary_action_sequences(
        actions in prop::collection::vec(action_strategy(), 0..200)
    ) {
        let mut timer = BreathingTimer::new();
        for action in actions {
            let before = timer;
            match action {
                Action::Tick => timer.tick(),
                Action::Start => timer.start(),
                Action::Pause => timer.pause(),
                Action::Toggle => timer.toggle(),
                Action::Reset => timer.reset(),
            }

            let remaining = timer.remaining_seconds();
            prop_assert!(remaining >= 1);
            prop_assert!(remaining <= timer.phase().duration());

            // completed_cycles is monotone except for reset, and moves by at
            // most one per action, only on the Exhale boundary
            match action {
                Action::Reset => prop_assert_eq!(timer.completed_cycles(), 0),
                _ => {
                    let delta = timer.completed_cycles() - before.completed_cycles();
                    prop_assert!(delta <= 1);
                    if delta == 1 {
                        prop_assert_eq!(before.phase(), BreathingPhase::Exhale);
                        prop_assert_eq!(before.remaining_seconds(), 1);
                        prop_assert_eq!(timer.phase(), BreathingPhase::Inhale);
                    }
                }
            }

            // The derived circle size stays within its display bounds
            let scale = cozynest_core::circle_scale(timer.phase(), remaining);
            prop_assert!((CIRCLE_MIN..=CIRCLE_MAX).contains(&scale));
        }
    }

    /// Pausing then resuming without a tick is invisible to the countdown.
    #[test]
    fn pause_resume_is_idempotent(ticks in 0u32..40) {
        let mut timer = BreathingTimer::new();
        timer.start();
        for _ in 0..ticks {
            timer.tick();
        }
        let phase = timer.phase();
        let remaining = timer.remaining_seconds();
        let cycles = timer.completed_cycles();

        timer.pause();
        timer.start();

        prop_assert_eq!(timer.phase(), phase);
        prop_assert_eq!(timer.remaining_seconds(), remaining);
        prop_assert_eq!(timer.completed_cycles(), cycles);
    }

    /// Reset is total: any reachable state collapses to the initial one.
    #[test]
    fn reset_is_total(ticks in 0u32..100, pause_first in any::<bool>()) {
        let mut timer = BreathingTimer::new();
        timer.start();
        for _ in 0..ticks {
            timer.tick();
        }
        if pause_first {
            timer.pause();
        }

        timer.reset();
        prop_assert_eq!(timer, BreathingTimer::new());
    }
}
