//! Property-based tests for states and search.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated rings.

use fivebuttons::core::{Color, State};
use fivebuttons::search::{search, Search, SearchError};
use proptest::prelude::*;
use std::collections::{HashMap, VecDeque};

prop_compose! {
    fn arbitrary_state(max_lights: usize)(
        colors in prop::collection::vec(0..3usize, 3..=max_lights)
    ) -> State {
        let text: String = colors.into_iter().map(|i| Color::ALL[i].glyph()).collect();
        State::parse(&text).unwrap()
    }
}

fn state_and_button(max_lights: usize) -> impl Strategy<Value = (State, usize)> {
    arbitrary_state(max_lights).prop_flat_map(|state| {
        let lights = state.len();
        (Just(state), 0..lights)
    })
}

fn state_and_pushes(max_lights: usize) -> impl Strategy<Value = (State, Vec<usize>)> {
    arbitrary_state(max_lights).prop_flat_map(|state| {
        let lights = state.len();
        (Just(state), prop::collection::vec(0..lights, 0..8))
    })
}

/// Plain breadth-first distances from `start` to every reachable state.
fn distances(start: &State) -> HashMap<State, usize> {
    let mut dist = HashMap::from([(start.clone(), 0)]);
    let mut queue = VecDeque::from([start.clone()]);
    while let Some(state) = queue.pop_front() {
        let d = dist[&state];
        for button in state.buttons() {
            let next = state.push(button).unwrap();
            if !dist.contains_key(&next) {
                dist.insert(next.clone(), d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

fn color_sum(state: &State) -> usize {
    state.lights().iter().map(|c| *c as usize).sum()
}

/// A start and a same-length goal whose color sums differ mod 3.
fn unreachable_pair(max_lights: usize) -> impl Strategy<Value = (State, State)> {
    arbitrary_state(max_lights)
        .prop_flat_map(|start| {
            let lights = start.len();
            (Just(start), prop::collection::vec(0..3usize, lights))
        })
        .prop_map(|(start, mut colors)| {
            let goal_sum: usize = colors.iter().sum();
            if goal_sum % 3 == color_sum(&start) % 3 {
                colors[0] = (colors[0] + 1) % 3;
            }
            let text: String = colors.into_iter().map(|i| Color::ALL[i].glyph()).collect();
            (start, State::parse(&text).unwrap())
        })
}

proptest! {
    #[test]
    fn printable_state_roundtrips(state in arbitrary_state(12)) {
        let parsed = State::parse(&state.printable_state()).unwrap();
        prop_assert_eq!(parsed, state);
    }

    #[test]
    fn lowercase_parses_like_uppercase(state in arbitrary_state(12)) {
        let lower = state.printable_state().to_lowercase();
        prop_assert_eq!(State::parse(&lower).unwrap(), state);
    }

    #[test]
    fn three_pushes_are_identity((state, button) in state_and_button(12)) {
        let pushed = state
            .push(button)
            .and_then(|s| s.push(button))
            .and_then(|s| s.push(button))
            .unwrap();
        prop_assert_eq!(pushed, state);
    }

    #[test]
    fn push_only_touches_button_and_neighbors((state, button) in state_and_button(12)) {
        let n = state.len();
        let pushed = state.push(button).unwrap();
        prop_assert_eq!(pushed.len(), n);

        let touched = [(button + n - 1) % n, button, (button + 1) % n];
        for (i, (before, after)) in state.lights().iter().zip(pushed.lights()).enumerate() {
            if touched.contains(&i) {
                prop_assert_eq!(before.next(), *after);
            } else {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn pushes_commute((state, button) in state_and_button(8), other in any::<prop::sample::Index>()) {
        let other = other.index(state.len());
        let ab = state.push(button).unwrap().push(other).unwrap();
        let ba = state.push(other).unwrap().push(button).unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn push_rejects_buttons_past_the_end(state in arbitrary_state(12), extra in 0..5usize) {
        prop_assert!(state.push(state.len() + extra).is_err());
    }

    #[test]
    fn same_start_and_goal_is_zero_moves(state in arbitrary_state(8), budget in 0..50usize) {
        let path = search(&state, &state, budget).unwrap();
        let lines = path.printable_path();
        prop_assert_eq!(lines.len(), 1);
        prop_assert!(lines[0].starts_with(" : "));
        prop_assert_eq!(path.moves(), 0);
    }

    #[test]
    fn zero_budget_never_expands(start in arbitrary_state(6), goal in arbitrary_state(6)) {
        prop_assume!(start != goal);
        let result = search(&start, &goal, 0);
        let budget_exceeded = matches!(result, Err(SearchError::SearchBudgetExceeded { .. }));
        prop_assert!(budget_exceeded);
    }

    #[test]
    fn found_paths_are_shortest((start, pushes) in state_and_pushes(6)) {
        let mut goal = start.clone();
        for button in &pushes {
            goal = goal.push(*button).unwrap();
        }

        let path = search(&start, &goal, 10_000).unwrap();
        prop_assert_eq!(path.moves(), distances(&start)[&goal]);
        prop_assert!(path.moves() <= pushes.len());
    }

    #[test]
    fn found_paths_replay_to_goal((start, pushes) in state_and_pushes(6)) {
        let mut goal = start.clone();
        for button in &pushes {
            goal = goal.push(*button).unwrap();
        }

        let path = search(&start, &goal, 10_000).unwrap();
        prop_assert_eq!(path.start(), &start);
        prop_assert_eq!(path.end(), &goal);

        let steps = path.steps();
        for pair in steps.windows(2) {
            let button = pair[1].button.unwrap();
            prop_assert_eq!(pair[0].state.push(button).unwrap(), pair[1].state.clone());
        }
    }

    #[test]
    fn color_sum_mismatch_is_unreachable((start, goal) in unreachable_pair(6)) {
        let no_path = matches!(
            search(&start, &goal, 10_000),
            Err(SearchError::NoPathExists { .. })
        );
        prop_assert!(no_path);
    }

    #[test]
    fn budget_is_never_exceeded(
        (start, pushes) in state_and_pushes(6),
        budget in 0..40usize
    ) {
        let mut goal = start.clone();
        for button in &pushes {
            goal = goal.push(*button).unwrap();
        }

        match Search::new(&start, &goal).max_states(budget).run() {
            Ok(solution) => {
                prop_assert!(solution.transitions_expanded <= budget);
            }
            Err(SearchError::SearchBudgetExceeded { max_states, .. }) => {
                prop_assert_eq!(max_states, budget);
            }
            Err(SearchError::NoPathExists { .. }) => {
                prop_assert!(false, "goal was built from start and must be reachable");
            }
        }
    }
}
