use super::*;
use crate::problem::SolveError;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug)]
enum Push {
    Front(i64),
    Back(i64),
    Middle(i64),
}

/// Plain `Vec` with the same insertion positions, linear-time but obviously right.
fn reference(ops: &[Push]) -> Vec<i64> {
    let mut v = Vec::new();
    for op in ops {
        match *op {
            Push::Front(x) => v.insert(0, x),
            Push::Back(x) => v.push(x),
            Push::Middle(x) => v.insert((v.len() + 1) / 2, x),
        }
    }
    v
}

fn apply(t: &mut Teque<i64>, op: Push) {
    match op {
        Push::Front(x) => t.push_front(x),
        Push::Back(x) => t.push_back(x),
        Push::Middle(x) => t.push_middle(x),
    }
}

fn assert_balanced(t: &Teque<i64>) {
    let (f, b) = t.halves();
    assert!(f == b || f == b + 1, "unbalanced halves front={f} back={b}");
}

fn push_strategy() -> impl Strategy<Value = Push> {
    prop_oneof![
        any::<i64>().prop_map(Push::Front),
        any::<i64>().prop_map(Push::Back),
        any::<i64>().prop_map(Push::Middle),
    ]
}

#[test]
fn scenario_back_back_front() {
    let mut t = Teque::new();
    t.push_back(5);
    t.push_back(7);
    t.push_front(3);
    assert_eq!(t.get(0), Some(&3));
    assert_eq!(t.get(1), Some(&5));
    assert_eq!(t.get(2), Some(&7));
}

#[test]
fn scenario_middle_tie_break() {
    let mut t = Teque::new();
    t.push_middle(1);
    assert_eq!(t.halves(), (1, 0));
    t.push_middle(2);
    assert_eq!(t.halves(), (1, 1));
    assert_eq!(t.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    t.push_middle(3);
    assert_eq!(t.iter().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
}

#[test]
fn get_out_of_range_is_none() {
    let mut t = Teque::new();
    assert_eq!(t.get(0), None);
    t.push_back(1);
    assert_eq!(t.get(1), None);
    assert_eq!(t.get(usize::MAX), None);
}

#[test]
#[should_panic(expected = "out of range")]
fn index_out_of_range_panics() {
    let t: Teque<i64> = [1, 2].into_iter().collect();
    let _missing = t[2];
}

#[test]
fn collect_and_debug_follow_logical_order() {
    let t: Teque<i64> = (0..5).collect();
    assert_eq!(t.len(), 5);
    assert_eq!(t[4], 4);
    assert_eq!(format!("{t:?}"), "[0, 1, 2, 3, 4]");
    assert!(Teque::<i64>::default().is_empty());
}

#[test]
fn random_front_back_matches_vecdeque_seeded() {
    let mut rng = StdRng::seed_from_u64(1000);
    let mut t = Teque::new();
    let mut d = VecDeque::new();
    for _ in 0..1000 {
        let x: i64 = rng.gen_range(-1_000_000_000..=1_000_000_000);
        if rng.gen_bool(0.5) {
            t.push_front(x);
            d.push_front(x);
        } else {
            t.push_back(x);
            d.push_back(x);
        }
        assert_balanced(&t);
    }
    assert_eq!(t.len(), d.len());
    for i in 0..d.len() {
        assert_eq!(t.get(i), d.get(i), "mismatch at {i}");
    }
}

#[test]
fn run_commands_collects_gets_in_order() {
    let input = "9\npush_back 9\npush_front 3\npush_middle 5\nget 0\nget 1\nget 2\npush_middle 1\nget 1\nget 2\n";
    assert_eq!(run_commands(input).unwrap(), vec![3, 5, 9, 5, 1]);
    assert_eq!(solve(input).unwrap(), "3\n5\n9\n5\n1");
}

#[test]
fn run_commands_empty_output() {
    assert_eq!(solve("1\npush_back 4\n").unwrap(), "");
}

#[test]
fn unknown_command_is_reported_with_word() {
    let err = run_commands("1\npop_back 4\n").unwrap_err();
    assert!(matches!(err, SolveError::UnknownCommand { ref word } if word == "pop_back"));
}

#[test]
fn command_words_are_matched_whole() {
    // Single-character dispatch would have taken this for `get`.
    assert!(matches!(
        run_commands("1\ngrab 0\n"),
        Err(SolveError::UnknownCommand { .. })
    ));
}

#[test]
fn get_past_end_is_an_error() {
    let err = run_commands("2\npush_back 1\nget 1\n").unwrap_err();
    assert!(matches!(
        err,
        SolveError::IndexOutOfRange { index: 1, len: 1 }
    ));
}

#[test]
fn truncated_input_is_an_error() {
    assert!(matches!(
        run_commands("3\npush_back 1\n"),
        Err(SolveError::Input(_))
    ));
}

#[test]
fn command_display_reparses() {
    let cmds = [
        Command::PushBack(-2),
        Command::PushFront(7),
        Command::PushMiddle(0),
        Command::Get(3),
    ];
    let text = cmds.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ");
    let mut tokens = crate::input::Tokens::new(&text);
    for c in cmds {
        assert_eq!(Command::read(&mut tokens).unwrap(), c);
    }
}

proptest! {
    #[test]
    fn prop_halves_stay_balanced(ops in prop::collection::vec(push_strategy(), 0..200)) {
        let mut t = Teque::new();
        for op in ops {
            apply(&mut t, op);
            let (f, b) = t.halves();
            prop_assert!(f == b || f == b + 1, "front={} back={}", f, b);
        }
    }

    #[test]
    fn prop_matches_vec_reference(ops in prop::collection::vec(push_strategy(), 0..200)) {
        let mut t = Teque::new();
        for &op in &ops {
            apply(&mut t, op);
        }
        let expected = reference(&ops);
        prop_assert_eq!(t.len(), expected.len());
        for (i, x) in expected.iter().enumerate() {
            prop_assert_eq!(t.get(i), Some(x));
        }
        prop_assert_eq!(t.iter().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_get_is_idempotent(
        ops in prop::collection::vec(push_strategy(), 1..100),
        pick in any::<prop::sample::Index>()
    ) {
        let mut t = Teque::new();
        for op in ops {
            apply(&mut t, op);
        }
        let i = pick.index(t.len());
        let first = t.get(i).copied();
        let second = t.get(i).copied();
        prop_assert_eq!(first, second);
    }
}
