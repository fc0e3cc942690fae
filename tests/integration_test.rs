// Integration tests for the step recorder, drivers and playback controller

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sortty::algorithms::{reference, Algorithm};
use sortty::buffer::{Annotation, Counters, ValueBuffer};
use sortty::config::Config;
use sortty::playback::{Command, Mode, PlaybackController, MAX_SPEED, MIN_SPEED};
use sortty::step::StepKind;

/// Every permutation of `1..=n` (Heap's algorithm)
fn permutations(n: usize) -> Vec<Vec<u32>> {
    fn generate(k: usize, values: &mut Vec<u32>, out: &mut Vec<Vec<u32>>) {
        if k <= 1 {
            out.push(values.clone());
            return;
        }
        for i in 0..k - 1 {
            generate(k - 1, values, out);
            if k % 2 == 0 {
                values.swap(i, k - 1);
            } else {
                values.swap(0, k - 1);
            }
        }
        generate(k - 1, values, out);
    }

    let mut values: Vec<u32> = (1..=n as u32).collect();
    let mut out = Vec::new();
    generate(n, &mut values, &mut out);
    out
}

fn shuffled(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut values: Vec<u32> = (1..=n as u32).collect();
    values.shuffle(&mut rng);
    values
}

/// Record, replay, and check the result against the reference implementation
fn check_run(algorithm: Algorithm, values: &[u32]) {
    let sequence = algorithm.record(values);
    assert!(
        sequence.validate().is_ok(),
        "{:?} on {:?}: {:?}",
        algorithm,
        values,
        sequence.validate()
    );

    let (buffer, counters) = sequence.replay(&ValueBuffer::from_values(values.to_vec()));
    assert!(
        buffer.is_sorted(),
        "{:?} left {:?} unsorted (input {:?})",
        algorithm,
        buffer.values(),
        values
    );
    assert_eq!(counters, sequence.totals());

    let mut expected_values = values.to_vec();
    let expected = reference::sort(algorithm, &mut expected_values);
    assert_eq!(
        counters, expected,
        "{:?} counters differ from reference on {:?}",
        algorithm, values
    );
}

fn controller(algorithm: Algorithm, values: Vec<u32>) -> PlaybackController {
    let config = Config {
        algorithm,
        element_count: values.len(),
        ..Config::default()
    }
    .with_seed(99);
    let mut controller = PlaybackController::new(config);
    controller.load_permutation(values);
    controller
}

fn run_to_end(controller: &mut PlaybackController) -> usize {
    controller.command(Command::Start);
    let mut ticks = 0;
    while controller.mode() == Mode::Running {
        controller.pulse();
        ticks += 1;
    }
    ticks
}

// === CORRECTNESS AND COUNTERS ===

#[test]
fn test_all_permutations_up_to_five() {
    for n in 1..=5 {
        for values in permutations(n) {
            for algorithm in Algorithm::ALL {
                check_run(algorithm, &values);
            }
        }
    }
}

#[test]
fn test_random_permutations_of_preset_sizes() {
    for n in [1, 2, 3, 5, 25, 100] {
        for seed in 0..8 {
            let values = shuffled(n, seed);
            for algorithm in Algorithm::ALL {
                check_run(algorithm, &values);
            }
        }
    }
}

#[test]
fn test_worst_case_inputs() {
    let reversed: Vec<u32> = (1..=100).rev().collect();
    let sorted: Vec<u32> = (1..=100).collect();
    for algorithm in Algorithm::ALL {
        check_run(algorithm, &reversed);
        check_run(algorithm, &sorted);
    }
}

#[test]
fn test_final_step_only_settles() {
    // Intermediate steps come straight from the working copy, so the buffer is
    // already sorted before the closing settle step runs
    for algorithm in Algorithm::ALL {
        let values = shuffled(50, 5);
        let sequence = algorithm.record(&values);
        let last = sequence.len() - 1;

        let closing = sequence.get(last).unwrap();
        assert_eq!(closing.kind, StepKind::Settle);
        assert!(closing.edits.is_empty());

        let (buffer, _) = sequence.replay_skipping(&ValueBuffer::from_values(values), last);
        assert!(buffer.is_sorted(), "{:?}", algorithm);
    }
}

#[test]
fn test_settled_slots_hold_their_final_values() {
    let mut inputs = vec![vec![7, 3, 9, 1, 5, 2, 8, 4, 6, 10]];
    inputs.extend((0..4).map(|seed| shuffled(30, seed)));

    for values in inputs {
        for algorithm in Algorithm::ALL {
            let sequence = algorithm.record(&values);
            let mut buffer = ValueBuffer::from_values(values.clone());
            let mut counters = Counters::default();

            for (index, step) in sequence.iter().enumerate() {
                step.apply(&mut buffer, &mut counters);
                for (k, annotation) in buffer.annotations().iter().enumerate() {
                    if *annotation == Annotation::Settled {
                        assert_eq!(
                            buffer.values()[k],
                            k as u32 + 1,
                            "{:?} step {}: slot {} settled too early in {:?}",
                            algorithm,
                            index,
                            k,
                            buffer.values()
                        );
                    }
                }
            }
            assert!(buffer.annotations().iter().all(|a| *a == Annotation::Settled));
        }
    }
}

#[test]
fn test_bubble_resettles_finished_tail_every_step() {
    let values = vec![7, 3, 9, 1, 5, 2, 8, 4, 6, 10];
    let n = values.len();
    let sequence = Algorithm::Bubble.record(&values);
    let mut buffer = ValueBuffer::from_values(values);
    let mut counters = Counters::default();
    let mut steps = sequence.iter();

    for i in 0..n - 1 {
        for j in 0..n - 1 - i {
            let step = steps.next().unwrap();
            assert_eq!(step.kind, StepKind::Compare);
            step.apply(&mut buffer, &mut counters);

            let annotations = buffer.annotations();
            assert!(
                annotations[n - i..].iter().all(|a| *a == Annotation::Settled),
                "pass {} compare {}: {:?}",
                i,
                j,
                annotations
            );
            assert!(annotations[..n - i].iter().all(|a| *a != Annotation::Settled));
        }
    }

    // Only the closing step remains
    assert_eq!(steps.next().unwrap().kind, StepKind::Settle);
    assert!(steps.next().is_none());
}

// === DETERMINISM AND ORDER DEPENDENCE ===

#[test]
fn test_recording_is_deterministic() {
    for algorithm in Algorithm::ALL {
        let values = shuffled(75, 17);
        assert_eq!(algorithm.record(&values), algorithm.record(&values));
    }
}

#[test]
fn test_seeded_controllers_agree() {
    let config = Config::default().with_seed(1234);
    let mut a = PlaybackController::new(config.clone());
    let mut b = PlaybackController::new(config);
    assert_eq!(a.buffer(), b.buffer());

    a.command(Command::Reset);
    b.command(Command::Reset);
    assert_eq!(a.buffer(), b.buffer());

    run_to_end(&mut a);
    run_to_end(&mut b);
    assert_eq!(a.counters(), b.counters());
}

#[test]
fn test_skipping_a_step_breaks_the_sort() {
    for algorithm in Algorithm::ALL {
        let values = shuffled(25, 3);
        let initial = ValueBuffer::from_values(values.clone());
        let sequence = algorithm.record(&values);

        let broken = (0..sequence.len())
            .filter(|&skip| !sequence.replay_skipping(&initial, skip).0.is_sorted())
            .count();
        assert!(broken > 0, "{:?}: every single-step skip still sorted", algorithm);
    }
}

#[test]
fn test_steps_stay_in_range_for_every_size() {
    for n in 1..=40 {
        let values = shuffled(n, n as u64);
        for algorithm in Algorithm::ALL {
            let sequence = algorithm.record(&values);
            assert_eq!(sequence.element_count(), n);
            assert!(sequence.validate().is_ok());
        }
    }
}

// === CONCRETE SCENARIOS ===

#[test]
fn test_bubble_reversed_five() {
    let mut c = controller(Algorithm::Bubble, vec![5, 4, 3, 2, 1]);
    run_to_end(&mut c);

    assert_eq!(c.mode(), Mode::Finished);
    assert_eq!(c.buffer().values(), &[1, 2, 3, 4, 5]);
    assert_eq!(c.counters(), Counters::new(10, 10));
}

#[test]
fn test_selection_on_sorted_input() {
    let mut c = controller(Algorithm::Selection, vec![1, 2, 3, 4, 5]);
    run_to_end(&mut c);

    assert_eq!(c.buffer().values(), &[1, 2, 3, 4, 5]);
    assert_eq!(c.counters(), Counters::new(10, 0));
}

#[test]
fn test_single_element_every_algorithm() {
    for algorithm in Algorithm::ALL {
        let sequence = algorithm.record(&[1]);
        assert!(sequence.len() >= 1);
        assert_eq!(sequence.totals().comparisons, 0);

        let mut c = controller(algorithm, vec![1]);
        run_to_end(&mut c);
        assert_eq!(c.mode(), Mode::Finished);
        assert_eq!(c.buffer().values(), &[1]);
        assert_eq!(c.counters().comparisons, 0);
    }
}

#[test]
fn test_higher_speed_needs_fewer_ticks() {
    let values = shuffled(50, 8);

    let mut slow = controller(Algorithm::Bubble, values.clone());
    for _ in 0..10 {
        slow.command(Command::SpeedDown);
    }
    assert_eq!(slow.speed(), MIN_SPEED);

    let mut fast = controller(Algorithm::Bubble, values);
    for _ in 0..10 {
        fast.command(Command::SpeedUp);
    }
    assert_eq!(fast.speed(), MAX_SPEED);

    let slow_ticks = run_to_end(&mut slow);
    let fast_ticks = run_to_end(&mut fast);
    assert!(fast_ticks < slow_ticks, "{} vs {}", fast_ticks, slow_ticks);
    assert_eq!(slow.counters(), fast.counters());
}

// === IDLE / FINISHED BOUNDARIES ===

#[test]
fn test_tick_on_idle_is_noop() {
    let mut c = controller(Algorithm::Heap, vec![3, 5, 1, 4, 2]);
    let before = c.buffer().clone();

    c.pulse();
    c.tick(std::time::Duration::from_secs(1));

    assert_eq!(c.mode(), Mode::Idle);
    assert_eq!(c.buffer(), &before);
    assert_eq!(c.snapshot().cursor, 0);
}

#[test]
fn test_finished_ignores_tick_and_pause() {
    let mut c = controller(Algorithm::Merge, vec![3, 5, 1, 4, 2]);
    run_to_end(&mut c);
    let before = c.buffer().clone();
    let counters = c.counters();

    c.pulse();
    c.command(Command::Pause);
    c.command(Command::Start);
    c.command(Command::StepOnce);

    assert_eq!(c.mode(), Mode::Finished);
    assert_eq!(c.buffer(), &before);
    assert_eq!(c.counters(), counters);
    assert!(c
        .buffer()
        .annotations()
        .iter()
        .all(|a| *a == Annotation::Settled));
}

#[test]
fn test_reset_from_finished_reshuffles() {
    let mut c = controller(Algorithm::Quick, (1..=25).rev().collect());
    run_to_end(&mut c);
    assert!(c.buffer().is_sorted());

    c.command(Command::Reset);
    let snapshot = c.snapshot();
    assert_eq!(snapshot.mode, Mode::Idle);
    assert_eq!(snapshot.element_count, 25);
    assert_eq!(snapshot.cursor, 0);
    assert_eq!(snapshot.sequence_len, 0);
    assert_eq!(snapshot.comparisons, 0);
    assert!(!c.buffer().is_sorted());
    assert!(snapshot.annotations.iter().all(|a| *a == Annotation::Idle));
}

#[test]
fn test_counters_only_grow_while_running() {
    let mut c = controller(Algorithm::Insertion, shuffled(30, 2));
    c.command(Command::Start);
    let mut last = c.counters();
    while c.mode() == Mode::Running {
        c.pulse();
        let now = c.counters();
        assert!(now.comparisons >= last.comparisons);
        assert!(now.mutations >= last.mutations);
        last = now;
    }
}
