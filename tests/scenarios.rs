//! End-to-end runs with fully scripted randomness, traced by hand.

mod common;

use common::{Recorder, ScriptedSource};
use u_strevo::{ConsoleReporter, EvoConfig, EvoRunner};

// ---- Target "AB", population 4, mutation rate 0 ----

#[test]
fn test_ab_converges_on_first_crossover() {
    let config = EvoConfig::default()
        .with_target("AB")
        .with_max_population(4)
        .with_mutation_rate(0.0);

    // Initial population: "Ax" (50), "yB" (50), "qq" (0), "rr" (0).
    // The parents are "Ax" and "yB" in either order; crossover at 1 yields
    // "AB" and "yx" regardless of which comes first.
    let mut source = ScriptedSource::new("AxyBqqrr", 0.5);
    let mut recorder = Recorder::default();

    let result = EvoRunner::run_with_source(&config, &mut source, &mut recorder).unwrap();

    assert!(result.converged);
    assert_eq!(result.attempts, 1);
    assert_eq!(result.generations, 1);
    assert_eq!(result.best.candidate.to_string(), "AB");
    assert_eq!(result.fitness_history, vec![50.0, 100.0]);

    assert_eq!(recorder.reports.len(), 2);
    assert_eq!(recorder.reports[0].best.fitness, 50.0);
    assert_eq!(recorder.trace()[1], ("AB".to_string(), 100.0));

    // Rate 0 still rolls once per character of both children, but never
    // draws a replacement gene.
    assert_eq!(source.rolls_drawn, 4);
    assert_eq!(source.genes_drawn, 8);
    assert_eq!(source.remaining_genes(), 0);
}

#[test]
fn test_ab_without_reachable_crossover_spins_until_cap() {
    let config = EvoConfig::default()
        .with_target("AB")
        .with_max_population(4)
        .with_mutation_rate(0.0)
        .with_max_generations(50);

    // Parents "Ax" and "Ay" only ever recombine into themselves.
    let mut source = ScriptedSource::new("AxAyqqrr", 0.5);
    let mut recorder = Recorder::default();

    let result = EvoRunner::run_with_source(&config, &mut source, &mut recorder).unwrap();

    assert!(!result.converged);
    assert_eq!(result.attempts, 50);
    assert_eq!(result.generations, 0);
    assert_eq!(recorder.reports.len(), 1);
    assert_eq!(source.rolls_drawn, 50 * 4);
}

// ---- Target "Hi", population 2, mutation rate 1 ----

/// Gene script for the "Hi" trace.
///
/// | draw      | genes     | population / parents      | outcome              |
/// |-----------|-----------|---------------------------|----------------------|
/// | initial   | `ab` `cd` | {ab: 0, cd: 0}            | report 0: ab 0%      |
/// | attempt 1 | `Hz` `qq` | mutants Hz 50, qq 0       | improved, report 1   |
/// | attempt 2 | `zz` `yy` | mutants 0, 0              | discarded            |
/// | attempt 3 | `ai` `Hq` | mutants 50, 50 (not > 50) | discarded            |
/// | attempt 4 | `Hi` `xx` | mutants Hi 100, xx 0      | improved, converged  |
///
/// With rate 1 every position is redrawn, so the crossover children never
/// show through.
const HI_SCRIPT: &str = "abcdHzqqzzyyaiHqHixx";

fn hi_config() -> EvoConfig {
    EvoConfig::default()
        .with_target("Hi")
        .with_max_population(2)
        .with_mutation_rate(1.0)
}

#[test]
fn test_hi_hand_traced_generations() {
    let mut source = ScriptedSource::new(HI_SCRIPT, 0.5);
    let mut recorder = Recorder::default();

    let result = EvoRunner::run_with_source(&hi_config(), &mut source, &mut recorder).unwrap();

    assert_eq!(
        recorder.trace(),
        vec![
            ("ab".to_string(), 0.0),
            ("Hz".to_string(), 50.0),
            ("Hi".to_string(), 100.0),
        ]
    );
    let attempts: Vec<u64> = recorder.reports.iter().map(|r| r.attempts).collect();
    assert_eq!(attempts, vec![0, 1, 4]);
    let generations: Vec<u64> = recorder.reports.iter().map(|r| r.generation).collect();
    assert_eq!(generations, vec![0, 1, 2]);

    assert!(result.converged);
    assert_eq!(result.attempts, 4);
    assert_eq!(result.generations, 2);
    assert_eq!(result.best.candidate.to_string(), "Hi");

    // Rate 1: one roll and one replacement gene per character, 4 characters
    // per attempt, after the 4 genes of the initial population.
    assert_eq!(source.rolls_drawn, 16);
    assert_eq!(source.genes_drawn, 4 + 16);
    assert_eq!(source.remaining_genes(), 0);
}

#[test]
fn test_hi_console_output() {
    let mut source = ScriptedSource::new(HI_SCRIPT, 0.5);
    let mut reporter = ConsoleReporter::new(Vec::new());

    EvoRunner::run_with_source(&hi_config(), &mut source, &mut reporter).unwrap();

    let text = String::from_utf8(reporter.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "Target Word : Hi");
    assert_eq!(lines[1], "Max Population : 2");
    assert_eq!(lines[2], "Mutation Rate : 1.0");
    assert_eq!(lines[4], "The Best\tFitness\tTime");
    assert!(lines[6].starts_with("ab\t0.00%\t0:00:"), "{}", lines[6]);
    assert!(lines[7].starts_with("Hz\t50.00%\t0:00:"), "{}", lines[7]);
    assert!(lines[8].starts_with("Hi\t100.00%\t0:00:"), "{}", lines[8]);
}

#[test]
fn test_identical_mutants_keep_run_going() {
    // Attempt 1 yields "Hz" twice. It counts as one mutant and evicts only
    // "ab", leaving {cd, Hz}. Attempt 2 yields "Hi" and "xx".
    let mut source = ScriptedSource::new("abcdHzHzHixx", 0.5);
    let mut recorder = Recorder::default();

    let result = EvoRunner::run_with_source(&hi_config(), &mut source, &mut recorder).unwrap();

    assert!(result.converged);
    assert_eq!(result.attempts, 2);
    assert_eq!(
        recorder.trace(),
        vec![
            ("ab".to_string(), 0.0),
            ("Hz".to_string(), 50.0),
            ("Hi".to_string(), 100.0),
        ]
    );
    assert_eq!(source.remaining_genes(), 0);
}

#[test]
fn test_initial_population_already_matching() {
    let mut source = ScriptedSource::new("Hiab", 0.5);
    let mut recorder = Recorder::default();

    let result = EvoRunner::run_with_source(&hi_config(), &mut source, &mut recorder).unwrap();

    assert!(result.converged);
    assert_eq!(result.attempts, 0);
    assert_eq!(result.generations, 0);
    assert_eq!(recorder.trace(), vec![("Hi".to_string(), 100.0)]);
    assert_eq!(source.rolls_drawn, 0);
}
