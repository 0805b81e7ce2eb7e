//! Testing utilities for the clones workspace
//!
//! Shared fixtures and assertions.

#![allow(missing_docs)]

use clones_forest::{CloneForest, CloneId};
use clones_history::Fact;
use clones_kernel::{CommandError, CommandRouter, VersionSystem};

pub fn clone_id(n: usize) -> CloneId {
    CloneId::new(n).unwrap()
}

/// Forest whose root has learned `facts` in order
pub fn forest_with_facts(facts: &[Fact]) -> CloneForest {
    let mut forest = CloneForest::new();
    for fact in facts {
        forest.learn(CloneId::ROOT, *fact).unwrap();
    }
    forest
}

/// Execute every line, panicking on the first rejection; returns `check` answers
pub fn run_script<S: VersionSystem>(system: &mut S, lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| {
            system
                .execute(line)
                .unwrap_or_else(|e| panic!("{line:?} rejected: {e}"))
        })
        .collect()
}

/// Execute every line on a fresh router and return the last line's outcome
pub fn outcome_of(lines: &[&str]) -> Result<Option<String>, CommandError> {
    let mut router = CommandRouter::new();
    let (last, setup) = lines.split_last().expect("at least one line");
    run_script(&mut router, setup);
    router.execute(last)
}

/// Assert `check <id>` answers `expected`
pub fn assert_check<S: VersionSystem>(system: &mut S, id: usize, expected: &str) {
    let answer = system
        .execute(&format!("check {id}"))
        .unwrap_or_else(|e| panic!("check {id} rejected: {e}"));
    assert_eq!(answer.as_deref(), Some(expected), "check {id}");
}
