//! Law Checkers - Seeded randomized checks of equality, ordering and chain laws
//!
//! Checks:
//! - Equality: reflexivity, symmetry, transitivity, hash consistency
//! - Ordering: compare agrees with equality, antisymmetry, derived comparisons
//! - Lazy chains: functor law, flat_map concatenation, zip lengths, scan shape,
//!   recomputation on every materialization

use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scalactic_core::{HashingEquality, OrderingEquality};
use scalactic_lazy::{LazySeq, LazyView};
use scalactic_prettify::{pretty, Prettify};

/// Law checker configuration
#[derive(Clone, Debug)]
pub struct LawCheckConfig {
    /// Number of random samples (pairs, triples or chains) per law
    pub samples: usize,
    /// Maximum length of generated sequences
    pub max_len: usize,
    /// Random seed
    pub seed: u64,
}

impl Default for LawCheckConfig {
    fn default() -> Self {
        LawCheckConfig {
            samples: 256,
            max_len: 32,
            seed: 42,
        }
    }
}

impl LawCheckConfig {
    /// Light checking for quick tests
    pub fn light() -> Self {
        LawCheckConfig {
            samples: 32,
            max_len: 8,
            seed: 42,
        }
    }

    /// Heavy checking for thorough testing
    pub fn heavy() -> Self {
        LawCheckConfig {
            samples: 4096,
            max_len: 128,
            seed: 42,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

/// A single failed law with a rendering of the counterexample.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LawViolation {
    pub law: &'static str,
    pub counterexample: String,
}

impl fmt::Display for LawViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} violated by {}", self.law, self.counterexample)
    }
}

/// Outcome of a law check run.
#[derive(Clone, Debug, Default)]
pub struct LawReport {
    pub checks: u64,
    pub violations: Vec<LawViolation>,
}

impl LawReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Laws that failed at least once.
    pub fn failed_laws(&self) -> Vec<&'static str> {
        let mut laws: Vec<&'static str> = self.violations.iter().map(|v| v.law).collect();
        laws.dedup();
        laws
    }

    fn check(&mut self, law: &'static str, holds: bool, counterexample: impl FnOnce() -> String) {
        self.checks += 1;
        if !holds {
            // One counterexample per law keeps reports readable
            if self.violations.iter().all(|v| v.law != law) {
                self.violations.push(LawViolation {
                    law,
                    counterexample: counterexample(),
                });
            }
        }
    }

    fn merge(&mut self, other: LawReport) {
        self.checks += other.checks;
        for v in other.violations {
            if self.violations.iter().all(|existing| existing.law != v.law) {
                self.violations.push(v);
            }
        }
    }
}

/// Check the equality and hashing laws of `equality` over generated values.
pub fn check_equality_laws<T, E, G>(equality: &E, mut gen: G, config: &LawCheckConfig) -> LawReport
where
    T: Prettify,
    E: HashingEquality<T>,
    G: FnMut(&mut StdRng) -> T,
{
    let mut rng = config.rng();
    let mut report = LawReport::new();

    for _ in 0..config.samples {
        let a = gen(&mut rng);
        let b = gen(&mut rng);
        let c = gen(&mut rng);

        report.check("reflexivity", equality.are_equal(&a, &a), || pretty(&a));
        report.check(
            "symmetry",
            equality.are_equal(&a, &b) == equality.are_equal(&b, &a),
            || pretty(&(&a, &b)),
        );
        let transitive = !(equality.are_equal(&a, &b) && equality.are_equal(&b, &c))
            || equality.are_equal(&a, &c);
        report.check("transitivity", transitive, || pretty(&(&a, &b, &c)));
        let hash_consistent = !equality.are_equal(&a, &b)
            || equality.hash_code_for(&a) == equality.hash_code_for(&b);
        report.check("hash consistency", hash_consistent, || pretty(&(&a, &b)));
    }

    tracing::debug!(
        checks = report.checks,
        violations = report.violations.len(),
        "checked equality laws"
    );
    report
}

/// Check the ordering laws of `ordering`, including the equality laws it extends.
pub fn check_ordering_laws<T, E, G>(ordering: &E, mut gen: G, config: &LawCheckConfig) -> LawReport
where
    T: Prettify,
    E: OrderingEquality<T>,
    G: FnMut(&mut StdRng) -> T,
{
    let mut report = check_equality_laws(ordering, &mut gen, config);
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(1));

    let mut ordering_report = LawReport::new();
    for _ in 0..config.samples {
        let a = gen(&mut rng);
        let b = gen(&mut rng);
        let cmp = ordering.compare(&a, &b);

        ordering_report.check(
            "compare agrees with equality",
            (cmp == Ordering::Equal) == ordering.are_equal(&a, &b),
            || pretty(&(&a, &b)),
        );
        ordering_report.check(
            "antisymmetry",
            ordering.compare(&b, &a) == cmp.reverse(),
            || pretty(&(&a, &b)),
        );
        let derived = ordering.lt(&a, &b) == (cmp == Ordering::Less)
            && ordering.gt(&a, &b) == (cmp == Ordering::Greater)
            && ordering.lteq(&a, &b) == (cmp != Ordering::Greater)
            && ordering.gteq(&a, &b) == (cmp != Ordering::Less);
        ordering_report.check("derived comparisons", derived, || pretty(&(&a, &b)));
        let min_max = ordering.lteq(ordering.min(&a, &b), ordering.max(&a, &b));
        ordering_report.check("min below max", min_max, || pretty(&(&a, &b)));
    }

    tracing::debug!(
        checks = ordering_report.checks,
        violations = ordering_report.violations.len(),
        "checked ordering laws"
    );
    report.merge(ordering_report);
    report
}

/// Check the lazy chain laws over random integer sequences.
pub fn check_chain_laws(config: &LawCheckConfig) -> LawReport {
    let mut rng = config.rng();
    let mut report = LawReport::new();

    for _ in 0..config.samples {
        let a = random_vec(&mut rng, config.max_len);
        let b = random_vec(&mut rng, config.max_len);
        let zero: i64 = rng.gen_range(-100..100);

        let seq = LazySeq::from_vec(a.clone());
        let other = LazySeq::from_vec(b.clone());

        let f = |n: i64| n.wrapping_mul(7).wrapping_add(3);
        let expected: Vec<i64> = a.iter().copied().map(f).collect();
        report.check("functor", seq.map(f).to_list() == expected, || pretty(&a));

        let g = |n: i64| vec![n; (n.unsigned_abs() % 3) as usize];
        let expected: Vec<i64> = a.iter().copied().flat_map(g).collect();
        let flat_mapped = seq.flat_map(g).map(|s| s.to_list());
        report.check("flat_map concatenation", flat_mapped.as_ref() == Ok(&expected), || {
            pretty(&a)
        });

        report.check("zip length", seq.zip(&other).len() == a.len().min(b.len()), || {
            pretty(&(&a, &b))
        });
        let zipped_all = seq.zip_all(&other, 0, 0).to_list();
        let padded = zipped_all.len() == a.len().max(b.len())
            && zipped_all
                .iter()
                .skip(a.len())
                .all(|(left, _)| *left == 0)
            && zipped_all
                .iter()
                .skip(b.len())
                .all(|(_, right)| *right == 0);
        report.check("zip_all padding", padded, || pretty(&(&a, &b)));

        let scanned = seq.scan_left(zero, |acc, x| acc.wrapping_add(x)).to_list();
        report.check(
            "scan_left shape",
            scanned.len() == a.len() + 1 && scanned.first() == Some(&zero),
            || pretty(&(&a, zero)),
        );

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counted = seq.map(move |n| {
            counter.fetch_add(1, AtomicOrdering::SeqCst);
            n
        });
        counted.to_list();
        counted.to_list();
        report.check(
            "recompute per materialization",
            calls.load(AtomicOrdering::SeqCst) == 2 * a.len(),
            || pretty(&a),
        );
    }

    tracing::debug!(
        checks = report.checks,
        violations = report.violations.len(),
        "checked chain laws"
    );
    report
}

fn random_vec(rng: &mut StdRng, max_len: usize) -> Vec<i64> {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| rng.gen_range(-1000..1000)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalactic_core::{
        after_being, lower_cased, DefaultEquality, Equality, NaturalOrdering,
    };
    use proptest::prelude::*;

    fn small_word(rng: &mut StdRng) -> String {
        let len = rng.gen_range(0..4);
        (0..len)
            .map(|_| {
                let c = rng.gen_range(b'a'..=b'c') as char;
                if rng.gen_bool(0.5) {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect()
    }

    #[test]
    fn test_natural_ordering_obeys_laws() {
        let report = check_ordering_laws(
            &NaturalOrdering,
            |rng| rng.gen_range(-5i32..5),
            &LawCheckConfig::light(),
        );
        assert!(report.is_valid(), "{:?}", report.violations);
        assert!(report.checks > 0);
    }

    #[test]
    fn test_normalizing_equality_obeys_laws() {
        let equality = after_being(lower_cased(), NaturalOrdering);
        let report = check_ordering_laws(&equality, small_word, &LawCheckConfig::default());
        assert!(report.is_valid(), "{:?}", report.violations);

        let report = check_equality_laws(
            &after_being(lower_cased(), DefaultEquality),
            small_word,
            &LawCheckConfig::light(),
        );
        assert!(report.is_valid(), "{:?}", report.violations);
    }

    struct BadHash;

    impl Equality<i32> for BadHash {
        fn are_equal(&self, a: &i32, b: &i32) -> bool {
            a % 2 == b % 2
        }
    }

    impl HashingEquality<i32> for BadHash {
        fn hash_code_for(&self, a: &i32) -> u64 {
            *a as u64
        }
    }

    #[test]
    fn test_inconsistent_hash_is_reported() {
        let report = check_equality_laws(
            &BadHash,
            |rng| rng.gen_range(0i32..10),
            &LawCheckConfig::default(),
        );
        assert!(!report.is_valid());
        assert_eq!(report.failed_laws(), vec!["hash consistency"]);
        assert!(report.violations[0].to_string().starts_with("hash consistency violated by ("));
    }

    #[test]
    fn test_chain_laws_hold() {
        let report = check_chain_laws(&LawCheckConfig::light());
        assert!(report.is_valid(), "{:?}", report.violations);
        assert_eq!(report.checks, 6 * LawCheckConfig::light().samples as u64);
    }

    #[test]
    fn test_seed_makes_runs_repeatable() {
        let config = LawCheckConfig::light().with_seed(7);
        let first = check_chain_laws(&config);
        let second = check_chain_laws(&config);
        assert_eq!(first.checks, second.checks);
        assert_eq!(first.violations, second.violations);
    }

    proptest! {
        #[test]
        fn prop_chain_laws_hold_for_any_seed(seed in any::<u64>()) {
            let config = LawCheckConfig { samples: 4, max_len: 6, seed };
            let report = check_chain_laws(&config);
            prop_assert!(report.is_valid(), "{:?}", report.violations);
            prop_assert_eq!(report.checks, 24);
        }

        #[test]
        fn prop_case_insensitive_equality_for_any_seed(seed in any::<u64>()) {
            let config = LawCheckConfig::light().with_seed(seed);
            let report = check_equality_laws(
                &after_being(lower_cased(), DefaultEquality),
                small_word,
                &config,
            );
            prop_assert!(report.is_valid(), "{:?}", report.violations);
        }
    }
}
