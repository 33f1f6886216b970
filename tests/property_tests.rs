//! Property-based tests for generation guarantees

use itemgen::{format, limit_per_line, only, range, select, weight, Spec};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn labels(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("item {}", i)).collect()
}

/// A small nested tree: a select over `count` buckets, each capped and weighted
fn nested_spec(count: usize, cap: usize) -> Spec {
    let buckets: Vec<_> = (0..count)
        .map(|i| {
            let bucket = format(&format!("bucket {} {{0}}", i), select(labels(3)));
            weight([300.0, 100.0], only(cap, bucket))
        })
        .collect();
    select(buckets).unwrap()
}

/// Once a session reports exhaustion it never produces again
#[test]
fn test_exhaustion_is_permanent_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(1usize..6, 1usize..4, any::<u64>()),
            |(count, cap, seed)| {
                let spec = nested_spec(count, cap);
                let mut session = spec.build(StdRng::seed_from_u64(seed));

                let produced = session.by_ref().count();
                prop_assert_eq!(produced, count * cap.min(3));

                for _ in 0..10 {
                    prop_assert!(session.select().is_none());
                }
                Ok(())
            },
        )
        .unwrap();
}

/// `only(n, ...)` never yields more than `n` items
#[test]
fn test_only_n_bound_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(1usize..12, 1usize..12, any::<u64>()),
            |(n, size, seed)| {
                let spec = only(n, select(labels(size))).unwrap();
                let mut session = spec.build(StdRng::seed_from_u64(seed));

                let mut produced = 0;
                for _ in 0..(n + size + 5) {
                    if session.select().is_some() {
                        produced += 1;
                    }
                }
                prop_assert_eq!(produced, n.min(size));
                Ok(())
            },
        )
        .unwrap();
}

/// Ranges stay within their inclusive bounds
#[test]
fn test_range_bounds_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(-10_000i64..10_000, 0i64..500, any::<u64>()),
            |(min, width, seed)| {
                let max = min + width;
                let spec = range(min, max).unwrap();
                let mut session = spec.build(StdRng::seed_from_u64(seed));

                let value: i64 = session.select().unwrap().text.parse().unwrap();
                prop_assert!(value >= min && value <= max);
                prop_assert!(session.select().is_none());
                Ok(())
            },
        )
        .unwrap();
}

/// Weight sequences report entry `i` before the `i`-th successful draw and
/// then repeat the last entry
#[test]
fn test_weight_sequence_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                proptest::collection::vec(1.0f64..1000.0, 1..5),
                1usize..8,
                any::<u64>(),
            ),
            |(weights, size, seed)| {
                let spec = weight(weights.clone(), select(labels(size))).unwrap();
                let mut session = spec.build(StdRng::seed_from_u64(seed));

                for draw in 0..size {
                    let expected = weights[draw.min(weights.len() - 1)];
                    prop_assert_eq!(session.weight(), Some(expected));
                    prop_assert!(session.select().is_some());
                }
                Ok(())
            },
        )
        .unwrap();
}

/// Every item from a `limit_per_line` branch carries its tag
#[test]
fn test_limit_per_line_tagging_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(0usize..5, 1usize..8, any::<u64>()), |(limit, size, seed)| {
            let tagged = limit_per_line(limit, select(labels(size))).unwrap();
            let group = match tagged.kind() {
                itemgen::SpecKind::LimitPerLine { group, .. } => *group,
                _ => unreachable!(),
            };

            let items: Vec<_> = tagged.build(StdRng::seed_from_u64(seed)).collect();
            prop_assert_eq!(items.len(), size);
            for item in items {
                prop_assert_eq!(item.limit_for(group), Some(limit));
            }
            Ok(())
        })
        .unwrap();
}

/// Range sampling is roughly uniform
#[test]
fn test_range_is_roughly_uniform() {
    let spec = range(1, 4).unwrap();
    let mut counts = [0usize; 4];
    for seed in 0..4000 {
        let value: usize = itemgen::draw_with_seed(&spec, seed, 1)[0]
            .text
            .parse()
            .unwrap();
        counts[value - 1] += 1;
    }
    for count in counts {
        // Expected 1000 each
        assert!(count > 850 && count < 1150, "counts {:?}", counts);
    }
}
