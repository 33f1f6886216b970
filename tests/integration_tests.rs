/// End-to-end draws over small board catalogs
use itemgen::{
    draw_with_seed, format, format_with, limit_per_line, one_of, only, range, select, specs,
    unique, weight, Combinators, DrawOptions, Item, IntoSpec, LimitGroupId, Spec, SpecKind,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn group_of(spec: &Spec) -> LimitGroupId {
    match spec.kind() {
        SpecKind::LimitPerLine { group, .. } => *group,
        other => panic!("expected LimitPerLine, got {:?}", other),
    }
}

fn texts(items: &[Item]) -> Vec<&str> {
    items.iter().map(|item| item.text.as_str()).collect()
}

#[test]
fn test_only_two_of_three() {
    let spec = only(2, select([unique("a"), unique("b"), unique("c")])).unwrap();

    for seed in 0..50 {
        let mut session = spec.build(StdRng::seed_from_u64(seed));
        let first = session.select().unwrap();
        let second = session.select().unwrap();
        assert_ne!(first.text, second.text);
        assert!(["a", "b", "c"].contains(&first.text.as_str()));
        assert!(["a", "b", "c"].contains(&second.text.as_str()));
        assert!(session.select().is_none());
    }
}

#[test]
fn test_select_exhaustion_transparency() {
    // A yields once, B twice
    let spec = select(specs!["A", only(2, select(["B1", "B2", "B3"]))]).unwrap();

    for seed in 0..50 {
        let mut session = spec.build(StdRng::seed_from_u64(seed));
        let drawn: Vec<Item> = (0..3).filter_map(|_| session.select()).collect();
        assert_eq!(drawn.len(), 3);
        assert_eq!(drawn.iter().filter(|item| item.text == "A").count(), 1);
        assert!(session.select().is_none());
    }
}

#[test]
fn test_limit_per_line_tags_only_wrapped_branch() {
    let prohibitions = limit_per_line(
        1,
        select([
            "Don't use the grappling hook",
            "Don't use healing items",
            "Don't use prosthetic tools",
        ]),
    )
    .unwrap();
    let group = group_of(&prohibitions);

    let spec = select(specs![
        prohibitions,
        format("Collect {0} memories", range(8, 13)),
        "Find the Hidden Tooth",
    ])
    .unwrap();

    let items = draw_with_seed(&spec, 5, 10);
    assert_eq!(items.len(), 5);
    for item in &items {
        if item.text.starts_with("Don't") {
            assert_eq!(item.limit_for(group), Some(1));
        } else {
            assert!(item.limits_per_line.is_empty(), "{:?}", item);
        }
    }
}

#[test]
fn test_shared_prohibition_keeps_both_tags() {
    // One prohibition list reused under a broader limit, with its own weight
    let prohibition = select(["No healing", "No prosthetics"]).unwrap();
    let strict = limit_per_line(1, &prohibition).unwrap();
    let spec = limit_per_line(3, strict.clone().weight(1.5).only(3)).unwrap();

    let items = draw_with_seed(&spec, 11, 5);
    assert_eq!(items.len(), 2);
    for item in &items {
        assert_eq!(item.limit_for(group_of(&strict)), Some(1));
        assert_eq!(item.limit_for(group_of(&spec)), Some(3));
    }
}

#[test]
fn test_literal_normalization_matches_explicit_construction() {
    let literal = only(2, ["a", "b", "c"]).unwrap();
    let explicit = only(2, select([unique("a"), unique("b"), unique("c")])).unwrap();

    for seed in 0..20 {
        let from_literal = draw_with_seed(&literal, seed, 5);
        let from_explicit = draw_with_seed(&explicit, seed, 5);
        assert_eq!(from_literal, from_explicit);
    }

    let numbers = vec![1i32, 2, 3].into_spec().unwrap();
    let mut drawn: Vec<String> = draw_with_seed(&numbers, 1, 10)
        .into_iter()
        .map(|item| item.text)
        .collect();
    drawn.sort();
    assert_eq!(drawn, vec!["1", "2", "3"]);
}

#[test]
fn test_weighted_bucket_front_loads_first_pick() {
    let bosses = format("Defeat {0}", ["Father Owl", "Sword Saint", "Shura Isshin"])
        .only(3)
        .weight([300.0, 100.0, 50.0]);
    let spec = select(specs![bosses, "Find the Hidden Tooth", "Find Five-Color Rice"]).unwrap();

    let mut boss_first = 0;
    for seed in 0..300 {
        let items = draw_with_seed(&spec, seed, 1);
        if items[0].text.starts_with("Defeat") {
            boss_first += 1;
        }
    }
    // 300 / (300 + 100 + 100) = 60%
    assert!(boss_first > 140 && boss_first < 220, "boss first {} times", boss_first);
}

#[test]
fn test_board_draw_respects_uniqueness() {
    let spec = select(specs![
        format("Find {0}", [
            "Hidden Tooth",
            "Ceremonial Tanto",
            "Five-Color Rice",
            "Nightjar Monocular",
            "Taro Persimmon",
        ]),
        format("Learn {0}", ["Ashina Cross", "the Living Force skill", "the Shadowfall skill"])
            .only(2),
        format_with(
            "Collect at least {0} {1}",
            (range(40, 60), ["Scrap Iron", "Scrap Magnetite"]),
        ),
        one_of(specs![
            "Get both Spiritfalls",
            format("Find {0} Spiritfalls", one_of([3, 4])),
        ]),
        weight(50.0, "Find the Dancing Dragon Mask"),
    ])
    .unwrap();

    let options = DrawOptions::new(StdRng::seed_from_u64(2024)).with_max_items(25);
    let items: Vec<Item> = spec.build_with(options).unwrap().collect();

    // 5 + 2 + 1 + 1 + 1 items are available in total
    assert_eq!(items.len(), 10);
    let unique_texts: HashSet<&str> = texts(&items).into_iter().collect();
    assert_eq!(unique_texts.len(), items.len());
    assert_eq!(
        texts(&items).iter().filter(|t| t.starts_with("Learn")).count(),
        2
    );
}

#[test]
fn test_sessions_do_not_share_state() {
    let spec = only(1, select(["a", "b"])).unwrap();
    let mut first = spec.build(StdRng::seed_from_u64(1));
    assert!(first.select().is_some());
    assert!(first.select().is_none());

    let mut second = spec.build(StdRng::seed_from_u64(1));
    assert!(second.select().is_some());
}

#[test]
fn test_session_returns_rng() {
    let spec = select(["a"]).unwrap();
    let mut session = spec.build(StdRng::seed_from_u64(9));
    assert_eq!(session.by_ref().count(), 1);
    let _rng: StdRng = session.into_rng();
}

#[test]
fn test_maximal_weights_split_evenly() {
    let spec = select(specs![weight(f64::MAX, "first"), weight(f64::MAX, "second")]).unwrap();

    let mut first = 0;
    for seed in 0..1000 {
        if draw_with_seed(&spec, seed, 1)[0].text == "first" {
            first += 1;
        }
    }
    // Expected ~500
    assert!(first > 400 && first < 600, "first picked {} times", first);
}
