//! Property test for the store round-trip law: any store built through
//! the public mutation API with in-range line targets deserializes back
//! to an equal store.

use proptest::prelude::*;

use yijing_annotating::AnnotationStore;
use yijing_model::{Figure, FigureLines, Symbol, Target};

fn figure_strategy() -> impl Strategy<Value = Figure> {
    prop::collection::vec(prop_oneof![Just(Symbol::Low), Just(Symbol::High)], 0..=8)
        .prop_map(Figure::new)
}

fn figure_lines_strategy() -> impl Strategy<Value = FigureLines> {
    figure_strategy().prop_flat_map(|figure| {
        let len = figure.len();
        prop::collection::vec(prop_oneof![Just(Symbol::Low), Just(Symbol::High)], len).prop_map(
            move |marks| FigureLines::new(figure.clone(), Figure::new(marks)).unwrap(),
        )
    })
}

/// Targets whose encoding is loss-free: line indices stay in range, and
/// the whole-figure variant keeps at least one line (a zero-line figure
/// encodes as the empty string, which reads back as `Target::Any`).
fn target_strategy() -> impl Strategy<Value = Target> {
    prop_oneof![
        Just(Target::Any),
        figure_strategy()
            .prop_filter("zero-line figures demote to Any", |f| !f.is_empty())
            .prop_map(Target::Figure),
        figure_strategy()
            .prop_filter("need a line to point at", |f| !f.is_empty())
            .prop_flat_map(|figure| {
                let len = figure.len();
                (Just(figure), 0..len)
            })
            .prop_map(|(figure, index)| Target::Line { figure, index }),
    ]
}

fn content_strategy() -> impl Strategy<Value = String> {
    // Exercises JSON escaping: quotes, backslashes, and non-ASCII text.
    "[ -~\u{4e00}-\u{4e2d}]{0,12}"
}

fn title_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[ -~]{0,10}")
}

fn store_strategy() -> impl Strategy<Value = AnnotationStore> {
    (
        title_strategy(),
        prop::collection::vec("[ -~]{0,8}", 0..4),
        prop::collection::vec(
            (
                title_strategy(),
                title_strategy(),
                prop::collection::vec(("[ -~]{0,8}", content_strategy()), 0..4),
            ),
            0..3,
        ),
        prop::collection::vec(
            (
                title_strategy(),
                title_strategy(),
                prop::collection::vec((figure_strategy(), content_strategy()), 0..4),
            ),
            0..3,
        ),
        prop::collection::vec(
            (
                title_strategy(),
                title_strategy(),
                prop::collection::vec((figure_lines_strategy(), content_strategy()), 0..4),
            ),
            0..3,
        ),
        prop::collection::vec(
            (
                title_strategy(),
                title_strategy(),
                prop::collection::vec((target_strategy(), content_strategy()), 0..4),
            ),
            0..3,
        ),
    )
        .prop_map(
            |(title, tags, string_specs, figure_specs, line_specs, target_specs)| {
                let mut store = AnnotationStore::new();
                store.title = title;
                store.tags = tags;
                for (title, comment, entries) in string_specs {
                    let group = store.add_string_group(title, comment);
                    for (target, content) in entries {
                        group.add_entry(target, content);
                    }
                }
                for (title, comment, entries) in figure_specs {
                    let group = store.add_figure_group(title, comment);
                    for (target, content) in entries {
                        group.add_entry(target, content);
                    }
                }
                for (title, comment, entries) in line_specs {
                    let group = store.add_line_group(title, comment);
                    for (target, content) in entries {
                        group.add_entry(target, content);
                    }
                }
                for (title, comment, entries) in target_specs {
                    let group = store.add_target_group(title, comment);
                    for (target, content) in entries {
                        group.add_entry(target, content);
                    }
                }
                store
            },
        )
}

proptest! {
    #[test]
    fn stores_round_trip_field_for_field(store in store_strategy()) {
        let json = store.to_json().unwrap();
        let read_back = AnnotationStore::from_json(&json).unwrap();
        prop_assert_eq!(&read_back, &store);
        // Serialization is deterministic.
        prop_assert_eq!(read_back.to_json().unwrap(), json);
    }
}
