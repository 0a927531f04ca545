//! Property tests for the line differ and change navigator.

use confdiff::core::{
    Algorithm, ChangeNavigator, DiffOptions, DiffResult, EntryKind, Navigation, TieBreak,
};
use proptest::prelude::*;

/// Small alphabet so that lines repeat and the lookahead has work to do.
fn document() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "", "key: 1"]), 0..40)
        .prop_map(|lines| lines.into_iter().map(String::from).collect())
}

fn options() -> impl Strategy<Value = DiffOptions> {
    (
        0usize..8,
        prop_oneof![Just(TieBreak::PreferInsertion), Just(TieBreak::PreferDeletion)],
        prop_oneof![Just(Algorithm::Lookahead), Just(Algorithm::Myers)],
    )
        .prop_map(|(lookahead_window, tie_break, algorithm)| DiffOptions {
            lookahead_window,
            tie_break,
            algorithm,
        })
}

proptest! {
    #[test]
    fn entries_rebuild_both_documents(
        before in document(),
        after in document(),
        options in options(),
    ) {
        let result = DiffResult::from_lines(before.as_slice(), after.as_slice(), &options);
        prop_assert_eq!(result.before_lines().collect::<Vec<_>>(), before.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(result.after_lines().collect::<Vec<_>>(), after.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn line_numbers_are_sequential(
        before in document(),
        after in document(),
        options in options(),
    ) {
        let result = DiffResult::from_lines(before.as_slice(), after.as_slice(), &options);
        let old: Vec<usize> = result.entries().iter().filter_map(|e| e.old_line).collect();
        let new: Vec<usize> = result.entries().iter().filter_map(|e| e.new_line).collect();
        prop_assert_eq!(old, (0..before.len()).collect::<Vec<_>>());
        prop_assert_eq!(new, (0..after.len()).collect::<Vec<_>>());
    }

    #[test]
    fn identical_documents_have_no_changes(doc in document(), options in options()) {
        let result = DiffResult::from_lines(doc.as_slice(), doc.as_slice(), &options);
        prop_assert_eq!(result.len(), doc.len());
        prop_assert!(result.entries().iter().all(|e| e.kind == EntryKind::Unchanged));
        prop_assert!(result.stats().is_clean());
    }

    #[test]
    fn change_count_matches_stats(
        before in document(),
        after in document(),
        options in options(),
    ) {
        let result = DiffResult::from_lines(before.as_slice(), after.as_slice(), &options);
        let stats = result.stats();
        let removed = result.entries().iter().filter(|e| e.kind == EntryKind::Removed).count();
        prop_assert_eq!(stats.added, after.len() - stats.unchanged);
        prop_assert_eq!(stats.removed + stats.modified, removed);
        prop_assert_eq!(result.change_count(), stats.added + removed);
    }

    #[test]
    fn navigator_wraps_in_both_directions(
        before in document(),
        after in document(),
        steps in 1usize..60,
    ) {
        let result = DiffResult::from_lines(before.as_slice(), after.as_slice(), &DiffOptions::default());
        let mut nav = ChangeNavigator::new(&result);
        let total = nav.len();

        if total == 0 {
            prop_assert!(matches!(nav.next(), Navigation::Empty));
            prop_assert!(matches!(nav.previous(), Navigation::Empty));
            prop_assert!(matches!(nav.jump_to(3), Navigation::Empty));
        } else {
            nav.first();
            for _ in 0..steps {
                nav.next();
            }
            prop_assert_eq!(nav.cursor(), Some(steps % total));
            for _ in 0..steps {
                nav.previous();
            }
            prop_assert_eq!(nav.cursor(), Some(0));

            let current = nav.current();
            let change = current.change().unwrap();
            let entry = &result.entries()[change.row];
            prop_assert!(entry.kind.is_change());
            prop_assert_eq!(&entry.text, &change.text);
        }
    }
}
