//! Integration tests for large document handling.

use std::time::Instant;

use confdiff::core::{Algorithm, ChangeNavigator, DiffOptions, DiffResult, TextBuffer};

fn numbered(count: usize, edit: impl Fn(usize) -> Option<String>) -> String {
    (0..count)
        .map(|i| edit(i).unwrap_or_else(|| format!("key_{} = {}\n", i, i)))
        .collect()
}

#[test]
fn diff_large_document_completes_in_reasonable_time() {
    let old_content = numbered(10_000, |_| None);
    let new_content = numbered(10_000, |i| (i == 5000).then(|| "key_5000 = off\n".to_string()));

    let old = TextBuffer::new(old_content.as_bytes());
    let new = TextBuffer::new(new_content.as_bytes());

    let start = Instant::now();
    let diff = DiffResult::compute(&old, &new);
    let elapsed = start.elapsed();

    assert!(elapsed.as_millis() < 500, "Diff took too long: {:?}", elapsed);
    assert_eq!(diff.change_count(), 2);
    // 10k lines, the trailing empty line, and one extra row for the edit.
    assert_eq!(diff.len(), 10_002);
}

#[test]
fn diff_handles_scattered_changes() {
    let old_content = numbered(5000, |_| None);
    let new_content = numbered(5000, |i| {
        (i % 100 == 0).then(|| format!("key_{} = changed\n", i))
    });

    let old = TextBuffer::new(old_content.as_bytes());
    let new = TextBuffer::new(new_content.as_bytes());

    let start = Instant::now();
    let diff = DiffResult::compute(&old, &new);
    let elapsed = start.elapsed();

    assert!(elapsed.as_millis() < 1000, "Diff took too long: {:?}", elapsed);
    // One removal and one addition per edited line.
    assert_eq!(diff.change_count(), 100);
    let stats = diff.stats();
    assert_eq!(stats.modified, 50);
    assert_eq!(stats.unchanged, 4951);
}

#[test]
fn completely_different_documents_stay_linear() {
    let old_content: String = (0..20_000).map(|i| format!("a{}\n", i)).collect();
    let new_content: String = (0..20_000).map(|i| format!("b{}\n", i)).collect();

    let old = TextBuffer::new(old_content.as_bytes());
    let new = TextBuffer::new(new_content.as_bytes());

    let start = Instant::now();
    let diff = DiffResult::compute(&old, &new);
    let elapsed = start.elapsed();

    assert!(elapsed.as_millis() < 1000, "Diff took too long: {:?}", elapsed);
    assert_eq!(diff.change_count(), 40_000);
    // Only the empty segment after the final newline lines up.
    let unchanged = diff.entries().iter().filter(|e| !e.kind.is_change()).count();
    assert_eq!(unchanged, 1);
}

#[test]
fn myers_on_large_document() {
    let old_content = numbered(10_000, |_| None);
    let new_content = numbered(10_000, |i| (i % 1000 == 0).then(|| format!("key_{} = x\n", i)));

    let old = TextBuffer::new(old_content.as_bytes());
    let new = TextBuffer::new(new_content.as_bytes());
    let options = DiffOptions {
        algorithm: Algorithm::Myers,
        ..DiffOptions::default()
    };

    let diff = DiffResult::compute_with(&old, &new, &options);
    assert_eq!(diff.change_count(), 20);
}

#[test]
fn navigator_walks_every_change_of_large_diff() {
    let old_content = numbered(8000, |_| None);
    let new_content = numbered(8000, |i| (i % 400 == 7).then(|| format!("key_{} = y\n", i)));

    let diff = DiffResult::compute(
        &TextBuffer::new(old_content.as_bytes()),
        &TextBuffer::new(new_content.as_bytes()),
    );
    let mut nav = ChangeNavigator::new(&diff);
    assert_eq!(nav.len(), 40);

    let mut rows = Vec::new();
    for _ in 0..nav.len() {
        rows.push(nav.next().change().unwrap().row);
    }
    // The first `next` from an unset cursor lands on index 1, so the walk wraps once.
    assert!(rows.windows(2).filter(|w| w[0] > w[1]).count() <= 1);
    assert_eq!(nav.cursor(), Some(0));
}
