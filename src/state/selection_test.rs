use super::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

struct Row {
    selected: AtomicBool,
    deselect_calls: AtomicUsize,
}

impl Row {
    fn new() -> Arc<Self> {
        Arc::new(Self { selected: AtomicBool::new(false), deselect_calls: AtomicUsize::new(0) })
    }
}

fn select_into(row: &Arc<Row>, registry: &SelectionRegistry, path: &str, is_directory: bool) {
    row.selected.store(true, Ordering::SeqCst);
    let row = Arc::clone(row);
    registry.select_path(path, is_directory, move || {
        row.selected.store(false, Ordering::SeqCst);
        row.deselect_calls.fetch_add(1, Ordering::SeqCst);
    });
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn unmount_deselect_fires_callback_once_and_removes_path() {
    let registry = SelectionRegistry::new();
    let row = Row::new();
    select_into(&row, &registry, "/a", false);
    assert_eq!(registry.len(), 1);

    // Unmount cleanup calls deselect_path unconditionally.
    registry.deselect_path("/a");

    assert!(!row.selected.load(Ordering::SeqCst));
    assert_eq!(row.deselect_calls.load(Ordering::SeqCst), 1);
    assert!(registry.is_empty());
}

#[test]
fn deselecting_twice_is_a_noop_the_second_time() {
    let registry = SelectionRegistry::new();
    let row = Row::new();
    select_into(&row, &registry, "/a", false);

    registry.deselect_path("/a");
    registry.deselect_path("/a");

    assert_eq!(row.deselect_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn deselecting_an_unknown_path_is_a_noop() {
    let registry = SelectionRegistry::new();
    registry.deselect_path("/never-selected");
    assert!(registry.is_empty());
}

#[test]
fn reselecting_a_path_replaces_the_entry_without_firing_the_old_callback() {
    let registry = SelectionRegistry::new();
    let old_row = Row::new();
    select_into(&old_row, &registry, "/a", false);

    let new_row = Row::new();
    select_into(&new_row, &registry, "/a", false);
    assert_eq!(registry.len(), 1);
    assert_eq!(old_row.deselect_calls.load(Ordering::SeqCst), 0);

    registry.deselect_path("/a");
    assert_eq!(old_row.deselect_calls.load(Ordering::SeqCst), 0);
    assert_eq!(new_row.deselect_calls.load(Ordering::SeqCst), 1);
}

// =============================================================
// Bulk operations
// =============================================================

#[test]
fn clear_deselects_every_registered_path() {
    let registry = SelectionRegistry::new();
    let first = Row::new();
    let second = Row::new();
    select_into(&first, &registry, "/a", false);
    select_into(&second, &registry, "/b", true);

    registry.clear();

    assert!(registry.is_empty());
    assert_eq!(first.deselect_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second.deselect_calls.load(Ordering::SeqCst), 1);
    assert!(!first.selected.load(Ordering::SeqCst));
    assert!(!second.selected.load(Ordering::SeqCst));
}

#[test]
fn selected_paths_are_sorted() {
    let registry = SelectionRegistry::new();
    select_into(&Row::new(), &registry, "/zebra", false);
    select_into(&Row::new(), &registry, "/apple", false);

    assert_eq!(registry.selected_paths(), vec!["/apple".to_owned(), "/zebra".to_owned()]);
}

#[test]
fn summary_counts_files_and_directories() {
    let registry = SelectionRegistry::new();
    select_into(&Row::new(), &registry, "/docs", true);
    select_into(&Row::new(), &registry, "/docs/a.txt", false);
    select_into(&Row::new(), &registry, "/docs/b.txt", false);

    assert_eq!(registry.summary(), SelectionSummary { files: 2, directories: 1 });
}
