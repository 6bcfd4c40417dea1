use super::*;

use crate::util::storage::MemoryStore;

fn context() -> ClientContext {
    ClientContext::new(Arc::new(MemoryStore::new()))
}

#[test]
fn fresh_context_has_no_raised_prompts() {
    let ctx = context();
    assert!(!ctx.prompts.session_expired.get());
    assert!(ctx.prompts.password_expired.get().is_none());
    assert!(!ctx.prompts.unauthorised.get());
}

#[test]
fn fresh_context_has_empty_selection_and_default_prefs() {
    let ctx = context();
    assert!(ctx.selection.is_empty());
    assert!(!ctx.prefs.dark_mode.get());
    assert!(ctx.prefs.remembered_login.get().is_none());
}

#[test]
fn clones_share_state() {
    let ctx = context();
    let clone = ctx.clone();

    clone.prompts.session_expired.set_value(true);
    clone.selection.select_path("/a", false, || {});

    assert!(ctx.prompts.session_expired.get());
    assert_eq!(ctx.selection.len(), 1);
}

#[test]
fn separate_contexts_are_isolated() {
    let first = context();
    let second = context();

    first.prompts.session_expired.set_value(true);

    assert!(!second.prompts.session_expired.get());
}
