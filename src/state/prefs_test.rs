use super::*;

use crate::util::storage::MemoryStore;

fn store() -> Arc<dyn KeyValueStore> {
    Arc::new(MemoryStore::new())
}

#[test]
fn preferences_default_when_storage_is_empty() {
    let prefs = Preferences::new(&store());
    assert!(!prefs.dark_mode.get());
    assert!(prefs.remembered_login.get().is_none());
}

#[test]
fn dark_mode_survives_a_rebuild_over_the_same_store() {
    let store = store();
    Preferences::new(&store).dark_mode.set_value(true);

    let reloaded = Preferences::new(&store);
    assert!(reloaded.dark_mode.get());
}

#[test]
fn remembered_login_round_trips() {
    let store = store();
    Preferences::new(&store).remembered_login.set_value(Some("alice".to_owned()));

    let reloaded = Preferences::new(&store);
    assert_eq!(reloaded.remembered_login.get(), Some("alice".to_owned()));
}
