use std::fs;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use wordcard_core::persistence::MemoryPersistence;
use wordcard_types::WordRecord;

use super::{ScriptedLookup, test_state, words};
use crate::commands::import::import_file;

const PASSAGE: &str = r#"{"a": ["The quick brown fox", "jumps over the lazy dog"]}"#;

#[tokio::test]
async fn document_import_defines_frequent_words() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("passage.json");
    fs::write(&path, PASSAGE).unwrap();

    let persistence = Arc::new(MemoryPersistence::new());
    let state = test_state(persistence.clone(), None);
    let mut store = state.open_store().unwrap();

    let mut progress = Vec::new();
    let summary = import_file(
        &state,
        &mut store,
        &path,
        None,
        &CancellationToken::new(),
        |done, total| progress.push((done, total)),
    )
    .await
    .unwrap();

    assert_eq!(summary.found, 6);
    assert_eq!(summary.added, 6);
    assert_eq!(
        words(store.records()),
        vec!["brown", "dog", "fox", "jumps", "lazy", "quick"]
    );
    assert_eq!(progress, vec![(3, 6), (6, 6)]);
    assert!(store.records().iter().all(|r| !r.definition.is_empty() && !r.known));
    assert_eq!(persistence.saved().unwrap().len(), 6);
}

#[tokio::test]
async fn remote_definitions_are_simplified() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("passage.yaml");
    fs::write(&path, "- The fox ran\n- happiness and more happiness\n").unwrap();

    let lookup = Arc::new(
        ScriptedLookup::default()
            .with("fox", "a small wild animal pertaining to dogs (Vulpes); clever"),
    );
    let state = test_state(Arc::new(MemoryPersistence::new()), Some(lookup.clone()));
    let mut store = state.open_store().unwrap();

    import_file(&state, &mut store, &path, None, &CancellationToken::new(), |_, _| {})
        .await
        .unwrap();

    assert_eq!(
        store.get("fox").unwrap().definition,
        "A small wild animal about dogs"
    );
    // Unknown to the dictionary, so the suffix heuristic answers
    assert_eq!(
        store.get("happiness").unwrap().definition,
        "The quality of being something"
    );
    assert_eq!(lookup.calls(), 3);
}

#[tokio::test]
async fn reimporting_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("passage.json");
    fs::write(&path, r#"{"text": "Fox fox FOX running"}"#).unwrap();

    let persistence = Arc::new(MemoryPersistence::with_records(vec![WordRecord {
        known: true,
        ..WordRecord::new("fox", "A small wild animal")
    }]));
    let state = test_state(persistence.clone(), None);
    let mut store = state.open_store().unwrap();

    let cancel = CancellationToken::new();
    let first = import_file(&state, &mut store, &path, None, &cancel, |_, _| {})
        .await
        .unwrap();
    assert_eq!(first.added, 1);
    assert_eq!(store.get("running").unwrap().definition, "Doing the action of runn");

    let snapshot = store.records().to_vec();
    let second = import_file(&state, &mut store, &path, None, &cancel, |_, _| {})
        .await
        .unwrap();

    assert_eq!(second.added, 0);
    assert_eq!(store.records(), snapshot.as_slice());
    assert!(store.get("fox").unwrap().known);
}

#[tokio::test]
async fn document_without_candidates_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.yaml");
    fs::write(&path, "title: The and of\ncount: 42\n").unwrap();

    let persistence = Arc::new(MemoryPersistence::new());
    let state = test_state(persistence.clone(), None);
    let mut store = state.open_store().unwrap();

    let err = import_file(&state, &mut store, &path, None, &CancellationToken::new(), |_, _| {})
        .await
        .unwrap_err();

    assert!(err.to_string().contains("No candidate words"));
    assert!(store.is_empty());
    assert!(persistence.saved().is_none());
}

#[tokio::test]
async fn cancelled_import_leaves_store_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("passage.json");
    fs::write(&path, PASSAGE).unwrap();

    let persistence = Arc::new(MemoryPersistence::new());
    let state = test_state(persistence.clone(), None);
    let mut store = state.open_store().unwrap();

    let cancel = CancellationToken::new();
    cancel.cancel();
    let result = import_file(&state, &mut store, &path, None, &cancel, |_, _| {}).await;

    assert!(result.is_err());
    assert!(store.is_empty());
    assert!(persistence.saved().is_none());
}

#[tokio::test]
async fn failed_save_keeps_previous_words() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("passage.json");
    fs::write(&path, PASSAGE).unwrap();

    let persistence = Arc::new(MemoryPersistence::with_records(vec![WordRecord::new(
        "tide",
        "The rise and fall of the sea",
    )]));
    let state = test_state(persistence.clone(), None);
    let mut store = state.open_store().unwrap();
    persistence.set_fail_writes(true);

    let err = import_file(&state, &mut store, &path, None, &CancellationToken::new(), |_, _| {})
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Failed to save"));
    assert_eq!(words(store.records()), vec!["tide"]);
}

#[tokio::test]
async fn word_list_import_uses_meanings_and_chapters() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.csv");
    fs::write(
        &path,
        "word,meaning,sort,title\n\
         Erupt,v. to burst out; to explode,2,Volcanoes\n\
         magma,,2,Volcanoes\n\
         gale,n. 大风,1,Wind\n",
    )
    .unwrap();

    let state = test_state(Arc::new(MemoryPersistence::new()), None);
    let mut store = state.open_store().unwrap();

    let summary = import_file(
        &state,
        &mut store,
        &path,
        Some("volcanoes"),
        &CancellationToken::new(),
        |_, _| {},
    )
    .await
    .unwrap();

    assert_eq!(summary.added, 2);
    assert_eq!(words(store.records()), vec!["erupt", "magma"]);
    assert_eq!(store.get("erupt").unwrap().definition, "To burst out");
    assert_eq!(
        store.get("magma").unwrap().definition,
        "A word with meaning related to \"magma\""
    );
}

#[tokio::test]
async fn unknown_chapter_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.csv");
    fs::write(&path, "word,meaning,title\ngale,n. 大风,Wind\n").unwrap();

    let state = test_state(Arc::new(MemoryPersistence::new()), None);
    let mut store = state.open_store().unwrap();

    let err = import_file(
        &state,
        &mut store,
        &path,
        Some("Rivers"),
        &CancellationToken::new(),
        |_, _| {},
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("Rivers"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "The quick brown fox").unwrap();

    let state = test_state(Arc::new(MemoryPersistence::new()), None);
    let mut store = state.open_store().unwrap();

    let result =
        import_file(&state, &mut store, &path, None, &CancellationToken::new(), |_, _| {}).await;
    assert!(result.is_err());
}
