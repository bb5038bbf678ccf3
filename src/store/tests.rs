// remotes-rs: Git Remote Registry
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::git::{classify_failure, invalid_anonymous_url};
use super::{ConfigStore, MemoryStore};
use crate::error::{RemoteError, StoreError};

#[test]
fn test_memory_store_lists_in_insertion_order() {
    let store = MemoryStore::new();
    for name in ["zeta", "alpha", "mid"] {
        store
            .create_remote(name, "https://example.com/r.git")
            .expect("create should succeed");
    }
    assert_eq!(
        store.list_remote_names().expect("list should succeed"),
        vec!["zeta", "alpha", "mid"]
    );
}

#[test]
fn test_memory_store_rejects_duplicates() {
    let store = MemoryStore::new();
    store.create_remote("origin", "u1").expect("first create");
    let err = store.create_remote("origin", "u2").unwrap_err();
    assert!(matches!(err, RemoteError::AlreadyExists { .. }));
    assert_eq!(store.load_remote("origin").unwrap().url, "u1");
}

#[test]
fn test_memory_store_missing_remote() {
    let store = MemoryStore::new();
    assert!(store.load_remote("nope").unwrap_err().is_not_found());
    assert!(store.delete_remote("nope").unwrap_err().is_not_found());
    assert!(store.set_remote_url("nope", "u").unwrap_err().is_not_found());
}

#[test]
fn test_memory_store_anonymous_is_not_persisted() {
    let store = MemoryStore::new();
    let record = store
        .create_anonymous_remote("https://example.com/r.git")
        .expect("anonymous create");
    assert_eq!(record.name, None);
    assert!(record.fetch_refspecs.is_empty());
    assert!(store.list_remote_names().unwrap().is_empty());
}

#[test]
fn test_memory_store_rename_rewrites_default_refspec() {
    let store = MemoryStore::new();
    store.create_remote("origin", "u").unwrap();
    store.rename_remote("origin", "upstream").unwrap();

    let record = store.load_remote("upstream").unwrap();
    insta::assert_debug_snapshot!(record.fetch_refspecs, @r#"
    [
        "+refs/heads/*:refs/remotes/upstream/*",
    ]
    "#);
    assert!(store.load_remote("origin").unwrap_err().is_not_found());
}

#[test]
fn test_memory_store_rename_onto_existing_name() {
    let store = MemoryStore::new();
    store.create_remote("origin", "u").unwrap();
    store.create_remote("upstream", "u").unwrap();
    let err = store.rename_remote("origin", "upstream").unwrap_err();
    assert!(matches!(err, RemoteError::AlreadyExists { ref name } if &**name == "upstream"));
}

#[test]
fn test_memory_store_invalidate() {
    let store = MemoryStore::new();
    assert!(store.is_repository_valid());
    store.invalidate();
    assert!(!store.is_repository_valid());
}

#[test]
fn test_classify_git_failures() {
    let cases: [(&[&str], &str, &str); 5] = [
        (
            &["remote", "remove", "--", "ghost"],
            "ghost",
            "error: No such remote: 'ghost'",
        ),
        (
            &["remote", "set-url", "--", "ghost", "u"],
            "ghost",
            "error: No such remote 'ghost'",
        ),
        (
            &["remote", "add", "--", "origin", "u"],
            "origin",
            "error: remote origin already exists.",
        ),
        (
            &["remote", "add", "--", "a b", "u"],
            "a b",
            "fatal: 'a b' is not a valid remote name",
        ),
        (
            &["remote", "remove", "--", "origin"],
            "origin",
            "fatal: could not lock config file .git/config: File exists",
        ),
    ];

    let classified: Vec<String> = cases
        .iter()
        .map(
            |(args, subject, stderr)| match classify_failure(args, subject, (*stderr).to_string()) {
                RemoteError::NotFound { name } => format!("NotFound({name})"),
                RemoteError::AlreadyExists { name } => format!("AlreadyExists({name})"),
                RemoteError::InvalidArgument { message } => format!("InvalidArgument({message})"),
                RemoteError::Store(err) => match *err {
                    StoreError::CommandFailed { command, .. } => {
                        format!("CommandFailed({command})")
                    }
                    other => format!("Store({other})"),
                },
                other @ RemoteError::RepositoryUnavailable { .. } => format!("{other:?}"),
            },
        )
        .collect();

    insta::assert_debug_snapshot!(classified, @r#"
    [
        "NotFound(ghost)",
        "NotFound(ghost)",
        "AlreadyExists(origin)",
        "InvalidArgument(fatal: 'a b' is not a valid remote name)",
        "CommandFailed(git remote remove -- origin)",
    ]
    "#);
}

#[test]
fn test_rejected_anonymous_url_is_invalid_argument() {
    let err = invalid_anonymous_url("ssh://[bad", "invalid IPv6 host");
    assert!(matches!(err, RemoteError::InvalidArgument { .. }), "{err:?}");
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid argument: invalid remote url 'ssh://[bad': invalid IPv6 host"
    );
}
