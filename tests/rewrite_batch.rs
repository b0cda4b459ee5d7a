use std::fs;
use std::path::Path;

use docroute::rewrite::{self, OutcomeKind};
use docroute::{MappingEntry, MappingTable, RunConfig};

fn write(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn outcome_for(report: &docroute::RunReport, suffix: &str) -> OutcomeKind {
    report
        .results
        .iter()
        .find(|r| r.path.ends_with(suffix))
        .unwrap_or_else(|| panic!("no result for {}", suffix))
        .outcome
}

#[test]
fn rewrites_markdown_and_yaml_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(
        root,
        "guide.md",
        b"Visit /entry/post or see [docs](/entry/post) and \"/entry/post\".",
    );
    write(root, "api/openapi.yaml", b"paths:\n  \"/webhook/{type}\":\n    post: {}\n");
    write(root, "api/clean.yml", b"paths: {}\n");
    write(root, "notes.txt", b"/entry/post");

    let config = RunConfig::new(root, false, false).unwrap();
    let report = rewrite::run(&config, &MappingTable::builtin()).unwrap();

    assert_eq!(report.summary.total, 3);
    assert_eq!(report.summary.changed, 2);
    assert_eq!(report.summary.unchanged, 1);
    assert_eq!(outcome_for(&report, "clean.yml"), OutcomeKind::Unchanged);

    assert_eq!(
        fs::read_to_string(root.join("guide.md")).unwrap(),
        "Visit /entries/post/list or see [docs](/entries/post/list) and \"/entries/post/list\"."
    );
    assert_eq!(
        fs::read_to_string(root.join("api/openapi.yaml")).unwrap(),
        "paths:\n  \"/webhooks/{type}\":\n    post: {}\n"
    );
    assert_eq!(fs::read_to_string(root.join("notes.txt")).unwrap(), "/entry/post");
}

#[test]
fn dry_run_never_mutates_files() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let original = b"GET /image/123.webp\n[meta](/image/{id}/metadata)\n";
    write(root, "images.md", original);

    let config = RunConfig::new(root, true, true).unwrap();
    let report = rewrite::run(&config, &MappingTable::builtin()).unwrap();

    assert_eq!(report.summary.would_change, 1);
    assert_eq!(report.summary.changed, 0);
    assert!(!report.results[0].matched.is_empty());
    assert_eq!(fs::read(root.join("images.md")).unwrap(), original.to_vec());
}

#[test]
fn undecodable_file_does_not_halt_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "a-broken.md", &[0xc3, 0x28, 0xff, b'/', b'e']);
    write(root, "b-valid.md", b"POST /entry/ body");

    let config = RunConfig::new(root, false, false).unwrap();
    let report = rewrite::run(&config, &MappingTable::builtin()).unwrap();

    assert_eq!(report.summary.total, 2);
    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.summary.changed, 1);
    assert!(report.has_failures());
    assert_eq!(outcome_for(&report, "a-broken.md"), OutcomeKind::Failed);
    assert_eq!(
        fs::read_to_string(root.join("b-valid.md")).unwrap(),
        "POST /entries/ body"
    );
    assert_eq!(
        fs::read(root.join("a-broken.md")).unwrap(),
        vec![0xc3, 0x28, 0xff, b'/', b'e']
    );
}

#[test]
fn second_run_finds_nothing_left_to_change() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(
        root,
        "reference.md",
        b"## Endpoints\n\n- `GET /entry/{type}/{path}`\n- [Hierarchy](/hierarchy/doc/)\n- DELETE /webhook/post\n",
    );

    let table = MappingTable::builtin();
    let config = RunConfig::new(root, false, false).unwrap();

    let first = rewrite::run(&config, &table).unwrap();
    assert_eq!(first.summary.changed, 1);
    let after_first = fs::read_to_string(root.join("reference.md")).unwrap();

    let second = rewrite::run(&config, &table).unwrap();
    assert_eq!(second.summary.unchanged, 1);
    assert_eq!(
        fs::read_to_string(root.join("reference.md")).unwrap(),
        after_first
    );
}

#[test]
fn custom_table_longest_first() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "a.md", b"/v1/users/me and /v1/users");

    let table = MappingTable::new(vec![
        MappingEntry::new("/v1/", "/v2/"),
        MappingEntry::new("/v1/users/me", "/v2/me"),
    ])
    .unwrap();
    let config = RunConfig::new(root, false, false).unwrap();
    rewrite::run(&config, &table).unwrap();

    assert_eq!(
        fs::read_to_string(root.join("a.md")).unwrap(),
        "/v2/me and /v2/users"
    );
}
