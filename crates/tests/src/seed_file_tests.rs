use pretty_assertions::assert_eq;
use server::directory::JobDirectory;
use shared_types::DirectoryConfig;

use crate::common::posting;

/// Write `contents` to a fresh file under the system temp dir.
fn temp_seed(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "hirewire-{}-{}.json",
        name,
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn seed_file_replaces_builtin_postings() {
    let jobs = vec![posting("job-1", "Engineer"), posting("job-2", "Designer")];
    let path = temp_seed("replace", &serde_json::to_string(&jobs).unwrap());

    let directory = JobDirectory::load(&DirectoryConfig {
        seed_file: Some(path.display().to_string()),
    });
    std::fs::remove_file(&path).ok();

    assert_eq!(directory.jobs(), jobs.as_slice());
}

#[test]
fn seed_file_with_duplicates_falls_back_to_builtin() {
    let jobs = vec![posting("job-1", "Engineer"), posting("job-1", "Engineer again")];
    let path = temp_seed("dupes", &serde_json::to_string(&jobs).unwrap());

    let directory = JobDirectory::load(&DirectoryConfig {
        seed_file: Some(path.display().to_string()),
    });
    std::fs::remove_file(&path).ok();

    assert_eq!(directory, JobDirectory::seeded());
}

#[test]
fn missing_seed_file_falls_back_to_builtin() {
    let directory = JobDirectory::load(&DirectoryConfig {
        seed_file: Some("/definitely/not/here.json".to_string()),
    });
    assert_eq!(directory, JobDirectory::seeded());
}
