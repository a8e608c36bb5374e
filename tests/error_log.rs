use api_relay::error_log::ErrorLog;
use std::fs;

#[test]
fn append_creates_file_and_stamps_entries() {
    let path = std::env::temp_dir().join(format!("api-relay-error-log-{}.txt", std::process::id()));
    let _ = fs::remove_file(&path);

    let log = ErrorLog::new(&path);
    log.append("first failure").expect("first append should succeed");
    log.append("second failure").expect("second append should succeed");

    let contents = fs::read_to_string(&path).expect("log file should exist");

    assert_eq!(contents.matches("Error:").count(), 2);
    assert!(contents.contains("UTC"));
    assert!(contents.contains("first failure"));
    assert!(contents.contains("second failure"));

    let _ = fs::remove_file(&path);
}

#[test]
fn append_fails_when_path_is_not_writable() {
    let path = std::env::temp_dir().join(format!("api-relay-log-dir-{}", std::process::id()));
    let _ = fs::create_dir(&path);

    let log = ErrorLog::new(&path);

    assert!(log.append("unwritable").is_err());

    let _ = fs::remove_dir(&path);
}
