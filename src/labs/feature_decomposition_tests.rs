use super::*;
use crate::test_support::{MockFileSystem, MockRunner, failures, run_lab};

const THREAD_MAP_BODY: &str = "The feature splits into independent threads that can run in parallel, \
with a final fusion thread to reconcile the API contract and the UI.";

fn document(threads: &str) -> String {
    format!("# Notification Preferences\n\n## Thread Map\n\n{THREAD_MAP_BODY}\n\n{threads}\n")
}

fn verify(content: &str) -> Vec<CheckResult> {
    let fs = MockFileSystem::new().with_file(DOCUMENT, content);
    run_lab(check, &fs, &MockRunner::passing())
}

#[test]
fn missing_document_short_circuits() {
    let results = run_lab(check, &MockFileSystem::new(), &MockRunner::passing());

    assert_eq!(
        results,
        vec![CheckResult::failed(
            "File docs/feature-notification-preferences.md not found"
        )]
    );
}

#[test]
fn three_threads_is_not_enough() {
    let results = verify(&document("Thread 1: schema\nThread 2: API\nThread 3: UI"));

    assert_eq!(
        failures(&results),
        vec!["Only 3 threads identified (need at least 4)"]
    );
}

#[test]
fn four_threads_pass() {
    let results = verify(&document(
        "Thread 1: schema\nThread 2: API\nThread 3: UI\nThread 4: tests",
    ));

    assert_eq!(
        results,
        vec![
            CheckResult::passed("File docs/feature-notification-preferences.md exists"),
            CheckResult::passed("Thread Map section has content"),
            CheckResult::passed("4 threads identified in decomposition"),
        ]
    );
}

#[test]
fn headings_and_numbered_lines_count() {
    let results = verify(&document(
        "### 1. Schema\n### 2. API\n3. UI wiring\n4. Tests\n5. Docs",
    ));

    assert_eq!(results[2], CheckResult::passed("5 threads identified in decomposition"));
}

#[test]
fn template_thread_map_fails() {
    let content = "## Thread Map\n\n[Your decomposition goes here]\n\nThread 1\nThread 2\nThread 3\nThread 4\n";

    let results = verify(content);

    assert_eq!(
        failures(&results),
        vec!["Thread Map section is empty or contains placeholder text"]
    );
}

#[test]
fn count_is_capped_at_seven() {
    let threads: Vec<String> = (1..=9).map(|i| format!("Thread {i}")).collect();

    let results = verify(&document(&threads.join("\n")));

    assert_eq!(results[2], CheckResult::passed("7 threads identified in decomposition"));
}

#[test]
fn thread_map_is_measured_up_to_the_next_section() {
    let content = "## Thread Map\n\nSchema, API, UI, tests.\n\n## Dependencies\n\n\
Thread 1 feeds Thread 2 and Thread 3; Thread 4 waits for all of them before the final merge step.\n";

    let results = verify(content);

    assert_eq!(
        failures(&results),
        vec!["Thread Map section is empty or contains placeholder text"]
    );
    assert_eq!(results[2], CheckResult::passed("4 threads identified in decomposition"));
}
