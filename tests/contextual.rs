//! Integration tests driving the public API over a captured backend.

use std::sync::Arc;

use ctxlog::{
    log_error, new_logger, Advanced, Contextual, Level, MemoryBackend,
};
use regex::Regex;

fn new_captured() -> (Arc<MemoryBackend>, Box<dyn Contextual>) {
    let backend = Arc::new(MemoryBackend::new());
    let logger = new_logger(backend.clone());
    (backend, logger)
}

fn assert_matches(lines: &[String], pattern: &str) {
    let re = Regex::new(pattern).expect("bad test pattern");
    assert!(
        lines.iter().any(|line| re.is_match(line)),
        "no line matched `{}` in {:?}",
        pattern,
        lines
    );
}

#[test]
fn contextual_interface_is_satisfied() {
    let (_, logger) = new_captured();
    let _: &dyn Contextual = logger.as_ref();
}

#[test]
fn level_output() {
    let (backend, logger) = new_captured();
    logger.info(&[&"This is a test"]);

    assert_matches(&backend.lines(), "INFO.*This is a test");
}

#[test]
fn formatted_output() {
    let (backend, logger) = new_captured();
    log_error!(logger, "This is {} test", "a");

    assert_matches(&backend.lines(), "ERROR.*This is a test");
}

#[test]
fn line_output() {
    let (backend, logger) = new_captured();
    logger.debugln(&[&"This is a test.", &"So is this."]);

    assert_matches(&backend.lines(), "DEBUG.*This is a test. So is this.\n");
}

#[test]
fn every_level_reaches_its_backend_method() {
    let (backend, logger) = new_captured();
    logger.debug(&[&"m"]);
    logger.info(&[&"m"]);
    logger.warn(&[&"m"]);
    logger.error(&[&"m"]);
    logger.fatal(&[&"m"]);
    logger.panic(&[&"m"]);

    let levels: Vec<Level> = backend.records().into_iter().map(|r| r.level).collect();
    assert_eq!(levels, Level::ALL);
}

#[test]
fn output_carries_caller_location() {
    let (backend, logger) = new_captured();
    let line = line!() + 1;
    logger.info(&[&"located"]);

    let message = &backend.records()[0].message;
    assert!(
        message.starts_with(&format!("tests/contextual.rs:{}:", line)),
        "unexpected prefix: {}",
        message
    );
}

#[test]
fn with_fields_output() {
    let (backend, logger) = new_captured();
    logger
        .with_fields(&[("test", &true)])
        .warn(&[&"This is a message."]);

    assert_matches(&backend.lines(), "WARN.*This is a message. test=true");
}

#[test]
fn with_fields_formatted_output() {
    let (backend, logger) = new_captured();
    let bound = logger.with_fields(&[("a", &1), ("b", &2)]);
    log_error!(bound, "x={}", 9);

    assert_matches(&backend.lines(), "ERROR.*x=9 a=1 b=2");
}

#[test]
fn with_field_output() {
    let (backend, logger) = new_captured();
    logger.with_field("key", &"value").infoln(&[&"tagged"]);

    assert_matches(&backend.lines(), "INFO.*tagged key=value\n");
}

#[test]
fn with_fields_is_idempotent_across_instances() {
    let (first_backend, first) = new_captured();
    let (second_backend, second) = new_captured();

    first.with_fields(&[("a", &1), ("b", &2)]).info(&[&"m"]);
    second.with_fields(&[("a", &1), ("b", &2)]).info(&[&"m"]);

    assert_eq!(first_backend.lines(), second_backend.lines());
}

#[test]
fn println_ends_with_exactly_one_newline() {
    let (backend, logger) = new_captured();
    logger.warnln(&[&"line"]);

    let message = &backend.records()[0].message;
    assert!(message.ends_with('\n'));
    assert!(!message.ends_with("\n\n"));
}

#[test]
fn print_appends_no_newline() {
    let (backend, logger) = new_captured();
    logger.warn(&[&"no newline"]);
    log_error!(logger, "also none");

    for record in backend.records() {
        assert!(!record.message.ends_with('\n'));
    }
}

#[test]
fn adapter_is_shareable_across_threads() {
    let backend = Arc::new(MemoryBackend::new());
    let logger: Arc<dyn Contextual> = Arc::from(new_logger(backend.clone()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let logger = logger.clone();
            std::thread::spawn(move || logger.infof(format_args!("worker {}", i)))
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }

    assert_eq!(backend.records().len(), 4);
}
