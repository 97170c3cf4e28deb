//! Integration tests for the conversion pipeline against real processes.

#![cfg(unix)]

mod helpers;

use std::sync::Arc;

use addon_converter::{ConversionOutcome, ConversionPipeline, ProcessRunner};
use addon_core::traits::HostLink;
use addon_core::types::SessionContext;

use helpers::{RecordingHost, config_for_tool, system_tool, write_stl};

fn pipeline(tool_name: &str, host: Option<Arc<RecordingHost>>) -> ConversionPipeline {
    let config = config_for_tool(&system_tool(tool_name));
    let link = match host {
        Some(host) => HostLink::attached(host),
        None => HostLink::new(),
    };
    ConversionPipeline::new(config.converter, Arc::new(ProcessRunner::new()), Arc::new(link))
}

#[tokio::test]
async fn test_successful_conversion_is_imported() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = temp.path().join("part.stl");
    write_stl(&source);
    let source_len = std::fs::metadata(&source).expect("stat").len();

    let host = Arc::new(RecordingHost::default());
    let outcome = pipeline("cp", Some(host.clone()))
        .convert(&source, &SessionContext::new("S1"))
        .await;

    let expected = temp.path().join("part.stp");
    assert_eq!(
        outcome,
        ConversionOutcome::ConversionSucceeded {
            output_path: expected.clone(),
            output_size_bytes: source_len,
        }
    );
    assert_eq!(host.imports(), vec![expected]);
}

#[tokio::test]
async fn test_nonzero_exit_with_existing_output_is_failure() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = temp.path().join("part.stl");
    write_stl(&source);
    let stale = temp.path().join("part.stp");
    std::fs::write(&stale, "ISO-10303-21;").expect("write stale output");

    let host = Arc::new(RecordingHost::default());
    let outcome = pipeline("false", Some(host.clone()))
        .convert(&source, &SessionContext::new("S1"))
        .await;

    match outcome {
        ConversionOutcome::ConversionFailed {
            source_path,
            output_path,
            exit_code,
            output_file_exists,
            ..
        } => {
            assert_eq!(source_path, source);
            assert_eq!(output_path, stale);
            assert_eq!(exit_code, Some(1));
            assert!(output_file_exists);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(host.imports().is_empty());
    assert!(stale.exists());
}

#[tokio::test]
async fn test_zero_exit_without_output_is_failure() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = temp.path().join("part.stl");
    write_stl(&source);

    let outcome = pipeline("true", Some(Arc::new(RecordingHost::default())))
        .convert(&source, &SessionContext::new("S1"))
        .await;

    assert!(matches!(
        outcome,
        ConversionOutcome::ConversionFailed {
            exit_code: Some(0),
            output_file_exists: false,
            ..
        }
    ));
}

#[tokio::test]
async fn test_failed_process_streams_are_captured() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = temp.path().join("absent.stl");

    let outcome = pipeline("cp", None)
        .convert(&source, &SessionContext::new("S1"))
        .await;

    match outcome {
        ConversionOutcome::ConversionFailed {
            exit_code,
            stderr,
            output_file_exists,
            ..
        } => {
            assert_ne!(exit_code, Some(0));
            assert!(stderr.contains("absent.stl"));
            assert!(!output_file_exists);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_converter_reports_expected_path() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = temp.path().join("part.stl");
    write_stl(&source);

    let mut config = config_for_tool(&system_tool("cp"));
    config.converter.install_dir = Some(temp.path().to_path_buf());
    config.converter.tool_subdir = "tools".into();
    let pipeline = ConversionPipeline::new(
        config.converter,
        Arc::new(ProcessRunner::new()),
        Arc::new(HostLink::new()),
    );

    let outcome = pipeline.convert(&source, &SessionContext::new("S1")).await;

    assert_eq!(
        outcome,
        ConversionOutcome::ConverterMissing {
            path: temp.path().join("tools").join("cp")
        }
    );
    assert!(!temp.path().join("part.stp").exists());
}

#[tokio::test]
async fn test_import_failure_keeps_output_on_disk() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = temp.path().join("bracket v2.stl");
    write_stl(&source);
    let source_len = std::fs::metadata(&source).expect("stat").len();

    let host = Arc::new(RecordingHost::failing("no active part document"));
    let outcome = pipeline("cp", Some(host))
        .convert(&source, &SessionContext::new("S1"))
        .await;

    let expected = temp.path().join("bracket v2.stp");
    assert_eq!(
        outcome,
        ConversionOutcome::ImportFailed {
            output_path: expected.clone(),
            output_size_bytes: source_len,
            reason: "no active part document".to_string(),
        }
    );
    assert!(expected.exists());
}

#[tokio::test]
async fn test_without_host_output_is_kept() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = temp.path().join("part.stl");
    write_stl(&source);
    let source_len = std::fs::metadata(&source).expect("stat").len();

    let outcome = pipeline("cp", None)
        .convert(&source, &SessionContext::new("S1"))
        .await;

    assert_eq!(
        outcome,
        ConversionOutcome::HostUnavailable {
            output_path: temp.path().join("part.stp"),
            output_size_bytes: source_len,
        }
    );
    assert!(temp.path().join("part.stp").exists());
}

#[tokio::test]
async fn test_directory_at_destination_is_not_output() {
    let temp = tempfile::tempdir().expect("tempdir");
    let source = temp.path().join("part.stl");
    write_stl(&source);
    std::fs::create_dir(temp.path().join("part.stp")).expect("mkdir");

    let host = Arc::new(RecordingHost::default());
    let outcome = pipeline("true", Some(host.clone()))
        .convert(&source, &SessionContext::new("S1"))
        .await;

    assert!(matches!(
        outcome,
        ConversionOutcome::ConversionFailed {
            exit_code: Some(0),
            output_file_exists: false,
            ..
        }
    ));
    assert!(host.imports().is_empty());
}
