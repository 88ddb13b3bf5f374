use es_ingest::{BulkConfig, BulkUploader, IngestError, ToolEngine};
use httpmock::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Bulk file with `docs` complete pairs. Document ids are zero-padded so a
/// marker like "doc-1042" appears in exactly one batch of 1000.
fn write_bulk_file(docs: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for i in 0..docs {
        writeln!(file, "{{\"index\":{{}}}}").unwrap();
        writeln!(file, "{{\"id\":\"doc-{:04}\"}}", i).unwrap();
    }
    file.flush().unwrap();
    file
}

fn config(path: &str, host: &str, batch_size: usize) -> BulkConfig {
    BulkConfig {
        bulk_file: path.to_string(),
        index: "temperatures".to_string(),
        es_host: host.to_string(),
        batch_size,
        dry_run: false,
        verbose: false,
        monitor: false,
    }
}

#[tokio::test]
async fn test_2500_documents_batch_1000_issues_three_requests() {
    let file = write_bulk_file(2500);
    let server = MockServer::start();

    // one mock per expected batch, keyed on an id unique to that batch
    let batch1 = server.mock(|when, then| {
        when.method(POST)
            .path("/temperatures/_bulk")
            .header("content-type", "application/x-ndjson")
            .body_contains("doc-0042");
        then.status(200)
            .json_body(serde_json::json!({"errors": false}));
    });
    let batch2 = server.mock(|when, then| {
        when.method(POST)
            .path("/temperatures/_bulk")
            .body_contains("doc-1042");
        then.status(200)
            .json_body(serde_json::json!({"errors": false}));
    });
    let batch3 = server.mock(|when, then| {
        when.method(POST)
            .path("/temperatures/_bulk")
            .body_contains("doc-2042");
        then.status(200)
            .json_body(serde_json::json!({"errors": false}));
    });

    let uploader = BulkUploader::new(config(
        file.path().to_str().unwrap(),
        &server.base_url(),
        1000,
    ));
    let report = ToolEngine::new(uploader).run().await.unwrap();

    assert_eq!(report.documents, 2500);
    assert_eq!(report.requests, 3);
    batch1.assert();
    batch2.assert();
    batch3.assert();
}

#[tokio::test]
async fn test_partial_final_batch_keeps_pairs_together() {
    let file = write_bulk_file(5);
    let server = MockServer::start();

    // batch 1 carries docs 0-1, batch 2 docs 2-3, batch 3 the leftover doc 4
    let batch1 = server.mock(|when, then| {
        when.method(POST)
            .path("/temperatures/_bulk")
            .body_contains("doc-0000")
            .body_contains("doc-0001");
        then.status(200)
            .json_body(serde_json::json!({"errors": false}));
    });
    let batch2 = server.mock(|when, then| {
        when.method(POST)
            .path("/temperatures/_bulk")
            .body_contains("doc-0003");
        then.status(200)
            .json_body(serde_json::json!({"errors": false}));
    });
    let batch3 = server.mock(|when, then| {
        when.method(POST)
            .path("/temperatures/_bulk")
            .body_contains("doc-0004");
        then.status(200)
            .json_body(serde_json::json!({"errors": false}));
    });

    let uploader = BulkUploader::new(config(
        file.path().to_str().unwrap(),
        &server.base_url(),
        2,
    ));
    let report = ToolEngine::new(uploader).run().await.unwrap();

    assert_eq!(report.documents, 5);
    assert_eq!(report.requests, 3);
    batch1.assert();
    batch2.assert();
    batch3.assert();
}

#[tokio::test]
async fn test_429_on_batch_two_aborts_before_batch_three() {
    let file = write_bulk_file(3000);
    let server = MockServer::start();

    let batch1 = server.mock(|when, then| {
        when.method(POST)
            .path("/temperatures/_bulk")
            .body_contains("doc-0042");
        then.status(200)
            .json_body(serde_json::json!({"errors": false}));
    });
    let batch2 = server.mock(|when, then| {
        when.method(POST)
            .path("/temperatures/_bulk")
            .body_contains("doc-1042");
        then.status(429).body("too many requests");
    });
    let batch3 = server.mock(|when, then| {
        when.method(POST)
            .path("/temperatures/_bulk")
            .body_contains("doc-2042");
        then.status(200)
            .json_body(serde_json::json!({"errors": false}));
    });

    let uploader = BulkUploader::new(config(
        file.path().to_str().unwrap(),
        &server.base_url(),
        1000,
    ));
    let err = ToolEngine::new(uploader).run().await.unwrap_err();

    match err {
        IngestError::BulkRejectedError {
            batch,
            status,
            body,
            indexed,
        } => {
            assert_eq!(batch, 2);
            assert_eq!(status, 429);
            assert!(body.contains("too many requests"));
            assert_eq!(indexed, 1000);
        }
        other => panic!("unexpected error: {:?}", other),
    }

    batch1.assert();
    batch2.assert();
    batch3.assert_hits(0);
}

#[tokio::test]
async fn test_odd_line_count_rejected_before_any_request() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{{\"index\":{{}}}}").unwrap();
    writeln!(file, "{{\"id\":\"doc-0000\"}}").unwrap();
    writeln!(file, "{{\"index\":{{}}}}").unwrap();
    file.flush().unwrap();

    let server = MockServer::start();
    let any_bulk = server.mock(|when, then| {
        when.method(POST).path("/temperatures/_bulk");
        then.status(200);
    });

    let uploader = BulkUploader::new(config(
        file.path().to_str().unwrap(),
        &server.base_url(),
        1000,
    ));
    let err = ToolEngine::new(uploader).run().await.unwrap_err();

    match err {
        IngestError::UnpairedLinesError { lines, .. } => assert_eq!(lines, 3),
        other => panic!("unexpected error: {:?}", other),
    }
    any_bulk.assert_hits(0);
}

#[tokio::test]
async fn test_dry_run_sends_nothing() {
    let file = write_bulk_file(10);
    let server = MockServer::start();
    let any_bulk = server.mock(|when, then| {
        when.method(POST).path("/temperatures/_bulk");
        then.status(200);
    });

    let mut cfg = config(file.path().to_str().unwrap(), &server.base_url(), 4);
    cfg.dry_run = true;

    let report = ToolEngine::new(BulkUploader::new(cfg)).run().await.unwrap();

    assert_eq!(report.documents, 0);
    assert_eq!(report.requests, 0);
    any_bulk.assert_hits(0);
}

#[tokio::test]
async fn test_empty_file_is_a_successful_noop() {
    let file = NamedTempFile::new().unwrap();
    let server = MockServer::start();
    let any_bulk = server.mock(|when, then| {
        when.method(POST).path("/temperatures/_bulk");
        then.status(200);
    });

    let uploader = BulkUploader::new(config(
        file.path().to_str().unwrap(),
        &server.base_url(),
        1000,
    ));
    let report = ToolEngine::new(uploader).run().await.unwrap();

    assert_eq!(report.documents, 0);
    assert_eq!(report.requests, 0);
    any_bulk.assert_hits(0);
}

#[test]
fn test_inspect_reports_the_upload_plan() {
    let file = write_bulk_file(2500);
    let uploader = BulkUploader::new(config(
        file.path().to_str().unwrap(),
        "http://localhost:9200",
        1000,
    ));

    let plan = uploader.inspect().unwrap();
    assert_eq!(plan.lines, 5000);
    assert_eq!(plan.documents, 2500);
    assert_eq!(plan.batches, 3);
}
