//! Integration tests for the export loop
//!
//! The in-memory source serves batch `b` as the values `(b-1)*n .. b*n - 1`,
//! so line `i` of an export starting at `start_at` must read
//! `start_at - 1 + i`.

use async_trait::async_trait;
use entropy_export::adapters::oracle::{EntropySource, JsonRpcEntropySource};
use entropy_export::config::{secret_string, OracleConfig};
use entropy_export::core::export::Exporter;
use entropy_export::domain::{BatchIndex, BatchLayout, ExportError, ExportRange, Result};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

struct SequentialSource {
    values_per_batch: u64,
}

#[async_trait]
impl EntropySource for SequentialSource {
    async fn collected_entropy(&self, batch: BatchIndex) -> Result<String> {
        let first = (batch.value() - 1) * self.values_per_batch;
        let payload: String = (first..first + self.values_per_batch)
            .map(|v| format!("{v:016x}"))
            .collect();
        Ok(format!("0x{payload}"))
    }

    fn describe(&self) -> String {
        "sequential".to_string()
    }
}

fn sequential_exporter(layout: BatchLayout) -> Exporter {
    let source = SequentialSource {
        values_per_batch: layout.values_per_batch(),
    };
    Exporter::new(Arc::new(source), layout)
}

async fn export_lines(exporter: &Exporter, start_at: u64, how_many: u64, path: &Path) -> Vec<String> {
    exporter
        .run(ExportRange::new(start_at, how_many).unwrap(), path)
        .await
        .unwrap();
    std::fs::read_to_string(path)
        .unwrap()
        .split('\n')
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_output_has_exactly_how_many_lines() {
    let dir = TempDir::new().unwrap();
    let exporter = sequential_exporter(BatchLayout::default());

    for (start_at, how_many) in [(1, 1), (1, 440), (440, 2), (441, 1000), (1000, 881)] {
        let path = dir.path().join(format!("{start_at}-{how_many}.txt"));
        let lines = export_lines(&exporter, start_at, how_many, &path).await;

        assert_eq!(lines.len() as u64, how_many);
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(line, &(start_at - 1 + i as u64).to_string());
        }
    }
}

#[tokio::test]
async fn test_lines_are_canonical_decimals() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");
    let lines = export_lines(&sequential_exporter(BatchLayout::default()), 1, 500, &path).await;

    for line in lines {
        assert!(!line.is_empty());
        assert!(line.chars().all(|c| c.is_ascii_digit()));
        assert!(line == "0" || !line.starts_with('0'));
    }
}

#[tokio::test]
async fn test_split_runs_concatenate_to_single_run() {
    let dir = TempDir::new().unwrap();
    let layout = BatchLayout::new(8, 16, 3).unwrap(); // 6 values per batch
    let exporter = sequential_exporter(layout);

    let whole = export_lines(&exporter, 1, 23, &dir.path().join("whole.txt")).await;
    let mut first = export_lines(&exporter, 1, 10, &dir.path().join("first.txt")).await;
    let second = export_lines(&exporter, 11, 13, &dir.path().join("second.txt")).await;

    first.extend(second);
    assert_eq!(first, whole);
}

#[tokio::test]
async fn test_rerun_overwrites_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");
    let exporter = sequential_exporter(BatchLayout::default());

    export_lines(&exporter, 1, 300, &path).await;
    let lines = export_lines(&exporter, 1, 300, &path).await;

    assert_eq!(lines.len(), 300);
}

#[tokio::test]
async fn test_json_rpc_source_end_to_end() {
    let layout = BatchLayout::new(8, 16, 1).unwrap(); // 2 values per batch
    let mut server = mockito::Server::new_async().await;

    let batch_one = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::Regex(format!("{:016x}\"", 1)))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(rpc_result(&[
            0x00, 0, 0, 0, 0, 0, 0, 0x01, // 1
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, // u64::MAX
        ]))
        .expect(1)
        .create_async()
        .await;

    let batch_two = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::Regex(format!("{:016x}\"", 2)))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(rpc_result(&[
            0, 0, 0, 0, 0, 0, 0, 0, // 0
            0, 0, 0, 0, 0, 0, 0x01, 0x00, // 256
        ]))
        .expect(1)
        .create_async()
        .await;

    let config = OracleConfig {
        rpc_url: Some(secret_string(server.url())),
        ..Default::default()
    };
    let source = JsonRpcEntropySource::new(&config).unwrap();
    let exporter = Exporter::new(Arc::new(source), layout);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");
    let summary = exporter
        .run(ExportRange::new(2, 3).unwrap(), &path)
        .await
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "18446744073709551615\n0\n256"
    );
    assert_eq!(summary.batches_fetched, 2);
    batch_one.assert_async().await;
    batch_two.assert_async().await;
}

#[tokio::test]
async fn test_unfulfilled_batch_over_json_rpc() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(rpc_result(&[]))
        .create_async()
        .await;

    let config = OracleConfig {
        rpc_url: Some(secret_string(server.url())),
        ..Default::default()
    };
    let exporter = Exporter::new(
        Arc::new(JsonRpcEntropySource::new(&config).unwrap()),
        BatchLayout::default(),
    );

    let dir = TempDir::new().unwrap();
    let err = exporter
        .run(ExportRange::new(1, 10).unwrap(), &dir.path().join("out.txt"))
        .await
        .unwrap_err();

    assert!(matches!(err, ExportError::EntropyNotAvailable { batch: 1 }));
}

/// JSON-RPC response carrying `data` ABI-encoded as `bytes`
fn rpc_result(data: &[u8]) -> String {
    let mut encoded = Vec::new();
    encoded.extend_from_slice(&word(32));
    encoded.extend_from_slice(&word(data.len() as u64));
    encoded.extend_from_slice(data);
    while encoded.len() % 32 != 0 {
        encoded.push(0);
    }

    format!(
        r#"{{"jsonrpc":"2.0","id":1,"result":"0x{}"}}"#,
        hex::encode(encoded)
    )
}

fn word(value: u64) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[24..].copy_from_slice(&value.to_be_bytes());
    out
}
