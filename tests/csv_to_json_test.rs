use es_ingest::core::ToolReport;
use es_ingest::{CsvToJson, ToolEngine};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

async fn convert(csv_content: &str) -> (serde_json::Value, ToolReport) {
    let mut input = NamedTempFile::with_suffix(".csv").unwrap();
    write!(input, "{}", csv_content).unwrap();
    input.flush().unwrap();

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.json");
    let output_path = output.to_str().unwrap().to_string();

    let converter = CsvToJson::new(input.path().to_str().unwrap(), &output_path);
    let report = ToolEngine::new(converter).run().await.unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    (serde_json::from_str(&written).unwrap(), report)
}

#[tokio::test]
async fn test_rows_become_records_in_column_order() {
    let (value, report) =
        convert("City,Latitude,Longitude\nParis,48.85N,2.35E\nSydney,33.87S,151.21E\n").await;

    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(report.documents, 2);
    assert_eq!(report.skipped, 0);

    let first = records[0].as_object().unwrap();
    let keys: Vec<&String> = first.keys().collect();
    assert_eq!(keys, ["City", "Latitude", "Longitude"]);
    assert_eq!(first["City"], "Paris");
    assert_eq!(first["Latitude"], "48.85N");
}

#[tokio::test]
async fn test_incomplete_rows_are_dropped() {
    let (value, report) = convert("city,temp\nParis,21\nLyon,\nNice,25\n").await;

    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(records[0]["city"], "Paris");
    assert_eq!(records[1]["city"], "Nice");
}

#[tokio::test]
async fn test_ragged_rows_are_dropped() {
    let (value, report) = convert("a,b,c\n1,2,3\n4,5\n6,7,8\n").await;

    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(report.skipped, 1);
}

#[tokio::test]
async fn test_cell_values_are_type_inferred() {
    let (value, _) = convert("city,population,density\nParis,2102650,20.5\n").await;

    let record = &value.as_array().unwrap()[0];
    assert!(record["city"].is_string());
    assert_eq!(record["population"], serde_json::json!(2102650));
    assert_eq!(record["density"], serde_json::json!(20.5));
}
