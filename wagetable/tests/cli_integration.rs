//! Integration tests for the wagetable CLI

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::tempdir;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/wages.json")
}

fn run_wagetable(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_wagetable"))
        .args(args)
        .env_remove("WAGETABLE_DATA")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn data_lines(stdout: &str) -> Vec<&str> {
    // header, separator, rows..., footer
    let lines: Vec<&str> = stdout.lines().collect();
    lines[2..lines.len() - 1].to_vec()
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_wagetable(&["--help"]);

    assert!(success);
    assert!(stdout.contains("wagetable"));
    assert!(stdout.contains("--data"));
    assert!(stdout.contains("--job"));
    assert!(stdout.contains("--sort"));
    assert!(stdout.contains("export"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_wagetable(&["--version"]);

    assert!(success);
    assert!(stdout.contains("wagetable"));
}

#[test]
fn test_table_output_default_sort() {
    let data = fixture();
    let (stdout, _, success) = run_wagetable(&["--data", data.to_str().unwrap()]);

    assert!(success);
    assert!(stdout.contains("단가 ↓"));
    assert!(stdout.contains("총 5건의 결과"));
    let rows = data_lines(&stdout);
    assert_eq!(rows.len(), 5);
    // Highest unit price first
    assert!(rows[0].starts_with("형틀목공"));
    assert!(rows[4].starts_with("건축일반시공"));
}

#[test]
fn test_search_by_job_and_year() {
    let data = fixture();
    let (stdout, _, success) = run_wagetable(&[
        "list",
        "--data",
        data.to_str().unwrap(),
        "--job",
        "목공",
        "--year",
        "2024",
    ]);

    assert!(success);
    assert!(stdout.contains("총 2건의 결과"));
    assert!(stdout.contains("형틀목공"));
    assert!(stdout.contains("건축목공"));
    assert!(!stdout.contains("철근공"));
}

#[test]
fn test_no_results() {
    let data = fixture();
    let (stdout, _, success) =
        run_wagetable(&["--data", data.to_str().unwrap(), "--job", "용접"]);

    assert!(success);
    assert!(stdout.contains("검색 결과가 없습니다"));
}

#[test]
fn test_sort_clicks_toggle_direction() {
    let data = fixture();
    let (stdout, _, success) = run_wagetable(&[
        "--data",
        data.to_str().unwrap(),
        "--sort",
        "region",
        "--sort",
        "region",
    ]);

    assert!(success);
    assert!(stdout.contains("지역 ↑"));
    let rows = data_lines(&stdout);
    // 광주 < 대구 < 부산 < 서울 < 인천
    assert!(rows[0].starts_with("미장공"));
    assert!(rows[4].starts_with("철근공"));
}

#[test]
fn test_order_flag() {
    let data = fixture();
    let (stdout, _, success) =
        run_wagetable(&["--data", data.to_str().unwrap(), "--order", "asc"]);

    assert!(success);
    assert!(stdout.contains("단가 ↑"));
    assert!(data_lines(&stdout)[0].starts_with("건축일반시공"));
}

#[test]
fn test_json_output() {
    let data = fixture();
    let (stdout, _, success) =
        run_wagetable(&["list", "--data", data.to_str().unwrap(), "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["rows"].as_array().unwrap().len(), 5);
    assert_eq!(parsed["rows"][0]["values"][2], "₩160,000");
    assert_eq!(parsed["footer"], "총 5건의 결과");
    assert_eq!(parsed["sort"]["field"], "unitPrice");
}

#[test]
fn test_export_csv() {
    let data = fixture();
    let out = tempdir().unwrap();
    let (stdout, _, success) = run_wagetable(&[
        "export",
        "--data",
        data.to_str().unwrap(),
        "--job",
        "건축",
        "--format",
        "csv",
        "--out-dir",
        out.path().to_str().unwrap(),
    ]);

    assert!(success);
    let path = PathBuf::from(stdout.trim());
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("노임단가_"));
    assert!(name.ends_with(".csv"));

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "jobType,region,unitPrice,effectiveDate\n\
         \"건축목공\",\"서울\",150000,\"2024-03-01\"\n\
         \"건축일반시공\",\"부산\",130000,\"2023-11-15\""
    );
}

#[test]
fn test_export_txt_korean_headers() {
    let data = fixture();
    let out = tempdir().unwrap();
    let (stdout, _, success) = run_wagetable(&[
        "export",
        "--data",
        data.to_str().unwrap(),
        "--format",
        "txt",
        "--korean-headers",
        "--prefix",
        "wages",
        "--sort",
        "jobType",
        "--order",
        "asc",
        "--out-dir",
        out.path().to_str().unwrap(),
    ]);

    assert!(success);
    let path = PathBuf::from(stdout.trim());
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("wages_"));
    assert!(name.ends_with(".txt"));

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "직종\t지역\t단가\t기준일");
    assert_eq!(lines[1], "건축목공\t서울\t150000\t2024-03-01");
    assert_eq!(lines[5], "형틀목공\t대구\t160000\t2024-03-01");
}

#[test]
fn test_missing_data_file() {
    let (_, stderr, success) = run_wagetable(&["--data", "/nonexistent/wages.json"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("데이터를 불러오는 중 오류가 발생했습니다."));
}

#[test]
fn test_invalid_sort_field() {
    let data = fixture();
    let (_, stderr, success) =
        run_wagetable(&["--data", data.to_str().unwrap(), "--sort", "salary"]);

    assert!(!success);
    assert!(stderr.contains("salary"));
}
