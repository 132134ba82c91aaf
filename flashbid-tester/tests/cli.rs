use std::path::{Path, PathBuf};
use std::process::Command;

fn temp_path(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "flashbid-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn data_dir(label: &str, listings: &str, page: Option<&str>) -> PathBuf {
    let dir = temp_path(label);
    std::fs::create_dir_all(&dir).expect("create data dir");
    std::fs::write(dir.join("listings.json"), listings).expect("write listings");
    if let Some(page) = page {
        std::fs::write(dir.join("page.json"), page).expect("write page config");
    }
    dir
}

fn run(args: &[&str], data: Option<&Path>, output: &Path) -> std::process::Output {
    let exe = env!("CARGO_BIN_EXE_flashbid-tester");
    let mut command = Command::new(exe);
    command.args(args).arg("--output").arg(output);
    if let Some(data) = data {
        command.arg("--data-dir").arg(data);
    }
    command.output().expect("run cli")
}

#[test]
fn cli_list_listings_writes_output() {
    let output_path = temp_path("list");
    let output = run(&["--list-listings"], None, &output_path);
    assert!(output.status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available listings"));
    assert!(content.contains("Auction"));
    assert!(content.contains("Sale"));
}

#[test]
fn cli_check_passes_on_shipped_data() {
    let output_path = temp_path("check");
    let output = run(&["--mode", "check", "--report", "json"], None, &output_path);
    assert!(output.status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(report["errors"], 0);
    assert!(report["listings"].as_u64().unwrap_or_default() > 0);
}

#[test]
fn cli_check_fails_on_bad_discount() {
    let dir = data_dir(
        "bad",
        r#"[{"id":9,"tag":"x","name":"Too generous","price":10,"discount":150,"hasOnSale":true,"flashDealEndsIn":"2030-01-01T00:00:00Z"}]"#,
        Some("{}"),
    );
    let output_path = temp_path("bad-report");
    let output = run(&["--mode", "check", "--report", "json"], Some(&dir), &output_path);
    assert_eq!(output.status.code(), Some(1));
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("discount_out_of_range"));
}

#[test]
fn cli_reports_missing_page_config() {
    let dir = data_dir("no-page", "[]", None);
    let output = run(&["--mode", "check"], Some(&dir), &temp_path("no-page-report"));
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load data"));
}

#[test]
fn cli_simulate_json_from_fixed_start() {
    let dir = data_dir(
        "simulate",
        r#"[
            {"id":1,"tag":"a","name":"Three seconds","price":10,"hasOnSale":true,"flashDealEndsIn":"2027-01-15T08:00:03Z"},
            {"id":2,"tag":"b","name":"One day","price":20,"hasOnSale":false,"auctionEndsIn":"2027-01-16T08:00:00Z"}
        ]"#,
        Some(r#"{"tick_ms":1000}"#),
    );
    let output_path = temp_path("simulate-report");
    let output = run(
        &[
            "--mode",
            "simulate",
            "--report",
            "json",
            "--ticks",
            "5",
            "--now",
            "2027-01-15T08:00:00Z",
        ],
        Some(&dir),
        &output_path,
    );
    assert!(output.status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let timelines: serde_json::Value = serde_json::from_str(&content).expect("json timelines");

    let flash = &timelines[0];
    assert_eq!(flash["final_phase"], "expired");
    assert_eq!(flash["final_display"], "00:00:00:00");
    assert_eq!(flash["entries"].as_array().map(Vec::len), Some(4));
    assert_eq!(flash["entries"][0]["display"], "00:00:00:02");

    let auction = &timelines[1];
    assert_eq!(auction["kind"], "auction");
    assert_eq!(auction["final_phase"], "running");
    assert_eq!(auction["final_display"], "00:23:59:55");
}
