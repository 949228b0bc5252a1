use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("cotiza");
    cmd.env_remove("COTIZA_OUTPUT_DIR").env_remove("RUST_LOG");
    cmd
}

#[test]
fn standards_lists_catalog() {
    cmd()
        .arg("standards")
        .assert()
        .success()
        .stdout(contains("EC0680"))
        .stdout(contains("EC1183"))
        .stdout(contains("9,900"));
}

#[test]
fn bare_invocation_lists_catalog() {
    cmd().assert().success().stdout(contains("EC0889"));
}

#[test]
fn quote_prints_totals_and_tiers() {
    cmd()
        .args(["quote", "-s", "EC0680", "-m", "presencial", "-n", "3"])
        .assert()
        .success()
        .stdout(contains("Total inversión: $18,600 MXN"))
        .stdout(contains("Sin certificación: $3,100 MXN"))
        .stdout(contains("Solo DC-3: $4,030 MXN"));
}

#[test]
fn leading_flags_default_to_quote_with_chart() {
    cmd()
        .args(["-s", "EC0861", "-m", "virtual", "--chart"])
        .assert()
        .success()
        .stdout(contains("$7,400 MXN"))
        .stdout(contains("Comparativo por participante (MXN)"));
}

#[test]
fn oversized_chart_width_is_a_usage_error() {
    cmd()
        .args(["quote", "-s", "EC0680", "-m", "presencial", "--chart"])
        .args(["--chart-width", "18446744073709551615"])
        .assert()
        .code(2)
        .stderr(contains("--chart-width"));
}

#[test]
fn incomplete_quote_prints_notice() {
    cmd()
        .args(["quote", "-s", "EC9999", "-m", "virtual"])
        .assert()
        .success()
        .stdout(contains("Incomplete selection"));
}

#[test]
fn export_writes_pdf_into_output_dir() {
    let tmp = TempDir::new().expect("create temp dir");
    cmd()
        .args(["export", "-s", "EC1183", "-m", "hibrido", "-n", "10", "-o"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(contains("cotizacion-conocer-clinica-salud-industrial.pdf"));
    assert!(
        tmp.path()
            .join("cotizacion-conocer-clinica-salud-industrial.pdf")
            .exists()
    );
}

#[test]
fn export_uses_env_output_dir() {
    let tmp = TempDir::new().expect("create temp dir");
    cmd()
        .current_dir(tmp.path())
        .env("COTIZA_OUTPUT_DIR", tmp.path().join("out"))
        .args(["export", "-s", "EC0397", "-m", "presencial"])
        .assert()
        .success();
    assert!(
        tmp.path()
            .join("out")
            .join("cotizacion-conocer-clinica-salud-industrial.pdf")
            .exists()
    );
}

#[test]
fn incomplete_export_writes_nothing() {
    let tmp = TempDir::new().expect("create temp dir");
    cmd()
        .args(["export", "-m", "virtual", "-n", "2", "-o"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(contains("Incomplete selection"));
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn quote_writes_json() {
    let tmp = TempDir::new().expect("create temp dir");
    let json = tmp.path().join("quote.json");
    cmd()
        .args(["quote", "-s", "EC0889", "-m", "hibrido", "-n", "2", "--json"])
        .arg(&json)
        .assert()
        .success();
    let raw = std::fs::read_to_string(json).unwrap();
    assert!(raw.contains("\"total_price\": 19800"));
}

#[test]
fn show_prints_saved_quote() {
    let tmp = TempDir::new().expect("create temp dir");
    let json = tmp.path().join("quote.json");
    cmd()
        .args(["quote", "-s", "EC0680", "-m", "presencial", "-n", "3", "--json"])
        .arg(&json)
        .assert()
        .success();

    cmd()
        .arg("show")
        .arg(&json)
        .assert()
        .success()
        .stdout(contains("Total inversión: $18,600 MXN"))
        .stdout(contains("Solo CONOCER: $5,270 MXN"));
}

#[test]
fn show_rejects_missing_file() {
    let tmp = TempDir::new().expect("create temp dir");
    cmd()
        .arg("show")
        .arg(tmp.path().join("absent.json"))
        .assert()
        .code(2)
        .stderr(contains("Failed to open quote JSON"));
}
