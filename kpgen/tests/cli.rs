use assert_cmd::Command;
use predicates::str::contains;
use std::path::Path;

const ITEMS: &str = "name,price,quantity\nМонтаж счетчика,50,2\nПоверка,30,1\n";
const TEMPLATE: &str = "<html><body>\n<p>{{DATE}} {{COMPANY_NAME}}</p>\n<p><strong>Итого:</strong> __________</p>\n<div class=\"footer-info\">до {{VALID_UNTIL}}</div>\n</body></html>\n";

fn cmd() -> Command {
    let mut c = Command::cargo_bin("kpgen").unwrap();
    c.env_remove("KPGEN_TEMPLATE").env_remove("KPGEN_CURRENCY");
    c
}

fn fixtures(dir: &Path) {
    std::fs::write(dir.join("items.csv"), ITEMS).unwrap();
    std::fs::write(dir.join("template.html"), TEMPLATE).unwrap();
}

#[test]
fn renders_template_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    fixtures(dir.path());
    cmd()
        .current_dir(dir.path())
        .args(["--items", "items.csv", "--template", "template.html"])
        .args(["--company", "ООО Ромашка", "--date", "2024-03-05"])
        .assert()
        .success()
        .stdout(contains("05.03.2024 ООО Ромашка"))
        .stdout(contains("130.00 BYN (сто тридцать рублей)"))
        .stdout(contains("до 04.04.2024"))
        .stdout(contains("price-table"));
}

#[test]
fn items_from_stdin_summary() {
    cmd()
        .arg("--summary")
        .write_stdin(ITEMS)
        .assert()
        .success()
        .stdout(contains("130.00 BYN"))
        .stdout(contains("сто тридцать рублей"));
}

#[test]
fn missing_template_fails() {
    let dir = tempfile::tempdir().unwrap();
    fixtures(dir.path());
    cmd()
        .current_dir(dir.path())
        .args(["--items", "items.csv", "--template", "absent.html"])
        .assert()
        .failure();
    cmd()
        .current_dir(dir.path())
        .args(["--items", "items.csv"])
        .assert()
        .failure();
}

#[test]
fn writes_suggested_filename_into_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    fixtures(dir.path());
    cmd()
        .current_dir(dir.path())
        .args(["--items", "items.csv", "--preview", "--out-dir", "out"])
        .args(["--company", "ОАО \"Ромашка\" & Co", "--date", "2024-03-05"])
        .assert()
        .success()
        .stdout(contains("ОАО_Ромашка_Co_2024-03-05.html"));
    let html = std::fs::read_to_string(dir.path().join("out/ОАО_Ромашка_Co_2024-03-05.html")).unwrap();
    assert!(html.contains("КОММЕРЧЕСКОЕ ПРЕДЛОЖЕНИЕ"));
}

#[test]
fn json_items() {
    cmd()
        .args(["--items-format", "json", "--summary"])
        .write_stdin(r#"[{"name":"Поверка","price":"10.05"}]"#)
        .assert()
        .success()
        .stdout(contains("10.05 BYN"))
        .stdout(contains("десять рублей 5 копеек"));
}

#[test]
fn preview_wins_over_template_env_default() {
    let dir = tempfile::tempdir().unwrap();
    fixtures(dir.path());
    cmd()
        .current_dir(dir.path())
        .env("KPGEN_TEMPLATE", "/nonexistent/template.html")
        .args(["--items", "items.csv", "--preview", "--date", "2024-03-05"])
        .assert()
        .success()
        .stdout(contains("КОММЕРЧЕСКОЕ ПРЕДЛОЖЕНИЕ"))
        .stdout(contains("ИТОГО: 130.00 BYN"));
}

#[test]
fn template_env_default_is_used() {
    let dir = tempfile::tempdir().unwrap();
    fixtures(dir.path());
    cmd()
        .current_dir(dir.path())
        .env("KPGEN_TEMPLATE", dir.path().join("template.html"))
        .args(["--items", "items.csv", "--company", "ООО Ромашка", "--date", "2024-03-05"])
        .assert()
        .success()
        .stdout(contains("05.03.2024 ООО Ромашка"));
}
