mod common;
use common::{ops, temp_home};
use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};

const ADMIN: &str = "ops@hotel.example";

fn write_fixtures(home: &Path) -> (PathBuf, PathBuf) {
    let reservations = home.join("reservations_in.json");
    fs::write(
        &reservations,
        r#"[
            {"id": "r1", "created_at": "2025-03-10T14:22:05.120Z", "guest_name": "Ana Ruiz",
             "arrival_date": "2025-04-02", "nights": 2, "total_due": "1,250.00",
             "room_type": "Double", "property_id": "P1"}
        ]"#,
    )
    .unwrap();

    let calls = home.join("calls_in.json");
    fs::write(
        &calls,
        r#"[
            {"id": "c1", "created_at": "2025-03-10T14:22:05.870Z", "property_id": "P1",
             "duration": 185, "sentiment": "positive", "summary": "Booked a \"Double\" room",
             "booking": "{\"guest_name\":\"Ana Ruiz\",\"arrival_date\":\"2025-04-02\",\"room_type\":\"Double\",\"total_due\":1250}"},
            {"id": "c2", "created_at": "2025-03-11T09:00:00Z", "property_id": "P1",
             "duration": 60, "sentiment": "negative", "summary": "URGENT: no hot water"}
        ]"#,
    )
    .unwrap();

    (reservations, calls)
}

fn pending_token(home: &Path) -> String {
    let content = fs::read_to_string(home.join("outbox.yaml")).unwrap();
    let doc: serde_yaml::Value = serde_yaml::from_str(&content).unwrap();
    doc["token"].as_str().unwrap().to_string()
}

fn init_and_import(name: &str) -> PathBuf {
    let home = temp_home(name);
    ops(&home).args(["init", "--admin", ADMIN]).assert().success();

    let (reservations, calls) = write_fixtures(&home);
    ops(&home)
        .args(["import", "--table", "reservations", "--file"])
        .arg(&reservations)
        .assert()
        .success()
        .stdout(contains("Imported 1 record(s)"));
    ops(&home)
        .args(["import", "--table", "call_logs", "--file"])
        .arg(&calls)
        .assert()
        .success()
        .stdout(contains("Imported 2 record(s)"));
    home
}

fn sign_in(home: &Path) {
    ops(home).args(["login", "--email", ADMIN]).assert().success();
    let token = pending_token(home);
    ops(home)
        .args(["login", "--token", &token])
        .assert()
        .success()
        .stdout(contains("Signed in as"));
}

#[test]
fn init_creates_config_store_and_state() {
    let home = temp_home("cli_init");
    ops(&home)
        .args(["init", "--admin", ADMIN])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(home.join("opsdash.conf").exists());
    assert!(home.join("opsdash.sqlite").exists());
    assert!(home.join("client_state.yaml").exists());

    let conf = fs::read_to_string(home.join("opsdash.conf")).unwrap();
    assert!(conf.contains(ADMIN));

    ops(&home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete"));
}

#[test]
fn dashboard_requires_a_session() {
    let home = init_and_import("cli_gate");

    ops(&home)
        .args(["dashboard", "--range", "all"])
        .assert()
        .failure()
        .stderr(contains("Not signed in"));

    ops(&home)
        .args(["status"])
        .assert()
        .success()
        .stdout(contains("(nobody)"))
        .stdout(contains("1 record(s)"))
        .stdout(contains("2 record(s)"));
}

#[test]
fn only_the_admin_can_request_a_link() {
    let home = init_and_import("cli_other_email");

    ops(&home)
        .args(["login", "--email", "guest@elsewhere.example"])
        .assert()
        .failure()
        .stderr(contains("not allowed"));
    assert!(!home.join("outbox.yaml").exists());

    ops(&home)
        .args(["login", "--token", "made-up"])
        .assert()
        .failure();
}

#[test]
fn signed_in_dashboard_shows_deduplicated_kpis() {
    let home = init_and_import("cli_dashboard");
    sign_in(&home);

    ops(&home)
        .args(["dashboard", "--range", "all", "--theme", "plain"])
        .assert()
        .success()
        .stdout(contains("Revenue"))
        .stdout(contains("$1,250.00"))
        .stdout(contains("2/3 rows"))
        .stdout(contains("escalation"));

    ops(&home)
        .args(["feed", "--range", "all", "--json"])
        .assert()
        .success()
        .stdout(contains("\"class\": \"escalation\""));

    ops(&home)
        .args(["dashboard", "--range", "all", "--property", "P9", "--theme", "plain"])
        .assert()
        .success()
        .stdout(contains("0/3 rows"));
}

#[test]
fn export_writes_filtered_rows_as_csv() {
    let home = init_and_import("cli_export");
    sign_in(&home);
    let out = home.join("out.csv");

    ops(&home)
        .args(["export", "--range", "all", "--file"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("2 rows"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("\"property_id\",\"kind\",\"time\""));
    assert!(content.contains("\"Ana Ruiz\""));
    assert!(content.contains("\"URGENT: no hot water\""));
    assert_eq!(content.lines().count(), 3);

    ops(&home)
        .args(["export", "--range", "all", "--file"])
        .arg(&out)
        .assert()
        .failure();

    ops(&home)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("export"));
}

#[test]
fn logout_closes_the_gate() {
    let home = init_and_import("cli_logout");
    sign_in(&home);

    ops(&home).args(["logout"]).assert().success().stdout(contains("Signed out"));
    ops(&home)
        .args(["feed", "--range", "all"])
        .assert()
        .failure()
        .stderr(contains("Not signed in"));
}

#[test]
fn prefs_persist_theme_and_property() {
    let home = temp_home("cli_prefs");
    ops(&home).args(["init", "--admin", ADMIN]).assert().success();

    ops(&home)
        .args(["prefs", "--theme", "light", "--property", "P2"])
        .assert()
        .success()
        .stdout(contains("Preferences saved"));

    let state = fs::read_to_string(home.join("client_state.yaml")).unwrap();
    assert!(state.contains("theme: light"));
    assert!(state.contains("property_filter: P2"));

    ops(&home).args(["prefs", "--theme", "neon"]).assert().failure();
}

#[test]
fn import_is_refused_for_a_json_source() {
    let home = temp_home("cli_import_json_source");
    ops(&home).args(["init", "--admin", ADMIN]).assert().success();

    let conf = home.join("opsdash.conf");
    let content = fs::read_to_string(&conf).unwrap();
    assert!(content.contains("source: sqlite"));
    fs::write(&conf, content.replace("source: sqlite", "source: json")).unwrap();

    let (reservations, _) = write_fixtures(&home);
    ops(&home)
        .args(["import", "--table", "reservations", "--file"])
        .arg(&reservations)
        .assert()
        .failure()
        .stderr(contains("`source` is not `sqlite`"));
}
