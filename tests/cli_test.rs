use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn test_dispatch_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("switchboard"));
    cmd.arg("dispatch").arg("tests/fixtures/requests.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("kind,detail"))
        .stdout(predicate::str::contains(
            "payment,payment of 1.5 accepted via bank",
        ))
        .stdout(predicate::str::contains(
            "payment,payment of 20 accepted via stripe",
        ))
        .stdout(predicate::str::contains(
            "notification,notification sent via sms to +15550100",
        ))
        .stdout(predicate::str::contains(
            "alert,alert 'Disk usage' for ops@example.com with priority medium",
        ))
        .stdout(predicate::str::contains(
            "alert,alert 'Service down' for oncall@example.com with priority critical",
        ));

    Ok(())
}

#[test]
fn test_dispatch_json_receipts() {
    let mut cmd = Command::new(cargo_bin!("switchboard"));
    cmd.arg("dispatch")
        .arg("tests/fixtures/requests.csv")
        .arg("--json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"kind\":\"payment\""))
        .stdout(predicate::str::contains("\"method\":\"stripe\""))
        .stdout(predicate::str::contains("\"kind\":\"notification\""))
        .stdout(predicate::str::contains("\"priority\":\"critical\""));
}

#[test]
fn test_dispatch_audit_trail_on_stderr() {
    let mut cmd = Command::new(cargo_bin!("switchboard"));
    cmd.arg("dispatch")
        .arg("tests/fixtures/requests.csv")
        .arg("--audit");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("bank payment processed: amount 1.5"))
        .stderr(predicate::str::contains(
            "sms notification sent to +15550100: Your order shipped",
        ));
}

#[test]
fn test_malformed_rows_are_reported_and_skipped() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "kind,method,channel,amount,recipient,title,message").unwrap();
    writeln!(csv, "teleport,,,,,,").unwrap();
    writeln!(csv, "payment,bank,,-2.0,,,").unwrap();
    writeln!(csv, "payment,bank,,3.0,,,").unwrap();

    let mut cmd = Command::new(cargo_bin!("switchboard"));
    cmd.arg("dispatch").arg(csv.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading request"))
        .stderr(predicate::str::contains("Error dispatching request"))
        .stderr(predicate::str::contains("Amount must be non-negative"))
        .stdout(predicate::str::contains(
            "payment,payment of 3.0 accepted via bank",
        ));
}

#[test]
fn test_unknown_payment_method_is_a_read_error() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "kind,method,channel,amount,recipient,title,message").unwrap();
    writeln!(csv, "payment,barter,,1.0,,,").unwrap();

    let mut cmd = Command::new(cargo_bin!("switchboard"));
    cmd.arg("dispatch").arg(csv.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading request"))
        .stdout(predicate::str::contains("kind,detail"));
}

#[test]
fn test_alert_subcommand_defaults() {
    let mut cmd = Command::new(cargo_bin!("switchboard"));
    cmd.args([
        "alert",
        "--title",
        "Disk usage",
        "--message",
        "volume /data at 91%",
        "--recipient",
        "ops@example.com",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Disk usage\""))
        .stdout(predicate::str::contains("\"real_time\": true"))
        .stdout(predicate::str::contains("\"priority\": \"medium\""));
}

#[test]
fn test_alert_subcommand_critical_override() {
    let mut cmd = Command::new(cargo_bin!("switchboard"));
    cmd.args([
        "alert",
        "--title",
        "Service down",
        "--message",
        "checkout unreachable",
        "--recipient",
        "oncall@example.com",
        "--critical",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"priority\": \"critical\""))
        .stdout(predicate::str::contains("\"real_time\": true"));
}
