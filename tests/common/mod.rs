use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 7] = [
    "kind",
    "method",
    "channel",
    "amount",
    "recipient",
    "title",
    "message",
];

pub fn generate_payment_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(HEADER)?;
    for _ in 1..=rows {
        wtr.write_record(["payment", "bank", "", "1.0", "", "", ""])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes a randomized mix of all request kinds.
pub fn generate_mixed_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let methods = ["bank", "stripe", "paypal", "crypto"];
    let channels = ["sms", "email", "in_app", "whatsapp"];

    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(HEADER)?;

    let mut rng = rand::thread_rng();
    for i in 1..=rows {
        match rng.gen_range(0..4) {
            0 => {
                let method = methods[rng.gen_range(0..methods.len())];
                wtr.write_record(["payment", method, "", "1.0", "", "", ""])?;
            }
            1 => {
                let channel = channels[rng.gen_range(0..channels.len())];
                let recipient = format!("user-{i}");
                wtr.write_record(["notification", "", channel, "", &recipient, "", "ping"])?;
            }
            2 => {
                wtr.write_record(["alert", "", "", "", "ops@example.com", "check", "ping"])?;
            }
            _ => {
                wtr.write_record([
                    "critical_alert",
                    "",
                    "",
                    "",
                    "oncall@example.com",
                    "check",
                    "ping",
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
