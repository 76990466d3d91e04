use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use switchboard::application::alerts::AlertService;
use switchboard::application::dispatcher::Dispatcher;
use switchboard::application::notifications::NotificationService;
use switchboard::application::payments::PaymentService;
use switchboard::domain::ports::AuditSinkArc;
use switchboard::infrastructure::audit::InMemoryAuditLog;
use switchboard::infrastructure::gateways::default_gateway_factories;
use switchboard::infrastructure::senders::default_sender_factories;
use switchboard::interfaces::csv::receipt_writer::ReceiptWriter;
use switchboard::interfaces::csv::request_reader::RequestReader;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dispatch a batch of payment/notification/alert requests from a CSV file
    Dispatch {
        /// Input requests CSV file
        input: PathBuf,

        /// Print one JSON receipt per line instead of CSV
        #[arg(long)]
        json: bool,

        /// Print the audit trail to stderr after the batch
        #[arg(long)]
        audit: bool,
    },
    /// Create a single alert from the shared template and print it as JSON
    Alert {
        #[arg(long)]
        title: String,

        #[arg(long)]
        message: String,

        #[arg(long)]
        recipient: String,

        /// Force the highest priority, overriding the template default
        #[arg(long)]
        critical: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Dispatch { input, json, audit } => run_dispatch(input, json, audit).await,
        Command::Alert {
            title,
            message,
            recipient,
            critical,
        } => {
            let alerts = AlertService::default();
            let alert = if critical {
                alerts.create_critical(&title, &message, &recipient)
            } else {
                alerts.create(&title, &message, &recipient)
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&alert).into_diagnostic()?
            );
            Ok(())
        }
    }
}

async fn run_dispatch(input: PathBuf, json: bool, print_audit: bool) -> Result<()> {
    // Registries and the template are built once here; everything after this
    // point only reads them.
    let audit: AuditSinkArc = Arc::new(InMemoryAuditLog::new());
    let dispatcher = Dispatcher::new(
        PaymentService::new(default_gateway_factories(&audit)).into_diagnostic()?,
        NotificationService::new(default_sender_factories(&audit)).into_diagnostic()?,
        AlertService::default(),
    );

    let file = File::open(input).into_diagnostic()?;
    let reader = RequestReader::new(file);
    let mut receipts = Vec::new();
    for request in reader.requests() {
        match request {
            Ok(request) => match dispatcher.dispatch(request).await {
                Ok(receipt) => receipts.push(receipt),
                Err(e) => eprintln!("Error dispatching request: {e}"),
            },
            Err(e) => eprintln!("Error reading request: {e}"),
        }
    }

    if json {
        for receipt in &receipts {
            println!("{}", serde_json::to_string(receipt).into_diagnostic()?);
        }
    } else {
        let stdout = io::stdout();
        let mut writer = ReceiptWriter::new(stdout.lock());
        writer.write_receipts(&receipts).into_diagnostic()?;
    }

    if print_audit {
        for entry in audit.list().await.into_diagnostic()? {
            eprintln!("{entry}");
        }
    }

    Ok(())
}
