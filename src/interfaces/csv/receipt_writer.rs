use crate::domain::request::Receipt;
use crate::error::Result;
use std::io::Write;

/// Writes receipts as CSV to any `Write` sink (e.g., stdout).
pub struct ReceiptWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_receipts(&mut self, receipts: &[Receipt]) -> Result<()> {
        self.writer.write_record(["kind", "detail"])?;
        for receipt in receipts {
            self.writer
                .write_record([receipt.kind_label(), &receipt.to_string()])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
