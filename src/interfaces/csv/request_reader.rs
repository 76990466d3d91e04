use crate::domain::request::DispatchRequest;
use crate::error::{DispatchError, Result};
use std::io::Read;

/// Reads dispatch requests from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<DispatchRequest>`. It handles whitespace trimming and flexible
/// record lengths automatically, so a malformed row yields an error item
/// without ending the stream.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<DispatchRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(DispatchError::from))
    }
}
