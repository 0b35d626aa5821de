//! Streaming import of the ranking feed.
//!
//! The feed is a gzip-compressed TSV of several gigabytes. Bytes flow from the
//! HTTP body (or a local file) through the gzip decoder into a line reader and
//! are parsed one line at a time; nothing larger than a single line and the
//! reader buffers is held in memory. Reading stops as soon as `limit` records
//! have been written.

mod parse;
mod writer;

use std::io;
use std::path::Path;

use async_compression::tokio::bufread::GzipDecoder;
use futures::TryStreamExt;
use log::{debug, info};
use reqwest::Client;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio_util::io::StreamReader;

use crate::app::ProgressTicker;
use crate::config::PROGRESS_INTERVAL;
use crate::error_handling::{ImportError, StorageError};

pub use parse::{parse_line, parse_raw_line, reverse_labels, LineOutcome, SkipReason};
pub use writer::{load_domain_list, DomainListWriter};

/// Decompressed, line-readable feed.
pub type FeedReader = Box<dyn AsyncBufRead + Unpin + Send>;

/// Counts produced by one pass over the feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Records written to the output
    pub records: usize,
    /// Malformed lines dropped (the header is not counted)
    pub skipped: usize,
}

/// Opens a feed source as a decompressed line reader.
///
/// `source` is either an `http(s)://` URL, fetched with `client`, or a path to
/// a local gzip file.
///
/// # Errors
///
/// - `ImportError::Upstream` if the URL answers with a non-success status
/// - `ImportError::Request` if the request fails
/// - `ImportError::Storage` if the local file cannot be opened
pub async fn open_feed(client: &Client, source: &str) -> Result<FeedReader, ImportError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let response = client
            .get(source)
            .send()
            .await
            .map_err(|e| ImportError::Request {
                url: source.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::Upstream {
                url: source.to_string(),
                status,
            });
        }
        info!("Streaming feed from {}", source);

        let body = Box::pin(response.bytes_stream().map_err(io::Error::other));
        Ok(gunzip(StreamReader::new(body)))
    } else {
        let file = tokio::fs::File::open(source)
            .await
            .map_err(|e| StorageError::Read {
                path: source.into(),
                source: e,
            })?;
        info!("Reading feed from {}", source);
        Ok(gunzip(BufReader::new(file)))
    }
}

/// Wraps a compressed byte reader in a gzip decoder and a line buffer.
///
/// Published archives are often several gzip members concatenated, so
/// decoding continues across member boundaries.
pub fn gunzip<R>(compressed: R) -> FeedReader
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let mut decoder = GzipDecoder::new(compressed);
    decoder.multiple_members(true);
    Box::new(BufReader::new(decoder))
}

/// Parses lines from `reader` and writes up to `limit` records.
///
/// Malformed lines are logged and skipped without counting toward `limit`.
/// Returns as soon as `limit` records are written, without draining the
/// rest of the input.
///
/// # Errors
///
/// - `ImportError::Decompress` if the byte stream or the gzip payload breaks
/// - `ImportError::Storage` if a record cannot be written
pub async fn stream_records<R>(
    mut reader: R,
    limit: usize,
    reverse: bool,
    writer: &mut DomainListWriter,
) -> Result<StreamSummary, ImportError>
where
    R: AsyncBufRead + Unpin,
{
    let mut summary = StreamSummary::default();
    let mut header_seen = false;
    let mut line = Vec::with_capacity(256);
    let mut line_number = 0usize;
    let mut ticker = ProgressTicker::new(PROGRESS_INTERVAL);

    while summary.records < limit {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .await
            .map_err(ImportError::Decompress)?;
        if read == 0 {
            break;
        }
        line_number += 1;

        match parse_raw_line(&line, header_seen, reverse) {
            LineOutcome::Header => {
                debug!("Skipping header at line {}", line_number);
                header_seen = true;
            }
            LineOutcome::Skip(reason) => {
                debug!("Skipping malformed line {}: {:?}", line_number, reason);
                summary.skipped += 1;
            }
            LineOutcome::Record(domain) => {
                writer.push(&domain).await?;
                summary.records += 1;
                ticker.tick(summary.records);
            }
        }
    }

    ticker.finish(summary.records);
    Ok(summary)
}

/// Streams `reader` into a fresh domain list at `output`.
///
/// The output is closed exactly once whether the run ends at the limit, at
/// end of input, or on an error.
pub async fn import_to_file<R>(
    reader: R,
    output: &Path,
    limit: usize,
    reverse: bool,
) -> Result<StreamSummary, ImportError>
where
    R: AsyncBufRead + Unpin,
{
    let mut writer = DomainListWriter::create(output).await?;
    let streamed = stream_records(reader, limit, reverse, &mut writer).await;
    let closed = writer.finish().await;

    match (streamed, closed) {
        (Ok(summary), Ok(_)) => Ok(summary),
        (Err(e), _) => Err(e),
        (Ok(_), Err(e)) => Err(e.into()),
    }
}
