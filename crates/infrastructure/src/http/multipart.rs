//! Multipart form construction with upload progress.

use std::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use alumnet_application::{ApiError, ProgressFn};
use alumnet_domain::request::{UploadField, UploadForm};
use alumnet_domain::DomainError;
use futures_util::StreamExt as _;
use reqwest::Body;
use reqwest::multipart::{Form, Part};

/// Chunk size for progress-reporting upload streams.
const CHUNK_SIZE: usize = 64 * 1024;

/// Builds a reqwest multipart form from the domain payload.
///
/// File parts get their content type from the payload, or guessed from the
/// file name. With a progress callback, file bytes are streamed in chunks
/// and the callback fires with `(bytes_sent, total)` after each chunk.
pub(crate) fn build_form(
    form: UploadForm,
    progress: Option<ProgressFn>,
) -> Result<Form, ApiError> {
    let total = form.file_bytes();
    let sent = Arc::new(AtomicU64::new(0));
    let mut multipart = Form::new();

    for field in form.fields {
        match field {
            UploadField::Text { name, value } => {
                multipart = multipart.text(name, value);
            }
            UploadField::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                let mime = content_type.unwrap_or_else(|| {
                    mime_guess::from_path(&file_name)
                        .first_or_octet_stream()
                        .to_string()
                });

                let part = match &progress {
                    Some(callback) => {
                        let length = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
                        let stream =
                            progress_stream(bytes, Arc::clone(callback), Arc::clone(&sent), total);
                        Part::stream_with_length(Body::wrap_stream(stream), length)
                    }
                    None => Part::bytes(bytes),
                };

                let part = part.file_name(file_name).mime_str(&mime).map_err(|e| {
                    DomainError::InvalidHeaderValue(format!("content type {mime}: {e}"))
                })?;
                multipart = multipart.part(name, part);
            }
        }
    }

    Ok(multipart)
}

/// Streams owned bytes in chunks, reporting cumulative progress.
fn progress_stream(
    bytes: Vec<u8>,
    callback: ProgressFn,
    sent: Arc<AtomicU64>,
    total: u64,
) -> impl futures_util::Stream<Item = Result<Vec<u8>, Infallible>> {
    let chunks: Vec<Vec<u8>> = bytes.chunks(CHUNK_SIZE).map(<[u8]>::to_vec).collect();
    futures_util::stream::iter(chunks).map(move |chunk| {
        let chunk_len = u64::try_from(chunk.len()).unwrap_or(u64::MAX);
        let so_far = sent.fetch_add(chunk_len, Ordering::SeqCst) + chunk_len;
        callback(so_far, Some(total));
        Ok(chunk)
    })
}
