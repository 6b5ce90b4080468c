//! Multipart upload payloads and progress reporting
//!
//! The file bytes are wrapped in a counting stream so an optional callback
//! receives the integer percentage (0-100) of the total payload sent so far.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;
use futures::StreamExt;

/// Callback invoked with the integer percentage (0-100) of bytes sent
pub type ProgressFn = Arc<dyn Fn(u8) + Send + Sync>;

/// How much of the payload is handed to the transport at a time
const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

/// One file within a multipart upload
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// Form field name, e.g. `video` or `thumbnail`
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl UploadFile {
    pub fn new(
        field: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A multipart form: plain text fields plus zero or more files
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    pub(crate) fields: Vec<(String, String)>,
    pub(crate) files: Vec<UploadFile>,
}

impl UploadRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain text field
    pub fn text(mut self, name: &str, value: impl ToString) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    /// Add a file part
    pub fn file(mut self, file: UploadFile) -> Self {
        self.files.push(file);
        self
    }

    /// Total number of file bytes in the request
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(UploadFile::len).sum()
    }
}

/// Split `data` into transport-sized chunks, reporting cumulative progress
/// against `total` through `on_progress` as each chunk is pulled.
///
/// The counter is shared across all files of one upload so the percentage
/// covers the whole payload, not just the current part.
pub(crate) fn progress_stream(
    data: Bytes,
    sent: Arc<AtomicU64>,
    total: u64,
    on_progress: ProgressFn,
) -> impl futures::Stream<Item = Result<Bytes, std::io::Error>> + Send + 'static {
    let mut chunks = Vec::new();
    let mut offset = 0;
    while offset < data.len() {
        let end = usize::min(offset + UPLOAD_CHUNK_SIZE, data.len());
        chunks.push(data.slice(offset..end));
        offset = end;
    }

    futures::stream::iter(chunks).map(move |chunk| {
        let done = sent.fetch_add(chunk.len() as u64, Ordering::SeqCst) + chunk.len() as u64;
        on_progress(percent_of(done, total));
        Ok(chunk)
    })
}

/// Integer percentage of `done` over `total`, clamped to 0-100
pub(crate) fn percent_of(done: u64, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    let percent = (done as f64 / total as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use futures::StreamExt;

    use super::*;

    #[test]
    fn percentages_are_rounded_and_clamped() {
        assert_eq!(percent_of(0, 300), 0);
        assert_eq!(percent_of(1, 300), 0);
        assert_eq!(percent_of(2, 300), 1);
        assert_eq!(percent_of(150, 300), 50);
        assert_eq!(percent_of(300, 300), 100);
        assert_eq!(percent_of(400, 300), 100);
        assert_eq!(percent_of(0, 0), 100);
    }

    #[tokio::test]
    async fn progress_reaches_one_hundred_and_is_monotone() {
        let data = Bytes::from(vec![7u8; 200 * 1024]);
        let total = data.len() as u64;
        let seen: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let on_progress: ProgressFn = Arc::new(move |pct| {
            sink.lock().expect("progress sink").push(pct);
        });

        let sent = Arc::new(AtomicU64::new(0));
        let chunks: Vec<_> = progress_stream(data.clone(), sent, total, on_progress)
            .collect()
            .await;

        let streamed: usize = chunks
            .iter()
            .map(|c| c.as_ref().expect("chunk").len())
            .sum();
        assert_eq!(streamed as u64, total);

        let seen = seen.lock().expect("progress sink");
        assert_eq!(seen.len(), chunks.len());
        assert!(seen.windows(2).all(|w| w[0] <= w[1]), "progress went backwards");
        assert_eq!(*seen.last().expect("at least one tick"), 100);
    }

    #[test]
    fn request_totals_span_all_files() {
        let request = UploadRequest::new()
            .text("title", "My Film")
            .file(UploadFile::new("video", "film.mp4", "video/mp4", vec![0u8; 1000]))
            .file(UploadFile::new("thumbnail", "thumb.jpg", "image/jpeg", vec![0u8; 24]));

        assert_eq!(request.total_bytes(), 1024);
    }
}
