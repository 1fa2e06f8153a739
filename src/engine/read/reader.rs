use std::path::PathBuf;

use tracing::warn;

use crate::engine::core::decode::{DeltaDecoder, TopDecoder};
use crate::engine::core::list::DivergencePolicy;
use crate::engine::core::view::{DeltaBuffers, DeltaView, TopBuffers, TopView};
use crate::engine::schema::{DeltaSelect, TopSelect};

/// Pull iterator over flat shard files: each `next` yields one decoded,
/// range-filtered batch, or `None` once every shard is drained.
///
/// Unreadable files and blocks are logged and skipped; no error crosses a
/// shard-file boundary.
pub struct TopBatchReader {
    files: Vec<PathBuf>,
    file_idx: usize,
    decoder: Option<TopDecoder>,
    start_ns: i64,
    end_ns: i64,
    sel: TopSelect,
    bufs: TopBuffers,
}

impl TopBatchReader {
    pub fn new(files: Vec<PathBuf>, start_ns: i64, end_ns: i64, sel: TopSelect) -> Self {
        Self {
            files,
            file_idx: 0,
            decoder: None,
            start_ns,
            end_ns,
            sel,
            bufs: TopBuffers::default(),
        }
    }

    /// The view borrows this reader's buffers and is invalidated by the
    /// next call.
    pub fn next(&mut self) -> Option<TopView<'_>> {
        loop {
            let Some(decoder) = self.decoder.as_mut() else {
                let path = self.files.get(self.file_idx)?;
                match TopDecoder::open(path) {
                    Ok(d) => self.decoder = Some(d),
                    Err(e) => {
                        warn!(
                            path = %path.display(),
                            error = %e,
                            "failed to open shard file; skipping"
                        );
                        self.file_idx += 1;
                    }
                }
                continue;
            };

            match decoder.next_block(self.start_ns, self.end_ns, &self.sel, &mut self.bufs) {
                Ok(true) => return Some(self.bufs.view(&self.sel)),
                Ok(false) => {
                    self.decoder = None;
                    self.file_idx += 1;
                }
                Err(e) => {
                    warn!(
                        path = %self.files[self.file_idx].display(),
                        error = %e,
                        "shard decode failed; skipping rest of file"
                    );
                    self.decoder = None;
                    self.file_idx += 1;
                }
            }
        }
    }
}

/// Pull iterator over nested shard files; same contract as
/// [`TopBatchReader`].
pub struct DeltaBatchReader {
    files: Vec<PathBuf>,
    file_idx: usize,
    decoder: Option<DeltaDecoder>,
    start_ns: i64,
    end_ns: i64,
    sel: DeltaSelect,
    policy: DivergencePolicy,
    bufs: DeltaBuffers,
}

impl DeltaBatchReader {
    pub fn new(files: Vec<PathBuf>, start_ns: i64, end_ns: i64, sel: DeltaSelect) -> Self {
        Self {
            files,
            file_idx: 0,
            decoder: None,
            start_ns,
            end_ns,
            sel,
            policy: DivergencePolicy::default(),
            bufs: DeltaBuffers::default(),
        }
    }

    /// Override how a mid-row divergence between sibling list cursors is
    /// handled. `Truncate` keeps a best-effort partial list; `Fail` skips
    /// the whole shard file.
    pub fn with_divergence_policy(mut self, policy: DivergencePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The view borrows this reader's buffers and is invalidated by the
    /// next call.
    pub fn next(&mut self) -> Option<DeltaView<'_>> {
        loop {
            let Some(decoder) = self.decoder.as_mut() else {
                let path = self.files.get(self.file_idx)?;
                match DeltaDecoder::open(path, self.policy) {
                    Ok(d) => self.decoder = Some(d),
                    Err(e) => {
                        warn!(
                            path = %path.display(),
                            error = %e,
                            "failed to open shard file; skipping"
                        );
                        self.file_idx += 1;
                    }
                }
                continue;
            };

            match decoder.next_block(self.start_ns, self.end_ns, &self.sel, &mut self.bufs) {
                Ok(true) => return Some(self.bufs.view(&self.sel)),
                Ok(false) => {
                    self.decoder = None;
                    self.file_idx += 1;
                }
                Err(e) => {
                    warn!(
                        path = %self.files[self.file_idx].display(),
                        error = %e,
                        "shard decode failed; skipping rest of file"
                    );
                    self.decoder = None;
                    self.file_idx += 1;
                }
            }
        }
    }
}
