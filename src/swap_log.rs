//! Swap Activity Log
//!
//! Appends one timestamped plain-text line per swap attempt to the log
//! file configured in `swap_log_file` (default `logs/swap_log.txt`),
//! mirroring the console output. The file is opened in append mode so
//! repeated runs accumulate a single history.
//!
//! Write errors are warned about and swallowed — logging must never take
//! down a run.
//!
//! Author: AI-Generated
//! Created: 2026-02-03

use crate::types::SwapDirection;
use alloy::primitives::TxHash;
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Append-only swap log
pub struct SwapLog {
    path: PathBuf,
    file: File,
}

impl SwapLog {
    /// Open (or create) the swap log, creating parent directories as needed.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open swap log: {}", path.display()))?;

        Ok(Self { path, file })
    }

    /// Record a successful swap submission.
    pub fn success(&mut self, direction: SwapDirection, token: &str, tx_hash: TxHash) {
        self.write_line(&format!("Swap {} | TX Hash: {}", direction.describe(token), tx_hash));
    }

    /// Record a failed swap attempt.
    pub fn failure(&mut self, direction: SwapDirection, token: &str, error: &anyhow::Error) {
        let line = match direction {
            SwapDirection::NativeToToken => format!("Error swap to {}: {:#}", token, error),
            SwapDirection::TokenToNative => format!("Error swap from {}: {:#}", token, error),
        };
        self.write_line(&line);
    }

    fn write_line(&mut self, message: &str) {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
        if let Err(e) = writeln!(self.file, "{} {}", timestamp, message) {
            warn!("Swap log write error ({}): {}", self.path.display(), e);
            return;
        }
        if let Err(e) = self.file.flush() {
            warn!("Swap log flush error ({}): {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn is_full_tx_hash(s: &str) -> bool {
        s.len() == 66 && s.starts_with("0x") && s[2..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn test_success_line_has_token_and_hash() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swap_log.txt");
        let token = "0x7ceb23fd6bc0add59e62ac25578270cff1b9f619";
        let hash = TxHash::from([0x11u8; 32]);

        let mut log = SwapLog::new(&path).unwrap();
        log.success(SwapDirection::NativeToToken, token, hash);

        let content = fs::read_to_string(&path).unwrap();
        let line = content.lines().next().unwrap();
        assert!(line.contains(token));

        let hash_str = line.split("TX Hash: ").nth(1).unwrap();
        assert!(is_full_tx_hash(hash_str), "bad tx hash in log line: {}", hash_str);
    }

    #[test]
    fn test_failure_line_has_token_and_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swap_log.txt");
        let token = "not-an-address";

        let mut log = SwapLog::new(&path).unwrap();
        log.failure(SwapDirection::NativeToToken, token, &anyhow!("invalid token address"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains(&format!("Error swap to {}", token)));
        assert!(content.contains("invalid token address"));
    }

    #[test]
    fn test_appends_across_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("swap_log.txt");
        let token = "0xb33eaad8d922b1083446dc23f610c2567fb5180f";

        {
            let mut log = SwapLog::new(&path).unwrap();
            log.success(SwapDirection::NativeToToken, token, TxHash::from([0x22u8; 32]));
        }
        {
            let mut log = SwapLog::new(&path).unwrap();
            log.success(SwapDirection::TokenToNative, token, TxHash::from([0x33u8; 32]));
        }

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains(&format!("MON -> {}", token)));
        assert!(content.contains(&format!("{} -> MON", token)));
    }
}
