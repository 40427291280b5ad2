//! N-th minimum lookup service

use std::path::PathBuf;

use shared::{nth_minimum, validate_rank};

use crate::error::{AppError, AppResult};
use crate::services::spreadsheet;

/// Service resolving the N-th smallest value of a spreadsheet column
#[derive(Clone, Copy, Default)]
pub struct MinimumService;

impl MinimumService {
    pub fn new() -> Self {
        Self
    }

    /// Find the `n`-th smallest number in the first column of the workbook
    /// at `path`.
    pub async fn find_nth_minimum(&self, path: impl Into<PathBuf>, n: i64) -> AppResult<i64> {
        let path = path.into();

        // Workbook parsing is blocking file I/O; keep it off the async workers.
        let numbers =
            tokio::task::spawn_blocking(move || spreadsheet::read_numeric_column(&path))
                .await
                .map_err(|e| AppError::Internal(anyhow::anyhow!("worker task failed: {e}")))??;

        let rank = usize::try_from(n).unwrap_or(0);
        validate_rank(rank, numbers.len())?;

        Ok(nth_minimum(&numbers, rank)?)
    }
}
