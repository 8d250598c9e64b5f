mod local;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{config::Config, menu::OperationDay};

use local::{entry_title, DayStore, DAYS_DIR};

/// Date format of archive file names; independent of how dates are shown anywhere else.
pub const ENTRY_FILE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveEntry {
    pub operation_day: OperationDay,
    pub last_updated_at: DateTime<Utc>,
    pub scraper_version_identifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveFileEntry {
    pub title: String,
    pub url: String,
}

pub type ArchiveIndex = Vec<ArchiveFileEntry>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Unchanged,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SaveReport {
    pub saved: usize,
    pub skipped: usize,
    pub failed: usize,
}

#[derive(Debug)]
pub struct Archive {
    store: DayStore,
    archive_url: String,
    scraper_version: &'static str,
}

impl Archive {
    pub fn new(config: &Config) -> Self {
        Self {
            store: DayStore::open(&config.output_dir),
            archive_url: config.archive_url.clone(),
            scraper_version: config.scraper_version,
        }
    }

    /// Writes every day that changed since the last run, then rebuilds the index.
    ///
    /// A day that fails to write is counted in the report and the rest still go through.
    pub async fn save_days(&self, days: &[OperationDay]) -> crate::Result<SaveReport> {
        self.store.create_dirs().await?;

        let mut report = SaveReport::default();
        for day in days {
            match self.save_day(day).await {
                Ok(SaveOutcome::Saved) => report.saved += 1,
                Ok(SaveOutcome::Unchanged) => report.skipped += 1,
                Err(e) => {
                    log::error!(
                        "{} - Failed to save {}: {e}",
                        self.scraper_version,
                        entry_file_name(day)
                    );
                    report.failed += 1;
                }
            }
        }

        self.rebuild_index().await?;
        Ok(report)
    }

    pub async fn save_day(&self, day: &OperationDay) -> crate::Result<SaveOutcome> {
        let file_name = entry_file_name(day);
        let path = self.store.entry_path(&file_name);

        if let Some(existing) = self.store.load(&file_name).await {
            if existing.operation_day == *day {
                log::info!(
                    "{} - Skipping {} because it is already up-to-date",
                    self.scraper_version,
                    path.display()
                );
                return Ok(SaveOutcome::Unchanged);
            }
        }

        let entry = ArchiveEntry {
            operation_day: day.clone(),
            last_updated_at: Utc::now(),
            scraper_version_identifier: self.scraper_version.to_string(),
        };
        log::info!("{} - Saving {}", self.scraper_version, path.display());
        self.store.save(&file_name, &entry).await?;
        Ok(SaveOutcome::Saved)
    }

    /// Lists every entry on disk and writes them, sorted by title, as the index.
    pub async fn rebuild_index(&self) -> crate::Result<ArchiveIndex> {
        let mut index: ArchiveIndex = self
            .store
            .list()
            .await?
            .into_iter()
            .map(|file_name| ArchiveFileEntry {
                title: entry_title(&file_name).to_string(),
                url: format!("{}/{DAYS_DIR}/{file_name}", self.archive_url),
            })
            .collect();
        index.sort_by(|a, b| a.title.cmp(&b.title));

        log::info!("{} - Saving index file", self.scraper_version);
        self.store.save_index(&index).await?;
        Ok(index)
    }
}

pub fn entry_file_name(day: &OperationDay) -> String {
    format!(
        "{}.json",
        day.calendar_date().format(ENTRY_FILE_DATE_FORMAT)
    )
}
