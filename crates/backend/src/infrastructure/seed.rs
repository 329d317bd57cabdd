//! Initial catalog data from a CSV export.
//!
//! The file's header row is skipped and columns are read by position:
//! `year, title, origin_ethnicity, directors, cast, genre, wiki_url, plot`.
//! Rows are inserted in batches, one transaction per batch, and only into an
//! empty table so restarts do not duplicate the catalog.

use std::io::Read;
use std::path::Path;

use moviedesk_domain::Movie;
use serde::Deserialize;

use crate::infrastructure::ports::RepoError;
use crate::infrastructure::sqlite::SqliteMovieRepo;

/// Rows per insert transaction
pub const SEED_BATCH_SIZE: usize = 1000;

#[derive(Debug, Deserialize)]
struct SeedRow {
    year: Option<i32>,
    title: String,
    origin_ethnicity: String,
    directors: Option<String>,
    cast: Option<String>,
    genre: String,
    wiki_url: String,
    plot: Option<String>,
}

impl From<SeedRow> for Movie {
    fn from(row: SeedRow) -> Self {
        Movie {
            id: None,
            year: row.year,
            title: row.title,
            origin_ethnicity: row.origin_ethnicity,
            directors: row.directors,
            cast: row.cast,
            genre: row.genre,
            wiki_url: row.wiki_url,
            plot: row.plot,
        }
    }
}

/// Seed from the file at `path` if the table is empty. A missing file is
/// not an error; the catalog simply starts empty.
pub async fn seed_if_empty(repo: &SqliteMovieRepo, path: &Path) -> Result<usize, RepoError> {
    if repo.count().await? > 0 {
        tracing::debug!("Movie table already populated, skipping seed");
        return Ok(0);
    }
    if !path.exists() {
        tracing::info!(path = %path.display(), "Seed file not found, starting with an empty catalog");
        return Ok(0);
    }

    let file = std::fs::File::open(path).map_err(RepoError::seed)?;
    let inserted = seed_from_reader(repo, file, SEED_BATCH_SIZE).await?;
    tracing::info!(path = %path.display(), inserted, "Seeded movie catalog");
    Ok(inserted)
}

/// Insert every data row of `reader`, `batch_size` rows per transaction
pub async fn seed_from_reader<R: Read>(
    repo: &SqliteMovieRepo,
    reader: R,
    batch_size: usize,
) -> Result<usize, RepoError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let mut batch: Vec<Movie> = Vec::with_capacity(batch_size);
    let mut inserted = 0;

    for record in csv.records() {
        let record = record.map_err(RepoError::seed)?;
        let row: SeedRow = record.deserialize(None).map_err(RepoError::seed)?;
        batch.push(row.into());

        if batch.len() >= batch_size.max(1) {
            repo.insert_batch(&batch).await?;
            inserted += batch.len();
            tracing::debug!(inserted, "Seed batch committed");
            batch.clear();
        }
    }

    if !batch.is_empty() {
        repo.insert_batch(&batch).await?;
        inserted += batch.len();
    }

    Ok(inserted)
}
