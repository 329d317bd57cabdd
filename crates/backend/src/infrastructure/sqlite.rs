//! SQLite-backed movie storage.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use moviedesk_domain::{Movie, MovieField, MovieId};

use crate::infrastructure::ports::{ClockPort, MovieRepo, RepoError};

// `cast` is an SQL keyword, so every column list quotes its identifiers.
const SELECT_MOVIE: &str = r#"
    SELECT "id", "year", "title", "origin_ethnicity", "directors", "cast",
           "genre", "wiki_url", "plot"
    FROM "movie"
"#;

const INSERT_MOVIE: &str = r#"
    INSERT INTO "movie" ("year", "title", "origin_ethnicity", "directors", "cast",
                         "genre", "wiki_url", "plot", "date_created")
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

/// SQLite implementation of [`MovieRepo`].
pub struct SqliteMovieRepo {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteMovieRepo {
    /// Open (creating if needed) the database at `db_path` and ensure the
    /// `movie` table exists.
    pub async fn new(db_path: &str, clock: Arc<dyn ClockPort>) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS "movie" (
                "id" INTEGER PRIMARY KEY,
                "year" INTEGER,
                "title" VARCHAR(200) NOT NULL,
                "origin_ethnicity" VARCHAR(200) NOT NULL,
                "directors" TEXT,
                "cast" TEXT,
                "genre" VARCHAR(200) NOT NULL,
                "wiki_url" VARCHAR(200) NOT NULL,
                "plot" TEXT,
                "date_created" TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("create_table", e))?;

        Ok(Self { pool, clock })
    }

    pub async fn count(&self) -> Result<i64, RepoError> {
        let row = sqlx::query(r#"SELECT COUNT(*) AS "n" FROM "movie""#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::database("count", e))?;
        Ok(row.get("n"))
    }

    /// Insert `movies` in one transaction. Either all rows land or none do.
    pub async fn insert_batch(&self, movies: &[Movie]) -> Result<(), RepoError> {
        let created = self.clock.now().to_rfc3339();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("insert_batch", e))?;

        for movie in movies {
            bind_movie(sqlx::query(INSERT_MOVIE), movie)
                .bind(&created)
                .execute(&mut *tx)
                .await
                .map_err(|e| RepoError::database("insert_batch", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepoError::database("insert_batch", e))
    }
}

type SqliteQuery<'q> = sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>;

/// Bind the eight editable columns, in table order
fn bind_movie<'q>(query: SqliteQuery<'q>, movie: &'q Movie) -> SqliteQuery<'q> {
    query
        .bind(movie.year)
        .bind(&movie.title)
        .bind(&movie.origin_ethnicity)
        .bind(&movie.directors)
        .bind(&movie.cast)
        .bind(&movie.genre)
        .bind(&movie.wiki_url)
        .bind(&movie.plot)
}

fn row_to_movie(row: &SqliteRow) -> Result<Movie, RepoError> {
    let read = |e: sqlx::Error| RepoError::database("read_row", e);
    let id: i64 = row.try_get("id").map_err(read)?;

    Ok(Movie {
        id: Some(MovieId::from(id)),
        year: row.try_get("year").map_err(read)?,
        title: row.try_get("title").map_err(read)?,
        origin_ethnicity: row.try_get("origin_ethnicity").map_err(read)?,
        directors: row.try_get("directors").map_err(read)?,
        cast: row.try_get("cast").map_err(read)?,
        genre: row.try_get("genre").map_err(read)?,
        wiki_url: row.try_get("wiki_url").map_err(read)?,
        plot: row.try_get("plot").map_err(read)?,
    })
}

#[async_trait]
impl MovieRepo for SqliteMovieRepo {
    async fn list(&self) -> Result<Vec<Movie>, RepoError> {
        let query = format!(r#"{SELECT_MOVIE} ORDER BY "year" DESC, "id" ASC"#);
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("list", e))?;

        rows.iter().map(row_to_movie).collect()
    }

    async fn get(&self, id: i64) -> Result<Option<Movie>, RepoError> {
        let query = format!(r#"{SELECT_MOVIE} WHERE "id" = ?"#);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("get", e))?;

        row.as_ref().map(row_to_movie).transpose()
    }

    async fn search(&self, field: MovieField, term: &str) -> Result<Vec<Movie>, RepoError> {
        // `field` comes from a closed enum, so the column name is never user text
        let query = format!(
            r#"{SELECT_MOVIE} WHERE "{}" LIKE '%' || ? || '%' ORDER BY "id" ASC"#,
            field.as_str()
        );
        let rows = sqlx::query(&query)
            .bind(term)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("search", e))?;

        rows.iter().map(row_to_movie).collect()
    }

    async fn create(&self, movie: &Movie) -> Result<i64, RepoError> {
        let result = bind_movie(sqlx::query(INSERT_MOVIE), movie)
            .bind(self.clock.now().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("create", e))?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, id: i64, movie: &Movie) -> Result<(), RepoError> {
        let query = sqlx::query(
            r#"
            UPDATE "movie"
            SET "year" = ?, "title" = ?, "origin_ethnicity" = ?, "directors" = ?,
                "cast" = ?, "genre" = ?, "wiki_url" = ?, "plot" = ?
            WHERE "id" = ?
            "#,
        );
        let result = bind_movie(query, movie)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("update", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Movie", id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let result = sqlx::query(r#"DELETE FROM "movie" WHERE "id" = ?"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("delete", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Movie", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn movie(year: i32, title: &str, genre: &str) -> Movie {
        Movie {
            id: None,
            year: Some(year),
            title: title.to_string(),
            origin_ethnicity: "American".to_string(),
            directors: Some("Various".to_string()),
            cast: None,
            genre: genre.to_string(),
            wiki_url: format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_")),
            plot: Some("Things happen.".to_string()),
        }
    }

    async fn open_repo(dir: &tempfile::TempDir) -> SqliteMovieRepo {
        let db_path = dir.path().join("movies.db");
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        SqliteMovieRepo::new(&db_path.to_string_lossy(), Arc::new(FixedClock(now)))
            .await
            .expect("open repo")
    }

    #[tokio::test]
    async fn list_orders_by_year_descending() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = open_repo(&dir).await;
        repo.create(&movie(1931, "City Lights", "comedy")).await.unwrap();
        repo.create(&movie(1999, "The Matrix", "science fiction")).await.unwrap();
        repo.create(&movie(1975, "Jaws", "thriller")).await.unwrap();

        let titles: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();

        assert_eq!(titles, ["The Matrix", "Jaws", "City Lights"]);
    }

    #[tokio::test]
    async fn create_returns_id_and_stamps_date() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = open_repo(&dir).await;

        let id = repo.create(&movie(1975, "Jaws", "thriller")).await.unwrap();
        let stored = repo.get(id).await.unwrap().expect("stored movie");

        assert_eq!(stored.id, Some(MovieId::from(id)));
        assert_eq!(stored.cast, None);
        let created: String = sqlx::query(r#"SELECT "date_created" FROM "movie" WHERE "id" = ?"#)
            .bind(id)
            .fetch_one(&repo.pool)
            .await
            .unwrap()
            .get("date_created");
        assert_eq!(created, "2023-11-14T22:13:20+00:00");
    }

    #[tokio::test]
    async fn search_matches_substring_case_insensitively() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = open_repo(&dir).await;
        repo.create(&movie(1975, "Jaws", "thriller")).await.unwrap();
        repo.create(&movie(1978, "Jaws 2", "thriller")).await.unwrap();
        repo.create(&movie(1977, "Star Wars", "science fiction")).await.unwrap();

        let found = repo.search(MovieField::Title, "jAWs").await.unwrap();
        assert_eq!(found.len(), 2);

        let found = repo.search(MovieField::Cast, "anyone").await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = open_repo(&dir).await;
        let id = repo.create(&movie(1975, "Jaws", "thriller")).await.unwrap();

        let mut edited = movie(1975, "Jaws (1975)", "horror");
        edited.directors = None;
        repo.update(id, &edited).await.unwrap();
        let stored = repo.get(id).await.unwrap().unwrap();
        assert_eq!(stored.title, "Jaws (1975)");
        assert_eq!(stored.directors, None);

        repo.delete(id).await.unwrap();
        assert!(repo.get(id).await.unwrap().is_none());
        assert!(repo.delete(id).await.unwrap_err().is_not_found());
        assert!(repo.update(id, &edited).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn null_year_survives_an_update() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = open_repo(&dir).await;
        let undated = Movie {
            year: None,
            ..movie(1900, "Lost Reel", "drama")
        };
        let id = repo.create(&undated).await.unwrap();

        let edited = Movie {
            title: "Lost Reel (restored)".to_string(),
            ..undated
        };
        repo.update(id, &edited).await.unwrap();

        let stored = repo.get(id).await.unwrap().unwrap();
        assert_eq!(stored.year, None);
        assert_eq!(stored.title, "Lost Reel (restored)");
    }

    #[tokio::test]
    async fn batch_insert_is_counted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = open_repo(&dir).await;

        repo.insert_batch(&[movie(2001, "A", "drama"), movie(2002, "B", "drama")])
            .await
            .unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
