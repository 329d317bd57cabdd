//! Movie entity - A catalog record and its partial-draft counterpart

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{DomainError, MovieId};

/// A movie as the catalog stores and lists it.
///
/// `year`, `directors`, `cast` and `plot` are nullable; they serialize as
/// explicit `null` rather than being omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Assigned by the server. Rows appended locally after a create whose
    /// response carried no id have none until the next full reload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MovieId>,
    #[serde(default)]
    pub year: Option<i32>,
    pub title: String,
    pub origin_ethnicity: String,
    #[serde(default)]
    pub directors: Option<String>,
    #[serde(default)]
    pub cast: Option<String>,
    pub genre: String,
    pub wiki_url: String,
    #[serde(default)]
    pub plot: Option<String>,
}

impl Movie {
    /// Text shown for `field` in a table cell or matched by a filter.
    /// Null fields render as the empty string.
    pub fn field_text(&self, field: MovieField) -> String {
        match field {
            MovieField::Year => self.year.map(|y| y.to_string()).unwrap_or_default(),
            MovieField::Title => self.title.clone(),
            MovieField::OriginEthnicity => self.origin_ethnicity.clone(),
            MovieField::Directors => self.directors.clone().unwrap_or_default(),
            MovieField::Cast => self.cast.clone().unwrap_or_default(),
            MovieField::Genre => self.genre.clone(),
            MovieField::WikiUrl => self.wiki_url.clone(),
            MovieField::Plot => self.plot.clone().unwrap_or_default(),
        }
    }
}

/// A partial movie record.
///
/// Every field is optional and omitted from JSON when unset. The nullable
/// fields use a second `Option` layer so that "not supplied" (`None`) and
/// "explicitly null" (`Some(None)`) stay distinct through a round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDraft {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable"
    )]
    pub year: Option<Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_ethnicity: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable"
    )]
    pub directors: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable"
    )]
    pub cast: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki_url: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable"
    )]
    pub plot: Option<Option<String>>,
}

fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl MovieDraft {
    /// Defaults applied before every create: the nullable fields start out
    /// as explicit nulls.
    pub fn creation_defaults() -> Self {
        Self {
            directors: Some(None),
            cast: Some(None),
            plot: Some(None),
            ..Self::default()
        }
    }

    /// Overlay `self` onto `base`: every field set in `self` wins, every
    /// unset field falls back to `base`.
    pub fn merged_over(self, base: MovieDraft) -> MovieDraft {
        MovieDraft {
            year: self.year.or(base.year),
            title: self.title.or(base.title),
            origin_ethnicity: self.origin_ethnicity.or(base.origin_ethnicity),
            directors: self.directors.or(base.directors),
            cast: self.cast.or(base.cast),
            genre: self.genre.or(base.genre),
            wiki_url: self.wiki_url.or(base.wiki_url),
            plot: self.plot.or(base.plot),
        }
    }

    /// The body sent on create: `self` merged over [`Self::creation_defaults`].
    pub fn with_creation_defaults(self) -> MovieDraft {
        self.merged_over(Self::creation_defaults())
    }

    /// Build a full record, failing on the first missing required field.
    /// `year` must be supplied but may be null.
    pub fn into_movie(self, id: Option<MovieId>) -> Result<Movie, DomainError> {
        Ok(Movie {
            id,
            year: self.year.ok_or(DomainError::missing_field("year"))?,
            title: self.title.ok_or(DomainError::missing_field("title"))?,
            origin_ethnicity: self
                .origin_ethnicity
                .ok_or(DomainError::missing_field("origin_ethnicity"))?,
            directors: self.directors.flatten(),
            cast: self.cast.flatten(),
            genre: self.genre.ok_or(DomainError::missing_field("genre"))?,
            wiki_url: self
                .wiki_url
                .ok_or(DomainError::missing_field("wiki_url"))?,
            plot: self.plot.flatten(),
        })
    }

    /// The record as submitted, for showing it locally once the server has
    /// accepted it. Unlike [`Self::into_movie`] this never fails: fields the
    /// draft leaves out show up blank.
    pub fn into_submitted(self, id: Option<MovieId>) -> Movie {
        Movie {
            id,
            year: self.year.flatten(),
            title: self.title.unwrap_or_default(),
            origin_ethnicity: self.origin_ethnicity.unwrap_or_default(),
            directors: self.directors.flatten(),
            cast: self.cast.flatten(),
            genre: self.genre.unwrap_or_default(),
            wiki_url: self.wiki_url.unwrap_or_default(),
            plot: self.plot.flatten(),
        }
    }
}

impl From<&Movie> for MovieDraft {
    fn from(movie: &Movie) -> Self {
        Self {
            year: Some(movie.year),
            title: Some(movie.title.clone()),
            origin_ethnicity: Some(movie.origin_ethnicity.clone()),
            directors: Some(movie.directors.clone()),
            cast: Some(movie.cast.clone()),
            genre: Some(movie.genre.clone()),
            wiki_url: Some(movie.wiki_url.clone()),
            plot: Some(movie.plot.clone()),
        }
    }
}

/// The editable columns of a movie, by their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MovieField {
    Year,
    Title,
    OriginEthnicity,
    Directors,
    Cast,
    Genre,
    WikiUrl,
    Plot,
}

impl MovieField {
    pub const ALL: [MovieField; 8] = [
        MovieField::Year,
        MovieField::Title,
        MovieField::OriginEthnicity,
        MovieField::Directors,
        MovieField::Cast,
        MovieField::Genre,
        MovieField::WikiUrl,
        MovieField::Plot,
    ];

    /// JSON key and database column name
    pub fn as_str(&self) -> &'static str {
        match self {
            MovieField::Year => "year",
            MovieField::Title => "title",
            MovieField::OriginEthnicity => "origin_ethnicity",
            MovieField::Directors => "directors",
            MovieField::Cast => "cast",
            MovieField::Genre => "genre",
            MovieField::WikiUrl => "wiki_url",
            MovieField::Plot => "plot",
        }
    }
}

impl fmt::Display for MovieField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovieField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MovieField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown movie field: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_movie() -> Movie {
        Movie {
            id: Some(MovieId::from(1)),
            year: Some(1939),
            title: "The Wizard of Oz".to_string(),
            origin_ethnicity: "American".to_string(),
            directors: Some("Victor Fleming".to_string()),
            cast: None,
            genre: "musical".to_string(),
            wiki_url: "https://en.wikipedia.org/wiki/The_Wizard_of_Oz_(1939_film)".to_string(),
            plot: None,
        }
    }

    #[test]
    fn creation_defaults_merge_under_partial_draft() {
        let draft = MovieDraft {
            title: Some("X".to_string()),
            year: Some(Some(2000)),
            ..MovieDraft::default()
        };

        let body = serde_json::to_value(draft.with_creation_defaults()).unwrap();

        assert_eq!(
            body,
            json!({
                "directors": null,
                "cast": null,
                "plot": null,
                "title": "X",
                "year": 2000,
            })
        );
    }

    #[test]
    fn supplied_values_override_defaults() {
        let draft = MovieDraft {
            directors: Some(Some("Jane Campion".to_string())),
            ..MovieDraft::default()
        };

        let merged = draft.with_creation_defaults();

        assert_eq!(merged.directors, Some(Some("Jane Campion".to_string())));
        assert_eq!(merged.cast, Some(None));
    }

    #[test]
    fn explicit_null_survives_deserialization() {
        let draft: MovieDraft = serde_json::from_value(json!({ "cast": null })).unwrap();
        assert_eq!(draft.cast, Some(None));
        assert_eq!(draft.plot, None);
    }

    #[test]
    fn into_movie_requires_core_fields() {
        let draft = MovieDraft {
            year: Some(Some(2001)),
            title: Some("Amélie".to_string()),
            ..MovieDraft::default()
        };

        assert_eq!(
            draft.into_movie(None),
            Err(DomainError::missing_field("origin_ethnicity"))
        );
    }

    #[test]
    fn draft_from_movie_round_trips() {
        let movie = sample_movie();
        let rebuilt = MovieDraft::from(&movie).into_movie(movie.id.clone()).unwrap();
        assert_eq!(rebuilt, movie);
    }

    #[test]
    fn movie_serializes_nullable_fields_as_null() {
        let value = serde_json::to_value(sample_movie()).unwrap();
        assert_eq!(value["cast"], serde_json::Value::Null);
        assert_eq!(value["id"], json!(1));
    }

    #[test]
    fn field_names_parse_back() {
        for field in MovieField::ALL {
            assert_eq!(field.as_str().parse::<MovieField>().unwrap(), field);
        }
        assert!("date_created".parse::<MovieField>().is_err());
    }

    #[test]
    fn field_text_renders_nulls_as_empty() {
        let movie = sample_movie();
        assert_eq!(movie.field_text(MovieField::Year), "1939");
        assert_eq!(movie.field_text(MovieField::Cast), "");

        let undated = Movie { year: None, ..movie };
        assert_eq!(undated.field_text(MovieField::Year), "");
    }

    #[test]
    fn null_year_is_kept_through_draft_and_wire() {
        let draft: MovieDraft = serde_json::from_value(json!({ "year": null })).unwrap();
        assert_eq!(draft.year, Some(None));

        let movie = Movie { year: None, ..sample_movie() };
        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(value["year"], serde_json::Value::Null);
        let rebuilt = MovieDraft::from(&movie).into_movie(movie.id.clone()).unwrap();
        assert_eq!(rebuilt.year, None);
    }

    #[test]
    fn submitted_partial_draft_becomes_a_row_with_blanks() {
        let draft = MovieDraft {
            title: Some("X".to_string()),
            year: Some(Some(2000)),
            ..MovieDraft::default()
        };

        let movie = draft.with_creation_defaults().into_submitted(Some(MovieId::from(9)));

        assert_eq!(movie.id, Some(MovieId::from(9)));
        assert_eq!(movie.title, "X");
        assert_eq!(movie.year, Some(2000));
        assert_eq!(movie.origin_ethnicity, "");
        assert_eq!(movie.directors, None);
    }
}
