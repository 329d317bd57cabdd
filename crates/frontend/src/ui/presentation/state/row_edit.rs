//! Inline row editing state
//!
//! At most one row is open at a time: the add-row editor, an existing row
//! being edited, or a row waiting on its delete confirmation.

use std::collections::BTreeMap;

use moviedesk_domain::{DomainError, Movie, MovieDraft, MovieField};

/// Raw text of an open editor, keyed by column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorFields {
    values: BTreeMap<MovieField, String>,
}

impl EditorFields {
    /// Blank editor for a new row
    pub fn blank() -> Self {
        Self::default()
    }

    /// Editor pre-filled with a row's current values
    pub fn from_movie(movie: &Movie) -> Self {
        let values = MovieField::ALL
            .into_iter()
            .map(|field| (field, movie.field_text(field)))
            .collect();
        Self { values }
    }

    pub fn get(&self, field: MovieField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: MovieField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Only what was typed. Blank required fields stay unset; blank
    /// nullable fields (year included) become explicit nulls.
    pub fn to_draft(&self) -> Result<MovieDraft, DomainError> {
        let text = |field| {
            let value = self.get(field).trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        let year = text(MovieField::Year)
            .map(|raw| {
                raw.parse::<i32>()
                    .map_err(|_| DomainError::parse(format!("Year must be a number, got {raw}")))
            })
            .transpose()?;

        Ok(MovieDraft {
            year: Some(year),
            title: text(MovieField::Title),
            origin_ethnicity: text(MovieField::OriginEthnicity),
            directors: Some(text(MovieField::Directors)),
            cast: Some(text(MovieField::Cast)),
            genre: text(MovieField::Genre),
            wiki_url: text(MovieField::WikiUrl),
            plot: Some(text(MovieField::Plot)),
        })
    }

    /// The edited record for `original`. Blank required fields keep the
    /// original value, blank nullable ones clear it; the id always comes
    /// from `original`.
    pub fn to_edited(&self, original: &Movie) -> Result<Movie, DomainError> {
        self.to_draft()?
            .merged_over(MovieDraft::from(original))
            .into_movie(original.id.clone())
    }
}

/// Which row, if any, the table has open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RowEdit {
    #[default]
    Idle,
    Adding(EditorFields),
    Editing {
        index: usize,
        fields: EditorFields,
    },
    ConfirmingDelete {
        index: usize,
    },
}

impl RowEdit {
    pub fn is_idle(&self) -> bool {
        matches!(self, RowEdit::Idle)
    }

    /// Editor text for the open add or edit row
    pub fn fields_mut(&mut self) -> Option<&mut EditorFields> {
        match self {
            RowEdit::Adding(fields) | RowEdit::Editing { fields, .. } => Some(fields),
            _ => None,
        }
    }

    pub fn deleting_index(&self) -> Option<usize> {
        match self {
            RowEdit::ConfirmingDelete { index } => Some(*index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moviedesk_domain::MovieId;

    fn seven_samurai() -> Movie {
        Movie {
            id: Some(MovieId::from(12)),
            year: Some(1954),
            title: "Seven Samurai".to_string(),
            origin_ethnicity: "Japanese".to_string(),
            directors: Some("Akira Kurosawa".to_string()),
            cast: Some("Toshiro Mifune".to_string()),
            genre: "samurai".to_string(),
            wiki_url: "https://en.wikipedia.org/wiki/Seven_Samurai".to_string(),
            plot: None,
        }
    }

    #[test]
    fn blank_editor_draft_sets_only_nulls() {
        let draft = EditorFields::blank().to_draft().unwrap();

        assert_eq!(draft.year, Some(None));
        assert_eq!(draft.title, None);
        assert_eq!(draft.directors, Some(None));
        assert_eq!(draft.plot, Some(None));
    }

    #[test]
    fn typed_fields_are_trimmed() {
        let mut fields = EditorFields::blank();
        fields.set(MovieField::Year, " 1999 ");
        fields.set(MovieField::Title, "  Test ");

        let draft = fields.to_draft().unwrap();

        assert_eq!(draft.year, Some(Some(1999)));
        assert_eq!(draft.title.as_deref(), Some("Test"));
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        let mut fields = EditorFields::blank();
        fields.set(MovieField::Year, "nineteen");

        let err = fields.to_draft().unwrap_err();

        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn edit_round_trips_unchanged_row() {
        let movie = seven_samurai();
        let fields = EditorFields::from_movie(&movie);

        assert_eq!(fields.get(MovieField::Plot), "");
        assert_eq!(fields.to_edited(&movie).unwrap(), movie);
    }

    #[test]
    fn clearing_a_nullable_field_nulls_it() {
        let movie = seven_samurai();
        let mut fields = EditorFields::from_movie(&movie);
        fields.set(MovieField::Cast, "");
        fields.set(MovieField::Title, "Shichinin no Samurai");

        let edited = fields.to_edited(&movie).unwrap();

        assert_eq!(edited.cast, None);
        assert_eq!(edited.title, "Shichinin no Samurai");
        assert_eq!(edited.id, movie.id);
    }

    #[test]
    fn row_edit_accessors() {
        let mut edit = RowEdit::Editing {
            index: 3,
            fields: EditorFields::blank(),
        };
        assert!(edit.fields_mut().is_some());

        let edit = RowEdit::ConfirmingDelete { index: 1 };
        assert_eq!(edit.deleting_index(), Some(1));
        assert!(!edit.is_idle());
        assert!(RowEdit::default().is_idle());
    }
}
