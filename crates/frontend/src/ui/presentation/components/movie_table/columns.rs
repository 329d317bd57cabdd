//! Column configuration for the movie table

use moviedesk_domain::MovieField;

/// Wikipedia wordmark shown in place of the raw article URL
pub const WIKIPEDIA_LOGO_URL: &str =
    "https://upload.wikimedia.org/wikipedia/en/thumb/8/80/Wikipedia-logo-v2.svg/440px-Wikipedia-logo-v2.svg.png";

/// Rendered width of the Wikipedia logo, in pixels
pub const WIKIPEDIA_LOGO_WIDTH: u32 = 30;

/// How a cell turns a movie field into markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRender {
    Text,
    /// Icon link to the article, opened in a new tab
    WikiLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub field: MovieField,
    pub title: &'static str,
    pub render: CellRender,
}

impl ColumnDef {
    const fn text(field: MovieField, title: &'static str) -> Self {
        Self {
            field,
            title,
            render: CellRender::Text,
        }
    }
}

/// Table columns, in display order. `plot` is not a column; it lives in the
/// detail panel.
pub const MOVIE_COLUMNS: [ColumnDef; 7] = [
    ColumnDef::text(MovieField::Year, "Year"),
    ColumnDef::text(MovieField::Title, "Title"),
    ColumnDef::text(MovieField::OriginEthnicity, "Origin/Ethnicity"),
    ColumnDef::text(MovieField::Directors, "Directors"),
    ColumnDef::text(MovieField::Cast, "Cast"),
    ColumnDef::text(MovieField::Genre, "Genre"),
    ColumnDef {
        field: MovieField::WikiUrl,
        title: "Wiki URL",
        render: CellRender::WikiLink,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_is_reserved_for_detail_panel() {
        assert!(MOVIE_COLUMNS.iter().all(|c| c.field != MovieField::Plot));
    }

    #[test]
    fn only_wiki_url_renders_as_link() {
        let links: Vec<_> = MOVIE_COLUMNS
            .iter()
            .filter(|c| c.render == CellRender::WikiLink)
            .map(|c| c.field)
            .collect();
        assert_eq!(links, [MovieField::WikiUrl]);
    }
}
