//! Movie table - editable, filterable, paged catalog grid
//!
//! The table owns only presentation state (filters, page, expanded detail
//! row). The list itself and the open editor live in `CatalogState`; the
//! three row hooks hand changes to the page, which talks to the server.

mod columns;
mod row_editor;
mod table_model;
mod wiki_link;

pub use columns::{CellRender, ColumnDef, MOVIE_COLUMNS};
pub use table_model::{
    AddRowPosition, ColumnFilters, DetailRow, PageWindow, TableOptions, MOVIE_TABLE_OPTIONS,
};

use dioxus::prelude::*;
use moviedesk_domain::{Movie, MovieDraft};

use crate::presentation::state::{use_catalog_state, EditorFields, RowEdit};
use row_editor::RowEditor;
use wiki_link::WikiLink;

/// An edited row: its position in the full list, what it showed, and what
/// the user turned it into
#[derive(Debug, Clone, PartialEq)]
pub struct RowUpdate {
    pub index: usize,
    pub original: Movie,
    pub edited: Movie,
}

/// A row the user confirmed for deletion
#[derive(Debug, Clone, PartialEq)]
pub struct RowDelete {
    pub index: usize,
    pub original: Movie,
}

/// Props for MovieTable
#[derive(Props, Clone, PartialEq)]
pub struct MovieTableProps {
    pub movies: Vec<Movie>,
    pub is_saving: bool,
    pub on_row_add: EventHandler<MovieDraft>,
    pub on_row_update: EventHandler<RowUpdate>,
    pub on_row_delete: EventHandler<RowDelete>,
}

#[component]
pub fn MovieTable(props: MovieTableProps) -> Element {
    let mut state = use_catalog_state();
    let mut filters = use_signal(ColumnFilters::default);
    let mut page = use_signal(|| 0usize);
    let mut expanded = use_signal(DetailRow::default);

    let options = MOVIE_TABLE_OPTIONS;
    let is_saving = props.is_saving;
    let on_row_add = props.on_row_add;
    let on_row_update = props.on_row_update;
    let on_row_delete = props.on_row_delete;

    let edit = state.edit.read().clone();
    let visible = filters.read().visible_rows(&props.movies);
    let window = PageWindow::new(visible.len(), page(), options.page_size);
    let page_rows: Vec<(usize, Movie)> = visible[window.start..window.end]
        .iter()
        .filter_map(|&index| props.movies.get(index).map(|m| (index, m.clone())))
        .collect();
    let padding = options.padding_rows(page_rows.len());
    let data_columns = MOVIE_COLUMNS.len();
    let column_count = data_columns + 1;
    let page_label = window.label();

    let add_editor = match &edit {
        RowEdit::Adding(fields) => Some(fields.clone()),
        _ => None,
    };
    let add_editor = add_editor.map(move |fields| {
        rsx! {
            RowEditor {
                fields,
                is_saving,
                on_save: move |fields: EditorFields| match fields.to_draft() {
                    Ok(draft) => on_row_add.call(draft),
                    Err(e) => state.reject(e.to_string()),
                },
                on_cancel: move |_| state.edit.set(RowEdit::Idle),
            }
        }
    });
    let (add_first, add_last) = match options.add_row_position {
        AddRowPosition::First => (add_editor, None),
        AddRowPosition::Last => (None, add_editor),
    };

    let row_edit = edit.clone();
    let rows: Vec<Element> = page_rows.into_iter().map(move |(index, movie)| {
        if let RowEdit::Editing { index: open, fields } = &row_edit {
            if *open == index {
                let original = movie.clone();
                return rsx! {
                    RowEditor {
                        key: "{index}",
                        fields: fields.clone(),
                        is_saving,
                        on_save: move |fields: EditorFields| match fields.to_edited(&original) {
                            Ok(edited) => on_row_update.call(RowUpdate {
                                index,
                                original: original.clone(),
                                edited,
                            }),
                            Err(e) => state.reject(e.to_string()),
                        },
                        on_cancel: move |_| state.edit.set(RowEdit::Idle),
                    }
                };
            }
        }

        if row_edit.deleting_index() == Some(index) {
            let original = movie.clone();
            return rsx! {
                tr {
                    key: "{index}",
                    class: "movie-table__row movie-table__row--confirm",
                    td {
                        colspan: "{data_columns}",
                        "Are you sure you want to delete this row?"
                    }
                    td {
                        class: "movie-table__actions",
                        button {
                            class: "movie-table__action",
                            title: "Confirm",
                            disabled: is_saving,
                            onclick: move |_| on_row_delete.call(RowDelete {
                                index,
                                original: original.clone(),
                            }),
                            "✓"
                        }
                        button {
                            class: "movie-table__action",
                            title: "Cancel",
                            disabled: is_saving,
                            onclick: move |_| state.edit.set(RowEdit::Idle),
                            "✗"
                        }
                    }
                }
            };
        }

        let is_expanded = expanded.read().shows(index, &movie);
        let detail = DetailRow::for_row(index, &movie);
        let plot = movie.plot.clone().unwrap_or_default();
        let editor_fields = EditorFields::from_movie(&movie);
        let actions_enabled = row_edit.is_idle() && !is_saving;

        rsx! {
            tr {
                key: "{index}",
                class: "movie-table__row",
                for column in MOVIE_COLUMNS {
                    td {
                        key: "{column.field}",
                        {cell(&movie, column)}
                    }
                }
                td {
                    class: "movie-table__actions",
                    button {
                        class: "movie-table__action",
                        title: if is_expanded { "Hide plot" } else { "Show plot" },
                        onclick: move |_| {
                            expanded.set(if is_expanded { DetailRow::Closed } else { detail.clone() });
                        },
                        if is_expanded { "▾" } else { "▸" }
                    }
                    button {
                        class: "movie-table__action",
                        title: "Edit",
                        disabled: !actions_enabled,
                        onclick: move |_| state.edit.set(RowEdit::Editing {
                            index,
                            fields: editor_fields.clone(),
                        }),
                        "✎"
                    }
                    button {
                        class: "movie-table__action",
                        title: "Delete",
                        disabled: !actions_enabled,
                        onclick: move |_| state.edit.set(RowEdit::ConfirmingDelete { index }),
                        "🗑"
                    }
                }
            }
            if is_expanded {
                tr {
                    class: "movie-table__detail",
                    td {
                        colspan: "{column_count}",
                        div {
                            class: "movie-table__plot",
                            "{plot}"
                        }
                    }
                }
            }
        }
    }).collect();

    rsx! {
        div {
            class: "movie-table",

            div {
                class: "movie-table__toolbar",
                h2 { class: "movie-table__title", "Movies" }
                button {
                    class: "movie-table__add",
                    title: "Add",
                    disabled: !edit.is_idle() || is_saving,
                    onclick: move |_| state.edit.set(RowEdit::Adding(EditorFields::blank())),
                    "+ Add movie"
                }
            }

            table {
                class: "movie-table__grid",
                thead {
                    tr {
                        for column in MOVIE_COLUMNS {
                            th { key: "{column.field}", "{column.title}" }
                        }
                        th { class: "movie-table__actions", "Actions" }
                    }
                    if options.filtering {
                        tr {
                            class: "movie-table__filters",
                            for column in MOVIE_COLUMNS {
                                th {
                                    key: "{column.field}",
                                    input {
                                        class: "movie-table__filter",
                                        r#type: "text",
                                        placeholder: "Filter",
                                        value: filters.read().get(column.field).to_string(),
                                        oninput: move |e| {
                                            filters.write().set(column.field, e.value());
                                            page.set(0);
                                        },
                                    }
                                }
                            }
                            th {}
                        }
                    }
                }
                tbody {
                    {add_first}
                    {rows.into_iter()}
                    for n in 0..padding {
                        tr {
                            key: "pad-{n}",
                            class: "movie-table__row movie-table__row--empty",
                            td { colspan: "{column_count}", "\u{00a0}" }
                        }
                    }
                    {add_last}
                    if window.total == 0 {
                        tr {
                            td {
                                class: "movie-table__empty",
                                colspan: "{column_count}",
                                "No records to display"
                            }
                        }
                    }
                }
            }

            div {
                class: "movie-table__pager",
                button {
                    title: "First Page",
                    disabled: !window.has_previous(),
                    onclick: move |_| page.set(0),
                    "⏮"
                }
                button {
                    title: "Previous Page",
                    disabled: !window.has_previous(),
                    onclick: move |_| page.set(window.page.saturating_sub(1)),
                    "◀"
                }
                span { class: "movie-table__page-label", "{page_label}" }
                button {
                    title: "Next Page",
                    disabled: !window.has_next(),
                    onclick: move |_| page.set(window.page + 1),
                    "▶"
                }
                button {
                    title: "Last Page",
                    disabled: !window.has_next(),
                    onclick: move |_| page.set(window.page_count - 1),
                    "⏭"
                }
            }
        }
    }
}

fn cell(movie: &Movie, column: ColumnDef) -> Element {
    match column.render {
        CellRender::Text => {
            let text = movie.field_text(column.field);
            rsx! { "{text}" }
        }
        CellRender::WikiLink => rsx! {
            WikiLink { url: movie.wiki_url.clone() }
        },
    }
}
