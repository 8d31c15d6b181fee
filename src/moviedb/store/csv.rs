use super::{write_atomic, CatalogStore};
use crate::error::{MovieDbError, Result};
use crate::model::{fields, scalar_text, Catalog, Record};
use ::csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Columns written after `title` when the catalog is empty.
pub const BASE_COLUMNS: [&str; 4] = [
    fields::RATING,
    fields::YEAR,
    fields::IMDB_ID,
    fields::NOTES,
];

/// Catalog stored as CSV: a `title,<field>,...` header and one row per movie.
///
/// ## Columns
///
/// The header is derived from the records on every write: the fields of the
/// first record in catalog order, followed by any field that only later
/// records carry, in the order they are first seen. A record that lacks a
/// column gets an empty cell.
///
/// An empty cell reads back as an empty string, except in the `poster_url`
/// column where it reads back as an absent field, so a movie saved without a
/// poster does not come back with one. Every record read from CSV exposes
/// `notes`, as an empty string when the column is missing.
///
/// All values read back as text; the format has no number type.
pub struct CsvCatalogStore {
    path: PathBuf,
}

impl CsvCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogStore for CsvCatalogStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn list(&self) -> Result<Catalog> {
        let file = File::open(&self.path).map_err(MovieDbError::Io)?;
        let mut reader = ReaderBuilder::new().has_headers(false).from_reader(file);
        let mut rows = reader.records();

        let header = match rows.next() {
            Some(row) => row?,
            None => return Err(MovieDbError::Format("missing header row".to_string())),
        };
        if header.get(0) != Some(fields::TITLE) {
            return Err(MovieDbError::Format(format!(
                "header must start with \"{}\", found {:?}",
                fields::TITLE,
                header.get(0).unwrap_or("")
            )));
        }
        let columns: Vec<&str> = header.iter().skip(1).collect();

        let mut catalog = Catalog::new();
        for row in rows {
            let row = row?;
            let mut cells = row.iter();
            let title = cells.next().unwrap_or("").to_string();

            let mut record = Record::new();
            for (column, cell) in columns.iter().zip(cells) {
                if cell.is_empty() && *column == fields::POSTER_URL {
                    continue;
                }
                record.set(*column, cell);
            }
            if !record.contains(fields::NOTES) {
                record.set_notes("");
            }
            catalog.insert(title, record);
        }

        Ok(catalog)
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        let columns = derive_columns(catalog)?;

        let mut writer = WriterBuilder::new().from_writer(Vec::new());
        let header = std::iter::once(fields::TITLE).chain(columns.iter().map(String::as_str));
        writer.write_record(header)?;

        for (title, record) in catalog {
            let mut row = Vec::with_capacity(columns.len() + 1);
            row.push(title.clone());
            for column in &columns {
                let cell = match record.get(column) {
                    None => String::new(),
                    Some(value) => {
                        scalar_text(value).ok_or_else(|| MovieDbError::SchemaConflict {
                            title: title.clone(),
                            field: column.clone(),
                            reason: "holds a nested value that has no cell form".to_string(),
                        })?
                    }
                };
                row.push(cell);
            }
            writer.write_record(&row)?;
        }

        let content = writer
            .into_inner()
            .map_err(|e| MovieDbError::Io(e.into_error()))?;
        write_atomic(&self.path, &content)
    }
}

/// Union of all field names, first record first.
fn derive_columns(catalog: &Catalog) -> Result<Vec<String>> {
    if catalog.is_empty() {
        return Ok(BASE_COLUMNS.iter().map(|c| c.to_string()).collect());
    }

    let mut columns: Vec<String> = Vec::new();
    for (title, record) in catalog {
        for field in record.field_names() {
            if field == fields::TITLE {
                return Err(MovieDbError::SchemaConflict {
                    title: title.clone(),
                    field: field.to_string(),
                    reason: "collides with the title column".to_string(),
                });
            }
            if !columns.iter().any(|c| c == field) {
                columns.push(field.to_string());
            }
        }
    }
    Ok(columns)
}
