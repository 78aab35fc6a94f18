//! Rows grouped into sections, and sections into a form.

use serde::Serialize;

use crate::error::BindingError;
use crate::item::{BoundItem, ItemId};
use crate::kind::ItemKind;

// ============================================================================
// ROW
// ============================================================================

/// A binding composed with the kind of widget that presents it.
///
/// Rows without a binding (buttons, static labels) carry only a title.
#[derive(Debug)]
pub struct Row {
    id: ItemId,
    kind: ItemKind,
    title: Option<String>,
    item: Option<Box<dyn BoundItem>>,
}

impl Row {
    /// Wraps `item` as a row of `kind`. Kinds that reload after every commit
    /// switch the binding's auto-reload on.
    pub fn bound(kind: ItemKind, item: impl BoundItem + 'static) -> Self {
        let mut item: Box<dyn BoundItem> = Box::new(item);
        if kind.auto_reload() {
            item.set_auto_reload(true);
        }
        Self {
            id: item.id(),
            kind,
            title: None,
            item: Some(item),
        }
    }

    /// A row with no binding.
    pub fn plain(kind: ItemKind, title: impl Into<String>) -> Self {
        Self {
            id: ItemId::next(),
            kind,
            title: Some(title.into()),
            item: None,
        }
    }

    pub const fn id(&self) -> ItemId {
        self.id
    }

    pub const fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// The binding's title, else the row's own.
    pub fn title(&self) -> Option<&str> {
        self.item
            .as_deref()
            .and_then(BoundItem::title)
            .or(self.title.as_deref())
    }

    pub fn item(&self) -> Option<&dyn BoundItem> {
        self.item.as_deref()
    }

    pub fn item_mut(&mut self) -> Option<&mut (dyn BoundItem + 'static)> {
        self.item.as_deref_mut()
    }

    /// The concrete binding, if the row holds one of type `B`.
    pub fn binding<B: 'static>(&self) -> Option<&B> {
        self.item()?.as_any().downcast_ref()
    }

    pub fn binding_mut<B: 'static>(&mut self) -> Option<&mut B> {
        self.item_mut()?.as_any_mut().downcast_mut()
    }

    pub fn is_failed(&self) -> bool {
        self.item().is_some_and(|item| item.is_failed())
    }
}

// ============================================================================
// SECTION
// ============================================================================

/// An ordered group of rows with optional header and footer text.
#[derive(Debug, Default)]
pub struct Section {
    pub header: Option<String>,
    pub footer: Option<String>,
    rows: Vec<Row>,
}

impl Section {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            header: None,
            footer: None,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    #[must_use]
    pub fn with_row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    /// Appends `row` and returns its id.
    pub fn add(&mut self, row: Row) -> ItemId {
        let id = row.id();
        self.rows.push(row);
        id
    }

    /// Inserts `row` at `index`, or appends it when `index` is past the end.
    pub fn insert(&mut self, index: usize, row: Row) -> ItemId {
        let id = row.id();
        self.rows.insert(index.min(self.rows.len()), row);
        id
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Row> {
        let index = self.position(id)?;
        Some(self.rows.remove(index))
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == id)
    }

    pub fn get(&self, id: ItemId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Row> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    /// The first bound item whose last write failed.
    pub fn first_failed(&self) -> Option<&dyn BoundItem> {
        self.items().find(|item| item.is_failed())
    }

    pub fn items(&self) -> impl Iterator<Item = &dyn BoundItem> {
        self.rows.iter().filter_map(Row::item)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

// ============================================================================
// FORM
// ============================================================================

/// Location of a row inside a [`Form`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RowPath {
    pub section: usize,
    pub row: usize,
}

/// Sections in display order.
#[derive(Debug, Default)]
pub struct Form {
    sections: Vec<Section>,
}

impl Form {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut [Section] {
        &mut self.sections
    }

    pub fn position(&self, id: ItemId) -> Option<RowPath> {
        self.sections.iter().enumerate().find_map(|(section, s)| {
            s.position(id).map(|row| RowPath { section, row })
        })
    }

    pub fn row(&self, id: ItemId) -> Option<&Row> {
        self.sections.iter().find_map(|s| s.get(id))
    }

    pub fn row_mut(&mut self, id: ItemId) -> Option<&mut Row> {
        self.sections.iter_mut().find_map(|s| s.get_mut(id))
    }

    pub fn row_at(&self, path: RowPath) -> Option<&Row> {
        self.sections.get(path.section)?.rows.get(path.row)
    }

    /// Every bound item, in display order.
    pub fn items(&self) -> impl Iterator<Item = &dyn BoundItem> {
        self.sections.iter().flat_map(Section::items)
    }

    pub fn first_failed(&self) -> Option<&dyn BoundItem> {
        self.items().find(|item| item.is_failed())
    }

    /// Checks every bound item in display order and returns the first error.
    ///
    /// For each item a failed last write is reported before its validators
    /// run against the current model value.
    pub fn validate(&self) -> Result<(), BindingError> {
        for item in self.items() {
            let result = match item.error() {
                Some(error) => Err(error),
                None => item.check_current().map_err(|source| BindingError::Invalid {
                    item: item.label(),
                    source,
                }),
            };
            if let Err(error) = result {
                tracing::debug!(item = %item.id(), code = error.code(), "form validation failed");
                return Err(error);
            }
        }
        Ok(())
    }

    /// Clears the status of every bound item.
    pub fn reset_status(&mut self) {
        for section in &mut self.sections {
            for row in &mut section.rows {
                if let Some(item) = row.item_mut() {
                    item.reset_status();
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
