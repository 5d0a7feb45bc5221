use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{FieldValue, Record};
use crate::interaction::SelectionEngine;

const MISSING_FIELD: &str = "-";

/// Field names interpolated into one list line.
///
/// Lines read `{model} | Country: {country} | Price: ${price} | MPG: {mpg} |
/// Engine Size: {engine_size} | Weight: {weight}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItemTemplate {
    pub model: String,
    pub country: String,
    pub price: String,
    pub efficiency: String,
    pub engine_size: String,
    pub weight: String,
}

impl Default for ListItemTemplate {
    fn default() -> Self {
        Self {
            model: "Model".to_owned(),
            country: "Country".to_owned(),
            price: "Price".to_owned(),
            efficiency: "MPG".to_owned(),
            engine_size: "EngineSizeCI".to_owned(),
            weight: "Weight".to_owned(),
        }
    }
}

impl ListItemTemplate {
    #[must_use]
    pub fn format(&self, record: &Record) -> String {
        let field = |name: &str| {
            record
                .get(name)
                .map_or_else(|| MISSING_FIELD.to_owned(), FieldValue::to_string)
        };
        format!(
            "{} | Country: {} | Price: ${} | MPG: {} | Engine Size: {} | Weight: {}",
            field(&self.model),
            field(&self.country),
            field(&self.price),
            field(&self.efficiency),
            field(&self.engine_size),
            field(&self.weight),
        )
    }
}

/// Output container the list sink writes into.
pub trait SelectionListTarget {
    fn clear_items(&mut self);
    fn append_item(&mut self, text: String);
}

impl SelectionListTarget for Vec<String> {
    fn clear_items(&mut self) {
        self.clear();
    }

    fn append_item(&mut self, text: String) {
        self.push(text);
    }
}

/// Cloneable handle to one list container shared by several plots.
///
/// Every plot built with a clone of the same handle writes into the same
/// container; the last plot to project wins.
#[derive(Debug, Clone, Default)]
pub struct SharedSelectionList {
    items: Rc<RefCell<Vec<String>>>,
}

impl SharedSelectionList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> Vec<String> {
        self.items.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    #[must_use]
    pub fn shares_container_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

impl SelectionListTarget for SharedSelectionList {
    fn clear_items(&mut self) {
        self.items.borrow_mut().clear();
    }

    fn append_item(&mut self, text: String) {
        self.items.borrow_mut().push(text);
    }
}

/// Rebuilds the textual list of selected records.
pub struct ListSink {
    template: ListItemTemplate,
    target: Box<dyn SelectionListTarget>,
}

impl ListSink {
    #[must_use]
    pub fn new(template: ListItemTemplate, target: Box<dyn SelectionListTarget>) -> Self {
        Self { template, target }
    }

    #[must_use]
    pub fn template(&self) -> &ListItemTemplate {
        &self.template
    }

    /// Clears the target, then appends one line per selected record in
    /// dataset order. Returns the number of lines written.
    pub fn project(&mut self, engine: &SelectionEngine) -> usize {
        self.target.clear_items();
        let selected = engine.selected_records();
        for record in &selected {
            self.target.append_item(self.template.format(record));
        }
        trace!(lines = selected.len(), "selection list rebuilt");
        selected.len()
    }
}

impl std::fmt::Debug for ListSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListSink")
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}
