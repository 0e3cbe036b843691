use crate::domain::model::{Catalog, Category, ReplyOption};

/// Lowercases and joins whitespace-separated words with `_`.
pub fn slug(value: &str) -> String {
    value
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Stable list-row identifier for an item, e.g. `("MEALS", "Fried Rice")` -> `meals_fried_rice`.
pub fn item_id(header: &str, item: &str) -> String {
    format!("{}_{}", slug(header), slug(item))
}

impl Category {
    pub fn display_header(&self) -> String {
        match self.icon.as_deref() {
            Some(icon) if !icon.trim().is_empty() => format!("{} {}", icon.trim(), self.header),
            _ => self.header.clone(),
        }
    }

    pub fn rows(&self) -> Vec<ReplyOption> {
        self.items
            .iter()
            .map(|item| ReplyOption {
                id: item_id(&self.header, item),
                title: item.clone(),
            })
            .collect()
    }
}

impl Catalog {
    /// Every derived item identifier, in catalog order.
    pub fn item_ids(&self) -> impl Iterator<Item = String> + '_ {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter().map(move |item| item_id(&c.header, item)))
    }

    /// Reverse lookup of a selected row back to its category and item.
    pub fn find_item(&self, id: &str) -> Option<(&Category, &str)> {
        self.categories.iter().find_map(|category| {
            category
                .items
                .iter()
                .find(|item| item_id(&category.header, item) == id)
                .map(|item| (category, item.as_str()))
        })
    }
}
