use std::collections::HashSet;

use mealweek_mealplan::WeeklyPlan;
use serde::{Deserialize, Serialize};

/// An ordered list of ingredient names.
///
/// Duplicates are allowed until a deduplication pass;
/// [`remove_duplicates`](Self::remove_duplicates) keeps the first
/// occurrence of each name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    items: Vec<String>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a deduplicated list straight from a plan.
    pub fn from_plan(plan: &WeeklyPlan) -> Self {
        let mut list = Self::new();
        list.generate_from_plan(plan);
        list
    }

    /// Appends an item. No duplicate check.
    pub fn add_item(&mut self, name: impl Into<String>) {
        self.items.push(name.into());
    }

    /// Removes the first occurrence of `name`.
    ///
    /// Returns false and leaves the list untouched when the item is not
    /// present.
    pub fn remove_item(&mut self, name: &str) -> bool {
        match self.items.iter().position(|i| i == name) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.items.iter().any(|i| i == name)
    }

    /// In-place stable deduplication: the first occurrence of each name
    /// stays, later ones are dropped. Idempotent.
    pub fn remove_duplicates(&mut self) {
        let mut seen = HashSet::new();
        self.items.retain(|item| seen.insert(item.clone()));
    }

    /// Replaces the list with every ingredient of every meal in `plan`,
    /// deduplicated.
    ///
    /// Prior contents are discarded; derivation is a snapshot of the plan,
    /// not a live view. Days are walked in sorted order, meals and
    /// ingredients in authored order, so the result is deterministic and
    /// dedup keeps the first occurrence.
    pub fn generate_from_plan(&mut self, plan: &WeeklyPlan) {
        self.items.clear();
        for (_, meals) in plan.days() {
            for meal in meals {
                self.items.extend(meal.ingredients().iter().cloned());
            }
        }
        self.remove_duplicates();
        tracing::debug!(
            meals = plan.meal_count(),
            items = self.items.len(),
            "generated shopping list from weekly plan"
        );
    }

    /// Items in order, each at most once after a dedup pass.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
