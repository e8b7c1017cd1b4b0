use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MealError;
use crate::types::Course;

/// A single meal and its ingredient list.
///
/// Ingredients are kept in authored order and may repeat; deduplication
/// happens when a shopping list is derived, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    name: String,
    course: Course,
    ingredients: Vec<String>,
}

impl Meal {
    pub fn new(name: impl Into<String>, course: Course, ingredients: Vec<String>) -> Self {
        Self {
            name: name.into(),
            course,
            ingredients,
        }
    }

    /// Builds a meal from an untyped course name.
    ///
    /// Unknown course names are rejected here, so a constructed meal always
    /// carries a valid course.
    pub fn parse(
        name: impl Into<String>,
        course: &str,
        ingredients: Vec<String>,
    ) -> Result<Self, MealError> {
        let course =
            Course::from_str(course).map_err(|_| MealError::InvalidCourse(course.to_string()))?;
        Ok(Self::new(name, course, ingredients))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    /// Ingredients in authored order, duplicates included.
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Appends an ingredient. No duplicate check.
    pub fn add_ingredient(&mut self, name: impl Into<String>) {
        self.ingredients.push(name.into());
    }

    /// Removes the first occurrence of `name`.
    ///
    /// Returns false and leaves the list untouched when the ingredient is
    /// not present.
    pub fn remove_ingredient(&mut self, name: &str) -> bool {
        match self.ingredients.iter().position(|i| i == name) {
            Some(idx) => {
                self.ingredients.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Switches the course if `new_course` names a valid one.
    ///
    /// Returns false and leaves the meal unchanged otherwise.
    pub fn change_course(&mut self, new_course: &str) -> bool {
        match Course::from_str(new_course) {
            Ok(course) => {
                self.course = course;
                true
            }
            Err(_) => false,
        }
    }

    /// Typed counterpart of [`change_course`](Self::change_course); cannot
    /// fail.
    pub fn set_course(&mut self, course: Course) {
        self.course = course;
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }
}
