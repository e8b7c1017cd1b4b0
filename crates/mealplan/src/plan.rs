use std::collections::BTreeMap;

use mealweek_meal::Meal;
use serde::{Deserialize, Serialize};

/// A week of meal assignments, keyed by day name.
///
/// Day names are free-form strings, conventionally `"Monday"` through
/// `"Sunday"`, and are never validated. A day that was never assigned reads
/// as an empty sequence; callers cannot observe a missing key.
///
/// The plan owns its meals: [`assign_meal`](Self::assign_meal) takes the
/// `Meal` by value, and callers clone one when they want to keep their own
/// copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    days: BTreeMap<String, Vec<Meal>>,
}

impl WeeklyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `meal` to the given day, creating the day on first use.
    ///
    /// Any day name is accepted and there is no limit on meals per day.
    pub fn assign_meal(&mut self, day: impl Into<String>, meal: Meal) {
        self.days.entry(day.into()).or_default().push(meal);
    }

    /// The meals assigned to `day`, in assignment order.
    ///
    /// Empty for a day with no assignments. The borrow is immutable, so
    /// plan state cannot be corrupted through it; callers wanting a
    /// snapshot use `.to_vec()`.
    pub fn meals_for(&self, day: &str) -> &[Meal] {
        self.days.get(day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Drops every meal assigned to `day`.
    pub fn clear_day(&mut self, day: &str) {
        self.days.remove(day);
    }

    pub fn has_meals(&self, day: &str) -> bool {
        !self.meals_for(day).is_empty()
    }

    /// Days with at least one assignment, in sorted day-name order.
    pub fn days(&self) -> impl Iterator<Item = (&str, &[Meal])> {
        self.days
            .iter()
            .map(|(day, meals)| (day.as_str(), meals.as_slice()))
    }

    /// Total assigned meals across the week.
    pub fn meal_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use mealweek_meal::{Course, Weekday};

    use super::*;

    fn meal(name: &str, course: Course) -> Meal {
        Meal::new(name, course, vec![])
    }

    #[test]
    fn test_assign_meal_to_day() {
        let mut plan = WeeklyPlan::new();
        let pizza = meal("Pizza", Course::Dinner);
        plan.assign_meal("Monday", pizza.clone());
        assert!(plan.meals_for("Monday").contains(&pizza));
    }

    #[test]
    fn test_meals_for_unassigned_day_is_empty() {
        let plan = WeeklyPlan::new();
        assert!(plan.meals_for("Wednesday").is_empty());
        assert!(!plan.has_meals("Wednesday"));
    }

    #[test]
    fn test_assign_keeps_order_within_day() {
        let mut plan = WeeklyPlan::new();
        plan.assign_meal("Saturday", meal("Pancakes", Course::Breakfast));
        plan.assign_meal("Saturday", meal("Stew", Course::Dinner));
        let names: Vec<&str> = plan
            .meals_for("Saturday")
            .iter()
            .map(|m| m.name())
            .collect();
        assert_eq!(names, ["Pancakes", "Stew"]);
    }

    #[test]
    fn test_clear_day() {
        let mut plan = WeeklyPlan::new();
        plan.assign_meal("Tuesday", meal("Rice", Course::Dinner));
        plan.clear_day("Tuesday");
        assert!(plan.meals_for("Tuesday").is_empty());
        assert!(!plan.has_meals("Tuesday"));
    }

    #[test]
    fn test_clear_unknown_day_is_noop() {
        let mut plan = WeeklyPlan::new();
        plan.assign_meal("Tuesday", meal("Rice", Course::Dinner));
        plan.clear_day("Friday");
        assert!(plan.has_meals("Tuesday"));
    }

    #[test]
    fn test_free_form_day_names() {
        let mut plan = WeeklyPlan::new();
        plan.assign_meal("cheat day", meal("Burger", Course::Dinner));
        assert!(plan.has_meals("cheat day"));
    }

    #[test]
    fn test_weekday_as_day_key() {
        let mut plan = WeeklyPlan::new();
        plan.assign_meal(Weekday::Friday, meal("Burger", Course::Dinner));
        assert!(plan.has_meals("Friday"));
    }

    #[test]
    fn test_days_iterates_in_sorted_order() {
        let mut plan = WeeklyPlan::new();
        plan.assign_meal("Wednesday", meal("Soup", Course::Lunch));
        plan.assign_meal("Friday", meal("Burger", Course::Dinner));
        plan.assign_meal("Monday", meal("Eggs", Course::Breakfast));
        let days: Vec<&str> = plan.days().map(|(day, _)| day).collect();
        assert_eq!(days, ["Friday", "Monday", "Wednesday"]);
    }

    #[test]
    fn test_meal_count() {
        let mut plan = WeeklyPlan::new();
        assert_eq!(plan.meal_count(), 0);
        plan.assign_meal("Monday", meal("Eggs", Course::Breakfast));
        plan.assign_meal("Monday", meal("Pizza", Course::Dinner));
        plan.assign_meal("Sunday", meal("Roast", Course::Dinner));
        assert_eq!(plan.meal_count(), 3);
    }
}
