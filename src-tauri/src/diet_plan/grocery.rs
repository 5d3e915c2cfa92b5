use std::collections::HashSet;

use super::types::DietPlan;

/// Every ingredient across `plans`, first occurrence wins, exact-string dedup.
pub fn grocery_list<'a>(plans: impl IntoIterator<Item = &'a DietPlan>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut list = Vec::new();
    for plan in plans {
        for meal in plan.meals() {
            for ingredient in &meal.ingredients {
                if seen.insert(ingredient.as_str()) {
                    list.push(ingredient.clone());
                }
            }
        }
    }
    list
}

/// Planned calories of a plan, or `None` without one.
pub fn planned_total_calories(plan: Option<&DietPlan>) -> Option<f64> {
    plan.map(DietPlan::total_calories)
}

/// Most recently created plan.
pub fn latest_plan(plans: &[DietPlan]) -> Option<&DietPlan> {
    plans.iter().max_by_key(|p| p.created_at)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::diet_plan::PlannedMeal;

    fn meal(name: &str, ingredients: &[&str]) -> PlannedMeal {
        PlannedMeal {
            name: name.into(),
            calories: 400.0,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn plan(day: u32, breakfast: &[&str], lunch: &[&str], dinner: &[&str]) -> DietPlan {
        DietPlan {
            plan_name: format!("Plan {}", day),
            breakfast: meal("b", breakfast),
            lunch: meal("l", lunch),
            dinner: meal("d", dinner),
            created_at: Utc.with_ymd_and_hms(2024, 6, day, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_shared_ingredient_listed_once() {
        let plans = vec![
            plan(1, &["eggs", "toast"], &["rice"], &["salmon"]),
            plan(2, &["eggs"], &["beans"], &["rice", "kale"]),
        ];
        assert_eq!(
            grocery_list(&plans),
            vec!["eggs", "toast", "rice", "salmon", "beans", "kale"]
        );
    }

    #[test]
    fn test_no_normalization() {
        let plans = vec![plan(1, &["Eggs", "eggs", "2 eggs"], &[], &[])];
        assert_eq!(grocery_list(&plans), vec!["Eggs", "eggs", "2 eggs"]);
    }

    #[test]
    fn test_empty() {
        assert!(grocery_list(&Vec::<DietPlan>::new()).is_empty());
        assert_eq!(planned_total_calories(None), None);
    }

    #[test]
    fn test_latest_plan_and_total() {
        let plans = vec![plan(3, &[], &[], &[]), plan(9, &[], &[], &[]), plan(5, &[], &[], &[])];
        let latest = latest_plan(&plans).unwrap();
        assert_eq!(latest.plan_name, "Plan 9");
        assert_eq!(planned_total_calories(Some(latest)), Some(1200.0));
    }
}
