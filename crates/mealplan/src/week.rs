use littlespoon_shared::{CalendarDay, MealType};
use serde::Serialize;
use time::{Date, Duration};

use crate::{MealSlot, Meals};

/// Number of days a plan covers, Monday through Sunday.
pub const DAYS_PER_WEEK: usize = 7;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DayPlan {
    pub date: Date,
    pub meals: Meals,
}

impl DayPlan {
    pub fn new(date: Date) -> Self {
        Self {
            date,
            meals: Meals::default(),
        }
    }

    pub fn slot(&self, meal_type: MealType) -> &MealSlot {
        self.meals.get(meal_type)
    }

    /// Slots ordered by scheduled time, ties kept in meal type order.
    pub fn timeline(&self) -> Vec<(MealType, &MealSlot)> {
        let mut slots = self.meals.iter().collect::<Vec<_>>();
        slots.sort_by_key(|(_, slot)| slot.scheduled_time);

        slots
    }

    pub fn completed_count(&self) -> usize {
        self.meals.iter().filter(|(_, slot)| slot.completed).count()
    }

    pub fn assigned_count(&self) -> usize {
        self.meals.iter().filter(|(_, slot)| slot.is_assigned()).count()
    }
}

/// Seven consecutive days starting on a Monday.
///
/// Dates are fixed when the plan is built; only slot contents change.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct WeeklyPlan {
    days: [DayPlan; DAYS_PER_WEEK],
}

impl WeeklyPlan {
    pub fn starting(monday: Date) -> Self {
        let days = std::array::from_fn(|offset| {
            DayPlan::new(monday.saturating_add(Duration::days(offset as i64)))
        });

        Self { days }
    }

    pub fn start(&self) -> Date {
        self.days[0].date
    }

    pub fn end(&self) -> Date {
        self.days[DAYS_PER_WEEK - 1].date
    }

    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayPlan> {
        self.days.iter()
    }

    pub fn contains(&self, date: impl CalendarDay) -> bool {
        self.day(date).is_some()
    }

    pub fn day(&self, date: impl CalendarDay) -> Option<&DayPlan> {
        self.days.iter().find(|day| day.date.is_same_day(&date))
    }

    pub fn slot(&self, date: impl CalendarDay, meal_type: MealType) -> Option<&MealSlot> {
        self.day(date).map(|day| day.slot(meal_type))
    }

    /// Copy of the plan with one slot edited, `None` when no day matches.
    pub fn update_slot(
        &self,
        date: impl CalendarDay,
        meal_type: MealType,
        update: impl FnOnce(&mut MealSlot),
    ) -> Option<Self> {
        let index = self
            .days
            .iter()
            .position(|day| day.date.is_same_day(&date))?;

        let mut plan = self.clone();
        update(plan.days[index].meals.get_mut(meal_type));

        Some(plan)
    }
}

impl<'a> IntoIterator for &'a WeeklyPlan {
    type Item = &'a DayPlan;
    type IntoIter = std::slice::Iter<'a, DayPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime, time};

    #[test]
    fn starting_builds_seven_consecutive_days() {
        let plan = WeeklyPlan::starting(date!(2026 - 10 - 19));

        assert_eq!(plan.days().len(), DAYS_PER_WEEK);
        assert_eq!(plan.start(), date!(2026 - 10 - 19));
        assert_eq!(plan.end(), date!(2026 - 10 - 25));
        assert!(
            plan.days()
                .windows(2)
                .all(|pair| pair[1].date == pair[0].date.saturating_add(Duration::DAY))
        );
    }

    #[test]
    fn day_lookup_ignores_time_of_day() {
        let plan = WeeklyPlan::starting(date!(2026 - 10 - 19));

        let morning = plan.day(datetime!(2026-10-21 06:00));
        let evening = plan.day(datetime!(2026-10-21 23:59 UTC));

        assert_eq!(morning.map(|d| d.date), Some(date!(2026 - 10 - 21)));
        assert_eq!(morning, evening);
        assert!(!plan.contains(date!(2026 - 10 - 26)));
    }

    #[test]
    fn update_slot_leaves_original_untouched() {
        let plan = WeeklyPlan::starting(date!(2026 - 10 - 19));

        let updated = plan
            .update_slot(date!(2026 - 10 - 20), MealType::Snack, |slot| slot.completed = true)
            .unwrap();

        assert!(updated.slot(date!(2026 - 10 - 20), MealType::Snack).unwrap().completed);
        assert!(!plan.slot(date!(2026 - 10 - 20), MealType::Snack).unwrap().completed);
        assert!(
            plan.update_slot(date!(2026 - 11 - 20), MealType::Snack, |_| {})
                .is_none()
        );
    }

    #[test]
    fn timeline_orders_by_scheduled_time() {
        let mut day = DayPlan::new(date!(2026 - 10 - 19));
        day.meals.get_mut(MealType::Dinner).scheduled_time = time!(6:30).into();
        day.meals.get_mut(MealType::Breakfast).completed = true;

        let order = day.timeline().into_iter().map(|(t, _)| t).collect::<Vec<_>>();

        assert_eq!(
            order,
            vec![
                MealType::Dinner,
                MealType::Breakfast,
                MealType::Snack,
                MealType::Lunch
            ]
        );
        assert_eq!(day.completed_count(), 1);
        assert_eq!(day.assigned_count(), 0);
    }
}
