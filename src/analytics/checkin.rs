// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Monthly check-in tallies.

use crate::catalog::weeks_for_month;
use crate::models::{CheckinQuality, WorkoutPlan};

/// bien/regular/mal counts for one check-in category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QualityTally {
    pub bien: u32,
    pub regular: u32,
    pub mal: u32,
}

impl QualityTally {
    fn record(&mut self, quality: Option<CheckinQuality>) {
        match quality {
            Some(CheckinQuality::Bien) => self.bien += 1,
            Some(CheckinQuality::Regular) => self.regular += 1,
            Some(CheckinQuality::Mal) => self.mal += 1,
            // Unrecorded days count nowhere.
            None => {}
        }
    }

    pub fn total(&self) -> u32 {
        self.bien + self.regular + self.mal
    }
}

/// Tallies for all three categories over a month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckinTally {
    pub sueno: QualityTally,
    pub comida: QualityTally,
    pub energia: QualityTally,
}

/// Sum check-in responses across every planned day in a month's weeks.
///
/// Unlike frequency aggregation this counts every day present in the plan:
/// rest days and deload days report sleep and nutrition too.
pub fn monthly_checkin_tally(plan: &WorkoutPlan, month: u32) -> CheckinTally {
    let mut tally = CheckinTally::default();

    for week in weeks_for_month(month) {
        let Some(weekly_plan) = plan.get(&week) else {
            continue;
        };
        for daily_plan in weekly_plan.values() {
            tally.sueno.record(daily_plan.checkin.sueno);
            tally.comida.record(daily_plan.checkin.comida);
            tally.energia.record(daily_plan.checkin.energia);
        }
    }

    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CheckinQuality::*, DailyPlan};

    fn day_with_checkin(
        day: u32,
        sueno: Option<CheckinQuality>,
        comida: Option<CheckinQuality>,
        energia: Option<CheckinQuality>,
    ) -> DailyPlan {
        let mut plan = DailyPlan::empty(day);
        plan.checkin.sueno = sueno;
        plan.checkin.comida = comida;
        plan.checkin.energia = energia;
        plan
    }

    #[test]
    fn test_tally_counts_per_category() {
        let mut plan = WorkoutPlan::new();
        let weekly = plan.entry(1).or_default();
        weekly.insert(1, day_with_checkin(1, Some(Bien), Some(Regular), Some(Mal)));
        weekly.insert(2, day_with_checkin(2, Some(Bien), None, Some(Mal)));

        let tally = monthly_checkin_tally(&plan, 1);
        assert_eq!(tally.sueno.bien, 2);
        assert_eq!(tally.comida.regular, 1);
        assert_eq!(tally.comida.total(), 1);
        assert_eq!(tally.energia.mal, 2);
    }

    #[test]
    fn test_tally_includes_rest_and_deload_days() {
        let mut rest = day_with_checkin(1, Some(Mal), None, None);
        rest.did_not_train = true;
        let mut deload = day_with_checkin(2, Some(Bien), None, None);
        deload.is_deload = true;

        let mut plan = WorkoutPlan::new();
        let weekly = plan.entry(1).or_default();
        weekly.insert(1, rest);
        weekly.insert(2, deload);

        let tally = monthly_checkin_tally(&plan, 1);
        assert_eq!(tally.sueno.mal, 1);
        assert_eq!(tally.sueno.bien, 1);
    }

    #[test]
    fn test_tally_window_respects_month_boundary() {
        let mut plan = WorkoutPlan::new();
        plan.entry(5)
            .or_default()
            .insert(1, day_with_checkin(1, Some(Bien), None, None));

        assert_eq!(monthly_checkin_tally(&plan, 1).sueno.total(), 0);
        assert_eq!(monthly_checkin_tally(&plan, 2).sueno.bien, 1);
    }
}
