//! Subscription plan types.

use chrono::{Duration, NaiveDate};

db_enum! {
    /// Billing period of a subscription. Prices and lengths live in config.
    pub enum PlanType as "plan_type" {
        Daily => "daily",
        Weekly => "weekly",
        BiWeekly => "bi_weekly",
        Monthly => "monthly",
        Quarterly => "quarterly",
        HalfYear => "half_year",
        Yearly => "yearly",
    }
}

impl PlanType {
    /// Last day covered by a period of `days` starting on `start`.
    ///
    /// The period runs from `start` up to, but excluding, the returned
    /// date, matching `end_date = start_date + days`.
    pub fn period_end(start: NaiveDate, days: i64) -> NaiveDate {
        start + Duration::days(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_end() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        assert_eq!(
            PlanType::period_end(start, 30),
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
        );
    }

    #[test]
    fn test_parse_snake_case() {
        assert_eq!("bi_weekly".parse::<PlanType>().unwrap(), PlanType::BiWeekly);
        assert_eq!("half_year".parse::<PlanType>().unwrap(), PlanType::HalfYear);
        assert!("biweekly".parse::<PlanType>().is_err());
    }
}
