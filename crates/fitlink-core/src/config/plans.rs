//! Subscription plan table.
//!
//! Prices are whole currency units. The table is configuration, not
//! business logic: operators may re-price plans without a release.

use serde::{Deserialize, Serialize};

/// Duration and price of one plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTerms {
    /// Length of one subscription period in days.
    pub days: i64,
    /// Price of one period in whole currency units.
    pub price: u64,
}

/// Price and duration for every subscription plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlansConfig {
    /// ISO currency code applied to subscriptions.
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_daily")]
    pub daily: PlanTerms,
    #[serde(default = "default_weekly")]
    pub weekly: PlanTerms,
    #[serde(default = "default_bi_weekly")]
    pub bi_weekly: PlanTerms,
    #[serde(default = "default_monthly")]
    pub monthly: PlanTerms,
    #[serde(default = "default_quarterly")]
    pub quarterly: PlanTerms,
    #[serde(default = "default_half_year")]
    pub half_year: PlanTerms,
    #[serde(default = "default_yearly")]
    pub yearly: PlanTerms,
}

impl PlansConfig {
    /// Look up the terms for a plan key such as `"monthly"`.
    pub fn terms(&self, plan: &str) -> Option<PlanTerms> {
        match plan {
            "daily" => Some(self.daily),
            "weekly" => Some(self.weekly),
            "bi_weekly" => Some(self.bi_weekly),
            "monthly" => Some(self.monthly),
            "quarterly" => Some(self.quarterly),
            "half_year" => Some(self.half_year),
            "yearly" => Some(self.yearly),
            _ => None,
        }
    }
}

impl Default for PlansConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            daily: default_daily(),
            weekly: default_weekly(),
            bi_weekly: default_bi_weekly(),
            monthly: default_monthly(),
            quarterly: default_quarterly(),
            half_year: default_half_year(),
            yearly: default_yearly(),
        }
    }
}

fn default_currency() -> String {
    "NGN".to_string()
}

fn default_daily() -> PlanTerms {
    PlanTerms { days: 1, price: 500 }
}

fn default_weekly() -> PlanTerms {
    PlanTerms { days: 7, price: 2500 }
}

fn default_bi_weekly() -> PlanTerms {
    PlanTerms { days: 14, price: 4500 }
}

fn default_monthly() -> PlanTerms {
    PlanTerms { days: 30, price: 8000 }
}

fn default_quarterly() -> PlanTerms {
    PlanTerms { days: 90, price: 22000 }
}

fn default_half_year() -> PlanTerms {
    PlanTerms { days: 180, price: 40000 }
}

fn default_yearly() -> PlanTerms {
    PlanTerms { days: 365, price: 70000 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let plans = PlansConfig::default();
        assert_eq!(plans.terms("daily"), Some(PlanTerms { days: 1, price: 500 }));
        assert_eq!(plans.terms("monthly").map(|t| t.days), Some(30));
        assert_eq!(plans.terms("half_year").map(|t| t.price), Some(40000));
        assert_eq!(plans.terms("yearly").map(|t| t.days), Some(365));
        assert!(plans.terms("fortnightly").is_none());
    }
}
