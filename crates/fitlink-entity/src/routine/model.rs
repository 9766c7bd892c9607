//! Routine model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

db_enum! {
    /// Body region a routine trains.
    pub enum BodyRegion as "body_region" {
        FullBody => "full_body",
        UpperBody => "upper_body",
        LowerBody => "lower_body",
        Core => "core",
        Cardio => "cardio",
        Flexibility => "flexibility",
    }
}

db_enum! {
    pub enum Difficulty as "difficulty_level" {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
}

db_enum! {
    /// Day names used in `schedule_days`.
    pub enum Weekday as "weekday" {
        Monday => "monday",
        Tuesday => "tuesday",
        Wednesday => "wednesday",
        Thursday => "thursday",
        Friday => "friday",
        Saturday => "saturday",
        Sunday => "sunday",
    }
}

/// A workout routine. `exercises` holds objects with sets, reps and weight.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Routine {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub body_region: BodyRegion,
    pub difficulty: Difficulty,
    /// Minutes.
    pub estimated_duration: i32,
    pub exercises: Json<Vec<Value>>,
    pub equipment_needed: Json<Vec<String>>,
    pub target_muscles: Json<Vec<String>>,
    pub video_url: Option<String>,
    pub thumbnail: Option<String>,
    pub schedule_days: Json<Vec<Weekday>>,
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateRoutine {
    pub name: String,
    pub description: Option<String>,
    pub body_region: BodyRegion,
    pub difficulty: Difficulty,
    pub estimated_duration: i32,
    pub exercises: Vec<Value>,
    pub equipment_needed: Vec<String>,
    pub target_muscles: Vec<String>,
    pub video_url: Option<String>,
    pub thumbnail: Option<String>,
    pub schedule_days: Vec<Weekday>,
    pub created_by: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_parsing_is_lowercase() {
        assert_eq!("monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert!("Monday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_schedule_days_deserialize_from_json() {
        let days: Vec<Weekday> = serde_json::from_str(r#"["monday","friday"]"#).unwrap();
        assert_eq!(days, vec![Weekday::Monday, Weekday::Friday]);
    }
}
