//! Loose request payloads and the per-kind validation step. Each `New*`
//! payload turns into a fully-defaulted draft or a list of offending field
//! names; handlers consume the two outcomes uniformly.

use serde::Deserialize;
use time::{Date, OffsetDateTime};

use crate::error::ApiError;
use crate::store::{FinanceDraft, InjuryDraft, MetricDraft, NutritionDraft};

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMetric {
    pub user_id: Option<i64>,
    pub date: Option<Date>,
    pub metric_type: Option<String>,
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub notes: Option<String>,
}

impl NewMetric {
    pub fn validate(self) -> Result<MetricDraft, ApiError> {
        let mut missing = Vec::new();
        if self.user_id.is_none() {
            missing.push("userId");
        }
        if self.metric_type.as_deref().map_or(true, str::is_empty) {
            missing.push("metricType");
        }
        if self.value.is_none() {
            missing.push("value");
        }
        if self.unit.as_deref().map_or(true, str::is_empty) {
            missing.push("unit");
        }
        if !missing.is_empty() {
            return Err(ApiError::Validation(missing));
        }
        Ok(MetricDraft {
            user_id: self.user_id.unwrap_or_default(),
            date: self.date.unwrap_or_else(today),
            metric_type: self.metric_type.unwrap_or_default(),
            value: self.value.unwrap_or_default(),
            unit: self.unit.unwrap_or_default(),
            notes: self.notes,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNutrition {
    pub user_id: Option<i64>,
    pub date: Option<Date>,
    pub meal_type: Option<String>,
    pub food_items: Option<String>,
    pub calories: Option<i32>,
    pub protein: Option<i32>,
    pub notes: Option<String>,
}

impl NewNutrition {
    pub fn validate(self) -> Result<NutritionDraft, ApiError> {
        let mut missing = Vec::new();
        if self.user_id.is_none() {
            missing.push("userId");
        }
        if self.meal_type.as_deref().map_or(true, str::is_empty) {
            missing.push("mealType");
        }
        if self.food_items.as_deref().map_or(true, str::is_empty) {
            missing.push("foodItems");
        }
        if !missing.is_empty() {
            return Err(ApiError::Validation(missing));
        }
        Ok(NutritionDraft {
            user_id: self.user_id.unwrap_or_default(),
            date: self.date.unwrap_or_else(today),
            meal_type: self.meal_type.unwrap_or_default(),
            food_items: self.food_items.unwrap_or_default(),
            calories: self.calories,
            protein: self.protein,
            notes: self.notes,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInjury {
    pub user_id: Option<i64>,
    pub injury_type: Option<String>,
    pub body_part: Option<String>,
    pub date_occurred: Option<Date>,
    pub status: Option<String>,
    pub severity: Option<String>,
    pub notes: Option<String>,
}

impl NewInjury {
    pub fn validate(self) -> Result<InjuryDraft, ApiError> {
        let mut missing = Vec::new();
        if self.user_id.is_none() {
            missing.push("userId");
        }
        if self.injury_type.as_deref().map_or(true, str::is_empty) {
            missing.push("injuryType");
        }
        if self.body_part.as_deref().map_or(true, str::is_empty) {
            missing.push("bodyPart");
        }
        if self.severity.as_deref().map_or(true, str::is_empty) {
            missing.push("severity");
        }
        if !missing.is_empty() {
            return Err(ApiError::Validation(missing));
        }
        Ok(InjuryDraft {
            user_id: self.user_id.unwrap_or_default(),
            injury_type: self.injury_type.unwrap_or_default(),
            body_part: self.body_part.unwrap_or_default(),
            date_occurred: self.date_occurred.unwrap_or_else(today),
            status: self.status.unwrap_or_else(|| "Active".into()),
            severity: self.severity.unwrap_or_default(),
            notes: self.notes,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFinance {
    pub user_id: Option<i64>,
    pub date: Option<Date>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub is_income: Option<bool>,
}

impl NewFinance {
    pub fn validate(self) -> Result<FinanceDraft, ApiError> {
        let mut missing = Vec::new();
        if self.user_id.is_none() {
            missing.push("userId");
        }
        if self.category.as_deref().map_or(true, str::is_empty) {
            missing.push("category");
        }
        if self.amount.is_none() {
            missing.push("amount");
        }
        if !missing.is_empty() {
            return Err(ApiError::Validation(missing));
        }
        Ok(FinanceDraft {
            user_id: self.user_id.unwrap_or_default(),
            date: self.date.unwrap_or_else(today),
            category: self.category.unwrap_or_default(),
            amount: self.amount.unwrap_or_default(),
            description: self.description,
            is_income: self.is_income.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn metric_payload_validates_and_keeps_fields() {
        let payload: NewMetric = serde_json::from_value(serde_json::json!({
            "userId": 1,
            "date": "2024-01-01",
            "metricType": "sprint",
            "value": 11.2,
            "unit": "s"
        }))
        .unwrap();
        let draft = payload.validate().unwrap();
        assert_eq!(draft.user_id, 1);
        assert_eq!(draft.date, date!(2024 - 01 - 01));
        assert_eq!(draft.metric_type, "sprint");
        assert_eq!(draft.unit, "s");
        assert!(draft.notes.is_none());
    }

    #[test]
    fn metric_validation_names_every_missing_field() {
        let payload: NewMetric = serde_json::from_value(serde_json::json!({})).unwrap();
        match payload.validate().unwrap_err() {
            ApiError::Validation(fields) => {
                assert_eq!(fields, vec!["userId", "metricType", "value", "unit"]);
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn injury_defaults_status_to_active() {
        let payload: NewInjury = serde_json::from_value(serde_json::json!({
            "userId": 2,
            "injuryType": "sprain",
            "bodyPart": "ankle",
            "severity": "Mild"
        }))
        .unwrap();
        let draft = payload.validate().unwrap();
        assert_eq!(draft.status, "Active");
    }

    #[test]
    fn finance_defaults_is_income_to_false() {
        let payload: NewFinance = serde_json::from_value(serde_json::json!({
            "userId": 2,
            "category": "equipment",
            "amount": 120.5
        }))
        .unwrap();
        let draft = payload.validate().unwrap();
        assert!(!draft.is_income);
        assert!(draft.description.is_none());
    }

    #[test]
    fn nutrition_estimates_stay_optional() {
        let payload: NewNutrition = serde_json::from_value(serde_json::json!({
            "userId": 3,
            "mealType": "breakfast",
            "foodItems": "oats and eggs"
        }))
        .unwrap();
        let draft = payload.validate().unwrap();
        assert!(draft.calories.is_none());
        assert!(draft.protein.is_none());
    }
}
