use serde::{Deserialize, Serialize};
use time::Date;

/// An authenticatable user plus their athlete profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub role: String,
    pub weight: f64,
    pub daily_calorie_goal: i32,
    pub height_cm: i32,
    pub age: i32,
    pub gender: String,
    pub activity_level: String,
    pub state: Option<String>,
    pub sport: Option<String>,
    pub academy_affiliation: Option<String>,
    pub national_level: bool,
}

/// Profile attributes accepted at registration; every field has a default.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub role: String,
    pub weight: f64,
    pub daily_calorie_goal: i32,
    pub height_cm: i32,
    pub age: i32,
    pub gender: String,
    pub activity_level: String,
    pub state: Option<String>,
    pub sport: Option<String>,
    pub academy_affiliation: Option<String>,
    pub national_level: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    pub id: i64,
    pub user_id: i64,
    pub date: Date,
    pub metric_type: String,
    pub value: f64,
    pub unit: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionRecord {
    pub id: i64,
    pub user_id: i64,
    pub date: Date,
    pub meal_type: String,
    pub food_items: String,
    pub calories: Option<i32>,
    pub protein: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuryRecord {
    pub id: i64,
    pub user_id: i64,
    pub injury_type: String,
    pub body_part: String,
    pub date_occurred: Date,
    pub status: String,
    pub severity: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceRecord {
    pub id: i64,
    pub user_id: i64,
    pub date: Date,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
    pub is_income: bool,
}

/// Fully validated payloads, one per record kind. The store stamps the id.
#[derive(Debug, Clone)]
pub struct MetricDraft {
    pub user_id: i64,
    pub date: Date,
    pub metric_type: String,
    pub value: f64,
    pub unit: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NutritionDraft {
    pub user_id: i64,
    pub date: Date,
    pub meal_type: String,
    pub food_items: String,
    pub calories: Option<i32>,
    pub protein: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct InjuryDraft {
    pub user_id: i64,
    pub injury_type: String,
    pub body_part: String,
    pub date_occurred: Date,
    pub status: String,
    pub severity: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FinanceDraft {
    pub user_id: i64,
    pub date: Date,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
    pub is_income: bool,
}
