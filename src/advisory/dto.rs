use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest {
    pub question: String,
    pub context: Option<AdviceContext>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceContext {
    pub performance_history: Option<String>,
    pub nutrition_logs: Option<String>,
    pub injuries: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachAdvice {
    pub advice: String,
    pub suggested_actions: Vec<String>,
    pub confidence: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceAnalysisRequest {
    pub metrics: Vec<serde_json::Value>,
    pub goals: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceAnalysis {
    pub analysis: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlanRequest {
    pub level: String,
    pub goals: String,
    #[serde(default)]
    pub constraints: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlan {
    pub plan: String,
    pub schedule: serde_json::Value,
    pub guidelines: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAnalysisRequest {
    pub food_items: Option<String>,
}

/// Raw model output before clamping.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNutritionEstimate {
    pub calories: f64,
    pub protein: f64,
    pub confidence: f64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionEstimate {
    pub calories: i64,
    pub protein: i64,
    pub confidence: f64,
}

impl From<RawNutritionEstimate> for NutritionEstimate {
    /// Calorie and protein estimates become non-negative integers and
    /// confidence lands in [0, 1], whatever the model said.
    fn from(raw: RawNutritionEstimate) -> Self {
        Self {
            calories: (raw.calories.round() as i64).max(0),
            protein: (raw.protein.round() as i64).max(0),
            confidence: raw.confidence.clamp(0.0, 1.0),
        }
    }
}
