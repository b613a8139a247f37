use serde::Deserialize;

use crate::error::ApiError;
use crate::store::NewAccount;

/// Request body for registration. Only username and password are required;
/// the profile attributes all carry defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub weight: Option<f64>,
    pub daily_calorie_goal: Option<i32>,
    pub height_cm: Option<i32>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
    pub state: Option<String>,
    pub sport: Option<String>,
    pub academy_affiliation: Option<String>,
    pub national_level: Option<bool>,
}

impl RegisterRequest {
    /// Splits into (username, plaintext password, profile with the password
    /// hash left blank for the caller to fill in).
    pub fn validate(self) -> Result<(String, String, NewAccount), ApiError> {
        let mut missing = Vec::new();
        if self.username.as_deref().map_or(true, |u| u.trim().is_empty()) {
            missing.push("username");
        }
        if self.password.as_deref().map_or(true, |p| p.is_empty()) {
            missing.push("password");
        }
        if !missing.is_empty() {
            return Err(ApiError::Validation(missing));
        }

        let username = self.username.unwrap_or_default().trim().to_string();
        let password = self.password.unwrap_or_default();
        let profile = NewAccount {
            username: username.clone(),
            password_hash: String::new(),
            name: self.name.unwrap_or_else(|| "Athlete".into()),
            role: self.role.unwrap_or_else(|| "Athlete".into()),
            weight: self.weight.unwrap_or(0.0),
            daily_calorie_goal: self.daily_calorie_goal.unwrap_or(2000),
            height_cm: self.height_cm.unwrap_or(175),
            age: self.age.unwrap_or(30),
            gender: self.gender.unwrap_or_else(|| "Not specified".into()),
            activity_level: self.activity_level.unwrap_or_else(|| "Moderate".into()),
            state: self.state,
            sport: self.sport,
            academy_affiliation: self.academy_affiliation,
            national_level: self.national_level.unwrap_or(false),
        };
        Ok((username, password, profile))
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
