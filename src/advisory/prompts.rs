//! Prompt synthesis for the four advisory operations.

use super::dto::AdviceContext;

pub fn coach_advice(question: &str, context: Option<&AdviceContext>) -> String {
    let mut prompt = format!(
        "You are an expert AI sports coach and athletic advisor. Provide specific, \
         actionable advice based on the athlete's question and context. Respond with \
         JSON: {{\"advice\": string, \"suggestedActions\": [string], \"confidence\": number}}.\n\n\
         Question: {question}"
    );
    if let Some(ctx) = context {
        prompt.push_str(&format!(
            "\nContext:\nPerformance History: {}\nNutrition Logs: {}\nInjury History: {}",
            ctx.performance_history.as_deref().unwrap_or(""),
            ctx.nutrition_logs.as_deref().unwrap_or(""),
            ctx.injuries.as_deref().unwrap_or(""),
        ));
    }
    prompt
}

pub fn performance_analysis(metrics: &[serde_json::Value], goals: &str) -> String {
    format!(
        "You are an expert sports performance analyst. Analyze the athlete's performance \
         data and provide insights and recommendations. Respond with JSON: \
         {{\"analysis\": string, \"recommendations\": [string]}}.\n\n\
         Performance Data: {}\nAthlete Goals: {goals}",
        serde_json::Value::Array(metrics.to_vec())
    )
}

pub fn training_plan(level: &str, goals: &str, constraints: &[String]) -> String {
    format!(
        "You are an expert sports trainer. Create a personalized training plan based on \
         the athlete's level, goals, and constraints. Respond with JSON: \
         {{\"plan\": string, \"schedule\": object, \"guidelines\": [string]}}.\n\n\
         Level: {level}\nGoals: {goals}\nConstraints: {}",
        constraints.join(", ")
    )
}

pub fn nutrition_analysis(food_items: &str) -> String {
    format!(
        "You are an expert nutritionist. Analyze these food items and estimate their \
         nutritional content. Return a JSON with calories (number), protein (grams, \
         number), and confidence (0-1).\n\nFood Items: {food_items}"
    )
}
