use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::ScoreBand;

/// Backend-produced quality assessment of a generated artifact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SelfEvaluation {
    #[serde(default)]
    pub overall_score: f64,
    #[serde(default)]
    pub criteria: BTreeMap<String, CriterionScore>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

impl SelfEvaluation {
    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.overall_score)
    }
}

/// Score for one evaluation criterion.
///
/// The backend emits either `{"score": 8, "reasoning": "..."}` or a bare
/// number (sometimes as a string). Both shapes are accepted; anything that
/// does not yield a number scores 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(from = "serde_json::Value")]
pub struct CriterionScore {
    pub score: f64,
    pub reasoning: String,
}

impl CriterionScore {
    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

impl From<Value> for CriterionScore {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self {
                score: map.get("score").map_or(0.0, lenient_score),
                reasoning: map
                    .get("reasoning")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            },
            other => Self {
                score: lenient_score(&other),
                reasoning: String::new(),
            },
        }
    }
}

fn lenient_score(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criterion_accepts_detailed_shape() {
        let c: CriterionScore =
            serde_json::from_str(r#"{"score": 8.5, "reasoning": "clear pacing"}"#).unwrap();
        assert!((c.score - 8.5).abs() < f64::EPSILON);
        assert_eq!(c.reasoning, "clear pacing");
    }

    #[test]
    fn criterion_accepts_bare_number_and_numeric_string() {
        let n: CriterionScore = serde_json::from_str("7").unwrap();
        assert!((n.score - 7.0).abs() < f64::EPSILON);
        assert!(n.reasoning.is_empty());

        let s: CriterionScore = serde_json::from_str("\"6.5\"").unwrap();
        assert!((s.score - 6.5).abs() < f64::EPSILON);
    }

    #[test]
    fn criterion_falls_back_to_zero() {
        let c: CriterionScore = serde_json::from_str(r#"{"score": "n/a"}"#).unwrap();
        assert!(c.score.abs() < f64::EPSILON);
        let c: CriterionScore = serde_json::from_str("null").unwrap();
        assert!(c.score.abs() < f64::EPSILON);
    }

    #[test]
    fn evaluation_with_mixed_criteria() {
        let json = r#"{
            "overall_score": 7.4,
            "criteria": {
                "personalization": {"score": 9, "reasoning": "uses learning style"},
                "clarity": 6
            },
            "weaknesses": ["too long"]
        }"#;
        let eval: SelfEvaluation = serde_json::from_str(json).unwrap();
        assert_eq!(eval.criteria.len(), 2);
        assert_eq!(eval.band(), ScoreBand::Fair);
        assert_eq!(eval.criteria["personalization"].band(), ScoreBand::Strong);
        assert_eq!(eval.criteria["clarity"].band(), ScoreBand::Fair);
        assert!(eval.improvements.is_empty());
    }
}
