/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use serde_json::{json, Value};
use tracing::trace;

use crate::prelude::*;

/// Topic the decision agent reacts to.
pub const SCORE_TOPIC: &str = "score";
/// Topic of decision replies.
pub const DECISION_TOPIC: &str = "decision";

/// Makes threshold decisions on numeric scores.
///
/// On `score`, reads `value` and `threshold` from the payload and replies to the
/// sender on `decision` with `{"accepted": value >= threshold, "value", "threshold"}`.
/// A missing or non-numeric `value` produces `{"error": "invalid_value"}` instead and
/// no `accepted` field; a non-numeric `threshold` produces `{"error": "invalid_threshold"}`.
#[switchboard_agent]
pub struct DecisionAgent {
    core: AgentCore,
    default_threshold: f64,
}

impl DecisionAgent {
    /// Creates a decision agent whose threshold defaults to `0`.
    ///
    /// # Errors
    ///
    /// [`BusError::InvalidName`] for an empty or blank name.
    pub fn new(name: impl Into<String>) -> Result<Self, BusError> {
        Self::with_default_threshold(name, 0.0)
    }

    /// Creates a decision agent using `default_threshold` when a score carries none.
    ///
    /// # Errors
    ///
    /// [`BusError::InvalidName`] for an empty or blank name.
    pub fn with_default_threshold(
        name: impl Into<String>,
        default_threshold: f64,
    ) -> Result<Self, BusError> {
        Ok(Self {
            core: AgentCore::new(name)?,
            default_threshold,
        })
    }

    /// Threshold applied when a score has no `threshold` entry.
    pub const fn default_threshold(&self) -> f64 {
        self.default_threshold
    }

    /// The default threshold as a JSON number; whole values stay integers.
    fn default_threshold_value(&self) -> Value {
        let threshold = self.default_threshold;
        if threshold.fract() == 0.0 && threshold.abs() < i64::MAX as f64 {
            Value::from(threshold as i64)
        } else {
            Value::from(threshold)
        }
    }

    fn decide(&self, score: &Payload) -> Payload {
        let Some(value) = score.get("value").filter(|value| value.is_number()) else {
            return payload(json!({"error": "invalid_value"}));
        };
        let threshold = score
            .get("threshold")
            .cloned()
            .unwrap_or_else(|| self.default_threshold_value());

        match at_least(value, &threshold) {
            Some(accepted) => payload(json!({
                "accepted": accepted,
                "value": value,
                "threshold": threshold,
            })),
            None => payload(json!({"error": "invalid_threshold"})),
        }
    }
}

/// `value >= threshold`, or `None` if either side is not a number.
///
/// Two integers are compared exactly; anything involving a float goes through `f64`.
fn at_least(value: &Value, threshold: &Value) -> Option<bool> {
    fn integer(number: &Value) -> Option<i128> {
        number
            .as_i64()
            .map(i128::from)
            .or_else(|| number.as_u64().map(i128::from))
    }

    if let (Some(v), Some(t)) = (integer(value), integer(threshold)) {
        return Some(v >= t);
    }
    Some(value.as_f64()? >= threshold.as_f64()?)
}

impl Agent for DecisionAgent {
    fn handle(&self, message: &Message) -> Result<(), BusError> {
        if message.topic() != SCORE_TOPIC {
            return Ok(());
        }
        let decision = self.decide(message.payload());
        trace!(agent = %self.name(), from = %message.sender(), ?decision, "decided");
        self.send(Recipient::to(message.sender()), DECISION_TOPIC, decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(score: Value) -> Payload {
        DecisionAgent::new("decider").unwrap().decide(&payload(score))
    }

    #[test]
    fn compares_value_against_threshold() {
        assert_eq!(decide(json!({"value": 0.9, "threshold": 0.5}))["accepted"], json!(true));
        assert_eq!(decide(json!({"value": 0.1, "threshold": 0.5}))["accepted"], json!(false));
        assert_eq!(decide(json!({"value": 5, "threshold": 5}))["accepted"], json!(true));
    }

    #[test]
    fn missing_threshold_uses_default() {
        let decision = decide(json!({"value": -1}));
        assert_eq!(decision["accepted"], json!(false));
        assert_eq!(decision["threshold"], json!(0));

        let fractional = DecisionAgent::with_default_threshold("fractional", 0.25).unwrap();
        assert_eq!(fractional.decide(&payload(json!({"value": 1})))["threshold"], json!(0.25));

        let strict = DecisionAgent::with_default_threshold("strict", 10.0).unwrap();
        assert_eq!(strict.decide(&payload(json!({"value": 9})))["accepted"], json!(false));
    }

    #[test]
    fn non_numeric_inputs_become_error_replies() {
        for score in [json!({"value": "NaN"}), json!({}), json!({"value": true})] {
            let decision = decide(score);
            assert_eq!(decision["error"], json!("invalid_value"));
            assert!(!decision.contains_key("accepted"));
        }

        let decision = decide(json!({"value": 1, "threshold": "high"}));
        assert_eq!(decision["error"], json!("invalid_threshold"));
        assert!(!decision.contains_key("accepted"));
    }

    #[test]
    fn echoes_inputs_as_received() {
        let decision = decide(json!({"value": 5, "threshold": 2}));
        assert_eq!(decision["value"], json!(5));
        assert_eq!(decision["threshold"], json!(2));
    }

    #[test]
    fn large_integers_compare_exactly() {
        let decision = decide(json!({"value": 9_007_199_254_740_992_u64, "threshold": 9_007_199_254_740_993_u64}));
        assert_eq!(decision["accepted"], json!(false));

        let decision = decide(json!({"value": u64::MAX, "threshold": -1}));
        assert_eq!(decision["accepted"], json!(true));
    }
}
