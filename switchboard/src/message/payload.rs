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

use serde_json::{Map, Value};

/// Structured payload and metadata carried by a message.
///
/// Keys are strings, values are arbitrary JSON. The bus never interprets either.
pub type Payload = Map<String, Value>;

/// Converts a JSON value into a [`Payload`].
///
/// Objects are used as-is, `null` becomes an empty payload, and any other value
/// is wrapped under the `"value"` key.
///
/// ```rust
/// use serde_json::json;
/// use switchboard::prelude::payload;
///
/// let p = payload(json!({"x": 1}));
/// assert_eq!(p["x"], json!(1));
/// assert!(payload(json!(null)).is_empty());
/// assert_eq!(payload(json!(3))["value"], json!(3));
/// ```
#[must_use]
pub fn payload(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            let mut map = Map::new();
            map.insert("value".to_string(), other);
            map
        }
    }
}
