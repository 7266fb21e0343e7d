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

/// Separator between topic segments, e.g. `echo.request`.
pub const TOPIC_SEPARATOR: char = '.';

/// Suffix that marks a topic as a reply.
pub const REPLY_SUFFIX: &str = ".reply";

/// Returns `true` when `topic` is a reply topic (ends in `.reply`).
#[inline]
#[must_use]
pub fn is_reply_topic(topic: &str) -> bool {
    topic.ends_with(REPLY_SUFFIX)
}

/// Returns `true` when `topic` equals `namespace` or lives underneath it.
///
/// `echo` and `echo.request` are both in the `echo` namespace; `echoes` is not.
#[must_use]
pub fn topic_in_namespace(topic: &str, namespace: &str) -> bool {
    topic
        .strip_prefix(namespace)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(TOPIC_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_requires_segment_boundary() {
        assert!(topic_in_namespace("echo", "echo"));
        assert!(topic_in_namespace("echo.request", "echo"));
        assert!(topic_in_namespace("echo.", "echo"));
        assert!(!topic_in_namespace("echoes", "echo"));
        assert!(!topic_in_namespace("not-echo", "echo"));
    }

    #[test]
    fn reply_topics() {
        assert!(is_reply_topic("echo.reply"));
        assert!(!is_reply_topic("reply"));
        assert!(!is_reply_topic("echo.replying"));
    }
}
