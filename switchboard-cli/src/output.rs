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
use std::io::Write;

use anyhow::Result;
use switchboard::prelude::Message;

use crate::cli::Format;

/// Writes the history, one message per line.
pub fn write_history(out: &mut impl Write, history: &[Message], format: Format) -> Result<()> {
    for (i, message) in history.iter().enumerate() {
        match format {
            Format::Text => writeln!(out, "{:02} {}", i + 1, message)?,
            Format::Json => writeln!(out, "{}", serde_json::to_string(message)?)?,
        }
    }
    Ok(())
}
