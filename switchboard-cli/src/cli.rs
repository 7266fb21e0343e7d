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
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

const TAGLINE: &str = "Drive the Switchboard reference agents and print the bus history";

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "switchboard", version, about = TAGLINE)]
pub struct Cli {
    /// Configuration file (defaults to $XDG_CONFIG_HOME/switchboard/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// History output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send the two seed messages (an echo and a score) through the router
    Demo,
    /// Send a single message onto the bus
    Send {
        /// Message topic, e.g. `echo.hello` or `score`
        #[arg(long)]
        topic: String,
        /// Recipient name; broadcast when omitted or blank
        #[arg(long)]
        to: Option<String>,
        /// Sender name
        #[arg(long, default_value = "client")]
        from: String,
        /// Payload as a JSON object
        #[arg(long, default_value = "{}")]
        payload: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `NN sender -> recipient [topic] payload`
    Text,
    /// One JSON object per line
    Json,
}
