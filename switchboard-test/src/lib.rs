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

#![forbid(unsafe_code)]

//! Testing utilities for Switchboard agents.
//!
//! ```rust,ignore
//! use switchboard::prelude::*;
//! use switchboard_test::prelude::*;
//!
//! #[switchboard_test]
//! fn echo_replies() -> anyhow::Result<()> {
//!     let system = SwitchboardApp::launch_default()?;
//!     // ...
//!     Ok(())
//! }
//! ```

use std::fmt::Debug;
use std::sync::Once;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

pub use switchboard_test_macro::switchboard_test;
#[doc(hidden)]
pub use tracing;

/// Convenient imports for test files.
pub mod prelude {
    pub use super::{initialize_tracing, switchboard_test};
}

// Ensures tracing initialization happens only once across all tests.
static INIT: Once = Once::new();

/// Installs the global tracing subscriber used by tests.
///
/// Output goes through the test writer, so it is only shown for failing tests
/// (or with `--nocapture`). `RUST_LOG` overrides the default `switchboard=trace`
/// filter. Safe to call from every test; only the first call has an effect.
pub fn initialize_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,switchboard=trace"));

        let subscriber = FmtSubscriber::builder()
            .with_span_events(FmtSpan::NONE)
            .compact()
            .with_line_number(true)
            .without_time()
            .with_target(true)
            .with_env_filter(filter)
            .with_test_writer()
            .finish();

        // Another harness may have installed a subscriber already; keep theirs.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// Return types accepted from a `#[switchboard_test]` body.
#[doc(hidden)]
pub trait TestOutcome {
    /// Panics if the outcome represents a failure.
    fn check(self);
}

impl TestOutcome for () {
    fn check(self) {}
}

impl<E: Debug> TestOutcome for Result<(), E> {
    fn check(self) {
        if let Err(error) = self {
            tracing::error!(?error, "test returned an error");
            panic!("test returned an error: {error:?}");
        }
    }
}
