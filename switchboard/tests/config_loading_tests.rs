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
use std::fs;

use switchboard::prelude::*;
use switchboard_test::prelude::*;
use tempfile::TempDir;

#[switchboard_test]
fn explicit_file_overrides_defaults() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
        [tracing]
        level = "debug"
        log_directory = "logs"

        [agents]
        router = "switch"

        [[routes]]
        key = "score"
        target = "decider"
        "#,
    )?;

    let config = SwitchboardConfig::load_from(&path)?;
    assert_eq!(config.tracing.level, "debug");
    assert_eq!(config.tracing.log_directory.as_deref(), Some("logs"));
    assert_eq!(config.tracing.log_file, "switchboard.log");
    assert_eq!(config.agents.router, "switch");
    assert_eq!(config.agents.echo, "echoer");
    assert_eq!(config.routes, vec![Route::new("score", "decider")]);

    let system = SwitchboardApp::launch(&config)?;
    assert_eq!(system.router.name(), "switch");
    assert_eq!(system.router.resolve("echo.x"), None);
    Ok(())
}

#[switchboard_test]
fn missing_file_is_a_read_error() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let err = SwitchboardConfig::load_from(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    Ok(())
}

#[switchboard_test]
fn wrong_types_are_a_parse_error() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[decision]\ndefault_threshold = \"high\"\n")?;

    let err = SwitchboardConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    Ok(())
}

#[switchboard_test]
fn blank_agent_name_fails_launch() -> anyhow::Result<()> {
    let config = SwitchboardConfig::from_toml("[agents]\ndecision = \" \"\n")?;
    let err = SwitchboardApp::launch(&config).unwrap_err();
    assert_eq!(err, BusError::InvalidName(" ".to_string()));
    Ok(())
}

#[switchboard_test]
fn xdg_lookup_reports_how_configuration_was_obtained() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
    let config_dir = temp_dir.path().join("switchboard");
    fs::create_dir_all(&config_dir)?;
    let path = config_dir.join("config.toml");

    fs::write(&path, "[agents\n")?;
    let (config, origin) = SwitchboardConfig::load_xdg();
    assert_eq!(config, SwitchboardConfig::default());
    assert!(matches!(origin, Err(ConfigError::Parse { .. })));

    fs::write(&path, "[agents]\necho = \"parrot\"\n")?;
    let (config, origin) = SwitchboardConfig::load_xdg();
    assert_eq!(config.agents.echo, "parrot");
    assert_eq!(origin?, Some(path));
    Ok(())
}
