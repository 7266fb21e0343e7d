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
use serde_json::json;
use switchboard::prelude::*;
use switchboard_test::prelude::*;

use crate::setup::*;

mod setup;

#[switchboard_test]
fn end_to_end_workflow_echo_and_decision() -> anyhow::Result<()> {
    let system = system()?;

    // a client sends an echo through the router (broadcast)
    system.router.send(Recipient::Broadcast, "echo.request", payload(json!({"text": "ping"})))?;
    // then a scoring request
    system.router.send(
        Recipient::Broadcast,
        SCORE_TOPIC,
        payload(json!({"value": 0.75, "threshold": 0.5})),
    )?;

    let history = system.bus.history();
    assert!(!on_topic(&history, ECHO_REPLY_TOPIC).is_empty());

    let decisions = on_topic(&history, DECISION_TOPIC);
    let last = decisions.last().expect("expected a decision message");
    assert_eq!(last.payload().get("accepted"), Some(&json!(true)));
    Ok(())
}

#[switchboard_test]
fn unroutable_message_is_dropped() -> anyhow::Result<()> {
    let system = system()?;
    let before = system.bus.history_len();

    system.router.send(Recipient::Broadcast, "unknown.topic", Payload::new())?;

    // only the original send is recorded; no forwards
    assert_eq!(system.bus.history_len() - before, 1);
    Ok(())
}

#[switchboard_test]
fn demo_seed_produces_four_messages() -> anyhow::Result<()> {
    let system = system()?;
    system.router.send(Recipient::Broadcast, "echo", payload(json!({"text": "hello"})))?;
    system.router.send(
        Recipient::Broadcast,
        SCORE_TOPIC,
        payload(json!({"value": 0.72, "threshold": 0.5})),
    )?;

    let lines: Vec<String> = system.bus.history().iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            r#"router -> * [echo] {"text":"hello"}"#,
            r#"echoer -> router [echo.reply] {"echo":{"text":"hello"}}"#,
            r#"router -> * [score] {"threshold":0.5,"value":0.72}"#,
            r#"decider -> router [decision] {"accepted":true,"threshold":0.5,"value":0.72}"#,
        ]
    );
    Ok(())
}

#[switchboard_test]
fn router_forwards_prefix_and_exact_matches() -> anyhow::Result<()> {
    let system = system()?;

    system.bus.send(Message::new("tester", "router", "echo.hello", payload(json!({"txt": "hi"}))));
    system.bus.send(Message::new("tester", "router", SCORE_TOPIC, payload(json!({"value": 0.9, "threshold": 0.5}))));

    assert_eq!(system.echoer.inbox()[0].topic(), "echo.hello");
    assert_eq!(system.decider.inbox()[0].payload()["value"], json!(0.9));

    let before = system.bus.history_len();
    system.bus.send(Message::new("tester", "router", "unknown.topic", Payload::new()));
    assert_eq!(system.bus.history_len() - before, 1);
    Ok(())
}

#[switchboard_test]
fn launch_runs_on_start_hooks_with_custom_names() -> anyhow::Result<()> {
    let mut config = SwitchboardConfig::default();
    config.agents.echo = "parrot".to_string();
    config.routes = vec![Route::new("echo.", "parrot")];
    config.decision.default_threshold = 1.0;

    let system = SwitchboardApp::launch(&config)?;
    assert_eq!(system.bus.agent_names(), vec!["parrot", "decider", "router"]);
    assert_eq!(system.decider.default_threshold(), 1.0);

    system.bus.send(Message::new("tester", "router", "echo.x", Payload::new()));
    assert_eq!(system.echoer.inbox().len(), 1);

    system.bus.send(Message::new("tester", "decider", SCORE_TOPIC, payload(json!({"value": 0.5}))));
    let history = system.bus.history();
    let decision = on_topic_to(&history, DECISION_TOPIC, "tester");
    assert_eq!(decision[0].payload()["accepted"], json!(false));
    Ok(())
}
