//! End-to-end tests for the testbed operations
//!
//! A scripted fake invoker stands in for the external CLI so the full
//! reserve/wait/flash sequence can be exercised without a live testbed.

use labflow::config::default_firmware_table;
use labflow::models::{
    ExperimentSpec, FlashOutcome, Node, NodeIdentity, NodeState, WaitOutcome,
};
use labflow::testbed::{auth, experiment, flash, inventory, CommandOutput, Invoker};
use labflow::FlowError;
use async_trait::async_trait;
use std::collections::{BTreeMap, VecDeque};
use std::path::PathBuf;
use std::sync::Mutex;

/// Invoker that replays scripted responses and records every invocation
struct FakeInvoker {
    responses: Mutex<VecDeque<CommandOutput>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeInvoker {
    fn new(responses: Vec<CommandOutput>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Invoker for FakeInvoker {
    async fn run(&self, args: &[&str]) -> labflow::Result<CommandOutput> {
        self.calls
            .lock()
            .unwrap()
            .push(args.iter().map(|s| s.to_string()).collect());
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("fake invoker ran out of scripted responses"))
    }
}

fn ok(stdout: &str) -> CommandOutput {
    CommandOutput {
        status_ok: true,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

fn failed(stderr: &str) -> CommandOutput {
    CommandOutput {
        status_ok: false,
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

fn node(archi: &str, address: &str, state: NodeState) -> Node {
    Node {
        archi: archi.to_string(),
        network_address: address.to_string(),
        uid: "b137".to_string(),
        state,
    }
}

#[tokio::test]
async fn authentication_failure_is_fatal() {
    let invoker = FakeInvoker::new(vec![failed("401 Unauthorized")]);
    let result = auth::authenticate(&invoker, "alice", "wrong").await;
    match result {
        Err(FlowError::Auth(msg)) => assert!(msg.contains("alice")),
        other => panic!("Expected Auth error, got: {:?}", other),
    }
}

#[tokio::test]
async fn submission_formats_node_specs() {
    let nodes = vec![
        node("m3:at86rf231", "m3-12.grenoble.iot-lab.info", NodeState::Alive),
        node("m3:at86rf231", "bad-address", NodeState::Alive),
    ];
    let identities: Vec<NodeIdentity> =
        nodes.iter().filter_map(NodeIdentity::parse).collect();
    // the unparseable node is excluded from the reservation
    assert_eq!(identities.len(), 1);

    let spec = ExperimentSpec::new("grenoble", "Experiment", 10, identities);
    let invoker = FakeInvoker::new(vec![ok(r#"{"id": 412789}"#)]);
    let id = experiment::submit(&invoker, &spec).await.unwrap();
    assert_eq!(id.to_string(), "412789");

    let calls = invoker.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        vec![
            "experiment",
            "submit",
            "-n",
            "grenoble_Experiment",
            "-d",
            "10",
            "-l",
            "grenoble,m3,12"
        ]
    );
}

#[tokio::test]
async fn empty_node_set_never_reaches_the_service() {
    let spec = ExperimentSpec::new("grenoble", "Experiment", 10, Vec::new());
    let invoker = FakeInvoker::new(Vec::new());
    let result = experiment::submit(&invoker, &spec).await;
    assert!(matches!(result, Err(FlowError::Experiment(_))));
    assert!(invoker.calls().is_empty());
}

#[tokio::test]
async fn submission_without_id_in_response_fails() {
    let spec = ExperimentSpec::new(
        "grenoble",
        "Experiment",
        10,
        vec![NodeIdentity {
            archi: "m3".to_string(),
            id: "12".to_string(),
        }],
    );
    let invoker = FakeInvoker::new(vec![ok("Reservation queued")]);
    let result = experiment::submit(&invoker, &spec).await;
    assert!(matches!(result, Err(FlowError::Experiment(_))));
}

#[tokio::test]
async fn empty_alive_inventory_yields_nothing_to_reserve() {
    let invoker = FakeInvoker::new(vec![ok(r#"{"items": []}"#)]);
    let available = inventory::fetch_alive_nodes(&invoker, "lille").await.unwrap();
    assert!(available.is_empty());

    let calls = invoker.calls();
    assert_eq!(
        calls[0],
        vec!["status", "--nodes", "--site", "lille", "--state", "Alive"]
    );
}

#[tokio::test]
async fn malformed_inventory_degrades_to_empty() {
    let invoker = FakeInvoker::new(vec![ok("<html>503</html>")]);
    let sites = inventory::fetch_sites(&invoker).await.unwrap();
    assert!(sites.is_empty());
}

#[tokio::test]
async fn wait_reports_ambiguity_without_aborting() {
    let invoker = FakeInvoker::new(vec![failed("timeout reached")]);
    let outcome = experiment::wait(&invoker, labflow::ExperimentId(7)).await.unwrap();
    assert!(matches!(outcome, WaitOutcome::Ambiguous(_)));
    assert!(!outcome.started());
}

#[tokio::test]
async fn wait_detects_running_experiment() {
    let invoker = FakeInvoker::new(vec![ok(r#""Running""#)]);
    let outcome = experiment::wait(&invoker, labflow::ExperimentId(7)).await.unwrap();
    assert_eq!(outcome, WaitOutcome::Running);
}

#[tokio::test]
async fn flash_failure_is_scoped_to_one_architecture() {
    let mut firmware = BTreeMap::new();
    firmware.insert("m3".to_string(), PathBuf::from("Firmwares/m3_test.elf"));
    firmware.insert(
        "samr21".to_string(),
        PathBuf::from("Firmwares/samr21_test.elf"),
    );

    let reserved = vec![
        node("m3:at86rf231", "m3-3.grenoble.iot-lab.info", NodeState::Alive),
        node("m3:at86rf231", "m3-5.grenoble.iot-lab.info", NodeState::Alive),
        node(
            "samr21:at86rf233",
            "samr21-9.grenoble.iot-lab.info",
            NodeState::Alive,
        ),
    ];

    // architectures are deployed in sorted order: m3 first, then samr21
    let invoker = FakeInvoker::new(vec![
        ok(r#"{"m3-3.grenoble.iot-lab.info": "Error: flash failed"}"#),
        ok(r#"{"samr21-9.grenoble.iot-lab.info": "OK"}"#),
    ]);

    let reports = flash::deploy(&invoker, "grenoble", &firmware, &reserved)
        .await
        .unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].archi, "m3");
    assert!(matches!(reports[0].outcome, FlashOutcome::Failed(_)));
    assert_eq!(reports[1].archi, "samr21");
    assert_eq!(reports[1].outcome, FlashOutcome::Flashed(1));

    let calls = invoker.calls();
    assert_eq!(
        calls[0],
        vec![
            "node",
            "--flash",
            "Firmwares/m3_test.elf",
            "-l",
            "grenoble,m3,3+5"
        ]
    );
    assert_eq!(
        calls[1],
        vec![
            "node",
            "--flash",
            "Firmwares/samr21_test.elf",
            "-l",
            "grenoble,samr21,9"
        ]
    );
}

#[tokio::test]
async fn flash_skips_architectures_without_reserved_nodes() {
    // full default table, but only m3 nodes reserved: one invocation total
    let firmware = default_firmware_table();
    let reserved = vec![node(
        "m3:at86rf231",
        "m3-3.grenoble.iot-lab.info",
        NodeState::Alive,
    )];

    let invoker = FakeInvoker::new(vec![ok("flashed")]);
    let reports = flash::deploy(&invoker, "grenoble", &firmware, &reserved)
        .await
        .unwrap();

    assert_eq!(invoker.calls().len(), 1);
    assert_eq!(reports.len(), firmware.len());
    for report in &reports {
        if report.archi == "m3" {
            assert_eq!(report.outcome, FlashOutcome::Flashed(1));
        } else {
            assert_eq!(report.outcome, FlashOutcome::SkippedNoNodes);
        }
    }
}

#[tokio::test]
async fn full_reservation_sequence_over_scripted_responses() {
    let alive_listing = r#"{"items": [
        {"archi": "m3:at86rf231", "network_address": "m3-12.grenoble.iot-lab.info", "uid": "a276", "state": "Alive"},
        {"archi": "m3:at86rf231", "network_address": "m3-14.grenoble.iot-lab.info", "uid": "a277", "state": "Alive"}
    ]}"#;

    let invoker = FakeInvoker::new(vec![
        ok(""),                      // auth
        ok(alive_listing),           // alive nodes
        ok(r#"{"id": 98001}"#),      // submit
        ok(r#""Running""#),          // wait
        ok("flashed"),               // flash m3
    ]);

    auth::authenticate(&invoker, "alice", "secret").await.unwrap();
    let available = inventory::fetch_alive_nodes(&invoker, "grenoble")
        .await
        .unwrap();
    assert_eq!(available.len(), 2);

    let identities: Vec<NodeIdentity> =
        available.iter().filter_map(NodeIdentity::parse).collect();
    let spec = ExperimentSpec::new("grenoble", "Experiment", 70, identities);
    let id = experiment::submit(&invoker, &spec).await.unwrap();

    let outcome = experiment::wait(&invoker, id).await.unwrap();
    assert!(outcome.started());

    let mut firmware = BTreeMap::new();
    firmware.insert("m3".to_string(), PathBuf::from("Firmwares/m3_test.elf"));
    let reports = flash::deploy(&invoker, "grenoble", &firmware, &available)
        .await
        .unwrap();
    assert_eq!(reports[0].outcome, FlashOutcome::Flashed(2));

    let calls = invoker.calls();
    assert_eq!(calls.len(), 5);
    assert_eq!(calls[2][3], "grenoble_Experiment");
    assert_eq!(calls[2][5], "70");
    assert_eq!(calls[4][4], "grenoble,m3,12+14");
}
