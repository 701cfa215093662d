// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Round-trip tests for the durable form of a completed run.
//!
//! A saved result set must reload with identical ordered content,
//! independently of the process that produced it.

mod common;

use common::BasicPatch;
use pretty_assertions::assert_eq;

use tiling_search::geometry::{EdgeDirection, Turn, Winding};
use tiling_search::ResultSet;

#[test]
fn test_result_set_round_trips() {
    let set = ResultSet::new(vec![
        BasicPatch::new(1, "ffr"),
        BasicPatch::new(2, "frf"),
        BasicPatch::new(3, "rff"),
    ]);

    let json = serde_json::to_string(&set).unwrap();
    let reloaded: ResultSet<BasicPatch> = serde_json::from_str(&json).unwrap();

    assert_eq!(reloaded, set);
    assert_eq!(reloaded.patches(), set.patches());
}

#[test]
fn test_empty_result_set_round_trips() {
    let set: ResultSet<BasicPatch> = ResultSet::new(Vec::new());

    let json = serde_json::to_string(&set).unwrap();
    let reloaded: ResultSet<BasicPatch> = serde_json::from_str(&json).unwrap();

    assert!(reloaded.is_empty());
    assert_eq!(reloaded, set);
}

#[test]
fn test_orientations_have_stable_names() {
    // The serialized form uses variant names, so a saved run stays
    // readable across processes.
    assert_eq!(
        serde_json::to_string(&EdgeDirection::Forward).unwrap(),
        "\"Forward\""
    );
    assert_eq!(
        serde_json::to_string(&Winding::Counterclockwise).unwrap(),
        "\"Counterclockwise\""
    );
    assert_eq!(serde_json::to_string(&Turn::Left).unwrap(), "\"Left\"");

    let turn: Turn = serde_json::from_str("\"Right\"").unwrap();
    assert_eq!(turn, Turn::Right);
}

#[test]
fn test_reload_preserves_order_across_processes() {
    // Simulate save in one process, reload in another: only the bytes
    // survive the boundary.
    let saved = {
        let mut patches = Vec::new();
        for id in 0..10u32 {
            patches.push(BasicPatch::new(id, "ffr"));
        }
        serde_json::to_vec(&ResultSet::new(patches)).unwrap()
    };

    let reloaded: ResultSet<BasicPatch> = serde_json::from_slice(&saved).unwrap();
    let ids: Vec<u32> = reloaded.iter().map(|p| p.id).collect();
    assert_eq!(ids, (0..10).collect::<Vec<u32>>());
}
