//! Snapshot tests using the insta crate.
//!
//! These pin the wire layout of what leaves the bridge: the pointer event
//! vocabulary sent to the controller, and the picker options object handed to
//! the platform dialog unchanged.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{bridge_fixture, raw_at};
use canvas_bridge::Notice;
use canvas_bridge::files::PickerOptions;

// ============================================================================
// Pointer Event Trace
// ============================================================================

#[test]
fn snapshot_drag_trace() {
    let (mut bridge, controller) = bridge_fixture();

    bridge.on_press(&raw_at(10.0, 10.0)).unwrap();
    bridge.on_move(&raw_at(15.0, 12.0)).unwrap();
    bridge.on_release(&raw_at(15.5, 12.0)).unwrap();
    bridge.on_double_click(&raw_at(15.5, 12.0)).unwrap();

    let trace = serde_json::to_string_pretty(&controller.events()).unwrap();
    insta::assert_snapshot!(trace, @r#"
    [
      {
        "kind": "pressed",
        "x": 10.0,
        "y": 10.0
      },
      {
        "kind": "dragged",
        "x": 15.0,
        "y": 12.0
      },
      {
        "kind": "released",
        "x": 15.5,
        "y": 12.0
      },
      {
        "kind": "double_clicked",
        "x": 15.5,
        "y": 12.0
      }
    ]
    "#);
}

// ============================================================================
// Picker Options
// ============================================================================

#[test]
fn snapshot_default_open_options() {
    insta::assert_json_snapshot!(PickerOptions::default_open(), @r#"
    {
      "types": [
        {
          "description": "Workflows",
          "accept": {
            "application/json": [
              ".pwf",
              ".json"
            ]
          }
        }
      ],
      "excludeAcceptAllOption": true,
      "multiple": false
    }
    "#);
}

#[test]
fn snapshot_save_options_with_suggested_name() {
    let options = PickerOptions::from_json(
        r#"{ "types": [{ "description": "Text", "accept": { "text/plain": ".txt" } }] }"#,
    )
    .unwrap()
    .with_suggested_name("notes.txt");

    insta::assert_json_snapshot!(options, @r#"
    {
      "types": [
        {
          "description": "Text",
          "accept": {
            "text/plain": ".txt"
          }
        }
      ],
      "excludeAcceptAllOption": false,
      "multiple": false,
      "suggestedName": "notes.txt"
    }
    "#);
}

// ============================================================================
// Notices
// ============================================================================

#[test]
fn snapshot_notice() {
    insta::assert_json_snapshot!(Notice::warning("No file has been chosen"), @r#"
    {
      "level": "warning",
      "message": "No file has been chosen"
    }
    "#);
}
