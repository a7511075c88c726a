//! Layout descriptors survive a trip through JSON for the UI layer.

#![cfg(feature = "serde")]

use zengrid::{GridRequest, RankedCandidate};

#[test]
fn ranked_layout_json() {
    let best = GridRequest::new(1920.0, 1080.0, 5).best().unwrap().unwrap();
    let json = serde_json::to_string(&best).unwrap();
    assert!(json.contains("\"cell_list\""));
    assert!(json.contains(&format!("\"{}\"", best.layout.id)));
    let back: RankedCandidate = serde_json::from_str(&json).unwrap();
    assert_eq!(back.layout.id, best.layout.id);
    assert_eq!(back.layout.cell_list, best.layout.cell_list);
    assert_eq!(back.layout.template.column_tracks, best.layout.template.column_tracks);
    assert_eq!(back.layout.template.rows.len(), best.layout.template.rows.len());
}

#[test]
fn request_json_uses_defaults_it_was_built_with() {
    let req = GridRequest::new(800.0, 600.0, 3).aspect(4, 3);
    let json = serde_json::to_value(req).unwrap();
    assert_eq!(json["count"], 3);
    assert_eq!(json["row_sizing"], "Adaptive");
}
