//! Replays the bundled demo script end to end.

use std::path::Path;

use form_session_cli::replay::{replay, write_report};
use form_session_cli::script::{parse_script, read_script};

const DEMO: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/profile.jsonl");

#[test]
fn demo_rejects_then_submits() {
    let source = read_script(Path::new(DEMO)).unwrap();
    let lines = parse_script(&source).unwrap();
    assert_eq!(lines.len(), 14);

    let report = replay(&lines).unwrap();
    assert_eq!(report.rejected, 1);
    assert_eq!(report.submissions.len(), 1);
    assert!(report.errors.is_empty());

    let submitted = serde_json::to_value(&report.submissions[0]).unwrap();
    assert_eq!(
        submitted,
        serde_json::json!({
            "firstName": "ada",
            "lastName": "lovelace",
            "age": 36,
            "employed": true,
            "favoriteColor": "green",
            "sauces": ["guacamole", "mustard"],
            "stooge": "curly",
            "notes": "Wrote the first published algorithm.",
        })
    );

    let mut out = Vec::new();
    write_report(&report, &mut out, false).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Submission 1:\n{\n  \"firstName\": \"ada\""));
    assert!(text.contains("Display (dirty):\n{\n  \"firstName\": \"Ada\""));
}
