//! Schema fixtures.
//!
//! Both are already in the canonical rendering (4-space indent, trailing
//! newline) so a no-op sync leaves them byte-identical.

/// Detection objective schema with a stale threats enum.
pub const THREATS_SCHEMA: &str = r#"{
    "$schema": "http://json-schema.org/draft-07/schema#",
    "title": "Detection Objective",
    "type": "object",
    "properties": {
        "name": {
            "type": "string"
        },
        "objective": {
            "type": "object",
            "properties": {
                "description": {
                    "type": "string"
                },
                "threats": {
                    "type": "array",
                    "items": {
                        "type": "string",
                        "enum": [
                            "00000000-0000-4000-8000-000000000000"
                        ],
                        "markdownEnumDescriptions": [
                            "stale"
                        ]
                    },
                    "uniqueItems": true
                }
            }
        }
    },
    "required": [
        "name",
        "objective"
    ]
}
"#;

/// Managed detection rule schema with a stale detection model enum.
pub const MDR_SCHEMA: &str = r#"{
    "$schema": "http://json-schema.org/draft-07/schema#",
    "title": "Managed Detection Rule",
    "type": "object",
    "properties": {
        "name": {
            "type": "string"
        },
        "detection_model": {
            "title": "Detection Model",
            "type": "string",
            "enum": [
                "00000000-0000-4000-8000-000000000000"
            ],
            "markdownEnumDescriptions": [
                "stale"
            ],
            "description": "Signal this rule implements"
        }
    },
    "required": [
        "name"
    ]
}
"#;

/// Threat vector document body.
pub fn threat_vector_yaml(uuid: &str, name: &str) -> String {
    format!("metadata:\n  uuid: {uuid}\nname: {name}\ndescription: Test threat vector\n")
}

/// Detection objective document body with `(uuid, name)` signals.
pub fn detection_objective_yaml(name: &str, signals: &[(&str, &str)]) -> String {
    let mut out = format!("name: {name}\nobjective:\n  description: Test objective\n");
    if signals.is_empty() {
        out.push_str("  signals: []\n");
        return out;
    }
    out.push_str("  signals:\n");
    for (uuid, signal) in signals {
        out.push_str(&format!("    - uuid: {uuid}\n      name: {signal}\n"));
    }
    out
}
