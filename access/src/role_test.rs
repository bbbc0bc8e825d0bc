use super::*;

#[test]
fn known_roles_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Client).expect("json"), "\"client\"");
    assert_eq!(serde_json::to_string(&Role::Freelancer).expect("json"), "\"freelancer\"");
    assert_eq!(serde_json::to_string(&Role::Admin).expect("json"), "\"admin\"");
}

#[test]
fn unrecognized_tag_deserializes_as_unknown() {
    let role: Role = serde_json::from_str("\"moderator\"").expect("lenient role");
    assert_eq!(role, Role::Unknown);
}

#[test]
fn display_matches_wire_tag() {
    assert_eq!(Role::Freelancer.to_string(), "freelancer");
}
