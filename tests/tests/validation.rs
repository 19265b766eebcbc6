//! Validation behavior shared by every action.

use mutguard_tests::prelude::*;

mod multiple_fields {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("multiple_fields")
            .dispatcher(fixtures::strict_user_dispatcher())
            .step(
                "both_valid",
                WriteNode::new(
                    "User",
                    "create",
                    json!({ "data": { "email": "test@test.com", "name": "test" } }),
                ),
                |a| a.writes(1),
            )
            .step(
                "name_invalid",
                WriteNode::new(
                    "User",
                    "create",
                    json!({ "data": { "email": "test@test.com", "name": "bob" } }),
                ),
                |a| a.error("User.create: name must include test"),
            )
            .step(
                "both_invalid_reports_first",
                WriteNode::new(
                    "User",
                    "create",
                    json!({ "data": { "email": "test", "name": "bob" } }),
                ),
                |a| a.error("User.create: email must include @").stored("User", 1),
            )
    }

    #[test]
    fn test_first_failing_field_is_reported() {
        scenario().run().unwrap();
    }
}

mod unguarded_entity {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("unguarded_entity")
            .step(
                "any_profile_create",
                WriteNode::new("Profile", "create", json!({ "data": { "email": "test" } })),
                |a| a.writes(1).stored("Profile", 1),
            )
            .step(
                "any_profile_upsert",
                WriteNode::new(
                    "Profile",
                    "upsert",
                    json!({ "where": { "id": 1 }, "create": {}, "update": { "bio": 3 } }),
                ),
                |a| a.writes(1).stored("Profile", 2),
            )
    }

    #[test]
    fn test_unregistered_entity_passes_through() {
        scenario().run().unwrap();
    }
}

mod uninspected_actions {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("uninspected_actions")
            .step(
                "delete_is_not_validated",
                WriteNode::new("User", "delete", json!({ "where": { "email": "test" } })),
                |a| a.writes(1),
            )
            .step(
                "find_is_not_validated",
                WriteNode::new("User", "findMany", json!({ "where": { "email": "test" } })),
                |a| a.writes(1).stored("User", 2),
            )
    }

    #[test]
    fn test_other_actions_are_not_inspected() {
        scenario().run().unwrap();
    }
}

mod absent_fields {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("absent_fields")
            .step(
                "create_without_data",
                WriteNode::new("User", "create", json!({})),
                |a| a.writes(1),
            )
            .step(
                "update_with_null_data",
                WriteNode::new("User", "update", json!({ "where": { "id": 1 }, "data": null })),
                |a| a.writes(1),
            )
            .step(
                "upsert_without_update",
                WriteNode::new("User", "upsert", json!({ "create": { "email": "test" } })),
                |a| a.fragment(FragmentSource::Create).stored("User", 2),
            )
    }

    #[test]
    fn test_absent_fields_yield_nothing_to_validate() {
        scenario().run().unwrap();
    }
}

mod pattern_matching {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("pattern_matching").step(
            "any_user_action",
            WriteNode::new("User", "update", json!({ "data": { "email": "nope" } })),
            |a| a.error_pattern(r"^User\.(create|update): email must include @$"),
        )
    }

    #[test]
    fn test_error_message_shape() {
        scenario().run().unwrap();
    }
}

#[test]
fn test_validation_is_idempotent() {
    // GIVEN the same valid and invalid mutations
    let dispatcher = fixtures::dispatcher();
    let good = json!({ "data": { "email": "a@b.com" } });
    let bad = json!({ "data": { "email": "test" } });

    // WHEN each is validated repeatedly
    // THEN every run agrees
    for _ in 0..3 {
        assert!(dispatcher
            .validate(&MutationDescription::root("User", ActionKind::Create, &good))
            .is_ok());
        let err = dispatcher
            .validate(&MutationDescription::root("User", ActionKind::Create, &bad))
            .unwrap_err();
        assert_eq!(err.to_string(), "User.create: email must include @");
    }
}

#[test]
fn test_dispatcher_setup_error_fails_scenario() {
    let result = Scenario::new("bad_setup")
        .configure(Dispatcher::builder().validator("", fixtures::user_email))
        .step(
            "never_runs",
            WriteNode::new("User", "create", json!({ "data": {} })),
            |a| a.writes(1),
        )
        .run();

    assert!(matches!(result, Err(HarnessError::Setup { .. })));
}
