#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::models::{
        summary::percent_complete, Group, PlanState, Snapshot, Status, Unit, Workplan,
    };

    fn create_test_group(statuses: &[Status]) -> Group {
        Group {
            goal: "Backend".to_string(),
            status: Status::NotStarted,
            units: statuses
                .iter()
                .enumerate()
                .map(|(index, &status)| Unit {
                    status,
                    ..Unit::new(format!("Unit {index}"), None)
                })
                .collect(),
            developer_note: None,
            needs_more_thoughts: None,
        }
    }

    fn create_test_plan() -> Workplan {
        Workplan {
            goal: "Add login".to_string(),
            groups: vec![
                Group {
                    status: Status::Completed,
                    ..create_test_group(&[Status::Completed, Status::Completed])
                },
                Group {
                    goal: "Frontend".to_string(),
                    developer_note: Some("Match the existing form styles".to_string()),
                    ..create_test_group(&[Status::InProgress, Status::NotStarted])
                },
            ],
            needs_more_thoughts: Some(true),
        }
    }

    #[test]
    fn test_status_serializes_snake_case() {
        for status in Status::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(status.to_string(), status.as_str());
        }
    }

    #[test]
    fn test_status_accepts_legacy_spelling() {
        let status: Status = serde_json::from_str("\"needsRefinment\"").unwrap();
        assert_eq!(status, Status::NeedsRefinement);
        assert_eq!("needs-refinement".parse::<Status>(), Ok(Status::NeedsRefinement));
        assert_eq!("In_Progress".parse::<Status>(), Ok(Status::InProgress));
        assert!("done".parse::<Status>().is_err());
    }

    #[test]
    fn test_plan_counters() {
        let plan = create_test_plan();
        assert_eq!(plan.unit_count(), 4);
        assert_eq!(plan.count_units(Status::Completed), 2);
        assert_eq!(plan.count_units(Status::InProgress), 1);
        assert_eq!(plan.completed_groups(), 1);
    }

    #[test]
    fn test_percent_complete_rounds() {
        assert_eq!(percent_complete(0, 0), 0);
        assert_eq!(percent_complete(1, 3), 33);
        assert_eq!(percent_complete(2, 3), 67);
        assert_eq!(percent_complete(3, 3), 100);
    }

    #[test]
    fn test_plan_serializes_camel_case() {
        let json = serde_json::to_value(create_test_plan()).unwrap();
        assert_eq!(json["needsMoreThoughts"], true);
        assert_eq!(json["groups"][1]["status"], "not_started");
        assert_eq!(
            json["groups"][1]["developerNote"],
            "Match the existing form styles"
        );
        assert_eq!(json["groups"][1]["units"][0]["status"], "in_progress");
    }

    #[test]
    fn test_snapshot_round_trip_preserves_plan() {
        let snapshot = Snapshot::new(
            PlanState::from(create_test_plan()),
            Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
        );
        let json = serde_json::to_string_pretty(&snapshot).unwrap();
        let restored: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_snapshot_defaults_missing_fields() {
        let before = Timestamp::now();
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.plan.is_empty());
        assert!(snapshot.last_updated >= before);
        assert!(snapshot.schema_version.is_empty());
    }

    #[test]
    fn test_plan_display() {
        let output = create_test_plan().to_string();
        assert!(output.starts_with("# Add login\n"));
        assert!(output.contains("> This plan may need further refinement."));
        assert!(output.contains("## 0. Backend (✓ Completed)"));
        assert!(output.contains("## 1. Frontend (○ Not Started)"));
        assert!(output.contains("Match the existing form styles"));
        assert!(output.contains("- 0. Unit 0 (➤ In Progress)"));
    }

    #[test]
    fn test_unit_display_includes_note() {
        let unit = Unit::new("Add endpoint", Some("use the session store".to_string()));
        assert_eq!(
            unit.to_string(),
            "Add endpoint (○ Not Started) - use the session store"
        );
    }
}
