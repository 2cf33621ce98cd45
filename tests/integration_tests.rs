//! Integration tests for risk-matrix
//!
//! These tests run whole flows through the public API: config loading,
//! seeding the matrix, mutating it and rendering the summary.

use risk_matrix::{
    config::{load_config_file, load_or_default, Validatable},
    model::{LevelFilter, RiskId, RiskLevel, ViewMode},
    OutputFormat, RiskMatrix, SummaryReporter, ViewConfig,
};
use std::io::Write as _;

fn six() -> RiskMatrix {
    RiskMatrix::from_entries([
        ("Risk 1", RiskLevel::High),
        ("Risk 2", RiskLevel::Medium),
        ("Risk 3", RiskLevel::Low),
        ("Risk 4", RiskLevel::High),
        ("Risk 5", RiskLevel::Medium),
        ("Risk 6", RiskLevel::Low),
    ])
}

fn sorted_ids(matrix: &RiskMatrix) -> Vec<u32> {
    matrix.derive().sorted.iter().map(|r| r.id.get()).collect()
}

// ============================================================================
// Derivation
// ============================================================================

mod derivation_tests {
    use super::*;

    #[test]
    fn test_reference_collection() {
        let matrix = six();
        let view = matrix.derive();
        assert_eq!(sorted_ids(&matrix), vec![1, 4, 2, 5, 3, 6]);
        assert_eq!(view.counts.as_array(), [2, 2, 2]);
        assert_eq!(view.greatest, RiskLevel::High);
    }

    #[test]
    fn test_medium_filter_keeps_original_order() {
        let mut matrix = six();
        matrix.set_filter(LevelFilter::Only(RiskLevel::Medium));
        assert_eq!(sorted_ids(&matrix), vec![2, 5]);
        let view = matrix.derive();
        assert_eq!(view.counts.as_array(), [0, 2, 0]);
        assert_eq!(view.greatest, RiskLevel::Medium);
    }

    #[test]
    fn test_greatest_follows_filter() {
        let mut matrix = six();
        matrix.set_filter(LevelFilter::Only(RiskLevel::Low));
        assert_eq!(matrix.derive().greatest, RiskLevel::Low);
    }

    #[test]
    fn test_empty_collection_defaults_to_high() {
        let view_matrix = RiskMatrix::new();
        let view = view_matrix.derive();
        assert!(view.is_empty());
        assert_eq!(view.counts.total(), 0);
        assert_eq!(view.greatest, RiskLevel::High);
    }
}

// ============================================================================
// Mutations
// ============================================================================

mod mutation_tests {
    use super::*;

    #[test]
    fn test_edit_session() {
        let mut matrix = six();

        matrix.set_level(RiskId(6), RiskLevel::High).expect("exists");
        assert_eq!(sorted_ids(&matrix), vec![1, 4, 6, 2, 5, 3]);

        let id = matrix.add_risk().expect("id available");
        assert_eq!(id, RiskId(7));
        matrix.set_description(id, "Vendor lock-in").expect("exists");
        assert_eq!(sorted_ids(&matrix).last(), Some(&7));

        let removed = matrix.remove_risk(RiskId(1)).expect("exists");
        assert_eq!(removed.description, "Risk 1");
        assert_eq!(matrix.len(), 6);
        assert_eq!(matrix.derive().counts.as_array(), [2, 2, 2]);
    }

    #[test]
    fn test_add_after_gap() {
        let mut matrix = six();
        matrix.remove_risk(RiskId(2)).expect("exists");
        matrix.remove_risk(RiskId(4)).expect("exists");
        assert_eq!(matrix.add_risk().ok(), Some(RiskId(7)));
    }

    #[test]
    fn test_missing_id_is_reported_and_ignored() {
        let mut matrix = six();
        let before = matrix.clone();
        let err = matrix.remove_risk(RiskId(99)).expect_err("absent");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "No risk with id #99");
        assert_eq!(matrix, before);
    }

    #[test]
    fn test_view_toggle_round_trip() {
        let mut matrix = six();
        assert_eq!(matrix.toggle_view(), ViewMode::Graph);
        assert_eq!(matrix.toggle_view(), ViewMode::Matrix);
    }
}

// ============================================================================
// Config to output
// ============================================================================

mod config_tests {
    use super::*;

    const CONFIG: &str = "\
seed:
  risks:
    - description: Data centre outage
      level: high
    - description: Supplier insolvency
      level: medium
    - description: Key staff leave
      level: medium
tui:
  initial_view: graph
  initial_filter: medium
";

    #[test]
    fn test_config_file_seeds_summary() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(CONFIG.as_bytes()).expect("write config");

        let app = load_config_file(file.path()).expect("valid config");
        assert!(app.is_valid());

        let config = ViewConfig {
            app,
            output: OutputFormat::Summary,
            no_color: true,
            ..ViewConfig::default()
        };
        let matrix = config.initial_matrix();
        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.view_mode(), ViewMode::Graph);

        let output = SummaryReporter::new().no_color().render(&matrix);
        assert!(output.contains("Greatest risk:  Medium"), "{output}");
        assert!(output.contains("(total 2)"), "{output}");
    }

    #[test]
    fn test_explicit_path_is_discovered() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("custom.yaml");
        std::fs::write(&path, CONFIG).expect("write config");

        let (config, loaded_from) = load_or_default(Some(path.as_path()));
        assert_eq!(loaded_from.as_deref(), Some(path.as_path()));
        assert_eq!(config.seed.risks.len(), 3);
    }

    #[test]
    fn test_bad_level_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "seed:\n  risks:\n    - level: extreme\n").expect("write config");

        assert!(load_config_file(&path).is_err());
        let (config, _) = load_or_default(Some(path.as_path()));
        assert_eq!(config.seed.risks.len(), 6);
    }
}
