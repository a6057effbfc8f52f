//! Drift between stored keys and the normalizer.

use sift::testing::{post_record, user_record};
use sift::{build::reindex, verify_dataset, Dataset, EntityKind};

#[test]
fn test_fresh_export_drifts_until_indexed() {
    let mut dataset = Dataset {
        posts: vec![post_record("p1", "Güneş"), post_record("p2", "Ay")],
        users: vec![user_record("u1", "İlkay")],
    };

    let report = verify_dataset(&dataset);
    assert_eq!(report.drifts.len(), 3, "missing keys are drift");

    let stats = reindex(&mut dataset);
    assert_eq!(stats.rewritten, 3);

    let report = verify_dataset(&dataset);
    assert!(report.is_clean(), "{report}");
    assert_eq!(reindex(&mut dataset).rewritten, 0);
}

#[test]
fn test_renamed_user_with_old_key_is_reported() {
    let mut dataset = Dataset {
        posts: vec![],
        users: vec![user_record("u1", "ayse")],
    };
    reindex(&mut dataset);
    dataset.users[0].username = Some("Ayşegül".to_string());

    let report = verify_dataset(&dataset);
    assert_eq!(report.drifted(EntityKind::User), 1);
    let drift = &report.drifts[0];
    assert_eq!(drift.id, "u1");
    assert_eq!(drift.stored.as_deref(), Some("ayse"));
    assert_eq!(drift.expected, "aysegul");
    assert!(drift.to_string().starts_with("user 'u1'"));
}
