//! End-to-end tests: solve a record's fields and emit them by group.

use geneve::prelude::*;
use geneve::{console, Group};
use geneve_test::path;

fn record_config() -> GeneratorConfig {
    GeneratorConfig::from_toml_str(
        r#"
        environment_mode = "reproducible"
        random_seed = 11
        random_attempts = 2
    "#,
    )
    .unwrap()
}

#[test]
fn test_record_pass_groups_fields() {
    console::init();
    let registry = SolverRegistry::with_builtin_solvers();
    let config = record_config();
    config.validate().unwrap();
    let mut record = RecordScope::new(&registry, &config);

    let plan: [(&str, Vec<Constraint>); 4] = [
        ("a.b.x", vec![Constraint::eq(true)]),
        ("a.b.y", vec![Constraint::ne(true)]),
        ("a.c.z", vec![]),
        ("d", vec![]),
    ];
    for (field, constraints) in &plan {
        record
            .solve_field(&path(field), FieldKind::Boolean, constraints)
            .unwrap();
    }
    assert_eq!(record.left_attempts(), 0);

    let fields = record.into_fields();
    let groups: Vec<Group<'_, Value>> = fields.groups().collect();
    let names: Vec<String> = groups.iter().map(|g| g.path.to_string()).collect();
    assert_eq!(names, vec!["a.b", "a.c", "a", ""]);

    assert_eq!(groups[0].fields.get("a.b.x"), Some(&&Value::Bool(true)));
    assert_eq!(groups[0].fields.get("a.b.y"), Some(&&Value::Bool(false)));
    assert!(groups[1].fields.contains_key("a.c.z"));
    assert!(groups[2].fields.is_empty());
    assert!(groups[3].fields.contains_key("d"));
}

#[test]
fn test_exhausted_budget_leaves_fields_unset() {
    let registry = SolverRegistry::with_builtin_solvers();
    let config = record_config().with_random_attempts(0);
    let mut record = RecordScope::new(&registry, &config);

    assert_eq!(
        record.solve_field(&path("a.b"), FieldKind::Boolean, &[]).unwrap(),
        None
    );
    assert!(record.fields().is_empty());
    assert_eq!(record.fields().groups().count(), 0);
}

#[test]
fn test_conflicting_field_is_reported() {
    let registry = SolverRegistry::with_builtin_solvers();
    let mut record = RecordScope::new(&registry, &record_config());

    let err = record
        .solve_field(
            &path("host.containerized"),
            FieldKind::Boolean,
            &[Constraint::ne(false), Constraint::eq(false)],
        )
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsolvable constraints: host.containerized (==): is already true, cannot set to false"
    );
    assert!(record.fields().is_empty());
}

#[test]
fn test_stored_fields_can_be_removed() {
    let mut fields = geneve_test::nested_fields();
    assert!(fields.remove(&path("nope.nothing")).is_none());
    assert_eq!(fields.len(), 4);

    fields.remove(&path("a.c.z"));
    let keys: Vec<String> = fields.keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["a.b.x", "a.b.y", "d"]);
}
