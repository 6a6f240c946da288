use ods2sql::config::parse_composite;
use ods2sql::index::{plan_indexes, resolve_primary_key, IndexSpec};
use ods2sql::{Column, ConvertOptions, Dialect, TableBlock, Warning, WarningKind};
use pretty_assertions::assert_eq;

fn block(name: &str, columns: &[(&str, &str)]) -> TableBlock {
    TableBlock {
        sheet: "Sheet1".into(),
        name: name.into(),
        columns: columns.iter().map(|(n, t)| Column::new(*n, *t)).collect(),
        rows: Vec::new(),
    }
}

fn people() -> TableBlock {
    block(
        "people",
        &[
            ("id", "INT"),
            ("first_name", "TEXT"),
            ("last_name", "VARCHAR(40)"),
            ("age", "INT"),
        ],
    )
}

fn plan(
    block: &TableBlock,
    options: &ConvertOptions,
) -> (Vec<IndexSpec>, Vec<Warning>) {
    let mut warnings = Vec::new();
    let pk = resolve_primary_key(block, &options.primary_key, &mut warnings);
    let plan = plan_indexes(
        block,
        &pk,
        options,
        options.dialect.profile(),
        &mut warnings,
    );
    (plan, warnings)
}

fn names(plan: &[IndexSpec]) -> Vec<&str> {
    plan.iter().map(|i| i.name.as_str()).collect()
}

#[test]
fn test_one_index_per_column_by_default() {
    let (plan, warnings) = plan(&people(), &ConvertOptions::default());
    assert!(warnings.is_empty());
    assert_eq!(
        names(&plan),
        vec![
            "ix_people_id",
            "ix_people_first_name",
            "ix_people_last_name",
            "ix_people_age"
        ]
    );
}

#[test]
fn test_primary_key_columns_not_indexed() {
    let options = ConvertOptions {
        primary_key: vec!["ID".into()],
        composite_indexes: vec![parse_composite("id")],
        ..ConvertOptions::default()
    };
    let (plan, warnings) = plan(&people(), &options);
    assert!(!plan.iter().any(|i| i.columns == vec!["id".to_string()]));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::RedundantIndex);
    assert_eq!(
        warnings[0].message,
        "Table 'people': index on (id) duplicates the PRIMARY KEY; skipped."
    );
}

#[test]
fn test_composite_primary_key_is_order_insensitive() {
    let options = ConvertOptions {
        primary_key: vec!["first_name".into(), "last_name".into()],
        composite_indexes: vec![
            parse_composite("last_name+first_name"),
            parse_composite("last_name+age"),
        ],
        ..ConvertOptions::default()
    };
    let (plan, warnings) = plan(&people(), &options);
    assert_eq!(
        names(&plan),
        vec!["ix_people_id", "ix_people_age", "ix_people_last_name_age"]
    );
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::RedundantIndex);
}

#[test]
fn test_mysql_skips_text_columns() {
    let options = ConvertOptions {
        composite_indexes: vec![parse_composite("first_name+age")],
        ..ConvertOptions::new(Dialect::MySql)
    };
    let (plan, warnings) = plan(&people(), &options);
    assert_eq!(
        names(&plan),
        vec!["ix_people_id", "ix_people_last_name", "ix_people_age"]
    );
    let messages: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Table 'people': skipping mysql index on TEXT/BLOB column: first_name",
            "Table 'people': skipping mysql index on TEXT/BLOB columns: first_name",
        ]
    );
    assert!(warnings
        .iter()
        .all(|w| w.kind == WarningKind::DialectConstraintSkip));
}

#[test]
fn test_postgres_indexes_text_columns() {
    let (plan, warnings) = plan(&people(), &ConvertOptions::new(Dialect::Postgres));
    assert_eq!(plan.len(), 4);
    assert!(warnings.is_empty());
}

#[test]
fn test_index_columns_restrict_and_report_unknown() {
    let options = ConvertOptions {
        index_columns: vec!["AGE".into(), "nope".into(), "age".into()],
        composite_indexes: vec![parse_composite("age+ghost")],
        ..ConvertOptions::default()
    };
    let (plan, warnings) = plan(&people(), &options);
    // The composite shrinks to (age), which already exists
    assert_eq!(names(&plan), vec!["ix_people_age"]);
    assert_eq!(plan[0].columns, vec!["age".to_string()]);

    let messages: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Table 'people': unknown columns for indexing: nope",
            "Table 'people': unknown columns in index 'age+ghost': ghost",
        ]
    );
    assert!(warnings.iter().all(|w| w.kind == WarningKind::UnknownColumn));
}

#[test]
fn test_unknown_primary_key_columns_dropped() {
    let mut warnings = Vec::new();
    let pk = resolve_primary_key(
        &people(),
        &["id".into(), "missing".into(), "Id".into()],
        &mut warnings,
    );
    assert_eq!(pk, vec!["id".to_string()]);
    assert_eq!(
        warnings[0].message,
        "Table 'people': unknown PRIMARY KEY columns: missing"
    );
}

#[test]
fn test_no_indices_disables_composites() {
    let options = ConvertOptions {
        default_indices: false,
        composite_indexes: vec![parse_composite("first_name+age")],
        ..ConvertOptions::default()
    };
    let (plan, warnings) = plan(&people(), &options);
    assert!(plan.is_empty());
    assert!(warnings.is_empty());
}

#[test]
fn test_long_names_fit_dialect_limit() {
    let long_table = "t".repeat(50);
    let long_column = "c".repeat(50);
    let table = block(&long_table, &[(long_column.as_str(), "INT")]);

    for dialect in [Dialect::Sqlite, Dialect::Postgres, Dialect::MySql] {
        let (plan, _) = plan(&table, &ConvertOptions::new(dialect));
        let limit = dialect.profile().max_identifier_length;
        assert_eq!(plan[0].name.chars().count(), limit, "{dialect:?}");
    }

    let (first, _) = plan(&table, &ConvertOptions::new(Dialect::Postgres));
    let (second, _) = plan(&table, &ConvertOptions::new(Dialect::Postgres));
    assert_eq!(first, second);
}

#[test]
fn test_names_are_slugged() {
    let table = block("Order Lines", &[("Unit Price ($)", "REAL")]);
    let (plan, _) = plan(&table, &ConvertOptions::default());
    assert_eq!(plan[0].name, "ix_order_lines_unit_price");
    assert_eq!(plan[0].columns, vec!["Unit Price ($)".to_string()]);
}
