#[path = "../common/mod.rs"]
mod common;

use common::*;
use ods2sql::ods::parse_content;
use ods2sql::scan::{scan_workbook, Column};
use ods2sql::{Literal, SchemaViolation, TableBlock, Warning, WarningKind};
use pretty_assertions::assert_eq;

fn scan(sheets: &[String]) -> (Vec<TableBlock>, Vec<Warning>) {
    let workbook = parse_content(&content_xml(sheets)).unwrap();
    let mut warnings = Vec::new();
    let blocks = scan_workbook(&workbook, &mut warnings).unwrap();
    (blocks, warnings)
}

fn num(n: &str) -> Literal {
    Literal::Number(n.to_string())
}

fn text(s: &str) -> Literal {
    Literal::String(s.to_string())
}

#[test]
fn test_preamble_then_two_blocks() {
    let (blocks, warnings) = scan(&[sheet(
        "Orders",
        &[
            row(&[s("Quarterly export"), s("2024")]),
            blank_rows(2),
            row(&[s("sqltable"), s("Orders")]),
            row(&[s("comment"), s("entered by hand")]),
            row(&[s("sqlcolumn"), s("id"), s("customer")]),
            row(&[s("sqltype"), s("INT"), s("TEXT")]),
            row(&[empty(), f("1"), s("ACME")]),
            row(&[s("comment"), f("99"), s("hidden")]),
            blank_rows(40),
            row(&[empty(), f("2"), s("Globex")]),
            blank_rows(5),
            row(&[s("sqltable"), s("Items")]),
            row(&[s("columns"), s("order_id"), s("sku"), s("qty")]),
            row(&[s("types"), s("INT"), s("TEXT"), s("INT")]),
            row(&[empty(), f("1"), s("A-1"), f("3")]),
        ],
    )]);

    assert!(warnings.is_empty(), "{warnings:?}");
    assert_eq!(blocks.len(), 2);

    assert_eq!(blocks[0].sheet, "Orders");
    assert_eq!(blocks[0].name, "Orders");
    assert_eq!(
        blocks[0].columns,
        vec![Column::new("id", "INT"), Column::new("customer", "TEXT")]
    );
    assert_eq!(
        blocks[0].rows,
        vec![vec![num("1"), text("ACME")], vec![num("2"), text("Globex")]]
    );

    assert_eq!(blocks[1].name, "Items");
    assert_eq!(blocks[1].rows, vec![vec![num("1"), text("A-1"), num("3")]]);
}

#[test]
fn test_blocks_across_sheets_keep_document_order() {
    let first = sheet(
        "B",
        &[
            row(&[s("sqltable"), s("zeta")]),
            row(&[s("sqlcolumn"), s("x")]),
            row(&[empty(), s("1")]),
        ],
    );
    let second = sheet(
        "A",
        &[
            row(&[s("sqltable"), s("alpha")]),
            row(&[s("sqlcolumn"), s("y")]),
            row(&[empty(), s("2")]),
        ],
    );
    let (blocks, _) = scan(&[first, second]);
    let names: Vec<&str> = blocks.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha"]);
}

#[test]
fn test_missing_types_default_to_text() {
    let (blocks, _) = scan(&[sheet(
        "S",
        &[
            row(&[s("sqltable"), s("t")]),
            row(&[s("sqlcolumn"), s("a"), s("b")]),
            row(&[empty(), f("7"), s("x")]),
        ],
    )]);
    assert_eq!(
        blocks[0].columns,
        vec![Column::new("a", "TEXT"), Column::new("b", "TEXT")]
    );
    // Text columns keep what the cell shows
    assert_eq!(blocks[0].rows, vec![vec![text("7"), text("x")]]);
}

#[test]
fn test_header_gap_skips_position() {
    let (blocks, _) = scan(&[sheet(
        "S",
        &[
            row(&[s("sqltable"), s("t")]),
            row(&[s("sqlcolumn"), s("a"), empty(), s("c")]),
            row(&[s("sqltype"), s("INT"), s("IGNORED"), s("INT")]),
            row(&[empty(), f("1"), s("skip me"), f("3")]),
        ],
    )]);
    assert_eq!(
        blocks[0].columns,
        vec![Column::new("a", "INT"), Column::new("c", "INT")]
    );
    assert_eq!(blocks[0].rows, vec![vec![num("1"), num("3")]]);
}

#[test]
fn test_covered_and_short_rows_are_null() {
    let (blocks, _) = scan(&[sheet(
        "S",
        &[
            row(&[s("sqltable"), s("t")]),
            row(&[s("sqlcolumn"), s("a"), s("b"), s("c")]),
            row(&[s("sqltype"), s("TEXT"), s("TEXT"), s("INT")]),
            row(&[empty(), s("merged"), covered(), f("1")]),
            row(&[empty(), s("short")]),
        ],
    )]);
    assert_eq!(
        blocks[0].rows,
        vec![
            vec![text("merged"), Literal::Null, num("1")],
            vec![text("short"), Literal::Null, Literal::Null],
        ]
    );
}

#[test]
fn test_repeated_data_rows_expand() {
    let repeated = format!(
        r#"<table:table-row table:number-rows-repeated="3">{}{}</table:table-row>"#,
        empty(),
        s("same")
    );
    let (blocks, _) = scan(&[sheet(
        "S",
        &[
            row(&[s("sqltable"), s("t")]),
            row(&[s("sqlcolumn"), s("v")]),
            repeated,
        ],
    )]);
    assert_eq!(blocks[0].rows.len(), 3);
}

#[test]
fn test_display_text_versus_value() {
    let (blocks, _) = scan(&[sheet(
        "S",
        &[
            row(&[s("sqltable"), s("prices")]),
            row(&[s("sqlcolumn"), s("shown"), s("stored")]),
            row(&[s("sqltype"), s("TEXT"), s("REAL")]),
            row(&[empty(), f_shown("1234.5", "1.234,50 €"), f_shown("1234.5", "1.234,50 €")]),
            row(&[empty(), date("2024-03-01"), time("PT13H45M30S", "13:45:30")]),
        ],
    )]);
    assert_eq!(
        blocks[0].rows,
        vec![
            vec![text("1.234,50 €"), num("1234.5")],
            vec![text("2024-03-01"), text("13:45:30")],
        ]
    );
}

#[test]
fn test_duplicate_columns_abort() {
    let workbook = parse_content(&content_xml(&[sheet(
        "Data",
        &[
            row(&[s("sqltable"), s("t")]),
            row(&[s("sqlcolumn"), s("id"), s("ID"), s("name")]),
        ],
    )]))
    .unwrap();
    let mut warnings = Vec::new();
    let err = scan_workbook(&workbook, &mut warnings).unwrap_err();
    assert_eq!(
        err,
        SchemaViolation::DuplicateColumns {
            sheet: "Data".into(),
            table: "t".into(),
            names: vec!["id".into()],
        }
    );
    assert_eq!(
        err.to_string(),
        "Sheet 'Data', table 't': duplicate column names: id"
    );
}

#[test]
fn test_malformed_instrumentation_warns() {
    let (blocks, warnings) = scan(&[sheet(
        "S",
        &[
            row(&[s("sqltable")]),
            row(&[s("sqltable"), s("no_columns")]),
            row(&[empty(), s("orphan")]),
            row(&[s("sqltable"), s("ok")]),
            row(&[s("sqlcolumn"), s("v")]),
            row(&[s("note"), s("stray")]),
            row(&[empty(), s("kept")]),
        ],
    )]);

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].name, "ok");
    assert_eq!(blocks[0].rows, vec![vec![text("kept")]]);

    assert!(warnings
        .iter()
        .all(|w| w.kind == WarningKind::MalformedInstrumentation));
    let messages: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Sheet 'S': sqltable row missing table name; block ignored.",
            "Sheet 'S', table 'no_columns': data row before columns row; ignored.",
            "Sheet 'S', table 'no_columns': no columns row; block dropped.",
            "Sheet 'S', table 'ok': stray row starting with 'note' skipped.",
        ]
    );
}

#[test]
fn test_sheet_without_markers_yields_nothing() {
    let (blocks, warnings) = scan(&[sheet("Plain", &[row(&[s("hello"), s("world")])])]);
    assert!(blocks.is_empty());
    assert!(warnings.is_empty());
}
