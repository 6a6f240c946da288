#[path = "../common/mod.rs"]
mod common;

use std::io::Cursor;

use common::*;
use ods2sql::ods::read_workbook_from;
use ods2sql::sheet::ValueType;
use ods2sql::{convert_file, read_workbook, ConvertOptions, Error, OdsError};
use pretty_assertions::assert_eq;

#[test]
fn test_read_from_disk() {
    let file = write_ods(&people_ods());
    let workbook = read_workbook(file.path()).unwrap();

    assert_eq!(workbook.sheets.len(), 1);
    assert_eq!(workbook.sheets[0].name, "Sheet1");
    assert_eq!(workbook.sheets[0].rows.len(), 5);

    let id = &workbook.sheets[0].rows[3].cells[1].cell;
    assert_eq!(id.value_type, ValueType::Float);
    assert_eq!(id.raw_value, "1");
}

#[test]
fn test_convert_file() {
    let file = write_ods(&people_ods());
    let conversion = convert_file(file.path(), &ConvertOptions::default()).unwrap();
    assert_eq!(conversion.tables.len(), 1);
    assert_eq!(conversion.statements.len(), 6);
}

#[test]
fn test_missing_file() {
    let err = read_workbook("/definitely/not/here.ods").unwrap_err();
    assert!(matches!(err, OdsError::NotFound(_)));
}

#[test]
fn test_not_a_zip() {
    let err = read_workbook_from(Cursor::new(b"plain text, not a zip".to_vec())).unwrap_err();
    assert!(matches!(err, OdsError::Zip(_)));
}

#[test]
fn test_missing_content_part() {
    let bytes = ods_bytes(&[("styles.xml", "<x/>")]);
    let err = read_workbook_from(Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, OdsError::MissingContent));
    assert_eq!(
        err.to_string(),
        "content.xml not found in .ods (is this a valid LibreOffice Calc file?)"
    );

    let file = write_ods(&ods_bytes(&[("meta.xml", "<x/>")]));
    let err = convert_file(file.path(), &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Ods(OdsError::MissingContent)));
    assert!(err.to_string().starts_with("Failed to read document: "));
}

#[test]
fn test_malformed_content() {
    let bytes = ods_with_content("<office:document-content><unclosed>");
    let err = read_workbook_from(Cursor::new(bytes)).unwrap_err();
    match err {
        OdsError::Xml { part, .. } => assert_eq!(part, "content.xml"),
        other => panic!("expected XML error, got {other:?}"),
    }
}

#[test]
fn test_styles_part_contributes_percent_styles() {
    let styles = r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-styles
    xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0"
    xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0"
    xmlns:number="urn:oasis:names:tc:opendocument:xmlns:datastyle:1.0">
  <office:styles>
    <number:percentage-style style:name="N90" number:language="fr">
      <number:number number:decimal-places="3"/>
    </number:percentage-style>
    <style:style style:name="named_pct" style:family="table-cell" style:data-style-name="N90"/>
  </office:styles>
</office:document-styles>"#;
    let content = content_xml(&[sheet(
        "S",
        &[
            row(&[s("sqltable"), s("t")]),
            row(&[s("sqlcolumn"), s("p")]),
            row(&[empty(), pct("0.123456", "named_pct")]),
        ],
    )]);
    let bytes = ods_bytes(&[("content.xml", &content), ("styles.xml", styles)]);

    let workbook = read_workbook_from(Cursor::new(bytes)).unwrap();
    let style = workbook.styles.percent_style("named_pct").unwrap();
    assert_eq!(style.decimal_places, Some(3));
    assert_eq!(style.decimal_separator, ',');

    let conversion = ods2sql::convert_workbook(&workbook, &ConvertOptions::default()).unwrap();
    assert!(conversion
        .statements
        .last()
        .unwrap()
        .ends_with("VALUES ('12,346\u{a0}%');"));
}
