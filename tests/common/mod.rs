//! Shared fixtures: build `.ods` documents in memory and validate SQL.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use ods2sql::Dialect;
use sqlparser::dialect::{MySqlDialect, PostgreSqlDialect, SQLiteDialect};
use sqlparser::parser::Parser;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const NAMESPACES: &str = r#"xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0"
    xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0"
    xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0"
    xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0"
    xmlns:number="urn:oasis:names:tc:opendocument:xmlns:datastyle:1.0""#;

/// Percentage style `pct1` (one decimal place, '.') and `pct_de` (default
/// places, ',').
const AUTOMATIC_STYLES: &str = r#"<office:automatic-styles>
    <number:percentage-style style:name="N10">
      <number:number number:decimal-places="1" number:min-integer-digits="1"/>
      <number:text>%</number:text>
    </number:percentage-style>
    <number:percentage-style style:name="N11" number:language="de">
      <number:number number:min-integer-digits="1"/>
      <number:text>%</number:text>
    </number:percentage-style>
    <style:style style:name="pct1" style:family="table-cell" style:data-style-name="N10"/>
    <style:style style:name="pct_de" style:family="table-cell" style:data-style-name="N11"/>
  </office:automatic-styles>"#;

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ============================================================================
// Cells
// ============================================================================

/// A string cell.
pub fn s(text: &str) -> String {
    format!(
        r#"<table:table-cell office:value-type="string"><text:p>{}</text:p></table:table-cell>"#,
        escape(text)
    )
}

/// A float cell displayed as stored.
pub fn f(value: &str) -> String {
    format!(
        r#"<table:table-cell office:value-type="float" office:value="{0}"><text:p>{0}</text:p></table:table-cell>"#,
        value
    )
}

/// A float cell with separate display text.
pub fn f_shown(value: &str, shown: &str) -> String {
    format!(
        r#"<table:table-cell office:value-type="float" office:value="{}"><text:p>{}</text:p></table:table-cell>"#,
        value,
        escape(shown)
    )
}

/// A boolean cell.
pub fn b(value: bool) -> String {
    format!(
        r#"<table:table-cell office:value-type="boolean" office:boolean-value="{}"><text:p>{}</text:p></table:table-cell>"#,
        value,
        if value { "TRUE" } else { "FALSE" }
    )
}

/// A percentage cell without display text, using a cell style.
pub fn pct(value: &str, style: &str) -> String {
    format!(
        r#"<table:table-cell table:style-name="{}" office:value-type="percentage" office:value="{}"/>"#,
        style, value
    )
}

/// A date cell.
pub fn date(value: &str) -> String {
    format!(
        r#"<table:table-cell office:value-type="date" office:date-value="{0}"><text:p>{0}</text:p></table:table-cell>"#,
        value
    )
}

/// A time cell stored as an ISO duration.
pub fn time(duration: &str, shown: &str) -> String {
    format!(
        r#"<table:table-cell office:value-type="time" office:time-value="{}"><text:p>{}</text:p></table:table-cell>"#,
        duration, shown
    )
}

pub fn empty() -> String {
    "<table:table-cell/>".to_string()
}

/// `n` empty cells encoded as one repeated cell.
pub fn empties(n: usize) -> String {
    format!(r#"<table:table-cell table:number-columns-repeated="{}"/>"#, n)
}

pub fn covered() -> String {
    "<table:covered-table-cell/>".to_string()
}

// ============================================================================
// Rows, sheets, documents
// ============================================================================

pub fn row(cells: &[String]) -> String {
    format!("<table:table-row>{}</table:table-row>", cells.concat())
}

/// `n` blank rows encoded as one repeated row.
pub fn blank_rows(n: usize) -> String {
    format!(
        r#"<table:table-row table:number-rows-repeated="{}"><table:table-cell table:number-columns-repeated="1024"/></table:table-row>"#,
        n
    )
}

pub fn sheet(name: &str, rows: &[String]) -> String {
    format!(
        r#"<table:table table:name="{}">{}</table:table>"#,
        escape(name),
        rows.concat()
    )
}

/// A complete `content.xml`.
pub fn content_xml(sheets: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content {NAMESPACES}>
  {AUTOMATIC_STYLES}
  <office:body><office:spreadsheet>{}</office:spreadsheet></office:body>
</office:document-content>"#,
        sheets.concat()
    )
}

/// Zip `parts` into an `.ods` archive, `mimetype` first and stored.
pub fn ods_bytes(parts: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("mimetype", stored).unwrap();
    zip.write_all(b"application/vnd.oasis.opendocument.spreadsheet")
        .unwrap();
    for (name, body) in parts {
        zip.start_file(*name, deflated).unwrap();
        zip.write_all(body.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// An `.ods` archive holding `content` as its `content.xml`.
pub fn ods_with_content(content: &str) -> Vec<u8> {
    ods_bytes(&[("content.xml", content)])
}

/// Write an `.ods` archive to a temporary file.
pub fn write_ods(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".ods")
        .tempfile()
        .unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

/// The `people` sheet used across tests.
pub fn people_sheet() -> String {
    sheet(
        "Sheet1",
        &[
            row(&[s("sqltable"), s("people")]),
            row(&[s("sqlcolumn"), s("id"), s("name"), s("is_active")]),
            row(&[s("sqltype"), s("INT"), s("TEXT"), s("BOOLEAN")]),
            row(&[empty(), f("1"), s("Alice"), b(true)]),
            row(&[empty(), f("2"), s("Bob"), b(false)]),
        ],
    )
}

pub fn people_ods() -> Vec<u8> {
    ods_with_content(&content_xml(&[people_sheet()]))
}

// ============================================================================
// SQL validation
// ============================================================================

/// Parse `sql` with sqlparser for `dialect`.
pub fn validate_sql(sql: &str, dialect: Dialect) -> Result<(), String> {
    let parser_dialect: Box<dyn sqlparser::dialect::Dialect> = match dialect {
        Dialect::Sqlite => Box::new(SQLiteDialect {}),
        Dialect::Postgres => Box::new(PostgreSqlDialect {}),
        Dialect::MySql => Box::new(MySqlDialect {}),
    };
    Parser::parse_sql(&*parser_dialect, sql)
        .map(|_| ())
        .map_err(|e| format!("Invalid SQL for {:?}: {}\nSQL: {}", dialect, e, sql))
}
