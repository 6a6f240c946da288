//! `content.xml` / `styles.xml` parsing.

use roxmltree::{Document, Node};

use super::OdsError;
use crate::sheet::{
    separator_for_language, Cell, PercentStyle, RawCell, RawRow, Sheet, StyleTable, ValueType,
    Workbook,
};

const OFFICE_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:office:1.0";
const TABLE_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:table:1.0";
const TEXT_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:text:1.0";
const STYLE_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:style:1.0";
const NUMBER_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:datastyle:1.0";

/// Elements that group rows without being rows themselves.
const ROW_GROUPS: &[&str] = &["table-header-rows", "table-row-group", "table-rows"];

fn parse_document<'x>(part: &str, xml: &'x str) -> Result<Document<'x>, OdsError> {
    Document::parse(xml).map_err(|source| OdsError::Xml {
        part: part.to_string(),
        source,
    })
}

/// Parse `content.xml`: every `table:table` becomes a sheet, and automatic
/// styles feed the style table.
pub fn parse_content(xml: &str) -> Result<Workbook, OdsError> {
    let doc = parse_document(super::CONTENT_PART, xml)?;

    let sheets = doc
        .descendants()
        .filter(|n| n.has_tag_name((TABLE_NS, "table")))
        .map(parse_table)
        .collect();

    Ok(Workbook {
        sheets,
        styles: collect_styles(&doc),
    })
}

/// Parse a document part that only contributes styles.
pub fn parse_styles(part: &str, xml: &str) -> Result<StyleTable, OdsError> {
    let doc = parse_document(part, xml)?;
    Ok(collect_styles(&doc))
}

fn parse_table(table: Node) -> Sheet {
    let name = table
        .attribute((TABLE_NS, "name"))
        .unwrap_or("Sheet")
        .to_string();
    let mut rows = Vec::new();
    collect_rows(table, &mut rows);
    Sheet { name, rows }
}

fn collect_rows(parent: Node, rows: &mut Vec<RawRow>) {
    for child in parent.children().filter(Node::is_element) {
        let tag = child.tag_name();
        if tag.namespace() != Some(TABLE_NS) {
            continue;
        }
        if tag.name() == "table-row" {
            rows.push(parse_row(child));
        } else if ROW_GROUPS.contains(&tag.name()) {
            collect_rows(child, rows);
        }
    }
}

fn repeat_attr(node: Node, name: &str) -> usize {
    node.attribute((TABLE_NS, name))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .max(1)
}

fn parse_row(row: Node) -> RawRow {
    let cells: Vec<RawCell> = row
        .children()
        .filter(|n| n.is_element() && n.tag_name().namespace() == Some(TABLE_NS))
        .filter_map(|n| {
            let cell = match n.tag_name().name() {
                "table-cell" => parse_cell(n),
                "covered-table-cell" => Cell::covered(),
                _ => return None,
            };
            Some(RawCell::new(cell).repeated(repeat_attr(n, "number-columns-repeated")))
        })
        .collect();
    RawRow::new(cells).repeated(repeat_attr(row, "number-rows-repeated"))
}

fn parse_cell(node: Node) -> Cell {
    let text = cell_text(node);
    let style_id = node.attribute((TABLE_NS, "style-name")).map(str::to_string);
    let display = if text.is_empty() {
        None
    } else {
        Some(text.clone())
    };

    let office = |name: &str| node.attribute((OFFICE_NS, name)).map(str::to_string);

    let (value_type, raw_value) = match node.attribute((OFFICE_NS, "value-type")) {
        None if text.is_empty() => (ValueType::Empty, String::new()),
        None => (ValueType::String, text),
        Some(attr) => {
            let value_type = ValueType::from_office(attr);
            let raw = match value_type {
                ValueType::String => office("string-value").unwrap_or(text),
                ValueType::Float | ValueType::Currency | ValueType::Percentage => {
                    office("value").unwrap_or(text)
                }
                ValueType::Boolean => office("boolean-value").unwrap_or(text),
                ValueType::Date => office("date-value").unwrap_or(text),
                ValueType::Time => office("time-value").unwrap_or(text),
                _ => text,
            };
            (value_type, raw)
        }
    };

    Cell {
        value_type,
        raw_value,
        display_text: display,
        style_id,
    }
}

/// Join the cell's `text:p` paragraphs with newlines and trim the result.
fn cell_text(cell: Node) -> String {
    let paragraphs: Vec<String> = cell
        .children()
        .filter(|n| n.has_tag_name((TEXT_NS, "p")))
        .map(|p| {
            let mut out = String::new();
            inline_text(p, &mut out);
            out
        })
        .collect();
    paragraphs.join("\n").trim().to_string()
}

fn inline_text(node: Node, out: &mut String) {
    for child in node.children() {
        if child.is_text() {
            out.push_str(child.text().unwrap_or(""));
            continue;
        }
        if !child.is_element() {
            continue;
        }
        if child.tag_name().namespace() == Some(TEXT_NS) {
            match child.tag_name().name() {
                "s" => {
                    let n = child
                        .attribute((TEXT_NS, "c"))
                        .and_then(|c| c.parse::<usize>().ok())
                        .unwrap_or(1);
                    out.extend(std::iter::repeat(' ').take(n));
                    continue;
                }
                "tab" => {
                    out.push('\t');
                    continue;
                }
                "line-break" => {
                    out.push('\n');
                    continue;
                }
                _ => {}
            }
        }
        inline_text(child, out);
    }
}

fn collect_styles(doc: &Document) -> StyleTable {
    let mut table = StyleTable::new();
    for node in doc.descendants().filter(Node::is_element) {
        if node.has_tag_name((STYLE_NS, "style"))
            && node.attribute((STYLE_NS, "family")) == Some("table-cell")
        {
            if let (Some(name), Some(data)) = (
                node.attribute((STYLE_NS, "name")),
                node.attribute((STYLE_NS, "data-style-name")),
            ) {
                table.insert_cell_style(name, data);
            }
        } else if node.has_tag_name((NUMBER_NS, "percentage-style")) {
            if let Some(name) = node.attribute((STYLE_NS, "name")) {
                table.insert_percent_style(name, percent_style(node));
            }
        }
    }
    table
}

fn percent_style(node: Node) -> PercentStyle {
    let places = node
        .children()
        .find(|n| n.has_tag_name((NUMBER_NS, "number")))
        .and_then(|n| n.attribute((NUMBER_NS, "decimal-places")))
        .or_else(|| node.attribute((NUMBER_NS, "decimal-places")))
        .and_then(|v| v.trim().parse::<u32>().ok());
    let separator = node
        .attribute((NUMBER_NS, "language"))
        .map(separator_for_language)
        .unwrap_or('.');
    PercentStyle::new(places, separator)
}
