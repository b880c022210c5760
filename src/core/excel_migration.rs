//! Moves `excel-export.service.ts` from the `xlsx` package to `exceljs`.
//!
//! exceljs serializes asynchronously, so every export method that returned a
//! `Buffer` now returns `Promise<Buffer>` and the `export*` ones are marked
//! `async`. The patterns assume the layout of that one service file.

use crate::core::rules::{RewriteRule, RuleSet};
use crate::utils::error::Result;
use regex::Captures;

pub const RULE_SET_NAME: &str = "excel-migration";

pub const DEFAULT_TARGET: &str = "src/modules/reports/services/excel-export.service.ts";

fn promise_unless_async(caps: &Captures<'_>) -> String {
    let whole = &caps[0];
    if whole.contains("async") {
        whole.to_string()
    } else {
        whole.replace(": Buffer {", ": Promise<Buffer> {")
    }
}

// The sheet variable must be the one appended to the workbook.
fn worksheet_from_rows(caps: &Captures<'_>) -> String {
    let (sheet, data, appended, name) = (&caps[1], &caps[2], &caps[3], &caps[4]);
    if sheet != appended {
        return caps[0].to_string();
    }
    format!("const {sheet} = workbook.addWorksheet('{name}');\n    {sheet}.addRows({data});")
}

pub fn migration_rules() -> Result<RuleSet> {
    let rules = vec![
        RewriteRule::template(
            "export-methods-return-promise",
            r"(\s+export\w+\([^)]+\)): Buffer \{",
            "${1}: Promise<Buffer> {",
        )?,
        RewriteRule::computed(
            "methods-return-promise",
            r"(\s+\w+\([^)]+\)): Buffer \{",
            promise_unless_async,
        )?,
        RewriteRule::template(
            "export-methods-async",
            r"(\s+)(export\w+\([^)]+\): Promise<Buffer> \{)",
            "${1}async ${2}",
        )?,
        RewriteRule::literal(
            "workbook-declaration",
            "const workbook = XLSX.utils.book_new();",
            "const workbook = new ExcelJS.Workbook();",
        )?,
        RewriteRule::computed(
            "sheet-from-array",
            r#"const (\w+) = XLSX\.utils\.aoa_to_sheet\((\w+)\);\s+XLSX\.utils\.book_append_sheet\(workbook, (\w+), ['"]([^'"]+)['"]\);"#,
            worksheet_from_rows,
        )?,
        RewriteRule::template(
            "write-buffer",
            r#"return XLSX\.write\(workbook, \{ type: ['"]buffer['"], bookType: ['"]xlsx['"] \}\);"#,
            "return await workbook.xlsx.writeBuffer() as Buffer;",
        )?,
    ];

    Ok(RuleSet::new(RULE_SET_NAME, rules))
}

pub fn migrate_content(text: &str) -> Result<String> {
    Ok(migration_rules()?.apply(text))
}
