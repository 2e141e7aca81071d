use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Style tables in cascade order. Later tables win on equal specificity.
const THEME_TABLES: [&str; 4] = ["global", "app_bar", "modal", "select"];

#[derive(Debug, Deserialize)]
struct StyleTable {
    schema_version: u32,
    table: String,
    #[serde(default, rename = "rule")]
    rules: Vec<StyleRule>,
}

#[derive(Debug, Deserialize)]
struct StyleRule {
    selector: String,
    declarations: Vec<String>,
}

fn theme_path(root: &Path, name: &str) -> PathBuf {
    root.join("theme").join(format!("{name}.toml"))
}

fn validate(path: &Path, name: &str, table: &StyleTable) {
    if table.schema_version != 1 {
        panic!(
            "style table schema mismatch in {}: expected 1 found {}",
            path.display(),
            table.schema_version
        );
    }
    if table.table != name {
        panic!(
            "style table name mismatch in {}: expected `{name}` found `{}`",
            path.display(),
            table.table
        );
    }
    for rule in &table.rules {
        if !rule.selector.trim().starts_with('.') {
            panic!(
                "selector `{}` in {} must target a class",
                rule.selector,
                path.display()
            );
        }
        if rule.declarations.is_empty() {
            panic!("selector `{}` in {} has no declarations", rule.selector, path.display());
        }
        for declaration in &rule.declarations {
            match declaration.split_once(':') {
                Some((property, value)) if !property.trim().is_empty() && !value.trim().is_empty() => {}
                _ => panic!(
                    "malformed declaration `{declaration}` for `{}` in {}",
                    rule.selector,
                    path.display()
                ),
            }
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut stylesheet = String::new();
    let mut selectors = Vec::<String>::new();

    for name in THEME_TABLES {
        let path = theme_path(&crate_root, name);
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let table: StyleTable = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        validate(&path, name, &table);

        stylesheet.push_str(&format!("/* {} */\n", table.table));
        for rule in &table.rules {
            let selector = rule.selector.trim();
            stylesheet.push_str(selector);
            stylesheet.push_str(" {\n");
            for declaration in &rule.declarations {
                stylesheet.push_str("  ");
                stylesheet.push_str(declaration.trim().trim_end_matches(';'));
                stylesheet.push_str(";\n");
            }
            stylesheet.push_str("}\n");
            selectors.push(selector.to_string());
        }
    }

    let selector_items = selectors
        .iter()
        .map(|selector| format!("    {selector:?},\n"))
        .collect::<String>();
    let generated = format!(
        "/// Build-time compiled stylesheet for every widget style table.\n\
pub const THEME_STYLESHEET: &str = r##\"{stylesheet}\"##;\n\n\
/// Selectors of every compiled rule, in cascade order.\n\
pub const THEME_SELECTORS: &[&str] = &[\n{selector_items}];\n"
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("theme_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
