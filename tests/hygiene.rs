//! Source hygiene budgets for the production tree.
//!
//! Scans `src/` (excluding `*_test.rs`) for patterns that crash the tab or
//! swallow errors. Budgets only go down: fix an existing hit before adding one.
//! `let _ =` hits are `try_set` writes after an await and cfg fallbacks that
//! consume otherwise-unused arguments.

use std::fs;
use std::path::Path;

const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("#[allow(dead_code)]", 0),
    ("let _ =", 21),
    (".ok()", 11),
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

fn hits(files: &[(String, String)], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (path.clone(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_not_empty() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(files.iter().any(|(path, _)| path.ends_with("lib.rs")));
}

#[test]
fn pattern_budgets_hold() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);

    let mut failures = Vec::new();
    for (pattern, max) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *max {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("{pattern} found {count}, max {max}\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
