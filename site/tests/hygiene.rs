//! Hygiene: source-level budgets for the site core.
//!
//! The core runs inside a browser tab where a panic kills every handler on
//! the page, so production sources (everything under `src/` except
//! `*_test.rs`) carry a zero budget for panicking calls and for silently
//! discarded results. Budgets only ever go down.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
    Budget { pattern: "let _ =", max: 0 },
    Budget { pattern: ".ok()", max: 0 },
    Budget { pattern: "#[allow(dead_code)]", max: 0 },
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn production_sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("engine.rs")), "run from the site crate root");
}

#[test]
fn budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("  `{}`: found {count}, max {}\n{detail}", budget.pattern, budget.max));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
