//! Structural tests for architectural boundary enforcement.
//!
//! These tests scan source files to verify that the layer boundaries hold:
//! domain is pure, application talks to the outside only through ports, and
//! only `app.rs` wires production adapters.

use std::path::{Path, PathBuf};

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

/// Read a file and strip comment lines to avoid false positives.
fn read_non_comment_lines(path: &Path) -> Vec<String> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    content
        .lines()
        .filter(|l| {
            let trimmed = l.trim();
            !trimmed.starts_with("//") && !trimmed.starts_with("/*") && !trimmed.starts_with('*')
        })
        .map(String::from)
        .collect()
}

/// Lines before the first `#[cfg(test)]`; unit test modules sit at the bottom.
fn production_lines(path: &Path) -> Vec<String> {
    read_non_comment_lines(path)
        .into_iter()
        .take_while(|l| !l.contains("#[cfg(test)]"))
        .collect()
}

fn src_dir(layer: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join(layer)
}

fn relative(file: &Path) -> String {
    file.strip_prefix(env!("CARGO_MANIFEST_DIR"))
        .unwrap_or(file)
        .display()
        .to_string()
}

/// Report every production line in `layer` containing one of `forbidden`.
fn find_violations(layer: &str, forbidden: &[&str]) -> Vec<String> {
    let mut violations = Vec::new();
    for file in collect_rs_files(&src_dir(layer)) {
        for (i, line) in production_lines(&file).iter().enumerate() {
            for pattern in forbidden {
                if line.contains(pattern) {
                    violations.push(format!("{}:{}: `{pattern}`: {line}", relative(&file), i + 1));
                }
            }
        }
    }
    violations
}

#[test]
fn domain_has_no_outer_layer_imports() {
    let violations = find_violations(
        "domain",
        &[
            "crate::application",
            "crate::infra",
            "crate::commands",
            "crate::output",
            "crate::app::",
        ],
    );
    assert!(
        violations.is_empty(),
        "domain/ imports outer layers:\n{}",
        violations.join("\n")
    );
}

#[test]
fn domain_performs_no_io() {
    let violations = find_violations(
        "domain",
        &["tokio", "std::fs", "std::process", "std::net", "std::env"],
    );
    assert!(
        violations.is_empty(),
        "domain/ must stay free of I/O:\n{}",
        violations.join("\n")
    );
}

#[test]
fn application_has_no_infra_or_presentation_imports() {
    let violations = find_violations(
        "application",
        &["crate::infra", "crate::commands", "crate::output", "crate::app::"],
    );
    assert!(
        violations.is_empty(),
        "application/ must depend on ports, not adapters:\n{}",
        violations.join("\n")
    );
}

#[test]
fn application_reads_no_process_environment() {
    let violations = find_violations("application", &["std::env", "tokio::process", "std::fs"]);
    assert!(
        violations.is_empty(),
        "application/ must receive the environment and files through ports:\n{}",
        violations.join("\n")
    );
}

#[test]
fn only_app_rs_constructs_production_adapters() {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut violations = Vec::new();
    for file in collect_rs_files(&src) {
        let rel = relative(&file).replace('\\', "/");
        if rel.contains("/infra/") || rel.ends_with("/app.rs") {
            continue;
        }
        for (i, line) in production_lines(&file).iter().enumerate() {
            if line.contains("TokioCommandRunner") || line.contains("UreqTransport::new") {
                violations.push(format!("{rel}:{}: {line}", i + 1));
            }
        }
    }
    assert!(
        violations.is_empty(),
        "production adapters constructed outside app.rs:\n{}",
        violations.join("\n")
    );
}

#[test]
fn commands_print_json_through_output_module() {
    let mut violations = Vec::new();
    for file in collect_rs_files(&src_dir("commands")) {
        for (i, line) in production_lines(&file).iter().enumerate() {
            if line.contains("serde_json::to_string") {
                violations.push(format!("{}:{}: {line}", relative(&file), i + 1));
            }
        }
    }
    assert!(
        violations.is_empty(),
        "commands/ should render JSON via output::json:\n{}",
        violations.join("\n")
    );
}
