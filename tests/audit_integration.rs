//! Integration tests for the audit pipeline.
//!
//! These tests write site fixtures to a temporary directory and go through
//! `run_audit()` exactly as the binary does.

use site_audit::{run_audit, AuditError, CheckKind, Config, Finding};

#[path = "helpers.rs"]
mod helpers;

use helpers::{config_for, create_test_site, write_file, STOREFRONT_HTML, STOREFRONT_JS};

#[test]
fn test_clean_storefront_passes_every_check() {
    let site = create_test_site(STOREFRONT_HTML, STOREFRONT_JS);
    let report = run_audit(&config_for(site.path())).expect("Audit should run");

    assert!(report.failures().is_empty(), "{}", report.render());
    assert_eq!(report.coverage.called.len(), 3);
    assert_eq!(report.coverage.defined.len(), 3);
    assert_eq!(report.categories.total, 3);
    assert_eq!(report.categories.counts.get("gaming"), Some(&2));
    assert_eq!(report.file_stats.script_lines, 12);
}

#[test]
fn test_storefront_full_report_text() {
    let site = create_test_site(STOREFRONT_HTML, STOREFRONT_JS);
    let report = run_audit(&config_for(site.path())).expect("Audit should run");

    let expected = "\
=== Product Duplicates ===
PASS: No duplicate products found!

=== JS Function Coverage ===
Functions called in HTML: 3
Functions defined in JS: 3
PASS: All functions called in HTML are defined in JS!

=== HTML Structure ===
Opening <div>: 8
Closing </div>: 8
Balance: PASS
Opening <section>: 2
Closing </section>: 2
Balance: PASS

=== File Stats ===
HTML: 22 lines
JS: 12 lines

=== Essential Elements ===
  ✓ bookingModal: found
  ✓ cartOverlay: found
  ✓ cartSidebar: found
  ✓ pcGrid: found
  ✓ catEmpty: found
  ✓ catTitle: found
  ✓ catDesc: found

=== Category Counts ===
  gaming: 2 products
  office: 1 products
  Total: 3 products
";
    assert_eq!(report.render(), expected);
}

#[test]
fn test_duplicate_widget_scenario() {
    let html = r#"
        <img alt="Widget A"><img alt="Widget B">
        <img alt="Widget A"><img alt="Widget A">
    "#;
    let site = create_test_site(html, "");
    let report = run_audit(&config_for(site.path())).expect("Audit should run");

    assert!(!report.duplicates.passed());
    let rendered = report.render();
    assert!(rendered.contains("FOUND 1 duplicated products:\n  Widget A: 3x\n"));
    assert!(!rendered.contains("Widget B"));
}

#[test]
fn test_missing_handler_scenario() {
    let html = r#"<button onclick="openCart()">Cart</button>"#;
    let site = create_test_site(html, "function closeCart() {}\n");
    let report = run_audit(&config_for(site.path())).expect("Audit should run");

    assert_eq!(
        report.coverage.missing.iter().collect::<Vec<_>>(),
        vec!["openCart"]
    );
    assert!(report
        .render()
        .contains("MISSING functions (1):\n  ❌ openCart\n"));
}

#[test]
fn test_balanced_divs_scenario() {
    let html = "<div>\n".repeat(5) + &"</div>\n".repeat(5);
    let site = create_test_site(&html, "");
    let report = run_audit(&config_for(site.path())).expect("Audit should run");

    let rendered = report.render();
    assert!(rendered.contains("Opening <div>: 5\nClosing </div>: 5\nBalance: PASS\n"));
    assert!(!rendered.contains("MISMATCH"));
}

#[test]
fn test_missing_sources_are_fatal() {
    let site = create_test_site("", "");
    let config = Config {
        base_dir: site.path().join("does-not-exist"),
        ..Default::default()
    };

    match run_audit(&config) {
        Err(AuditError::ReadInput { kind, path, .. }) => {
            assert_eq!(kind, "document");
            assert!(path.ends_with("index.html"));
        }
        Ok(_) => panic!("Audit should fail when the document is missing"),
    }
}

#[test]
fn test_custom_file_names() {
    let site = create_test_site("", "");
    write_file(site.path(), "home.html", r#"<a onclick="go()"></a>"#);
    write_file(site.path(), "app.js", "function go() {}");

    let config = Config {
        base_dir: site.path().to_path_buf(),
        document: "home.html".to_string(),
        script: "app.js".to_string(),
        ..Default::default()
    };
    let report = run_audit(&config).expect("Audit should run");
    assert!(report.coverage.passed());
    assert_eq!(report.coverage.called.len(), 1);
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let html = r#"<img alt="Z"><img alt="Z"><div data-cat="b"><div data-cat="a"><button onclick="x()"></button>"#;
    let site = create_test_site(html, "function y() {}");
    let config = config_for(site.path());

    let first = run_audit(&config).expect("Audit should run").render();
    let second = run_audit(&config).expect("Audit should run").render();
    assert_eq!(first, second);

    let report = run_audit(&config).expect("Audit should run");
    assert_eq!(
        report.failures(),
        vec![
            CheckKind::DuplicateProducts,
            CheckKind::FunctionCoverage,
            CheckKind::Structure,
            CheckKind::EssentialElements,
        ]
    );
}
