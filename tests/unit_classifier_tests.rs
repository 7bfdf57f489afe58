//! # Classifier Module Unit Tests / Classifier 模块单元测试
//!
//! Tests for the case catalog: the built-in entries, the fallback triple for
//! unrecognized names, and catalogs built from configuration entries.
//!
//! 用例目录的测试：内置条目、无法识别名称的回退三元组，
//! 以及从配置条目构建的目录。

use playbook_verifier::core::classifier::{
    CaseCatalog, FALLBACK_DESCRIPTION, FALLBACK_ID_LABEL,
};
use playbook_verifier::core::config::CaseEntry;

#[test]
fn test_builtin_entries_resolve() {
    let catalog = CaseCatalog::default();

    let info = catalog.lookup("Pratiques DevOps");
    assert_eq!(info.numeric_id, 4);
    assert_eq!(info.id_label, "ID: 4");
    assert!(!info.description.is_empty());

    let info = catalog.lookup("Deploiement automatisé");
    assert_eq!(info.numeric_id, 1);
    assert_eq!(info.id_label, "ID: 1");
}

#[test]
fn test_unrecognized_name_yields_fallback() {
    let catalog = CaseCatalog::default();
    let info = catalog.lookup("no-such-case");

    assert_eq!(info.description, FALLBACK_DESCRIPTION);
    assert_eq!(info.description, "not available");
    assert_eq!(info.id_label, FALLBACK_ID_LABEL);
    assert!(info.id_label.contains("N/A"));
    assert_eq!(info.numeric_id, 0);
}

#[test]
fn test_lookup_is_total_for_odd_inputs() {
    let catalog = CaseCatalog::default();
    for name in ["", " ", "group1", "été/with/slashes", "🎭"] {
        let info = catalog.lookup(name);
        assert_eq!(info.numeric_id, 0);
        assert_eq!(info.description, "not available");
    }
}

#[test]
fn test_catalog_from_config_entries() {
    let entries = vec![
        CaseEntry {
            name: "network".to_string(),
            description: "Network provisioning checks".to_string(),
            id: 7,
        },
        CaseEntry {
            name: "storage".to_string(),
            description: "Storage layout checks".to_string(),
            id: 8,
        },
    ];
    let catalog = CaseCatalog::new(&entries);

    let info = catalog.lookup("network");
    assert_eq!(info.numeric_id, 7);
    assert_eq!(info.id_label, "ID: 7");
    assert_eq!(info.description, "Network provisioning checks");

    // A configured catalog replaces the built-in mapping entirely.
    let info = catalog.lookup("Pratiques DevOps");
    assert_eq!(info.numeric_id, 0);
}

#[test]
fn test_default_entries_seed_four_cases() {
    let entries = CaseCatalog::default_entries();
    assert_eq!(entries.len(), 4);
    assert_eq!(
        entries.iter().map(|e| e.id).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
}
