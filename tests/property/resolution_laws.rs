//! Fallback and option lookup laws

use console_template::config::{AppSettings, ConfigStore};
use console_template::error::FailureKind;
use console_template::resolve::{find_option, resolve_with_fallback, CommandOption, OptionKind};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn store_from(entries: &BTreeMap<String, String>) -> AppSettings {
    let mut settings = AppSettings::new();
    for (leaf, value) in entries {
        settings.set(&format!("Section:{}", leaf), value.clone());
    }
    settings
}

proptest! {
    #[test]
    fn test_cli_value_always_wins(
        cli in "[a-zA-Z0-9./_-]{1,12}",
        entries in prop::collection::btree_map("[A-Za-z]{1,8}", "[a-z ]{0,8}", 0..5),
        key in "[A-Za-z:]{0,16}",
    ) {
        let settings = store_from(&entries);
        let store: Option<&dyn ConfigStore> = Some(&settings);
        prop_assert_eq!(
            resolve_with_fallback(Some(&cli), store, Some(&key)).unwrap(),
            Some(cli.clone())
        );
        prop_assert_eq!(resolve_with_fallback(Some(&cli), None, None).unwrap(), Some(cli));
    }

    #[test]
    fn test_undeclared_key_is_config_key_not_found(
        entries in prop::collection::btree_map("[a-m]{1,6}", "[a-z]{1,6}", 0..5),
        missing in "[n-z]{1,6}",
    ) {
        let settings = store_from(&entries);
        let key = format!("Section:{}", missing);
        let err = resolve_with_fallback(None, Some(&settings), Some(&key)).unwrap_err();
        prop_assert_eq!(err.kind(), FailureKind::ConfigKeyNotFound);
    }

    #[test]
    fn test_declared_key_yields_trimmed_presence(
        entries in prop::collection::btree_map("[a-m]{1,6}", "[a-z ]{0,6}", 1..5),
    ) {
        let settings = store_from(&entries);
        for (leaf, value) in &entries {
            let key = format!("section:{}", leaf.to_uppercase());
            let resolved = resolve_with_fallback(None, Some(&settings), Some(&key)).unwrap();
            if value.trim().is_empty() {
                prop_assert_eq!(resolved, None);
            } else {
                prop_assert_eq!(resolved, Some(value.clone()));
            }
        }
    }

    #[test]
    fn test_option_lookup_ignores_separators_and_case(
        words in prop::collection::vec("[a-z]{1,6}", 1..4),
        separator in prop::sample::select(vec!["-", "_"]),
        upper in any::<bool>(),
    ) {
        let declared = words.join(separator);
        let options = vec![CommandOption::new(declared.clone(), OptionKind::SingleValue)];
        let query = if upper { words.concat().to_uppercase() } else { words.concat() };

        let found = find_option(&options, &query, true).unwrap().unwrap();
        prop_assert_eq!(found.long_name(), declared.as_str());
    }
}
