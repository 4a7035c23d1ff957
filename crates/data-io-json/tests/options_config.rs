use std::path::PathBuf;

use data_io_json::{IndexPolicy, ResolveOptions, StorageOptions};

#[test]
fn empty_table_gives_defaults() {
    let options: StorageOptions = toml::from_str("").unwrap();
    assert_eq!(options, StorageOptions::default());
}

#[test]
fn storage_options_from_toml() {
    let options: StorageOptions = toml::from_str(
        r#"
        base_dir = "/var/lib/rig"
        max_entries = 8

        [resolve]
        index_policy = "strict"
        "#,
    )
    .unwrap();
    assert_eq!(options.base_dir, PathBuf::from("/var/lib/rig"));
    assert_eq!(options.max_entries, 8);
    assert_eq!(
        options.name_buffer_size,
        StorageOptions::default().name_buffer_size
    );
    assert_eq!(options.resolve.index_policy, IndexPolicy::Strict);
}

#[test]
fn resolve_options_policies() {
    let permissive: ResolveOptions = toml::from_str(r#"index_policy = "permissive""#).unwrap();
    assert_eq!(permissive, ResolveOptions::default());
    let strict: ResolveOptions = toml::from_str(r#"index_policy = "strict""#).unwrap();
    assert_eq!(strict, ResolveOptions::strict());
    assert!(toml::from_str::<ResolveOptions>(r#"index_policy = "loose""#).is_err());
}
