#![cfg(feature = "async")]

use std::path::{Path, PathBuf};

use ini_config::{load_ini_file, load_ini_file_async, IniDocument, IniSection};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(FIXTURES_DIR).join(name)
}

#[derive(Debug, Default, PartialEq, IniSection)]
#[ini(rename_all = "PascalCase")]
struct Profile {
    enabled: Option<bool>,
    greeting: Option<String>,
    hosts: Vec<String>,
}

#[derive(Debug, Default, PartialEq, IniDocument)]
#[ini(rename_all = "PascalCase")]
struct Endpoints {
    primary: Option<Profile>,
    fallback: Option<Profile>,
}

#[tokio::test]
async fn decodes_fixtures_like_the_blocking_loader() {
    let path = fixture_path("profiles.ini");
    let config = load_ini_file_async::<Endpoints>(&path)
        .await
        .expect("load fixture")
        .expect("fixture present");

    let primary = config.primary.as_ref().expect("primary section");
    assert_eq!(primary.enabled, Some(true));
    assert_eq!(primary.greeting.as_deref(), Some("Hello Good Sir"));
    assert_eq!(
        primary.hosts,
        vec!["alpha.example", "beta.example", "gamma.example"]
    );

    let blocking = load_ini_file::<Endpoints>(&path)
        .expect("load fixture")
        .expect("fixture present");
    assert_eq!(config, blocking);
}

#[tokio::test]
async fn absent_files_load_as_none() {
    let missing = fixture_path("does-not-exist.ini");
    let loaded = load_ini_file_async::<Endpoints>(&missing).await.unwrap();
    assert_eq!(loaded, None);

    let empty = load_ini_file_async::<Endpoints>(Path::new("")).await.unwrap();
    assert_eq!(empty, None);
}
