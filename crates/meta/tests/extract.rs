//! Fixture-driven extraction tests: raw provider header sets in, canonical
//! metadata out. The JSON documents under `fixtures/` mirror real metadata
//! HEAD responses, with multi-valued headers as arrays.

use sluice_meta::provider::googlecloud;
use sluice_meta::{HashAlgorithm, Headers, Metadata, Provider};
use std::path::Path;

fn load_fixture(name: &str) -> (String, Headers) {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    let raw = std::fs::read_to_string(path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let object_name = doc["object_name"].as_str().unwrap().to_string();
    let mut headers = Headers::new();
    for (header, values) in doc["headers"].as_object().unwrap() {
        for value in values.as_array().unwrap() {
            headers.insert(header, value.as_str().unwrap());
        }
    }
    (object_name, headers)
}

#[test]
fn file_fixture_normalizes_to_file_metadata() {
    let (object_name, headers) = load_fixture("file-raw.json");
    let record = googlecloud::extract(&object_name, &headers).unwrap();
    let Metadata::File(file) = Metadata::from_record(Provider::GoogleCloud, record).unwrap() else {
        panic!("expected the file variant");
    };
    assert_eq!(file.provider(), Provider::GoogleCloud);
    assert_eq!(file.name(), "DSC_0235.JPG");
    assert_eq!(file.path().to_string(), "/test-folder-1/DSC_0235.JPG");
    assert!(file.path().is_file());
    assert_eq!(file.size(), Some(1_829_795));
    assert_eq!(file.etag(), Some("9a46947c9c622d7792125d8ea44c4638"));
    assert_eq!(file.content_type(), Some("image/jpeg"));
    assert_eq!(file.modified(), Some("Thu, 25 Jan 2018 02:08:08 GMT"));
    assert_eq!(file.created_utc(), None);
    assert_eq!(file.extra().generation.as_deref(), Some("1516846088066588"));
    assert_eq!(file.extra().hashes[&HashAlgorithm::Crc32c], "4dff2d9b");
    assert_eq!(file.extra().hashes[&HashAlgorithm::Md5], "9a46947c9c622d7792125d8ea44c4638");
}

#[test]
fn folder_fixture_normalizes_to_folder_metadata() {
    let (object_name, headers) = load_fixture("folder-raw.json");
    let record = googlecloud::extract(&object_name, &headers).unwrap();
    let Metadata::Folder(folder) = Metadata::from_record(Provider::GoogleCloud, record).unwrap()
    else {
        panic!("expected the folder variant");
    };
    assert_eq!(folder.provider(), Provider::GoogleCloud);
    assert_eq!(folder.name(), "test-folder-1");
    assert_eq!(folder.path().to_string(), "/test-folder-1/");
    assert!(folder.path().is_folder());
}

#[test]
fn same_name_file_and_folder_do_not_conflate() {
    let (_, headers) = load_fixture("file-raw.json");
    let file = googlecloud::file_metadata("test-folder-1/DSC_0235.JPG", &headers).unwrap();
    let folder = googlecloud::folder_metadata("test-folder-1/DSC_0235.JPG/", &headers).unwrap();
    assert_eq!(file.name(), folder.name());
    assert_ne!(file.path(), folder.path());
}

#[test]
fn extraction_is_idempotent_over_fixture_input() {
    let (object_name, headers) = load_fixture("file-raw.json");
    let first = googlecloud::extract(&object_name, &headers).unwrap();
    let second = googlecloud::extract(&object_name, &headers).unwrap();
    assert_eq!(first, second);
}

#[test]
fn fixture_timestamp_parses_to_utc() {
    use time::macros::datetime;
    let (object_name, headers) = load_fixture("file-raw.json");
    let file = googlecloud::file_metadata(&object_name, &headers).unwrap();
    assert_eq!(file.modified_utc().unwrap(), Some(datetime!(2018-01-25 02:08:08 UTC)));
}
