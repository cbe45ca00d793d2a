//! Validation and file system error tests for `IniSource`.

use std::io::ErrorKind;

use tempfile::TempDir;

use super::write_ini;
use crate::error::{SourceError, SourceErrorKind};
use crate::source::{ConfigSource, IniSource};

#[tokio::test]
async fn test_empty_file_name() {
    let err = IniSource::new("").load_config().await.unwrap_err();
    assert_eq!(err.kind(), SourceErrorKind::InvalidPath);
    assert_eq!(
        err.to_string(),
        "File '' is not a valid or is missing a file extension"
    );
}

#[tokio::test]
async fn test_missing_extension() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("file").to_string_lossy().into_owned();

    let err = IniSource::new(file.clone()).load_config().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("File '{file}' is not a valid or is missing a file extension")
    );
}

#[tokio::test]
async fn test_unsupported_extension() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("file.noext").to_string_lossy().into_owned();

    let err = IniSource::new(file).load_config().await.unwrap_err();
    assert!(matches!(
        &err,
        SourceError::UnsupportedExtension { extension } if extension == "noext"
    ));
    assert_eq!(err.to_string(), "File extension 'noext' not supported");
}

#[tokio::test]
async fn test_validation_precedes_io() {
    // The file exists and is valid INI, but the extension is rejected first.
    let temp_dir = TempDir::new().unwrap();
    let file = write_ini(temp_dir.path(), "settings.conf", "a = 1\n");

    let err = IniSource::new(file).load_config().await.unwrap_err();
    assert_eq!(err.kind(), SourceErrorKind::UnsupportedExtension);
}

#[tokio::test]
async fn test_missing_file_surfaces_native_error() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir
        .path()
        .join("no-such-file-01.ini")
        .to_string_lossy()
        .into_owned();
    let native = std::fs::read_to_string(&file).unwrap_err().to_string();

    let err = IniSource::new(file.clone()).load_config().await.unwrap_err();

    assert_eq!(err.kind(), SourceErrorKind::FileSystem);
    assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
    assert_eq!(err.to_string(), format!("{native}, open '{file}'"));
}

#[tokio::test]
async fn test_directory_named_like_ini_is_file_system_error() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("conf.ini");
    std::fs::create_dir(&dir).unwrap();

    let err = IniSource::new(dir.to_string_lossy().into_owned())
        .load_config()
        .await
        .unwrap_err();
    assert_eq!(err.kind(), SourceErrorKind::FileSystem);
}

#[tokio::test]
async fn test_non_utf8_file_is_file_system_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("binary.ini");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let err = IniSource::new(path.to_string_lossy().into_owned())
        .load_config()
        .await
        .unwrap_err();
    assert_eq!(err.io_kind(), Some(ErrorKind::InvalidData));
}
