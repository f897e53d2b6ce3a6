use serial_test::serial;
use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use stl_ascii::options::LOG_ENV;
use stl_ascii::runner::{run, USAGE};
use stl_ascii::{
    convert_file, convert_zip_entry, ConvertOptions, Error, LogTarget, RunConfig, StlSource,
    TempFolder,
};

const EXPECTED_TRIANGLE: &str = "solid untitled
facet normal 0.0 0.0 1.0
  outer loop
    vertex 0.0 0.0 0.0
    vertex 1.0 0.0 0.0
    vertex 0.0 1.0 0.0
  endloop
endfacet
endsolid untitled
";

fn triangle_stl() -> Vec<u8> {
    let mut data = vec![0u8; 80];
    data.extend_from_slice(&1u32.to_le_bytes());
    for v in [0.0f32, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0] {
        data.extend_from_slice(&v.to_le_bytes());
    }
    data.extend_from_slice(&[0, 0]);
    data
}

fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(path).expect("Failed to create zip");
    let mut zip = zip::ZipWriter::new(file);
    for (name, data) in entries {
        zip.start_file(*name, zip::write::FileOptions::default())
            .expect("Failed to start zip entry");
        zip.write_all(data).expect("Failed to write zip entry");
    }
    zip.finish().expect("Failed to finish zip");
}

fn run_args(args: &[String], config: &RunConfig) -> String {
    let mut out = Vec::new();
    run(args, &mut out, config).expect("Failed to write output");
    String::from_utf8(out).unwrap()
}

#[test]
fn test_convert_file() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.write("triangle.stl", &triangle_stl()).unwrap();

    let mut out = Vec::new();
    let facets = convert_file(&path, &mut out, &ConvertOptions::default()).unwrap();
    assert_eq!(facets, 1);
    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED_TRIANGLE);
}

#[test]
fn test_convert_missing_file() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let mut out = Vec::new();
    let err = convert_file(
        tmp.path().join("missing.stl"),
        &mut out,
        &ConvertOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::FileLoad(_)));
    assert!(out.is_empty());
}

#[test]
fn test_convert_zip_entries() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let archive = tmp.path().join("triangles.zip");
    let data = triangle_stl();
    write_zip(
        &archive,
        &[("first.stl", data.as_slice()), ("nested/second.stl", data.as_slice())],
    );

    for entry in ["first.stl", "nested/second.stl"] {
        let mut out = Vec::new();
        convert_zip_entry(&archive, entry, &mut out, &ConvertOptions::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), EXPECTED_TRIANGLE);
    }

    let mut out = Vec::new();
    let err = convert_zip_entry(&archive, "absent.stl", &mut out, &ConvertOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::Archive(_)));
}

#[test]
fn test_not_a_zip() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let archive = tmp.write("fake.zip", b"not a zip").unwrap();

    let mut out = Vec::new();
    let err = convert_zip_entry(&archive, "x.stl", &mut out, &ConvertOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::Archive(_)));
}

#[test]
fn test_run_file_and_zip_sources() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.write("triangle.stl", &triangle_stl()).unwrap();
    let archive = tmp.path().join("bundle.zip");
    write_zip(&archive, &[("triangle.stl", triangle_stl().as_slice())]);

    let config = RunConfig::default();
    let text = run_args(&[path.display().to_string()], &config);
    assert_eq!(text, EXPECTED_TRIANGLE);

    let source = StlSource::ZipEntry {
        archive: archive.clone(),
        entry: "triangle.stl".to_string(),
    };
    let text = run_args(&[source.to_string()], &config);
    assert_eq!(text, EXPECTED_TRIANGLE);
}

#[test]
fn test_run_short_file_reports_error_only() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.write("short.stl", &[0u8; 82]).unwrap();

    let text = run_args(&[path.display().to_string()], &RunConfig::default());
    assert_eq!(
        text,
        "error Unexpected termination of file (triangle count)\n"
    );
}

#[test]
fn test_run_truncated_mid_stream() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let mut data = triangle_stl();
    data[80] = 2;
    let path = tmp.write("cut.stl", &data).unwrap();

    let text = run_args(&[path.display().to_string()], &RunConfig::default());
    assert!(text.starts_with("solid untitled\nfacet normal 0.0 0.0 1.0\n"));
    assert!(text.ends_with("endfacet\nerror Unexpected termination of file (triangle data)\n"));
}

#[test]
fn test_usage_does_not_touch_files() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let log_path = tmp.path().join("usage.log");
    let config = RunConfig {
        log: LogTarget::Path(log_path.clone()),
        ..RunConfig::default()
    };

    assert_eq!(run_args(&[], &config), format!("{}\n", USAGE));
    let two = vec!["a.stl".to_string(), "b.stl".to_string()];
    assert_eq!(run_args(&two, &config), format!("{}\n", USAGE));
    assert!(!log_path.exists());
}

#[test]
fn test_run_writes_log() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.write("triangle.stl", &triangle_stl()).unwrap();
    let log_path = tmp.path().join("run.log");
    let config = RunConfig {
        log: LogTarget::Path(log_path.clone()),
        ..RunConfig::default()
    };

    let text = run_args(&[path.display().to_string()], &config);
    assert_eq!(text, EXPECTED_TRIANGLE);

    let log = fs::read_to_string(&log_path).expect("Log file missing");
    assert!(log.contains("Converting"));
    assert!(log.contains("Wrote 1 facets"));
    assert!(!log.contains("solid"));
}

#[test]
fn test_run_logs_failure() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let path = tmp.write("short.stl", &[0u8; 40]).unwrap();
    let log_path = tmp.path().join("failed.log");
    let config = RunConfig {
        log: LogTarget::Path(log_path.clone()),
        ..RunConfig::default()
    };

    let text = run_args(&[path.display().to_string()], &config);
    assert_eq!(text, "error Unexpected termination of file (header)\n");

    let log = fs::read_to_string(&log_path).expect("Log file missing");
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("] Converting "));
    assert!(lines[1].ends_with("] Conversion failed: Unexpected termination of file (header)"));
}

#[test]
#[serial]
fn test_run_config_from_env() {
    env::remove_var(LOG_ENV);
    assert_eq!(RunConfig::from_env().log, LogTarget::Disabled);

    env::set_var(LOG_ENV, "");
    assert_eq!(RunConfig::from_env().log, LogTarget::TempFolder);

    env::set_var(LOG_ENV, "/tmp/stl_ascii_test.log");
    assert_eq!(
        RunConfig::from_env().log,
        LogTarget::Path("/tmp/stl_ascii_test.log".into())
    );

    env::remove_var(LOG_ENV);
}
