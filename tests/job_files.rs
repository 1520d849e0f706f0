// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Job file loading and evaluation tests

use anyhow::Result;
use polyframe_layout::cli::{
    load_job_file, run_job_file, JobOutput, OutputConfig, OutputFormat, Reporter,
};
use polyframe_layout::Interval1D;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

fn job_file(suffix: &str, content: &str) -> Result<NamedTempFile> {
    let mut file = Builder::new().suffix(suffix).tempfile()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

const TOML_JOBS: &str = r#"
[[jobs]]
name = "box"
kind = "dims"
specs = [10.0, [2.0, -2.0], 4.0]
center = "XZ"

[[jobs]]
name = "outline"
kind = "rect"
size_x = 2.0
size_y = 1.0
center = false

[[jobs]]
name = "holes"
kind = "grid"
count_x = 3
count_y = 3
size_x = 2.0
size_y = 2.0

[[jobs]]
name = "pads"
kind = "distribute"
size_x = 3.0
size_y = 3.0
tile_size_x = 1.0
tile_size_y = 1.0
center = false

[[jobs]]
name = "panels"
kind = "stretch"
size_x = 6.0
size_y = 4.0
count_x = 2
count_y = 1
"#;

#[test]
fn test_toml_job_file() -> Result<()> {
    let file = job_file(".toml", TOML_JOBS)?;
    let reports = run_job_file(file.path())?;

    let names: Vec<&str> = reports.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["box", "outline", "holes", "pads", "panels"]);

    assert_eq!(
        reports[0].output,
        JobOutput::Intervals(vec![
            Interval1D::new(-5.0, 5.0),
            Interval1D::new(-2.0, 2.0),
            Interval1D::new(-2.0, 2.0),
        ])
    );
    assert_eq!(reports[1].output.len(), 4);
    assert_eq!(reports[2].output.len(), 9);
    assert_eq!(reports[3].output.len(), 9);
    match &reports[4].output {
        JobOutput::Tiles(tiles) => {
            assert_eq!(tiles.len(), 2);
            assert_eq!(tiles[0].max_x(), tiles[1].min_x());
        }
        other => panic!("expected tiles, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_json_job_file() -> Result<()> {
    let file = job_file(
        ".json",
        r#"{"jobs": [
            {"name": "row", "kind": "grid", "count_x": 1, "count_y": 6, "spacing_y": 1.0}
        ]}"#,
    )?;
    let reports = run_job_file(file.path())?;
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].kind, "grid");
    assert_eq!(reports[0].output.len(), 6);
    Ok(())
}

#[test]
fn test_failing_job_names_the_job() -> Result<()> {
    let file = job_file(
        ".toml",
        r#"
[[jobs]]
name = "broken"
kind = "grid"
count_x = 3
count_y = 3
"#,
    )?;
    let err = run_job_file(file.path()).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("broken"));
    assert!(message.contains("spacing_x or size_x"));
    Ok(())
}

#[test]
fn test_malformed_job_file() -> Result<()> {
    let file = job_file(".toml", "[[jobs]]\nname = \"x\"\nkind = \"spiral\"\n")?;
    assert!(load_job_file(file.path()).is_err());
    assert!(load_job_file("does/not/exist.toml").is_err());
    Ok(())
}

#[test]
fn test_reports_render_as_json() -> Result<()> {
    let file = job_file(".toml", TOML_JOBS)?;
    let reports = run_job_file(file.path())?;
    let reporter = Reporter::new(&OutputConfig {
        format: OutputFormat::Json,
        precision: 4,
    });
    let json: serde_json::Value = serde_json::from_str(&reporter.render_jobs(&reports)?)?;
    assert_eq!(json.as_array().map(|a| a.len()), Some(5));
    assert_eq!(json[4]["kind"], "stretch");
    Ok(())
}
