//! End-to-end tests: CSV file in, PDF file out.

use std::fs;
use std::path::Path;

use chrono::{Local, TimeZone};
use lopdf::content::Content;
use lopdf::Document as PdfDocument;
use tabreport::render::to_text;
use tabreport::{Error, RenderOptions, ReportConfig, ReportOptions};
use tempfile::TempDir;

const CITY_DATA: &str = "City,Temperature,Humidity\n\
CityA,10,40\n\
CityB,30,55\n\
CityA,20,60\n";

/// Text shown on each physical page, one entry per page.
fn page_texts(path: &Path) -> Vec<String> {
    let pdf = PdfDocument::load(path).unwrap();
    pdf.get_pages()
        .values()
        .map(|id| {
            let content = Content::decode(&pdf.get_page_content(*id).unwrap()).unwrap();
            content
                .operations
                .iter()
                .filter(|op| op.operator == "Tj")
                .map(|op| String::from_utf8_lossy(op.operands[0].as_str().unwrap()).into_owned())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect()
}

fn write_input(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn fixed_config(input: &Path, output: &Path) -> ReportConfig {
    let timestamp = Local.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    ReportConfig::new()
        .with_input(input)
        .with_output(output)
        .with_report_options(ReportOptions::new().with_generated_at(timestamp))
}

#[test]
fn test_report_with_grouped_mean() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "data.csv", CITY_DATA);
    let output = dir.path().join("report.pdf");

    let written = ReportConfig::new()
        .with_input(&input)
        .with_output(&output)
        .run()
        .unwrap();
    assert_eq!(written, output);

    let pages = page_texts(&output);
    assert_eq!(pages.len(), 3);

    assert!(pages[0].contains("Data Analysis Report"));
    assert!(pages[0].contains("Generated on: "));
    assert!(pages[0].contains("1. Dataset Overview"));
    assert!(pages[0].contains("The input file contains 3 rows and 3 columns."));
    assert!(pages[0].contains("Columns: City, Temperature, Humidity."));
    assert!(pages[0].contains("2. Descriptive Statistics"));
    assert!(pages[0].contains("Temperature"));
    assert!(pages[0].contains("20.00"));
    assert!(pages[0].contains("Page 1"));

    assert!(pages[1].contains("3. Mean Temperature by City"));
    let b = pages[1].find("CityB").unwrap();
    let a = pages[1].find("CityA").unwrap();
    assert!(b < a);
    assert!(pages[1].contains("30.00"));
    assert!(pages[1].contains("15.00"));
    assert!(pages[1].contains("Page 2"));

    assert!(pages[2].contains("4. Notes"));
    assert!(pages[2].contains("Page 3"));
}

#[test]
fn test_report_without_grouping_columns() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "data.csv", "A,B,C\nx,1,2\ny,2,3\nz,3,4\nw,4,5\nv,5,6\n");
    let output = dir.path().join("report.pdf");

    ReportConfig::new()
        .with_input(&input)
        .with_output(&output)
        .run()
        .unwrap();

    let pages = page_texts(&output);
    assert_eq!(pages.len(), 2);
    assert!(pages[0].contains("The input file contains 5 rows and 3 columns."));
    assert!(pages[0].contains("Columns: A, B, C."));
    assert!(pages.iter().all(|p| !p.contains("3. Mean")));
    assert!(pages[1].contains("4. Notes"));
}

#[test]
fn test_missing_input_creates_no_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("report.pdf");

    let err = ReportConfig::new()
        .with_input(dir.path().join("nope.csv"))
        .with_output(&output)
        .run()
        .unwrap_err();

    assert!(matches!(err, Error::Io(_)));
    assert!(!output.exists());
}

#[test]
fn test_non_numeric_value_column_fails_before_writing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "data.csv", "City,Temperature\nCityA,hot\nCityB,cold\n");
    let output = dir.path().join("report.pdf");

    let err = ReportConfig::new()
        .with_input(&input)
        .with_output(&output)
        .run()
        .unwrap_err();

    assert!(matches!(err, Error::NonNumericColumn(ref c) if c == "Temperature"));
    assert!(!output.exists());
}

#[test]
fn test_empty_input_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "data.csv", "");
    let output = dir.path().join("report.pdf");

    let err = ReportConfig::new()
        .with_input(&input)
        .with_output(&output)
        .run()
        .unwrap_err();

    assert!(matches!(err, Error::EmptyInput));
    assert!(!output.exists());
}

#[test]
fn test_header_only_input() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "data.csv", "Score,Weight\n");

    let doc = ReportConfig::new().with_input(&input).build_document().unwrap();
    let text = to_text(&doc).unwrap();

    assert!(text.contains("contains 0 rows and 2 columns"));
    assert!(text.contains("count\t0.00\t0.00"));
    assert!(text.contains("mean\tNaN\tNaN"));
}

#[test]
fn test_output_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "data.csv", CITY_DATA);
    let output = dir.path().join("report.pdf");
    fs::write(&output, b"stale contents").unwrap();

    ReportConfig::new()
        .with_input(&input)
        .with_output(&output)
        .run()
        .unwrap();

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.5"));
}

#[test]
fn test_fixed_timestamp_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "data.csv", CITY_DATA);
    let first = dir.path().join("first.pdf");
    let second = dir.path().join("second.pdf");

    let config = fixed_config(&input, &first);
    config.run().unwrap();
    fixed_config(&input, &second).run().unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());

    let text = to_text(&config.build_document().unwrap()).unwrap();
    assert!(text.contains("Generated on: 2024-06-01 12:00:00"));
    assert_eq!(
        text,
        to_text(&fixed_config(&input, &second).build_document().unwrap()).unwrap()
    );
}

#[test]
fn test_long_group_table_breaks_pages() {
    let dir = TempDir::new().unwrap();
    let mut csv = String::from("City,Temperature\n");
    for i in 0..80 {
        csv.push_str(&format!("City{:02},{}\n", i, i));
    }
    let input = write_input(&dir, "data.csv", &csv);
    let output = dir.path().join("report.pdf");

    ReportConfig::new()
        .with_input(&input)
        .with_output(&output)
        .run()
        .unwrap();

    let pages = page_texts(&output);
    assert!(pages.len() > 3);
    for (i, page) in pages.iter().enumerate() {
        assert!(page.contains(&format!("Page {}", i + 1)));
        assert!(page.contains("Data Analysis Report"));
    }

    // highest mean first, lowest on the last table page
    assert!(pages[1].contains("City79"));
    assert!(pages[pages.len() - 2].contains("City00"));
    assert!(pages[pages.len() - 1].contains("4. Notes"));
}

#[test]
fn test_uncompressed_output_contains_text() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "data.csv", CITY_DATA);
    let output = dir.path().join("report.pdf");

    ReportConfig::new()
        .with_input(&input)
        .with_output(&output)
        .with_render_options(RenderOptions::new().with_compression(false))
        .run()
        .unwrap();

    let bytes = fs::read(&output).unwrap();
    let needle = b"(4. Notes) Tj";
    assert!(bytes.windows(needle.len()).any(|w| w == needle));
}

#[test]
fn test_tab_separated_input() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "data.tsv", "City\tTemperature\nX\t1.5\nY\t2.5\n");

    let doc = ReportConfig::new().with_input(&input).build_document().unwrap();
    let text = to_text(&doc).unwrap();

    assert!(text.contains("Columns: City, Temperature."));
    assert!(text.contains("Y\t2.50"));
}
