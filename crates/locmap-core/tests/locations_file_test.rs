use std::fs;
use std::path::Path;

use locmap_core::codec::{read_locations, to_json_pretty, write_file};
use locmap_core::{LocationsParser, LocmapError, Point, ScatterPlot};

const SAMPLE: &str = "\
Castle.token: {x:101.5,y:220.25}
Castle.powers.1: {x:96.0,y:230.0}
Castle.powers.2: {x:110.0,y:230.0}
Ruins.powers.2: {x:300.0,y:12.5}
Ruins.powers.1: {x:310.0,y:20.0}
Well.token: {x:5.0,y:5.0}
";

fn create_temp_project(files: &[(&str, &str)]) -> tempfile::TempDir {
    let tmp_dir = tempfile::tempdir().expect("failed to create temp dir");
    for (path, content) in files {
        let full_path = tmp_dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&full_path, content).expect("failed to write file");
    }
    tmp_dir
}

#[test]
fn parse_file_keeps_first_appearance_order() {
    let project = create_temp_project(&[("locations.txt", SAMPLE)]);

    let locations = LocationsParser::parse_file(&project.path().join("locations.txt"))
        .expect("sample file should parse");

    let names: Vec<&str> = locations.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Castle", "Ruins", "Well"]);
    assert_eq!(locations["Castle"].token, Some(Point::new(101.5, 220.25)));
    assert!(locations["Ruins"].token.is_none());
    assert_eq!(locations["Ruins"].powers.len(), 2);
    assert!(locations["Well"].powers.is_empty());
}

#[test]
fn written_json_reloads_and_plots() {
    let project = create_temp_project(&[("locations.txt", SAMPLE)]);
    let output = project.path().join("out/locations.json");

    let locations = LocationsParser::parse_file(&project.path().join("locations.txt")).unwrap();
    write_file(&output, &to_json_pretty(&locations).unwrap()).unwrap();

    let reloaded = read_locations(&output).expect("written JSON should load");
    assert_eq!(reloaded, locations);

    let plot = ScatterPlot::from_locations(&reloaded).unwrap();
    let ruins = plot.labels.iter().find(|l| l.text == "Ruins").unwrap();
    assert_eq!(ruins.point, Point::new(310.0, 20.0));
}

#[test]
fn extraction_is_deterministic() {
    let project = create_temp_project(&[("locations.txt", SAMPLE)]);
    let input = project.path().join("locations.txt");
    let output = project.path().join("locations.json");

    let first = {
        let locations = LocationsParser::parse_file(&input).unwrap();
        write_file(&output, &to_json_pretty(&locations).unwrap()).unwrap();
        fs::read(&output).unwrap()
    };
    let second = {
        let locations = LocationsParser::parse_file(&input).unwrap();
        write_file(&output, &to_json_pretty(&locations).unwrap()).unwrap();
        fs::read(&output).unwrap()
    };

    assert_eq!(first, second);
}

#[test]
fn missing_input_is_an_io_error() {
    let err = LocationsParser::parse_file(Path::new("/definitely/not/here/locations.txt"))
        .expect_err("missing file must fail");
    assert!(matches!(err, LocmapError::Io { .. }));
}

#[test]
fn malformed_line_is_reported_with_its_number() {
    let project = create_temp_project(&[(
        "locations.txt",
        "Castle.token: x:1,y:2\nCastle.powers.x: x:1,y:2\n",
    )]);

    let err = LocationsParser::parse_file(&project.path().join("locations.txt")).unwrap_err();
    match err {
        LocmapError::Parse(parse) => assert_eq!(parse.line(), 2),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn invalid_json_is_reported() {
    let project = create_temp_project(&[("locations.json", "{\"A\": {\"token\": 3}}")]);

    let err = read_locations(&project.path().join("locations.json")).unwrap_err();
    assert!(matches!(err, LocmapError::Json { .. }));
}
