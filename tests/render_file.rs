use geograph_plot::{Error, render_file};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};

const TWO_NODES: &str = r#"{"Nodes":[{"Lat":0,"Lon":0},{"Lat":10,"Lon":10}],"Links":[{"Src":0,"Dst":1}]}"#;

/// Fresh scratch directory per test.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("geograph-plot-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_input(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("graph.json");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn two_node_graph_to_svg() {
    let dir = scratch("svg");
    let input = write_input(&dir, TWO_NODES);
    let out = dir.join("map.svg");

    let summary = render_file(&input, &out).unwrap();
    assert_eq!((summary.nodes, summary.links, summary.transit_nodes), (2, 1, 0));
    // (0,0) to (10,10) is about 1569 km along the sphere.
    assert!((summary.total_link_km - 1569.0).abs() < 5.0, "{}", summary.total_link_km);

    let svg = fs::read_to_string(&out).unwrap();
    assert_eq!(svg.matches("<circle").count(), 2);
    assert_eq!(svg.matches("class=\"link\"").count(), 1);
}

#[test]
fn empty_graph_to_png() {
    let dir = scratch("empty");
    let input = write_input(&dir, r#"{"Nodes":[],"Links":[]}"#);
    let out = dir.join("map.png");

    render_file(&input, &out).unwrap();
    let png = fs::read(&out).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn same_input_gives_identical_output() {
    let dir = scratch("idempotent");
    let input = write_input(&dir, TWO_NODES);
    for ext in ["svg", "png"] {
        let a = dir.join(format!("a.{ext}"));
        let b = dir.join(format!("b.{ext}"));
        render_file(&input, &a).unwrap();
        render_file(&input, &b).unwrap();
        assert!(fs::read(&a).unwrap() == fs::read(&b).unwrap(), "{ext} differs");
    }
}

#[test]
fn out_of_range_link_fails_without_output() {
    let dir = scratch("bad-link");
    let input = write_input(&dir, r#"{"Nodes":[{"Lat":0,"Lon":0}],"Links":[{"Src":0,"Dst":3}]}"#);
    let out = dir.join("map.svg");

    let err = render_file(&input, &out).unwrap_err();
    assert!(matches!(err, Error::Data(_)), "{err}");
    assert!(!out.exists());
}

#[test]
fn missing_nodes_fails_without_output() {
    let dir = scratch("no-nodes");
    let input = write_input(&dir, r#"{"Links":[]}"#);
    let out = dir.join("map.png");

    let err = render_file(&input, &out).unwrap_err();
    assert!(matches!(err, Error::Data(_)), "{err}");
    assert!(!out.exists());
}

#[test]
fn missing_input_is_io_error() {
    let dir = scratch("no-input");
    let err = render_file(&dir.join("absent.json"), &dir.join("map.svg")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "{err}");
}

#[test]
fn unwritable_output_is_io_error() {
    let dir = scratch("no-output-dir");
    let input = write_input(&dir, TWO_NODES);
    let err = render_file(&input, &dir.join("missing").join("map.svg")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "{err}");
}

#[test]
fn unsupported_extension_is_render_error() {
    let dir = scratch("pdf");
    let input = write_input(&dir, TWO_NODES);
    let out = dir.join("map.pdf");

    let err = render_file(&input, &out).unwrap_err();
    assert!(matches!(err, Error::Render(_)), "{err}");
    assert!(!out.exists());
}

#[test]
fn link_between_lon_180_and_lon_minus_180_renders_cleanly() {
    let dir = scratch("antimeridian");
    let input = write_input(
        &dir,
        r#"{"Nodes":[{"Lat":0,"Lon":180},{"Lat":0,"Lon":-180}],"Links":[{"Src":0,"Dst":1}]}"#,
    );
    let svg_out = dir.join("map.svg");
    let summary = render_file(&input, &svg_out).unwrap();
    assert!(summary.total_link_km < 1e-3, "{}", summary.total_link_km);

    let svg = fs::read_to_string(&svg_out).unwrap();
    assert!(!svg.contains("NaN"));
    assert_eq!(svg.matches("class=\"link\"").count(), 1);

    render_file(&input, &dir.join("map.png")).unwrap();
}

#[test]
fn transit_only_nodes_are_drawn_distinctly() {
    let dir = scratch("transit");
    let input = write_input(
        &dir,
        r#"{"Nodes":[{"Lat":0,"Lon":0},{"Lat":10,"Lon":10}],"Links":[],"TransitOnly":[0]}"#,
    );
    let out = dir.join("map.svg");
    let summary = render_file(&input, &out).unwrap();
    assert_eq!(summary.transit_nodes, 1);

    let svg = fs::read_to_string(&out).unwrap();
    assert_eq!(svg.matches("<circle").count(), 2);
    assert_eq!(svg.matches("class=\"transit-node\"").count(), 1);
}
