use std::fs;
use std::path::Path;

use obj_crop::{CropError, classify::Thresholds, crop_file};

fn crop_str(input: &str) -> (String, obj_crop::CropStats) {
    let dir = tempfile::tempdir().unwrap();
    let inp = dir.path().join("in.obj");
    let out = dir.path().join("out.obj");
    fs::write(&inp, input).unwrap();
    let stats = crop_file(&inp, &out, &Thresholds::default()).unwrap();
    (fs::read_to_string(&out).unwrap(), stats)
}

#[test]
fn crops_vertices_and_renumbers_faces() {
    // vertex 2 sits in the foot band, vertex 3 is forward and low
    let input = "\
# a comment
v 0.0 1.0 2.0
v 0.0 0.2 0.0
v 0.0 0.5 1.0
v 0.0 0.9 1.0
vt 0.5 0.5
f 1/1 4/1 1/1
f 1 2 4
";
    let (out, stats) = crop_str(input);
    assert_eq!(stats.vertices_in, 4);
    assert_eq!(stats.vertices_kept, 2);
    assert_eq!(stats.faces_in, 2);
    assert_eq!(stats.faces_kept, 1);

    let lines: Vec<_> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "# cropped by obj_crop",
            "v 0.0 1.0 2.0",
            "v 0.0 0.9 1.0",
            "# a comment",
            "vt 0.5 0.5",
            // vertex 4 became vertex 2; texture suffixes untouched
            "f 1/1 2/1 1/1",
        ]
    );
}

#[test]
fn pass_through_lines_grouped_after_vertices() {
    let input = "\
usemtl shell
v 0.0 1.0 2.0
s 1
v 0.0 2.0 2.0
g body
f 1 2 1
";
    let (out, _) = crop_str(input);
    let lines: Vec<_> = out.lines().collect();
    // pass-through keeps its own relative order but sits between the
    // vertex block and the face block
    assert_eq!(
        lines,
        vec![
            "# cropped by obj_crop",
            "v 0.0 1.0 2.0",
            "v 0.0 2.0 2.0",
            "usemtl shell",
            "s 1",
            "g body",
            "f 1 2 1",
        ]
    );
}

#[test]
fn forward_face_references_resolve() {
    // the face references vertex 2 before its v line appears
    let input = "\
f 2 1 2
v 0.0 1.0 2.0
v 0.0 2.0 2.0
";
    let (out, stats) = crop_str(input);
    assert_eq!(stats.faces_kept, 1);
    assert!(out.lines().any(|l| l == "f 2 1 2"));
}

#[test]
fn empty_input_yields_header_only() {
    let (out, stats) = crop_str("");
    assert_eq!(out, "# cropped by obj_crop\n");
    assert_eq!(stats.vertices_in, 0);
    assert_eq!(stats.vertices_kept, 0);
    assert_eq!(stats.faces_in, 0);
}

#[test]
fn cropping_twice_is_stable() {
    let input = "\
v 0.0 1.0 2.0
v 0.0 0.2 0.0
v 0.0 0.9 1.0
f 1 3 1
f 1 2 3
";
    let (once, first) = crop_str(input);
    let (twice, second) = crop_str(&once);
    assert_eq!(second.vertices_in, first.vertices_kept);
    assert_eq!(second.vertices_kept, first.vertices_kept);
    assert_eq!(second.faces_kept, first.faces_kept);
    // vertex and face records come through byte-identical
    let records = |s: &str| -> Vec<String> {
        s.lines()
            .filter(|l| l.starts_with("v ") || l.starts_with("f "))
            .map(str::to_string)
            .collect()
    };
    assert_eq!(records(&once), records(&twice));
}

#[test]
fn missing_input_reports_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.obj");
    let err = crop_file(
        Path::new("no_such_mesh.obj"),
        &out,
        &Thresholds::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CropError::FileNotFound { .. }));
    assert!(!out.exists());
}

#[test]
fn malformed_vertex_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let inp = dir.path().join("in.obj");
    let out = dir.path().join("out.obj");
    fs::write(&inp, "v 0.0 oops 2.0\n").unwrap();
    let err = crop_file(&inp, &out, &Thresholds::default()).unwrap_err();
    assert!(matches!(err, CropError::MalformedVertex { line: 1, .. }));
    assert!(!out.exists());
}

#[test]
fn malformed_face_reference_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let inp = dir.path().join("in.obj");
    let out = dir.path().join("out.obj");
    fs::write(&inp, "v 0.0 1.0 2.0\nf 1 x 1\n").unwrap();
    let err = crop_file(&inp, &out, &Thresholds::default()).unwrap_err();
    assert!(matches!(err, CropError::MalformedFaceRef { line: 2, .. }));
    assert!(!out.exists());
}

#[test]
fn dangling_face_reference_drops_face_only() {
    let input = "\
v 0.0 1.0 2.0
f 1 5 1
f 1 1 1
";
    let (out, stats) = crop_str(input);
    assert_eq!(stats.faces_in, 2);
    assert_eq!(stats.faces_kept, 1);
    assert!(out.lines().any(|l| l == "f 1 1 1"));
}

#[test]
fn vertex_lines_survive_verbatim() {
    // extra fields and exact float spelling must come through untouched
    let input = "v 0.00 1.50 2.000 1.0\nf 1 1 1\n";
    let (out, _) = crop_str(input);
    assert!(out.lines().any(|l| l == "v 0.00 1.50 2.000 1.0"));
}
