use super::*;
use crate::foundation::core::GridPoint;

fn pts(w: &Wire) -> Vec<(i64, i64)> {
    w.points().iter().map(|p| (p.x, p.y)).collect()
}

#[test]
fn parses_dims_and_wires() {
    let f = parse_wire_text("8 6\n2\n0 0 5 0 5 3\n1 1 1 4\n").unwrap();
    assert_eq!(f.dims, GridDims::new(8, 6));
    assert_eq!(f.header, "2");
    assert_eq!(f.wires.len(), 2);
    assert_eq!(pts(&f.wires[0]), vec![(0, 0), (5, 0), (5, 3)]);
    assert_eq!(pts(&f.wires[1]), vec![(1, 1), (1, 4)]);
    assert_eq!(f.report, ParseReport::default());
}

#[test]
fn second_line_is_never_interpreted() {
    let f = parse_wire_text("4 4\n0 0 3 3\n1 1 2 2\n").unwrap();
    assert_eq!(f.wires.len(), 1);
    assert_eq!(pts(&f.wires[0]), vec![(1, 1), (2, 2)]);
}

#[test]
fn blank_lines_and_padding_are_ignored() {
    let f = parse_wire_text("\n\n  3 2  \n\nignored\n\n\t0 0   2 1\t\n\n").unwrap();
    assert_eq!(f.dims, GridDims::new(3, 2));
    assert_eq!(f.wires.len(), 1);
    assert_eq!(f.wires[0].start(), GridPoint::new(0, 0));
    assert_eq!(f.wires[0].end(), GridPoint::new(2, 1));
}

#[test]
fn odd_trailing_integer_is_dropped() {
    let f = parse_wire_text("10 10\nx\n0 0 5 5 9\n").unwrap();
    assert_eq!(pts(&f.wires[0]), vec![(0, 0), (5, 5)]);
    assert_eq!(f.report.odd_trailing_dropped, 1);
}

#[test]
fn short_and_non_numeric_lines_are_skipped() {
    let text = "10 10\nx\n1 2 3\n0 0 a 4\n2 2 2 8\n7\n";
    let f = parse_wire_text(text).unwrap();
    assert_eq!(f.wires.len(), 1);
    assert_eq!(pts(&f.wires[0]), vec![(2, 2), (2, 8)]);
    assert_eq!(f.report.short_lines, 2);
    assert_eq!(f.report.non_numeric_lines, 1);
    assert_eq!(f.report.skipped_lines(), 3);
}

#[test]
fn signed_coordinates_are_accepted() {
    let f = parse_wire_text("5 5\n1\n-1 0 +3 -2\n").unwrap();
    assert_eq!(pts(&f.wires[0]), vec![(-1, 0), (3, -2)]);
}

#[test]
fn header_only_file_has_no_wires() {
    let f = parse_wire_text("12 7\n0\n").unwrap();
    assert_eq!(f.dims, GridDims::new(12, 7));
    assert!(f.wires.is_empty());
}

#[test]
fn fewer_than_two_lines_is_fatal() {
    assert!(matches!(
        parse_wire_text(""),
        Err(PlotError::TooFewLines { found: 0 })
    ));
    assert!(matches!(
        parse_wire_text("\n5 5\n\n"),
        Err(PlotError::TooFewLines { found: 1 })
    ));
}

#[test]
fn malformed_dimension_line_is_fatal() {
    for text in [
        "5\nx\n",
        "five 5\nx\n",
        "5 -2\nx\n",
        "5 2.5\nx\n",
        "5 4294967296\nx\n",
    ] {
        let err = parse_wire_text(text).unwrap_err();
        assert!(
            matches!(err, PlotError::Dimensions(_)),
            "{text:?} gave {err}"
        );
    }
}

#[test]
fn signed_zero_dimension_is_zero() {
    let f = parse_wire_text("-0 +3\nx\n").unwrap();
    assert_eq!(f.dims, GridDims::new(0, 3));
}

#[test]
fn extra_dimension_tokens_are_ignored() {
    let f = parse_wire_text("5 6 7\nx\n").unwrap();
    assert_eq!(f.dims, GridDims::new(5, 6));
}

#[test]
fn parsing_is_deterministic() {
    let text = "20 20\n3\n0 0 10 0 10 10\n5 5 5 15\nbad line\n1 1 19 1\n";
    assert_eq!(parse_wire_text(text).unwrap(), parse_wire_text(text).unwrap());
}

#[test]
fn missing_file_names_the_path() {
    let path = Path::new("target/definitely/not/here.txt");
    let err = read_wire_file(path).unwrap_err();
    assert!(matches!(err, PlotError::Io { .. }));
    assert!(err.to_string().contains("here.txt"));
}
