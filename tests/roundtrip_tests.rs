//! Export/import round trips.
//!
//! Whatever the editor exports must come back with the same names, rows,
//! tags, colors, confirms, border and column.

use huntset::exporter::export_sets;
use huntset::importer::parse_content;
use huntset::models::{Column, Confirm, HuntSet, Piece, PieceRow};

/// Everything except the id, which the importer always reassigns.
fn same_content(a: &HuntSet, b: &HuntSet) -> bool {
    a.p1_name == b.p1_name
        && a.rows == b.rows
        && a.border_color == b.border_color
        && a.column == b.column
        && a.confirms == b.confirms
}

fn roundtrip(sets: &[HuntSet]) -> Vec<HuntSet> {
    parse_content(&export_sets(sets))
}

fn rich_set() -> HuntSet {
    let mut set = HuntSet::new(1);
    set.p1_name = "Familia de calabazas.".to_string();
    set.border_color = Some("#e06666".to_string());
    set.column = Column::Center;
    set.rows = vec![
        PieceRow::new(
            Piece::new("Muro de roca").with_color("#cccccc"),
            vec![Piece::new("KOTH").with_tag("disambiguation"), Piece::new("⛪🙏")],
        ),
        PieceRow::new(
            Piece::new("Lugar tenebroso.").with_tag("dangerousmaterial"),
            vec![Piece::new("La calavera indica el lugar.")],
        ),
    ];
    set.confirms.push(Confirm {
        confirmed: "Familia de calabazas.".to_string(),
        confirmed_by: "Otra pista".to_string(),
    });
    set
}

#[test]
fn test_roundtrip_rich_set() {
    let original = rich_set();
    let back = roundtrip(std::slice::from_ref(&original));
    assert_eq!(back.len(), 1);
    assert!(same_content(&original, &back[0]), "{:#?}\n!=\n{:#?}", original, back[0]);
}

#[test]
fn test_roundtrip_preserves_order() {
    let names = ["zeta", "alpha", "mid"];
    let sets: Vec<HuntSet> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mut set = HuntSet::new(i as u64 + 1);
            set.p1_name = name.to_string();
            set.rows[0] = PieceRow::new(Piece::new("p2"), vec![Piece::new("p3")]);
            set
        })
        .collect();
    let back = roundtrip(&sets);
    let back_names: Vec<&str> = back.iter().map(|s| s.p1_name.as_str()).collect();
    assert_eq!(back_names, names);
}

#[test]
fn test_roundtrip_special_characters() {
    let mut set = HuntSet::new(1);
    set.p1_name = r#"Say "hi", (then) [leave]; \done"#.to_string();
    set.rows[0] = PieceRow::new(
        Piece::new("a, b").with_color("#fff"),
        vec![
            Piece::new("{ not an object }"),
            Piece::new("tab\there"),
            Piece::new("tags: [bogus]").with_color("red"),
            Piece::new("color: \"blue\", piece: \"x\"").with_tag("disambiguation"),
        ],
    );
    let back = roundtrip(std::slice::from_ref(&set));
    assert_eq!(back.len(), 1);
    assert!(same_content(&set, &back[0]), "{:#?}", back[0]);
}

#[test]
fn test_roundtrip_skips_unnamed() {
    let mut named = HuntSet::new(1);
    named.p1_name = "kept".to_string();
    let mut blank = HuntSet::new(2);
    blank.p1_name = "   ".to_string();
    let back = roundtrip(&[blank, named]);
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].p1_name, "kept");
}

#[test]
fn test_roundtrip_is_stable() {
    let text = export_sets(&[rich_set()]);
    let again = export_sets(&parse_content(&text));
    assert_eq!(text, again);
}

#[test]
fn test_roundtrip_every_column() {
    for column in Column::ALL {
        let mut set = HuntSet::new(1);
        set.p1_name = "c".to_string();
        set.column = column;
        let back = roundtrip(std::slice::from_ref(&set));
        assert_eq!(back[0].column, column);
    }
}
