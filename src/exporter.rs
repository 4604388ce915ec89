//! Set-file writer
//!
//! Renders the sets of one level as the TypeScript-like source consumed by the
//! hunting tool. Output is deterministic: the same sets always produce the same
//! bytes.
//!
//! ```text
//! import { PieceSet, PieceSets } from "../../PieceSetV2";
//! import Code from "../../Code";
//!
//! const sets: PieceSets = new PieceSets();
//!
//! sets.addSet("Alpha", new PieceSet("p2", ["a", "b"]))
//!     .addPieces({ piece: "q2", tags: [PieceTag.DISAMBIGUATION] }, "c")
//!     .setColumn("left");
//! ...
//! ```

use crate::models::{Column, HuntSet, Piece};

/// Prefix of tag identifiers inside tag-list literals.
pub const TAG_PREFIX: &str = "PieceTag.";

/// Quote a string literal, escaping backslashes, quotes and line breaks.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render one piece: a bare string when plain, a structured literal otherwise.
pub fn piece_expr(piece: &Piece) -> String {
    if piece.is_plain() {
        return quote(&piece.text);
    }

    let tags = piece
        .tags
        .iter()
        .map(|t| format!("{}{}", TAG_PREFIX, t.to_uppercase()))
        .collect::<Vec<_>>()
        .join(", ");

    let mut obj = format!("{{ piece: {}, tags: [{}]", quote(&piece.text), tags);
    if let Some(color) = &piece.color {
        obj.push_str(&format!(", color: {}", quote(color)));
    }
    obj.push_str(" }");
    obj
}

/// Render a P3 sequence: a single piece stays bare, several become a list.
pub fn p3s_expr(p3s: &[Piece]) -> String {
    if p3s.len() == 1 {
        return piece_expr(&p3s[0]);
    }
    let items: Vec<String> = p3s.iter().map(piece_expr).collect();
    format!("[{}]", items.join(", "))
}

fn uses_tags(sets: &[HuntSet]) -> bool {
    sets.iter().any(|set| {
        set.rows
            .iter()
            .any(|row| !row.p2.tags.is_empty() || row.p3s.iter().any(|p3| !p3.tags.is_empty()))
    })
}

fn write_set(out: &mut String, set: &HuntSet) {
    let (p2, p3s) = match set.rows.first() {
        Some(row) => (piece_expr(&row.p2), p3s_expr(&row.p3s)),
        None => (quote(""), quote("")),
    };
    out.push_str(&format!(
        "sets.addSet({}, new PieceSet({}, {}))",
        quote(&set.p1_name),
        p2,
        p3s
    ));

    for row in set.rows.iter().skip(1) {
        out.push_str(&format!(
            "\n\t.addPieces({}, {})",
            piece_expr(&row.p2),
            p3s_expr(&row.p3s)
        ));
    }

    for confirm in &set.confirms {
        out.push_str(&format!(
            "\n\t.addConfirm({}, {})",
            quote(&confirm.confirmed),
            quote(&confirm.confirmed_by)
        ));
    }

    if let Some(color) = &set.border_color {
        out.push_str(&format!("\n\t.setBorderColor({})", quote(color)));
    }

    if set.column != Column::Unplaced {
        out.push_str(&format!("\n\t.setColumn({})", quote(set.column.as_str())));
    }

    out.push_str(";\n\n");
}

/// Render the sets of a level as set-file source.
///
/// Sets with an empty or whitespace-only primary name are skipped. Nothing
/// else is validated here; empty texts are written as empty literals.
pub fn export_sets(sets: &[HuntSet]) -> String {
    let mut ts = String::new();

    // Header
    ts.push_str(&format!(
        "import {{ PieceSet, PieceSets{} }} from \"../../PieceSetV2\";\n",
        if uses_tags(sets) { ", PieceTag" } else { "" }
    ));
    ts.push_str("import Code from \"../../Code\";\n\n");
    ts.push_str("const sets: PieceSets = new PieceSets();\n\n");

    for set in sets.iter().filter(|s| !s.is_unnamed()) {
        write_set(&mut ts, set);
    }

    // Codes footer, filled by the consuming tool at runtime
    ts.push_str("const codes: Code[] = [];\n");
    ts.push_str("for (const key of sets.keys()) {\n");
    ts.push_str("\tconst set = sets.get(key);\n");
    ts.push_str("\tif (set?.code) {\n");
    ts.push_str("\t\tcodes.push({ piece: key, code: set.code });\n");
    ts.push_str("\t}\n");
    ts.push_str("}\n\n");
    ts.push_str("export { sets, codes };\n");

    ts
}

/// Named sets still in the unplaced column.
///
/// The editor asks for confirmation before exporting when this is non-empty.
pub fn unplaced_sets(sets: &[HuntSet]) -> Vec<&HuntSet> {
    sets.iter()
        .filter(|s| s.column == Column::Unplaced && !s.is_unnamed())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Confirm, PieceRow};

    fn named(name: &str) -> HuntSet {
        let mut set = HuntSet::new(1);
        set.p1_name = name.to_string();
        set
    }

    #[test]
    fn test_piece_plain() {
        assert_eq!(piece_expr(&Piece::new("abc")), "\"abc\"");
        assert_eq!(piece_expr(&Piece::default()), "\"\"");
    }

    #[test]
    fn test_piece_with_tags_and_color() {
        let piece = Piece::new("abc").with_tag("disambiguation").with_color("#ea9999");
        assert_eq!(
            piece_expr(&piece),
            "{ piece: \"abc\", tags: [PieceTag.DISAMBIGUATION], color: \"#ea9999\" }"
        );
    }

    #[test]
    fn test_piece_with_color_only() {
        let piece = Piece::new("abc").with_color("red");
        assert_eq!(piece_expr(&piece), "{ piece: \"abc\", tags: [], color: \"red\" }");
    }

    #[test]
    fn test_p3s_single_and_many() {
        assert_eq!(p3s_expr(&[Piece::new("a")]), "\"a\"");
        assert_eq!(p3s_expr(&[Piece::new("a"), Piece::new("b")]), "[\"a\", \"b\"]");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("say \"hi\""), r#""say \"hi\"""#);
        assert_eq!(quote("a\\b"), r#""a\\b""#);
        assert_eq!(quote("a\nb"), r#""a\nb""#);
    }

    #[test]
    fn test_empty_input_has_header_and_footer() {
        let out = export_sets(&[]);
        assert!(out.starts_with("import { PieceSet, PieceSets } from \"../../PieceSetV2\";\n"));
        assert!(out.contains("const sets: PieceSets = new PieceSets();"));
        assert!(out.contains("const codes: Code[] = [];"));
        assert!(out.ends_with("export { sets, codes };\n"));
        assert!(!out.contains("sets.addSet"));
    }

    #[test]
    fn test_unnamed_sets_are_skipped() {
        let mut blank = named("   ");
        blank.border_color = Some("red".to_string());
        let out = export_sets(&[blank, named("")]);
        assert!(!out.contains("sets.addSet"));
        assert!(out.contains("export { sets, codes };"));
    }

    #[test]
    fn test_full_set() {
        let mut set = named("Alpha");
        set.rows[0] = PieceRow::new(Piece::new("p2"), vec![Piece::new("a"), Piece::new("b")]);
        set.rows.push(PieceRow::new(
            Piece::new("q2").with_tag("dangerousmaterial"),
            vec![Piece::new("c")],
        ));
        set.confirms.push(Confirm {
            confirmed: "Alpha".to_string(),
            confirmed_by: "Beta".to_string(),
        });
        set.border_color = Some("blue".to_string());
        set.column = Column::Right;

        let out = export_sets(&[set]);
        let expected = "sets.addSet(\"Alpha\", new PieceSet(\"p2\", [\"a\", \"b\"]))\n\
            \t.addPieces({ piece: \"q2\", tags: [PieceTag.DANGEROUSMATERIAL] }, \"c\")\n\
            \t.addConfirm(\"Alpha\", \"Beta\")\n\
            \t.setBorderColor(\"blue\")\n\
            \t.setColumn(\"right\");\n\n";
        assert!(out.contains(expected), "got:\n{}", out);
        assert!(out.starts_with("import { PieceSet, PieceSets, PieceTag }"));
    }

    #[test]
    fn test_defaults_are_omitted() {
        let out = export_sets(&[named("Alpha")]);
        assert!(out.contains("sets.addSet(\"Alpha\", new PieceSet(\"\", \"\"));\n\n"));
        assert!(!out.contains("setBorderColor"));
        assert!(!out.contains("setColumn"));
    }

    #[test]
    fn test_deterministic() {
        let mut set = named("Alpha");
        set.rows[0].p2 = Piece::new("x").with_tag("a").with_tag("b");
        let sets = vec![set, named("Beta")];
        assert_eq!(export_sets(&sets), export_sets(&sets));
    }

    #[test]
    fn test_unplaced_sets() {
        let mut placed = named("Placed");
        placed.column = Column::Left;
        let sets = vec![placed, named("Loose"), named("")];
        let unplaced = unplaced_sets(&sets);
        assert_eq!(unplaced.len(), 1);
        assert_eq!(unplaced[0].p1_name, "Loose");
    }
}
