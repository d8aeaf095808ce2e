//! Fixture tests for full decoration passes.
//!
//! Fixtures (.md) live in `fixtures/`; expected output is kept as inline
//! `insta` snapshots of [`snapshot::render`](crate::snapshot::render).

use xi_rope::Rope;

use crate::{
    buffer::Span,
    decorate::build_decorations,
    fold::{FoldRange, FoldSet, toggle_all_blocks},
    scan::find_metadata_blocks,
    snapshot,
};

fn load(name: &str) -> Rope {
    let fixtures_dir = format!("{}/src/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    Rope::from(md.as_str())
}

fn render_with(rope: &Rope, visible: &[Span], folds: &FoldSet) -> String {
    let decorations = build_decorations(rope, visible, folds);
    snapshot::invariants(rope, &find_metadata_blocks(rope), &decorations);
    snapshot::render(rope, &decorations)
}

fn render_fixture(name: &str) -> String {
    let rope = load(name);
    render_with(&rope, &[Span::new(0, rope.len())], &FoldSet::new())
}

#[test]
fn fixture_frontmatter() {
    insta::assert_snapshot!(render_fixture("frontmatter"), @r##"
    0..0 line qm-block
    0..3 widget open-delimiter "---"
    4..4 line qm-block
    4..9 mark qm-keyword-scope "SCOPE"
    11..24 mark qm-keyword-name "project_notes"
    25..25 line qm-block
    25..30 mark qm-yaml-key "title"
    32..43 mark qm-yaml-string "Weekly sync"
    44..44 line qm-block
    44..49 mark qm-yaml-key "count"
    51..53 mark qm-yaml-number "42"
    54..54 line qm-block
    54..58 mark qm-yaml-key "done"
    60..64 mark qm-yaml-boolean "true"
    65..65 line qm-block
    65..69 mark qm-yaml-key "tags"
    71..71 line qm-block
    71..81 mark qm-yaml-comment "# reviewed"
    82..82 line qm-block
    82..85 widget close-delimiter "---"
    98..100 mark qm-bold-delimiter "**"
    100..104 mark qm-bold "bold"
    104..106 mark qm-bold-delimiter "**"
    108..109 mark qm-italic-delimiter "_"
    109..113 mark qm-italic "soft"
    113..114 mark qm-italic-delimiter "_"
    121..122 mark qm-link-bracket "["
    122..126 mark qm-link-text "link"
    126..127 mark qm-link-bracket "]"
    127..128 mark qm-link-paren "("
    128..147 mark qm-link-url "https://example.com"
    147..148 mark qm-link-paren ")"
    "##);
}

#[test]
fn fixture_horizontal_rules() {
    insta::assert_snapshot!(render_fixture("horizontal_rules"), @r#"
    33..34 mark qm-italic-delimiter "*"
    34..38 mark qm-italic "rule"
    38..39 mark qm-italic-delimiter "*"
    41..41 line qm-block
    41..44 widget open-delimiter "---"
    45..45 line qm-block
    45..48 mark qm-yaml-key "key"
    50..55 mark qm-yaml-string "value"
    56..56 line qm-block
    56..59 widget close-delimiter "---"
    65..66 mark qm-link-bracket "["
    66..69 mark qm-link-text "ref"
    69..70 mark qm-link-bracket "]"
    70..71 mark qm-link-bracket "["
    71..72 mark qm-link-reference "1"
    72..73 mark qm-link-bracket "]"
    "#);
}

#[test]
fn fixture_unclosed() {
    insta::assert_snapshot!(render_fixture("unclosed"), @r#"
    13..13 line qm-block
    13..16 widget open-delimiter "---"
    17..17 line qm-block
    17..22 mark qm-keyword-quill "QUILL"
    24..33 mark qm-keyword-name "draft_one"
    34..34 line qm-block
    34..39 mark qm-yaml-key "owner"
    41..44 mark qm-yaml-string "sam"
    "#);
}

#[test]
fn folded_block_drops_only_the_opening_widget() {
    let rope = load("frontmatter");
    let folds = FoldSet::from_ranges([FoldRange::new(0, 85)]);
    let folded = render_with(&rope, &[Span::new(0, rope.len())], &folds);

    let expanded = render_fixture("frontmatter");
    let missing: Vec<_> = expanded
        .lines()
        .filter(|l| !folded.lines().any(|f| f == *l))
        .collect();
    assert_eq!(missing, vec!["0..3 widget open-delimiter \"---\""]);
}

#[test]
fn partial_viewports() {
    // Both ranges start and end mid-line; whole lines are decorated.
    let rope = load("frontmatter");
    let out = render_with(
        &rope,
        &[Span::new(20, 60), Span::new(90, 130)],
        &FoldSet::new(),
    );
    insta::assert_snapshot!(out, @r#"
    4..4 line qm-block
    4..9 mark qm-keyword-scope "SCOPE"
    11..24 mark qm-keyword-name "project_notes"
    25..25 line qm-block
    25..30 mark qm-yaml-key "title"
    32..43 mark qm-yaml-string "Weekly sync"
    44..44 line qm-block
    44..49 mark qm-yaml-key "count"
    51..53 mark qm-yaml-number "42"
    54..54 line qm-block
    54..58 mark qm-yaml-key "done"
    60..64 mark qm-yaml-boolean "true"
    98..100 mark qm-bold-delimiter "**"
    100..104 mark qm-bold "bold"
    104..106 mark qm-bold-delimiter "**"
    108..109 mark qm-italic-delimiter "_"
    109..113 mark qm-italic "soft"
    113..114 mark qm-italic-delimiter "_"
    121..122 mark qm-link-bracket "["
    122..126 mark qm-link-text "link"
    126..127 mark qm-link-bracket "]"
    127..128 mark qm-link-paren "("
    128..147 mark qm-link-url "https://example.com"
    147..148 mark qm-link-paren ")"
    "#);
}

#[test]
fn toggle_round_trip_over_fixtures() {
    for name in ["frontmatter", "horizontal_rules", "unclosed"] {
        let rope = load(name);
        let all = [Span::new(0, rope.len())];
        let mut folds = FoldSet::new();
        let before = render_with(&rope, &all, &folds);

        toggle_all_blocks(&rope, &mut folds);
        assert_eq!(
            folds.ranges().len(),
            find_metadata_blocks(&rope).len(),
            "{name}"
        );
        toggle_all_blocks(&rope, &mut folds);
        assert!(folds.is_empty(), "{name}");
        assert_eq!(render_with(&rope, &all, &folds), before, "{name}");
    }
}

#[test]
fn every_prefix_keeps_invariants() {
    // Simulates typing the document one byte at a time.
    let md = std::fs::read_to_string(format!(
        "{}/src/tests/fixtures/frontmatter.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    for end in (0..=md.len()).filter(|&i| md.is_char_boundary(i)) {
        let rope = Rope::from(&md[..end]);
        render_with(&rope, &[Span::new(0, rope.len())], &FoldSet::new());
    }
}
