use mathtext::{
    document::{Document, TextAlign},
    generate_html,
    markup::{plain_text, structure_count},
    palette::Palette,
    render, Segment,
};
use pretty_assertions::assert_eq;

const PGCD_SOLUTION: &str = "{#blue:25} = {#red:10}({#slate:2}) + {#green:5}
 {#red:10} = {#green:5}({#slate:2}) + {#orange:0}
 إذن PGCD هو {#green:5}.";

const ROOTS_LESSON: &str = "هل √(a + b) = √a + √b دائماً؟
مثال: √(16/9) = 4/3
√(2*√(3)+1";

#[test]
fn test_pgcd_solution() {
    let document = Document::from_text(PGCD_SOLUTION);
    let aligns: Vec<_> = document.blocks.iter().map(|block| block.align).collect();
    assert_eq!(
        aligns,
        vec![TextAlign::Center, TextAlign::Center, TextAlign::Start]
    );

    let colors: Vec<_> = document.blocks[0]
        .segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::ColoredSpan { color_key, .. } => Some(color_key.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(colors, vec!["blue", "red", "slate", "green"]);

    assert_eq!(plain_text(&document.blocks[2].segments), " إذن PGCD هو 5.");
}

#[test]
fn test_roots_lesson() {
    let lines = render(ROOTS_LESSON);
    assert_eq!(lines.len(), 3);

    assert_eq!(structure_count(&lines[0]), 3);

    // √(16/9) followed by the fraction 4/3
    assert_eq!(
        lines[1],
        vec![
            Segment::text("مثال: "),
            Segment::Root {
                radicand: vec![Segment::Fraction {
                    numerator: vec![Segment::text("16")],
                    denominator: vec![Segment::text("9")],
                }],
            },
            Segment::text("  =  "),
            Segment::Fraction {
                numerator: vec![Segment::text("4")],
                denominator: vec![Segment::text("3")],
            },
        ]
    );

    // The outer root never closes; only the inner one is structure.
    assert_eq!(
        lines[2],
        vec![
            Segment::text("√(2 × "),
            Segment::Root {
                radicand: vec![Segment::text("3")],
            },
            Segment::text(" + 1"),
        ]
    );
}

#[test]
fn test_html_output() {
    let mut palette = Palette::default();
    palette.merge(Palette::from_json(r#"{ "green": "seagreen" }"#).unwrap());

    let html = generate_html(PGCD_SOLUTION, &palette);
    assert_eq!(html.matches("<div class=\"math-line math-formula\">").count(), 2);
    assert_eq!(html.matches("<div class=\"math-line\">").count(), 1);
    assert!(html.contains(r#"<span class="math-color" style="color: seagreen"><span>5</span></span>"#));
    assert!(html.contains(r##"<span class="math-color" style="color: #ea580c"><span>0</span></span>"##));
}

#[test]
fn test_json_tree() {
    let document = Document::from_text("√(1/2)");
    let json = serde_json::to_value(&document).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "blocks": [{
                "segments": [{
                    "kind": "root",
                    "radicand": [{
                        "kind": "fraction",
                        "numerator": [{ "kind": "plain_text", "content": "1" }],
                        "denominator": [{ "kind": "plain_text", "content": "2" }],
                    }],
                }],
                "align": "start",
            }],
        })
    );
}
