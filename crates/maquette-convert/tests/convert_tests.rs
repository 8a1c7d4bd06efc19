//! End-to-end conversion behavior: filtering, flow, styling, geometry.

use maquette_convert::{
    ContentSignal, DesignNode, NodeKind, Viewport, compute_box, convert_document, extract_palette,
};
use maquette_css::EffectiveStyle;

fn convert(html: &str) -> DesignNode {
    convert_document(html, Viewport::default())
}

fn children(node: &DesignNode) -> &[DesignNode] {
    node.children.as_deref().unwrap_or(&[])
}

#[test]
fn block_width_fills_parent_content_width() {
    let mut style = EffectiveStyle::new();
    style.set("display", "block");
    let computed = compute_box(&style, ContentSignal::default(), 1200.0, 0.0, 0.0);
    assert_eq!(computed.outer.w, 1200);
}

#[test]
fn block_width_subtracts_margins() {
    let mut style = EffectiveStyle::new();
    style.set("display", "block");
    style.set("margin", "0 10px");
    let computed = compute_box(&style, ContentSignal::default(), 1200.0, 0.0, 0.0);
    assert_eq!(computed.outer.w, 1180);
    assert_eq!(computed.outer.x, 10);
}

#[test]
fn longhand_side_overrides_spacing_shorthand() {
    let mut style = EffectiveStyle::new();
    style.set("display", "block");
    style.set("margin", "10px");
    style.set("marginLeft", "30px");
    let computed = compute_box(&style, ContentSignal::default(), 1200.0, 0.0, 0.0);
    // left 30 + right 10 off the auto width; x pushed by the longhand
    assert_eq!(computed.outer.w, 1160);
    assert_eq!(computed.outer.x, 30);
    assert_eq!(computed.outer.y, 10);
}

#[test]
fn percentage_width_resolves_against_parent() {
    let mut style = EffectiveStyle::new();
    style.set("width", "50%");
    let computed = compute_box(&style, ContentSignal::default(), 1200.0, 0.0, 0.0);
    assert_eq!(computed.outer.w, 600);
}

#[test]
fn inline_elements_fall_back_to_fixed_width() {
    let mut style = EffectiveStyle::new();
    style.set("display", "inline");
    let computed = compute_box(&style, ContentSignal::default(), 1200.0, 0.0, 0.0);
    assert_eq!(computed.outer.w, 100);
}

#[test]
fn explicit_height_wins_over_estimation() {
    let mut style = EffectiveStyle::new();
    style.set("height", "250px");
    let computed = compute_box(&style, ContentSignal::default(), 1200.0, 0.0, 0.0);
    assert_eq!(computed.outer.h, 250);
}

#[test]
fn empty_leaf_height_is_one_line() {
    let mut style = EffectiveStyle::new();
    style.set("fontSize", "20px");
    let computed = compute_box(&style, ContentSignal::default(), 1200.0, 0.0, 0.0);
    // 20 x 1.4
    assert_eq!(computed.outer.h, 28);
}

#[test]
fn childless_container_estimates_one_row_per_child() {
    let mut style = EffectiveStyle::new();
    style.set("fontSize", "10px");
    let content = ContentSignal {
        text: "",
        child_count: 3,
    };
    let computed = compute_box(&style, content, 1200.0, 0.0, 0.0);
    assert_eq!(computed.outer.h, 42);
}

#[test]
fn long_text_wraps_into_multiple_lines() {
    let mut style = EffectiveStyle::new();
    style.set("fontSize", "16px");
    let text = "x".repeat(500);
    let content = ContentSignal {
        text: &text,
        child_count: 0,
    };
    // charsPerLine = floor(400 / 8) = 50, lines = 10, h = 10 x 22.4
    let computed = compute_box(&style, content, 400.0, 0.0, 0.0);
    assert_eq!(computed.outer.h, 224);
}

#[test]
fn h1_defaults_survive_without_any_stylesheet() {
    let tree = convert("<html><body><h1>Hi</h1></body></html>");
    let h1 = &children(&tree)[0];
    assert_eq!(h1.kind, NodeKind::Text);
    assert_eq!(h1.name, "h1");
    assert_eq!(h1.style.font_weight.as_deref(), Some("bold"));
    assert_eq!(h1.style.font_size.as_deref(), Some("32px"));
}

#[test]
fn end_to_end_heading_and_paragraph() {
    let tree = convert(
        "<html><body><h1>Hi</h1><p style=\"color:red\">Hello world</p></body></html>",
    );
    assert_eq!(tree.kind, NodeKind::Frame);
    assert_eq!(tree.name, "body");
    assert_eq!(tree.style.background.as_deref(), Some("#ffffff"));
    // body margin 8px
    assert_eq!(tree.layout.x, 8);
    assert_eq!(tree.layout.y, 8);

    let kids = children(&tree);
    assert_eq!(kids.len(), 2);

    let h1 = &kids[0];
    assert_eq!(h1.kind, NodeKind::Text);
    assert_eq!(h1.text.as_deref(), Some("Hi"));
    assert_eq!(h1.style.font_weight.as_deref(), Some("bold"));
    assert_eq!(h1.style.font_size.as_deref(), Some("32px"));

    let p = &kids[1];
    assert_eq!(p.kind, NodeKind::Text);
    assert_eq!(p.text.as_deref(), Some("Hello world"));
    assert_eq!(p.style.color.as_deref(), Some("red"));
    assert!(p.layout.y >= h1.layout.y + h1.layout.h);
}

#[test]
fn siblings_never_overlap_vertically() {
    let tree = convert(
        "<html><body><div>a</div><p>b</p><div><span>c</span></div><h2>d</h2></body></html>",
    );
    let kids = children(&tree);
    assert!(kids.len() >= 2);
    for pair in kids.windows(2) {
        assert!(
            pair[1].layout.y >= pair[0].layout.y + pair[0].layout.h,
            "{} at y={} overlaps {} ending at {}",
            pair[1].name,
            pair[1].layout.y,
            pair[0].name,
            pair[0].layout.y + pair[0].layout.h
        );
    }
}

#[test]
fn non_visual_tags_produce_no_nodes() {
    let tree = convert(
        "<html><head><meta charset=\"utf-8\"><link rel=\"x\" href=\"y\"><title>t</title></head>\
         <body><script>var x = 1;</script><style>p { color: red }</style>\
         <noscript>no</noscript><p>only me</p></body></html>",
    );
    let kids = children(&tree);
    assert_eq!(kids.len(), 1);
    assert_eq!(kids[0].name, "p");
}

#[test]
fn display_none_subtree_is_dropped_and_consumes_no_flow() {
    let tree = convert(
        "<html><body><p>first</p>\
         <div style=\"display:none\"><p>hidden</p><p>also hidden</p></div>\
         <p>second</p></body></html>",
    );
    let kids = children(&tree);
    assert_eq!(kids.len(), 2);
    let with_gap = convert("<html><body><p>first</p><p>second</p></body></html>");
    // The hidden div must not have advanced the cursor: same geometry as a
    // document without it.
    assert_eq!(kids[1].layout, children(&with_gap)[1].layout);
}

#[test]
fn visibility_hidden_behaves_like_display_none() {
    let tree = convert(
        "<html><body><div style=\"visibility:hidden\"><p>x</p></div><p>seen</p></body></html>",
    );
    let kids = children(&tree);
    assert_eq!(kids.len(), 1);
    assert_eq!(kids[0].text.as_deref(), Some("seen"));
}

#[test]
fn transparent_background_never_emits_a_key() {
    let tree = convert(
        "<html><body><div style=\"background:transparent\">x</div></body></html>",
    );
    assert!(children(&tree)[0].style.background.is_none());
}

#[test]
fn classification_ignores_computed_style() {
    let tree = convert(
        "<html><body><p style=\"display:flex\">still text</p>\
         <div style=\"display:inline\">still frame</div></body></html>",
    );
    let kids = children(&tree);
    assert_eq!(kids[0].kind, NodeKind::Text);
    assert_eq!(kids[1].kind, NodeKind::Frame);
}

#[test]
fn image_nodes_carry_src() {
    let tree = convert("<html><body><img src=\"logo.png\"></body></html>");
    let img = &children(&tree)[0];
    assert_eq!(img.kind, NodeKind::Image);
    assert_eq!(img.src.as_deref(), Some("logo.png"));
}

#[test]
fn id_and_classes_are_attached() {
    let tree = convert(
        "<html><body><div id=\"hero\" class=\"wide dark\">x</div></body></html>",
    );
    let div = &children(&tree)[0];
    assert_eq!(div.id.as_deref(), Some("hero"));
    assert_eq!(
        div.classes.as_deref(),
        Some(&["wide".to_string(), "dark".to_string()][..])
    );
}

#[test]
fn text_is_only_attached_to_text_nodes() {
    let tree = convert("<html><body><div>frame text</div><p>para</p></body></html>");
    let kids = children(&tree);
    assert!(kids[0].text.is_none());
    assert_eq!(kids[1].text.as_deref(), Some("para"));
}

#[test]
fn missing_body_yields_viewport_frame() {
    let tree = convert("<div>no body here</div>");
    assert_eq!(tree.kind, NodeKind::Frame);
    assert_eq!(tree.name, "body");
    assert_eq!(tree.layout.w, 1200);
    assert_eq!(tree.layout.h, 800);
    assert_eq!(tree.style.background.as_deref(), Some("#ffffff"));
    assert!(tree.children.is_none());
}

#[test]
fn empty_input_yields_viewport_frame() {
    let tree = convert("");
    assert_eq!(tree.layout.w, 1200);
    assert_eq!(tree.layout.h, 800);
}

#[test]
fn custom_viewport_drives_root_width() {
    let viewport = Viewport {
        width: 390.0,
        height: 844.0,
    };
    let tree = convert_document("<html><body><div>x</div></body></html>", viewport);
    // body fills 390 minus 8px margins
    assert_eq!(tree.layout.w, 374);
}

#[test]
fn palette_walks_the_whole_tree_in_order() {
    let tree = convert(
        "<html><head><style>\
         .a { background: #ff0000; color: #ffffff }\
         .b { border: 1px solid #00ff00 }\
         </style></head>\
         <body><div class=\"a\">x</div><div class=\"b\">y</div></body></html>",
    );
    let palette = extract_palette(&tree);
    // body background/color first, then document order.
    assert_eq!(
        palette,
        vec!["#ffffff", "#000000", "#ff0000", "#00ff00"]
    );
}

#[test]
fn palette_extraction_is_idempotent() {
    let tree = convert("<html><body><p style=\"color:teal\">x</p></body></html>");
    assert_eq!(extract_palette(&tree), extract_palette(&tree));
}

#[test]
fn json_output_uses_the_wire_names() {
    let tree = convert("<html><body><h1 id=\"t\">Hi</h1></body></html>");
    let json = serde_json::to_value(&tree).expect("serializable");
    assert_eq!(json["type"], "frame");
    let h1 = &json["children"][0];
    assert_eq!(h1["type"], "text");
    assert_eq!(h1["name"], "h1");
    assert_eq!(h1["text"], "Hi");
    assert_eq!(h1["style"]["fontSize"], "32px");
    assert_eq!(h1["style"]["fontWeight"], "bold");
    assert!(h1["layout"]["x"].is_number());
    // Omitted fields are absent, not null.
    assert!(h1["style"].get("background").is_none());
    assert!(h1.get("src").is_none());
}
