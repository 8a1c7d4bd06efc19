//! Tree-construction behavior over the token stream.

use maquette_html::parse_html;

#[test]
fn nested_elements_build_a_tree() {
    let tree = parse_html("<html><body><div><p>hi</p></div></body></html>");
    let body = tree.find_body().expect("body");
    let children = tree.child_elements(body);
    assert_eq!(children.len(), 1);
    let div = children[0];
    assert_eq!(tree.as_element(div).map(|e| e.tag_name.as_str()), Some("div"));
    let p = tree.child_elements(div)[0];
    assert_eq!(tree.direct_text(p), "hi");
}

#[test]
fn attributes_are_parsed() {
    let tree = parse_html("<div id=\"main\" class=\"a b\" data-x=1 hidden></div>");
    let div = tree.find_by_tag(tree.root(), "div").expect("div");
    let element = tree.as_element(div).expect("element");
    assert_eq!(element.id().map(String::as_str), Some("main"));
    assert_eq!(element.class_list(), vec!["a", "b"]);
    assert_eq!(element.attr("data-x"), Some("1"));
    assert_eq!(element.attr("hidden"), Some(""));
}

#[test]
fn duplicate_attributes_keep_the_first() {
    let tree = parse_html("<div id=\"one\" id=\"two\"></div>");
    let div = tree.find_by_tag(tree.root(), "div").expect("div");
    assert_eq!(
        tree.as_element(div).and_then(|e| e.attr("id")),
        Some("one")
    );
}

#[test]
fn void_elements_do_not_swallow_siblings() {
    let tree = parse_html("<body><img src=\"a.png\"><p>after</p></body>");
    let body = tree.find_body().expect("body");
    let children = tree.child_elements(body);
    assert_eq!(children.len(), 2);
    assert_eq!(
        tree.as_element(children[1]).map(|e| e.tag_name.as_str()),
        Some("p")
    );
}

#[test]
fn unmatched_end_tags_are_dropped() {
    let tree = parse_html("<body></span><p>ok</p></body>");
    let body = tree.find_body().expect("body");
    assert_eq!(tree.child_elements(body).len(), 1);
}

#[test]
fn misnested_end_tag_closes_the_nearest_match() {
    let tree = parse_html("<div><span>x</div><p>y</p>");
    // </div> closes both span and div; <p> becomes a sibling of div.
    let root = tree.root();
    let top = tree.child_elements(root);
    assert_eq!(top.len(), 2);
    assert_eq!(tree.as_element(top[1]).map(|e| e.tag_name.as_str()), Some("p"));
}

#[test]
fn raw_text_content_of_style_is_not_parsed_as_markup() {
    let tree = parse_html("<style>p > a { color: red }</style>");
    let style = tree.find_by_tag(tree.root(), "style").expect("style");
    assert_eq!(tree.direct_text(style), "p > a { color: red }");
    assert!(tree.child_elements(style).is_empty());
}

#[test]
fn comments_do_not_contribute_text() {
    let tree = parse_html("<p><!-- note -->visible</p>");
    let p = tree.find_by_tag(tree.root(), "p").expect("p");
    assert_eq!(tree.direct_text(p), "visible");
}

#[test]
fn whitespace_only_text_runs_are_skipped() {
    let tree = parse_html("<div>\n    <p>x</p>\n</div>");
    let div = tree.find_by_tag(tree.root(), "div").expect("div");
    assert_eq!(tree.direct_text(div), "");
}
