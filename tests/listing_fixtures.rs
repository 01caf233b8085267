mod common;

use common::read_fixture;
use reportkit::parse_listing_anchors;

#[test]
fn year_listing_anchors_come_out_in_document_order() {
    let anchors = parse_listing_anchors(&read_fixture("listings/years.html"));

    let texts: Vec<_> = anchors.iter().map(|a| a.text.as_str()).collect();
    assert_eq!(texts, vec!["Parent Directory", "2023", "2024", "index.json"]);
    assert_eq!(anchors[1].href, "2023/");
    assert_eq!(anchors[2].href, "2024/");
}

#[test]
fn quarter_listing_carries_all_four_quarters() {
    let anchors = parse_listing_anchors(&read_fixture("listings/quarters.html"));

    let texts: Vec<_> = anchors.iter().map(|a| a.text.as_str()).collect();
    for quarter in ["QTR1", "QTR2", "QTR3", "QTR4"] {
        assert!(texts.contains(&quarter), "missing {quarter}");
    }
}

#[test]
fn navigation_outside_the_content_region_is_ignored() {
    let anchors = parse_listing_anchors(&read_fixture("listings/years.html"));
    assert!(anchors.iter().all(|a| a.text != "EDGAR Home"));
    assert!(anchors.iter().all(|a| a.text != "Privacy"));
}
