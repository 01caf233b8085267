mod common;

use common::read_fixture;
use reportkit::Submission;

#[test]
fn parse_submission() {
    let content = read_fixture("submissions/submission.json");
    let submission: Submission = serde_json::from_str(&content).unwrap();

    let recent = &submission.filings.recent;
    assert_eq!(recent.form.len(), 3);
    assert_eq!(recent.accession_number.len(), 3);
    assert_eq!(recent.filing_date.len(), 3);
}

#[test]
fn locates_the_latest_annual_report() {
    let content = read_fixture("submissions/submission.json");
    let submission: Submission = serde_json::from_str(&content).unwrap();
    let recent = &submission.filings.recent;

    assert_eq!(recent.position_of("10-K"), Some(1));

    let located = recent.latest_of_type("10-K").unwrap();
    assert_eq!(located.form, "10-K");
    assert_eq!(located.accession_number, "0000723531-24-000012");
    assert_eq!(located.filing_date, "2024-05-31");
}

#[test]
fn company_without_annual_report_locates_nothing() {
    let content = read_fixture("submissions/submission_no_10k.json");
    let submission: Submission = serde_json::from_str(&content).unwrap();
    let recent = &submission.filings.recent;

    assert_eq!(recent.position_of("10-K"), None);
    assert!(recent.latest_of_type("10-K").is_none());
    // Other form types are still reachable.
    assert_eq!(recent.position_of("10-Q"), Some(1));
}

#[test]
fn submission_without_filings_section_is_empty_not_an_error() {
    let submission: Submission = serde_json::from_str(r#"{"cik": "1"}"#).unwrap();
    assert!(submission.filings.recent.form.is_empty());
    assert!(submission.filings.recent.latest_of_type("10-K").is_none());
}
