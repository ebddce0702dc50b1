//! Parameterized tests using test-case
//!
//! Scores and dates are displayed exactly as given, with no clamping,
//! rounding or parsing.

use certview::models::{Scalar, Score};
use test_case::test_case;

use crate::common::{CertificateBuilder, view_of};

#[test_case(Score::from(0), "Score: 0%" ; "zero")]
#[test_case(Score::from(100), "Score: 100%" ; "hundred")]
#[test_case(Score::from(92), "Score: 92%" ; "typical")]
#[test_case(Score::from(-5), "Score: -5%" ; "negative is not clamped")]
#[test_case(Score::from(150), "Score: 150%" ; "over hundred is not clamped")]
#[test_case(Score::from(92.5), "Score: 92.5%" ; "fraction is not rounded")]
#[test_case(Score::from(80.0), "Score: 80%" ; "whole float")]
#[test_case(Score::from("A+"), "Score: A+%" ; "text")]
#[test_case(Score::from(true), "Score: true%" ; "boolean")]
#[test_case(Score(Scalar::Null), "Score: %" ; "null")]
fn score_label(score: Score, expected: &str) {
    let view = view_of(&CertificateBuilder::new().score(score).build());
    assert_eq!(view.score_label, expected);
}

#[test_case("2024-03-01" ; "iso date")]
#[test_case("March 1st, 2024" ; "long form")]
#[test_case("" ; "empty")]
#[test_case("not a date" ; "garbage")]
fn date_is_verbatim(date: &str) {
    let view = view_of(&CertificateBuilder::new().date(date).build());
    assert_eq!(view.date, date);
}

#[test_case(Scalar::from(20_240_301), "20240301" ; "integer")]
#[test_case(Scalar::from(2024.5), "2024.5" ; "float")]
#[test_case(Scalar::from(false), "false" ; "boolean")]
#[test_case(Scalar::Null, "" ; "null")]
fn non_string_date_is_interpolated(date: Scalar, expected: &str) {
    let view = view_of(&CertificateBuilder::new().date(date).build());
    assert_eq!(view.date, expected);
}

#[test_case(r#"{"role":"QA","score":92,"date":20240301}"#, "20240301", "Score: 92%" ; "numeric date")]
#[test_case(r#"{"role":"QA","score":null,"date":"2024-03-01"}"#, "2024-03-01", "Score: %" ; "null score")]
#[test_case(r#"{"role":"QA","score":true,"date":null}"#, "", "Score: true%" ; "bool score null date")]
#[test_case(r#"{"role":"QA","score":"n/a","date":false}"#, "false", "Score: n/a%" ; "text score bool date")]
fn every_scalar_shape_loads(json: &str, date: &str, score_label: &str) {
    let certs = certview::loader::parse_json(json).unwrap();
    let view = view_of(&certs[0]);
    assert_eq!(view.date, date);
    assert_eq!(view.score_label, score_label);
}

#[test_case(Some("abc123"), Some("/dashboard/certificates/view/abc123") ; "present")]
#[test_case(Some(""), None ; "empty")]
#[test_case(None, None ; "absent")]
fn action_target(id: Option<&str>, expected: Option<&str>) {
    let mut builder = CertificateBuilder::new();
    if let Some(id) = id {
        builder = builder.id(id);
    }
    let view = view_of(&builder.build());
    assert_eq!(view.action.href(), expected);
}
