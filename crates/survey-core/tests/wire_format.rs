//! Decoding of hand-written documents in the persisted and request formats.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use survey_core::entities::{Answer, Response, Snapshot, Survey};
use survey_core::ids::Id;

const PERSISTED: &str = r#"{
  "surveys": {
    "01HZX3N7Q8R9S0T1V2W3X4Y5Z6": {
      "id": "01HZX3N7Q8R9S0T1V2W3X4Y5Z6",
      "name": "Onboarding",
      "questions": [
        {"id": "01HZX3N7Q8R9S0T1V2W3X4Y5Z7", "question": "Was setup easy?"}
      ],
      "created_at": "2024-06-01T12:00:00Z",
      "updated_at": "2024-06-02T08:30:00Z"
    }
  },
  "responses": {
    "01HZX3N7Q8R9S0T1V2W3X4Y5Z6": [
      {
        "id": "01HZX3N7Q8R9S0T1V2W3X4Y5Z8",
        "survey_id": "01HZX3N7Q8R9S0T1V2W3X4Y5Z6",
        "answers": [{"question_id": "01HZX3N7Q8R9S0T1V2W3X4Y5Z7", "answer": true}],
        "created_at": "2024-06-03T00:00:00Z"
      }
    ]
  }
}"#;

fn id(raw: &str) -> Id {
    raw.parse().unwrap()
}

#[test]
fn persisted_document_decodes() {
    let snapshot: Snapshot = serde_json::from_str(PERSISTED).unwrap();
    let survey_id = id("01HZX3N7Q8R9S0T1V2W3X4Y5Z6");

    let survey = &snapshot.surveys[&survey_id];
    assert_eq!(survey.name, "Onboarding");
    assert_eq!(survey.questions[0].question, "Was setup easy?");
    assert_eq!(
        survey.created_at,
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    );
    assert_eq!(
        survey.updated_at,
        Utc.with_ymd_and_hms(2024, 6, 2, 8, 30, 0).unwrap()
    );

    let responses = &snapshot.responses[&survey_id];
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].survey_id, survey_id);
    assert_eq!(
        responses[0].answers,
        vec![Answer::new(id("01HZX3N7Q8R9S0T1V2W3X4Y5Z7"), true)]
    );
    assert_eq!(snapshot.response_count(), 1);
}

#[test]
fn re_encoding_is_stable() {
    let snapshot: Snapshot = serde_json::from_str(PERSISTED).unwrap();
    let encoded = serde_json::to_value(&snapshot).unwrap();
    let expected: serde_json::Value = serde_json::from_str(PERSISTED).unwrap();
    assert_eq!(encoded, expected);
}

#[test]
fn response_body_may_omit_assigned_fields() {
    let response: Response = serde_json::from_str(
        r#"{"survey_id": "01HZX3N7Q8R9S0T1V2W3X4Y5Z6", "answers": [{"answer": false}]}"#,
    )
    .unwrap();
    assert!(response.id.is_nil());
    assert!(response.answers[0].question_id.is_nil());
    assert!(!response.answers[0].answer);
}

#[test]
fn unassigned_ids_encode_as_empty_strings() {
    let draft = Survey::draft("S", ["Q"]);
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value["id"], "");
    assert_eq!(value["questions"][0]["id"], "");
}

#[test]
fn surveys_iterate_in_id_order() {
    let doc = r#"{"surveys": {
        "01HZX3N7Q8R9S0T1V2W3X4Y5Z9": {"name": "later"},
        "01HZX3N7Q8R9S0T1V2W3X4Y5Z1": {"name": "earlier"}
    }}"#;
    let snapshot: Snapshot = serde_json::from_str(doc).unwrap();
    let names: Vec<_> = snapshot.surveys.values().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["earlier", "later"]);
}
