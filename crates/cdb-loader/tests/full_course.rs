//! Whole-course loading in strict and partial mode.

mod common;

use pretty_assertions::assert_eq;
use serde_json::json;

use cdb_core::EntityKind;
use cdb_loader::LoadError;

use common::{
    CourseFixture, assessment_json, course_json, course_json_with_sets, instance_json, loader,
    question_json,
};

fn minimal_course() -> CourseFixture {
    let fixture = CourseFixture::new(&course_json());
    fixture
        .question("addVectors", &question_json("Add two vectors"))
        .course_instance("Fa19", &instance_json());
    fixture
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

#[tokio::test]
async fn minimal_course_loads_in_strict_mode() {
    let fixture = minimal_course();
    let data = loader().load_full_course(fixture.path()).await.unwrap();

    let course = data.course.data().unwrap();
    assert_eq!(course.uuid, "5c1a0e3b-9f43-4f6b-8e4e-2d1b7b3c9a10");
    assert_eq!(data.questions.len(), 1);
    assert_eq!(data.questions["addVectors"].data().unwrap().qid, "addVectors");
    assert_eq!(data.course_instances.len(), 1);
    assert!(data.course_instances["Fa19"].assessments.is_empty());
    assert!(data.is_complete());
}

#[tokio::test]
async fn minimal_course_loads_in_partial_mode() {
    let fixture = minimal_course();
    let data = loader()
        .load_full_course_with_partial_results(fixture.path())
        .await
        .unwrap();

    assert_eq!(data.questions.len(), 1);
    assert!(data.questions["addVectors"].is_loaded());
    let instance = &data.course_instances["Fa19"];
    assert_eq!(instance.course_instance.data().unwrap().ciid, "Fa19");
    assert!(instance.assessments.is_empty());
    assert!(data.is_complete());
}

#[tokio::test]
async fn nested_assessments_are_loaded() {
    let fixture = minimal_course();
    fixture
        .assessment("Fa19", "hw1", &assessment_json("Homework"))
        .assessment("Fa19", "exam1", &assessment_json("Exam"));

    let data = loader().load_full_course(fixture.path()).await.unwrap();
    let assessments = &data.course_instances["Fa19"].assessments;
    assert_eq!(assessments.len(), 2);
    assert_eq!(assessments["hw1"].data().unwrap().tid, "hw1");
    assert_eq!(assessments["exam1"].data().unwrap().set, "Exam");
}

// ---------------------------------------------------------------------------
// Assessments directory check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_assessments_directory_is_a_warning() {
    let fixture = minimal_course();
    for data in [
        loader().load_full_course(fixture.path()).await.unwrap(),
        loader()
            .load_full_course_with_partial_results(fixture.path())
            .await
            .unwrap(),
    ] {
        let instance = &data.course_instances["Fa19"];
        assert!(instance.assessments.is_empty());
        assert!(instance.course_instance.is_loaded());
        let warning = instance.course_instance.warning().unwrap();
        assert!(warning.contains("Fa19 has no \"assessments\" directory"), "{warning}");
    }
}

#[tokio::test]
async fn assessments_file_is_a_warning() {
    let fixture = minimal_course();
    fixture.write("courseInstances/Fa19/assessments", "not a directory");

    let data = loader().load_full_course(fixture.path()).await.unwrap();
    let instance = &data.course_instances["Fa19"];
    assert!(instance.assessments.is_empty());
    let warning = instance.course_instance.warning().unwrap();
    assert!(warning.contains("is not a directory"), "{warning}");
}

#[cfg(unix)]
#[tokio::test]
async fn symlinked_assessments_directory_is_not_scanned() {
    let fixture = minimal_course();
    let target = tempfile::TempDir::new().unwrap();
    let tid_dir = target.path().join("hw1");
    std::fs::create_dir_all(&tid_dir).unwrap();
    std::fs::write(
        tid_dir.join("infoAssessment.json"),
        serde_json::to_string(&assessment_json("Homework")).unwrap(),
    )
    .unwrap();
    std::os::unix::fs::symlink(
        target.path(),
        fixture.path().join("courseInstances/Fa19/assessments"),
    )
    .unwrap();

    let data = loader().load_full_course(fixture.path()).await.unwrap();
    let instance = &data.course_instances["Fa19"];
    assert!(instance.assessments.is_empty());
    let warning = instance.course_instance.warning().unwrap();
    assert!(warning.contains("is not a directory"), "{warning}");
}

#[tokio::test]
async fn assessments_warnings_follow_rule_warnings() {
    let fixture = CourseFixture::new(&course_json());
    let mut instance = instance_json();
    instance["allowIssueReporting"] = json!(true);
    fixture.course_instance("Fa19", &instance);

    let data = loader().load_full_course(fixture.path()).await.unwrap();
    let warnings = data.course_instances["Fa19"].course_instance.warnings();
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].contains("no longer needed"));
    assert!(warnings[1].contains("has no \"assessments\" directory"));
}

// ---------------------------------------------------------------------------
// Strict vs partial collection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn partial_mode_has_one_entry_per_directory() {
    let fixture = minimal_course();
    fixture
        .question("subtractVectors", &question_json("Subtract two vectors"))
        .write("questions/brokenJson/info.json", "{\"uuid\": ")
        .write("questions/.DS_Store", "")
        .write("questions/README.md", "# Questions");

    let data = loader()
        .load_full_course_with_partial_results(fixture.path())
        .await
        .unwrap();

    assert_eq!(data.questions.len(), 3);
    assert!(data.questions["brokenJson"].error().is_some());
    assert!(!data.questions.contains_key("README.md"));

    let failures = data.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].kind, EntityKind::Question);
    assert_eq!(failures[0].ids, vec!["brokenJson".to_string()]);
}

#[tokio::test]
async fn strict_mode_fails_with_one_error() {
    let fixture = minimal_course();
    fixture.write("questions/brokenJson/info.json", "{\"uuid\": ");

    let err = loader().load_full_course(fixture.path()).await.unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));
    assert!(err.to_string().contains("brokenJson"));
}

#[tokio::test]
async fn failed_course_instance_does_not_affect_siblings() {
    let fixture = CourseFixture::new(&course_json());
    let mut forbidden = instance_json();
    forbidden["allowIssueReporting"] = json!(false);
    fixture
        .course_instance("Fa19", &forbidden)
        .assessment("Fa19", "hw1", &assessment_json("Homework"))
        .course_instance("Sp20", &instance_json())
        .assessment("Sp20", "hw1", &assessment_json("Homework"));

    let data = loader()
        .load_full_course_with_partial_results(fixture.path())
        .await
        .unwrap();

    let fa19 = &data.course_instances["Fa19"];
    assert!(fa19.course_instance.error().unwrap().contains("no longer permitted"));
    assert!(fa19.assessments.is_empty());

    let sp20 = &data.course_instances["Sp20"];
    assert!(sp20.course_instance.is_loaded());
    assert!(sp20.assessments["hw1"].is_loaded());

    let err = loader().load_full_course(fixture.path()).await.unwrap_err();
    assert!(matches!(err, LoadError::ForbiddenIssueReporting { .. }));
}

// ---------------------------------------------------------------------------
// Course-level failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_course_info_fails_only_the_course_slot_in_partial_mode() {
    let fixture = minimal_course();
    fixture.write_json("infoCourse.json", &json!({"name": "TAM 212"}));

    let data = loader()
        .load_full_course_with_partial_results(fixture.path())
        .await
        .unwrap();
    assert!(data.course.error().unwrap().contains("infoCourse.json"));
    assert!(data.questions.is_empty());
    assert!(data.course_instances.is_empty());

    let err = loader().load_full_course(fixture.path()).await.unwrap_err();
    assert!(matches!(err, LoadError::Schema { .. }));
}

#[tokio::test]
async fn missing_course_directory_is_reported() {
    let fixture = minimal_course();
    let missing = fixture.path().join("no-such-course");

    let err = loader().load_full_course(&missing).await.unwrap_err();
    assert!(matches!(err, LoadError::CourseInfoMissing { .. }));
}

#[tokio::test]
async fn missing_questions_directory_is_fatal_in_both_modes() {
    let fixture = minimal_course();
    std::fs::remove_dir_all(fixture.path().join("questions")).unwrap();

    let err = loader().load_full_course(fixture.path()).await.unwrap_err();
    assert!(matches!(err, LoadError::ScanDirectory { .. }));

    let err = loader()
        .load_full_course_with_partial_results(fixture.path())
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::ScanDirectory { .. }));
}

#[tokio::test]
async fn redeclared_default_set_warns_on_course_slot() {
    let fixture = CourseFixture::new(&course_json_with_sets(&["Homework", "Lab"]));
    fixture
        .course_instance("Fa19", &instance_json())
        .assessment("Fa19", "lab1", &assessment_json("Lab"));

    let data = loader().load_full_course(fixture.path()).await.unwrap();
    let course = data.course.data().unwrap();
    assert_eq!(
        course
            .assessment_sets
            .iter()
            .filter(|set| set.name == "Homework")
            .count(),
        1
    );
    assert_eq!(
        data.course.warnings(),
        [r#"Default assessmentSet "Homework" should not be included in infoCourse.json"#]
    );
    assert!(data.course_instances["Fa19"].assessments["lab1"].is_loaded());
}

#[tokio::test]
async fn course_data_serializes_with_status_tags() {
    let fixture = minimal_course();
    fixture.write("questions/brokenJson/info.json", "[]");

    let data = loader()
        .load_full_course_with_partial_results(fixture.path())
        .await
        .unwrap();
    let value = serde_json::to_value(&data).unwrap();

    assert_eq!(value["course"]["status"], "loaded");
    assert_eq!(value["questions"]["addVectors"]["data"]["qid"], "addVectors");
    assert_eq!(value["questions"]["brokenJson"]["status"], "failed");
    assert!(value["courseInstances"]["Fa19"]["assessments"].is_object());
}

// ---------------------------------------------------------------------------
// Single question
// ---------------------------------------------------------------------------

#[tokio::test]
async fn single_question_loads_without_course_context() {
    let fixture = minimal_course();
    let question = loader()
        .load_single_question(fixture.path(), "addVectors")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(question.qid, "addVectors");
    assert_eq!(question.client_files, vec!["client.js", "question.html", "answer.html"]);
}

#[tokio::test]
async fn single_question_under_a_file_is_absent() {
    let fixture = minimal_course();
    fixture.write("questions/notes.txt", "scratch");

    let question = loader()
        .load_single_question(fixture.path(), "notes.txt")
        .await
        .unwrap();
    assert!(question.is_none());
}

#[tokio::test]
async fn single_missing_question_is_an_error() {
    let fixture = minimal_course();
    std::fs::create_dir(fixture.path().join("questions/empty")).unwrap();

    let err = loader()
        .load_single_question(fixture.path(), "empty")
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
