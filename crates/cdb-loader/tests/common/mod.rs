//! On-disk course fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use tempfile::TempDir;

use cdb_config::LoaderConfig;
use cdb_loader::CourseLoader;

pub struct CourseFixture {
    dir: TempDir,
}

impl CourseFixture {
    /// A course with `infoCourse.json` and empty `questions/` and
    /// `courseInstances/` directories.
    pub fn new(info_course: &Value) -> Self {
        let fixture = Self {
            dir: TempDir::new().unwrap(),
        };
        fixture.write_json("infoCourse.json", info_course);
        fs::create_dir_all(fixture.path().join("questions")).unwrap();
        fs::create_dir_all(fixture.path().join("courseInstances")).unwrap();
        fixture
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn question(&self, qid: &str, info: &Value) -> &Self {
        self.write_json(&format!("questions/{qid}/info.json"), info);
        self
    }

    pub fn course_instance(&self, ciid: &str, info: &Value) -> &Self {
        self.write_json(
            &format!("courseInstances/{ciid}/infoCourseInstance.json"),
            info,
        );
        self
    }

    pub fn assessment(&self, ciid: &str, tid: &str, info: &Value) -> &Self {
        self.write_json(
            &format!("courseInstances/{ciid}/assessments/{tid}/infoAssessment.json"),
            info,
        );
        self
    }

    pub fn write(&self, relative: &str, contents: &str) -> &Self {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
        self
    }

    pub fn write_json(&self, relative: &str, value: &Value) -> &Self {
        self.write(relative, &serde_json::to_string_pretty(value).unwrap())
    }
}

pub fn loader() -> CourseLoader {
    CourseLoader::new(LoaderConfig::default()).unwrap()
}

pub fn course_json() -> Value {
    json!({
        "uuid": "5C1A0E3B-9F43-4F6B-8E4E-2D1B7B3C9A10",
        "name": "TAM 212",
        "title": "Introductory Dynamics",
        "timezone": "America/Chicago"
    })
}

pub fn course_json_with_sets(names: &[&str]) -> Value {
    let mut course = course_json();
    course["assessmentSets"] = names
        .iter()
        .map(|name| {
            json!({
                "abbreviation": name,
                "name": name,
                "heading": format!("{name} assignments"),
                "color": "green1"
            })
        })
        .collect();
    course
}

pub fn question_json(title: &str) -> Value {
    json!({
        "uuid": "0b5c4d52-61a3-4c5e-9f7e-1e2d3c4b5a69",
        "title": title,
        "topic": "Vectors"
    })
}

pub fn instance_json() -> Value {
    json!({
        "uuid": "8a7b6c5d-4e3f-4a1b-9c8d-7e6f5a4b3c2d",
        "longName": "Fall 2019",
        "allowAccess": [{"startDate": "2019-08-19T00:00:01", "endDate": "2019-12-31T23:59:59"}]
    })
}

pub fn assessment_json(set: &str) -> Value {
    json!({
        "uuid": "3c2b1a09-8f7e-4d6c-b5a4-938271605f4e",
        "type": "Homework",
        "title": "Vector algebra",
        "set": set,
        "number": "1",
        "allowAccess": [{"startDate": "2019-09-01T00:00:01", "endDate": "2019-09-08T23:59:59"}],
        "zones": [{"questions": [{"id": "addVectors", "points": [3, 2, 1]}]}]
    })
}
