use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum UserRole {
    Student,
    #[serde(rename = "TA")]
    Ta,
    Instructor,
    Superuser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Institution {
    #[serde(rename = "UIUC")]
    Uiuc,
    #[serde(rename = "ZJUI")]
    Zjui,
    #[serde(rename = "LTI")]
    Lti,
    Any,
}

/// One entry of a course instance's `allowAccess` list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseInstanceAccessRule {
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub uids: Option<Vec<String>>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub institution: Option<Institution>,
}

/// A loaded `infoCourseInstance.json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseInstanceInfo {
    /// Directory name; any value in the descriptor is overwritten, so the
    /// schema does not constrain it.
    #[serde(default)]
    #[schemars(skip)]
    pub ciid: String,
    pub uuid: String,
    #[serde(default)]
    pub long_name: Option<String>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub user_roles: BTreeMap<String, UserRole>,
    #[serde(default)]
    pub allow_access: Vec<CourseInstanceAccessRule>,
    /// Deprecated; only a truthy value is still accepted.
    #[serde(default)]
    pub allow_issue_reporting: Option<bool>,
}
