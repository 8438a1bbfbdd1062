//! Integration tests for writing generated documentation to disk.

use std::fs;

use apidoc_lib::{
    ApiDocGenerator, Auth, BodyParam, FixedClock, GenerateError, HeaderParam, PathParam,
    QueryParam, Response, RestMethod, Route,
};
use chrono::NaiveDate;
use serde_json::json;
use tempfile::tempdir;

fn fixed_clock() -> FixedClock {
    let at = NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(10, 30, 0))
        .unwrap();
    FixedClock(at)
}

fn users_api() -> ApiDocGenerator<FixedClock> {
    let list_users = Route::new(RestMethod::Get, "/users")
        .with_title("Get All Users")
        .with_description("Retrieve a paginated list of all users in the system.")
        .add_query_param(
            QueryParam::new("page", "integer")
                .with_description("Page number for pagination")
                .with_default(1),
        )
        .add_query_param(
            QueryParam::new("limit", "integer")
                .with_description("Number of items per page")
                .with_default(10),
        )
        .add_header(
            HeaderParam::new("Accept", "string")
                .required()
                .with_description("application/json"),
        )
        .add_response(Response::new(200, "Success").with_example(json!({"data": []})));

    let get_user = Route::new(RestMethod::Get, "/users/{id}")
        .with_title("Get User by ID")
        .add_path_param(
            PathParam::new("id", "integer").with_description("The unique identifier of the user"),
        )
        .add_response(Response::new(404, "User Not Found").with_example(json!({"error": "User not found"})));

    let create_user = Route::new(RestMethod::Post, "/users")
        .with_title("Create New User")
        .require_auth(Auth::default().with_description("Admin access token required"))
        .add_body_param(BodyParam::new("name", "string").required().with_example("John Doe"))
        .add_body_param(BodyParam::new("role", "string").with_example("user"))
        .add_response(Response::new(201, "User Created Successfully"));

    let delete_user = Route::new(RestMethod::Delete, "/users/{id}")
        .require_auth(Auth::default())
        .add_response(Response::new(204, "No Content"));

    ApiDocGenerator::new()
        .with_clock(fixed_clock())
        .with_title("My Awesome API")
        .with_description("This is a comprehensive API for managing users.")
        .with_version("2.0.0")
        .with_base_url("https://api.example.com/v2/")
        .add_routes([list_users, get_user, create_user, delete_user])
}

#[test]
fn generate_creates_missing_directories_and_writes_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("docs").join("v2").join("api.md");

    assert!(users_api().generate(&output));

    let written = fs::read_to_string(&output).unwrap();
    assert!(!written.is_empty());
    assert_eq!(written, users_api().render());
}

#[test]
fn generate_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("api.md");
    fs::write(&output, "stale contents that are much longer than the header line").unwrap();

    let doc = ApiDocGenerator::new().with_clock(fixed_clock());
    assert!(doc.generate(&output));

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("# API Documentation\n"));
    assert!(!written.contains("stale"));
}

#[test]
fn generate_returns_false_when_parent_cannot_be_created() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "a file where a directory is expected").unwrap();

    let doc = users_api();
    assert!(!doc.generate(blocker.join("nested").join("api.md")));
}

#[test]
fn write_to_reports_which_step_failed() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let err = users_api()
        .write_to(blocker.join("nested").join("api.md"))
        .unwrap_err();
    assert!(matches!(err, GenerateError::CreateDir { .. }));

    // The output path itself is a directory, so the write step fails.
    let err = users_api().write_to(dir.path()).unwrap_err();
    assert!(matches!(err, GenerateError::Write { .. }));
}

#[test]
fn write_to_returns_written_path() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.md");

    let path = users_api().write_to(&output).unwrap();
    assert_eq!(path, output);
}

#[test]
fn full_document_layout() {
    let md = users_api().render();

    assert!(md.starts_with(
        "# My Awesome API\n\n\
         This is a comprehensive API for managing users.\n\n\
         **Version:** 2.0.0\n\n\
         **Base URL:** `https://api.example.com/v2`\n\n\
         ---\n\n\
         ## Table of Contents\n\n\
         1. [Get All Users](#get-all-users)\n\
         2. [Get User by ID](#get-user-by-id)\n\
         3. [Create New User](#create-new-user)\n\
         4. [DELETE /users/{id}](#delete-users-id-)\n\
         \n---\n\n\
         ## Get All Users\n\n"
    ));

    assert!(md.contains(
        "### Headers\n\n\
         | Name | Type | Required | Description |\n\
         |------|------|----------|-------------|\n\
         | Authorization | string | Yes | Bearer token |\n\n"
    ));
    assert!(md.contains("#### 204 - No Content\n\n---\n\n"));
    assert!(md.contains("```json\n{\n  \"name\": \"John Doe\",\n  \"role\": \"user\"\n}\n```"));
    assert!(md.ends_with("*Documentation generated on 2024-01-15 10:30:00*\n"));
}
