//! Integration tests for the SkillBridge backend.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use crate::chat::{templates, Responder};
use crate::db::{init_database, Repository, Store};
use crate::{create_router, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    _temp_dir: TempDir,
}

async fn test_state(temp_dir: &TempDir) -> AppState {
    let db_path = temp_dir.path().join("test.sqlite");
    let pool = init_database(&db_path).await.expect("Failed to init DB");
    let repo = Repository::open(Store::new(pool), Responder::new(Duration::ZERO))
        .await
        .expect("Failed to open repository");
    AppState {
        repo: Arc::new(repo),
    }
}

impl TestFixture {
    async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let app = create_router(test_state(&temp_dir).await);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> (u16, Value) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn post(&self, path: &str, body: Value) -> (u16, Value) {
        let resp = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }
}

fn new_task() -> Value {
    json!({
        "title": "Recipe Finder",
        "description": "Search recipes by the ingredients you have",
        "skillTags": ["React", "API Integration"],
        "deadline": "2025-04-01",
        "difficulty": "Beginner",
        "expectedOutcome": "Deployed web app",
        "mentorName": "Priya Patel",
        "mentorEmail": "priya@example.com"
    })
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_health_check_oneshot() {
    let temp_dir = TempDir::new().unwrap();
    let app = create_router(test_state(&temp_dir).await);

    let resp = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_datastore_seeded() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/api/datastore").await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["tasks"].as_array().unwrap().len(), 5);
    assert!(body["data"]["messages"].as_array().unwrap().is_empty());
    assert_eq!(body["data"]["schemaVersion"], 1);
    assert!(body["revisionId"].is_number());
}

#[tokio::test]
async fn test_list_tasks_with_filters() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get("/api/tasks").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["total"], 5);
    assert_eq!(body["data"]["availableSkills"][0], "AI");

    let (_, body) = fixture.get("/api/tasks?skillTag=Python&difficulty=Advanced").await;
    let ids: Vec<&str> = body["data"]["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["2", "4"]);

    let (_, body) = fixture.get("/api/tasks?search=nothing-matches-this").await;
    assert_eq!(body["data"]["total"], 0);

    let (status, body) = fixture.get("/api/tasks?difficulty=Expert").await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_post_task_appears_first() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.post("/api/tasks", new_task()).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["upvotes"], 0);
    assert_eq!(body["data"]["submissions"], json!([]));
    let task_id = body["data"]["id"].as_str().unwrap().to_string();

    let (_, body) = fixture.get("/api/tasks").await;
    assert_eq!(body["data"]["tasks"][0]["id"], task_id.as_str());
    assert_eq!(body["data"]["total"], 6);

    let (status, body) = fixture.get(&format!("/api/tasks/{}", task_id)).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["mentorName"], "Priya Patel");
}

#[tokio::test]
async fn test_post_task_validation() {
    let fixture = TestFixture::new().await;

    let mut task = new_task();
    task["skillTags"] = json!([]);
    let (status, body) = fixture.post("/api/tasks", task).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let mut task = new_task();
    task["expectedOutcome"] = json!("   ");
    let (status, body) = fixture.post("/api/tasks", task).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["message"], "Expected outcome is required");

    let mut task = new_task();
    task.as_object_mut().unwrap().remove("title");
    let (status, body) = fixture.post("/api/tasks", task).await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["revisionId"].is_number());

    let mut task = new_task();
    task.as_object_mut().unwrap().remove("deadline");
    let (status, body) = fixture.post("/api/tasks", task).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["message"], "Deadline is required");

    let (_, body) = fixture.get("/api/stats").await;
    assert_eq!(body["data"]["taskCount"], 5);
}

#[tokio::test]
async fn test_upvote_counts_every_call() {
    let fixture = TestFixture::new().await;

    for _ in 0..3 {
        let (status, _) = fixture.post("/api/tasks/5/upvote", json!({})).await;
        assert_eq!(status, 200);
    }
    let (_, body) = fixture.get("/api/tasks/5").await;
    assert_eq!(body["data"]["upvotes"], 25);

    let (status, body) = fixture.post("/api/tasks/missing/upvote", json!({})).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["upvotes"], Value::Null);
}

#[tokio::test]
async fn test_submissions_and_leaderboard() {
    let fixture = TestFixture::new().await;

    for (task, student) in [("1", "Ana"), ("3", "Ben"), ("3", "Ana")] {
        let (status, _) = fixture
            .post(
                &format!("/api/tasks/{}/submissions", task),
                json!({
                    "studentName": student,
                    "studentEmail": format!("{}@example.com", student.to_lowercase()),
                    "githubLink": "https://github.com/example/solution",
                    "note": "Done"
                }),
            )
            .await;
        assert_eq!(status, 200);
    }

    let (_, body) = fixture.get("/api/tasks/3").await;
    let submissions = body["data"]["submissions"].as_array().unwrap();
    assert_eq!(submissions.len(), 2);
    assert_eq!(submissions[0]["studentName"], "Ben");
    assert_eq!(submissions[1]["studentName"], "Ana");

    let (_, body) = fixture.get("/api/leaderboard").await;
    assert_eq!(body["data"]["topStudents"][0]["name"], "Ana");
    assert_eq!(body["data"]["topStudents"][0]["submissions"], 2);
    assert_eq!(body["data"]["topMentors"][0]["name"], "Emily Johnson");
    assert_eq!(body["data"]["topMentors"][0]["totalSubmissions"], 2);
    assert_eq!(body["data"]["popularTasks"][0]["id"], "3");

    let (_, body) = fixture.get("/api/stats").await;
    assert_eq!(body["data"]["submissionCount"], 3);

    let (status, body) = fixture
        .post(
            "/api/tasks/missing/submissions",
            json!({
                "studentName": "Ana",
                "studentEmail": "ana@example.com",
                "githubLink": "https://github.com/example/solution"
            }),
        )
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_messages_flow() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post(
            "/api/messages",
            json!({
                "taskId": "2",
                "from": "Cy",
                "fromEmail": "cy@example.com",
                "message": "Which scanners should I compare against?"
            }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["status"], "unread");
    assert_eq!(body["data"]["to"], "Michael Rodriguez");
    assert_eq!(body["data"]["taskTitle"], "Cybersecurity Vulnerability Scanner");
    let message_id = body["data"]["id"].as_str().unwrap().to_string();

    let (_, body) = fixture.get("/api/stats").await;
    assert_eq!(body["data"]["unreadMessages"], 1);

    let path = format!("/api/messages/{}/read", message_id);
    let (_, body) = fixture.post(&path, json!({})).await;
    assert_eq!(body["data"]["changed"], true);
    let (status, body) = fixture.post(&path, json!({})).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["changed"], false);

    let (_, body) = fixture.get("/api/messages?status=unread").await;
    assert!(body["data"]["messages"].as_array().unwrap().is_empty());
    assert_eq!(body["data"]["counts"]["read"], 1);

    let (_, body) = fixture.get("/api/messages?status=read").await;
    assert_eq!(body["data"]["messages"][0]["id"], message_id.as_str());
}

#[tokio::test]
async fn test_message_validation() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post(
            "/api/messages",
            json!({
                "taskId": "2",
                "from": "Cy",
                "fromEmail": "cy@example.com",
                "message": "hi"
            }),
        )
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, body) = fixture
        .post(
            "/api/messages",
            json!({ "taskId": "2", "message": "A perfectly long question" }),
        )
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, body) = fixture
        .post("/api/tasks/1/submissions", json!({ "studentName": "Ana" }))
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, _) = fixture
        .post(
            "/api/messages",
            json!({
                "taskId": "nope",
                "from": "Cy",
                "fromEmail": "cy@example.com",
                "message": "A perfectly long question"
            }),
        )
        .await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_chat_flow() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .post(
            "/api/chat",
            json!({ "message": "I want career advice", "category": "general" }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["question"]["type"], "user");
    assert_eq!(body["data"]["answer"]["type"], "ai");
    assert_eq!(body["data"]["answer"]["content"], templates::CAREER);

    let (_, body) = fixture
        .post(
            "/api/chat",
            json!({ "message": "career", "category": "checklist", "taskTitle": "Scanner" }),
        )
        .await;
    assert_eq!(body["data"]["answer"]["content"], templates::CHECKLIST);
    assert_eq!(
        body["data"]["question"]["content"],
        "Generate a smart checklist for: Scanner"
    );

    let (_, body) = fixture.get("/api/chat").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 4);

    let (status, _) = fixture.post("/api/chat", json!({ "message": "  " })).await;
    assert_eq!(status, 400);

    let resp = fixture
        .client
        .delete(fixture.url("/api/chat"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let (_, body) = fixture.get("/api/chat").await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_revision_increases_on_write() {
    let fixture = TestFixture::new().await;

    let (_, body) = fixture.get("/api/datastore/revision").await;
    let before = body["data"]["revisionId"].as_i64().unwrap();

    let (_, body) = fixture.post("/api/tasks", new_task()).await;
    let after = body["revisionId"].as_i64().unwrap();
    assert!(after > before);
}
