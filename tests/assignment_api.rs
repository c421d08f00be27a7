//! 作业、提交、评分与讲师仪表盘的端点测试

mod common;

use actix_web::http::StatusCode;
use serde_json::{Value, json};

use common::*;

const FUTURE: &str = "2099-12-31T23:59:59Z";
const PAST: &str = "2020-01-01T00:00:00Z";

fn assignment_body(deadline: &str, allow_late: bool) -> Value {
    json!({
        "title": "Esai Fotosintesis",
        "instruction": "Jelaskan proses fotosintesis",
        "max_points": 100,
        "deadline": deadline,
        "allow_text": true,
        "allow_file": false,
        "allow_late": allow_late,
    })
}

fn text_answer(answer: &str) -> Value {
    json!({ "text_answer": answer })
}

#[actix_web::test]
async fn test_create_assignment_validation() {
    let (app, _storage, _) = setup().await;
    let (_, lecturer) = account(&app, "dosen@kampus.ac.id", "dosen").await;
    let (_, other) = account(&app, "lain@kampus.ac.id", "dosen").await;
    let course = create_course(
        &app,
        &lecturer,
        &[("title", "Biologi"), ("modules", r#"[{"title":"Tumbuhan"}]"#)],
    )
    .await;
    let other_course = create_course(
        &app,
        &other,
        &[("title", "Kimia"), ("modules", r#"[{"title":"Atom"}]"#)],
    )
    .await;
    let uri = format!("/api/v1/lecturer/courses/{}/assignments", course["id"]);

    let mut body = assignment_body(FUTURE, false);
    body["module_id"] = course["modules"][0]["id"].clone();
    body["allow_voice"] = json!(true);
    let (status, created) = send(&app, post_json(&uri, &lecturer, body)).await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    assert_eq!(created["data"]["course_id"], course["id"]);
    assert_eq!(created["data"]["module_id"], course["modules"][0]["id"]);
    assert_eq!(created["data"]["allow_voice"], false);

    let invalid = [
        ("title", json!("  ")),
        ("instruction", json!("")),
        ("max_points", json!(0)),
        ("deadline", json!("besok pagi")),
        ("module_id", other_course["modules"][0]["id"].clone()),
    ];
    for (field, value) in invalid {
        let mut body = assignment_body(FUTURE, false);
        body[field] = value;
        let (status, _) = send(&app, post_json(&uri, &lecturer, body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "field: {field}");
    }

    let (status, _) = send(&app, post_json(&uri, &other, assignment_body(FUTURE, false))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        post_json(
            "/api/v1/lecturer/courses/9999/assignments",
            &lecturer,
            assignment_body(FUTURE, false),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, get(&uri, &lecturer)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, _) = send(&app, get("/api/v1/lecturer/courses/9999/assignments", &lecturer)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_submit_resubmit_and_grade() {
    let (app, _storage, _) = setup().await;
    let (_, lecturer) = account(&app, "dosen@kampus.ac.id", "dosen").await;
    let (_, other) = account(&app, "lain@kampus.ac.id", "dosen").await;
    let (student_id, student) = account(&app, "mhs@kampus.ac.id", "mahasiswa").await;
    let (_, outsider) = account(&app, "luar@kampus.ac.id", "mahasiswa").await;

    let course = create_course(&app, &lecturer, &[("title", "Biologi")]).await;
    let code = course["class_code"].as_str().unwrap();
    let (status, _) = send(
        &app,
        post_json("/api/v1/student/courses/join", &student, json!({ "class_code": code })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/api/v1/lecturer/courses/{}/assignments", course["id"]);
    let (_, open) = send(&app, post_json(&uri, &lecturer, assignment_body(FUTURE, false))).await;
    let (_, closed) = send(&app, post_json(&uri, &lecturer, assignment_body(PAST, false))).await;
    let (_, late) = send(&app, post_json(&uri, &lecturer, assignment_body(PAST, true))).await;
    let open_id = open["data"]["id"].as_i64().unwrap();
    let submit_uri = |id: &Value| format!("/api/v1/student/assignments/{id}/submit");

    let (status, body) = send(
        &app,
        post_json(&submit_uri(&open["data"]["id"]), &student, text_answer("  Jawaban pertama ")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["text_answer"], "Jawaban pertama");
    let submission_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        post_json(&submit_uri(&open["data"]["id"]), &student, text_answer("Jawaban revisi")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], submission_id);
    assert_eq!(body["data"]["text_answer"], "Jawaban revisi");

    // 不允许的答案类型与空答案
    let (status, _) = send(
        &app,
        post_json(
            &submit_uri(&open["data"]["id"]),
            &student,
            json!({ "file_url": "http://localhost/storage/public/1.pdf" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(
        &app,
        post_json(&submit_uri(&open["data"]["id"]), &student, text_answer("   ")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // 截止时间
    let (status, body) = send(
        &app,
        post_json(&submit_uri(&closed["data"]["id"]), &student, text_answer("terlambat")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Batas waktu pengumpulan sudah lewat");
    let (status, _) = send(
        &app,
        post_json(&submit_uri(&late["data"]["id"]), &student, text_answer("terlambat")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        post_json(&submit_uri(&open["data"]["id"]), &outsider, text_answer("halo")),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(
        &app,
        post_json("/api/v1/student/assignments/9999/submit", &student, text_answer("x")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 讲师查看提交
    let submissions_uri = format!("/api/v1/lecturer/assignments/{open_id}/submissions");
    let (status, body) = send(&app, get(&submissions_uri, &lecturer)).await;
    assert_eq!(status, StatusCode::OK);
    let list = body["data"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["student"]["id"], student_id);
    let (status, _) = send(&app, get(&submissions_uri, &other)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let grade_uri = format!("/api/v1/lecturer/submissions/{submission_id}/grade");
    for grade in [json!(-1), json!(101)] {
        let (status, _) = send(
            &app,
            put_json(&grade_uri, &lecturer, json!({ "grade": grade })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "grade: {grade}");
    }
    let (status, _) = send(&app, put_json(&grade_uri, &other, json!({ "grade": 80 }))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, body) = send(
        &app,
        put_json(&grade_uri, &lecturer, json!({ "grade": 85.5, "feedback": "Bagus" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["grade"], 85.5);
    assert_eq!(body["data"]["feedback"], "Bagus");

    // 学生的作业列表附带自己的提交
    let (status, body) = send(&app, get("/api/v1/student/assignments", &student)).await;
    assert_eq!(status, StatusCode::OK);
    let list = body["data"].as_array().unwrap();
    assert_eq!(list.len(), 3);
    let mine = list.iter().find(|a| a["id"] == open_id).unwrap();
    assert_eq!(mine["my_submission"]["grade"], 85.5);
    let untouched = list.iter().find(|a| a["id"] == closed["data"]["id"]).unwrap();
    assert!(untouched.get("my_submission").is_none());

    // 重新提交会清空评分
    let (status, body) = send(
        &app,
        post_json(&submit_uri(&open["data"]["id"]), &student, text_answer("Jawaban ketiga")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["grade"], 0.0);
    assert!(body["data"]["feedback"].is_null());
}

#[actix_web::test]
async fn test_lecturer_dashboard() {
    let (app, _storage, _) = setup().await;
    let (_, lecturer) = account(&app, "dosen@kampus.ac.id", "dosen").await;
    let (_, first) = account(&app, "andi@kampus.ac.id", "mahasiswa").await;
    let (_, second) = account(&app, "bela@kampus.ac.id", "mahasiswa").await;

    let (status, body) = send(&app, get("/api/v1/lecturer/dashboard/summary", &lecturer)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_classes"], 0);
    assert_eq!(body["data"]["average_completion"], 0.0);

    let course = create_course(
        &app,
        &lecturer,
        &[
            ("title", "Ekologi"),
            ("status", "published"),
            ("modules", r#"[{"title":"M1","materials":[{"title":"Bacaan","type":"text","raw_content":"isi"}]}]"#),
        ],
    )
    .await;
    create_course(&app, &lecturer, &[("title", "Draf")]).await;
    let course_id = course["id"].as_i64().unwrap();
    let material_id = course["modules"][0]["materials"][0]["id"].as_i64().unwrap();
    let code = course["class_code"].as_str().unwrap();

    for token in [&first, &second] {
        send(
            &app,
            post_json("/api/v1/student/courses/join", token, json!({ "class_code": code })),
        )
        .await;
    }

    let (_, assignment) = send(
        &app,
        post_json(
            &format!("/api/v1/lecturer/courses/{course_id}/assignments"),
            &lecturer,
            assignment_body(FUTURE, false),
        ),
    )
    .await;
    let assignment_id = assignment["data"]["id"].as_i64().unwrap();

    let req = actix_web::test::TestRequest::post()
        .uri(&format!("/api/v1/student/materials/{material_id}/complete"))
        .insert_header(bearer(&first))
        .to_request();
    send(&app, req).await;
    let (_, submission) = send(
        &app,
        post_json(
            &format!("/api/v1/student/assignments/{assignment_id}/submit"),
            &first,
            text_answer("jawaban"),
        ),
    )
    .await;

    // 2 条目 × 2 学生，完成 1 材料 + 1 提交
    let (_, body) = send(&app, get("/api/v1/lecturer/dashboard/summary", &lecturer)).await;
    assert_eq!(body["data"]["total_classes"], 1);
    assert_eq!(body["data"]["total_students"], 2);
    assert_eq!(body["data"]["pending_grades"], 1);
    assert_eq!(body["data"]["average_completion"], 50.0);

    let (_, body) = send(&app, get("/api/v1/lecturer/dashboard/active-classes", &lecturer)).await;
    let classes = body["data"].as_array().unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0]["id"], format!("cls_{course_id}"));
    assert_eq!(classes[0]["semester"], "Genap 2025");
    assert_eq!(classes[0]["student_count"], 2);
    assert_eq!(classes[0]["progress"], 50.0);

    let (_, body) = send(&app, get("/api/v1/lecturer/dashboard/progress", &lecturer)).await;
    assert_eq!(body["data"]["average_completion"], 50.0);
    assert_eq!(body["data"]["by_class"][0]["class_id"], format!("cls_{course_id}"));

    let (_, body) = send(
        &app,
        get("/api/v1/lecturer/dashboard/recent-activities", &lecturer),
    )
    .await;
    let activities = body["data"].as_array().unwrap();
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0]["type"], "assignment_submission");
    assert_eq!(activities[0]["course_id"], format!("cls_{course_id}"));
    assert!(activities[0]["description"].as_str().unwrap().starts_with("andi"));

    let (status, body) = send(
        &app,
        get("/api/v1/lecturer/dashboard/recent-activities?limit=abc", &lecturer),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (_, body) = send(
        &app,
        get("/api/v1/lecturer/dashboard/pending-assignments", &lecturer),
    )
    .await;
    let pending = body["data"].as_array().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["assignment_id"], format!("asg_{assignment_id}"));
    assert_eq!(pending[0]["course"], "Ekologi");
    assert_eq!(pending[0]["submitted_count"], 1);

    let submission_id = submission["data"]["id"].as_i64().unwrap();
    send(
        &app,
        put_json(
            &format!("/api/v1/lecturer/submissions/{submission_id}/grade"),
            &lecturer,
            json!({ "grade": 90 }),
        ),
    )
    .await;

    let (_, body) = send(&app, get("/api/v1/lecturer/dashboard/summary", &lecturer)).await;
    assert_eq!(body["data"]["pending_grades"], 0);
    let (_, body) = send(
        &app,
        get("/api/v1/lecturer/dashboard/pending-assignments", &lecturer),
    )
    .await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let (status, _) = send(&app, get("/api/v1/lecturer/dashboard/summary", &first)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
