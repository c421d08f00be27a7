//! 课程、选课、学生管理的端点测试

mod common;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use serde_json::{Value, json};

use common::*;

const MODULES: &str = r#"[
    {"title":"Pengantar","order":1,"materials":[
        {"title":"Video Pembuka","type":"youtube","source_url":"https://youtu.be/abc","duration_min":12,"has_captions":true},
        {"title":"Catatan","type":"text","raw_content":"Isi catatan pertama"}
    ]},
    {"title":"Lanjutan","order":2,"materials":[
        {"title":"Bacaan","type":"text","raw_content":"Isi bacaan"}
    ]}
]"#;

fn material_ids(course: &Value) -> Vec<i64> {
    course["modules"]
        .as_array()
        .into_iter()
        .flatten()
        .flat_map(|m| m["materials"].as_array().cloned().unwrap_or_default())
        .filter_map(|m| m["id"].as_i64())
        .collect()
}

#[actix_web::test]
async fn test_create_and_list_courses() {
    let (app, _storage, _) = setup().await;
    let (lecturer_id, token) = account(&app, "dosen@kampus.ac.id", "dosen").await;

    let course = create_course(
        &app,
        &token,
        &[
            ("title", "Algoritma Dasar"),
            ("description", "Pengenalan algoritma"),
            ("status", "published"),
            ("modules", MODULES),
        ],
    )
    .await;
    assert_eq!(course["teacher_id"], lecturer_id);
    assert_eq!(course["status"], "published");
    assert_eq!(course["class_code"].as_str().unwrap().len(), 6);
    assert_eq!(course["modules"].as_array().unwrap().len(), 2);
    assert_eq!(course["modules"][0]["materials"][0]["type"], "youtube");
    assert_eq!(material_ids(&course).len(), 3);

    create_course(&app, &token, &[("title", "Basis Data"), ("class_code", "bd2025")]).await;

    let (status, body) = send(&app, get("/api/v1/lecturer/courses", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, body) = send(&app, get("/api/v1/lecturer/courses?q=basis", &token)).await;
    let list = body["data"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["class_code"], "bd2025");
    assert_eq!(list[0]["status"], "draft");

    let (_, body) = send(&app, get("/api/v1/lecturer/courses?status=published", &token)).await;
    let list = body["data"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], "Algoritma Dasar");
}

#[actix_web::test]
async fn test_create_course_validation() {
    let (app, _storage, _) = setup().await;
    let (_, token) = account(&app, "dosen@kampus.ac.id", "dosen").await;

    let cases: [&[(&str, &str)]; 3] = [
        &[("description", "tanpa judul")],
        &[("title", "Kelas"), ("status", "aktif")],
        &[("title", "Kelas"), ("modules", "{bukan json")],
    ];
    for fields in cases {
        let req = multipart(TestRequest::post(), "/api/v1/lecturer/courses", &token, fields, None);
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "fields: {fields:?}");
    }

    create_course(&app, &token, &[("title", "Satu"), ("class_code", "KODE01")]).await;
    let req = multipart(
        TestRequest::post(),
        "/api/v1/lecturer/courses",
        &token,
        &[("title", "Dua"), ("class_code", "KODE01")],
        None,
    );
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Kode kelas sudah digunakan");
}

#[actix_web::test]
async fn test_custom_class_codes_are_kept_as_typed() {
    let (app, _storage, _) = setup().await;
    let (_, lecturer) = account(&app, "dosen@kampus.ac.id", "dosen").await;
    let (_, student) = account(&app, "mhs@kampus.ac.id", "mahasiswa").await;

    for code in ["kelas-a1", "MTK"] {
        let course = create_course(&app, &lecturer, &[("title", "Kelas"), ("class_code", code)]).await;
        assert_eq!(course["class_code"], code);
    }

    let too_long = "K".repeat(21);
    let req = multipart(
        TestRequest::post(),
        "/api/v1/lecturer/courses",
        &lecturer,
        &[("title", "Panjang"), ("class_code", too_long.as_str())],
        None,
    );
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // 加入时按原样匹配
    let join = |code: &str| {
        post_json("/api/v1/student/courses/join", &student, json!({ "class_code": code }))
    };
    let (status, body) = send(&app, join("kelas-a1")).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let (status, _) = send(&app, join("mtk")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_update_course_syncs_modules() {
    let (app, _storage, _) = setup().await;
    let (_, token) = account(&app, "dosen@kampus.ac.id", "dosen").await;
    let course = create_course(&app, &token, &[("title", "Algoritma"), ("modules", MODULES)]).await;
    let course_id = course["id"].as_i64().unwrap();
    let first_module = course["modules"][0]["id"].as_i64().unwrap();
    let kept_material = course["modules"][0]["materials"][0]["id"].as_i64().unwrap();

    let modules = json!([{
        "id": first_module,
        "title": "Pengantar (revisi)",
        "order": 1,
        "materials": [
            {"id": kept_material, "title": "Video Baru", "type": "youtube", "source_url": "https://youtu.be/xyz"},
            {"title": "Tambahan", "type": "text", "raw_content": "baru"}
        ]
    }])
    .to_string();

    let uri = format!("/api/v1/lecturer/courses/{course_id}");
    let req = multipart(
        TestRequest::put(),
        &uri,
        &token,
        &[("title", "Algoritma Lanjut"), ("status", "archived"), ("modules", modules.as_str())],
        None,
    );
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let (_, body) = send(&app, get(&uri, &token)).await;
    let detail = &body["data"];
    assert_eq!(detail["title"], "Algoritma Lanjut");
    assert_eq!(detail["status"], "archived");
    assert_eq!(detail["class_code"], course["class_code"]);
    let modules = detail["modules"].as_array().unwrap();
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0]["title"], "Pengantar (revisi)");
    let materials = modules[0]["materials"].as_array().unwrap();
    assert_eq!(materials.len(), 2);
    assert!(materials.iter().any(|m| m["id"] == kept_material && m["title"] == "Video Baru"));
    assert_eq!(material_ids(detail).len(), 2);
}

#[actix_web::test]
async fn test_update_rejects_foreign_module() {
    let (app, _storage, _) = setup().await;
    let (_, token) = account(&app, "dosen@kampus.ac.id", "dosen").await;
    let first = create_course(&app, &token, &[("title", "Satu"), ("modules", MODULES)]).await;
    let second = create_course(&app, &token, &[("title", "Dua")]).await;

    let foreign = json!([{ "id": first["modules"][0]["id"], "title": "Curian" }]).to_string();
    let uri = format!("/api/v1/lecturer/courses/{}", second["id"]);
    let req = multipart(
        TestRequest::put(),
        &uri,
        &token,
        &[("title", "Diubah"), ("modules", foreign.as_str())],
        None,
    );
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // 失败的更新不应留下部分修改
    let (_, body) = send(&app, get(&format!("/api/v1/lecturer/courses/{}", first["id"]), &token)).await;
    assert_eq!(body["data"]["modules"].as_array().unwrap().len(), 2);
    let (_, body) = send(&app, get(&uri, &token)).await;
    assert_eq!(body["data"]["title"], "Dua");
}

#[actix_web::test]
async fn test_remove_module_and_course_with_student_activity() {
    let (app, _storage, _) = setup().await;
    let (_, lecturer) = account(&app, "dosen@kampus.ac.id", "dosen").await;
    let (_, student) = account(&app, "mhs@kampus.ac.id", "mahasiswa").await;

    let course = create_course(&app, &lecturer, &[("title", "Biologi"), ("modules", MODULES)]).await;
    let course_id = course["id"].as_i64().unwrap();
    let first_module = course["modules"][0]["id"].as_i64().unwrap();
    let second_module = course["modules"][1]["id"].as_i64().unwrap();
    let material = course["modules"][0]["materials"][1]["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        post_json(
            "/api/v1/student/courses/join",
            &student,
            json!({ "class_code": course["class_code"] }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let req = TestRequest::post()
        .uri(&format!("/api/v1/student/materials/{material}/complete"))
        .insert_header(bearer(&student))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        put_json(
            &format!("/api/v1/lecturer/materials/{material}/summary"),
            &lecturer,
            json!({ "summary": "Ringkasan catatan" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let (status, body) = send(
        &app,
        post_json(
            &format!("/api/v1/lecturer/courses/{course_id}/assignments"),
            &lecturer,
            json!({
                "title": "Tugas 1",
                "instruction": "Rangkum catatan",
                "max_points": 100,
                "deadline": "2099-12-31T23:59:59Z",
                "module_id": first_module,
                "allow_text": true
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let assignment_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        post_json(
            &format!("/api/v1/student/assignments/{assignment_id}/submit"),
            &student,
            json!({ "text_answer": "Jawaban saya" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");

    // 删除带有完成记录和摘要的模块
    let uri = format!("/api/v1/lecturer/courses/{course_id}");
    let modules = json!([{ "id": second_module, "title": "Lanjutan", "order": 1 }]).to_string();
    let req = multipart(
        TestRequest::put(),
        &uri,
        &lecturer,
        &[("title", "Biologi"), ("modules", modules.as_str())],
        None,
    );
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let (_, body) = send(&app, get(&uri, &lecturer)).await;
    let modules = body["data"]["modules"].as_array().unwrap();
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0]["id"], second_module);

    let (status, body) = send(&app, delete(&uri, &lecturer)).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let (status, _) = send(&app, get(&uri, &lecturer)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_course_ownership_and_delete() {
    let (app, _storage, _) = setup().await;
    let (_, owner) = account(&app, "pemilik@kampus.ac.id", "dosen").await;
    let (_, other) = account(&app, "lain@kampus.ac.id", "dosen").await;
    let course = create_course(&app, &owner, &[("title", "Privat"), ("modules", MODULES)]).await;
    let uri = format!("/api/v1/lecturer/courses/{}", course["id"]);

    let (status, _) = send(&app, get(&uri, &other)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(&app, delete(&uri, &other)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(&app, get("/api/v1/lecturer/courses/9999", &owner)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, delete(&uri, &owner)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, get(&uri, &owner)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_join_course_and_track_progress() {
    let (app, _storage, _) = setup().await;
    let (_, lecturer) = account(&app, "dosen@kampus.ac.id", "dosen").await;
    let (_, student) = account(&app, "mhs@kampus.ac.id", "mahasiswa").await;
    let (_, outsider) = account(&app, "luar@kampus.ac.id", "mahasiswa").await;

    let modules = r#"[{"title":"M1","materials":[
        {"title":"A","type":"text","raw_content":"a"},
        {"title":"B","type":"text","raw_content":"b"}
    ]}]"#;
    let course = create_course(&app, &lecturer, &[("title", "Statistika"), ("modules", modules)]).await;
    let course_id = course["id"].as_i64().unwrap();
    let code = course["class_code"].as_str().unwrap().to_string();
    let material_a = course["modules"][0]["materials"][0]["id"].as_i64().unwrap();

    let join = |code: &str, token: &str| {
        post_json("/api/v1/student/courses/join", token, json!({ "class_code": code }))
    };

    let (status, body) = send(&app, join(&code, &student)).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let (status, body) = send(&app, join(&code, &student)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "anda sudah bergabung di kelas ini");
    let (status, body) = send(&app, join("ZZZZZZ", &student)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "kelas tidak ditemukan");

    let (_, body) = send(&app, get("/api/v1/student/courses", &student)).await;
    assert_eq!(body["data"][0]["id"], course_id);
    assert_eq!(body["data"][0]["progress"], 0.0);

    let complete = format!("/api/v1/student/materials/{material_a}/complete");
    let req = TestRequest::post()
        .uri(&complete)
        .insert_header(bearer(&student))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["completed"], true);

    let (_, body) = send(&app, get("/api/v1/student/courses", &student)).await;
    assert_eq!(body["data"][0]["progress"], 50.0);

    let detail_uri = format!("/api/v1/student/courses/{course_id}");
    let (status, body) = send(&app, get(&detail_uri, &student)).await;
    assert_eq!(status, StatusCode::OK);
    let materials = body["data"]["modules"][0]["materials"].as_array().unwrap();
    assert!(materials.iter().any(|m| m["id"] == material_a && m["is_completed"] == true));
    assert!(materials.iter().any(|m| m["id"] != material_a && m["is_completed"] == false));

    let material_uri = format!("/api/v1/materials/{material_a}");
    let (_, body) = send(&app, get(&material_uri, &student)).await;
    assert_eq!(body["data"]["is_completed"], true);

    let (status, _) = send(&app, get(&detail_uri, &outsider)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(&app, get(&material_uri, &outsider)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let req = TestRequest::post()
        .uri(&complete)
        .insert_header(bearer(&outsider))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // 再次切换取消完成
    let req = TestRequest::post()
        .uri(&complete)
        .insert_header(bearer(&student))
        .to_request();
    let (_, body) = send(&app, req).await;
    assert_eq!(body["data"]["completed"], false);
    let (_, body) = send(&app, get("/api/v1/student/courses", &student)).await;
    assert_eq!(body["data"][0]["progress"], 0.0);
}

#[actix_web::test]
async fn test_lecturer_manages_students() {
    let (app, _storage, _) = setup().await;
    let (_, lecturer) = account(&app, "dosen@kampus.ac.id", "dosen").await;
    let (_, other) = account(&app, "lain@kampus.ac.id", "dosen").await;
    let course = create_course(&app, &lecturer, &[("title", "Fisika")]).await;
    let students_uri = format!("/api/v1/lecturer/courses/{}/students", course["id"]);

    let (status, body) = send(
        &app,
        post_json(
            &students_uri,
            &lecturer,
            json!({
                "name": "Ayu",
                "email": "ayu@kampus.ac.id",
                "password": "ayu12345",
                "disabilities": ["tuna rungu"]
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let student_id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["role"], "student");

    let (status, body) = send(&app, get(&students_uri, &lecturer)).await;
    assert_eq!(status, StatusCode::OK);
    let list = body["data"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["email"], "ayu@kampus.ac.id");
    assert_eq!(list[0]["accessibility"]["tuna_rungu"], true);

    // 新学生可以直接登录
    let (status, _) = login(&app, "ayu@kampus.ac.id", "ayu12345").await;
    assert_eq!(status, StatusCode::OK);

    let student_uri = format!("/api/v1/lecturer/students/{student_id}");
    let update = json!({
        "name": "Ayu Lestari",
        "email": "ayu@kampus.ac.id",
        "password": "",
        "disabilities": ["tuna netra"]
    });
    let (status, _) = send(&app, put_json(&student_uri, &other, update.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, body) = send(&app, put_json(&student_uri, &lecturer, update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Ayu Lestari");
    // 空密码保留原密码
    let (status, _) = login(&app, "ayu@kampus.ac.id", "ayu12345").await;
    assert_eq!(status, StatusCode::OK);

    // 资料和无障碍偏好一起更新
    let (_, body) = send(&app, get(&students_uri, &lecturer)).await;
    let listed = &body["data"][0];
    assert_eq!(listed["name"], "Ayu Lestari");
    assert_eq!(listed["accessibility"]["tuna_netra"], true);
    assert_eq!(listed["accessibility"]["tuna_rungu"], false);

    let (status, _) = send(&app, delete(&student_uri, &other)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(&app, delete(&student_uri, &lecturer)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, delete(&student_uri, &lecturer)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_import_students_from_csv() {
    let (app, _storage, _) = setup().await;
    let (_, lecturer) = account(&app, "dosen@kampus.ac.id", "dosen").await;
    register(&app, "Lama", "lama@kampus.ac.id", "mahasiswa").await;

    let csv = "nama,email,password,disabilitas\n\
               Andi,andi@kampus.ac.id,andi1234,tuna netra;tuna rungu\n\
               Bela,bela@kampus.ac.id,bela1234,\n\
               Lama,lama@kampus.ac.id,lama1234,\n\
               TanpaPassword,kurang@kampus.ac.id\n\
               Cici,bukan-email,cici1234,\n";
    let req = multipart(
        TestRequest::post(),
        "/api/v1/lecturer/students/import",
        &lecturer,
        &[],
        Some(FilePart {
            field: "file",
            file_name: "siswa.csv",
            bytes: csv.as_bytes(),
        }),
    );
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["count"], 2);
    assert_eq!(body["data"]["skipped"], 3);

    let (status, _) = login(&app, "andi@kampus.ac.id", "andi1234").await;
    assert_eq!(status, StatusCode::OK);

    let req = multipart(
        TestRequest::post(),
        "/api/v1/lecturer/students/import",
        &lecturer,
        &[("other", "x")],
        None,
    );
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
