//! `/medicos` HTTP 동작 테스트

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};
use clinica_backend::core::context::AppContext;

mod test_support;
use test_support::{names, physician_body, test_app};

#[actix_web::test]
async fn test_create_physician_and_list() {
    let app = test::init_service(test_app(AppContext::in_memory())).await;

    let req = test::TestRequest::post()
        .uri("/medicos")
        .set_json(physician_body("João", "123", &["Cardiologia"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["nome"], "João");
    assert_eq!(created["crm"], "123");
    assert_eq!(created["especialidades"], json!(["Cardiologia"]));
    assert!(created["id"].as_str().is_some());

    let req = test::TestRequest::get().uri("/medicos").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(names(&list), vec!["João"]);
    assert_eq!(list[0]["id"], created["id"]);
}

#[actix_web::test]
async fn test_duplicate_crm_is_rejected_and_original_untouched() {
    let app = test::init_service(test_app(AppContext::in_memory())).await;

    let req = test::TestRequest::post()
        .uri("/medicos")
        .set_json(physician_body("João", "123", &[]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/medicos")
        .set_json(physician_body("Impostor", "123", &[]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "CRM já cadastrado" }));

    let req = test::TestRequest::get().uri("/medicos").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(names(&list), vec!["João"]);
}

#[actix_web::test]
async fn test_name_and_specialty_filters() {
    let app = test::init_service(test_app(AppContext::in_memory())).await;

    for (nome, crm, especialidades) in [
        ("João", "1", vec!["Cardiologia"]),
        ("Joana", "2", vec!["Pediatria", "Cardiologia Infantil"]),
        ("Pedro", "3", vec!["Cardiologia", "Clínica Geral"]),
    ] {
        let req = test::TestRequest::post()
            .uri("/medicos")
            .set_json(physician_body(nome, crm, &especialidades))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/medicos?nome=jo").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(names(&list), vec!["João", "Joana"]);

    let req = test::TestRequest::get().uri("/medicos?especialidade=Cardiologia").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(names(&list), vec!["João", "Pedro"]);

    let req = test::TestRequest::get()
        .uri("/medicos?nome=JO&especialidade=Cardiologia")
        .to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(names(&list), vec!["João"]);

    // 빈 필터는 무시됩니다
    let req = test::TestRequest::get().uri("/medicos?nome=&especialidade=").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list.as_array().map(Vec::len), Some(3));

    // 정규식 메타 문자는 리터럴로 취급됩니다
    let req = test::TestRequest::get().uri("/medicos?nome=.*").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list, json!([]));
}

#[actix_web::test]
async fn test_update_physician() {
    let app = test::init_service(test_app(AppContext::in_memory())).await;

    let req = test::TestRequest::post()
        .uri("/medicos")
        .set_json(physician_body("João", "123", &["Cardiologia", "Clínica Geral"]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::put()
        .uri("/medicos/123")
        .set_json(json!({ "nome": "João Silva", "especialidades": ["Pediatria"], "crm": "999" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["nome"], "João Silva");
    assert_eq!(updated["crm"], "123");
    assert_eq!(updated["telefone"], "11 99999-0000");
    assert_eq!(updated["especialidades"], json!(["Pediatria"]));
}

#[actix_web::test]
async fn test_update_with_null_clears_field() {
    let app = test::init_service(test_app(AppContext::in_memory())).await;

    let req = test::TestRequest::post()
        .uri("/medicos")
        .set_json(physician_body("Ana", "1", &["Pediatria"]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::put()
        .uri("/medicos/1")
        .set_json(json!({ "nome": "Ana", "telefone": null }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["telefone"], Value::Null);
    assert_eq!(updated["email"], "1@clinica.com");

    let req = test::TestRequest::get().uri("/medicos").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list[0]["telefone"], Value::Null);
    assert_eq!(list[0]["especialidades"], json!(["Pediatria"]));
}

#[actix_web::test]
async fn test_missing_crm_is_404_not_500() {
    let app = test::init_service(test_app(AppContext::in_memory())).await;

    let req = test::TestRequest::put()
        .uri("/medicos/nao-existe")
        .set_json(json!({ "nome": "X" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Médico não encontrado" }));

    let req = test::TestRequest::delete().uri("/medicos/nao-existe").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_physician() {
    let app = test::init_service(test_app(AppContext::in_memory())).await;

    let req = test::TestRequest::post()
        .uri("/medicos")
        .set_json(physician_body("João", "123", &[]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::delete().uri("/medicos/123").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "mensagem": "Médico deletado com sucesso" }));

    let req = test::TestRequest::get().uri("/medicos/").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list, json!([]));
}

#[actix_web::test]
async fn test_invalid_bodies_are_400() {
    let app = test::init_service(test_app(AppContext::in_memory())).await;

    let req = test::TestRequest::post()
        .uri("/medicos")
        .set_json(json!({ "nome": "Sem CRM", "crm": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/medicos")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().is_some());
}
