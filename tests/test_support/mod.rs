#![allow(dead_code)]

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware, App, Error};
use serde_json::{json, Value};
use clinica_backend::core::context::AppContext;
use clinica_backend::routes::configure_all_routes;

/// 주어진 컨텍스트로 테스트용 App을 구성합니다. `init_service`는 `'static` App을 요구합니다.
pub fn test_app(
    context: AppContext,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(middleware::NormalizePath::trim())
        .configure(move |cfg| context.register(cfg))
        .configure(configure_all_routes)
}

pub fn physician_body(nome: &str, crm: &str, especialidades: &[&str]) -> Value {
    json!({
        "nome": nome,
        "crm": crm,
        "telefone": "11 99999-0000",
        "email": format!("{}@clinica.com", crm),
        "biografia": "",
        "especialidades": especialidades,
    })
}

pub fn names(list: &Value) -> Vec<String> {
    list.as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["nome"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
