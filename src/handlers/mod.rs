//! # HTTP Handlers Module
//!
//! actix-web 핸들러 함수들입니다. 각 핸들러는 입력을 추출하고 `validator`로 검증한 뒤
//! `web::Data`로 주입된 서비스를 호출하여 `HttpResponse`를 만듭니다.
//!
//! - [`physicians`] - `/medicos`
//! - [`specialties`] - `/especialidades`
//! - [`users`] - `/usuarios`

pub mod physicians;
pub mod specialties;
pub mod users;
