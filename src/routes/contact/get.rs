use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

use crate::page::ContactPage;

pub async fn contact_form() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(ContactPage::default().render())
}
