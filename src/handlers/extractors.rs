//! 요청 본문 추출자
//!
//! JSON(`application/json`)과 폼(`application/x-www-form-urlencoded`) 본문을 모두 받습니다.
//! `Content-Type`으로 디코더를 고르고, 실패는 `JsonConfig` / `FormConfig`에 등록된
//! 에러 핸들러를 거쳐 `400` 응답이 됩니다.
//!
//! - [`RequestBody`]: 생성 요청용. 본문이 반드시 있어야 함
//! - [`UpdateBody`]: 수정 요청용. 본문이 비어 있으면 `T::default()` (모든 필드 생략)

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, web};
use futures_util::future::{FutureExt, LocalBoxFuture, ready};
use serde::de::DeserializeOwned;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// JSON 또는 폼 본문
#[derive(Debug)]
pub struct RequestBody<T>(pub T);

impl<T> RequestBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for RequestBody<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for RequestBody<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if req.content_type() == FORM_CONTENT_TYPE {
            web::Form::<T>::from_request(req, payload)
                .map(|result| result.map(|form| RequestBody(form.into_inner())))
                .boxed_local()
        } else {
            web::Json::<T>::from_request(req, payload)
                .map(|result| result.map(|json| RequestBody(json.into_inner())))
                .boxed_local()
        }
    }
}

/// 빈 본문을 허용하는 수정 요청 본문
#[derive(Debug)]
pub struct UpdateBody<T>(pub T);

impl<T> UpdateBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for UpdateBody<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for UpdateBody<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if is_empty_body(req) {
            return ready(Ok(UpdateBody(T::default()))).boxed_local();
        }

        RequestBody::<T>::from_request(req, payload)
            .map(|result| result.map(|body| UpdateBody(body.into_inner())))
            .boxed_local()
    }
}

/// `Content-Length: 0`이거나, 길이/타입/전송 인코딩 헤더가 모두 없는 요청
fn is_empty_body(req: &HttpRequest) -> bool {
    let headers = req.headers();

    let length = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());

    match length {
        Some(length) => length == 0,
        None => {
            !headers.contains_key(header::CONTENT_TYPE)
                && !headers.contains_key(header::TRANSFER_ENCODING)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_request_without_body_headers_is_empty() {
        let req = TestRequest::put().uri("/users/1").to_http_request();
        assert!(is_empty_body(&req));
    }

    #[test]
    fn test_zero_content_length_is_empty() {
        let req = TestRequest::put()
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .insert_header((header::CONTENT_LENGTH, "0"))
            .to_http_request();
        assert!(is_empty_body(&req));
    }

    #[test]
    fn test_request_with_body_is_not_empty() {
        let req = TestRequest::put()
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .insert_header((header::CONTENT_LENGTH, "15"))
            .to_http_request();
        assert!(!is_empty_body(&req));

        let req = TestRequest::put()
            .insert_header((header::CONTENT_TYPE, FORM_CONTENT_TYPE))
            .to_http_request();
        assert!(!is_empty_body(&req));
    }
}
