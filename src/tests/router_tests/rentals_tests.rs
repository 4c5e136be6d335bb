// src/tests/router_tests/rentals_tests.rs

use crate::api::v1;
use crate::db::connection::Database;
use crate::db::RentalRepository;
use crate::errors::ServerError;
use crate::responses::error_response;
use crate::router::handle;
use crate::service::RentalLookupService;
use crate::tests::utils::{seeded_db, temp_db_path};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

fn service(db: Database) -> RentalLookupService {
    RentalLookupService::new(RentalRepository::new(db))
}

fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

/// Route the request and render errors the way the server does.
fn call(uri: &str, svc: &RentalLookupService) -> Response {
    match handle(get(uri), svc) {
        Ok(resp) => resp,
        Err(err) => error_response(err),
    }
}

fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

fn content_type(resp: &Response) -> &str {
    resp.headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

#[test]
fn get_rental_by_id() {
    let svc = service(seeded_db("http_get"));

    let mut resp = call("/v1/rentals/1", &svc);
    assert_eq!(resp.status(), 200);
    assert_eq!(content_type(&resp), "application/json");

    let rental: v1::Rental = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(rental.id, 1);
    assert_eq!(rental.kind, "camper-van");
    assert_eq!(rental.make, "Volkswagen");
    assert_eq!(rental.price.day, 120);
    assert_eq!(rental.location.city, "Portland");
    assert_eq!(rental.user.first_name, "Ada");
}

#[test]
fn unknown_rental_is_404() {
    let svc = service(seeded_db("http_404"));

    let resp = call("/v1/rentals/3000", &svc);
    assert_eq!(resp.status(), 404);
}

#[test]
fn non_numeric_id_is_400() {
    let svc = service(seeded_db("http_bad_id"));

    let mut resp = call("/v1/rentals/abc", &svc);
    assert_eq!(resp.status(), 400);
    assert!(body_string(&mut resp).contains("valid number"));
}

#[test]
fn list_applies_filters_and_sort() {
    let svc = service(seeded_db("http_list"));

    let mut resp = call(
        "/v1/rentals?price_min=50&price_max=300&sort=price&limit=3&offset=1",
        &svc,
    );
    assert_eq!(resp.status(), 200);

    let rentals: Vec<v1::Rental> = serde_json::from_str(&body_string(&mut resp)).unwrap();
    let ids: Vec<i64> = rentals.iter().map(|r| r.id).collect();
    // 60, 120, 175, 200 -> skip one, take three
    assert_eq!(ids, vec![1, 4, 2]);
}

#[test]
fn list_near_point() {
    let svc = service(seeded_db("http_near"));

    let mut resp = call("/v1/rentals?near=45.52,-122.68&sort=id", &svc);
    assert_eq!(resp.status(), 200);

    let rentals: Vec<v1::Rental> = serde_json::from_str(&body_string(&mut resp)).unwrap();
    let ids: Vec<i64> = rentals.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 5]);
}

#[test]
fn url_encoded_ids_are_decoded() {
    let svc = service(seeded_db("http_encoded"));

    let mut resp = call("/v1/rentals?ids=2%2C3&sort=id", &svc);
    assert_eq!(resp.status(), 200);

    let rentals: Vec<v1::Rental> = serde_json::from_str(&body_string(&mut resp)).unwrap();
    let ids: Vec<i64> = rentals.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn empty_result_is_empty_array() {
    let svc = service(seeded_db("http_empty"));

    let mut resp = call("/v1/rentals?price_min=100000", &svc);
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(&mut resp), "[]");
}

#[test]
fn invalid_parameters_are_400() {
    let svc = service(seeded_db("http_invalid"));

    for uri in [
        "/v1/rentals?sort=foo",
        "/v1/rentals?sort=price_per_day",
        "/v1/rentals?ids=1,2,x",
        "/v1/rentals?ids=",
        "/v1/rentals?near=45.5",
        "/v1/rentals?near=abc,1",
        "/v1/rentals?limit=ten",
        "/v1/rentals?price_min=cheap",
    ] {
        let resp = call(uri, &svc);
        assert_eq!(resp.status(), 400, "{uri}");
        assert!(content_type(&resp).starts_with("text/plain"), "{uri}");
    }
}

#[test]
fn validation_failure_never_touches_storage() {
    // No schema: any executed query would fail with a 500.
    let svc = service(Database::new(temp_db_path("http_no_query")));

    let resp = call("/v1/rentals?sort=foo", &svc);
    assert_eq!(resp.status(), 400);
}

#[test]
fn storage_failure_is_500_without_details() {
    let svc = service(Database::new(temp_db_path("http_500")));

    let mut resp = call("/v1/rentals", &svc);
    assert_eq!(resp.status(), 500);
    assert_eq!(body_string(&mut resp), "Internal Server Error");
}

#[test]
fn unknown_route_is_404() {
    let svc = service(seeded_db("http_unknown"));

    assert!(matches!(
        handle(get("/v2/rentals"), &svc),
        Err(ServerError::NotFound)
    ));

    let mut req = get("/v1/rentals");
    *req.method_mut() = Method::POST;
    assert!(matches!(handle(req, &svc), Err(ServerError::NotFound)));
}
