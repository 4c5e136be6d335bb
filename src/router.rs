use crate::api::v1;
use crate::domain::QueryParameterSet;
use crate::errors::{ResultResp, ServerError};
use crate::responses::json_response;
use crate::service::RentalLookupService;
use astra::Request;
use std::collections::HashMap;

pub fn handle(req: Request, rentals: &RentalLookupService) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/v1/rentals") => list_rentals(&req, rentals),
        ("GET", p) => match p.strip_prefix("/v1/rentals/") {
            Some(raw_id) => get_rental(raw_id, rentals),
            None => Err(ServerError::NotFound),
        },
        _ => Err(ServerError::NotFound),
    }
}

fn get_rental(raw_id: &str, rentals: &RentalLookupService) -> ResultResp {
    let rental_id: i64 = raw_id.parse().map_err(|e| {
        tracing::warn!(rental_id = raw_id, error = %e, "Incorrect rental ID");
        ServerError::BadRequest("Incorrect rental ID, please enter a valid number".into())
    })?;

    let rental = rentals.get_by_id(rental_id)?;
    json_response(&v1::Rental::from(rental))
}

fn list_rentals(req: &Request, rentals: &RentalLookupService) -> ResultResp {
    let raw = parse_query(req);
    let params = QueryParameterSet::from_raw(&raw).map_err(|e| {
        tracing::warn!(error = %e, "Rejected rentals query");
        ServerError::from(e)
    })?;

    let body: Vec<v1::Rental> = rentals
        .list(&params)?
        .into_iter()
        .map(v1::Rental::from)
        .collect();
    json_response(&body)
}

/// Decoded query-string pairs. The first occurrence of a key wins.
fn parse_query(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for (k, v) in url::form_urlencoded::parse(q.as_bytes()) {
            map.entry(k.into_owned()).or_insert_with(|| v.into_owned());
        }
    }

    map
}
