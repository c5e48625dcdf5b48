// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow};
use repboard_api::Client;
use repboard_app::{DealStatus, RepId};
use std::io::Read;
use std::thread;
use std::time::Duration;
use tiny_http::{Header, Response, Server};

fn json_header() -> Header {
    Header::from_bytes("Content-Type", "application/json").expect("valid content type header")
}

#[test]
fn fetch_error_mentions_unreachable_endpoint() {
    let client = Client::new("http://127.0.0.1:1", Duration::from_millis(50))
        .expect("client should initialize");

    let error = client
        .fetch_sales_reps()
        .expect_err("fetch should fail for unreachable endpoint");
    assert!(error.to_string().contains("cannot reach"));
}

#[test]
fn invalid_base_url_is_rejected() {
    let error = Client::new("not a url", Duration::from_secs(1))
        .expect_err("client should reject an unparseable base URL");
    assert!(format!("{error:#}").contains("invalid api.base_url"));
}

#[test]
fn fetch_decodes_full_roster() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        assert_eq!(request.url(), "/api/sales-reps");

        let body = r#"{
            "salesReps": [
                {
                    "id": 1,
                    "name": "Jane",
                    "role": "Account Executive",
                    "region": "West",
                    "skills": ["CRM"],
                    "deals": [{"client": "Acme", "value": 5000, "status": "Closed Won"}],
                    "clients": [{"name": "Acme Corp", "industry": "Retail", "contact": "a@x.com"}]
                }
            ]
        }"#;
        let response = Response::from_string(body)
            .with_status_code(200)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let reps = client.fetch_sales_reps()?;
    assert_eq!(reps.len(), 1);

    let rep = &reps[0];
    assert_eq!(rep.id, RepId::new(1));
    assert_eq!(rep.name, "Jane");
    assert_eq!(rep.skills, vec!["CRM".to_owned()]);
    assert_eq!(rep.deals[0].client, "Acme");
    assert_eq!(rep.deals[0].value, 5000);
    assert_eq!(rep.deals[0].status, DealStatus::ClosedWon);
    assert_eq!(rep.clients[0].contact, "a@x.com");

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn fetch_treats_missing_sales_reps_as_empty() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        let response = Response::from_string(r#"{"message": "no roster today"}"#)
            .with_status_code(200)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let reps = client.fetch_sales_reps()?;
    assert!(reps.is_empty());

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn fetch_surfaces_detail_from_error_envelope() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        let response = Response::from_string(r#"{"detail": "roster store offline"}"#)
            .with_status_code(500)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let error = client
        .fetch_sales_reps()
        .expect_err("fetch should surface the server error");
    assert_eq!(error.to_string(), "server error (500): roster store offline");

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn fetch_rejects_malformed_payload() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        let response = Response::from_string("this is not json")
            .with_status_code(200)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let error = client
        .fetch_sales_reps()
        .expect_err("fetch should reject a malformed payload");
    assert!(format!("{error:#}").contains("decode sales rep payload"));

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn ask_posts_question_and_returns_answer() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let mut request = server.recv().expect("request expected");
        assert_eq!(request.url(), "/api/ai");

        let mut body = String::new();
        request
            .as_reader()
            .read_to_string(&mut body)
            .expect("read request body");
        assert_eq!(body, r#"{"question":"What is our top region?"}"#);

        let response = Response::from_string(r#"{"answer": "West"}"#)
            .with_status_code(200)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let answer = client.ask("What is our top region?")?;
    assert_eq!(answer, "West");

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn ask_collapses_plain_failure_bodies() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        let response = Response::from_string("Service Unavailable").with_status_code(503);
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let error = client
        .ask("anything")
        .expect_err("ask should surface the server error");
    assert_eq!(error.to_string(), "server error (503): Service Unavailable");

    handle.join().expect("server thread should join");
    Ok(())
}
