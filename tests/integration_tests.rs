use httpmock::prelude::*;
use patent_term::{JsonFileSource, PairClient, PatentError, TermEngine, TomlConfig};
use tempfile::TempDir;

fn pair_response(doc: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "queryResults": {
            "searchResponse": {
                "response": { "numFound": 1, "docs": [doc] }
            }
        }
    })
}

fn config_for(server: &MockServer) -> TomlConfig {
    let toml_content = format!(
        r#"
[source]
endpoint = "{}"
timeout_seconds = 5
"#,
        server.url("/api/queries")
    );
    TomlConfig::from_toml_str(&toml_content).unwrap()
}

#[tokio::test]
async fn test_end_to_end_pre_1995_patent() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/queries")
            .json_body_partial(r#"{"searchText": "patentNumber:(5123456)"}"#);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(pair_response(serde_json::json!({
                "patentTitle": "Folding chair",
                "appFilingDate": "1990-01-01T00:00:00Z",
                "patentIssueDate": "1991-01-01T00:00:00Z"
            })));
    });

    let engine = TermEngine::new(PairClient::new(&config_for(&server)).unwrap());
    let text = engine.explain("5,123,456").await.unwrap();

    api_mock.assert();
    assert_eq!(
        text,
        "You asked me to calculate the expiration date for patent number 5,123,456, \
         with patent title, \"Folding chair\". The patent expires on January 1, 2010. \
         Filing was on January 1, 1990. Twenty years after was January 1, 2010. \
         The patent was issued on January 1, 1991. Seventeen years later was January 1, 2008. \
         Patent term expires the later of those dates. \
         Patent term adjustment does not apply to patents filed before 1999."
    );
}

#[tokio::test]
async fn test_end_to_end_post_1995_patent_with_adjustment() {
    let server = MockServer::start();
    let term_json = serde_json::json!({
        "patentTermAdjustmentData": {
            "adjustmentTotalQuantity": 365,
            "patentTermAdjustmentHistoryData": [
                {"caseActionDescriptionText": "Terminal Disclaimer Filed"}
            ]
        }
    })
    .to_string();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/queries");
        then.status(200).json_body(pair_response(serde_json::json!({
            "patentTitle": "Bicycle lock",
            "appFilingDate": "2000-01-01T00:00:00Z",
            "patentIssueDate": "2003-01-01T00:00:00Z",
            "patentTermJson": term_json
        })));
    });

    let engine = TermEngine::new(PairClient::new(&config_for(&server)).unwrap());
    let result = engine.lookup("9675757").await.unwrap();

    api_mock.assert();
    assert_eq!(result.expiration_date().unwrap().to_string(), "2024-01-01");
    // detected but not applied
    assert!(result.has_terminal_disclaimer);

    let text = engine.explain("9675757").await.unwrap();
    assert!(text.contains("The patent expires on January 1, 2024."));
    assert!(text.contains("There were 365 days of patent term adjustment applied."));
}

#[tokio::test]
async fn test_end_to_end_filing_on_threshold() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/queries");
        then.status(200).json_body(pair_response(serde_json::json!({
            "patentTitle": "Lamp",
            "appFilingDate": "1995-06-08T00:00:00Z",
            "patentIssueDate": "1999-03-02T00:00:00Z",
            "patentTermJson": "{\"patentTermAdjustmentData\": {\"adjustmentTotalQuantity\": 99}}"
        })));
    });

    let engine = TermEngine::new(PairClient::new(&config_for(&server)).unwrap());
    let report = engine.report("5700000").await.unwrap();

    assert_eq!(report["basis"], "pre_june_1995");
    // issue + 17 beats filing + 20, adjustment ignored
    assert_eq!(report["expiration_date"], "2016-03-02");
    assert_eq!(report["winner"], "issue_plus_seventeen");
}

#[tokio::test]
async fn test_end_to_end_not_found() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/queries");
        then.status(200).json_body(serde_json::json!({
            "queryResults": {"searchResponse": {"response": {"numFound": 0, "docs": []}}}
        }));
    });

    let engine = TermEngine::new(PairClient::new(&config_for(&server)).unwrap());
    let text = engine.explain("12000000").await.unwrap();

    api_mock.assert();
    assert_eq!(text, "Sorry, patent number 12,000,000 cannot be found in PAIR.");
}

#[tokio::test]
async fn test_end_to_end_shortcut_makes_no_request() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/queries");
        then.status(200).json_body(serde_json::json!({"docs": []}));
    });

    let engine = TermEngine::new(PairClient::new(&config_for(&server)).unwrap());
    let text = engine.explain("4999999").await.unwrap();

    api_mock.assert_hits(0);
    assert!(text.contains("patent number 4,999,999, which is a ridiculously low number"));
}

#[tokio::test]
async fn test_end_to_end_upstream_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/queries");
        then.status(500);
    });

    let engine = TermEngine::new(PairClient::new(&config_for(&server)).unwrap());
    let err = engine.explain("9675757").await.unwrap_err();

    assert!(matches!(err, PatentError::UpstreamUnavailable { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_end_to_end_from_saved_records() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let records_path = temp_dir.path().join("pair.json");
    let saved = serde_json::json!({
        "response": {
            "docs": [{
                "patentNumber": "6000000",
                "patentTitle": "Antenna",
                "appFilingDate": "1998-02-27T00:00:00Z",
                "patentIssueDate": "1999-12-07T00:00:00Z"
            }]
        }
    });
    tokio::fs::write(&records_path, serde_json::to_vec(&saved)?).await?;

    let engine = TermEngine::new(JsonFileSource::from_file(&records_path).await?);

    let first = engine.explain("6,000,000").await?;
    let second = engine.explain("6,000,000").await?;
    assert_eq!(first, second);
    assert!(first.contains("The patent expires on December 7, 2019."));
    assert!(first.contains("There were 0 days of patent term adjustment applied."));

    let missing = engine.explain("6000001").await?;
    assert_eq!(missing, "Sorry, patent number 6,000,001 cannot be found in PAIR.");
    Ok(())
}
