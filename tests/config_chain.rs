//! Config file to running chain.

use axum::http::StatusCode;
use tower::ServiceExt;

use rest_interceptor::config::{build_chain, loader::parse_config};

mod common;

const CONFIG: &str = r#"
[[interceptors]]
name = "api-key"
[interceptors.logic]
type = "require_header"
header = "x-api-key"
[[interceptors.include]]
path = "/api/**"
methods = ["GET", "POST"]
[[interceptors.exclude]]
path = "/api/public/**"
methods = ["GET"]

[[interceptors]]
name = "audit"
order = -1
[interceptors.logic]
type = "log"
[[interceptors.include]]
path = "/**"
"#;

#[tokio::test]
async fn test_config_driven_chain() {
    let config = parse_config(CONFIG).unwrap();
    let chain = build_chain(&config).unwrap();
    assert_eq!(chain.names(), vec!["audit", "api-key"]);

    let app = common::app(chain);

    let res = app.clone().oneshot(common::request("POST", "/api/orders")).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app.clone().oneshot(common::request("GET", "/api/public/docs")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // Exclusion is GET-only
    let res = app.clone().oneshot(common::request("POST", "/api/public/docs")).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app.oneshot(common::request("GET", "/home")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
