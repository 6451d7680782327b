//! The typed call pipeline.

use std::collections::BTreeMap;
use std::sync::Arc;

use roho_core::{ApiError, ClientError, Context, Results};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::{with_trailing_slash, ClientConfig, DEFAULT_API_URL, DEFAULT_CRYPTO_URL};
use crate::params::{with_query, QueryParams};
use crate::transport::{Request, ReqwestTransport, Transport, Url};

/// Brokerage API client.
///
/// Cloning is cheap; clones share the transport and its connection pool.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    base_url: String,
    crypto_url: String,
}

impl Client {
    /// Create a client over `transport` using the default API hosts.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: DEFAULT_API_URL.to_string(),
            crypto_url: DEFAULT_CRYPTO_URL.to_string(),
        }
    }

    /// Create a reqwest-backed client from configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self {
            transport: Arc::new(transport),
            base_url: with_trailing_slash(config.base_url.clone()),
            crypto_url: with_trailing_slash(config.crypto_url.clone()),
        })
    }

    /// Create from the `RH_TOKEN` environment variable.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_config(&ClientConfig::from_env()?)
    }

    pub fn with_base_urls(mut self, base_url: &str, crypto_url: &str) -> Self {
        self.base_url = with_trailing_slash(base_url.to_string());
        self.crypto_url = with_trailing_slash(crypto_url.to_string());
        self
    }

    /// `<base>/<path>/`
    pub fn api_url(&self, path: &str) -> Result<Url, ClientError> {
        join(&self.base_url, path)
    }

    /// `<crypto base>/<path>/`
    pub fn crypto_url(&self, path: &str) -> Result<Url, ClientError> {
        join(&self.crypto_url, path)
    }

    /// Execute `request` and decode the response into `T`.
    ///
    /// Error statuses become [`ClientError::Api`] when the body is a
    /// non-empty JSON object and [`ClientError::MalformedErrorBody`]
    /// otherwise. Cancelling `ctx` drops the in-flight request.
    pub async fn call<T>(&self, ctx: &Context, request: Request) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        debug!("{} {:?}", request.method(), request.url().as_str());

        let response = ctx.run(self.transport.execute(&request)).await??;

        if response.is_error() {
            debug!(
                status = response.status,
                "{:?} failed: {}",
                request.url().as_str(),
                String::from_utf8_lossy(&response.body)
            );
        } else {
            trace!(
                "{:?} response: {}",
                request.url().as_str(),
                String::from_utf8_lossy(&response.body)
            );
        }

        decode_response(request.url().as_str(), response.status, &response.body)
    }

    pub async fn get<T>(&self, ctx: &Context, url: Url) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        self.call(ctx, Request::get(url)).await
    }

    pub async fn post<T, B>(&self, ctx: &Context, url: Url, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)
            .map_err(|e| ClientError::InvalidRequest(format!("encode request body: {e}")))?;
        self.call(ctx, Request::post(url, body)).await
    }

    /// GET a `{"results": [...]}` endpoint with query parameters.
    pub(crate) async fn list<T, P>(
        &self,
        ctx: &Context,
        url: Url,
        params: &P,
    ) -> Result<Vec<T>, ClientError>
    where
        T: DeserializeOwned,
        P: QueryParams + ?Sized,
    {
        let results: Results<T> = self.get(ctx, with_query(url, params)).await?;
        Ok(results.results)
    }
}

fn join(base: &str, path: &str) -> Result<Url, ClientError> {
    let raw = format!("{base}{}/", path.trim_matches('/'));
    Url::parse(&raw).map_err(|e| ClientError::InvalidRequest(format!("{raw:?}: {e}")))
}

/// Classify a response and decode it.
///
/// An empty success body decodes as `{}` (then `null`), so destinations made
/// only of defaulted fields come back empty rather than failing.
pub fn decode_response<T>(url: &str, status: u16, body: &[u8]) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    if status >= 400 {
        return Err(decode_error_body(status, body));
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_str("{}")
            .or_else(|_| serde_json::from_str("null"))
            .map_err(|source| ClientError::Decode {
                url: url.to_string(),
                source,
            });
    }

    serde_json::from_slice(body).map_err(|source| ClientError::Decode {
        url: url.to_string(),
        source,
    })
}

fn decode_error_body(status: u16, body: &[u8]) -> ClientError {
    match serde_json::from_slice::<BTreeMap<String, Value>>(body) {
        Ok(fields) if !fields.is_empty() => ClientError::Api(ApiError::new(fields)),
        _ => ClientError::MalformedErrorBody {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use crate::transport::RawResponse;
    use roho_core::TransportError;
    use serde::Deserialize;
    use serde_json::json;
    use std::time::Duration;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Widget {
        name: String,
        #[serde(with = "roho_core::quoted")]
        price: f64,
    }

    #[derive(Debug, Deserialize, PartialEq, Default)]
    struct Empty {
        #[serde(default)]
        results: Vec<String>,
    }

    fn url() -> &'static str {
        "https://api.robinhood.com/widgets/"
    }

    #[test]
    fn test_success_decodes_destination() {
        let w: Widget =
            decode_response(url(), 200, br#"{"name": "spy", "price": "12.34"}"#).unwrap();
        assert_eq!(
            w,
            Widget {
                name: "spy".into(),
                price: 12.34
            }
        );

        let w: Widget = decode_response(url(), 201, br#"{"name": "a", "price": 1}"#).unwrap();
        assert_eq!(w.price, 1.0);
    }

    #[test]
    fn test_error_status_yields_api_error() {
        let body = json!({"detail": "Not found.", "code": ["x", "y"], "n": 3});
        let err = decode_response::<Widget>(url(), 404, body.to_string().as_bytes()).unwrap_err();

        let api = err.api_error().expect("api error");
        let expected: BTreeMap<String, Value> = serde_json::from_value(body).unwrap();
        assert_eq!(api.fields(), &expected);

        let text = err.to_string();
        for key in expected.keys() {
            assert!(text.contains(key.as_str()), "{text} missing {key}");
        }
    }

    #[test]
    fn test_insufficient_funds_error() {
        let body = br#"{"non_field_errors": ["insufficient funds"]}"#;
        let err = decode_response::<Value>(url(), 400, body).unwrap_err();

        let api = err.api_error().unwrap();
        assert_eq!(api.len(), 1);
        assert_eq!(
            api.get("non_field_errors"),
            Some(&json!(["insufficient funds"]))
        );
    }

    #[test]
    fn test_non_object_error_body_is_malformed() {
        for body in [&b"[1, 2]"[..], b"<html>bad gateway</html>", b"\"oops\"", b"{}", b""] {
            let err = decode_response::<Value>(url(), 502, body).unwrap_err();
            match err {
                ClientError::MalformedErrorBody { status, body: raw } => {
                    assert_eq!(status, 502);
                    assert_eq!(raw.as_bytes(), body);
                }
                other => panic!("expected malformed body, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_success_body() {
        let e: Empty = decode_response(url(), 204, b"").unwrap();
        assert_eq!(e, Empty::default());

        let unit: () = decode_response(url(), 200, b"  ").unwrap();
        assert_eq!(unit, ());

        assert!(matches!(
            decode_response::<Widget>(url(), 200, b""),
            Err(ClientError::Decode { .. })
        ));
    }

    #[test]
    fn test_shape_mismatch_is_decode_error() {
        let err = decode_response::<Widget>(url(), 200, br#"{"name": 5}"#).unwrap_err();
        match err {
            ClientError::Decode { url: u, .. } => assert_eq!(u, url()),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_api_url_joins_paths() {
        let client = Client::new(Arc::new(MockTransport::new()));
        assert_eq!(
            client.api_url("quotes").unwrap().as_str(),
            "https://api.robinhood.com/quotes/"
        );
        assert_eq!(
            client.api_url("options/aggregate_positions").unwrap().as_str(),
            "https://api.robinhood.com/options/aggregate_positions/"
        );
        assert_eq!(
            client.crypto_url("holdings").unwrap().as_str(),
            "https://nummus.robinhood.com/holdings/"
        );
    }

    #[tokio::test]
    async fn test_custom_base_urls() {
        let mock = Arc::new(MockTransport::new().respond(200, "{}"));
        let client = Client::new(mock.clone())
            .with_base_urls("http://localhost:8080", "http://localhost:8081/crypto");

        assert_eq!(
            client.api_url("/quotes/").unwrap().as_str(),
            "http://localhost:8080/quotes/"
        );
        assert_eq!(
            client.crypto_url("holdings").unwrap().as_str(),
            "http://localhost:8081/crypto/holdings/"
        );

        let url = client.api_url("accounts").unwrap();
        let _: Value = client.get(&Context::background(), url).await.unwrap();
        assert_eq!(
            mock.requests()[0].url().as_str(),
            "http://localhost:8080/accounts/"
        );
    }

    #[tokio::test]
    async fn test_call_roundtrip_through_transport() {
        let mock = Arc::new(
            MockTransport::new().respond(200, r#"{"name": "spy", "price": "400.00"}"#),
        );
        let client = Client::new(mock.clone());

        let url = client.api_url("widgets").unwrap();
        let w: Widget = client.get(&Context::background(), url).await.unwrap();

        assert_eq!(w.price, 400.0);
        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method(), &crate::Method::GET);
    }

    #[tokio::test]
    async fn test_transport_failure_is_surfaced() {
        let mock = Arc::new(
            MockTransport::new().fail(TransportError::Connect("connection refused".into())),
        );
        let client = Client::new(mock);

        let url = client.api_url("widgets").unwrap();
        let err = client
            .get::<Widget>(&Context::background(), url)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Transport(TransportError::Connect(_))));
    }

    #[tokio::test]
    async fn test_cancel_aborts_inflight_request() {
        let mock = Arc::new(
            MockTransport::new()
                .with_delay(Duration::from_secs(30))
                .respond(200, "{}"),
        );
        let client = Client::new(mock);
        let (ctx, handle) = Context::background().with_cancel();

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            handle.cancel();
        });

        let started = std::time::Instant::now();
        let url = client.api_url("widgets").unwrap();
        let err = client.get::<Value>(&ctx, url).await.unwrap_err();
        canceller.await.unwrap();

        assert!(matches!(err, ClientError::Cancelled));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_deadline_aborts_inflight_request() {
        let mock = Arc::new(
            MockTransport::new()
                .with_delay(Duration::from_secs(30))
                .respond(200, "{}"),
        );
        let client = Client::new(mock);
        let ctx = Context::background().with_timeout(Duration::from_millis(20));

        let url = client.api_url("widgets").unwrap();
        let err = client.get::<Value>(&ctx, url).await.unwrap_err();
        assert!(matches!(err, ClientError::DeadlineExceeded));
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let mock = Arc::new(MockTransport::new().push(Ok(RawResponse::new(201, "{}"))));
        let client = Client::new(mock.clone());

        let url = client.api_url("widgets").unwrap();
        let _: Value = client
            .post(&Context::background(), url, &json!({"name": "spy"}))
            .await
            .unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method(), &crate::Method::POST);
        assert_eq!(requests[0].body(), Some(&json!({"name": "spy"})));
    }
}
