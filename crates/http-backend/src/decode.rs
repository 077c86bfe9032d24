use mime::Mime;
use portal_api::Error;
use reqwest::{Response, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Error body FastAPI-style services return along with a failure status.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// A successful response body, not yet decoded.
pub struct Body {
    content_type: Option<String>,
    text: String,
}

impl Body {
    /// Decodes the body as `T`.
    ///
    /// The content type is not checked up front; it only shows up in the
    /// error when a body that is not labelled as JSON fails to parse.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        trace!("got response body: {}", self.text);
        serde_json::from_str(&self.text).map_err(|err| {
            match self.content_type.as_deref() {
                Some(content_type) if !is_json(content_type) => Error::decode(
                    format!("unexpected content type {content_type}: {err}"),
                ),
                _ => Error::decode(format!("{err}")),
            }
        })
    }

    /// Decodes the body as `T`, falling back to `T::default()`.
    pub fn json_or_default<T: DeserializeOwned + Default>(&self) -> T {
        self.json().unwrap_or_else(|err| {
            debug!("ignoring undecodable body: {err}");
            T::default()
        })
    }
}

/// Reads a response body, classifying failures.
///
/// A non-success status becomes a status error carrying the status line and
/// the server's `detail` when it sent one.
pub async fn read_body(resp: Response) -> Result<Body, Error> {
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned);
    let text = resp
        .text()
        .await
        .map_err(|err| Error::transport(format!("{err}")))?;

    if !status.is_success() {
        let detail = serde_json::from_str::<ErrorBody>(&text)
            .map(|b| b.detail)
            .ok();
        let message = match detail {
            Some(detail) => format!("{status}: {detail}"),
            None => status.to_string(),
        };
        return Err(Error::status(message));
    }

    Ok(Body { content_type, text })
}

fn is_json(content_type: &str) -> bool {
    content_type
        .parse::<Mime>()
        .map(|m| {
            m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON)
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_json() {
        assert!(is_json("application/json"));
        assert!(is_json("application/json; charset=utf-8"));
        assert!(is_json("application/problem+json"));
        assert!(!is_json("text/html"));
        assert!(!is_json("not a mime"));
    }

    fn body(content_type: Option<&str>, text: &str) -> Body {
        Body {
            content_type: content_type.map(ToOwned::to_owned),
            text: text.to_owned(),
        }
    }

    #[test]
    fn test_json_ignores_content_type_when_body_parses() {
        let value: serde_json::Value =
            body(Some("text/plain"), r#"{"a":1}"#).json().unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_json_error_names_unexpected_content_type() {
        let err = body(Some("text/html"), "<h1>oops</h1>")
            .json::<serde_json::Value>()
            .unwrap_err();
        assert_eq!(err.kind(), portal_api::ErrorKind::Decode);
        assert!(err.message().contains("text/html"));

        let err = body(Some("application/json"), "{")
            .json::<serde_json::Value>()
            .unwrap_err();
        assert!(!err.message().contains("content type"));
    }

    #[test]
    fn test_json_or_default() {
        #[derive(Debug, Default, PartialEq, Deserialize)]
        struct Liveness {
            #[serde(default)]
            status: String,
        }
        let parsed: Liveness =
            body(None, r#"{"status":"up"}"#).json_or_default();
        assert_eq!(parsed.status, "up");
        let fallback: Liveness =
            body(Some("text/plain"), "OK").json_or_default();
        assert_eq!(fallback, Liveness::default());
    }
}
