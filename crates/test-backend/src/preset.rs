use portal_api::{Error, ErrorKind};
use serde::{Deserialize, Serialize};

/// How a scripted call should end.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Preset<T> {
    /// The call succeeds with this value.
    #[serde(rename = "reply")]
    Reply(T),
    /// The call fails.
    #[serde(rename = "failure")]
    Failure(PresetFailure),
}

impl<T> Preset<T> {
    /// Creates a failing preset.
    #[inline]
    pub fn failure<S: Into<String>>(kind: FailureKind, message: S) -> Self {
        Preset::Failure(PresetFailure {
            kind,
            message: message.into(),
        })
    }

    pub(crate) fn into_result(self) -> Result<T, Error> {
        match self {
            Preset::Reply(value) => Ok(value),
            Preset::Failure(failure) => Err(failure.into()),
        }
    }
}

/// Mirrors [`ErrorKind`] in a serializable form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// See [`ErrorKind::Transport`].
    Transport,
    /// See [`ErrorKind::Status`].
    Status,
    /// See [`ErrorKind::Decode`].
    Decode,
}

/// A scripted failure.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresetFailure {
    /// Which class of error to produce.
    pub kind: FailureKind,
    /// The error message.
    pub message: String,
}

impl From<PresetFailure> for Error {
    fn from(failure: PresetFailure) -> Self {
        let kind = match failure.kind {
            FailureKind::Transport => ErrorKind::Transport,
            FailureKind::Status => ErrorKind::Status,
            FailureKind::Decode => ErrorKind::Decode,
        };
        Error::new(kind, failure.message)
    }
}

#[cfg(test)]
mod tests {
    use portal_api::ChatReply;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_load_script_from_json() {
        let script: Vec<Preset<ChatReply>> = serde_json::from_value(json!([
            { "type": "reply", "data": { "response": "Docker is a container runtime." } },
            { "type": "failure", "data": { "kind": "transport", "message": "connection refused" } },
        ]))
        .unwrap();

        assert_eq!(script.len(), 2);
        let mut script = script.into_iter();

        let reply = script.next().unwrap().into_result().unwrap();
        assert_eq!(reply.response, "Docker is a container runtime.");
        assert!(reply.sources.is_empty());

        let err = script.next().unwrap().into_result().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.message(), "connection refused");
    }
}
