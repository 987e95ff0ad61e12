use crate::utils::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower-cased search term, as typed by the user. Not validated: the empty
/// string is a legal term and is forwarded to the remote service as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn from_input(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier the museum API assigns to a catalog object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the detail request is issued for. `Undefined` only occurs under
/// [`ResponsePolicy::Lenient`] when the search matched nothing; it is
/// rendered into the URL as the literal `undefined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectRef {
    Id(ObjectId),
    Undefined,
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectRef::Id(id) => id.fmt(f),
            ObjectRef::Undefined => f.write_str("undefined"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponsePolicy {
    /// Reject non-2xx statuses and any response whose field we read is
    /// missing or empty.
    #[default]
    Strict,
    /// Behave like the plain browser page: ignore statuses, pass an
    /// undefined identifier along, insert images with an empty source.
    Lenient,
}

impl std::str::FromStr for ResponsePolicy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(ResponsePolicy::Strict),
            "lenient" => Ok(ResponsePolicy::Lenient),
            other => Err(SearchError::InvalidConfigValueError {
                field: "behavior.policy".to_string(),
                value: other.to_string(),
                reason: "Expected 'strict' or 'lenient'".to_string(),
            }),
        }
    }
}

/// A fetched and JSON-decoded response, before any shape checks.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub url: String,
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Under the strict policy a non-2xx status ends the cycle.
    pub fn check_status(&self, policy: ResponsePolicy) -> Result<()> {
        if policy == ResponsePolicy::Strict && !self.is_success() {
            return Err(SearchError::HttpStatus {
                url: self.url.clone(),
                status: self.status,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultSet {
    pub object_ids: Vec<ObjectId>,
}

impl SearchResultSet {
    /// `objectIDs` must be present and an array. The remote service answers
    /// `null` for no matches, which is treated the same as a missing field.
    pub fn parse(response: &ApiResponse) -> Result<Self> {
        let ids = match response.body.get("objectIDs") {
            Some(serde_json::Value::Array(items)) => items,
            Some(serde_json::Value::Null) | None => {
                return Err(SearchError::malformed(
                    &response.url,
                    "objectIDs is missing or null",
                ))
            }
            Some(_) => {
                return Err(SearchError::malformed(
                    &response.url,
                    "objectIDs is not an array",
                ))
            }
        };

        let object_ids = ids
            .iter()
            .map(|v| {
                v.as_u64().map(ObjectId).ok_or_else(|| {
                    SearchError::malformed(
                        &response.url,
                        format!("objectIDs contains a non-integer entry: {}", v),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { object_ids })
    }

    pub fn top_result(&self) -> Option<ObjectId> {
        self.object_ids.first().copied()
    }

    /// Picks the identifier the detail request is issued for.
    pub fn top_ref(&self, policy: ResponsePolicy, endpoint: &str) -> Result<ObjectRef> {
        match (self.top_result(), policy) {
            (Some(id), _) => Ok(ObjectRef::Id(id)),
            (None, ResponsePolicy::Lenient) => Ok(ObjectRef::Undefined),
            (None, ResponsePolicy::Strict) => {
                Err(SearchError::malformed(endpoint, "objectIDs is empty"))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuseumObject {
    pub primary_image_small: String,
}

impl MuseumObject {
    pub fn parse(response: &ApiResponse, policy: ResponsePolicy) -> Result<Self> {
        let field = response
            .body
            .get("primaryImageSmall")
            .and_then(|v| v.as_str());

        match (field, policy) {
            (Some(url), ResponsePolicy::Strict) if url.trim().is_empty() => Err(
                SearchError::malformed(&response.url, "primaryImageSmall is empty"),
            ),
            (Some(url), _) => Ok(Self {
                primary_image_small: url.to_string(),
            }),
            (None, ResponsePolicy::Strict) => Err(SearchError::malformed(
                &response.url,
                "primaryImageSmall is missing or not a string",
            )),
            (None, ResponsePolicy::Lenient) => Ok(Self {
                primary_image_small: String::new(),
            }),
        }
    }
}

/// An `<img>` element placed in the main container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageElement {
    pub src: String,
}

impl ImageElement {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }
}
