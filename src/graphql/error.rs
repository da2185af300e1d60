use std::fmt;

/// Errors from the GraphQL layer. The UI only ever sees the `Display` text;
/// the variants exist so logs and tests can tell failures apart.
#[derive(Debug)]
pub enum GraphQlError {
    /// Client misconfigured (header value rejected, TLS backend failed to build).
    Config(String),
    /// Request variables could not be encoded.
    Encode(String),
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// Endpoint answered with a non-2xx status.
    Http { status: u16, body: String },
    /// Endpoint answered 200 with a GraphQL `errors` array.
    Response(Vec<String>),
    /// Neither `data` nor `errors` in the response.
    MissingData,
    /// The body or the `data` payload did not have the expected shape.
    Parse(String),
    /// A by-key mutation matched no row.
    NotFound { entity: &'static str, id: String },
}

impl fmt::Display for GraphQlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphQlError::Config(msg) => write!(f, "config error: {msg}"),
            GraphQlError::Encode(msg) => write!(f, "could not encode variables: {msg}"),
            GraphQlError::Network(msg) => write!(f, "network error: {msg}"),
            GraphQlError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            GraphQlError::Response(messages) => write!(f, "{}", messages.join("; ")),
            GraphQlError::MissingData => write!(f, "response carried no data"),
            GraphQlError::Parse(msg) => write!(f, "unexpected response: {msg}"),
            GraphQlError::NotFound { entity, id } => write!(f, "no {entity} with id {id}"),
        }
    }
}

impl std::error::Error for GraphQlError {}
