//! Just enough HTTP/1.1 to read a request head and write a response.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

/// Upper bound on the size of a request line plus headers.
const MAX_HEAD_BYTES: u64 = 16 * 1024;

/// Errors reading a request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The client closed the connection before sending a request line.
    #[error("connection closed")]
    Closed,

    /// The request head could not be parsed.
    #[error("malformed request: {0}")]
    Malformed(&'static str),

    /// Socket error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A parsed request head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    /// Path without the query string, still percent-encoded.
    pub path: String,
    pub query: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl Request {
    /// Look up a header value, ignoring name case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Whether the client asked for JSON instead of HTML.
    #[must_use]
    pub fn wants_json(&self) -> bool {
        let by_query = self
            .query
            .as_deref()
            .is_some_and(|q| q.split('&').any(|pair| pair == "format=json"));
        let by_accept = self
            .header("accept")
            .is_some_and(|accept| accept.contains("application/json"));
        by_query || by_accept
    }
}

/// Read one request head (request line and headers) from `reader`.
///
/// # Errors
/// Returns `Closed` on immediate EOF, `Malformed` for anything that isn't a
/// well-formed head within the size limit.
pub async fn read_request<R>(reader: &mut R) -> Result<Request, RequestError>
where
    R: AsyncBufRead + Unpin,
{
    let mut limited = reader.take(MAX_HEAD_BYTES);

    let mut line = String::new();
    if limited.read_line(&mut line).await? == 0 {
        return Err(RequestError::Closed);
    }
    if !line.ends_with('\n') {
        return Err(RequestError::Malformed("request line too long"));
    }

    let mut parts = line.split_whitespace();
    let (Some(method), Some(target), Some(version)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(RequestError::Malformed("bad request line"));
    };
    if !version.starts_with("HTTP/1.") || !target.starts_with('/') {
        return Err(RequestError::Malformed("bad request line"));
    }

    let (path, query) = match target.split_once('?') {
        Some((path, query)) => (path.to_owned(), Some(query.to_owned())),
        None => (target.to_owned(), None),
    };
    let method = method.to_owned();

    let mut headers = Vec::new();
    loop {
        line.clear();
        if limited.read_line(&mut line).await? == 0 || !line.ends_with('\n') {
            return Err(RequestError::Malformed("incomplete headers"));
        }
        let header = line.trim_end_matches(['\r', '\n']);
        if header.is_empty() {
            break;
        }
        let Some((name, value)) = header.split_once(':') else {
            return Err(RequestError::Malformed("bad header"));
        };
        headers.push((name.trim().to_owned(), value.trim().to_owned()));
    }

    Ok(Request {
        method,
        path,
        query,
        headers,
    })
}

/// An HTTP response ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Response {
    pub fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body: body.into_bytes(),
        }
    }

    pub fn json(body: String) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.into_bytes(),
        }
    }

    pub const fn bytes(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type,
            body,
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: format!("{status} {}\n", reason(status)).into_bytes(),
        }
    }

    /// Serialize status line, headers and body.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status,
            reason(self.status),
            self.content_type,
            self.body.len()
        );
        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(&self.body);
        bytes
    }
}

const fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        _ => "Internal Server Error",
    }
}

/// Decode `%XX` escapes in one path segment.
///
/// Returns `None` for truncated or non-hex escapes and for results that
/// aren't UTF-8.
#[must_use]
pub fn percent_decode(segment: &str) -> Option<String> {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = segment.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}
