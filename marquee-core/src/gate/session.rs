/// Read-only view of the session's "logged in" flag.
pub trait SessionProvider: Send + Sync {
    fn is_authenticated(&self) -> bool;
}

/// Session flag carried in a request cookie. Only the exact value `true`
/// counts as logged in; a missing or unreadable cookie does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CookieSession {
    authenticated: bool,
}

impl CookieSession {
    /// Parse a raw `Cookie` header looking for `cookie_name`.
    pub fn from_cookie_header(header: Option<&str>, cookie_name: &str) -> Self {
        let authenticated = header
            .and_then(|raw| cookie_value(raw, cookie_name))
            .is_some_and(|value| value == "true");
        Self { authenticated }
    }

    /// Combine several `Cookie` headers; the first one carrying the flag
    /// decides.
    pub fn from_cookie_headers<'a, I>(headers: I, cookie_name: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let authenticated = headers
            .into_iter()
            .find_map(|raw| cookie_value(raw, cookie_name))
            .is_some_and(|value| value == "true");
        Self { authenticated }
    }
}

impl SessionProvider for CookieSession {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

/// Fixed session flag, for callers that already know the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticSession(pub bool);

impl SessionProvider for StaticSession {
    fn is_authenticated(&self) -> bool {
        self.0
    }
}

fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key.trim() == name).then(|| value.trim())
    })
}
