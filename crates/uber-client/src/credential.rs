//! Credentials for authenticating against the API.

/// How a token is presented in the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    /// Application-level server token, sent with the `Token` scheme.
    Server,
    /// User-scoped OAuth access token, sent with the `Bearer` scheme.
    Client,
}

/// A credential for the API: a token plus how to present it.
///
/// Server tokens are static configured secrets; client tokens come out of
/// the OAuth flow and are short-lived. The client never mutates a
/// credential after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    kind: CredentialKind,
    token: String,
}

impl Credential {
    /// Server-token credential, sent as `Authorization: Token <value>`.
    pub fn server(token: impl Into<String>) -> Self {
        Self {
            kind: CredentialKind::Server,
            token: token.into(),
        }
    }

    /// OAuth access-token credential, sent as `Authorization: Bearer <value>`.
    pub fn client(token: impl Into<String>) -> Self {
        Self {
            kind: CredentialKind::Client,
            token: token.into(),
        }
    }

    /// The credential kind.
    pub fn kind(&self) -> CredentialKind {
        self.kind
    }

    /// The raw token value.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The `Authorization` scheme for this credential kind.
    pub(crate) fn scheme(&self) -> &'static str {
        match self.kind {
            CredentialKind::Server => "Token",
            CredentialKind::Client => "Bearer",
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.token.trim().is_empty()
    }
}
