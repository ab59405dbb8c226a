//! REST adapters for the hosted backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since the backend is
//! only reachable from the browser session.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. A missing
//! document and a failed fetch both come back as `None`; failures are
//! logged so they degrade to the caller's safe default without surfacing
//! in the UI.

#![allow(clippy::unused_async)]

use super::types::{FsDocument, SignInSession, User};

/// Point read of one document from the remote store.
///
/// Returns `None` when the document is absent (404), on any transport or
/// decode failure, and always on the server.
pub async fn fetch_document(collection: &str, id: &str) -> Option<FsDocument> {
    #[cfg(feature = "hydrate")]
    {
        let url = super::firebase::doc_url(collection, id);
        let resp = match gloo_net::http::Request::get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                leptos::logging::warn!("fetch {collection}/{id} failed: {e}");
                return None;
            }
        };
        if resp.status() == 404 {
            return None;
        }
        if !resp.ok() {
            leptos::logging::warn!("fetch {collection}/{id}: status {}", resp.status());
            return None;
        }
        resp.json::<FsDocument>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (collection, id);
        None
    }
}

/// Sign in with email and password via `accounts:signInWithPassword`.
///
/// # Errors
///
/// Returns the provider's error message (e.g. `INVALID_PASSWORD`) or a
/// transport error string.
pub async fn sign_in_with_password(email: &str, password: &str) -> Result<SignInSession, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct SignInRequest<'a> {
            email: &'a str,
            password: &'a str,
            #[serde(rename = "returnSecureToken")]
            return_secure_token: bool,
        }

        let url = super::firebase::identity_url("signInWithPassword");
        let resp = gloo_net::http::Request::post(&url)
            .json(&SignInRequest {
                email,
                password,
                return_secure_token: true,
            })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(provider_error(&resp).await);
        }
        resp.json::<SignInSession>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Resolve a persisted ID token to its account via `accounts:lookup`.
/// Returns `None` if the token is no longer valid or on the server.
pub async fn lookup_user(id_token: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct LookupRequest<'a> {
            #[serde(rename = "idToken")]
            id_token: &'a str,
        }

        let url = super::firebase::identity_url("lookup");
        let resp = gloo_net::http::Request::post(&url)
            .json(&LookupRequest { id_token })
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body = resp.json::<super::types::LookupResponse>().await.ok()?;
        body.users.into_iter().next().map(User::from)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id_token;
        None
    }
}

/// Extract the identity-toolkit error message from a failed response.
#[cfg(feature = "hydrate")]
async fn provider_error(resp: &gloo_net::http::Response) -> String {
    #[derive(serde::Deserialize)]
    struct ApiError {
        error: ApiErrorBody,
    }
    #[derive(serde::Deserialize)]
    struct ApiErrorBody {
        message: String,
    }

    match resp.json::<ApiError>().await {
        Ok(body) => body.error.message,
        Err(_) => format!("sign-in failed: {}", resp.status()),
    }
}
