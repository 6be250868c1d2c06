//! Client-side session persistence.
//!
//! The signed-in user is written once at login and only read here:
//! - Web: the `user` key in `window.localStorage` (JSON-encoded).
//! - Desktop: `session.json` under the platform config directory.
//!
//! A missing session is not an error; the profile screen simply skips
//! fetching when no identity is available.

use api::UserSession;

#[cfg(target_arch = "wasm32")]
const SESSION_KEY: &str = "user";

#[cfg(not(target_arch = "wasm32"))]
const SESSION_FILE: &str = "session.json";

/// Load the stored user session, if any.
pub fn load_session() -> Result<Option<UserSession>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or("window unavailable")?;
        let storage = window
            .local_storage()
            .map_err(|_| "localStorage unavailable")?
            .ok_or("localStorage unavailable")?;

        let raw = storage
            .get_item(SESSION_KEY)
            .map_err(|_| "localStorage read failed")?;

        match raw {
            Some(json) => parse_session(&json).map(Some),
            None => Ok(None),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        read_session_file(&session_path()?)
    }
}

/// Persist the user session (login flow).
pub fn save_session(session: &UserSession) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let json = serde_json::to_string(session).map_err(|err| err.to_string())?;
        let window = web_sys::window().ok_or("window unavailable")?;
        let storage = window
            .local_storage()
            .map_err(|_| "localStorage unavailable")?
            .ok_or("localStorage unavailable")?;
        storage
            .set_item(SESSION_KEY, &json)
            .map_err(|_| "localStorage write failed".to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        write_session_file(&session_path()?, session)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_session_file(path: &std::path::Path) -> Result<Option<UserSession>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let json = std::fs::read_to_string(path).map_err(|err| err.to_string())?;
    parse_session(&json).map(Some)
}

#[cfg(not(target_arch = "wasm32"))]
fn write_session_file(path: &std::path::Path, session: &UserSession) -> Result<(), String> {
    let json = serde_json::to_string(session).map_err(|err| err.to_string())?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| err.to_string())?;
    }
    std::fs::write(path, json).map_err(|err| err.to_string())
}

fn parse_session(json: &str) -> Result<UserSession, String> {
    serde_json::from_str(json).map_err(|err| format!("stored session is corrupt: {err}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn session_path() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "Prepdeck", "Prepdeck")
        .ok_or("unable to determine config directory")?;
    Ok(dirs.config_dir().join(SESSION_FILE))
}
