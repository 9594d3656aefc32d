//! Subsonic credential parameters

use crate::config::{AuthMode, ClientConfig};
use crate::error::TransportError;

const SALT_LEN: usize = 8;

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|value| format!("{value:02x}")).collect()
}

/// Fresh random salt, hex encoded
pub(crate) fn make_salt() -> Result<String, TransportError> {
    let mut bytes = [0u8; SALT_LEN];
    getrandom::fill(&mut bytes).map_err(|e| TransportError::Auth(e.to_string()))?;
    Ok(to_hex(&bytes))
}

/// Lowercase hex `md5(password + salt)`
pub fn token(password: &str, salt: &str) -> String {
    format!("{:x}", md5::compute(format!("{password}{salt}")))
}

/// Query pairs every request carries: identity, credentials, version, format
pub(crate) fn auth_params(config: &ClientConfig) -> Result<Vec<(&'static str, String)>, TransportError> {
    let mut params = vec![("u", config.username.clone())];

    match config.auth_mode {
        AuthMode::Token => {
            let salt = make_salt()?;
            params.push(("t", token(&config.password, &salt)));
            params.push(("s", salt));
        }
        AuthMode::Plain => {
            params.push(("p", format!("enc:{}", to_hex(config.password.as_bytes()))));
        }
    }

    params.push(("v", config.api_version.clone()));
    params.push(("c", config.client_name.clone()));
    params.push(("f", "json".to_string()));
    Ok(params)
}
