//! Shareable preview state in the page URL
//!
//! The target URL, device and orientation are serialized as base64-encoded
//! JSON in the `state` query parameter, keeping the address opaque and
//! avoiding clashes between our keys and the target URL's own query string.

use std::collections::BTreeMap;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use peek_common::{Device, Orientation};
use tracing::warn;

const URL_KEY: &str = "url";
const DEVICE_KEY: &str = "device";
const ORIENTATION_KEY: &str = "orientation";

#[derive(Debug, thiserror::Error)]
pub enum LinkStateError {
    #[error("state is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("state is not a JSON string map: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a state string from the query parameter into key-value pairs.
pub fn parse_state(encoded: &str) -> Result<BTreeMap<String, String>, LinkStateError> {
    if encoded.is_empty() {
        return Ok(BTreeMap::new());
    }

    let json_bytes = URL_SAFE_NO_PAD.decode(encoded)?;
    Ok(serde_json::from_slice(&json_bytes)?)
}

/// Encode key-value pairs into a base64 state string.
pub fn build_state(map: &BTreeMap<&str, &str>) -> Result<String, LinkStateError> {
    let json = serde_json::to_string(map)?;
    Ok(URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

/// What a shared link asks the preview to start with. Unset fields use the
/// preview's defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkState {
    pub url: Option<String>,
    pub device: Option<Device>,
    pub orientation: Option<Orientation>,
}

impl LinkState {
    /// Decode the `state` query value. Anything malformed is logged and
    /// dropped, field by field, so one bad entry doesn't discard the rest.
    pub fn decode(encoded: &str) -> Self {
        let map = match parse_state(encoded) {
            Ok(map) => map,
            Err(e) => {
                warn!("Ignoring link state: {}", e);
                return Self::default();
            }
        };

        let device = map.get(DEVICE_KEY).and_then(|value| {
            value
                .parse::<Device>()
                .map_err(|e| warn!("Ignoring link state: {}", e))
                .ok()
        });
        let orientation = map.get(ORIENTATION_KEY).and_then(|value| {
            value
                .parse::<Orientation>()
                .map_err(|e| warn!("Ignoring link state: {}", e))
                .ok()
        });

        Self {
            url: map.get(URL_KEY).filter(|url| !url.is_empty()).cloned(),
            device,
            orientation,
        }
    }

    /// Encoded query value, or `None` when there is nothing to share.
    pub fn encode(&self) -> Option<String> {
        let mut map = BTreeMap::new();
        if let Some(url) = &self.url {
            map.insert(URL_KEY, url.as_str());
        }
        if let Some(device) = self.device {
            map.insert(DEVICE_KEY, device.as_str());
        }
        if let Some(orientation) = self.orientation {
            map.insert(ORIENTATION_KEY, orientation.as_str());
        }

        if map.is_empty() {
            return None;
        }

        build_state(&map)
            .map_err(|e| warn!("Failed to encode link state: {}", e))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_raw(json: &str) -> String {
        URL_SAFE_NO_PAD.encode(json.as_bytes())
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(LinkState::decode(""), LinkState::default());
    }

    #[test]
    fn test_decode_full_state() {
        let encoded = encode_raw(
            r#"{"url":"https://example.com/?a=1&b=2","device":"mobile","orientation":"landscape"}"#,
        );
        let state = LinkState::decode(&encoded);
        assert_eq!(state.url.as_deref(), Some("https://example.com/?a=1&b=2"));
        assert_eq!(state.device, Some(Device::Mobile));
        assert_eq!(state.orientation, Some(Orientation::Landscape));
    }

    #[test]
    fn test_decode_keeps_valid_fields() {
        let encoded = encode_raw(r#"{"url":"https://example.com","device":"watch"}"#);
        let state = LinkState::decode(&encoded);
        assert_eq!(state.url.as_deref(), Some("https://example.com"));
        assert_eq!(state.device, None);
    }

    #[test]
    fn test_decode_garbage() {
        assert_eq!(LinkState::decode("%%%not-base64"), LinkState::default());
        assert_eq!(
            LinkState::decode(&encode_raw("[1, 2, 3]")),
            LinkState::default()
        );
    }

    #[test]
    fn test_decode_ignores_empty_url() {
        let state = LinkState::decode(&encode_raw(r#"{"url":""}"#));
        assert_eq!(state.url, None);
    }

    #[test]
    fn test_encode_nothing() {
        assert_eq!(LinkState::default().encode(), None);
    }

    #[test]
    fn test_encode_decodes_back() {
        let state = LinkState {
            url: Some("https://codesandbox.io/s/new".to_string()),
            device: Some(Device::Tablet),
            orientation: Some(Orientation::Portrait),
        };
        let encoded = state.encode().unwrap();
        assert!(!encoded.contains('='));
        assert_eq!(LinkState::decode(&encoded), state);
    }

    #[test]
    fn test_parse_state_error_kinds() {
        assert!(matches!(
            parse_state("!!"),
            Err(LinkStateError::Base64(_))
        ));
        assert!(matches!(
            parse_state(&encode_raw("not json")),
            Err(LinkStateError::Json(_))
        ));
    }
}
