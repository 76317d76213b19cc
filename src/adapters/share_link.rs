use thiserror::Error;

use crate::core::data::shareable_state::ShareableState;

#[derive(Debug, Error)]
pub enum ShareStateError {
    #[error("could not encode share link: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
    #[error("invalid share link: {0}")]
    Decode(#[from] serde_urlencoded::de::Error),
}

/// Encodes the shared fields as `x=..&y=..&zoom=..&iter=..&palette=..&julia=0|1&jx=..&jy=..`.
pub fn to_query(state: &ShareableState) -> Result<String, ShareStateError> {
    Ok(serde_urlencoded::to_string(state)?)
}

/// Decodes a share query; a leading `?` is accepted, unknown keys are
/// skipped and missing keys keep their defaults.
pub fn from_query(query: &str) -> Result<ShareableState, ShareStateError> {
    let query = query.strip_prefix('?').unwrap_or(query);

    Ok(serde_urlencoded::from_str(query)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deep_state() -> ShareableState {
        ShareableState {
            x: -0.743_643_887_037_158_7,
            y: 0.131_825_904_205_311_97,
            zoom: 3.2e11,
            iterations: 680,
            palette: 2,
            julia: true,
            jx: 0.285,
            jy: -0.01,
        }
    }

    #[test]
    fn default_state_encodes_home_view() {
        assert_eq!(
            to_query(&ShareableState::default()).unwrap(),
            "x=-0.5&y=0.0&zoom=1.0&iter=150&palette=0&julia=0&jx=-0.7&jy=0.27015"
        );
    }

    #[test]
    fn deep_state_survives_a_round_trip_bit_for_bit() {
        let state = deep_state();

        let decoded = from_query(&to_query(&state).unwrap()).unwrap();

        assert_eq!(decoded.x.to_bits(), state.x.to_bits());
        assert_eq!(decoded.y.to_bits(), state.y.to_bits());
        assert_eq!(decoded, state);
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let decoded = from_query("?zoom=40&julia=1").unwrap();

        assert_eq!(decoded.zoom, 40.0);
        assert!(decoded.julia);
        assert_eq!(decoded.x, -0.5);
        assert_eq!(decoded.iterations, 150);
        assert_eq!(decoded.jy, 0.27015);
    }

    #[test]
    fn hand_written_links_accept_integers_and_word_flags() {
        let decoded = from_query("x=-1&y=0&zoom=3&julia=true").unwrap();

        assert_eq!(decoded.x, -1.0);
        assert_eq!(decoded.zoom, 3.0);
        assert!(decoded.julia);
        assert!(!from_query("julia=false").unwrap().julia);
    }

    #[test]
    fn unknown_keys_and_empty_segments_are_ignored() {
        let decoded = from_query("utm_source=mail&&x=0.25&theme=dark&").unwrap();

        assert_eq!(decoded.x, 0.25);
        assert_eq!(decoded.y, 0.0);
    }

    #[test]
    fn empty_query_is_default_state() {
        assert_eq!(from_query("").unwrap(), ShareableState::default());
    }

    #[test]
    fn known_key_without_value_is_rejected() {
        assert!(matches!(from_query("x=1&zoom"), Err(ShareStateError::Decode(_))));
    }

    #[test]
    fn unparsable_numbers_are_rejected() {
        assert!(matches!(from_query("zoom=deep"), Err(ShareStateError::Decode(_))));
        assert!(matches!(from_query("iter=-5"), Err(ShareStateError::Decode(_))));

        let error = from_query("julia=yes").unwrap_err();
        assert!(error.to_string().contains("0 or 1"), "{error}");
    }
}
