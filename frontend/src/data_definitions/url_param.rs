//! Route segments carrying structured state.

use std::{fmt::Display, ops::Deref, str::FromStr};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Segment written for a value equal to `T::default()`, so unfiltered
/// views keep readable URLs.
const DEFAULT_SEGMENT: &str = "any";

/// CBOR + URL-safe base64 encoded route segment.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T> Deref for UrlParam<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> UrlParam<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Serialize + Default + PartialEq> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == T::default() {
            return f.write_str(DEFAULT_SEGMENT);
        }
        let mut serialized = Vec::new();
        if ciborium::into_writer(&self.0, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE_NO_PAD.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum UrlParamError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl Display for UrlParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "malformed route segment: {}", err),
            Self::Cbor(err) => write!(f, "unreadable route state: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de> + Default> FromStr for UrlParam<T> {
    type Err = UrlParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == DEFAULT_SEGMENT {
            return Ok(UrlParam(T::default()));
        }
        let bytes = URL_SAFE_NO_PAD.decode(s.trim_end_matches('=').as_bytes()).map_err(UrlParamError::Base64)?;
        let value = ciborium::from_reader(std::io::Cursor::new(bytes)).map_err(UrlParamError::Cbor)?;
        Ok(UrlParam(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::facets::{Amenity, NoiseLevel};
    use common::filter_state::{FacetValue, FilterState};

    #[test]
    fn empty_filters_use_readable_segment() {
        let param = UrlParam(FilterState::default());
        assert_eq!(param.to_string(), "any");
        assert_eq!("any".parse::<UrlParam<FilterState>>().unwrap(), param);
    }

    #[test]
    fn selections_survive_the_url() {
        let mut state = FilterState::default();
        state.toggle(FacetValue::Noise(NoiseLevel::Quiet));
        state.toggle(FacetValue::Amenity(Amenity::Printer));
        state.toggle(FacetValue::Building("hatcher".to_string()));

        let segment = UrlParam(state.clone()).to_string();
        assert!(!segment.contains('/') && !segment.contains('='));
        assert_eq!(segment.parse::<UrlParam<FilterState>>().unwrap().into_inner(), state);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!("%%%".parse::<UrlParam<FilterState>>(), Err(UrlParamError::Base64(_))));
    }
}
