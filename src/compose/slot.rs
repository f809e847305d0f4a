//! Loading-aware field slots.

use serde::Serialize;

/// A single view field that is either still loading or holds its value.
///
/// A renderer draws a skeleton for [`Slot::Loading`] and the value for
/// [`Slot::Ready`]; the two can never be shown in the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum Slot<T> {
    Loading,
    Ready(T),
}

impl<T> Slot<T> {
    /// Wrap `value`, hiding it behind a skeleton while `is_loading`.
    #[must_use]
    pub fn gate(is_loading: bool, value: T) -> Self {
        if is_loading {
            Self::Loading
        } else {
            Self::Ready(value)
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The value, if it is visible.
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Loading => None,
            Self::Ready(value) => Some(value),
        }
    }

    #[must_use]
    pub fn as_ref(&self) -> Slot<&T> {
        match self {
            Self::Loading => Slot::Loading,
            Self::Ready(value) => Slot::Ready(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate() {
        assert_eq!(Slot::gate(true, "12.0s"), Slot::Loading);
        assert_eq!(Slot::gate(false, "12.0s"), Slot::Ready("12.0s"));
    }

    #[test]
    fn test_ready_is_exclusive_with_loading() {
        let loading: Slot<u64> = Slot::gate(true, 7);
        assert!(loading.is_loading());
        assert!(loading.ready().is_none());

        let ready = Slot::gate(false, 7);
        assert!(!ready.is_loading());
        assert_eq!(ready.ready(), Some(&7));
        assert_eq!(ready.as_ref(), Slot::Ready(&7));
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_string(&Slot::gate(false, "x")).unwrap();
        assert_eq!(json, r#"{"state":"ready","value":"x"}"#);
        let json = serde_json::to_string(&Slot::<&str>::Loading).unwrap();
        assert_eq!(json, r#"{"state":"loading"}"#);
    }
}
