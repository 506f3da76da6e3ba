use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field of a partial update.
///
/// Pair with `#[serde(default)]` so a missing key stays `Untouched`, while an
/// explicit `null` becomes `Cleared`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Untouched,
    Cleared,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Untouched
    }
}

impl<T> Patch<T> {
    pub fn is_untouched(&self) -> bool {
        matches!(self, Patch::Untouched)
    }

    pub fn is_present(&self) -> bool {
        !self.is_untouched()
    }

    /// Resolves the patch against the current value.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Patch::Untouched => current,
            Patch::Cleared => None,
            Patch::Set(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Set(value),
            None => Patch::Cleared,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

impl<T> Serialize for Patch<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Set(value) => serializer.serialize_some(value),
            Patch::Untouched | Patch::Cleared => serializer.serialize_none(),
        }
    }
}
