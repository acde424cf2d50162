use serde::{Deserialize, Deserializer};

/// Reads an explicit JSON `null` as `T::default()`.
///
/// Pair with `#[serde(default)]` so a missing field is handled the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
