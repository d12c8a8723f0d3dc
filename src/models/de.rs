//! Deserialization helpers shared across the model types.

use serde::{Deserialize, Deserializer};

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// Jira reports an unassigned issue as `"assignee": null`, which is a
/// different state from the field not having been requested at all. A plain
/// `Option<T>` collapses the two; `Option<Option<T>>` with this helper keeps
/// them apart: `None` means absent, `Some(None)` means null.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
  T: Deserialize<'de>,
  D: Deserializer<'de>,
{
  Option::<T>::deserialize(deserializer).map(Some)
}
