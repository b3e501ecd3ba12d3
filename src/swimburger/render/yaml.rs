use crate::error::Result;
use crate::profile::Profile;

/// Serializes the profile as a YAML block mapping. Multi-line values such as the bio come
/// out as literal block scalars; values that would be ambiguous unquoted get quoted.
pub fn to_yaml(profile: &Profile) -> Result<String> {
    Ok(serde_yaml::to_string(profile)?)
}
