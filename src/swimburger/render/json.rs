use crate::error::Result;
use crate::profile::Profile;

pub fn to_json(profile: &Profile) -> Result<String> {
    let mut out = serde_json::to_string_pretty(profile)?;
    out.push('\n');
    Ok(out)
}
