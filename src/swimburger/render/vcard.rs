use crate::profile::Profile;

/// Renders the profile as a vCard 3.0.
///
/// Every property is always present and in a fixed order. Values go in as-is, except that
/// line breaks in NOTE are written as the `\n` text escape so the property stays on one line.
pub fn to_vcard(profile: &Profile) -> String {
    format!(
        "BEGIN:VCARD\n\
         VERSION:3.0\n\
         FN:{name}\n\
         NICKNAME:{nickname}\n\
         TITLE:{title}\n\
         NOTE:{note}\n\
         URL:{website}\n\
         URL;type=github:{github}\n\
         URL;type=twitter:{twitter}\n\
         URL;type=linkedin:{linkedin}\n\
         URL;type=youtube:{youtube}\n\
         URL;type=facebook:{facebook}\n\
         URL;type=stackoverflow:{stackoverflow}\n\
         URL;type=mvp:{mvp}\n\
         URL;type=bluesky:{bluesky}\n\
         X-SOCIALPROFILE;type=mastodon:{mastodon}\n\
         URL;type=sponsor:{sponsor_paypal}\n\
         URL;type=sponsor:{sponsor_github}\n\
         ADR;TYPE=WORK:;;{location};;;{timezone};\n\
         END:VCARD\n",
        name = profile.name,
        nickname = profile.nickname,
        title = profile.title,
        note = escape_line_breaks(&profile.bio),
        website = profile.website,
        github = profile.github,
        twitter = profile.twitter,
        linkedin = profile.linkedin,
        youtube = profile.youtube,
        facebook = profile.facebook,
        stackoverflow = profile.stackoverflow,
        mvp = profile.mvp,
        bluesky = profile.bluesky,
        mastodon = profile.mastodon,
        sponsor_paypal = profile.sponsor_paypal,
        sponsor_github = profile.sponsor_github,
        location = profile.location,
        timezone = profile.timezone,
    )
}

fn escape_line_breaks(value: &str) -> String {
    value.replace("\r\n", "\\n").replace(['\n', '\r'], "\\n")
}
