use serde::{Deserialize, Serialize};

/// The identity record every output mode renders.
///
/// Field declaration order is the canonical order for all formats: serde emits fields in
/// this order, and the vCard and card templates follow it by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub nickname: String,
    pub title: String,
    pub location: String,
    pub timezone: String,
    pub bio: String,
    pub website: String,
    pub github: String,
    pub twitter: String,
    pub linkedin: String,
    pub youtube: String,
    pub facebook: String,
    pub stackoverflow: String,
    pub mvp: String,
    pub bluesky: String,
    pub mastodon: String,
    pub sponsor_paypal: String,
    pub sponsor_github: String,
}

/// A labelled link as shown on the styled card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link<'a> {
    pub glyph: &'static str,
    pub label: &'static str,
    pub value: &'a str,
}

impl<'a> Link<'a> {
    fn new(glyph: &'static str, label: &'static str, value: &'a str) -> Self {
        Self {
            glyph,
            label,
            value,
        }
    }
}

impl Profile {
    /// The shipped profile.
    pub fn swimburger() -> Self {
        Self {
            name: "Niels Swimberghe".into(),
            nickname: "Swimburger".into(),
            title: "C# and TypeScript SDK generator engineer, at Fern".into(),
            location: "NYC".into(),
            timezone: "Eastern Time".into(),
            bio: "Niels Swimberghe is a Belgian American software engineer and Microsoft MVP at Fern where he owns the C# and TypeScript SDK generators.\n\
                  Get in touch with Niels on Twitter @RealSwimburger and follow Niels' personal blog on .NET, Azure, and web development at swimburger.net."
                .into(),
            website: "https://swimburger.net".into(),
            github: "https://github.com/Swimburger".into(),
            twitter: "https://twitter.com/RealSwimburger".into(),
            linkedin: "https://linkedin.com/in/nielsswimberghe".into(),
            youtube: "https://youtube.com/@RealSwimburger".into(),
            facebook: "https://facebook.com/SwimburgerDotNet".into(),
            stackoverflow: "https://stackoverflow.com/users/2919731/swimburger".into(),
            mvp: "https://mvp.microsoft.com (Microsoft MVP)".into(),
            bluesky: "https://bsky.app/profile/swimburger.bsky.social".into(),
            mastodon: "@swimburger@dotnet.social".into(),
            sponsor_paypal: "https://www.paypal.com/paypalme/swimburger".into(),
            sponsor_github: "https://github.com/sponsors/Swimburger".into(),
        }
    }

    /// Social links, website through mastodon, in declared order.
    pub fn connect_links(&self) -> [Link<'_>; 10] {
        [
            Link::new("🌐", "Website:", &self.website),
            Link::new("💻", "GitHub:", &self.github),
            Link::new("🐦", "Twitter:", &self.twitter),
            Link::new("💼", "LinkedIn:", &self.linkedin),
            Link::new("🎥", "YouTube:", &self.youtube),
            Link::new("👥", "Facebook:", &self.facebook),
            Link::new("💬", "Stack Overflow:", &self.stackoverflow),
            Link::new("🏆", "MVP:", &self.mvp),
            Link::new("🦋", "Bluesky:", &self.bluesky),
            Link::new("🐘", "Mastodon:", &self.mastodon),
        ]
    }

    /// Sponsorship links: PayPal, then GitHub Sponsors.
    pub fn support_links(&self) -> [Link<'_>; 2] {
        [
            Link::new("💖", "PayPal:", &self.sponsor_paypal),
            Link::new("🎁", "GitHub Sponsor:", &self.sponsor_github),
        ]
    }
}
