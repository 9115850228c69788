//! Signed-in User
//!
//! The header shows a fixed profile; nothing is fetched.

/// Profile shown in the user menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub email: &'static str,
    pub display_name: &'static str,
    pub photo_url: Option<&'static str>,
}

pub const DEMO_USER: UserProfile = UserProfile {
    email: "user@example.com",
    display_name: "User",
    photo_url: Some("https://placehold.co/100x100/EFEFEF/4A4A4A?text=U"),
};

impl UserProfile {
    pub fn name(&self) -> &'static str {
        if self.display_name.trim().is_empty() {
            "User"
        } else {
            self.display_name
        }
    }

    /// Avatar image, or `None` when the fallback icon should be drawn
    pub fn avatar(&self) -> Option<&'static str> {
        self.photo_url.filter(|url| !url.trim().is_empty())
    }
}
