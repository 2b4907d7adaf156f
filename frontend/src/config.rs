#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

pub const SITE_NAME: &str = "Legacy Path Advisors";
pub const CONTACT_EMAIL: &str = "hello@legacypathadvisors.com";
pub const CONTACT_PHONE: &str = "+1 (555) 014-2270";
