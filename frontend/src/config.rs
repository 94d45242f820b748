use log::Level;

pub const LOGO_URL: &str =
    "https://intend-career-new-bucket.s3.ap-south-1.amazonaws.com/Intend+career+logo+(1).png";
pub const HERO_IMAGE_URL: &str =
    "https://intend-career-new-bucket.s3.ap-south-1.amazonaws.com/advertiseperson.png";

/// Header switches from transparent to solid strictly above this offset.
pub const HEADER_SOLID_THRESHOLD_PX: f64 = 50.0;
/// Back-to-top button shows strictly above this offset.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

pub const FOOTER_VISIBILITY_THRESHOLD: f64 = 0.1;
pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.8;

pub const TOAST_DURATION_MS: u32 = 3_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty state transitions while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
