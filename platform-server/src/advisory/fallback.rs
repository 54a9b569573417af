//! Offline advisor used when no model credential is configured.
//!
//! Picks a canned status based on whether the hour falls in the morning
//! or evening rush. Deterministic given the hour and the random source.

use rand::Rng;

use super::request::AdvisoryRequest;

/// Messages used during rush hours.
pub const PEAK_MESSAGES: [&str; 3] = [
    "Peak hour - Heavy crowd expected. Use front/rear coaches (1-3 or 10-12) for less congestion.",
    "Rush hour delays possible. Moderate to heavy crowd. Coach 2-4 or 9-11 recommended.",
    "Peak time - Expect 3-5 min delays. Heavy crowd. Board from less crowded coaches at ends.",
];

/// Messages used outside rush hours.
pub const OFF_PEAK_MESSAGES: [&str; 4] = [
    "Trains running on time. Light crowd expected. Any coach works well.",
    "Normal service. Light to moderate crowd. Middle coaches (5-8) align with most exits.",
    "Off-peak hours - Good service. Minimal crowd. Choose coach based on destination exit.",
    "Regular service. Light crowd. Coach 6-8 recommended for platform access.",
];

/// Whether a local hour (0-23) is in the morning (7-10) or evening (17-20) rush.
pub fn is_peak_hour(hour: u32) -> bool {
    (7..=10).contains(&hour) || (17..=20).contains(&hour)
}

/// The message pool for a local hour.
pub fn messages_for_hour(hour: u32) -> &'static [&'static str] {
    if is_peak_hour(hour) {
        &PEAK_MESSAGES
    } else {
        &OFF_PEAK_MESSAGES
    }
}

/// Produce an offline advisory for `request` at local `hour`.
///
/// Never fails and never performs I/O.
///
/// # Examples
///
/// ```
/// use platform_server::advisory::{AdvisoryRequest, PEAK_MESSAGES, advise, is_peak_hour};
/// use platform_server::domain::CoachClass;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let request = AdvisoryRequest::new("Western Line", "Dadar", CoachClass::Ladies);
/// let status = advise(&request, 8, &mut StdRng::seed_from_u64(1));
///
/// assert!(is_peak_hour(8));
/// let message = status.strip_prefix("Western Line → Dadar (Ladies): ").unwrap();
/// assert!(PEAK_MESSAGES.contains(&message));
/// ```
pub fn advise<R: Rng>(request: &AdvisoryRequest, hour: u32, rng: &mut R) -> String {
    let pool = messages_for_hour(hour);
    let message = pool[rng.gen_range(0..pool.len())];
    format!("{}{}", request.header(), message)
}
