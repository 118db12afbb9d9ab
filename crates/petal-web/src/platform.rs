// Host classification from the browser's user-agent string.
//
// Only the start-up code calls this; the simulation itself sees nothing but
// the resulting PlatformProfile.

use petal_core::PlatformProfile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostOs {
    Ios,
    Android,
    Other,
}

impl HostOs {
    pub fn detect(user_agent: &str) -> Self {
        if ["iPad", "iPhone", "iPod"].iter().any(|n| user_agent.contains(n)) {
            Self::Ios
        } else if user_agent.contains("Android") {
            Self::Android
        } else {
            Self::Other
        }
    }

    /// Android browsers report x with the opposite sign to everyone else.
    pub fn profile(self) -> PlatformProfile {
        match self {
            Self::Android => PlatformProfile::InvertedXAxis,
            Self::Ios | Self::Other => PlatformProfile::Default,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ios => "iOS",
            Self::Android => "Android",
            Self::Other => "Other",
        }
    }
}

/// Text for the on-page debug readout. The angle is shown wrapped into
/// [0, 360) but otherwise as reported, so odd values stay visible.
pub fn debug_line(os: HostOs, angle_deg: f32, tilt_x: f32) -> String {
    format!(
        "OS:{} angle:{} tiltX:{:.2}",
        os.label(),
        angle_deg.rem_euclid(360.0),
        tilt_x
    )
}
