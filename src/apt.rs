//! Canned package-manager transcripts.
//!
//! `apt-get update` and `apt-get upgrade` replay a fixed sequence of
//! lines; the shell owns no package state. Playback pacing belongs to
//! the renderer, not to this table.

pub const APT_UPDATE: &[&str] = &[
    "Hit:1 http://archive.ubuntu.com/ubuntu focal InRelease",
    "Get:2 http://archive.ubuntu.com/ubuntu focal-updates InRelease [114 kB]",
    "Reading package lists... Done",
    "All packages up to date.",
];

pub const APT_UPGRADE: &[&str] = &[
    "Reading package lists... Done",
    "Building dependency tree",
    "2 upgraded, 0 newly installed.",
    "Do you want to continue? [Y/n] Y",
    "Fetched 1,234 kB in 1s",
    "Successfully upgraded 2 packages.",
];

/// Transcript for a given apt-get action, if the action is scripted.
pub fn transcript(action: &str) -> Option<&'static [&'static str]> {
    match action {
        "update" => Some(APT_UPDATE),
        "upgrade" => Some(APT_UPGRADE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_actions() {
        assert_eq!(transcript("update"), Some(APT_UPDATE));
        assert_eq!(transcript("upgrade"), Some(APT_UPGRADE));
    }

    #[test]
    fn test_unknown_action() {
        assert_eq!(transcript("install"), None);
        assert_eq!(transcript(""), None);
    }
}
