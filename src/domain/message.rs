use chrono::{DateTime, Utc};

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATETIME_VERBOSE_FORMAT: &str = "%A, %B %d %Y %H:%M:%S %Z";

/// Used when the package name is not baked in at build time.
const DEFAULT_AUTHOR: &str = "autosave";

/// Fields substituted into the commit message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessageData {
    pub datetime: String,
    pub datetime_verbose: String,
    pub author: String,
}

impl CommitMessageData {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            datetime: now.format(DATETIME_FORMAT).to_string(),
            datetime_verbose: now.format(DATETIME_VERBOSE_FORMAT).to_string(),
            author: option_env!("CARGO_PKG_NAME")
                .unwrap_or(DEFAULT_AUTHOR)
                .to_string(),
        }
    }

    /// Renders the full commit message, trailing newline included.
    pub fn render(&self) -> String {
        format!(
            "{} autosave\n\nAutosaved by {}\n{}\n",
            self.datetime, self.author, self.datetime_verbose
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn renders_message_template() {
        let data = CommitMessageData {
            datetime: "2024-03-05 10:00:00".to_string(),
            datetime_verbose: "Tuesday, March 05 2024 10:00:00 UTC".to_string(),
            author: "autosave".to_string(),
        };

        assert_eq!(
            data.render(),
            "2024-03-05 10:00:00 autosave\n\nAutosaved by autosave\nTuesday, March 05 2024 10:00:00 UTC\n"
        );
    }

    #[test]
    fn formats_timestamps_from_instant() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        let data = CommitMessageData::at(now);

        assert_eq!(data.datetime, "2024-03-05 10:00:00");
        assert_eq!(data.datetime_verbose, "Tuesday, March 05 2024 10:00:00 UTC");
    }

    #[test]
    fn author_defaults_to_package_name() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        let data = CommitMessageData::at(now);

        assert_eq!(data.author, "autosave");
    }
}
