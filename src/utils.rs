/// Utility helpers for egg-search

/// Title-case a hyphen-delimited name: `minecraft-paper` -> `Minecraft Paper`.
/// Only the first character of each segment is touched.
pub fn title_case_hyphenated<S: AsRef<str>>(s: S) -> String {
    s.as_ref()
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_splits_on_hyphens_only() {
        assert_eq!(title_case_hyphenated("minecraft-paper"), "Minecraft Paper");
        assert_eq!(title_case_hyphenated("teamspeak"), "Teamspeak");
        assert_eq!(title_case_hyphenated("s3-backup"), "S3 Backup");
        assert_eq!(title_case_hyphenated("factorio_spacage"), "Factorio_spacage");
    }
}
