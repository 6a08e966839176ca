use crate::model::Clip;
use chrono::{DateTime, Duration, Utc};

/// Sample clips shown on an empty board: ids and ages in minutes.
const SAMPLES: [(&str, i64, &str); 3] = [
    (
        "1",
        30,
        "This is a sample snippet showing how saved text appears on a card. Long text is cut off \
         on the card and fades out when there is more to read...",
    ),
    (
        "2",
        75,
        "Another sample snippet, showing how several saved entries are laid out side by side.",
    ),
    (
        "3",
        160,
        "A longer sample to show how the board handles text that does not fit on a card. The card \
         keeps only the first few lines and marks the rest as hidden, so the board stays tidy. \
         Copying a card always copies the full text, no matter how much of it is shown. Delete \
         the samples once you have saved something of your own.",
    ),
];

/// The sample collection relative to `now`, newest first.
pub fn sample_clips(now: DateTime<Utc>) -> Vec<Clip> {
    SAMPLES
        .iter()
        .map(|(id, minutes_ago, content)| {
            Clip::new(*id, *content, now - Duration::minutes(*minutes_ago))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_samples_with_fixed_ids() {
        let clips = sample_clips(Utc::now());
        let ids: Vec<&str> = clips.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn samples_are_backdated_newest_first() {
        let now = Utc::now();
        let clips = sample_clips(now);
        assert_eq!(clips[0].created_at, now - Duration::minutes(30));
        assert_eq!(clips[1].created_at, now - Duration::minutes(75));
        assert_eq!(clips[2].created_at, now - Duration::minutes(160));
    }

    #[test]
    fn sample_content_is_already_trimmed() {
        for clip in sample_clips(Utc::now()) {
            assert_eq!(clip.content, clip.content.trim());
            assert!(!clip.content.is_empty());
        }
    }
}
