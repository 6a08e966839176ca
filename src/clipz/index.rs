//! # Display Indexes
//!
//! Clip ids are long timestamps, which nobody wants to type. The board numbers
//! its cards instead: `1` is the newest clip, `2` the one before it, and so on.
//! Commands accept either that number or an explicit `id:<id>`.
//!
//! Indexes are positional, so they shift whenever a clip is added or deleted.
//! Ids never change.

use crate::model::Clip;
use std::fmt;
use std::str::FromStr;

const ID_PREFIX: &str = "id:";

/// A user input selecting one clip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClipSelector {
    /// 1-based position on the board, newest first
    Index(usize),
    Id(String),
}

impl fmt::Display for ClipSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipSelector::Index(i) => write!(f, "{}", i),
            ClipSelector::Id(id) => write!(f, "{}{}", ID_PREFIX, id),
        }
    }
}

impl FromStr for ClipSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(id) = s.strip_prefix(ID_PREFIX) {
            if id.is_empty() {
                return Err(format!("Missing id after '{}'", ID_PREFIX));
            }
            return Ok(ClipSelector::Id(id.to_string()));
        }
        match s.parse::<usize>() {
            Ok(0) => Err("Indexes start at 1".to_string()),
            Ok(n) => Ok(ClipSelector::Index(n)),
            Err(_) => Err(format!("Invalid index format: {}", s)),
        }
    }
}

/// A clip together with its position on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayClip {
    pub clip: Clip,
    pub index: usize,
}

/// Numbers clips in their stored (newest first) order.
pub fn index_clips(clips: Vec<Clip>) -> Vec<DisplayClip> {
    clips
        .into_iter()
        .enumerate()
        .map(|(i, clip)| DisplayClip { clip, index: i + 1 })
        .collect()
}

/// Finds the clip a selector points at.
pub fn find<'a>(clips: &'a [DisplayClip], selector: &ClipSelector) -> Option<&'a DisplayClip> {
    match selector {
        ClipSelector::Index(n) => clips.iter().find(|dc| dc.index == *n),
        ClipSelector::Id(id) => clips.iter().find(|dc| &dc.clip.id == id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn clips() -> Vec<DisplayClip> {
        index_clips(vec![
            Clip::new("300", "newest", Utc::now()),
            Clip::new("200", "middle", Utc::now()),
            Clip::new("100", "oldest", Utc::now()),
        ])
    }

    #[test]
    fn parses_plain_numbers_as_indexes() {
        assert_eq!("3".parse(), Ok(ClipSelector::Index(3)));
        assert_eq!(" 12 ".parse(), Ok(ClipSelector::Index(12)));
    }

    #[test]
    fn parses_prefixed_ids() {
        assert_eq!(
            "id:1714558830123".parse(),
            Ok(ClipSelector::Id("1714558830123".to_string()))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!("abc".parse::<ClipSelector>().is_err());
        assert!("0".parse::<ClipSelector>().is_err());
        assert!("-1".parse::<ClipSelector>().is_err());
        assert!("id:".parse::<ClipSelector>().is_err());
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for sel in [ClipSelector::Index(4), ClipSelector::Id("99".into())] {
            assert_eq!(sel.to_string().parse::<ClipSelector>(), Ok(sel));
        }
    }

    #[test]
    fn indexes_follow_stored_order() {
        let indexed = clips();
        assert_eq!(indexed[0].index, 1);
        assert_eq!(indexed[0].clip.content, "newest");
        assert_eq!(indexed[2].index, 3);
    }

    #[test]
    fn finds_by_index_and_by_id() {
        let indexed = clips();
        assert_eq!(
            find(&indexed, &ClipSelector::Index(2)).unwrap().clip.id,
            "200"
        );
        assert_eq!(
            find(&indexed, &ClipSelector::Id("100".into())).unwrap().index,
            3
        );
        assert!(find(&indexed, &ClipSelector::Index(4)).is_none());
        assert!(find(&indexed, &ClipSelector::Id("1".into())).is_none());
    }
}
