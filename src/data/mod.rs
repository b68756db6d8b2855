//! Core data models for the Forvo client
//!
//! This module contains the pronunciation listing returned by the
//! `word-pronunciations` action and the policy for choosing one sample from it.

pub mod forvo;
pub mod transport;

pub use forvo::{ForvoClient, FORVO_BASE_URL};
pub use transport::{HttpResponse, ReqwestTransport, Transport};

use serde::Deserialize;

/// A single pronunciation sample from a listing
///
/// Only the fields used for selection and download are decoded; anything
/// else in the item is ignored. The audio URL is only required on the item
/// that ends up selected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PronunciationItem {
    /// Number of up-votes the sample has received
    pub num_positive_votes: i64,
    /// URL of the MP3 file
    #[serde(default)]
    pub pathmp3: Option<String>,
}

/// All pronunciation samples returned for one (language, word) query
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PronunciationListing {
    pub items: Vec<PronunciationItem>,
}

impl PronunciationListing {
    /// Returns the most up-voted item
    ///
    /// Ties go to the item that appears first. Returns `None` for an empty listing.
    pub fn best(&self) -> Option<&PronunciationItem> {
        self.items.iter().reduce(|best, item| {
            if item.num_positive_votes > best.num_positive_votes {
                item
            } else {
                best
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(votes: &[i64]) -> PronunciationListing {
        PronunciationListing {
            items: votes
                .iter()
                .enumerate()
                .map(|(i, &v)| PronunciationItem {
                    num_positive_votes: v,
                    pathmp3: Some(format!("https://audio.example/{}.mp3", i)),
                })
                .collect(),
        }
    }

    #[test]
    fn test_best_picks_first_of_equal_maxima() {
        let listing = listing(&[3, 7, 7, 2]);
        let best = listing.best().expect("Listing is not empty");
        assert_eq!(best.pathmp3.as_deref(), Some("https://audio.example/1.mp3"));
    }

    #[test]
    fn test_best_single_item() {
        let listing = listing(&[0]);
        assert_eq!(listing.best().unwrap().pathmp3.as_deref(), Some("https://audio.example/0.mp3"));
    }

    #[test]
    fn test_best_last_item_when_strictly_greatest() {
        let listing = listing(&[1, 2, 3]);
        assert_eq!(listing.best().unwrap().pathmp3.as_deref(), Some("https://audio.example/2.mp3"));
    }

    #[test]
    fn test_best_all_equal_returns_first() {
        let listing = listing(&[4, 4, 4]);
        assert_eq!(listing.best().unwrap().pathmp3.as_deref(), Some("https://audio.example/0.mp3"));
    }

    #[test]
    fn test_best_empty_listing() {
        let listing = PronunciationListing::default();
        assert!(listing.best().is_none());
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"{
            "attributes": {"total": 1},
            "items": [{
                "id": 12345,
                "word": "hello",
                "username": "someone",
                "num_positive_votes": 5,
                "pathmp3": "https://apifree.forvo.com/audio/abc",
                "pathogg": "https://apifree.forvo.com/audio/abc.ogg"
            }]
        }"#;

        let listing: PronunciationListing = serde_json::from_str(json).expect("Should parse");

        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.items[0].num_positive_votes, 5);
        assert_eq!(
            listing.items[0].pathmp3.as_deref(),
            Some("https://apifree.forvo.com/audio/abc")
        );
    }

    #[test]
    fn test_deserialize_missing_items_fails() {
        let result = serde_json::from_str::<PronunciationListing>(r#"{"attributes": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_items_not_a_list_fails() {
        let result = serde_json::from_str::<PronunciationListing>(r#"{"items": {"a": 1}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_item_without_audio_url() {
        let json = r#"{"items": [
            {"num_positive_votes": 9, "pathmp3": "http://a/best.mp3"},
            {"num_positive_votes": 1}
        ]}"#;

        let listing: PronunciationListing = serde_json::from_str(json).expect("Should parse");

        assert_eq!(listing.items[1].pathmp3, None);
        assert_eq!(listing.best().unwrap().pathmp3.as_deref(), Some("http://a/best.mp3"));
    }

    #[test]
    fn test_deserialize_item_without_votes_fails() {
        let result = serde_json::from_str::<PronunciationListing>(
            r#"{"items": [{"pathmp3": "https://audio.example/x.mp3"}]}"#,
        );
        assert!(result.is_err());
    }
}
