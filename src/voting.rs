//! Feature Voting
//!
//! Session-local roadmap board. Votes and suggestions are kept in memory and
//! vanish on reload.

use std::collections::HashSet;
use thiserror::Error;

use crate::dataset::Feature;

/// Features highlighted as "top requested"
pub const TOP_FEATURES: usize = 3;

/// Minimum trimmed length of a suggestion
pub const MIN_SUGGESTION_CHARS: usize = 5;

/// Description given to visitor suggestions
pub const SUGGESTED_DESCRIPTION: &str = "User suggested feature";

/// Reasons a vote or suggestion is refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoteError {
    #[error("Already voted for {0}")]
    AlreadyVoted(String),

    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    #[error("Feature suggestion too short")]
    SuggestionTooShort,
}

/// Voting board state for one session
#[derive(Debug, Clone, Default)]
pub struct FeatureBoard {
    features: Vec<Feature>,
    voted: HashSet<String>,
    suggested: u32,
}

impl FeatureBoard {
    pub fn new(seed: Vec<Feature>) -> Self {
        Self {
            features: seed,
            voted: HashSet::new(),
            suggested: 0,
        }
    }

    /// Features in insertion order
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn get(&self, id: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == id)
    }

    /// Most votes first; equal counts keep insertion order
    pub fn ranked(&self) -> Vec<&Feature> {
        let mut ranked: Vec<&Feature> = self.features.iter().collect();
        ranked.sort_by(|a, b| b.votes.cmp(&a.votes));
        ranked
    }

    /// Ids of the `n` highest ranked features
    pub fn top_ids(&self, n: usize) -> Vec<String> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|f| f.id.clone())
            .collect()
    }

    pub fn is_top(&self, id: &str) -> bool {
        self.top_ids(TOP_FEATURES).iter().any(|top| top == id)
    }

    pub fn can_vote(&self, id: &str) -> bool {
        self.get(id).is_some() && !self.voted.contains(id)
    }

    pub fn has_voted(&self, id: &str) -> bool {
        self.voted.contains(id)
    }

    /// Add one vote and return the new count
    pub fn vote(&mut self, id: &str) -> Result<u32, VoteError> {
        if self.voted.contains(id) {
            return Err(VoteError::AlreadyVoted(id.to_string()));
        }

        let feature = self
            .features
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| VoteError::UnknownFeature(id.to_string()))?;

        feature.votes += 1;
        let votes = feature.votes;
        self.voted.insert(id.to_string());

        tracing::info!(feature = id, votes, "Vote recorded");
        Ok(votes)
    }

    /// Append a visitor suggestion with one vote
    ///
    /// The suggester is counted as having voted for it.
    pub fn suggest(&mut self, title: &str) -> Result<&Feature, VoteError> {
        let title = title.trim();
        if title.chars().count() < MIN_SUGGESTION_CHARS {
            return Err(VoteError::SuggestionTooShort);
        }

        let id = self.next_suggested_id();
        self.voted.insert(id.clone());
        self.features.push(Feature {
            id,
            title: title.to_string(),
            description: SUGGESTED_DESCRIPTION.to_string(),
            icon: "➕".to_string(),
            votes: 1,
        });

        tracing::info!(title, "Feature suggested");
        let index = self.features.len() - 1;
        Ok(&self.features[index])
    }

    fn next_suggested_id(&mut self) -> String {
        loop {
            self.suggested += 1;
            let id = format!("suggested_{}", self.suggested);
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn board() -> FeatureBoard {
        FeatureBoard::new(Dataset::bundled().unwrap().features)
    }

    #[test]
    fn test_ranked_by_votes() {
        let board = board();
        let ranked = board.ranked();
        for pair in ranked.windows(2) {
            assert!(pair[0].votes >= pair[1].votes);
        }
        assert_eq!(board.top_ids(3), vec!["lost_pet", "discounts", "housing"]);
        assert!(board.is_top("housing"));
        assert!(!board.is_top("regulations"));
    }

    #[test]
    fn test_vote_adds_exactly_one() {
        let mut board = board();
        let before = board.get("regulations").unwrap().votes;

        assert!(board.can_vote("regulations"));
        assert_eq!(board.vote("regulations"), Ok(before + 1));
        assert_eq!(board.get("regulations").unwrap().votes, before + 1);
        assert!(!board.can_vote("regulations"));
    }

    #[test]
    fn test_second_vote_rejected() {
        let mut board = board();
        board.vote("training").unwrap();
        let after_first = board.get("training").unwrap().votes;

        assert_eq!(
            board.vote("training"),
            Err(VoteError::AlreadyVoted("training".into()))
        );
        assert_eq!(board.get("training").unwrap().votes, after_first);
    }

    #[test]
    fn test_unknown_feature() {
        let mut board = board();
        assert_eq!(
            board.vote("teleport"),
            Err(VoteError::UnknownFeature("teleport".into()))
        );
        assert!(!board.can_vote("teleport"));
    }

    #[test]
    fn test_votes_can_change_ranking() {
        let mut board = FeatureBoard::new(vec![
            Feature {
                id: "a".into(),
                title: "A".into(),
                description: String::new(),
                icon: String::new(),
                votes: 3,
            },
            Feature {
                id: "b".into(),
                title: "B".into(),
                description: String::new(),
                icon: String::new(),
                votes: 3,
            },
        ]);
        assert_eq!(board.top_ids(1), vec!["a"]);

        board.vote("b").unwrap();
        assert_eq!(board.top_ids(1), vec!["b"]);
    }

    #[test]
    fn test_suggest() {
        let mut board = board();
        let feature = board.suggest("  Pet-friendly hiking trails  ").unwrap();

        assert_eq!(feature.id, "suggested_1");
        assert_eq!(feature.title, "Pet-friendly hiking trails");
        assert_eq!(feature.description, SUGGESTED_DESCRIPTION);
        assert_eq!(feature.votes, 1);
        assert!(!board.can_vote("suggested_1"));

        let second = board.suggest("Grooming coupons").unwrap();
        assert_eq!(second.id, "suggested_2");
        assert_eq!(board.features().len(), 10);
    }

    #[test]
    fn test_short_suggestion_rejected() {
        let mut board = board();
        assert_eq!(board.suggest("  abc  "), Err(VoteError::SuggestionTooShort));
        assert_eq!(board.features().len(), 8);
    }
}
