//! Scoring module - weighted candidate scoring for comparison requests.

mod scoring_model;
mod scoring_service;

pub use scoring_model::{CandidateScores, ScoredCandidate};
pub use scoring_service::{rank_candidates, weighted_total};
