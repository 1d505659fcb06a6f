//! Brand Match Common Library
//!
//! 商品とインフルエンサーの相性スコア計算と、CLIで共有される型

pub mod types;
pub mod labels;
pub mod rules;
pub mod scoring;
pub mod advice;
pub mod validation;
pub mod error;
pub mod export;

pub use types::{MatchResult, ScoredSubmission, SubmissionRecord};
pub use labels::{InfluencerAudience, InfluencerStyle};
pub use rules::{KeywordRule, PenaltyCheck, AUDIENCE_RULES, STYLE_RULES};
pub use scoring::{
    calculate_audience_compatibility, calculate_style_compatibility, determine_match,
    MATCH_THRESHOLD,
};
pub use advice::{generate_strengths, generate_weaknesses};
pub use validation::{validate_submission, validate_submission_with_limit, MAX_ATTACHMENTS};
pub use error::{Error, Result};
