//! Career guidance flows
//! Questionnaire-driven recommendations, career comparison, and roadmaps.

pub mod compare;
pub mod recommend;
pub mod roadmap;

pub use compare::{compare_careers, ComparisonReport};
pub use recommend::{recommend, QuestionnaireProfile, RecommendationEntry};
pub use roadmap::{career_roadmap, CareerStage, RoadmapReport};
