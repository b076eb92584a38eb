pub mod assessments;
pub mod health;
pub mod instruments;
pub mod score;
