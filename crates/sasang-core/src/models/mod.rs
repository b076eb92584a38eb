pub mod assessment;
pub mod constitution;
pub mod measurement;
