pub mod bell;
pub mod center;
