pub mod article;
pub mod content;
pub mod errors;
pub mod subscriber;
pub mod topic;
