pub mod experience;
pub mod location;
pub mod pipeline;
pub mod ranker;
pub mod salary;
pub mod scoring;
pub mod skills;
pub mod weights;
