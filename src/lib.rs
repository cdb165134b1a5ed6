pub mod comparison;
pub mod config;
pub mod normalize;
pub mod outcome;
pub mod player;
pub mod prediction;
pub mod role;
pub mod venue;
pub mod verdict;
