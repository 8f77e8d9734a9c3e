mod evals;

pub use evals::EvalsPage;
