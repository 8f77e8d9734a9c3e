mod card;
mod empty_state;
mod loading;

pub use card::Card;
pub use empty_state::EmptyState;
pub use loading::Loading;
