pub mod card;
pub mod countdown;

pub use card::Card;
pub use countdown::Countdown;
