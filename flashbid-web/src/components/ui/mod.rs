pub mod countdown_panel;
pub mod like_button;
pub mod price_panel;
pub mod product_card;

pub use countdown_panel::CountdownPanel;
pub use like_button::LikeButton;
pub use price_panel::{AuctionPrice, SalePrice};
pub use product_card::ProductCard;
