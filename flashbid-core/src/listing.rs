//! Product listing records
use serde::{Deserialize, Serialize};

use crate::deadline::Deadline;
use crate::likes::LikeToggle;
use crate::pricing::discounted_price;

/// Whether a listing is sold at a fixed (discounted) price or auctioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    FlashDeal,
    Auction,
}

impl ListingKind {
    #[must_use]
    pub const fn from_on_sale(has_on_sale: bool) -> Self {
        if has_on_sale {
            Self::FlashDeal
        } else {
            Self::Auction
        }
    }

    /// Short badge text.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::FlashDeal => "Sale",
            Self::Auction => "Auction",
        }
    }

    /// Heading above the countdown.
    #[must_use]
    pub const fn countdown_heading(self) -> &'static str {
        match self {
            Self::FlashDeal => "Flash deal ends in",
            Self::Auction => "Auction ends in",
        }
    }
}

/// One product card's worth of data.
///
/// Field names follow the listing JSON (camelCase). `prize`/`previousPrize`
/// are accepted as aliases for older data sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: u64,
    pub tag: String,
    pub name: String,
    /// Sale list price, or the highest bid for auctions.
    #[serde(alias = "prize")]
    pub price: f64,
    /// Percentage off the list price.
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default, alias = "previousPrize")]
    pub previous_price: Option<String>,
    #[serde(default)]
    pub has_liked: bool,
    #[serde(default)]
    pub likes: i64,
    pub has_on_sale: bool,
    #[serde(default)]
    pub flash_deal_ends_in: Option<String>,
    #[serde(default)]
    pub auction_ends_in: Option<String>,
}

impl Listing {
    #[must_use]
    pub const fn kind(&self) -> ListingKind {
        ListingKind::from_on_sale(self.has_on_sale)
    }

    /// The countdown target for this listing's kind.
    #[must_use]
    pub fn deadline(&self) -> Deadline {
        Deadline::select(
            self.kind(),
            self.flash_deal_ends_in.as_deref(),
            self.auction_ends_in.as_deref(),
        )
    }

    /// Price after discount; auctions are never discounted.
    #[must_use]
    pub fn sale_price(&self) -> f64 {
        match self.kind() {
            ListingKind::FlashDeal => discounted_price(self.discount, self.price),
            ListingKind::Auction => self.price,
        }
    }

    /// Initial like state for this listing's card.
    #[must_use]
    pub const fn like_toggle(&self) -> LikeToggle {
        LikeToggle::new(self.has_liked, self.likes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLASH_JSON: &str = r##"{
        "id": 7,
        "tag": "#0007",
        "name": "Neon Fox",
        "prize": 200,
        "discount": 25,
        "previousPrize": "260",
        "hasLiked": false,
        "likes": 10,
        "hasOnSale": true,
        "flashDealEndsIn": "2030-01-01T00:00:00Z",
        "auctionEndsIn": "2031-01-01T00:00:00Z"
    }"##;

    #[test]
    fn parses_legacy_field_names() {
        let listing: Listing = serde_json::from_str(FLASH_JSON).expect("listing parses");
        assert!((listing.price - 200.0).abs() < f64::EPSILON);
        assert_eq!(listing.previous_price.as_deref(), Some("260"));
        assert_eq!(listing.kind(), ListingKind::FlashDeal);
        assert!((listing.sale_price() - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn deadline_follows_kind() {
        let mut listing: Listing = serde_json::from_str(FLASH_JSON).expect("listing parses");
        let flash = listing.deadline();
        listing.has_on_sale = false;
        let auction = listing.deadline();
        assert_ne!(flash, auction);
        assert!(flash.is_valid() && auction.is_valid());
        assert!((listing.sale_price() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn optional_fields_default() {
        let listing: Listing = serde_json::from_str(
            r#"{"id":1,"tag":"t","name":"n","price":5,"hasOnSale":false}"#,
        )
        .expect("minimal listing parses");
        assert_eq!(listing.discount, None);
        assert_eq!(listing.likes, 0);
        assert!(!listing.like_toggle().liked());
        assert_eq!(listing.deadline(), Deadline::Invalid);
    }

    #[test]
    fn kind_labels() {
        assert_eq!(ListingKind::FlashDeal.badge(), "Sale");
        assert_eq!(ListingKind::Auction.countdown_heading(), "Auction ends in");
        assert_eq!(ListingKind::from_on_sale(true), ListingKind::FlashDeal);
    }
}
