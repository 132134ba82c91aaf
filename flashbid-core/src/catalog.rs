//! Listing collections, their loaders, and data validation.
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::listing::{Listing, ListingKind};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unknown data source: {0}")]
    Missing(String),
}

/// Ordered listings as they appear on the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub listings: Vec<Listing>,
}

impl Catalog {
    /// Parse a JSON array of listings.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a listing lacks a required field.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter()
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    /// Check every listing for data that would render badly.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        for listing in &self.listings {
            if !seen.insert(listing.id) {
                issues.push(ValidationIssue::new(listing, Severity::Error, IssueKind::DuplicateId));
            }
            if !listing.deadline().is_valid() {
                issues.push(ValidationIssue::new(
                    listing,
                    Severity::Error,
                    IssueKind::InvalidDeadline,
                ));
            }
            match (listing.kind(), listing.discount) {
                (ListingKind::FlashDeal, Some(discount)) if !(0.0..=100.0).contains(&discount) => {
                    issues.push(ValidationIssue::new(
                        listing,
                        Severity::Error,
                        IssueKind::DiscountOutOfRange,
                    ));
                }
                (ListingKind::Auction, Some(_)) => {
                    issues.push(ValidationIssue::new(
                        listing,
                        Severity::Warning,
                        IssueKind::AuctionWithDiscount,
                    ));
                }
                _ => {}
            }
            if listing.price < 0.0 || !listing.price.is_finite() {
                issues.push(ValidationIssue::new(
                    listing,
                    Severity::Error,
                    IssueKind::InvalidPrice,
                ));
            }
        }
        issues
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    DuplicateId,
    InvalidDeadline,
    DiscountOutOfRange,
    AuctionWithDiscount,
    InvalidPrice,
}

impl IssueKind {
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::DuplicateId => "listing id appears more than once",
            Self::InvalidDeadline => "end timestamp for this listing kind is missing or unparseable",
            Self::DiscountOutOfRange => "discount must be within 0..=100",
            Self::AuctionWithDiscount => "auction carries a discount that is never shown",
            Self::InvalidPrice => "price must be a finite, non-negative number",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub listing_id: u64,
    pub severity: Severity,
    pub kind: IssueKind,
}

impl ValidationIssue {
    fn new(listing: &Listing, severity: Severity, kind: IssueKind) -> Self {
        Self {
            listing_id: listing.id,
            severity,
            kind,
        }
    }
}

/// Platform seam for reading listing data and configs.
pub trait CatalogLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the listings shown on the page.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing data cannot be read or parsed.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;

    /// Load a named JSON config.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is unknown, unreadable, or malformed.
    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: serde::de::DeserializeOwned;
}
