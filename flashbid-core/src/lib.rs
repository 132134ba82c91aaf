//! Flashbid Core
//!
//! Platform-agnostic logic for the flash-sale and auction listing page:
//! countdown decomposition and control, sale pricing, like state, and the
//! listing data model. No UI or platform-specific dependencies.

pub mod catalog;
pub mod config;
pub mod countdown;
pub mod deadline;
pub mod likes;
pub mod listing;
pub mod pricing;
pub mod time;
pub mod virtual_time;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, CatalogLoader, IssueKind, Severity, ValidationIssue};
pub use config::{PAGE_CONFIG_NAME, PageConfig};
pub use countdown::{
    Clock, Countdown, CountdownController, CountdownPhase, CountdownSettings, TickFlow,
    TickHandle, TickOutcome, Ticker,
};
pub use deadline::Deadline;
pub use likes::LikeToggle;
pub use listing::{Listing, ListingKind};
pub use pricing::{discount_label, discounted_price, price_label};
pub use time::{Remaining, ZERO_DISPLAY, days, format_components, hours, minutes, seconds};
pub use virtual_time::VirtualTime;

/// Loads everything a listing page needs through one [`CatalogLoader`].
pub struct Storefront<L>
where
    L: CatalogLoader,
{
    loader: L,
}

impl<L> Storefront<L>
where
    L: CatalogLoader,
{
    pub const fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Listings plus page config.
    ///
    /// # Errors
    ///
    /// Returns an error if the listings or the page config cannot be loaded.
    pub fn load(&self) -> Result<(Catalog, PageConfig), L::Error> {
        let catalog = self.loader.load_catalog()?;
        let config = self.loader.load_config::<PageConfig>(PAGE_CONFIG_NAME)?;
        log::debug!("loaded {} listings", catalog.len());
        Ok((catalog, config))
    }

    pub const fn loader(&self) -> &L {
        &self.loader
    }
}
