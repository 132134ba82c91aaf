//! Countdown runs over a whole catalog, recorded as per-listing timelines.
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use flashbid_core::{
    Catalog, Clock, CountdownController, CountdownPhase, CountdownSettings, Listing, ListingKind,
    Ticker, VirtualTime,
};
use serde::Serialize;

use crate::ticker::{LocalTicker, TokioClock};

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    pub elapsed_ms: i64,
    pub display: String,
    pub phase: CountdownPhase,
}

#[derive(Debug, Clone, Serialize)]
pub struct Timeline {
    pub listing_id: u64,
    pub name: String,
    pub kind: ListingKind,
    pub deadline_valid: bool,
    pub entries: Vec<TimelineEntry>,
    pub final_phase: CountdownPhase,
    pub final_display: String,
}

struct Run<T, C>
where
    T: Ticker,
    C: Clock + Clone + 'static,
{
    listing: Listing,
    entries: Rc<RefCell<Vec<TimelineEntry>>>,
    controller: CountdownController<T, C>,
}

impl<T, C> Run<T, C>
where
    T: Ticker,
    C: Clock + Clone + 'static,
{
    fn start(
        listing: &Listing,
        ticker: T,
        clock: C,
        settings: &CountdownSettings,
        on_entry: Option<Rc<dyn Fn(&Listing, &TimelineEntry)>>,
    ) -> Self {
        let entries = Rc::new(RefCell::new(Vec::new()));
        let origin = clock.now_ms();
        let recorder = Rc::clone(&entries);
        let observed_clock = clock.clone();
        let observed_listing = listing.clone();
        let mut controller = CountdownController::new(ticker, clock, settings.clone()).on_change(
            move |state| {
                let entry = TimelineEntry {
                    elapsed_ms: observed_clock.now_ms() - origin,
                    display: state.display().to_string(),
                    phase: state.phase(),
                };
                if let Some(on_entry) = on_entry.as_ref() {
                    on_entry(&observed_listing, &entry);
                }
                recorder.borrow_mut().push(entry);
            },
        );
        controller.start(listing.deadline());
        Self {
            listing: listing.clone(),
            entries,
            controller,
        }
    }

    fn finish(mut self) -> Timeline {
        self.controller.dispose();
        let snapshot = self.controller.snapshot();
        Timeline {
            listing_id: self.listing.id,
            name: self.listing.name.clone(),
            kind: self.listing.kind(),
            deadline_valid: self.listing.deadline().is_valid(),
            entries: self.entries.take(),
            final_phase: snapshot.phase(),
            final_display: snapshot.display().to_string(),
        }
    }
}

/// Run every listing's countdown on a virtual clock starting at `start_ms`
/// for `ticks` periods.
pub fn simulate(
    catalog: &Catalog,
    settings: &CountdownSettings,
    start_ms: i64,
    ticks: u32,
) -> Vec<Timeline> {
    let time = VirtualTime::starting_at(start_ms);
    let runs: Vec<_> = catalog
        .iter()
        .map(|listing| Run::start(listing, time.clone(), time.clone(), settings, None))
        .collect();
    time.advance(i64::from(settings.tick_ms) * i64::from(ticks));
    log::debug!("simulated {ticks} ticks for {} listings", runs.len());
    runs.into_iter().map(Run::finish).collect()
}

/// Run every listing's countdown in real time for `ticks` periods.
///
/// Must be awaited inside a [`tokio::task::LocalSet`].
pub async fn watch(
    catalog: &Catalog,
    settings: &CountdownSettings,
    ticks: u32,
    on_entry: Rc<dyn Fn(&Listing, &TimelineEntry)>,
) -> Vec<Timeline> {
    let clock = TokioClock::system();
    let runs: Vec<_> = catalog
        .iter()
        .map(|listing| Run::start(listing, LocalTicker, clock, settings, Some(Rc::clone(&on_entry))))
        .collect();
    let total = u64::from(settings.tick_ms) * u64::from(ticks);
    // Half a period of slack so the last tick lands before the runs are torn down.
    tokio::time::sleep(Duration::from_millis(total + u64::from(settings.tick_ms / 2))).await;
    runs.into_iter().map(Run::finish).collect()
}
