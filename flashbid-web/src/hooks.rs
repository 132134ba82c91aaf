use flashbid_core::{Countdown, CountdownController, CountdownSettings, Deadline, ListingKind};
use yew::prelude::*;

use crate::timer::{BrowserClock, IntervalTicker};

/// Run a countdown toward `deadline`, returning the latest snapshot.
///
/// Changing the kind, the deadline, or the settings disposes the running
/// controller and starts a fresh one; unmounting disposes it for good.
#[hook]
pub fn use_countdown(
    kind: ListingKind,
    deadline: Deadline,
    settings: CountdownSettings,
) -> Countdown {
    let initial = settings.initial_display.clone();
    let snapshot = use_state_eq(move || Countdown::with_display(deadline, initial));
    {
        let snapshot = snapshot.clone();
        use_effect_with((kind, deadline, settings), move |(_, deadline, settings)| {
            snapshot.set(Countdown::with_display(
                *deadline,
                settings.initial_display.clone(),
            ));
            let observer = snapshot;
            let mut controller =
                CountdownController::new(IntervalTicker, BrowserClock, settings.clone())
                    .on_change(move |state| observer.set(state.clone()));
            controller.start(*deadline);
            move || controller.dispose()
        });
    }
    (*snapshot).clone()
}
