//! Local like toggle with a counter that follows the toggle.

/// Liked flag plus a displayed counter, both seeded from the listing.
///
/// The counter only moves on transitions after construction: seeding never
/// adjusts it, and re-applying the current state is not a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LikeToggle {
    liked: bool,
    count: i64,
}

impl LikeToggle {
    #[must_use]
    pub const fn new(liked: bool, count: i64) -> Self {
        Self { liked, count }
    }

    #[must_use]
    pub const fn liked(&self) -> bool {
        self.liked
    }

    #[must_use]
    pub const fn count(&self) -> i64 {
        self.count
    }

    /// Flip the liked flag. Returns the new flag.
    pub fn toggle(&mut self) -> bool {
        self.set_liked(!self.liked);
        self.liked
    }

    /// Move to `liked`, adjusting the counter by one when the flag changes.
    pub fn set_liked(&mut self, liked: bool) {
        if liked == self.liked {
            return;
        }
        self.liked = liked;
        self.count = if liked {
            self.count.saturating_add(1)
        } else {
            self.count.saturating_sub(1)
        };
    }

    /// Copy with the flag flipped; convenient for immutable UI state.
    #[must_use]
    pub fn toggled(mut self) -> Self {
        self.toggle();
        self
    }
}
