/// An item carrying a client-local "liked" flag.
pub trait Likeable {
    fn like_id(&self) -> &str;
    fn is_liked(&self) -> bool;
    /// Set the flag. There is no way to clear it.
    fn mark_liked(&mut self);
}

/// What an optimistic like did to local state.
///
/// The like request is sent for every outcome; this only reports the visible effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    /// The flag flipped to true.
    Marked,
    /// The flag was already true; nothing visible changed.
    AlreadyLiked,
    /// No item with that id in the view.
    NotFound,
}

impl LikeOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, LikeOutcome::Marked)
    }
}

/// Optimistically mark every item with `id` as liked.
///
/// Applied before the network call and never rolled back. A view can hold the
/// same post more than once; all copies share the flag.
pub fn apply_like<T: Likeable>(items: &mut [T], id: &str) -> LikeOutcome {
    let mut found = false;
    let mut marked = false;
    for item in items.iter_mut().filter(|item| item.like_id() == id) {
        found = true;
        if !item.is_liked() {
            item.mark_liked();
            marked = true;
        }
    }

    match (found, marked) {
        (_, true) => LikeOutcome::Marked,
        (true, false) => LikeOutcome::AlreadyLiked,
        (false, false) => LikeOutcome::NotFound,
    }
}
