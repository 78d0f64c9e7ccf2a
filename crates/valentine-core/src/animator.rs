//! Sequential GIF animator.
//!
//! Each screen owns a strip of GIFs. While a screen is live, a session
//! shows one GIF at a time: every display interval the current GIF hides,
//! the index advances circularly, and half a fade later the next GIF
//! reveals. Sessions are keyed by screen; at most one per screen.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use crate::assets::GifBuckets;
use crate::scheduler::{Scheduler, TaskId};
use crate::screen::ScreenId;

/// Visibility of one GIF element
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GifVisibility {
    /// Inserted but never cycled
    #[default]
    Idle,
    Hidden,
    Active,
}

impl GifVisibility {
    /// CSS class for this state
    pub fn class(&self) -> &'static str {
        match self {
            GifVisibility::Idle => "gif-item",
            GifVisibility::Hidden => "gif-item hidden",
            GifVisibility::Active => "gif-item active",
        }
    }
}

/// One GIF element in a screen's container
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GifItem {
    pub path: String,
    /// Position within the screen's strip
    pub index: usize,
    /// Load failed; the element is hidden and never cycled.
    pub failed: bool,
    pub visibility: GifVisibility,
}

impl GifItem {
    fn is_cyclable(&self) -> bool {
        !self.failed && !self.path.is_empty()
    }

    fn hide(&mut self) {
        self.visibility = GifVisibility::Hidden;
    }

    fn show(&mut self) {
        self.visibility = GifVisibility::Active;
    }
}

/// Timer actions the animator asks its scheduler to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GifCue {
    /// Hide the current GIF and advance
    Tick { screen: ScreenId, generation: u64 },
    /// Reveal the GIF at `index` after the half-fade
    Reveal {
        screen: ScreenId,
        generation: u64,
        index: usize,
    },
}

/// Live cycling state for one screen.
#[derive(Clone, Debug)]
pub struct GifSession {
    /// Container indices of the GIFs in rotation
    order: Vec<usize>,
    /// Position in `order`
    current: usize,
    timer: TaskId,
    generation: u64,
}

impl GifSession {
    pub fn current_item(&self) -> usize {
        self.order[self.current]
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn timer(&self) -> TaskId {
        self.timer
    }
}

/// Owns every screen's GIF container and the session registry.
#[derive(Debug, Default)]
pub struct GifAnimator {
    containers: BTreeMap<ScreenId, Vec<GifItem>>,
    sessions: HashMap<ScreenId, GifSession>,
    next_generation: u64,
}

impl GifAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a screen's container contents.
    ///
    /// Stops any session on that screen first; its elements are gone.
    pub fn install<A: Clone + From<GifCue>>(
        &mut self,
        screen: ScreenId,
        paths: &[String],
        scheduler: &mut Scheduler<A>,
    ) {
        self.cancel_session(screen, scheduler);
        let items = paths
            .iter()
            .enumerate()
            .map(|(index, path)| GifItem {
                path: path.clone(),
                index,
                failed: false,
                visibility: GifVisibility::Idle,
            })
            .collect();
        self.containers.insert(screen, items);
    }

    /// Install every bucket on the screens that have a container.
    pub fn install_all<A: Clone + From<GifCue>>(
        &mut self,
        buckets: &GifBuckets,
        present: impl Fn(ScreenId) -> bool,
        scheduler: &mut Scheduler<A>,
    ) {
        for (screen, paths) in buckets {
            if present(*screen) {
                self.install(*screen, paths, scheduler);
            }
        }
    }

    pub fn items(&self, screen: ScreenId) -> &[GifItem] {
        self.containers
            .get(&screen)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_container(&self, screen: ScreenId) -> bool {
        self.containers.contains_key(&screen)
    }

    pub fn session(&self, screen: ScreenId) -> Option<&GifSession> {
        self.sessions.get(&screen)
    }

    /// Screens with a live session, ascending.
    pub fn live_screens(&self) -> Vec<ScreenId> {
        let mut screens: Vec<_> = self.sessions.keys().copied().collect();
        screens.sort();
        screens
    }

    /// Number of GIFs currently marked visible on a screen.
    pub fn active_count(&self, screen: ScreenId) -> usize {
        self.items(screen)
            .iter()
            .filter(|item| item.visibility == GifVisibility::Active)
            .count()
    }

    fn cancel_session<A: Clone>(&mut self, screen: ScreenId, scheduler: &mut Scheduler<A>) {
        if let Some(session) = self.sessions.remove(&screen) {
            scheduler.cancel(session.timer);
        }
    }

    /// Start (or restart) cycling on a screen.
    ///
    /// Returns false, with no timer registered, when the screen has no
    /// cyclable GIF.
    pub fn start<A: Clone + From<GifCue>>(
        &mut self,
        screen: ScreenId,
        display: Duration,
        scheduler: &mut Scheduler<A>,
    ) -> bool {
        self.cancel_session(screen, scheduler);

        let Some(items) = self.containers.get_mut(&screen) else {
            return false;
        };
        let order: Vec<usize> = items
            .iter()
            .filter(|item| item.is_cyclable())
            .map(|item| item.index)
            .collect();
        if order.is_empty() {
            tracing::debug!(%screen, "No GIFs to animate");
            return false;
        }

        for &index in &order {
            items[index].hide();
        }
        items[order[0]].show();

        let generation = self.next_generation;
        self.next_generation += 1;
        let timer = scheduler.schedule_every(display, GifCue::Tick { screen, generation }.into());
        tracing::debug!(%screen, gifs = order.len(), "GIF session started");
        self.sessions.insert(
            screen,
            GifSession {
                order,
                current: 0,
                timer,
                generation,
            },
        );
        true
    }

    /// Stop cycling on a screen and hide all of its GIFs.
    pub fn stop<A: Clone>(&mut self, screen: ScreenId, scheduler: &mut Scheduler<A>) {
        self.cancel_session(screen, scheduler);
        if let Some(items) = self.containers.get_mut(&screen) {
            items.iter_mut().for_each(GifItem::hide);
        }
    }

    /// Stop every screen that has a session registered.
    pub fn stop_all<A: Clone>(&mut self, scheduler: &mut Scheduler<A>) {
        for screen in self.live_screens() {
            self.stop(screen, scheduler);
        }
    }

    /// Run a cue fired by the scheduler. Cues from a replaced or stopped
    /// session are ignored.
    pub fn handle<A: Clone + From<GifCue>>(
        &mut self,
        cue: GifCue,
        half_fade: Duration,
        scheduler: &mut Scheduler<A>,
    ) {
        match cue {
            GifCue::Tick { screen, generation } => {
                let Some(session) = self.sessions.get_mut(&screen) else {
                    return;
                };
                if session.generation != generation {
                    return;
                }
                let Some(items) = self.containers.get_mut(&screen) else {
                    return;
                };
                items[session.order[session.current]].hide();
                session.current = (session.current + 1) % session.order.len();
                let index = session.order[session.current];
                scheduler.schedule_after(
                    half_fade,
                    GifCue::Reveal {
                        screen,
                        generation,
                        index,
                    }
                    .into(),
                );
            }
            GifCue::Reveal {
                screen,
                generation,
                index,
            } => {
                // A later tick may have moved past this item before it was shown.
                let live = self.sessions.get(&screen).is_some_and(|session| {
                    session.generation == generation && session.order[session.current] == index
                });
                if !live {
                    return;
                }
                if let Some(item) = self
                    .containers
                    .get_mut(&screen)
                    .and_then(|items| items.get_mut(index))
                {
                    item.show();
                }
            }
        }
    }

    /// Mark a GIF as failed to load and hide it.
    ///
    /// A live session on that screen restarts without the failed GIF.
    /// Returns true when a restart is needed.
    pub fn mark_failed(&mut self, screen: ScreenId, index: usize) -> bool {
        let Some(item) = self
            .containers
            .get_mut(&screen)
            .and_then(|items| items.get_mut(index))
        else {
            return false;
        };
        if item.failed {
            return false;
        }
        tracing::warn!(%screen, path = %item.path, "GIF failed to load");
        item.failed = true;
        item.hide();
        self.sessions
            .get(&screen)
            .is_some_and(|session| session.order.contains(&index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn paths(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("g{i}.gif")).collect()
    }

    fn run(animator: &mut GifAnimator, sched: &mut Scheduler<GifCue>, until: Duration) {
        while let Some((_, cue)) = sched.pop_due(until) {
            animator.handle(cue, ms(400), sched);
        }
        sched.advance_clock(until);
    }

    fn visible(animator: &GifAnimator, screen: ScreenId) -> Vec<usize> {
        animator
            .items(screen)
            .iter()
            .filter(|item| item.visibility == GifVisibility::Active)
            .map(|item| item.index)
            .collect()
    }

    #[test]
    fn start_without_gifs_registers_nothing() {
        let mut sched = Scheduler::<GifCue>::new();
        let mut animator = GifAnimator::new();
        assert!(!animator.start(ScreenId::SONG, ms(2000), &mut sched));

        animator.install(ScreenId::SONG, &[], &mut sched);
        assert!(!animator.start(ScreenId::SONG, ms(2000), &mut sched));
        assert!(animator.session(ScreenId::SONG).is_none());
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn cycles_through_gifs() {
        let mut sched = Scheduler::<GifCue>::new();
        let mut animator = GifAnimator::new();
        animator.install(ScreenId::UNLOCK, &paths(3), &mut sched);
        assert!(animator.start(ScreenId::UNLOCK, ms(2000), &mut sched));
        assert_eq!(visible(&animator, ScreenId::UNLOCK), vec![0]);

        // Tick hides the current GIF; the next one appears after the half-fade.
        run(&mut animator, &mut sched, ms(2000));
        assert_eq!(visible(&animator, ScreenId::UNLOCK), Vec::<usize>::new());
        run(&mut animator, &mut sched, ms(2400));
        assert_eq!(visible(&animator, ScreenId::UNLOCK), vec![1]);

        run(&mut animator, &mut sched, ms(6400));
        assert_eq!(visible(&animator, ScreenId::UNLOCK), vec![0]);
    }

    #[test]
    fn restart_replaces_timer() {
        let mut sched = Scheduler::<GifCue>::new();
        let mut animator = GifAnimator::new();
        animator.install(ScreenId::REVEAL, &paths(2), &mut sched);
        animator.start(ScreenId::REVEAL, ms(2000), &mut sched);
        let first = animator.session(ScreenId::REVEAL).unwrap().timer();

        // Restart mid-fade: the pending reveal belongs to the old session.
        run(&mut animator, &mut sched, ms(2100));
        animator.start(ScreenId::REVEAL, ms(2000), &mut sched);
        let second = animator.session(ScreenId::REVEAL).unwrap().timer();

        assert_ne!(first, second);
        assert!(!sched.is_scheduled(first));
        assert!(sched.is_scheduled(second));
        assert_eq!(sched.pending(), 2);

        run(&mut animator, &mut sched, ms(2600));
        assert_eq!(visible(&animator, ScreenId::REVEAL), vec![0]);
    }

    #[test]
    fn reveal_overtaken_by_next_tick_is_dropped() {
        let mut sched = Scheduler::<GifCue>::new();
        let mut animator = GifAnimator::new();
        animator.install(ScreenId::UNLOCK, &paths(3), &mut sched);
        animator.start(ScreenId::UNLOCK, ms(2000), &mut sched);

        // Half-fade longer than the display interval: each reveal lands
        // after the following tick.
        let mut most_visible = 0;
        for step in 1..=100u64 {
            let until = ms(step * 200);
            while let Some((_, cue)) = sched.pop_due(until) {
                animator.handle(cue, ms(2500), &mut sched);
                most_visible = most_visible.max(animator.active_count(ScreenId::UNLOCK));
            }
            sched.advance_clock(until);
        }
        assert!(most_visible <= 1);
    }

    #[test]
    fn stop_hides_everything() {
        let mut sched = Scheduler::<GifCue>::new();
        let mut animator = GifAnimator::new();
        animator.install(ScreenId::MEMORIES, &paths(2), &mut sched);
        animator.start(ScreenId::MEMORIES, ms(2000), &mut sched);
        animator.stop(ScreenId::MEMORIES, &mut sched);

        assert!(animator.session(ScreenId::MEMORIES).is_none());
        assert!(animator
            .items(ScreenId::MEMORIES)
            .iter()
            .all(|item| item.visibility == GifVisibility::Hidden));
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn failed_gifs_are_skipped() {
        let mut sched = Scheduler::<GifCue>::new();
        let mut animator = GifAnimator::new();
        animator.install(ScreenId::UNLOCK, &paths(3), &mut sched);
        assert!(!animator.mark_failed(ScreenId::UNLOCK, 0));
        animator.start(ScreenId::UNLOCK, ms(2000), &mut sched);
        assert_eq!(visible(&animator, ScreenId::UNLOCK), vec![1]);
        assert_eq!(animator.session(ScreenId::UNLOCK).unwrap().len(), 2);

        assert!(animator.mark_failed(ScreenId::UNLOCK, 2));
        assert!(!animator.mark_failed(ScreenId::UNLOCK, 2));
    }

    #[test]
    fn install_clears_previous_session() {
        let mut sched = Scheduler::<GifCue>::new();
        let mut animator = GifAnimator::new();
        animator.install(ScreenId::FINALE, &paths(2), &mut sched);
        animator.start(ScreenId::FINALE, ms(2000), &mut sched);
        animator.install(ScreenId::FINALE, &paths(1), &mut sched);
        assert!(animator.session(ScreenId::FINALE).is_none());
        assert_eq!(animator.items(ScreenId::FINALE).len(), 1);
        assert_eq!(sched.pending(), 0);
    }
}
