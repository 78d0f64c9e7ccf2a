//! The show controller.
//!
//! `Show` owns every piece of runtime state: the screen deck, the GIF
//! animator and its sessions, the unlock gate, the song player, the photo
//! layouts and the scheduler that drives all of them. The UI layer only
//! renders from it, forwards input and load failures into it, and advances
//! its clock.
//!
//! ## Transition timeline (default timings)
//!
//! ```text
//! t          show_screen(n)  all screens fade, GIF sessions stop
//! t + 400ms  settle          screen n active (if present)
//! t + 500ms  start GIFs      session on screen n
//! ```
//!
//! Pending transition timers are cancelled by the next `show_screen`, and
//! delayed navigation re-checks which screen is active before acting.

use std::time::Duration;

use rand::Rng;

use crate::animator::{GifAnimator, GifCue};
use crate::assets::{distribute_gifs, AssetProbe, Collage, HeartLayout};
use crate::audio::{AudioPlayer, PlaybackState};
use crate::config::ShowConfig;
use crate::scheduler::{Scheduler, TaskId};
use crate::screen::{ScreenDeck, ScreenId};
use crate::unlock::{UnlockGate, Verdict};

/// Timer actions owned by the show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Settle { target: ScreenId },
    AutoAdvance { from: ScreenId, to: ScreenId },
    StartGifs { screen: ScreenId },
    Gif(GifCue),
    Unlock,
    ClearSuccessHint { attempt: u32 },
}

impl From<GifCue> for Action {
    fn from(cue: GifCue) -> Self {
        Action::Gif(cue)
    }
}

/// Runtime state of the whole greeting.
#[derive(Debug)]
pub struct Show {
    config: ShowConfig,
    scheduler: Scheduler<Action>,
    deck: ScreenDeck,
    animator: GifAnimator,
    gate: UnlockGate,
    audio: AudioPlayer,
    heart: HeartLayout,
    collage: Collage,
    /// Timers cancelled by the next transition
    transition_tasks: Vec<TaskId>,
}

impl Show {
    /// Load every asset with all five screens present and screen 1 active.
    pub fn boot<R: Rng + ?Sized>(
        config: ShowConfig,
        probe: &dyn AssetProbe,
        rng: &mut R,
    ) -> Self {
        Self::with_deck(config, ScreenDeck::full(), probe, rng)
    }

    /// Like [`Show::boot`] with a custom deck. A deck with no active screen
    /// fades screen 1 in.
    pub fn with_deck<R: Rng + ?Sized>(
        config: ShowConfig,
        deck: ScreenDeck,
        probe: &dyn AssetProbe,
        rng: &mut R,
    ) -> Self {
        let timings = config.timings.clone();
        let registry = &config.registry;

        let heart = HeartLayout::load(registry, probe, timings.memory_stagger());
        let collage = Collage::sample(
            registry,
            probe,
            config.collage_size,
            timings.collage_stagger(),
            rng,
        );
        let mut audio = AudioPlayer::new(registry.music_path());
        if let Some(path) = registry.music_path() {
            if !probe.is_available(path) {
                audio.failed();
            }
        }

        let mut scheduler = Scheduler::new();
        let mut animator = GifAnimator::new();
        let buckets = distribute_gifs(&registry.gifs);
        animator.install_all(&buckets, |screen| deck.contains(screen), &mut scheduler);
        for (screen, paths) in &buckets {
            for (index, path) in paths.iter().enumerate() {
                if animator.has_container(*screen) && !probe.is_available(path) {
                    animator.mark_failed(*screen, index);
                }
            }
        }

        // A deck that starts with a screen active only needs its GIFs
        // started; otherwise fade screen 1 in.
        let mut transition_tasks = Vec::new();
        let starting = deck.active();
        if let Some(active) = starting {
            if animator.has_container(active) {
                transition_tasks.push(scheduler.schedule_after(
                    timings.gif_load_start(),
                    Action::StartGifs { screen: active },
                ));
            }
        }

        tracing::info!(
            photos = registry.photos.len(),
            gifs = registry.gifs.len(),
            song = audio.source().is_some(),
            "Show assets loaded"
        );

        let gate = UnlockGate::new(config.answer.clone());
        let mut show = Self {
            config,
            scheduler,
            deck,
            animator,
            gate,
            audio,
            heart,
            collage,
            transition_tasks,
        };
        if starting.is_none() {
            show.show_screen(ScreenId::UNLOCK);
        }
        show
    }

    /// Cross-fade to `target`.
    ///
    /// Stops every GIF session, fades all screens, then settles on the
    /// target after the fade and starts its GIFs shortly after.
    pub fn show_screen(&mut self, target: ScreenId) {
        for id in self.transition_tasks.drain(..) {
            self.scheduler.cancel(id);
        }
        self.animator.stop_all(&mut self.scheduler);
        self.deck.begin_transition();
        tracing::info!(%target, at = ?self.scheduler.now(), "Showing screen");

        let timings = &self.config.timings;
        let settle = self
            .scheduler
            .schedule_after(timings.fade(), Action::Settle { target });
        let gifs = self
            .scheduler
            .schedule_after(timings.gif_start(), Action::StartGifs { screen: target });
        self.transition_tasks.extend([settle, gifs]);
    }

    /// Forward target of the link on `screen`, if one is configured.
    pub fn link_target(&self, screen: ScreenId) -> Option<ScreenId> {
        self.config.navigation.link_from(screen).map(|link| link.to)
    }

    /// Follow the link from the active screen. Returns false if there is
    /// no active screen or it has no link.
    pub fn follow_link(&mut self) -> bool {
        let Some(to) = self.deck.active().and_then(|from| self.link_target(from)) else {
            return false;
        };
        self.show_screen(to);
        true
    }

    /// Validate an answer from the unlock input.
    ///
    /// `None` means the gate is already unlocked and the input is ignored.
    pub fn submit_answer(&mut self, raw: &str) -> Option<Verdict> {
        let verdict = self.gate.submit(raw)?;
        if verdict == Verdict::Correct {
            let timings = &self.config.timings;
            let unlock = self.scheduler.schedule_after(timings.unlock(), Action::Unlock);
            self.transition_tasks.push(unlock);
            self.scheduler.schedule_after(
                timings.success_hint(),
                Action::ClearSuccessHint {
                    attempt: self.gate.attempts(),
                },
            );
        }
        Some(verdict)
    }

    /// Run every timer due at or before `now`, then move the clock to `now`.
    pub fn advance_to(&mut self, now: Duration) {
        while let Some((_, action)) = self.scheduler.pop_due(now) {
            self.run(action);
        }
        self.scheduler.advance_clock(now);
    }

    /// Whether any timer is due at `now`.
    pub fn has_due(&self, now: Duration) -> bool {
        self.scheduler
            .next_deadline()
            .is_some_and(|deadline| deadline <= now)
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Current show clock
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Number of live timers
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    fn run(&mut self, action: Action) {
        match action {
            Action::Settle { target } => {
                if !self.deck.settle(target) {
                    tracing::debug!(%target, "Screen not present, nothing to activate");
                    return;
                }
                if let Some(rule) = self.config.navigation.auto_from(target).copied() {
                    let id = self.scheduler.schedule_after(
                        rule.after(),
                        Action::AutoAdvance {
                            from: rule.from,
                            to: rule.to,
                        },
                    );
                    self.transition_tasks.push(id);
                }
            }
            Action::AutoAdvance { from, to } => {
                if self.deck.active() == Some(from) {
                    self.show_screen(to);
                } else {
                    tracing::debug!(%from, %to, "Auto-advance skipped, screen changed");
                }
            }
            Action::StartGifs { screen } => {
                let display = self.config.timings.gif_display();
                self.animator.start(screen, display, &mut self.scheduler);
            }
            Action::Gif(cue) => {
                let half_fade = self.config.timings.gif_half_fade();
                self.animator.handle(cue, half_fade, &mut self.scheduler);
            }
            Action::Unlock => {
                if self.deck.active() == Some(ScreenId::UNLOCK) {
                    self.show_screen(ScreenId::REVEAL);
                } else {
                    tracing::debug!("Unlock transition skipped, screen changed");
                }
            }
            Action::ClearSuccessHint { attempt } => self.gate.clear_success_hint(attempt),
        }
    }

    /// A memory slot's photo failed to load.
    pub fn report_photo_failed(&mut self, slot: usize) {
        self.heart.mark_failed(slot);
    }

    /// A collage photo failed to load.
    pub fn report_collage_failed(&mut self, position: usize) {
        self.collage.mark_failed(position);
    }

    /// A GIF failed to load; restart that screen's session without it.
    pub fn report_gif_failed(&mut self, screen: ScreenId, index: usize) {
        if self.animator.mark_failed(screen, index) {
            let display = self.config.timings.gif_display();
            self.animator.start(screen, display, &mut self.scheduler);
        }
    }

    /// The song failed to load.
    pub fn report_audio_failed(&mut self) {
        self.audio.failed();
    }

    /// Play/pause control. Returns the new state for the element to apply.
    pub fn toggle_playback(&mut self) -> PlaybackState {
        self.audio.toggle()
    }

    pub fn audio_time_update(&mut self, current: f64, duration: f64) {
        self.audio.time_update(current, duration);
    }

    pub fn audio_ended(&mut self) {
        self.audio.ended();
    }

    pub fn config(&self) -> &ShowConfig {
        &self.config
    }

    pub fn deck(&self) -> &ScreenDeck {
        &self.deck
    }

    pub fn animator(&self) -> &GifAnimator {
        &self.animator
    }

    pub fn gate(&self) -> &UnlockGate {
        &self.gate
    }

    pub fn audio(&self) -> &AudioPlayer {
        &self.audio
    }

    pub fn heart(&self) -> &HeartLayout {
        &self.heart
    }

    pub fn collage(&self) -> &Collage {
        &self.collage
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::assets::AssumeAvailable;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn boot() -> Show {
        let mut rng = StdRng::seed_from_u64(0);
        Show::boot(ShowConfig::default(), &AssumeAvailable, &mut rng)
    }

    #[test]
    fn boot_starts_gifs_on_unlock_screen() {
        let mut show = boot();
        assert_eq!(show.deck().active(), Some(ScreenId::UNLOCK));
        show.advance_to(ms(99));
        assert!(show.animator().session(ScreenId::UNLOCK).is_none());
        show.advance_to(ms(100));
        assert!(show.animator().session(ScreenId::UNLOCK).is_some());
        assert_eq!(show.animator().active_count(ScreenId::UNLOCK), 1);
    }

    #[test]
    fn boot_without_active_screen_fades_in() {
        let mut rng = StdRng::seed_from_u64(0);
        let deck = ScreenDeck::new(ScreenId::all());
        let mut show =
            Show::with_deck(ShowConfig::default(), deck, &AssumeAvailable, &mut rng);
        assert_eq!(show.deck().active(), None);
        show.advance_to(ms(400));
        assert_eq!(show.deck().active(), Some(ScreenId::UNLOCK));
        assert!(show.animator().session(ScreenId::UNLOCK).is_none());
        show.advance_to(ms(500));
        assert!(show.animator().session(ScreenId::UNLOCK).is_some());
    }

    #[test]
    fn transition_stops_other_sessions() {
        let mut show = boot();
        show.advance_to(ms(600));
        show.show_screen(ScreenId::SONG);
        assert!(show.animator().live_screens().is_empty());
        assert_eq!(show.animator().active_count(ScreenId::UNLOCK), 0);

        show.advance_to(ms(1100));
        assert_eq!(show.deck().active(), Some(ScreenId::SONG));
        assert_eq!(show.animator().live_screens(), vec![ScreenId::SONG]);
    }

    #[test]
    fn rapid_transitions_settle_on_last() {
        let mut show = boot();
        show.advance_to(ms(500));
        show.show_screen(ScreenId::MEMORIES);
        show.advance_to(ms(600));
        show.show_screen(ScreenId::FINALE);
        show.advance_to(ms(5000));
        assert_eq!(show.deck().active(), Some(ScreenId::FINALE));
        assert_eq!(show.deck().active_count(), 1);
    }

    #[test]
    fn link_follows_configured_navigation() {
        let mut config = ShowConfig::default();
        config.navigation.add_link("3:4".parse().unwrap());
        let mut rng = StdRng::seed_from_u64(0);
        let mut show = Show::boot(config, &AssumeAvailable, &mut rng);

        show.advance_to(ms(500));
        assert!(!show.follow_link());
        show.show_screen(ScreenId::MEMORIES);
        show.advance_to(ms(1000));
        assert_eq!(show.link_target(ScreenId::MEMORIES), Some(ScreenId::SONG));
        assert!(show.follow_link());
        show.advance_to(ms(1500));
        assert_eq!(show.deck().active(), Some(ScreenId::SONG));
    }

    #[test]
    fn navigating_away_cancels_auto_advance() {
        let mut show = boot();
        show.advance_to(ms(500));
        show.show_screen(ScreenId::REVEAL);
        show.advance_to(ms(1000));
        assert_eq!(show.deck().active(), Some(ScreenId::REVEAL));

        show.show_screen(ScreenId::FINALE);
        show.advance_to(ms(10_000));
        assert_eq!(show.deck().active(), Some(ScreenId::FINALE));
    }
}
