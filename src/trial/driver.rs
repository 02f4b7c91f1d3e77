//! Randomized trial driver.
//!
//! A run has two phases:
//! - Phase 1 (fresh games): every trial sets up a new random game, applies
//!   the card effect to a copy and checks the battery against the
//!   untouched pre-state.
//! - Phase 2 (continuing game): starting from the last phase 1 result, each
//!   trial's post-state becomes the next trial's pre-state. Trials whose
//!   battery is not ready for the state are skipped.
//!
//! Every trial with a failed check dumps both snapshots to the diagnostic
//! stream. The run always ends with the tally line.

use std::io::Write;

use tracing::{debug, info, warn};

use super::accounting::{TrialAccounting, TrialOutcome};
use super::battery::PropertyBattery;
use super::random::{randomize_players, random_kingdom};
use crate::core::{GameRng, GameSnapshot, PlayerId, TrialConfig, MAX_PLAYERS, MIN_PLAYERS};
use crate::engine::GameEngine;
use crate::report::{write_trial_dump, NamedProperty, Reporter};

/// Runs one card's battery against an engine.
pub struct TrialDriver<E: GameEngine, O: Write, D: Write> {
    engine: E,
    battery: Box<dyn PropertyBattery>,
    config: TrialConfig,
    reporter: Reporter<O, D>,
    rng: GameRng,
    totals: TrialAccounting,
}

impl<E: GameEngine, O: Write, D: Write> TrialDriver<E, O, D> {
    /// Create a driver. Without a configured seed one is drawn from the OS
    /// and logged.
    pub fn new(engine: E, battery: Box<dyn PropertyBattery>, config: TrialConfig, reporter: Reporter<O, D>) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = rng.seed(), card = %battery.card(), "trial driver seeded");

        Self {
            engine,
            battery,
            config,
            reporter,
            rng,
            totals: TrialAccounting::new(),
        }
    }

    /// Seed that replays this run.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn totals(&self) -> &TrialAccounting {
        &self.totals
    }

    pub fn reporter(&self) -> &Reporter<O, D> {
        &self.reporter
    }

    pub fn into_reporter(self) -> Reporter<O, D> {
        self.reporter
    }

    /// Run both phases and write the tally.
    pub fn run(&mut self) -> TrialAccounting {
        let card = self.battery.card();
        let subject = self.battery.subject();
        let seed = self.seed();
        self.reporter.line(&format!("Card: {card}\nFunction: {subject}\nSeed: {seed}\n"));

        let fresh = self.config.fresh_trials;
        self.reporter.line(&format!(
            "** PHASE 1 :: {fresh} TESTS :: Initializing a new game for each {card} card test..."
        ));
        let mut last = None;
        for _ in 0..fresh {
            if let Some(post) = self.fresh_trial() {
                last = Some(post);
            }
        }

        let chained = self.config.chained_trials;
        self.reporter
            .line(&format!("** PHASE 2 :: {chained} TESTS :: Testing {card} card on continuous game..."));
        if chained > 0 {
            match last.or_else(|| self.setup_game()) {
                Some(mut state) => {
                    for _ in 0..chained {
                        self.chained_trial(&mut state);
                    }
                }
                None => warn!("no game to continue, phase 2 skipped"),
            }
        }

        let totals = self.totals;
        info!(
            run = totals.trials_run,
            skipped = totals.trials_skipped,
            setup_failures = totals.setup_failures,
            "trials finished"
        );
        self.reporter.line(&format!("\n{totals}"));
        self.reporter.flush();
        totals
    }

    /// Set up a random game: random player count, kingdom and active
    /// player, randomized hands and decks.
    ///
    /// Returns `None` (and counts a setup failure) if the engine rejects
    /// the configuration.
    pub fn setup_game(&mut self) -> Option<GameSnapshot> {
        let player_count = self.rng.gen_inclusive(MIN_PLAYERS, MAX_PLAYERS);
        let mut kingdom = random_kingdom(&mut self.rng);
        kingdom.require(self.battery.required_cards());
        let seed = self.rng.next_seed();

        let mut state = match self.engine.initialize_game(player_count, &kingdom, seed) {
            Ok(state) => state,
            Err(err) => {
                warn!(%err, player_count, seed, "game set-up failed");
                self.totals.setup_failed();
                return None;
            }
        };

        randomize_players(&mut self.rng, &mut state);
        state.whose_turn = self.random_player(player_count);
        Some(state)
    }

    /// Phase 1 trial. Returns the post-state, or `None` if set-up failed.
    pub fn fresh_trial(&mut self) -> Option<GameSnapshot> {
        let pre = self.setup_game()?;
        let mut post = pre.clone();
        let player = pre.whose_turn;
        self.check(&pre, &mut post, player);
        Some(post)
    }

    /// Phase 2 trial: pick a new active player and continue from `state`.
    ///
    /// Returns `None` when the battery is not ready and the trial is
    /// skipped.
    pub fn chained_trial(&mut self, state: &mut GameSnapshot) -> Option<TrialOutcome> {
        state.whose_turn = self.random_player(state.player_count());
        let pre = state.clone();
        let player = pre.whose_turn;

        if !self.battery.ready(&pre, player) {
            debug!(%player, "precondition not met, trial skipped");
            self.totals.skip();
            return None;
        }
        Some(self.check(&pre, state, player))
    }

    fn random_player(&mut self, player_count: usize) -> PlayerId {
        let index = self.rng.gen_inclusive(0, player_count.saturating_sub(1));
        PlayerId::new(index as u8)
    }

    /// Apply the effect to `post` and record the battery.
    fn check(&mut self, pre: &GameSnapshot, post: &mut GameSnapshot, player: PlayerId) -> TrialOutcome {
        let card = self.battery.card();
        let mut outcome = TrialOutcome::default();

        match self.engine.card_effect(card, player, post) {
            Ok(()) => {
                for property in self.battery.properties(pre, post, player) {
                    outcome.record(self.reporter.record(&property));
                }
            }
            Err(err) => {
                warn!(%err, %card, %player, "card effect failed");
                let property = NamedProperty::equal(
                    self.battery.subject(),
                    format!("{card} effect should resolve"),
                    true,
                    false,
                );
                outcome.record(self.reporter.record(&property));
            }
        }

        debug!(%player, passed = outcome.passed, failed = outcome.failed, "trial checked");
        if !outcome.all_passed() {
            self.dump(pre, post);
        }
        self.totals.add(outcome);
        outcome
    }

    fn dump(&mut self, pre: &GameSnapshot, post: &GameSnapshot) {
        if let Err(err) = write_trial_dump(self.reporter.diag_mut(), pre, post) {
            warn!(%err, "failed to dump trial state");
        }
    }
}
