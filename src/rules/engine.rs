//! The rule engine: legality, effect resolution, turn advance,
//! termination.
//!
//! `GameEngine` exclusively owns the table state and the RNG. A command
//! (`play_card` or `draw_card`) validates against the current turn and
//! hand, then mutates deck, hands, discard, and turn state atomically and
//! runs to completion — including opponent auto-selection and card theft
//! — before the caller sees a result. There is no externally visible
//! intermediate state.
//!
//! The engine is single-threaded and does no I/O. Callers exposing it to
//! concurrent sessions must serialize commands per game instance.

use im::Vector;
use smallvec::SmallVec;

use crate::cards::{CardKind, Category, Deck, DiscardPile, Hand};
use crate::core::{ConfigError, DrawError, GameConfig, GameRng, PlayError, PlayerId, PlayerMap};
use crate::snapshot::Snapshot;

use super::action::{Action, Effect};
use super::event::GameEvent;
use super::state::{GameState, GameStatus, SeatState, TurnState};

/// The rule engine for one table.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    rng: GameRng,
    status: GameStatus,
    events: Vector<GameEvent>,
}

impl GameEngine {
    /// Validate the configuration, deal a fresh game, and return the
    /// engine. All randomness derives from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = GameRng::new(seed);
        let state = Self::deal(&config, &mut rng);
        Ok(Self {
            config,
            state,
            rng,
            status: GameStatus::InProgress,
            events: Vector::new(),
        })
    }

    /// Rebuild an engine from a snapshot, e.g. to resume a suspended
    /// session or replay from a checkpoint.
    ///
    /// The restored engine continues the captured RNG stream, so a
    /// snapshot plus the original command sequence reproduces the
    /// original game. The event history starts empty.
    pub fn from_snapshot(config: GameConfig, snapshot: &Snapshot) -> Result<Self, ConfigError> {
        config.validate()?;
        if snapshot.seats.len() != config.num_players as usize {
            return Err(ConfigError::SeatMismatch {
                snapshot_seats: snapshot.seats.len(),
                config_seats: config.num_players as usize,
            });
        }

        let seats = PlayerMap::new(snapshot.seats.len(), |p| snapshot.seats[p.index()].clone());
        Ok(Self {
            config,
            state: GameState {
                deck: Deck::from(snapshot.deck.clone()),
                seats,
                turn: snapshot.turn,
                discard: snapshot.discard.iter().copied().collect(),
                total_cards: snapshot.total_cards,
            },
            rng: GameRng::from_state(&snapshot.rng),
            status: snapshot.status,
            events: Vector::new(),
        })
    }

    /// Redeal from the held configuration, continuing the RNG stream.
    pub fn reset(&mut self) {
        self.state = Self::deal(&self.config, &mut self.rng);
        self.status = GameStatus::InProgress;
        self.events.clear();
    }

    /// Redeal from the held configuration with a fresh seed.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.rng = GameRng::new(seed);
        self.reset();
    }

    /// Clone this engine with a forked RNG, for simulated playouts.
    ///
    /// The fork's future randomness diverges deterministically from the
    /// original's; replaying the same commands on both gives the original
    /// and the branch independent futures from a shared past.
    #[must_use]
    pub fn fork(&mut self) -> GameEngine {
        GameEngine {
            config: self.config.clone(),
            state: self.state.clone(),
            rng: self.rng.fork(),
            status: self.status,
            events: self.events.clone(),
        }
    }

    fn deal(config: &GameConfig, rng: &mut GameRng) -> GameState {
        // Combine every deck-resident kind and shuffle. Hazards and the
        // starting counter bonus never enter this pool.
        let mut deck = Deck::new();
        deck.extend_with(CardKind::Counter, config.num_counter_cards);
        deck.extend_with(CardKind::Attack, config.num_attack_cards);
        deck.extend_with(CardKind::Skip, config.num_skip_cards);
        deck.extend_with(CardKind::Favor, config.num_favor_cards);
        deck.extend_with(CardKind::Shuffle, config.num_shuffle_cards);
        for (kind, &count) in CardKind::CATS.iter().zip(config.num_cat_cards.iter()) {
            deck.extend_with(*kind, count);
        }
        deck.shuffle(rng);

        let player_count = config.num_players as usize;
        let mut seats: PlayerMap<SeatState> = PlayerMap::with_default(player_count);
        for seat in PlayerId::all(player_count) {
            for _ in 0..config.num_cards_in_starting_hand {
                let kind = deck
                    .draw()
                    .expect("validated config covers every starting hand");
                seats[seat].hand.add(kind);
            }
            seats[seat]
                .hand
                .add_n(CardKind::Counter, config.num_counter_cards_in_starting_hand);
        }

        // One hazard fewer than there are seats, each at an
        // independently drawn position.
        for _ in 0..player_count - 1 {
            deck.insert_at_random(CardKind::Hazard, rng);
        }

        let mut state = GameState {
            deck,
            seats,
            turn: TurnState {
                current: PlayerId::new(0),
                direction: config.direction,
                pending_extra_turns: 0,
            },
            discard: DiscardPile::new(),
            total_cards: 0,
        };
        state.total_cards = state.count_cards();
        state
    }

    // === Queries ===

    /// The configuration this table was dealt from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.state.player_count()
    }

    /// The seat currently to act.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.turn.current
    }

    /// A seat's hand. Eliminated seats keep their remaining cards.
    #[must_use]
    pub fn hand_of(&self, seat: PlayerId) -> &Hand {
        &self.state.seats[seat].hand
    }

    /// A seat's full state.
    #[must_use]
    pub fn seat(&self, seat: PlayerId) -> &SeatState {
        &self.state.seats[seat]
    }

    /// True once one seat remains.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// The winning seat, once decided.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.status.winner()
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Cards remaining in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.state.deck.len()
    }

    /// The most recently discarded kind.
    #[must_use]
    pub fn last_played(&self) -> Option<CardKind> {
        self.state.discard.last()
    }

    /// Turn-ending actions still owed under the active attack chain.
    #[must_use]
    pub fn pending_extra_turns(&self) -> u32 {
        self.state.turn.pending_extra_turns
    }

    /// Card conservation baseline: deck + discard + all hands never
    /// deviates from this after the deal.
    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.state.total_cards
    }

    /// The event history since the last deal (or drain).
    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.events
    }

    /// Drain the event history.
    pub fn take_events(&mut self) -> Vector<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// A serializable projection of the full table.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            deck: self.state.deck.as_slice().to_vec(),
            seats: self.state.seats.iter().map(|(_, s)| s.clone()).collect(),
            discard: self.state.discard.iter().collect(),
            turn: self.state.turn,
            status: self.status,
            rng: self.rng.state(),
            total_cards: self.state.total_cards,
        }
    }

    /// The kinds the current player may legally play right now.
    ///
    /// Counter never appears (it is only auto-consumed on a hazard
    /// draw); targeted kinds require at least one live opponent holding
    /// cards; cat kinds additionally require a pair in hand.
    #[must_use]
    pub fn legal_cards(&self) -> SmallVec<[CardKind; 10]> {
        let mut legal = SmallVec::new();
        if self.status.is_over() {
            return legal;
        }

        let seat = self.state.turn.current;
        let hand = &self.state.seats[seat].hand;
        let has_eligible = !self.eligible_opponents(seat).is_empty();

        for kind in CardKind::HELD {
            let held = hand.count(kind);
            if held == 0 {
                continue;
            }
            let playable = match kind.category() {
                Category::Hazard | Category::Counter => false,
                Category::ForcesTurnEnd | Category::AlwaysPlayable => true,
                Category::NeedsOpponentWithCards => has_eligible,
                Category::NeedsPairAndOpponent => held >= 2 && has_eligible,
            };
            if playable {
                legal.push(kind);
            }
        }
        legal
    }

    /// Every command the current player may submit, targeted plays
    /// expanded per eligible opponent, plus the always-available draw.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.status.is_over() {
            return actions;
        }

        for kind in self.legal_cards() {
            if kind.is_targeted() {
                for target in self.eligible_opponents(self.state.turn.current) {
                    actions.push(Action::Play {
                        kind,
                        target: Some(target),
                    });
                }
            } else {
                actions.push(Action::Play { kind, target: None });
            }
        }
        actions.push(Action::Draw);
        actions
    }

    // === Commands ===

    /// Play a card from the current player's hand.
    ///
    /// `target` is meaningful only for Favor and cat pairs; `None` lets
    /// the engine pick an eligible opponent uniformly at random. On any
    /// rejection the state is untouched and no turn is consumed.
    pub fn play_card(
        &mut self,
        kind: CardKind,
        target: Option<PlayerId>,
    ) -> Result<Effect, PlayError> {
        if self.status.is_over() {
            return Err(PlayError::GameOver);
        }
        if !self.legal_cards().contains(&kind) {
            return Err(PlayError::IllegalCard(kind));
        }

        let seat = self.state.turn.current;

        let effect = match kind {
            CardKind::Attack => {
                self.discard_from_hand(seat, kind, 1);
                self.record(GameEvent::CardPlayed {
                    seat,
                    kind,
                    target: None,
                });
                self.state.turn.pending_extra_turns += 2;
                // The attacker's own advance never consumes a credit.
                let victim = self.advance(true);
                Effect::Attacked {
                    victim,
                    pending_extra_turns: self.state.turn.pending_extra_turns,
                }
            }
            CardKind::Skip => {
                self.discard_from_hand(seat, kind, 1);
                self.record(GameEvent::CardPlayed {
                    seat,
                    kind,
                    target: None,
                });
                let next_player = self.advance(false);
                Effect::Skipped { next_player }
            }
            CardKind::Shuffle => {
                self.discard_from_hand(seat, kind, 1);
                self.record(GameEvent::CardPlayed {
                    seat,
                    kind,
                    target: None,
                });
                self.state.deck.shuffle(&mut self.rng);
                self.record(GameEvent::DeckShuffled { seat });
                Effect::DeckShuffled
            }
            CardKind::Favor => {
                // Resolve the target before touching any state so a bad
                // target rejects cleanly.
                let victim = self.resolve_target(seat, target)?;
                self.discard_from_hand(seat, kind, 1);
                self.record(GameEvent::CardPlayed {
                    seat,
                    kind,
                    target: Some(victim),
                });
                let stolen = self.steal_card(seat, victim);
                Effect::Stole {
                    target: victim,
                    stolen,
                }
            }
            CardKind::Cat1
            | CardKind::Cat2
            | CardKind::Cat3
            | CardKind::Cat4
            | CardKind::Cat5 => {
                let victim = self.resolve_target(seat, target)?;
                // A pair: both copies leave the hand.
                self.discard_from_hand(seat, kind, 2);
                self.record(GameEvent::CardPlayed {
                    seat,
                    kind,
                    target: Some(victim),
                });
                let stolen = self.steal_card(seat, victim);
                Effect::Stole {
                    target: victim,
                    stolen,
                }
            }
            CardKind::Hazard | CardKind::Counter => {
                unreachable!("{kind} is never in the legal set")
            }
        };

        debug_assert_eq!(self.state.count_cards(), self.state.total_cards);
        Ok(effect)
    }

    /// Draw the top card, ending the current player's turn one way or
    /// another.
    ///
    /// A hazard draw consumes a held counter (reinserting the hazard at
    /// a random position) or eliminates the drawer. Anything else goes
    /// into the hand. An empty deck is an invariant violation surfaced
    /// as `DrawError::EmptyDeck` with the state untouched.
    pub fn draw_card(&mut self) -> Result<Effect, DrawError> {
        if self.status.is_over() {
            return Err(DrawError::GameOver);
        }

        let seat = self.state.turn.current;
        let kind = self.state.deck.draw().ok_or(DrawError::EmptyDeck)?;
        self.record(GameEvent::CardDrawn { seat, kind });

        let effect = if kind == CardKind::Hazard {
            if self.state.seats[seat].hand.count(CardKind::Counter) > 0 {
                self.state.seats[seat].hand.remove(CardKind::Counter, 1);
                self.state.discard.put(CardKind::Counter);
                self.state
                    .deck
                    .insert_at_random(CardKind::Hazard, &mut self.rng);
                self.record(GameEvent::HazardCountered { seat });
                let next_player = self.advance(false);
                Effect::HazardCountered { next_player }
            } else {
                self.state.seats[seat].eliminated = true;
                self.state.discard.put(CardKind::Hazard);
                // Any outstanding attack debt dies with its victim.
                self.state.turn.pending_extra_turns = 0;
                self.record(GameEvent::PlayerEliminated { seat });

                if let Some(winner) = self.state.sole_survivor() {
                    self.status = GameStatus::Over { winner };
                    self.record(GameEvent::GameOver { winner });
                    Effect::Eliminated {
                        seat,
                        winner: Some(winner),
                    }
                } else {
                    self.advance(false);
                    Effect::Eliminated { seat, winner: None }
                }
            }
        } else {
            self.state.seats[seat].hand.add(kind);
            let next_player = self.advance(false);
            Effect::Drew { kind, next_player }
        };

        debug_assert_eq!(self.state.count_cards(), self.state.total_cards);
        Ok(effect)
    }

    // === Resolution helpers ===

    /// Seats that can be stolen from: not the actor, live, holding cards.
    fn eligible_opponents(&self, seat: PlayerId) -> SmallVec<[PlayerId; 8]> {
        self.state
            .seats
            .iter()
            .filter(|&(p, s)| p != seat && !s.eliminated && !s.hand.is_empty())
            .map(|(p, _)| p)
            .collect()
    }

    /// Validate an explicit target, or auto-pick one uniformly.
    fn resolve_target(
        &mut self,
        seat: PlayerId,
        target: Option<PlayerId>,
    ) -> Result<PlayerId, PlayError> {
        let eligible = self.eligible_opponents(seat);
        match target {
            Some(t) if eligible.contains(&t) => Ok(t),
            Some(t) => Err(PlayError::InvalidTarget(t)),
            None => Ok(*self
                .rng
                .choose(&eligible)
                .expect("legality requires an eligible opponent")),
        }
    }

    /// Move one card from `victim` to `thief`, chosen uniformly over the
    /// victim's physical cards: kind `k` with probability
    /// `hand[k] / total`, not uniformly over kinds.
    fn steal_card(&mut self, thief: PlayerId, victim: PlayerId) -> CardKind {
        let pool: SmallVec<[(CardKind, u32); 10]> =
            self.state.seats[victim].hand.counts().collect();
        let weights: SmallVec<[u32; 10]> = pool.iter().map(|&(_, n)| n).collect();
        let index = self
            .rng
            .weighted_index(&weights)
            .expect("eligible opponents hold at least one card");
        let kind = pool[index].0;

        self.state.seats[victim].hand.remove(kind, 1);
        self.state.seats[thief].hand.add(kind);
        self.record(GameEvent::CardStolen {
            from: victim,
            to: thief,
            kind,
        });
        kind
    }

    /// Remove `n` copies of `kind` from a hand into the discard pile.
    fn discard_from_hand(&mut self, seat: PlayerId, kind: CardKind, n: u32) {
        self.state.seats[seat].hand.remove(kind, n);
        for _ in 0..n {
            self.state.discard.put(kind);
        }
    }

    /// Advance the turn, recording the hand-off when the seat changes.
    fn advance(&mut self, after_attack: bool) -> PlayerId {
        let from = self.state.turn.current;
        let to = self.state.advance_turn(after_attack);
        if from != to {
            self.record(GameEvent::TurnPassed { from, to });
        }
        to
    }

    fn record(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }
}
