//! Core simulation engine for the meadow ecosystem.
//!
//! A population of creatures forages for regenerating tulips, satiates
//! hunger, breeds, and dies inside a bounded square arena with a cyclic
//! day clock. Rendering and input layers are external consumers: they read
//! the entity collections through the accessors on [`Ecosystem`] and mutate
//! only through its action API.
//!
//! One call to [`Ecosystem::step`] advances the world by
//! `base_step * speed` simulated time units. Per-creature transitions are
//! computed against the start-of-tick food snapshot and committed at tick
//! end; simultaneous claims on the same tulip resolve to the first claimant
//! in arena insertion order.

use rand::{rngs::SmallRng, Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, Key, SlotMap};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use thiserror::Error;

new_key_type! {
    /// Stable generational handle for creatures.
    pub struct CreatureId;
}

new_key_type! {
    /// Stable generational handle for food items.
    pub struct FoodId;
}

/// Upper bound of the heritable attribute scale.
pub const ATTRIBUTE_MAX: f32 = 100.0;

/// Length of one time-of-day slot in simulated time units.
const DAY_SLOT_LENGTH: f64 = 1000.0;

/// Idle animation phase advance per simulated time unit.
const IDLE_PHASE_RATE: f64 = 0.1;

/// Fixed tulip bed used by [`Ecosystem::seed_food`]: a 6x5 lattice inset
/// from the walls, listed row by row.
pub const SEED_FOOD_POSITIONS: [(f32, f32); 30] = [
    (-40.0, -36.0),
    (-24.0, -36.0),
    (-8.0, -36.0),
    (8.0, -36.0),
    (24.0, -36.0),
    (40.0, -36.0),
    (-40.0, -18.0),
    (-24.0, -18.0),
    (-8.0, -18.0),
    (8.0, -18.0),
    (24.0, -18.0),
    (40.0, -18.0),
    (-40.0, 0.0),
    (-24.0, 0.0),
    (-8.0, 0.0),
    (8.0, 0.0),
    (24.0, 0.0),
    (40.0, 0.0),
    (-40.0, 18.0),
    (-24.0, 18.0),
    (-8.0, 18.0),
    (8.0, 18.0),
    (24.0, 18.0),
    (40.0, 18.0),
    (-40.0, 36.0),
    (-24.0, 36.0),
    (-8.0, 36.0),
    (8.0, 36.0),
    (24.0, 36.0),
    (40.0, 36.0),
];

/// Real-valued 3-vector used for position, rotation, and scale.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// Construct a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Vector with all components set to `value`.
    #[must_use]
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }
}

/// Time-of-day slot derived from the simulation clock.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Derive the slot from accumulated simulated time.
    #[must_use]
    pub fn from_time(time: f64) -> Self {
        match ((time / DAY_SLOT_LENGTH).floor() as i64).rem_euclid(4) {
            0 => Self::Morning,
            1 => Self::Afternoon,
            2 => Self::Evening,
            _ => Self::Night,
        }
    }

    /// Fixed light level for this slot.
    #[must_use]
    pub const fn light_level(self) -> f32 {
        match self {
            Self::Morning => 80.0,
            Self::Afternoon => 100.0,
            Self::Evening => 60.0,
            Self::Night => 20.0,
        }
    }
}

/// Cosmetic weather descriptor; no simulation rule mutates it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Weather {
    #[default]
    Clear,
    Cloudy,
    Rain,
}

/// Cosmetic season descriptor; no simulation rule mutates it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// Process-wide environment record.
///
/// `time_of_day` and `light_level` are pure functions of the clock and are
/// re-derived every tick. The remaining fields are carried for the view
/// layer and left to external tooling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Environment {
    pub temperature: f32,
    pub humidity: f32,
    pub light_level: f32,
    pub time_of_day: TimeOfDay,
    pub weather: Weather,
    pub season: Season,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            temperature: 22.0,
            humidity: 0.5,
            light_level: TimeOfDay::Morning.light_level(),
            time_of_day: TimeOfDay::Morning,
            weather: Weather::Clear,
            season: Season::Spring,
        }
    }
}

/// Heritable creature attributes, fixed at birth.
///
/// `intelligence` is inherited and stored but consumed by no decision rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Attributes {
    pub vision: f32,
    pub speed: f32,
    pub intelligence: f32,
}

impl Attributes {
    /// Construct attributes, clamping each value to `[0, ATTRIBUTE_MAX]`.
    #[must_use]
    pub fn clamped(vision: f32, speed: f32, intelligence: f32) -> Self {
        Self {
            vision: vision.clamp(0.0, ATTRIBUTE_MAX),
            speed: speed.clamp(0.0, ATTRIBUTE_MAX),
            intelligence: intelligence.clamp(0.0, ATTRIBUTE_MAX),
        }
    }

    /// Sample uniformly random starter attributes.
    #[must_use]
    pub fn random(rng: &mut dyn RngCore) -> Self {
        Self {
            vision: rng.random_range(0.0..=ATTRIBUTE_MAX),
            speed: rng.random_range(0.0..=ATTRIBUTE_MAX),
            intelligence: rng.random_range(0.0..=ATTRIBUTE_MAX),
        }
    }

    /// Inherit with a bounded random perturbation of `span` per attribute,
    /// clamped back to the attribute scale.
    #[must_use]
    pub fn inherit(self, rng: &mut dyn RngCore, span: f32) -> Self {
        if span <= 0.0 {
            return self;
        }
        Self::clamped(
            self.vision + rng.random_range(-span..=span),
            self.speed + rng.random_range(-span..=span),
            self.intelligence + rng.random_range(-span..=span),
        )
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            vision: 50.0,
            speed: 50.0,
            intelligence: 50.0,
        }
    }
}

/// Behavioral state of a creature.
///
/// `Searching` is declared but never entered by any rule; it is retained so
/// snapshots produced by older tooling keep deserializing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CreatureState {
    #[default]
    Hungry,
    Full,
    Searching,
    Eating,
    Breeding,
    Dead,
}

/// One simulated agent.
///
/// Dead creatures stay in the arena with `dead = true` so handles remain
/// stable for the view layer; every simulation rule skips them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Creature {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    pub attributes: Attributes,
    /// Satiety scalar in `[0, 100]`; 0 triggers death, feeding resets to 100.
    pub hunger: f32,
    /// Present for the view layer; no rule currently decrements it.
    pub health: f32,
    pub dead: bool,
    pub state: CreatureState,
    /// Simulated time of the last state transition.
    pub state_changed_at: f64,
    pub target_position: Option<Vec3>,
    pub target_food: Option<FoodId>,
    pub moving: bool,
    /// Cosmetic idle animation phase in `[0, 1)`, consumed by the view layer.
    pub idle_phase: f32,
    pub last_bred_at: f64,
    pub breeding_cooldown: f64,
    /// Partner recorded on entry to the breeding state so completion never
    /// resolves the wrong creature by proximity.
    pub breeding_partner: Option<CreatureId>,
}

impl Creature {
    /// Half-extent of the vision box given the configured maximum range.
    #[must_use]
    pub fn vision_range(&self, range_max: f32) -> f32 {
        range_max * (self.attributes.vision / ATTRIBUTE_MAX)
    }
}

/// One consumable tulip. Never moves and is never removed by the
/// simulation; consumption only toggles availability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Food {
    pub position: Vec3,
    pub available: bool,
    pub nutrition: f32,
    pub respawn_delay: f64,
    /// Simulated time of the last consumption; meaningless while available.
    pub last_eaten: f64,
}

impl Food {
    /// A fresh, available tulip at `position`.
    #[must_use]
    pub const fn tulip(position: Vec3, nutrition: f32, respawn_delay: f64) -> Self {
        Self {
            position,
            available: true,
            nutrition,
            respawn_delay,
            last_eaten: 0.0,
        }
    }
}

/// Dense arena addressed by generational handles.
///
/// Rows are kept in insertion order; that order doubles as the
/// deterministic arbitration order for food claims and breeding pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityArena<K: Key, T> {
    slots: SlotMap<K, usize>,
    handles: Vec<K>,
    rows: Vec<T>,
}

impl<K: Key, T> Default for EntityArena<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key, T> EntityArena<K, T> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            handles: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Number of stored entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns true if `id` refers to a live row.
    #[must_use]
    pub fn contains(&self, id: K) -> bool {
        self.slots.contains_key(id)
    }

    /// Dense index of `id`, if present.
    #[must_use]
    pub fn index_of(&self, id: K) -> Option<usize> {
        self.slots.get(id).copied()
    }

    /// Insert a new row and return its handle.
    pub fn insert(&mut self, row: T) -> K {
        let index = self.rows.len();
        self.rows.push(row);
        let id = self.slots.insert(index);
        self.handles.push(id);
        id
    }

    /// Remove `id`, returning its row if it was present.
    pub fn remove(&mut self, id: K) -> Option<T> {
        let index = self.slots.remove(id)?;
        let removed = self.rows.swap_remove(index);
        let removed_handle = self.handles.swap_remove(index);
        debug_assert_eq!(removed_handle, id);
        if index < self.handles.len() {
            let moved = self.handles[index];
            if let Some(slot) = self.slots.get_mut(moved) {
                *slot = index;
            }
        }
        Some(removed)
    }

    /// Borrow the row for `id`.
    #[must_use]
    pub fn get(&self, id: K) -> Option<&T> {
        let index = *self.slots.get(id)?;
        self.rows.get(index)
    }

    /// Mutably borrow the row for `id`.
    #[must_use]
    pub fn get_mut(&mut self, id: K) -> Option<&mut T> {
        let index = *self.slots.get(id)?;
        self.rows.get_mut(index)
    }

    /// Handles in insertion order.
    #[must_use]
    pub fn handles(&self) -> &[K] {
        &self.handles
    }

    /// Rows in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Iterate over `(handle, row)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> {
        self.handles.iter().copied().zip(self.rows.iter())
    }

    fn row_mut(&mut self, index: usize) -> &mut T {
        &mut self.rows[index]
    }
}

impl<K: Key, T: Clone> EntityArena<K, T> {
    /// Copy of the row for `id`.
    #[must_use]
    pub fn snapshot(&self, id: K) -> Option<T> {
        self.get(id).cloned()
    }
}

/// Errors raised when validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Indicates a configuration value outside its documented range.
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Static configuration for a meadow world. Every tunable the behavior
/// rules consume lives here rather than in embedded literals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeadowConfig {
    /// Half-extent of the square arena; the wall boundary clamp.
    pub arena_half_extent: f32,
    /// Ground-plane height creatures sit at during normal motion.
    pub ground_offset: f32,
    /// Satiety lost per simulated time unit.
    pub hunger_decay_rate: f32,
    /// Satiety threshold separating the hungry and full base states.
    pub hunger_full_threshold: f32,
    /// Vision box half-extent at vision = 100.
    pub vision_range_max: f32,
    /// Simulated time a creature spends in the eating state.
    pub eat_duration: f64,
    /// Simulated time a breeding pair stays paired before the offspring.
    pub breeding_duration: f64,
    /// Minimum interval between successive breeding events per creature.
    pub breeding_cooldown: f64,
    /// Interval between a tulip's consumption and its return.
    pub food_respawn_delay: f64,
    /// Nutrition value assigned to seeded and spawned tulips.
    pub food_nutrition: f32,
    /// Per-tick probability of one spontaneous tulip spawn; 0 disables.
    pub food_spawn_probability: f32,
    /// Keep-away margin from the walls for spontaneous spawns.
    pub food_spawn_margin: f32,
    /// Per-tick probability a hungry creature picks a wander target.
    pub hungry_wander_probability: f32,
    /// Half-extent of the random wander offset while hungry.
    pub hungry_wander_radius: f32,
    /// Per-tick probability a full creature idles toward a new target.
    pub full_wander_probability: f32,
    /// Half-extent of the random idle offset while full.
    pub full_wander_radius: f32,
    /// Distance below which a movement target counts as reached.
    pub arrival_radius: f32,
    /// Attribute perturbation half-span applied to offspring.
    pub mutation_span: f32,
    /// Uniform scale applied to newborn creatures.
    pub offspring_scale: f32,
    /// Satiety newborns start with.
    pub offspring_hunger: f32,
    /// Position jitter around the parent at birth.
    pub birth_jitter: f32,
    /// Satiety range sampled for debug-spawned creatures.
    pub spawn_hunger_range: (f32, f32),
    /// Maximum number of tick summaries retained in memory.
    pub history_capacity: usize,
    /// Optional RNG seed for reproducible worlds.
    pub rng_seed: Option<u64>,
}

impl Default for MeadowConfig {
    fn default() -> Self {
        Self {
            arena_half_extent: 49.0,
            ground_offset: 0.5,
            hunger_decay_rate: 0.01,
            hunger_full_threshold: 50.0,
            vision_range_max: 5.0,
            eat_duration: 2_000.0,
            breeding_duration: 3_000.0,
            breeding_cooldown: 10_000.0,
            food_respawn_delay: 1_500.0,
            food_nutrition: 30.0,
            food_spawn_probability: 0.02,
            food_spawn_margin: 4.0,
            hungry_wander_probability: 0.05,
            hungry_wander_radius: 10.0,
            full_wander_probability: 0.01,
            full_wander_radius: 5.0,
            arrival_radius: 0.5,
            mutation_span: 10.0,
            offspring_scale: 0.5,
            offspring_hunger: 60.0,
            birth_jitter: 2.0,
            spawn_hunger_range: (30.0, 90.0),
            history_capacity: 256,
            rng_seed: None,
        }
    }
}

impl MeadowConfig {
    /// Alternate tuning profile observed in the earlier variant: faster
    /// hunger decay, rarer wandering, no spontaneous tulip spawning.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            hunger_decay_rate: 0.0125,
            hungry_wander_probability: 0.02,
            food_spawn_probability: 0.0,
            ..Self::default()
        }
    }

    /// Validate all tunables against their documented ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena_half_extent <= 0.0 {
            return Err(ConfigError::Invalid("arena_half_extent must be positive"));
        }
        if self.hunger_decay_rate < 0.0 {
            return Err(ConfigError::Invalid(
                "hunger_decay_rate must be non-negative",
            ));
        }
        if !(0.0..=ATTRIBUTE_MAX).contains(&self.hunger_full_threshold) {
            return Err(ConfigError::Invalid(
                "hunger_full_threshold must lie in [0, 100]",
            ));
        }
        if self.vision_range_max <= 0.0 {
            return Err(ConfigError::Invalid("vision_range_max must be positive"));
        }
        if self.eat_duration < 0.0
            || self.breeding_duration < 0.0
            || self.breeding_cooldown < 0.0
            || self.food_respawn_delay < 0.0
        {
            return Err(ConfigError::Invalid(
                "durations and cooldowns must be non-negative",
            ));
        }
        if !(0.0..=1.0).contains(&self.food_spawn_probability)
            || !(0.0..=1.0).contains(&self.hungry_wander_probability)
            || !(0.0..=1.0).contains(&self.full_wander_probability)
        {
            return Err(ConfigError::Invalid(
                "per-tick probabilities must lie in [0, 1]",
            ));
        }
        if self.food_spawn_margin < 0.0 || self.food_spawn_margin >= self.arena_half_extent {
            return Err(ConfigError::Invalid(
                "food_spawn_margin must lie in [0, arena_half_extent)",
            ));
        }
        if self.hungry_wander_radius < 0.0 || self.full_wander_radius < 0.0 {
            return Err(ConfigError::Invalid(
                "wander radii must be non-negative",
            ));
        }
        if self.arrival_radius <= 0.0 {
            return Err(ConfigError::Invalid("arrival_radius must be positive"));
        }
        if self.mutation_span < 0.0 {
            return Err(ConfigError::Invalid("mutation_span must be non-negative"));
        }
        if self.offspring_scale <= 0.0 {
            return Err(ConfigError::Invalid("offspring_scale must be positive"));
        }
        if !(0.0..=ATTRIBUTE_MAX).contains(&self.offspring_hunger) {
            return Err(ConfigError::Invalid(
                "offspring_hunger must lie in [0, 100]",
            ));
        }
        if self.birth_jitter < 0.0 {
            return Err(ConfigError::Invalid("birth_jitter must be non-negative"));
        }
        let (hunger_lo, hunger_hi) = self.spawn_hunger_range;
        if hunger_lo > hunger_hi || hunger_lo < 0.0 || hunger_hi > ATTRIBUTE_MAX {
            return Err(ConfigError::Invalid(
                "spawn_hunger_range must be an ordered subrange of [0, 100]",
            ));
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid("history_capacity must be non-zero"));
        }
        Ok(())
    }

    /// Returns the configured RNG, seeding from entropy when no seed is set.
    fn seeded_rng(&self) -> SmallRng {
        match self.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => {
                let seed: u64 = rand::random();
                SmallRng::seed_from_u64(seed)
            }
        }
    }
}

/// Number of simulation steps processed since boot.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tick(pub u64);

impl Tick {
    /// Returns the next sequential tick.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Resets the tick counter back to zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self(0)
    }
}

/// Entity currently selected by external tooling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Selection {
    Creature(CreatureId),
    Food(FoodId),
}

/// Events emitted after processing a world tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct TickEvents {
    pub tick: Tick,
    pub births: usize,
    pub deaths: usize,
    pub food_respawned: usize,
    pub food_spawned: Option<FoodId>,
}

/// Per-tick aggregate appended to the in-memory history ring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TickSummary {
    pub tick: Tick,
    pub time: f64,
    pub alive: usize,
    pub births: usize,
    pub deaths: usize,
    pub food_available: usize,
    pub average_hunger: f32,
}

/// Aggregate simulation state owned by the caller.
pub struct Ecosystem {
    config: MeadowConfig,
    tick: Tick,
    time: f64,
    paused: bool,
    speed: f64,
    rng: SmallRng,
    creatures: EntityArena<CreatureId, Creature>,
    food: EntityArena<FoodId, Food>,
    environment: Environment,
    selected: Option<Selection>,
    history: VecDeque<TickSummary>,
}

impl fmt::Debug for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ecosystem")
            .field("tick", &self.tick)
            .field("time", &self.time)
            .field("paused", &self.paused)
            .field("speed", &self.speed)
            .field("creature_count", &self.creatures.len())
            .field("food_count", &self.food.len())
            .finish()
    }
}

impl Ecosystem {
    /// Instantiate a new world using the supplied configuration.
    pub fn new(config: MeadowConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = config.seeded_rng();
        let history_capacity = config.history_capacity;
        Ok(Self {
            config,
            tick: Tick::zero(),
            time: 0.0,
            paused: false,
            speed: 1.0,
            rng,
            creatures: EntityArena::new(),
            food: EntityArena::new(),
            environment: Environment::default(),
            selected: None,
            history: VecDeque::with_capacity(history_capacity),
        })
    }

    /// Returns an immutable reference to configuration.
    #[must_use]
    pub fn config(&self) -> &MeadowConfig {
        &self.config
    }

    /// Mutable access to the configuration (for hot edits).
    #[must_use]
    pub fn config_mut(&mut self) -> &mut MeadowConfig {
        &mut self.config
    }

    /// Current simulation tick.
    #[must_use]
    pub const fn tick(&self) -> Tick {
        self.tick
    }

    /// Accumulated simulated time.
    #[must_use]
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Whether stepping is currently suppressed.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current speed multiplier on the per-tick simulated-time delta.
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Current environment record.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Entity currently selected by external tooling, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<Selection> {
        self.selected
    }

    /// Read-only access to the creature arena (dead creatures included).
    #[must_use]
    pub fn creatures(&self) -> &EntityArena<CreatureId, Creature> {
        &self.creatures
    }

    /// Read-only access to the food arena.
    #[must_use]
    pub fn food(&self) -> &EntityArena<FoodId, Food> {
        &self.food
    }

    /// Borrow one creature.
    #[must_use]
    pub fn creature(&self, id: CreatureId) -> Option<&Creature> {
        self.creatures.get(id)
    }

    /// Borrow one food item.
    #[must_use]
    pub fn food_item(&self, id: FoodId) -> Option<&Food> {
        self.food.get(id)
    }

    /// Iterate over non-dead creatures, the set the view layer displays.
    pub fn living_creatures(&self) -> impl Iterator<Item = (CreatureId, &Creature)> {
        self.creatures.iter().filter(|(_, creature)| !creature.dead)
    }

    /// Iterate over retained tick summaries, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &TickSummary> {
        self.history.iter()
    }

    /// Borrow the world RNG mutably for deterministic sampling.
    #[must_use]
    pub fn rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    /// Suppress or resume stepping. Pausing freezes all state.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Set the speed multiplier; negative values clamp to zero.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.max(0.0);
    }

    /// Record the selected entity for external tooling.
    pub fn set_selected(&mut self, selected: Option<Selection>) {
        self.selected = selected;
    }

    /// Advance the clock without simulating; ignored while paused.
    pub fn advance_clock(&mut self, delta: f64) {
        if !self.paused {
            self.time += delta;
        }
    }

    /// Apply a partial update to the environment record.
    pub fn update_environment(&mut self, apply: impl FnOnce(&mut Environment)) {
        apply(&mut self.environment);
    }

    /// Insert a fully specified creature, returning its handle.
    pub fn spawn_creature(&mut self, creature: Creature) -> CreatureId {
        self.creatures.insert(creature)
    }

    /// Spawn an adult at `position` with the given attributes and satiety.
    pub fn spawn_creature_with(
        &mut self,
        position: Vec3,
        attributes: Attributes,
        hunger: f32,
    ) -> CreatureId {
        let creature = Creature {
            position: Vec3::new(position.x, self.config.ground_offset, position.z),
            rotation: Vec3::default(),
            scale: Vec3::splat(1.0),
            attributes,
            hunger: hunger.clamp(0.0, ATTRIBUTE_MAX),
            health: 100.0,
            dead: false,
            state: CreatureState::Hungry,
            state_changed_at: self.time,
            target_position: None,
            target_food: None,
            moving: false,
            idle_phase: 0.0,
            last_bred_at: 0.0,
            breeding_cooldown: self.config.breeding_cooldown,
            breeding_partner: None,
        };
        self.creatures.insert(creature)
    }

    /// Spawn a creature with randomized starter attributes and satiety.
    pub fn spawn_random_creature(&mut self) -> CreatureId {
        let half = self.config.arena_half_extent;
        let (hunger_lo, hunger_hi) = self.config.spawn_hunger_range;
        let position = Vec3::new(
            self.rng.random_range(-half..=half),
            self.config.ground_offset,
            self.rng.random_range(-half..=half),
        );
        let attributes = Attributes::random(&mut self.rng);
        let hunger = self.rng.random_range(hunger_lo..=hunger_hi);
        self.spawn_creature_with(position, attributes, hunger)
    }

    /// Physically remove a creature (external tooling only); no-op when the
    /// handle is stale.
    pub fn remove_creature(&mut self, id: CreatureId) -> Option<Creature> {
        self.creatures.remove(id)
    }

    /// Apply a partial update to one creature; unknown ids are ignored.
    pub fn update_creature(&mut self, id: CreatureId, apply: impl FnOnce(&mut Creature)) {
        if let Some(creature) = self.creatures.get_mut(id) {
            apply(creature);
        }
    }

    /// Insert a fully specified food item, returning its handle.
    pub fn spawn_food(&mut self, item: Food) -> FoodId {
        self.food.insert(item)
    }

    /// Insert a tulip at `position` using the configured constants.
    pub fn add_food(&mut self, position: Vec3) -> FoodId {
        self.food.insert(Food::tulip(
            position,
            self.config.food_nutrition,
            self.config.food_respawn_delay,
        ))
    }

    /// Physically remove a food item (external tooling only); no-op when
    /// the handle is stale.
    pub fn remove_food(&mut self, id: FoodId) -> Option<Food> {
        self.food.remove(id)
    }

    /// Apply a partial update to one food item; unknown ids are ignored.
    pub fn update_food(&mut self, id: FoodId, apply: impl FnOnce(&mut Food)) {
        if let Some(item) = self.food.get_mut(id) {
            apply(item);
        }
    }

    /// Populate the fixed tulip bed. Returns the number of items inserted;
    /// zero when food already exists, so calling twice never duplicates.
    pub fn seed_food(&mut self) -> usize {
        if !self.food.is_empty() {
            return 0;
        }
        for &(x, z) in &SEED_FOOD_POSITIONS {
            self.add_food(Vec3::new(x, 0.0, z));
        }
        SEED_FOOD_POSITIONS.len()
    }

    /// Direct a creature toward a tulip (the view layer's click action).
    /// Silently ignored when either handle is stale, the creature is dead,
    /// or the tulip is unavailable.
    pub fn send_creature_to_food(&mut self, creature: CreatureId, food: FoodId) {
        let Some(target) = self
            .food
            .get(food)
            .filter(|item| item.available)
            .map(|item| item.position)
        else {
            return;
        };
        let ground = self.config.ground_offset;
        if let Some(row) = self.creatures.get_mut(creature) {
            if row.dead {
                return;
            }
            row.target_position = Some(Vec3::new(target.x, ground, target.z));
            row.target_food = Some(food);
            row.moving = true;
        }
    }

    /// Execute one simulation tick, advancing the clock by
    /// `base_step * speed`. Returns the emitted events; a paused world
    /// returns immediately without mutating anything.
    pub fn step(&mut self, base_step: f64) -> TickEvents {
        if self.paused {
            return TickEvents {
                tick: self.tick,
                ..TickEvents::default()
            };
        }
        let dt = base_step * self.speed;
        self.time += dt;
        self.tick = self.tick.next();
        let now = self.time;

        self.stage_environment(now);
        let food_respawned = self.stage_food_respawn(now);
        let food_spawned = self.stage_food_spawn();
        let (births, deaths) = self.stage_creatures(now, dt);
        self.stage_history(births, deaths);

        TickEvents {
            tick: self.tick,
            births,
            deaths,
            food_respawned,
            food_spawned,
        }
    }

    /// Re-derive time-of-day and light level from the clock.
    fn stage_environment(&mut self, now: f64) {
        let slot = TimeOfDay::from_time(now);
        self.environment.time_of_day = slot;
        self.environment.light_level = slot.light_level();
    }

    /// Return consumed tulips whose respawn delay has elapsed.
    fn stage_food_respawn(&mut self, now: f64) -> usize {
        let mut respawned = 0;
        for index in 0..self.food.len() {
            let item = self.food.row_mut(index);
            if !item.available && now - item.last_eaten > item.respawn_delay {
                item.available = true;
                respawned += 1;
            }
        }
        respawned
    }

    /// Spontaneously spawn one tulip inside the inset arena.
    fn stage_food_spawn(&mut self) -> Option<FoodId> {
        let probability = self.config.food_spawn_probability;
        if probability <= 0.0 || self.rng.random::<f32>() >= probability {
            return None;
        }
        let extent = self.config.arena_half_extent - self.config.food_spawn_margin;
        let x = self.rng.random_range(-extent..=extent);
        let z = self.rng.random_range(-extent..=extent);
        Some(self.add_food(Vec3::new(x, 0.0, z)))
    }

    /// Run the behavior state machine over every live creature.
    ///
    /// Transitions are computed on a working copy of the creature rows and
    /// committed at the end of the stage. Food availability is read from
    /// the start-of-tick snapshot with an explicit claim set, so two
    /// creatures can never consume the same tulip in one tick; the first
    /// claimant in insertion order wins. Returns `(births, deaths)`.
    fn stage_creatures(&mut self, now: f64, dt: f64) -> (usize, usize) {
        let handles: Vec<CreatureId> = self.creatures.handles().to_vec();
        let mut work: Vec<Creature> = self.creatures.rows().to_vec();
        let food_snapshot: Vec<Food> = self.food.rows().to_vec();
        let food_index: HashMap<FoodId, usize> = self
            .food
            .handles()
            .iter()
            .enumerate()
            .map(|(index, id)| (*id, index))
            .collect();
        let creature_index: HashMap<CreatureId, usize> = handles
            .iter()
            .enumerate()
            .map(|(index, id)| (*id, index))
            .collect();

        let mut claimed = vec![false; food_snapshot.len()];
        let mut births: Vec<Creature> = Vec::new();
        let mut deaths = 0usize;

        for idx in 0..work.len() {
            if work[idx].dead {
                continue;
            }
            let mut me = work[idx].clone();

            // Cosmetic idle phase, consumed by the view layer only.
            let phase = (f64::from(me.idle_phase) + dt * IDLE_PHASE_RATE).rem_euclid(1.0);
            me.idle_phase = phase as f32;

            let previous_hunger = me.hunger;
            me.hunger = (me.hunger - self.config.hunger_decay_rate * dt as f32).max(0.0);
            if previous_hunger > 0.0 && me.hunger == 0.0 {
                me.dead = true;
                me.state = CreatureState::Dead;
                me.state_changed_at = now;
                me.moving = false;
                me.target_position = None;
                me.target_food = None;
                me.breeding_partner = None;
                deaths += 1;
                work[idx] = me;
                continue;
            }

            // Hunger-driven base transition; behavior rules below may still
            // override the state they dispatch into.
            if matches!(me.state, CreatureState::Hungry | CreatureState::Full) {
                me.state = if me.hunger > self.config.hunger_full_threshold {
                    CreatureState::Full
                } else {
                    CreatureState::Hungry
                };
            }

            let range = me.vision_range(self.config.vision_range_max);

            match me.state {
                CreatureState::Hungry => {
                    // First available tulip in insertion order within the
                    // vision box (axis-aligned test on x and z).
                    let found = food_snapshot.iter().enumerate().position(|(food_idx, item)| {
                        item.available
                            && !claimed[food_idx]
                            && (item.position.x - me.position.x).abs() <= range
                            && (item.position.z - me.position.z).abs() <= range
                    });
                    if let Some(food_idx) = found {
                        claimed[food_idx] = true;
                        me.state = CreatureState::Full;
                        me.state_changed_at = now;
                        me.hunger = ATTRIBUTE_MAX;
                        me.target_position = None;
                        me.target_food = None;
                        me.moving = false;
                    } else if self.rng.random::<f32>() < self.config.hungry_wander_probability {
                        me.target_position =
                            Some(self.wander_target(me.position, self.config.hungry_wander_radius));
                        me.moving = true;
                    }
                }
                CreatureState::Eating => {
                    if now - me.state_changed_at >= self.config.eat_duration {
                        let target = me
                            .target_food
                            .and_then(|id| food_index.get(&id).copied())
                            .filter(|&food_idx| {
                                food_snapshot[food_idx].available && !claimed[food_idx]
                            });
                        match target {
                            Some(food_idx) => {
                                claimed[food_idx] = true;
                                me.state = CreatureState::Full;
                                me.state_changed_at = now;
                                me.hunger = ATTRIBUTE_MAX;
                                me.target_food = None;
                            }
                            None => {
                                // The tulip went to a racing creature.
                                me.state = CreatureState::Hungry;
                                me.state_changed_at = now;
                                me.target_food = None;
                            }
                        }
                    }
                }
                CreatureState::Full => {
                    let eligible = me.breeding_partner.is_none()
                        && now - me.last_bred_at > me.breeding_cooldown;
                    let mut paired = false;
                    if eligible {
                        for other_idx in 0..work.len() {
                            if other_idx == idx {
                                continue;
                            }
                            let other = &work[other_idx];
                            if other.dead
                                || other.state != CreatureState::Full
                                || other.breeding_partner.is_some()
                                || now - other.last_bred_at <= other.breeding_cooldown
                            {
                                continue;
                            }
                            if (other.position.x - me.position.x).abs() > range
                                || (other.position.z - me.position.z).abs() > range
                            {
                                continue;
                            }
                            me.state = CreatureState::Breeding;
                            me.state_changed_at = now;
                            me.target_position = None;
                            me.target_food = None;
                            me.moving = false;
                            me.breeding_partner = Some(handles[other_idx]);

                            let partner = &mut work[other_idx];
                            partner.state = CreatureState::Breeding;
                            partner.state_changed_at = now;
                            partner.target_position = None;
                            partner.target_food = None;
                            partner.moving = false;
                            partner.breeding_partner = Some(handles[idx]);
                            paired = true;
                            break;
                        }
                    }
                    if !paired && self.rng.random::<f32>() < self.config.full_wander_probability {
                        me.target_position =
                            Some(self.wander_target(me.position, self.config.full_wander_radius));
                        me.moving = true;
                    }
                }
                CreatureState::Breeding => {
                    if now - me.state_changed_at >= self.config.breeding_duration {
                        // Whichever pair member completes first while the
                        // link is intact emits the single offspring; its
                        // partner then observes the reset and emits none.
                        let link_intact = me
                            .breeding_partner
                            .and_then(|id| creature_index.get(&id).copied())
                            .is_some_and(|j| {
                                let partner = &work[j];
                                !partner.dead
                                    && partner.state == CreatureState::Breeding
                                    && partner.breeding_partner == Some(handles[idx])
                            });
                        if link_intact {
                            births.push(self.make_offspring(me.position, me.attributes, now));
                        }
                        me.state = CreatureState::Full;
                        me.state_changed_at = now;
                        me.last_bred_at = now;
                        me.breeding_partner = None;
                        me.target_position = None;
                        me.target_food = None;
                        me.moving = false;
                    }
                }
                // Declared but never entered; no behavior is invented for it.
                CreatureState::Searching => {}
                // Filtered at loop entry.
                CreatureState::Dead => {}
            }

            self.integrate_movement(&mut me, now, dt);
            me.position.y = self.config.ground_offset;
            work[idx] = me;
        }

        // Commit: creatures first, then consumed tulips, then births.
        for (idx, next) in work.into_iter().enumerate() {
            *self.creatures.row_mut(idx) = next;
        }
        for (food_idx, was_claimed) in claimed.into_iter().enumerate() {
            if was_claimed {
                let item = self.food.row_mut(food_idx);
                item.available = false;
                item.last_eaten = now;
            }
        }
        let birth_count = births.len();
        for newborn in births {
            self.creatures.insert(newborn);
        }
        (birth_count, deaths)
    }

    /// Advance a creature toward its movement target, if any.
    fn integrate_movement(&mut self, me: &mut Creature, now: f64, dt: f64) {
        let Some(target) = me.target_position else {
            return;
        };
        let dx = target.x - me.position.x;
        let dz = target.z - me.position.z;
        let distance = (dx * dx + dz * dz).sqrt();
        if distance < self.config.arrival_radius || distance < f32::EPSILON {
            me.target_position = None;
            me.moving = false;
            if me.target_food.is_some() {
                me.state = CreatureState::Eating;
                me.state_changed_at = now;
            }
            return;
        }
        let travel = (me.attributes.speed / ATTRIBUTE_MAX) * dt as f32;
        let next_x = me.position.x + dx / distance * travel;
        let next_z = me.position.z + dz / distance * travel;
        let half = self.config.arena_half_extent;
        if next_x.abs() > half || next_z.abs() > half {
            // Hitting a wall cancels the journey outright.
            me.position.x = next_x.clamp(-half, half);
            me.position.z = next_z.clamp(-half, half);
            me.target_position = None;
            me.target_food = None;
            me.moving = false;
        } else {
            me.position.x = next_x;
            me.position.z = next_z;
            me.rotation.y = dx.atan2(dz);
            me.moving = true;
        }
    }

    /// Random movement target within `radius` of `origin`, clamped to the
    /// wall boundary.
    fn wander_target(&mut self, origin: Vec3, radius: f32) -> Vec3 {
        let half = self.config.arena_half_extent;
        let x = (origin.x + self.rng.random_range(-radius..=radius)).clamp(-half, half);
        let z = (origin.z + self.rng.random_range(-radius..=radius)).clamp(-half, half);
        Vec3::new(x, self.config.ground_offset, z)
    }

    /// Build one offspring near the completing parent.
    fn make_offspring(&mut self, parent_position: Vec3, parent: Attributes, now: f64) -> Creature {
        let jitter = self.config.birth_jitter;
        let half = self.config.arena_half_extent;
        let x = (parent_position.x + self.rng.random_range(-jitter..=jitter)).clamp(-half, half);
        let z = (parent_position.z + self.rng.random_range(-jitter..=jitter)).clamp(-half, half);
        Creature {
            position: Vec3::new(x, self.config.ground_offset, z),
            rotation: Vec3::default(),
            scale: Vec3::splat(self.config.offspring_scale),
            attributes: parent.inherit(&mut self.rng, self.config.mutation_span),
            hunger: self.config.offspring_hunger,
            health: 100.0,
            dead: false,
            state: CreatureState::Hungry,
            state_changed_at: now,
            target_position: None,
            target_food: None,
            moving: false,
            idle_phase: 0.0,
            last_bred_at: 0.0,
            breeding_cooldown: self.config.breeding_cooldown,
            breeding_partner: None,
        }
    }

    /// Append the per-tick aggregate to the bounded history ring.
    fn stage_history(&mut self, births: usize, deaths: usize) {
        let mut alive = 0usize;
        let mut hunger_sum = 0.0f32;
        for creature in self.creatures.rows() {
            if !creature.dead {
                alive += 1;
                hunger_sum += creature.hunger;
            }
        }
        let average_hunger = if alive > 0 {
            hunger_sum / alive as f32
        } else {
            0.0
        };
        let food_available = self.food.rows().iter().filter(|item| item.available).count();
        let summary = TickSummary {
            tick: self.tick,
            time: self.time,
            alive,
            births,
            deaths,
            food_available,
            average_hunger,
        };
        if self.history.len() >= self.config.history_capacity {
            self.history.pop_front();
        }
        self.history.push_back(summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> MeadowConfig {
        MeadowConfig {
            rng_seed: Some(42),
            hungry_wander_probability: 0.0,
            full_wander_probability: 0.0,
            food_spawn_probability: 0.0,
            ..MeadowConfig::default()
        }
    }

    fn sample_creature(seed: u32) -> Creature {
        Creature {
            position: Vec3::new(seed as f32, 0.5, seed as f32 + 1.0),
            rotation: Vec3::default(),
            scale: Vec3::splat(1.0),
            attributes: Attributes::clamped(seed as f32, seed as f32 + 1.0, seed as f32 + 2.0),
            hunger: 60.0,
            health: 100.0,
            dead: false,
            state: CreatureState::Hungry,
            state_changed_at: 0.0,
            target_position: None,
            target_food: None,
            moving: false,
            idle_phase: 0.0,
            last_bred_at: 0.0,
            breeding_cooldown: 10_000.0,
            breeding_partner: None,
        }
    }

    #[test]
    fn arena_insert_allocates_unique_handles() {
        let mut arena: EntityArena<CreatureId, Creature> = EntityArena::new();
        let a = arena.insert(sample_creature(0));
        let b = arena.insert(sample_creature(1));
        assert_ne!(a, b);
        assert_eq!(arena.len(), 2);
        assert!(arena.contains(a));
        assert!(arena.contains(b));
    }

    #[test]
    fn arena_remove_keeps_dense_storage_coherent() {
        let mut arena: EntityArena<CreatureId, Creature> = EntityArena::new();
        let a = arena.insert(sample_creature(0));
        let b = arena.insert(sample_creature(1));
        let c = arena.insert(sample_creature(2));

        let copy = arena.snapshot(b).expect("detached copy");
        let removed = arena.remove(b).expect("row removed");
        assert_eq!(removed, copy);
        assert!(arena.snapshot(b).is_none());
        assert_eq!(removed.attributes.vision, 1.0);
        assert_eq!(arena.len(), 2);
        assert!(arena.contains(a));
        assert!(arena.contains(c));
        assert!(!arena.contains(b));
        assert_eq!(arena.index_of(c), Some(1));

        let d = arena.insert(sample_creature(3));
        assert_ne!(b, d, "generational handles must not be reused immediately");
    }

    #[test]
    fn time_of_day_cycles_through_slots() {
        assert_eq!(TimeOfDay::from_time(0.0), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_time(999.9), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_time(1_000.0), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_time(2_500.0), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_time(3_000.0), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_time(4_000.0), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::Morning.light_level(), 80.0);
        assert_eq!(TimeOfDay::Afternoon.light_level(), 100.0);
        assert_eq!(TimeOfDay::Evening.light_level(), 60.0);
        assert_eq!(TimeOfDay::Night.light_level(), 20.0);
    }

    #[test]
    fn config_validation_rejects_bad_values() {
        let mut config = MeadowConfig::default();
        config.arena_half_extent = 0.0;
        assert!(config.validate().is_err());

        let mut config = MeadowConfig::default();
        config.hungry_wander_probability = 1.5;
        assert!(config.validate().is_err());

        let mut config = MeadowConfig::default();
        config.spawn_hunger_range = (90.0, 30.0);
        assert!(config.validate().is_err());

        let mut config = MeadowConfig::default();
        config.history_capacity = 0;
        assert!(config.validate().is_err());

        assert!(MeadowConfig::default().validate().is_ok());
        assert!(MeadowConfig::classic().validate().is_ok());
    }

    #[test]
    fn classic_profile_carries_alternate_tuning() {
        let classic = MeadowConfig::classic();
        assert_eq!(classic.hunger_decay_rate, 0.0125);
        assert_eq!(classic.hungry_wander_probability, 0.02);
        assert_eq!(classic.food_spawn_probability, 0.0);
        // Everything else matches the default profile.
        assert_eq!(
            classic.breeding_cooldown,
            MeadowConfig::default().breeding_cooldown
        );
    }

    #[test]
    fn seed_food_is_idempotent() {
        let mut world = Ecosystem::new(test_config()).expect("world");
        assert_eq!(world.seed_food(), 30);
        assert_eq!(world.food().len(), 30);
        assert_eq!(world.seed_food(), 0);
        assert_eq!(world.food().len(), 30);
        assert!(world.food().rows().iter().all(|item| item.available));
    }

    #[test]
    fn step_advances_clock_by_scaled_delta() {
        let mut world = Ecosystem::new(test_config()).expect("world");
        world.set_speed(2.0);
        let events = world.step(5.0);
        assert_eq!(world.tick(), Tick(1));
        assert_eq!(events.tick, Tick(1));
        assert!((world.time() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn paused_world_mutates_nothing() {
        let mut world = Ecosystem::new(test_config()).expect("world");
        world.seed_food();
        let id = world.spawn_random_creature();
        let before = world.creature(id).expect("creature").clone();

        world.set_paused(true);
        let events = world.step(1_000.0);
        assert_eq!(events.tick, Tick(0));
        assert_eq!(world.tick(), Tick(0));
        assert_eq!(world.time(), 0.0);
        assert_eq!(world.creature(id), Some(&before));
        assert_eq!(world.history().count(), 0);

        world.set_paused(false);
        world.step(1.0);
        assert_eq!(world.tick(), Tick(1));
    }

    #[test]
    fn environment_clock_rederives_per_tick() {
        let mut world = Ecosystem::new(test_config()).expect("world");
        world.step(1_000.0);
        assert_eq!(world.environment().time_of_day, TimeOfDay::Afternoon);
        assert_eq!(world.environment().light_level, 100.0);
        world.step(1_000.0);
        assert_eq!(world.environment().time_of_day, TimeOfDay::Evening);
        world.step(2_000.0);
        assert_eq!(world.environment().time_of_day, TimeOfDay::Morning);
        assert_eq!(world.environment().light_level, 80.0);
    }

    #[test]
    fn mutation_operations_ignore_stale_handles() {
        let mut world = Ecosystem::new(test_config()).expect("world");
        let id = world.spawn_random_creature();
        world.remove_creature(id);
        // All of these must be silent no-ops.
        assert!(world.remove_creature(id).is_none());
        world.update_creature(id, |creature| creature.hunger = 1.0);
        let food = world.add_food(Vec3::new(0.0, 0.0, 0.0));
        world.remove_food(food);
        assert!(world.remove_food(food).is_none());
        world.update_food(food, |item| item.available = false);
        world.send_creature_to_food(id, food);
        assert_eq!(world.creatures().len(), 0);
        assert_eq!(world.food().len(), 0);
    }

    #[test]
    fn history_ring_respects_capacity() {
        let config = MeadowConfig {
            history_capacity: 4,
            ..test_config()
        };
        let mut world = Ecosystem::new(config).expect("world");
        for _ in 0..10 {
            world.step(1.0);
        }
        assert_eq!(world.history().count(), 4);
        let latest = world.history().last().expect("summary");
        assert_eq!(latest.tick, Tick(10));
    }

    #[test]
    fn idle_phase_stays_in_unit_interval() {
        let mut world = Ecosystem::new(test_config()).expect("world");
        let id = world.spawn_creature_with(Vec3::default(), Attributes::default(), 90.0);
        for _ in 0..50 {
            world.step(3.7);
            let creature = world.creature(id).expect("creature");
            assert!((0.0..1.0).contains(&creature.idle_phase));
        }
    }
}
