//! Core library modules for the asciipal companion.
//!
//! ## Layout
//!
//! - **Input and metrics**: `monitor` feeds `activity`, whose snapshots drive
//!   `mood` and `breaks`
//! - **Scene**: `character`, `aquarium`, `effects`, `weather` and
//!   `time_awareness` produce the pieces that `scene` composes into a frame
//! - **Output**: `overlay` paints frames with `palette` colors, `view` prints
//!   tables
//! - **Infrastructure**: `config`, `data_storage`, `messages`, `signals`,
//!   `platform`, `battery`, `resources`
//! - **Pipeline**: `app` ties everything together per tick
//!
//! ## Usage
//!
//! ```rust,no_run
//! use asciipal::libs::activity::ActivityTracker;
//! use asciipal::libs::config::Config;
//! use asciipal::libs::mood::StateMachine;
//!
//! let config = Config::default();
//! let mut tracker = ActivityTracker::new(10.0, 0.0);
//! tracker.record_keypress(1.0);
//! let snapshot = tracker.snapshot(1.5);
//! let transition = StateMachine::new(&config).update(&snapshot, 1.5);
//! println!("{}", transition.state);
//! ```

pub mod achievements;
pub mod activity;
pub mod app;
pub mod aquarium;
pub mod battery;
pub mod breaks;
pub mod character;
pub mod config;
pub mod data_storage;
pub mod effects;
pub mod messages;
pub mod monitor;
pub mod mood;
pub mod overlay;
pub mod palette;
pub mod platform;
pub mod resources;
pub mod scene;
pub mod signals;
pub mod time_awareness;
pub mod view;
pub mod weather;
