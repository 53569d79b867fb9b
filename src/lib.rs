//! # AsciiPal - an ASCII desktop companion
//!
//! A small character that watches keyboard and mouse activity, changes its
//! mood accordingly and nags about breaks. Focused time grows an aquarium
//! around it.
//!
//! ## Features
//!
//! - **Activity Tracking**: Typing speed, click rate and mouse speed over a sliding window
//! - **Moods**: Idle, sleeping, watching, excited, dizzy, alarmed, cheering and sweating
//! - **Break Reminders**: Escalating suggestion, insistence and tantrum stages
//! - **Aquarium**: Seaweed, bubbles, fireflies and creatures unlocked by milestones
//! - **Ambient Info**: Weather, time of day, battery and system resources
//! - **Lifetime Stats**: Achievements persisted across sessions
//!
//! ## Usage
//!
//! ```rust,no_run
//! use asciipal::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
