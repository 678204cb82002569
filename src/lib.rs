//! # artemis_rgb
//!
//! An async Rust client for the local HTTP API of the Artemis RGB lighting
//! application.
//!
//! Artemis exposes a small REST API (port 9696 by default) for listing
//! profiles, suspending and resuming them, and remotely controlling the
//! application window. This crate wraps those endpoints in typed async
//! methods on [`Artemis`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use artemis_rgb::{Artemis, ArtemisConfig, SuspendState};
//!
//! async fn pause_profile() -> Result<(), artemis_rgb::Error> {
//!     let artemis = Artemis::new(ArtemisConfig::new("192.168.1.50", 9696));
//!
//!     let profiles = artemis.get_profiles().await?;
//!     println!("{profiles:#}");
//!
//!     artemis
//!         .suspend_profile("2d6a5c9e-0000-0000-0000-000000000000", SuspendState::True)
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Endpoints
//!
//! | Method | Path | Client call |
//! |---|---|---|
//! | GET | `/profiles` | [`Artemis::get_profiles`] |
//! | GET | `/profiles/categories` | [`Artemis::get_profile_categories`] |
//! | POST | `/profiles/suspend/{id}` | [`Artemis::suspend_profile`] |
//! | POST | `/remote/bring-to-foreground` | [`Artemis::bring_to_foreground`] |
//! | POST | `/remote/restart` | [`Artemis::restart`] |
//! | POST | `/remote/shutdown` | [`Artemis::shutdown`] |
//!
//! Reads succeed only on `200` with a JSON content type, writes only on
//! `204`. Everything else, including transport failures, is reported as
//! [`Error::CannotConnect`].
//!
//! ## Logging
//!
//! Requests and failures are logged through the [`log`] facade. Install any
//! `log` implementation in your binary to see them.
//!
//! ## Feature Flags
//!
//! - `transport-reqwest` (default): HTTP via `reqwest`, enables [`Artemis::new`]

mod client;
mod config;
mod errors;
pub mod transport;
mod types;

// Re-export public API
pub use client::Artemis;
pub use config::ArtemisConfig;
pub use errors::Error;
pub use types::SuspendState;
