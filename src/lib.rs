//! Spotify playback relay library
//!
//! A single-user OAuth2 proxy in front of the Spotify Web API. The user logs
//! in once through the Authorization Code flow; afterwards the proxy relays
//! play, pause, next and previous commands with the cached access token and
//! can report the user's top tracks.
//!
//! # Modules
//!
//! - `api` - axum route handlers
//! - `config` - `.env` loading and the validated [`config::Config`]
//! - `error` - route-boundary error type rendered as plain text
//! - `management` - shared state: token cache and pending login states
//! - `server` - router construction and the listening loop
//! - `spotify` - Spotify accounts and Web API calls
//! - `types` - data structures exchanged with Spotify
//! - `utils` - helpers for state values, credentials and formatting

pub mod api;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Server started on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal startup failures. Request handling never calls this; a
/// failed request is logged with [`warning!`] and answered with an error
/// response instead.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for every recoverable failure: rejected token exchanges, failed
/// relays, unparsable Spotify responses.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
