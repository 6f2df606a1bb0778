//! Password strength analysis library
//!
//! Scores a password on three axes (length, character-class complexity,
//! uniqueness), sums them into a 0-12 total with a discrete strength label,
//! and produces ordered, actionable recommendations. A request handler
//! shapes the result into a JSON-friendly response payload, clamping very
//! short passwords to the weakest label.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PW_STRENGTH_BLACKLIST_PATH`: Custom path to the optional
//!   common-password blacklist file (default: `./assets/blacklist.txt`)
//!
//! # Example
//!
//! ```rust
//! use pw_strength_checker::{Analyzer, Scorer};
//! use serde_json::json;
//!
//! let analyzer = Analyzer::new(Scorer::new());
//! let response = analyzer.analyze(&json!({ "password": "Tr0ub4dor&3" }));
//!
//! println!("Strength: {:?}", response.strength);
//! println!("Score: {}%", response.scores.percent);
//! for fix in &response.recommendations {
//!     println!("- {}", fix);
//! }
//! ```

// Internal modules
mod blacklist;
mod handler;
mod scorer;
mod sections;

// Public API
pub use blacklist::{Blacklist, BlacklistError, BLACKLIST_PATH_ENV};
pub use handler::{AnalyzeResponse, Analyzer, Scores, STARTER_RECOMMENDATION};
pub use scorer::{Feedback, Scorer, Strength, MAX_TOTAL_SCORE};
