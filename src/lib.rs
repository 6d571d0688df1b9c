#![allow(unused_assignments)]

//! # gcf-deploy
//!
//! A CI extension that deploys Google Cloud Functions from declarative
//! manifest properties.
//!
//! ## Features
//!
//! - **Layered resolution**: credential-supplied defaults, manifest
//!   properties, and convention defaults merge into one parameter set
//! - **Batch validation**: every violation against the provider's accepted
//!   values is collected and reported at once
//! - **Credential convention**: the release name resolves the credential
//!   (`gcf-<release>`) when the manifest doesn't name one
//! - **Label forwarding**: build labels are scraped from the environment and
//!   sanitized to the provider's label grammar
//! - **Dry run**: report the exact deploy command without executing anything
//!
//! ## Quick Start
//!
//! ```no_run
//! use gcf_deploy::Params;
//!
//! # fn example() -> Result<(), gcf_deploy::Error> {
//! // Resolve manifest properties over credential defaults
//! let mut params = Params::from_layers(None, r#"{"runtime": "go111"}"#)?;
//! params.apply_defaults("myrepo", "", &Default::default());
//!
//! // Validate against the provider's accepted values
//! let result = params.validate();
//! assert!(result.ok());
//! # Ok(())
//! # }
//! ```
//!
//! ## Resolution Model
//!
//! A parameter set is constructed fresh per invocation, populated in three
//! passes (credential defaults, explicit manifest properties, convention
//! defaults), validated once, then consumed exactly once by the deploy step
//! or discarded on failure. No state survives a run.

pub mod config;
pub mod credentials;
pub mod deploy;
pub mod error;
pub mod labels;

// Re-export commonly used types
pub use config::{Params, ValidationResult};
pub use credentials::{CredentialsParam, GcfCredentials};
pub use deploy::Runner;
pub use error::{Error, Result};
