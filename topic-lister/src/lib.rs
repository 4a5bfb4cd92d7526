//! Periodic topic listing for a publish/subscribe backend.
//!
//! A [`Lister`] opens a fresh [`Session`] on its [`Backend`] for every pass,
//! drains the paginated topic listing of one project and writes one line per
//! topic. [`Lister::run`] repeats passes until its cancellation token fires
//! or a pass fails.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod backend;
mod config;
mod error;
mod lister;
mod output;
mod topic;

pub use crate::backend::{Backend, Session};
pub use crate::config::{ListerConfig, OutputFormat, DEFAULT_INTERVAL};
pub use crate::error::{BoxError, ConfigError, InvalidTopicId, ListerError};
pub use crate::lister::{Lister, PassSummary};
pub use crate::topic::TopicId;
