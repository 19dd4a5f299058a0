// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod catalog;
pub mod error;
pub mod model;
pub mod session;
pub mod state;

pub use catalog::*;
pub use error::*;
pub use model::*;
pub use session::*;
pub use state::*;
