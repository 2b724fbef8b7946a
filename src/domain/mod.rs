//! Domain Layer
//!
//! Pure sweep rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Fetched objects as the engine sees them (`ConfigItem`)
//! - `value_objects/` - Immutable value types (MatchCriteria, SweepAction, outcomes)
//! - `policies/` - Business rules (the sweep decision state machine)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the network directly
//! 2. **Pure Functions** - Policies are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod value_objects;
