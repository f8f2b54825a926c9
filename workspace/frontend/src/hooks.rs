/// API fetch state, shared with the CLI so both follow the same transitions.
pub use ::common::FetchState;
