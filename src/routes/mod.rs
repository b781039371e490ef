/// Router Module Index
///
/// Routes are split by access level so that the session requirement is applied
/// once, at the module boundary, instead of per handler.

/// Routes accessible without a session.
pub mod public;

/// Routes protected by the `AuthUser` extractor middleware.
pub mod authenticated;
