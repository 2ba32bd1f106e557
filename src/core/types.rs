/*!
 * Core Types
 * Shared primitive types for the grading pipeline
 */

/// OS-assigned process identifier, opaque to the supervisor
pub type Pid = u32;
