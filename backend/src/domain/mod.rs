//! Domain primitives, services, and ports.
//!
//! Purpose: Define the user record, its validation rules, and the use-cases
//! that create and read users. Keep types immutable and free of transport
//! concerns; inbound adapters map [`Error`] onto HTTP responses.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure taxonomy.
//! - User / UserId / NewUser: the user record and its validated draft.
//! - validate_user_payload: field rules for untyped payloads.
//! - UserService: implementation of the user driving ports.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;
pub mod validation;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, UserId, UserValidationError};
pub use self::user_service::UserService;
pub use self::validation::{
    FieldViolation, NAME_MAX_CHARS, ValidationReport, is_valid_email, validate_user_payload,
};
