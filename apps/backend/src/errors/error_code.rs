//! Error codes for the Scopa backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Scopa backend API.
///
/// This enum ensures type safety and prevents the use of ad-hoc error
/// codes. Each variant maps to a canonical SCREAMING_SNAKE_CASE string
/// that appears in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Hand index out of range for the acting player's hand
    InvalidHandIndex,
    /// Operation requires a round in progress
    GameNotStarted,
    /// Operation requires the round to be over
    RoundNotOver,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource not found
    /// Game not found
    GameNotFound,
    /// General not found error
    NotFound,

    // System errors
    /// Internal server error
    Internal,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::InvalidHandIndex,
        ErrorCode::GameNotStarted,
        ErrorCode::RoundNotOver,
        ErrorCode::ValidationError,
        ErrorCode::BadRequest,
        ErrorCode::GameNotFound,
        ErrorCode::NotFound,
        ErrorCode::Internal,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidHandIndex => "INVALID_HAND_INDEX",
            ErrorCode::GameNotStarted => "GAME_NOT_STARTED",
            ErrorCode::RoundNotOver => "ROUND_NOT_OVER",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
