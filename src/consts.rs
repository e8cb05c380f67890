// src/consts.rs
//! Shared constants — exit contract, help layout and boolean tokens

/// Exit status carried by [`crate::DeclaredEnvironmentExit`].
///
/// Distinguishes "environment misconfigured" from any other startup failure.
pub const EXIT_STATUS: i32 = 88;

/// Minimum column width of the key in a help line
pub const HELP_KEY_WIDTH: usize = 20;

/// Separator between a prefix and a field name
pub const KEY_SEPARATOR: char = '_';

/// Separator allowed between digits of numeric values
pub const DIGIT_SEPARATOR: char = '_';

/// Message carried by a missing required variable
pub const MISSING_MESSAGE: &str = "variable not set";

/// Tokens accepted as `true` (compared lower-cased)
pub const TRUTHY_TOKENS: [&str; 4] = ["1", "yes", "true", "on"];

/// Tokens accepted as `false` (compared lower-cased)
pub const FALSY_TOKENS: [&str; 4] = ["0", "no", "false", "off"];
