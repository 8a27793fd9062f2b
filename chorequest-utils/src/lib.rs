/// Shared yes/no prompt helpers.
pub mod confirmation;
/// Generic embed builders shared across commands.
pub mod embed;
/// Persian digits, currency labels and progress bars.
pub mod formatting;
/// Gregorian and Jalali calendar conversions.
pub mod jalali;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Shared pagination helper utilities.
pub mod pagination;
/// Pure parser helpers.
pub mod parse;
/// Shared time helpers.
pub mod time;
