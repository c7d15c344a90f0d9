//! Helper functions and utilities
//! 
//! This module contains common helper functions used throughout the application.

use chrono::{DateTime, Local, Utc};

/// Maximum number of characters sent in a single chat message
pub const MESSAGE_CHUNK_SIZE: usize = 4000;

/// Format a stored UTC timestamp in the server's local time, to the minute
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Split `text` into consecutive pieces of at most `max_chars` characters.
///
/// Pieces are cut on character boundaries only, so a word may be split in
/// two. Concatenating the pieces gives back the original text. Empty input
/// yields no pieces.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0;

    for ch in text.chars() {
        if count == max_chars {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
        current.push(ch);
        count += 1;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Parse a whole number typed by the user, tolerating surrounding whitespace
pub fn parse_quantity(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}
