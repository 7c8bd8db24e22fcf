#![no_std]

mod catalog;
mod codec;
mod config;
mod frame;
mod iden;
mod language;
mod monitor;
mod notification;
mod selection;
mod table;

// Notification status frame, 16 payload bytes, current message 0x28
// 524 00000000 20000000 00280000 00000000

/// Identifiers are 12 bits wide
pub const MAX_IDEN: u16 = 0xFFF;

pub const MAX_FRAME_DATA_LENGTH: usize = 28;

/// Length of the hex dump of a full frame, see [`VanFrame::as_bytes`]
pub const MAX_FRAME_TEXT_LENGTH: usize = 3 + MAX_FRAME_DATA_LENGTH * 2;

pub const NOTIFICATION_COUNT: usize = 128;
pub const NOTIFICATION_BITMAP_LENGTH: usize = NOTIFICATION_COUNT / 8;

/// Payload byte holding the index of the message currently shown
pub const CURRENT_MESSAGE_INDEX_OFFSET: usize = 9;

pub use catalog::Localized;
pub use config::*;
pub use frame::*;
pub use iden::*;
pub use language::*;
pub use monitor::*;
pub use notification::*;
pub use selection::*;
pub use table::{
    lookup_template, notification_text, render_text, resolve_template, verify_table, TableError,
    Template,
};
