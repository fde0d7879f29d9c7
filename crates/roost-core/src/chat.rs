//! Derived chat state: day grouping, draft checks and unread totals.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Days, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Message, UserId};
use crate::util::is_blank;

/// Sidebar tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatTab {
    #[default]
    Inbox,
    Clients,
}

impl ChatTab {
    pub const ALL: [Self; 2] = [Self::Inbox, Self::Clients];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Clients => "Clients",
        }
    }
}

impl fmt::Display for ChatTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of attachment the composer asks the caller to pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    File,
}

/// Unread message counts keyed by conversation id
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnreadCounts(BTreeMap<String, u32>);

impl UnreadCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self, conversation: &str) {
        self.0.remove(conversation);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, conversation: &str) -> u32 {
        self.0.get(conversation).copied().unwrap_or(0)
    }

    /// Sum over all conversations
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.values().fold(0u32, |acc, n| acc.saturating_add(*n))
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for UnreadCounts {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Whether a draft may be sent
#[must_use]
pub fn can_send(draft: &str) -> bool {
    !is_blank(draft)
}

/// Typing state change caused by an edit of the draft.
///
/// `Some(true)` when the draft goes from blank to non-blank, `Some(false)`
/// on the reverse, `None` when typing state is unchanged.
#[must_use]
pub fn typing_transition(previous: &str, next: &str) -> Option<bool> {
    match (can_send(previous), can_send(next)) {
        (false, true) => Some(true),
        (true, false) => Some(false),
        _ => None,
    }
}

/// One row of the rendered message list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatRow {
    DaySeparator { date: NaiveDate, label: String },
    Message { message: Message, own: bool },
}

/// Convert a Unix ms timestamp into a date-time at the viewer's offset.
///
/// Out-of-range timestamps clamp to the Unix epoch.
#[must_use]
pub fn local_datetime(timestamp_ms: i64, offset: FixedOffset) -> DateTime<FixedOffset> {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .unwrap_or_default()
        .with_timezone(&offset)
}

/// Separator label for a calendar day relative to `today`
#[must_use]
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if today.checked_sub_days(Days::new(1)) == Some(date) {
        "Yesterday".to_string()
    } else {
        date.format("%A, %B %-d, %Y").to_string()
    }
}

/// Message time as shown under the bubble
#[must_use]
pub fn format_time(timestamp_ms: i64, offset: FixedOffset, clock_24h: bool) -> String {
    let local = local_datetime(timestamp_ms, offset);
    if clock_24h {
        local.format("%H:%M").to_string()
    } else {
        local.format("%-I:%M %p").to_string()
    }
}

/// Interleave day separators into an ordered message sequence.
///
/// A separator precedes the first message and every message whose calendar
/// day (at `offset`) differs from the one before it.
#[must_use]
pub fn group_by_day(
    messages: &[Message],
    current_user: &UserId,
    offset: FixedOffset,
    today: NaiveDate,
) -> Vec<ChatRow> {
    let mut rows = Vec::with_capacity(messages.len() + 1);
    let mut previous_day: Option<NaiveDate> = None;

    for message in messages {
        let day = local_datetime(message.sent_at, offset).date_naive();
        if previous_day != Some(day) {
            rows.push(ChatRow::DaySeparator {
                date: day,
                label: day_label(day, today),
            });
            previous_day = Some(day);
        }
        rows.push(ChatRow::Message {
            message: message.clone(),
            own: message.is_from(current_user),
        });
    }

    rows
}
