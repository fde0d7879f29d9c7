//! Sample conversation and notes shown on first launch

use chrono::{Duration, Local, NaiveTime, Utc};
use roost_core::chat::UnreadCounts;
use roost_core::models::{Message, Note, NoteAttachment, Priority, Reminder, Subtask, User};

/// Contact on the other side of the sample conversation
pub fn contact() -> User {
    User::new("client-ada", "Ada Byron").with_photo("https://i.pravatar.cc/300?u=ada")
}

pub fn messages(me: &User) -> Vec<Message> {
    let ada = contact();
    let now = Utc::now();
    let ms = |offset: Duration| (now - offset).timestamp_millis();

    let mut seeded = vec![
        Message::at(
            ada.clone(),
            "Morning! Did the draft proposal land?",
            ms(Duration::days(1) + Duration::hours(2)),
        ),
        Message::at(
            me.clone(),
            "It did, reviewing it now.",
            ms(Duration::days(1) + Duration::hours(1)),
        ),
        Message::at(
            ada,
            "Great. Can we go over the timeline today?",
            ms(Duration::minutes(40)),
        ),
        Message::at(me.clone(), "Sure, how about 3pm?", ms(Duration::minutes(35))),
    ];
    for message in seeded.iter_mut().filter(|m| m.sender.id == me.id) {
        message.read = true;
    }
    seeded
}

pub fn unread() -> UnreadCounts {
    [
        (contact().id.to_string(), 2),
        ("client-grace".to_string(), 1),
        ("team".to_string(), 4),
    ]
    .into_iter()
    .collect()
}

pub fn notes() -> Vec<Note> {
    let today = Local::now().date_naive();

    let mut proposal = Note::new(
        "Send revised proposal",
        "Include the updated timeline and pricing tiers.",
    )
    .with_priority(Priority::Urgent);
    proposal.reminders = vec![Reminder {
        date: today,
        time: NaiveTime::from_hms_opt(15, 0, 0),
    }];
    proposal.subtasks = vec![
        Subtask::done("Update timeline"),
        Subtask::new("Recalculate pricing"),
        Subtask::new("Proofread"),
    ];
    proposal.attachments = vec![NoteAttachment {
        filename: "proposal-v2.pdf".to_string(),
        mime_type: "application/pdf".to_string(),
    }];

    let mut onboarding =
        Note::new("Client onboarding checklist", "").with_priority(Priority::High);
    onboarding.subtasks = vec![Subtask::done("Kickoff call"), Subtask::done("Shared drive")];

    let ideas = Note::new("", "Ideas for the Q3 newsletter\nCase study with Ada's team")
        .with_priority(Priority::Low);

    vec![proposal, onboarding, ideas]
}
