//! Top-bar notification feed.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Urgent,
    Warning,
    Success,
    Info,
}

impl NoticeKind {
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    pub time: String,
    pub unread: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationsState {
    pub items: Vec<Notice>,
}

impl Default for NotificationsState {
    fn default() -> Self {
        let items = [
            (NoticeKind::Urgent, "Maintenance Overdue", "Forklift #A-203 oil change is overdue by 2 days", "10 minutes ago", true),
            (NoticeKind::Warning, "Upcoming Maintenance", "Generator B-45 filter replacement due in 3 days", "1 hour ago", true),
            (NoticeKind::Success, "Maintenance Completed", "CNC Machine #5 calibration successfully completed", "2 hours ago", false),
            (NoticeKind::Info, "New Equipment Added", "Compressor D-20 has been added to your inventory", "5 hours ago", false),
            (NoticeKind::Warning, "Health Score Alert", "Compressor C-19 health score dropped to 65%", "1 day ago", false),
            (NoticeKind::Success, "Schedule Confirmed", "HVAC Unit #12 inspection scheduled for Jan 2", "2 days ago", false),
        ]
        .into_iter()
        .map(|(kind, title, message, time, unread)| Notice {
            kind,
            title: title.to_owned(),
            message: message.to_owned(),
            time: time.to_owned(),
            unread,
        })
        .collect();
        Self { items }
    }
}

impl NotificationsState {
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| n.unread).count()
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.unread = false;
        }
    }
}
