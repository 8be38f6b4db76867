//! Placeholder data every screen starts from.

use super::model::{ItemStatus, ItemType, StudyItem};

/// Items shown on the study screen when it opens.
pub fn study_seed() -> Vec<StudyItem> {
    use ItemStatus::{Completed, Failed, InProgress};
    vec![
        StudyItem::new(ItemType::Task, "Complete Math Homework").with_status(InProgress),
        StudyItem::new(ItemType::Assignment, "Submit Physics Report")
            .subject("Physics")
            .with_status(Completed),
        StudyItem::new(ItemType::StudySession, "Photosynthesis Review")
            .subject("Science")
            .duration("25 min")
            .with_status(InProgress),
        StudyItem::new(ItemType::Reminder, "Study Break at 5 PM").with_status(InProgress),
        StudyItem::new(ItemType::Goal, "Read 50 pages of Biology")
            .subject("Biology")
            .with_status(Completed),
        StudyItem::new(ItemType::Task, "Review Chemistry Notes").with_status(InProgress),
        StudyItem::new(ItemType::Assignment, "Prepare for History Exam")
            .subject("History")
            .with_status(InProgress),
        StudyItem::new(ItemType::StudySession, "Waste Management Lecture")
            .subject("Science")
            .duration("30 min")
            .with_status(Completed),
        StudyItem::new(ItemType::Reminder, "Call Study Group").with_status(InProgress),
        StudyItem::new(ItemType::Goal, "Achieve 90% in Math Test")
            .subject("Math")
            .with_status(Failed),
    ]
}

/// Items the weekly report is computed from.
pub fn weekly_seed() -> Vec<StudyItem> {
    use ItemStatus::{Completed, Failed, InProgress};
    vec![
        StudyItem::new(ItemType::Task, "Complete Math Homework").with_status(Completed),
        StudyItem::new(ItemType::Assignment, "Submit Physics Report")
            .subject("Physics")
            .with_status(Completed),
        StudyItem::new(ItemType::StudySession, "Photosynthesis Review")
            .subject("Science")
            .duration("25 min")
            .with_status(InProgress),
        StudyItem::new(ItemType::Reminder, "Study Break at 5 PM").with_status(Completed),
        StudyItem::new(ItemType::Goal, "Read 50 pages of Biology")
            .subject("Biology")
            .with_status(Completed),
        StudyItem::new(ItemType::Task, "Review Chemistry Notes").with_status(Failed),
        StudyItem::new(ItemType::Assignment, "Prepare for History Exam")
            .subject("History")
            .with_status(InProgress),
        StudyItem::new(ItemType::StudySession, "Waste Management Lecture")
            .subject("Science")
            .duration("30 min")
            .with_status(Completed),
        StudyItem::new(ItemType::Reminder, "Call Study Group").with_status(InProgress),
        StudyItem::new(ItemType::Goal, "Achieve 90% in Math Test")
            .subject("Math")
            .with_status(Failed),
    ]
}
