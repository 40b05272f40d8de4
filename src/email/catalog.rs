//! Requestable document types

/// The fixed list of documents an applicant can be asked for, in display order
pub const DOCUMENT_CATALOG: [&str; 10] = [
    "Individual semester wise marksheets",
    "Consolidated marksheets",
    "Statement of Purpose (SOP)",
    "Letter of Recommendation (LOR) - Professional Reference",
    "Work Experience Letter (WEL)",
    "Letter of Degree Completion / Provisional Degree Certificate",
    "Letter of Recommendation (LOR) - Academic Reference",
    "Official grading scale from your awarding institution",
    "Backlog Certificate (issued by your awarding institution)",
    "Submission of your portfolio (if any)",
];
