//! Fixed email wording
//!
//! The text here is pasted into the admissions CRM as-is, so it must not
//! drift. Callers pass already-trimmed values.

/// Marker placed before each requested document
pub const BULLET: &str = "•";

pub fn primary_subject(programme: &str) -> String {
    format!("[IMP] Additional Documents Required – {programme} @ TUS")
}

pub fn primary_body(forename: &str, programme: &str, document_list: &str, deadline: &str) -> String {
    format!(
        "Hello {forename},

Thank you for your application to {programme} at Technological University of the Shannon (TUS).

To proceed with the assessment of your application, we kindly request you to upload the following document(s):

Required Documents:
{document_list}

Please ensure that all documents are clear, complete, and issued by the relevant awarding or official authority.

Important Guidelines:
{BULLET} Upload all documents in PDF format only.
{BULLET} Each document should be clearly readable and not password protected.
{BULLET} If a document is not yet available, please upload an official provisional letter or provide an expected availability date.
{BULLET} Where applicable, documents must be issued on official institutional letterhead and include signature/stamp.

We also kindly request that you submit the required documents, or update us on your progress toward uploading them, by {deadline}. This allows us to support you appropriately, especially if you are facing any delays or challenges. Please feel free to keep us informed; we are here to help.

You can also reply to this message with the documents you currently have available, and we will advise you on the next steps.

If you experience any difficulty uploading the documents or have any questions, simply reply to this message and our team will be happy to assist you.

{SIGN_OFF}"
    )
}

pub fn gentle_reminder_subject(programme: &str) -> String {
    format!("Friendly Reminder – Documents for {programme} Application")
}

pub fn gentle_reminder_body(forename: &str, programme: &str) -> String {
    format!(
        "Hello {forename},

I hope you’re keeping well.

I just wanted to gently follow up regarding the documents requested for your application to {programme} at Technological University of the Shannon (TUS).

If you have already uploaded the documents, please feel free to ignore this message — thank you very much.

If you’re still in the process of gathering any documents or if you’re experiencing any difficulty uploading them, please don’t hesitate to let us know. We’re more than happy to support you in any way we can.

You can also reply to this message with the documents you currently have available, and we will advise you on the next steps.

Whenever convenient, we kindly ask that you submit the required documents or keep us informed of your progress.

Thank you again for your application, and we look forward to supporting you through the next steps.

{SIGN_OFF}"
    )
}

pub fn final_check_in_subject(programme: &str) -> String {
    format!("Checking In – Document Submission Support for {programme}")
}

pub fn final_check_in_body(forename: &str, programme: &str) -> String {
    format!(
        "Hello {forename},

I hope you are doing well.

We just wanted to check in once more regarding the outstanding documents for your application to {programme} at Technological University of the Shannon (TUS).

If you have already submitted the documents, thank you very much — we really appreciate it.

If you are facing any challenges obtaining or uploading the documents, or if you require additional time, please feel free to let us know. Our team is happy to assist or discuss any flexibility where possible.

You can also reply to this message with the documents you currently have available, and we will advise you on the next steps.

Your application remains important to us, and we want to ensure you have the support you need throughout the process.

Thank you again, and we look forward to hearing from you whenever convenient.

{SIGN_OFF}"
    )
}

const SIGN_OFF: &str = "Kind regards,
Admissions Team
Technological University of the Shannon
";
