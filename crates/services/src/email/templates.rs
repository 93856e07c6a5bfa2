/// Email bodies for the platform's notification events. Each function
/// returns a (plain text, HTML) pair.

/// Sent to a mentor when a mentee is assigned to them
pub fn mentor_assigned_mentor(
    mentor_name: &str,
    mentee_name: &str,
    organization_name: &str,
) -> (String, String) {
    let text = format!(
        r#"Hi {},

A new mentee has been assigned to you in {}: {}.

Please reach out to them and help them get started. Their daily todo
lists and reports will appear on your dashboard.

Best regards,
Mentorship Platform Team
"#,
        mentor_name, organization_name, mentee_name
    );

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
        .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
        .footer {{ margin-top: 30px; padding-top: 20px; border-top: 1px solid #ddd; font-size: 12px; color: #666; }}
    </style>
</head>
<body>
    <div class="container">
        <h2>New Mentee Assigned</h2>
        <p>Hi {},</p>
        <p>A new mentee has been assigned to you in <strong>{}</strong>: <strong>{}</strong>.</p>
        <p>Please reach out to them and help them get started. Their daily todo lists and reports will appear on your dashboard.</p>
        <div class="footer">
            <p>Best regards,<br>Mentorship Platform Team</p>
        </div>
    </div>
</body>
</html>"#,
        mentor_name, organization_name, mentee_name
    );

    (text, html)
}

/// Sent to a mentee when they are paired with a mentor
pub fn mentor_assigned_mentee(
    mentee_name: &str,
    mentor_name: &str,
    organization_name: &str,
) -> (String, String) {
    let text = format!(
        r#"Hi {},

You have been assigned a mentor in {}: {}.

They will review your daily todo lists and reports, and you can message
them directly from the platform.

Best regards,
Mentorship Platform Team
"#,
        mentee_name, organization_name, mentor_name
    );

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
        .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
        .footer {{ margin-top: 30px; padding-top: 20px; border-top: 1px solid #ddd; font-size: 12px; color: #666; }}
    </style>
</head>
<body>
    <div class="container">
        <h2>Your Mentor</h2>
        <p>Hi {},</p>
        <p>You have been assigned a mentor in <strong>{}</strong>: <strong>{}</strong>.</p>
        <p>They will review your daily todo lists and reports, and you can message them directly from the platform.</p>
        <div class="footer">
            <p>Best regards,<br>Mentorship Platform Team</p>
        </div>
    </div>
</body>
</html>"#,
        mentee_name, organization_name, mentor_name
    );

    (text, html)
}

/// Sent to a mentor when one of their mentees submits a todo list
pub fn todo_submitted(mentor_name: &str, mentee_name: &str) -> (String, String) {
    let text = format!(
        r#"Hi {},

{} has created their daily todo list. Please review it on your
dashboard.

Best regards,
Mentorship Platform Team
"#,
        mentor_name, mentee_name
    );

    let html = format!(
        "<p>Hi {},</p><p><strong>{}</strong> has created their daily todo list. \
         Please review it on your dashboard.</p>",
        mentor_name, mentee_name
    );

    (text, html)
}

/// Sent to a mentor when one of their mentees submits a daily report
pub fn report_submitted(mentor_name: &str, mentee_name: &str) -> (String, String) {
    let text = format!(
        r#"Hi {},

{} has submitted their daily report. Please review it and leave
feedback on your dashboard.

Best regards,
Mentorship Platform Team
"#,
        mentor_name, mentee_name
    );

    let html = format!(
        "<p>Hi {},</p><p><strong>{}</strong> has submitted their daily report. \
         Please review it and leave feedback on your dashboard.</p>",
        mentor_name, mentee_name
    );

    (text, html)
}

/// Sent when a member receives a direct message
pub fn message_received(recipient_name: &str, sender_name: &str) -> (String, String) {
    let text = format!(
        r#"Hi {},

You have a new message from {}. Log in to read and reply.

Best regards,
Mentorship Platform Team
"#,
        recipient_name, sender_name
    );

    let html = format!(
        "<p>Hi {},</p><p>You have a new message from <strong>{}</strong>. \
         Log in to read and reply.</p>",
        recipient_name, sender_name
    );

    (text, html)
}

/// Morning reminder asking a mentee to plan their day
pub fn morning_reminder(mentee_name: &str) -> (String, String) {
    let text = format!(
        r#"Hi {},

It's time to create your todo list for today!

Please log in to the mentorship platform and create your daily todo
list to track your tasks and goals.

Best regards,
Mentorship Platform Team
"#,
        mentee_name
    );

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
        .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
        .footer {{ margin-top: 30px; padding-top: 20px; border-top: 1px solid #ddd; font-size: 12px; color: #666; }}
    </style>
</head>
<body>
    <div class="container">
        <h2>Good Morning! Time to Plan Your Day</h2>
        <p>Hi {},</p>
        <p>It's time to create your todo list for today!</p>
        <p>Please log in to the mentorship platform and create your daily todo list to track your tasks and goals.</p>
        <div class="footer">
            <p>Best regards,<br>Mentorship Platform Team</p>
        </div>
    </div>
</body>
</html>"#,
        mentee_name
    );

    (text, html)
}

/// Evening reminder asking a mentee to submit their daily report
pub fn evening_reminder(mentee_name: &str) -> (String, String) {
    let text = format!(
        r#"Hi {},

It's time to submit your daily report!

Please log in to the mentorship platform and share:
- Your achievements today
- Any challenges you faced
- What you learned
- Your goals for tomorrow

Best regards,
Mentorship Platform Team
"#,
        mentee_name
    );

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
        .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
        .footer {{ margin-top: 30px; padding-top: 20px; border-top: 1px solid #ddd; font-size: 12px; color: #666; }}
    </style>
</head>
<body>
    <div class="container">
        <h2>How Did Your Day Go?</h2>
        <p>Hi {},</p>
        <p>It's time to submit your daily report! Please log in and share:</p>
        <ul>
            <li>Your achievements today</li>
            <li>Any challenges you faced</li>
            <li>What you learned</li>
            <li>Your goals for tomorrow</li>
        </ul>
        <div class="footer">
            <p>Best regards,<br>Mentorship Platform Team</p>
        </div>
    </div>
</body>
</html>"#,
        mentee_name
    );

    (text, html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_interpolate_names() {
        let (text, html) = mentor_assigned_mentor("Ada", "Grace", "Compilers Inc");
        assert!(text.contains("Ada"));
        assert!(text.contains("Grace"));
        assert!(text.contains("Compilers Inc"));
        assert!(html.contains("<strong>Grace</strong>"));

        let (text, _) = morning_reminder("Grace");
        assert!(text.contains("Hi Grace"));
        assert!(text.contains("todo list"));
    }
}
