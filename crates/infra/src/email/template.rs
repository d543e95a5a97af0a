//! Owner notification rendering
//!
//! Submitted values are untrusted input headed for an HTML mail body and a
//! subject header: body values are HTML-escaped, the subject is stripped of
//! line breaks.

use folio_domain::constants::CONTACT_SUBJECT_PREFIX;
use folio_domain::ContactSubmission;

/// Rendered notification parts shared by both transports
#[derive(Debug, Clone)]
pub struct ContactEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Render the owner notification for a contact submission.
pub fn render_contact_email(submission: &ContactSubmission) -> ContactEmail {
    ContactEmail {
        subject: format!("{}{}", CONTACT_SUBJECT_PREFIX, sanitize_header(&submission.name)),
        html: render_html(submission),
        text: render_text(submission),
    }
}

fn render_html(submission: &ContactSubmission) -> String {
    let name = escape_html(&submission.name);
    let email = escape_html(&submission.email);
    let message = escape_html(&submission.message);

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
    <h2 style="color: #8b5cf6;">New Contact Form Submission</h2>
    <div style="background: #f4f4f5; padding: 20px; border-radius: 8px;">
        <p><strong>Name:</strong> {name}</p>
        <p><strong>Email:</strong> {email}</p>
        <p><strong>Message:</strong></p>
        <p style="background: white; padding: 15px; border-radius: 4px;">{message}</p>
    </div>
    <p style="color: #71717a; font-size: 12px; margin-top: 20px;">
        This email was sent from your portfolio contact form.
    </p>
</div>"#
    )
}

fn render_text(submission: &ContactSubmission) -> String {
    format!(
        "New contact form submission\n\nName: {}\nEmail: {}\n\n{}\n\nThis email was sent from your portfolio contact form.\n",
        submission.name, submission.email, submission.message
    )
}

/// Minimal HTML entity escaping for untrusted interpolated values.
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Header values must stay on one line.
fn sanitize_header(value: &str) -> String {
    value.replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_html_escapes_markup_in_all_fields() {
        let email = render_contact_email(&submission(
            "Eve <script>alert(1)</script>",
            "eve@example.com",
            "Hi & bye <b>bold</b>",
        ));

        assert!(email.html.contains("Eve &lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(email.html.contains("Hi &amp; bye &lt;b&gt;bold&lt;/b&gt;"));
        assert!(!email.html.contains("<script>"));
    }

    #[test]
    fn test_subject_carries_the_submitter_name() {
        let email = render_contact_email(&submission("Grace Hopper", "g@example.com", "Hi"));
        assert_eq!(email.subject, "Portfolio Contact: Grace Hopper");
    }

    #[test]
    fn test_subject_line_breaks_are_flattened() {
        let email =
            render_contact_email(&submission("Eve\r\nBcc: spy@example.com", "e@example.com", "x"));

        assert!(!email.subject.contains('\r'));
        assert!(!email.subject.contains('\n'));
        assert!(email.subject.starts_with("Portfolio Contact: Eve"));
    }

    #[test]
    fn test_quotes_cannot_break_out_of_attributes() {
        let email = render_contact_email(&submission(
            r#"Eve" onmouseover="steal()"#,
            "e@example.com",
            "x",
        ));

        assert!(email.html.contains("&quot;"));
        assert!(!email.html.contains(r#"Eve" onmouseover"#));
    }

    #[test]
    fn test_text_part_keeps_raw_values() {
        let email = render_contact_email(&submission("A & B", "ab@example.com", "1 < 2"));
        assert!(email.text.contains("A & B"));
        assert!(email.text.contains("1 < 2"));
    }
}
