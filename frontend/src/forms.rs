use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct WebinarRegistration {
    pub name: String,
    pub email: String,
    pub session: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QualificationAnswers {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub estate_size: String,
    pub has_existing_plan: String,
    pub primary_goal: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CallRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub preferred_time: String,
    pub notes: String,
}

/// Everything the site posts to the relay. The `form` tag tells the
/// automation side which intake a submission came from.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum Submission {
    Contact(ContactForm),
    WebinarRegistration(WebinarRegistration),
    Qualification(QualificationAnswers),
    CallRequest(CallRequest),
}

pub const WEBINAR_SESSIONS: &[(&str, &str)] = &[
    ("tuesday_evening", "Tuesday, 7:00 pm ET"),
    ("thursday_noon", "Thursday, 12:00 pm ET"),
    ("saturday_morning", "Saturday, 10:00 am ET"),
];

pub const ESTATE_SIZES: &[(&str, &str)] = &[
    ("under_500k", "Under $500k"),
    ("500k_2m", "$500k – $2M"),
    ("2m_10m", "$2M – $10M"),
    ("over_10m", "Over $10M"),
];

pub const EXISTING_PLAN_OPTIONS: &[(&str, &str)] = &[
    ("none", "No plan yet"),
    ("will_only", "A will, nothing else"),
    ("outdated", "A plan that needs updating"),
    ("current", "A current plan I want reviewed"),
];

pub const CALL_TIMES: &[(&str, &str)] = &[
    ("morning", "Morning (9–12)"),
    ("afternoon", "Afternoon (12–5)"),
    ("evening", "Early evening (5–7)"),
];

fn require(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("Please enter your {}.", label))
    } else {
        Ok(())
    }
}

fn require_choice(value: &str, options: &[(&str, &str)], label: &str) -> Result<(), String> {
    if options.iter().any(|(key, _)| *key == value) {
        Ok(())
    } else {
        Err(format!("Please choose {}.", label))
    }
}

pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn require_email(email: &str) -> Result<(), String> {
    require(email, "email")?;
    if is_plausible_email(email) {
        Ok(())
    } else {
        Err("That email address doesn't look right.".to_string())
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), String> {
        require(&self.name, "name")?;
        require_email(&self.email)?;
        require(&self.message, "message")
    }
}

impl WebinarRegistration {
    pub fn validate(&self) -> Result<(), String> {
        require(&self.name, "name")?;
        require_email(&self.email)?;
        require_choice(&self.session, WEBINAR_SESSIONS, "a session")
    }
}

impl QualificationAnswers {
    pub fn validate(&self) -> Result<(), String> {
        require(&self.name, "name")?;
        require_email(&self.email)?;
        require_choice(&self.estate_size, ESTATE_SIZES, "an estate size")?;
        require_choice(&self.has_existing_plan, EXISTING_PLAN_OPTIONS, "where your planning stands")
    }
}

impl CallRequest {
    pub fn validate(&self) -> Result<(), String> {
        require(&self.name, "name")?;
        require(&self.phone, "phone number")?;
        if !self.email.trim().is_empty() {
            require_email(&self.email)?;
        }
        require_choice(&self.preferred_time, CALL_TIMES, "a time of day")
    }
}

impl Submission {
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Submission::Contact(form) => form.validate(),
            Submission::WebinarRegistration(form) => form.validate(),
            Submission::Qualification(form) => form.validate(),
            Submission::CallRequest(form) => form.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn contact() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "".into(),
            message: "We'd like to review our trust.".into(),
        }
    }

    #[test]
    fn submissions_carry_a_form_tag_next_to_their_fields() {
        let value = serde_json::to_value(Submission::Contact(contact())).unwrap();
        assert_eq!(
            value,
            json!({
                "form": "contact",
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "",
                "message": "We'd like to review our trust."
            })
        );

        let value = serde_json::to_value(Submission::WebinarRegistration(WebinarRegistration {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            session: "thursday_noon".into(),
        }))
        .unwrap();
        assert_eq!(value["form"], json!("webinar_registration"));
    }

    #[test]
    fn email_plausibility() {
        assert!(is_plausible_email("ada@example.com"));
        assert!(is_plausible_email("  ada@mail.example.co.uk "));
        assert!(!is_plausible_email("ada"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("ada@example"));
        assert!(!is_plausible_email("ada@.com"));
        assert!(!is_plausible_email("a da@example.com"));
    }

    #[test]
    fn contact_form_needs_name_email_and_message() {
        assert!(contact().validate().is_ok());

        let mut form = contact();
        form.name = "  ".into();
        assert_eq!(form.validate(), Err("Please enter your name.".to_string()));

        let mut form = contact();
        form.email = "nope".into();
        assert!(form.validate().is_err());

        let mut form = contact();
        form.message.clear();
        assert_eq!(form.validate(), Err("Please enter your message.".to_string()));
    }

    #[test]
    fn webinar_registration_needs_a_listed_session() {
        let mut registration = WebinarRegistration {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            session: "saturday_morning".into(),
        };
        assert!(registration.validate().is_ok());

        registration.session = "sunday".into();
        assert_eq!(registration.validate(), Err("Please choose a session.".to_string()));
    }

    #[test]
    fn qualification_requires_known_choices() {
        let mut answers = QualificationAnswers {
            name: "Grace".into(),
            email: "grace@example.com".into(),
            estate_size: "2m_10m".into(),
            has_existing_plan: "outdated".into(),
            ..Default::default()
        };
        assert!(Submission::Qualification(answers.clone()).validate().is_ok());

        answers.estate_size = "a lot".into();
        assert_eq!(answers.validate(), Err("Please choose an estate size.".to_string()));
    }

    #[test]
    fn call_request_email_is_optional_but_checked_when_given() {
        let mut request = CallRequest {
            name: "Alan".into(),
            phone: "555 0100".into(),
            preferred_time: "morning".into(),
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        request.email = "alan@".into();
        assert!(request.validate().is_err());

        request.email = "alan@example.com".into();
        assert!(request.validate().is_ok());
    }
}
