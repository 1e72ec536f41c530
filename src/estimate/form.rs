use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use yew::Reducible;

/// Why a form refused to move on or submit. Shown inline under the fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a phone number with at least 10 digits")]
    InvalidPhone,
}

pub fn require(label: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::Missing(label));
    }
    Ok(())
}

/// Loose shape check: something before the `@`, a dotted domain after it.
pub fn validate_email(value: &str) -> Result<(), FormError> {
    let value = value.trim();
    require("Email", value)?;
    let (local, domain) = value.split_once('@').ok_or(FormError::InvalidEmail)?;
    let domain_ok = domain
        .split_once('.')
        .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty());
    if local.is_empty() || !domain_ok || value.contains(char::is_whitespace) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_phone(value: &str) -> Result<(), FormError> {
    require("Phone", value)?;
    if value.chars().filter(char::is_ascii_digit).count() < 10 {
        return Err(FormError::InvalidPhone);
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EstimateStep {
    Contact,
    Project,
    Photos,
}

impl EstimateStep {
    pub const ALL: [EstimateStep; 3] = [EstimateStep::Contact, EstimateStep::Project, EstimateStep::Photos];

    pub fn number(self) -> u8 {
        match self {
            EstimateStep::Contact => 1,
            EstimateStep::Project => 2,
            EstimateStep::Photos => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            EstimateStep::Contact => "Get Your Free Estimate",
            EstimateStep::Project => "Project Details",
            EstimateStep::Photos => "Upload Photos",
        }
    }

    fn next(self) -> Self {
        match self {
            EstimateStep::Contact => EstimateStep::Project,
            EstimateStep::Project | EstimateStep::Photos => EstimateStep::Photos,
        }
    }

    fn previous(self) -> Self {
        match self {
            EstimateStep::Contact | EstimateStep::Project => EstimateStep::Contact,
            EstimateStep::Photos => EstimateStep::Project,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactDetails {
    pub fn validate(&self) -> Result<(), FormError> {
        require("Full name", &self.name)?;
        validate_phone(&self.phone)?;
        validate_email(&self.email)?;
        require("Property address", &self.address)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProjectDetails {
    pub service: String,
    pub lot_size: String,
    pub timeline: String,
    pub details: String,
}

/// What gets acknowledged when the estimate dialog is submitted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EstimateRequest {
    pub contact: ContactDetails,
    pub project: ProjectDetails,
    pub photos: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
    Address,
    Service,
    LotSize,
    Timeline,
    Details,
}

/// Draft of the three-step estimate request.
#[derive(Clone, Debug, PartialEq)]
pub struct EstimateForm {
    pub step: EstimateStep,
    pub contact: ContactDetails,
    pub project: ProjectDetails,
    pub photos: Vec<String>,
    pub error: Option<FormError>,
}

impl Default for EstimateForm {
    fn default() -> Self {
        Self {
            step: EstimateStep::Contact,
            contact: ContactDetails::default(),
            project: ProjectDetails::default(),
            photos: Vec::new(),
            error: None,
        }
    }
}

impl EstimateForm {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.contact.name,
            Field::Phone => &mut self.contact.phone,
            Field::Email => &mut self.contact.email,
            Field::Address => &mut self.contact.address,
            Field::Service => &mut self.project.service,
            Field::LotSize => &mut self.project.lot_size,
            Field::Timeline => &mut self.project.timeline,
            Field::Details => &mut self.project.details,
        };
        *slot = value;
    }

    /// Moves forward one step once the current step's fields check out.
    pub fn advance(&mut self) -> Result<(), FormError> {
        if self.step == EstimateStep::Contact {
            self.contact.validate()?;
        }
        self.step = self.step.next();
        self.error = None;
        Ok(())
    }

    pub fn back(&mut self) {
        self.step = self.step.previous();
        self.error = None;
    }

    /// Builds the request from a finished draft.
    pub fn submit(&self) -> Result<EstimateRequest, FormError> {
        self.contact.validate()?;
        Ok(EstimateRequest {
            contact: self.contact.clone(),
            project: self.project.clone(),
            photos: self.photos.clone(),
            submitted_at: Utc::now(),
        })
    }
}

pub enum EstimateAction {
    Set(Field, String),
    Photos(Vec<String>),
    Continue,
    Back,
    Failed(FormError),
    Reset,
}

impl Reducible for EstimateForm {
    type Action = EstimateAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            EstimateAction::Set(field, value) => next.set(field, value),
            EstimateAction::Photos(names) => next.photos = names,
            EstimateAction::Continue => {
                if let Err(e) = next.advance() {
                    next.error = Some(e);
                }
            }
            EstimateAction::Back => next.back(),
            EstimateAction::Failed(e) => next.error = Some(e),
            EstimateAction::Reset => next = EstimateForm::default(),
        }
        Rc::new(next)
    }
}

/// The inline contact form's request.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), FormError> {
        require("Name", &self.name)?;
        validate_phone(&self.phone)?;
        validate_email(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EstimateForm {
        let mut form = EstimateForm::default();
        form.set(Field::Name, "John Smith".into());
        form.set(Field::Phone, "(559) 123-4567".into());
        form.set(Field::Email, "john@company.com".into());
        form.set(Field::Address, "123 Main St, Fresno, CA".into());
        form
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("john@company.com").is_ok());
        assert!(validate_email("  a@b.co ").is_ok());
        assert_eq!(validate_email(""), Err(FormError::Missing("Email")));
        assert_eq!(validate_email("john.company.com"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email("@company.com"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email("john@company"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email("jo hn@company.com"), Err(FormError::InvalidEmail));
    }

    #[test]
    fn phone_needs_ten_digits() {
        assert!(validate_phone("(559) 704-3141").is_ok());
        assert!(validate_phone("+1 559 704 3141").is_ok());
        assert_eq!(validate_phone("704-3141"), Err(FormError::InvalidPhone));
        assert_eq!(validate_phone("   "), Err(FormError::Missing("Phone")));
    }

    #[test]
    fn error_messages_read_naturally() {
        assert_eq!(FormError::Missing("Full name").to_string(), "Full name is required");
    }

    #[test]
    fn contact_step_blocks_until_valid() {
        let mut form = EstimateForm::default();
        assert_eq!(form.advance(), Err(FormError::Missing("Full name")));
        assert_eq!(form.step, EstimateStep::Contact);

        let mut form = filled();
        assert!(form.advance().is_ok());
        assert_eq!(form.step, EstimateStep::Project);
    }

    #[test]
    fn steps_stay_in_range() {
        let mut form = filled();
        form.back();
        assert_eq!(form.step, EstimateStep::Contact);
        for _ in 0..5 {
            form.advance().unwrap();
        }
        assert_eq!(form.step, EstimateStep::Photos);
        assert_eq!(form.step.number(), 3);
    }

    #[test]
    fn back_never_validates_and_clears_error() {
        let mut form = filled();
        form.advance().unwrap();
        form.set(Field::Email, String::new());
        form.error = Some(FormError::InvalidEmail);
        form.back();
        assert_eq!(form.step, EstimateStep::Contact);
        assert_eq!(form.error, None);
    }

    #[test]
    fn reducer_records_failed_continue() {
        let form = Rc::new(EstimateForm::default());
        let form = form.reduce(EstimateAction::Continue);
        assert_eq!(form.step, EstimateStep::Contact);
        assert_eq!(form.error, Some(FormError::Missing("Full name")));
    }

    #[test]
    fn submit_carries_everything_entered() {
        let mut form = filled();
        form.set(Field::Service, "sealcoating".into());
        form.set(Field::LotSize, "medium".into());
        form.photos = vec!["lot.jpg".into()];
        let request = form.submit().unwrap();
        assert_eq!(request.contact.name, "John Smith");
        assert_eq!(request.project.lot_size, "medium");
        assert_eq!(request.photos, vec!["lot.jpg".to_string()]);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["project"]["service"], "sealcoating");
    }

    #[test]
    fn reset_returns_to_first_step_empty() {
        let form = Rc::new(filled());
        let form = form.reduce(EstimateAction::Continue).reduce(EstimateAction::Reset);
        assert_eq!(*form, EstimateForm::default());
    }

    #[test]
    fn contact_request_requires_name_phone_email() {
        let mut request = ContactRequest::default();
        assert_eq!(request.validate(), Err(FormError::Missing("Name")));
        request.name = "Max".into();
        request.phone = "5597043141".into();
        request.email = "max@lor.com".into();
        assert!(request.validate().is_ok());
    }
}
