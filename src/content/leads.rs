use chrono::NaiveDateTime;

use crate::common::LeadError;
use crate::models::Lead;

/// Timestamp shape shown in the leads table, e.g. `2026-01-16 12:30 PM`.
pub const LEAD_TIME_FORMAT: &str = "%Y-%m-%d %I:%M %p";

/// A contact-form submission before it is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewLead {
    /// Trims every field and rejects submissions that could not be followed
    /// up on.
    pub fn validate(self) -> Result<Self, LeadError> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();
        let phone = self.phone.trim().to_string();

        if name.is_empty() {
            return Err(LeadError::MissingName);
        }
        if !validate_email(&email) {
            return Err(LeadError::InvalidEmail(email));
        }
        if !phone.is_empty() && !validate_phone(&phone) {
            return Err(LeadError::InvalidPhone(phone));
        }

        Ok(Self { name, email, phone })
    }
}

/// Leads shown on the dashboard: seed rows first, then contact submissions in
/// arrival order.
#[derive(Debug, Clone, Default)]
pub struct LeadBook {
    leads: Vec<Lead>,
    next_id: u64,
}

impl LeadBook {
    pub fn new(seed: Vec<Lead>) -> Self {
        let next_id = seed.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        Self {
            leads: seed,
            next_id,
        }
    }

    pub fn record(&mut self, lead: NewLead, at: NaiveDateTime) -> Result<&Lead, LeadError> {
        let lead = lead.validate()?;
        let id = self.next_id;
        self.next_id += 1;

        self.leads.push(Lead {
            id,
            name: lead.name,
            email: lead.email,
            phone: lead.phone,
            updated_at: at.format(LEAD_TIME_FORMAT).to_string(),
        });

        Ok(&self.leads[self.leads.len() - 1])
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}

pub fn validate_email(email: &str) -> bool {
    let email = email.trim();

    if email.is_empty() || email.len() > 254 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 || domain.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain must have at least one dot, and not at either end.
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Digits with optional spacing, dashes, parentheses and a leading `+`.
pub fn validate_phone(phone: &str) -> bool {
    let phone = phone.trim();
    let body = phone.strip_prefix('+').unwrap_or(phone);

    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
    {
        return false;
    }

    let digits = body.chars().filter(char::is_ascii_digit).count();
    (7..=15).contains(&digits)
}
