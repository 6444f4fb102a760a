//! Person - A contact in the address book
//!
//! Person is an Entity whose identity is its Name: two people with the same
//! name are the "same person" even if their other details differ.
//!
//! A Person is immutable. Every builder consumes `self` and returns the
//! updated value, so an edit always produces a new Person.

use std::collections::HashSet;

use serde::{Serialize, Serializer};

use super::address::Address;
use super::appointment::Appointment;
use super::email::Email;
use super::financial_plan::FinancialPlan;
use super::name::Name;
use super::phone::Phone;
use super::remark::Remark;
use super::tag::Tag;

/// A contact with fully validated fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    next_of_kin_name: Name,
    next_of_kin_phone: Phone,
    appointment: Option<Appointment>,
    #[serde(serialize_with = "serialize_sorted")]
    financial_plans: HashSet<FinancialPlan>,
    #[serde(serialize_with = "serialize_sorted")]
    tags: HashSet<Tag>,
    remark: Remark,
}

/// Sets serialize in name order so output is stable
fn serialize_sorted<S, T>(set: &HashSet<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize + Ord,
{
    let mut items: Vec<&T> = set.iter().collect();
    items.sort();
    serializer.collect_seq(items)
}

impl Person {
    /// Create a new Person with the required fields
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        next_of_kin_name: Name,
        next_of_kin_phone: Phone,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            next_of_kin_name,
            next_of_kin_phone,
            appointment: None,
            financial_plans: HashSet::new(),
            tags: HashSet::new(),
            remark: Remark::default(),
        }
    }

    /// Builder: set appointment
    pub fn with_appointment(mut self, appointment: Option<Appointment>) -> Self {
        self.appointment = appointment;
        self
    }

    /// Builder: set financial plans
    pub fn with_financial_plans(mut self, plans: impl IntoIterator<Item = FinancialPlan>) -> Self {
        self.financial_plans = plans.into_iter().collect();
        self
    }

    /// Builder: set tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Builder: set remark
    pub fn with_remark(mut self, remark: Remark) -> Self {
        self.remark = remark;
        self
    }

    /// Weaker notion of equality used for duplicate detection
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }

    // ========== Getters ==========

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn next_of_kin_name(&self) -> &Name {
        &self.next_of_kin_name
    }

    pub fn next_of_kin_phone(&self) -> &Phone {
        &self.next_of_kin_phone
    }

    pub fn appointment(&self) -> Option<&Appointment> {
        self.appointment.as_ref()
    }

    pub fn financial_plans(&self) -> &HashSet<FinancialPlan> {
        &self.financial_plans
    }

    pub fn tags(&self) -> &HashSet<Tag> {
        &self.tags
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }
}

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Next-of-kin: {}; Next-of-kin Phone: {}",
            self.name,
            self.phone,
            self.email,
            self.address,
            self.next_of_kin_name,
            self.next_of_kin_phone
        )?;
        if let Some(appointment) = &self.appointment {
            write!(f, "; Appointment: {}", appointment)?;
        }
        Ok(())
    }
}
